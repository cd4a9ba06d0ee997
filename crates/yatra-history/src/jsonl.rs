use std::fs::{self, File, OpenOptions};
use std::io::{BufRead, BufReader, ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use yatra_types::HistoryRecord;

use crate::{HistoryError, HistoryStore, lock};

/// Append-only JSON-lines file, one record per line
pub struct JsonlHistory {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl JsonlHistory {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> Result<Vec<HistoryRecord>, HistoryError> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        let mut records = Vec::new();
        for (line_no, line) in BufReader::new(file).lines().enumerate() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            match serde_json::from_str(&line) {
                Ok(record) => records.push(record),
                Err(e) => tracing::warn!(
                    "Skipping malformed history line {} in {}: {}",
                    line_no + 1,
                    self.path.display(),
                    e
                ),
            }
        }

        Ok(records)
    }
}

impl HistoryStore for JsonlHistory {
    fn append(&self, record: HistoryRecord) -> Result<(), HistoryError> {
        let line = serde_json::to_string(&record)?;

        let _guard = lock(&self.write_lock);
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        writeln!(file, "{line}")?;

        tracing::debug!("History record {} written", record.id);
        Ok(())
    }

    fn recent(&self, limit: usize) -> Result<Vec<HistoryRecord>, HistoryError> {
        let _guard = lock(&self.write_lock);
        let mut records = self.read_all()?;
        records.reverse();
        records.truncate(limit);
        Ok(records)
    }

    fn delete(&self, id: &str) -> Result<bool, HistoryError> {
        let _guard = lock(&self.write_lock);
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(false),
            Err(e) => return Err(e.into()),
        };

        // Unparseable lines are kept as they are
        let mut removed = false;
        let mut kept = String::with_capacity(contents.len());
        for line in contents.lines() {
            let matches = serde_json::from_str::<HistoryRecord>(line)
                .map(|record| record.id == id)
                .unwrap_or(false);
            if matches {
                removed = true;
            } else {
                kept.push_str(line);
                kept.push('\n');
            }
        }

        if removed {
            fs::write(&self.path, kept)?;
            tracing::debug!("History record {} deleted", id);
        }
        Ok(removed)
    }

    fn clear(&self) -> Result<(), HistoryError> {
        let _guard = lock(&self.write_lock);
        match fs::remove_file(&self.path) {
            Err(e) if e.kind() != ErrorKind::NotFound => Err(e.into()),
            _ => Ok(()),
        }
    }
}
