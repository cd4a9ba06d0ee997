use std::path::PathBuf;
use std::sync::{Mutex, MutexGuard};

use yatra_config::history::HistoryConfig;
use yatra_types::HistoryRecord;

pub mod jsonl;
pub mod memory;

pub use jsonl::JsonlHistory;
pub use memory::MemoryHistory;

#[derive(Debug, thiserror::Error)]
pub enum HistoryError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Write side of translation history, plus a newest-first read for display
pub trait HistoryStore: Send + Sync {
    fn append(&self, record: HistoryRecord) -> Result<(), HistoryError>;

    /// Up to `limit` records, newest first
    fn recent(&self, limit: usize) -> Result<Vec<HistoryRecord>, HistoryError>;

    /// Remove one record by id. `false` when no record has that id.
    fn delete(&self, id: &str) -> Result<bool, HistoryError>;

    fn clear(&self) -> Result<(), HistoryError>;
}

/// Store selected by config: a JSON-lines file when a path is set, memory otherwise
pub fn open_store(config: &HistoryConfig) -> Box<dyn HistoryStore> {
    match &config.path {
        Some(path) => {
            tracing::info!("History file: {}", path);
            Box::new(JsonlHistory::new(PathBuf::from(path)))
        }
        None => Box::new(MemoryHistory::new(config.capacity)),
    }
}

/// Lock, ignoring poisoning
fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

#[cfg(test)]
pub(crate) fn record(text: &str, translation: &str) -> HistoryRecord {
    use yatra_types::{ResolutionMethod, TextSource};

    HistoryRecord {
        id: format!("id-{text}"),
        source_text: text.to_string(),
        translated_text: translation.to_string(),
        source_language: "en".to_string(),
        target_language: "es".to_string(),
        source: TextSource::Manual,
        method: ResolutionMethod::Exact,
        created_at_ms: 1_700_000_000_000,
    }
}
