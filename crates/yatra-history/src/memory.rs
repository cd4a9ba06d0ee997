use std::collections::VecDeque;
use std::sync::Mutex;

use yatra_types::HistoryRecord;

use crate::{HistoryError, HistoryStore, lock};

/// Bounded in-process history. Oldest records are dropped past `capacity`.
pub struct MemoryHistory {
    capacity: usize,
    records: Mutex<VecDeque<HistoryRecord>>,
}

impl MemoryHistory {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            records: Mutex::new(VecDeque::with_capacity(capacity)),
        }
    }

    pub fn len(&self) -> usize {
        lock(&self.records).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl HistoryStore for MemoryHistory {
    fn append(&self, record: HistoryRecord) -> Result<(), HistoryError> {
        let mut records = lock(&self.records);
        records.push_front(record);
        records.truncate(self.capacity);
        Ok(())
    }

    fn recent(&self, limit: usize) -> Result<Vec<HistoryRecord>, HistoryError> {
        Ok(lock(&self.records).iter().take(limit).cloned().collect())
    }

    fn delete(&self, id: &str) -> Result<bool, HistoryError> {
        let mut records = lock(&self.records);
        let before = records.len();
        records.retain(|record| record.id != id);
        Ok(records.len() < before)
    }

    fn clear(&self) -> Result<(), HistoryError> {
        lock(&self.records).clear();
        Ok(())
    }
}
