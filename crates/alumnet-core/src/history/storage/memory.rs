//! In-memory history storage, for tests and ephemeral sessions

use super::{HistoryStore, StorageResult};
use async_trait::async_trait;
use parking_lot::Mutex;

#[derive(Debug, Default)]
pub struct MemoryHistoryStore {
    entries: Mutex<Vec<String>>,
}

impl MemoryHistoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with pre-populated entries
    pub fn with_entries(entries: Vec<String>) -> Self {
        Self {
            entries: Mutex::new(entries),
        }
    }

    /// What is currently stored
    pub fn snapshot(&self) -> Vec<String> {
        self.entries.lock().clone()
    }
}

#[async_trait]
impl HistoryStore for MemoryHistoryStore {
    async fn load(&self) -> StorageResult<Vec<String>> {
        Ok(self.entries.lock().clone())
    }

    async fn save(&self, entries: &[String]) -> StorageResult<()> {
        *self.entries.lock() = entries.to_vec();
        Ok(())
    }
}
