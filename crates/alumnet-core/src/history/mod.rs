//! Search history
//!
//! An ordered list of past queries, most recent first, capped and free of
//! exact duplicates. Persistence goes through [`HistoryStore`].

mod storage;

pub use storage::{
    HISTORY_KEY, HistoryStore, LocalHistoryStore, MemoryHistoryStore, StorageError, StorageResult,
};

/// Default number of remembered queries
pub const DEFAULT_CAPACITY: usize = 10;

/// Most-recent-first list of past queries
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchHistory {
    entries: Vec<String>,
    capacity: usize,
}

impl Default for SearchHistory {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

impl SearchHistory {
    /// Create an empty history holding at most `capacity` entries
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: Vec::new(),
            capacity: capacity.max(1),
        }
    }

    /// Build a history from stored entries, dropping duplicates and overflow
    pub fn from_entries(entries: Vec<String>, capacity: usize) -> Self {
        let mut history = Self::new(capacity);
        // Stored order is most-recent-first, so replay oldest first.
        for entry in entries.into_iter().rev() {
            history.record(entry);
        }
        history
    }

    /// Put `query` at the front, moving it if already present
    pub fn record(&mut self, query: impl Into<String>) {
        let query = query.into();
        self.entries.retain(|existing| *existing != query);
        self.entries.insert(0, query);
        self.entries.truncate(self.capacity);
    }

    /// Remove one entry. Returns whether anything was removed.
    pub fn remove(&mut self, query: &str) -> bool {
        let before = self.entries.len();
        self.entries.retain(|existing| existing != query);
        self.entries.len() != before
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.entries.get(index).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn to_vec(&self) -> Vec<String> {
        self.entries.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_puts_newest_first() {
        let mut history = SearchHistory::default();
        history.record("priya");
        history.record("data science");
        assert_eq!(history.entries(), &["data science", "priya"]);
    }

    #[test]
    fn test_record_existing_moves_to_front() {
        let mut history = SearchHistory::default();
        history.record("alpha");
        history.record("beta");
        history.record("gamma");
        history.record("alpha");
        assert_eq!(history.entries(), &["alpha", "gamma", "beta"]);
        assert_eq!(history.len(), 3);
    }

    #[test]
    fn test_capacity_is_enforced() {
        let mut history = SearchHistory::default();
        for i in 0..25 {
            history.record(format!("query {}", i));
        }
        assert_eq!(history.len(), DEFAULT_CAPACITY);
        assert_eq!(history.get(0), Some("query 24"));
        assert_eq!(history.get(9), Some("query 15"));
    }

    #[test]
    fn test_dedup_is_exact_match() {
        let mut history = SearchHistory::default();
        history.record("Priya");
        history.record("priya");
        assert_eq!(history.len(), 2);
    }

    #[test]
    fn test_from_entries_normalises() {
        let stored = vec![
            "a1".to_string(),
            "b2".to_string(),
            "a1".to_string(),
            "c3".to_string(),
        ];
        let history = SearchHistory::from_entries(stored, 2);
        assert_eq!(history.entries(), &["a1", "b2"]);
    }

    #[test]
    fn test_remove_and_clear() {
        let mut history = SearchHistory::default();
        history.record("one");
        history.record("two");
        assert!(history.remove("one"));
        assert!(!history.remove("one"));
        assert_eq!(history.entries(), &["two"]);
        history.clear();
        assert!(history.is_empty());
    }
}
