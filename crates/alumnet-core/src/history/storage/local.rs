//! Local filesystem history storage
//!
//! Stores the history as a JSON array in the user's home directory.

use super::{HISTORY_KEY, HistoryStore, StorageError, StorageResult};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::debug;

/// Local filesystem history storage
///
/// History lives in:
/// - `~/.alumnet/alumni_search_history.json` (default)
/// - Custom path if specified
pub struct LocalHistoryStore {
    path: PathBuf,
}

impl LocalHistoryStore {
    /// Create storage at the default location
    pub fn new() -> StorageResult<Self> {
        let path = dirs::home_dir()
            .ok_or(StorageError::PathUnavailable)?
            .join(".alumnet")
            .join(format!("{}.json", HISTORY_KEY));

        Ok(Self { path })
    }

    /// Create storage backed by a specific file
    pub fn with_path(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn ensure_parent(&self) -> StorageResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).await?;
        }
        Ok(())
    }
}

#[async_trait]
impl HistoryStore for LocalHistoryStore {
    async fn load(&self) -> StorageResult<Vec<String>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(&self.path).await?;
        if content.trim().is_empty() {
            return Ok(Vec::new());
        }

        let entries: Vec<String> = serde_json::from_str(&content)?;
        debug!("Loaded {} history entries from {:?}", entries.len(), self.path);
        Ok(entries)
    }

    async fn save(&self, entries: &[String]) -> StorageResult<()> {
        self.ensure_parent().await?;

        let content = serde_json::to_string(entries)?;
        fs::write(&self.path, content).await?;
        debug!("Saved {} history entries to {:?}", entries.len(), self.path);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_test_store() -> (LocalHistoryStore, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let store = LocalHistoryStore::with_path(temp_dir.path().join("nested").join("history.json"));
        (store, temp_dir)
    }

    #[tokio::test]
    async fn test_load_missing_file_is_empty() {
        let (store, _temp) = create_test_store();
        assert!(store.load().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_save_and_load() {
        let (store, _temp) = create_test_store();
        let entries = vec!["priya".to_string(), "machine learning".to_string()];

        store.save(&entries).await.unwrap();
        assert_eq!(store.load().await.unwrap(), entries);

        let raw = std::fs::read_to_string(store.path()).unwrap();
        assert_eq!(raw, r#"["priya","machine learning"]"#);
    }

    #[tokio::test]
    async fn test_clear() {
        let (store, _temp) = create_test_store();
        store.save(&["one".to_string()]).await.unwrap();
        store.clear().await.unwrap();
        assert!(store.load().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_corrupt_file_is_an_error() {
        let (store, _temp) = create_test_store();
        std::fs::create_dir_all(store.path().parent().unwrap()).unwrap();
        std::fs::write(store.path(), "{not a list").unwrap();

        let err = store.load().await.unwrap_err();
        assert!(matches!(err, StorageError::Serialization(_)));
    }
}
