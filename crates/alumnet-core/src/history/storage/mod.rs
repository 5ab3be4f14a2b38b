//! Search history storage abstraction and implementations
//!
//! Provides trait-based storage for history persistence with local
//! filesystem and in-memory implementations.

mod local;
mod memory;

pub use local::LocalHistoryStore;
pub use memory::MemoryHistoryStore;

use async_trait::async_trait;
use thiserror::Error;

/// Fixed key the history is stored under
pub const HISTORY_KEY: &str = "alumni_search_history";

/// Storage operation errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Storage path not available")]
    PathUnavailable,
}

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

/// History storage trait for different backends
#[async_trait]
pub trait HistoryStore: Send + Sync {
    /// Load stored entries, most recent first. Nothing stored yields an empty list.
    async fn load(&self) -> StorageResult<Vec<String>>;

    /// Replace stored entries
    async fn save(&self, entries: &[String]) -> StorageResult<()>;

    /// Remove everything stored
    async fn clear(&self) -> StorageResult<()> {
        self.save(&[]).await
    }
}
