//! Configuration data model

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

use crate::error::{AlumnetError, AlumnetResult};

/// Default API origin for a locally running backend
pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";

/// Main configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AlumnetConfig {
    pub api: ApiConfig,
    pub search: SearchConfig,
    pub history: HistoryConfig,
    pub logging: LoggingConfig,
}

impl AlumnetConfig {
    /// Reject values the search client cannot work with
    pub fn validate(&self) -> AlumnetResult<()> {
        if self.api.base_url.trim().is_empty() {
            return Err(AlumnetError::invalid_input_field(
                "API base URL must not be empty",
                "api.base_url",
            ));
        }
        if self.search.per_collection_limit == 0 {
            return Err(AlumnetError::invalid_input_field(
                "Per-collection limit must be at least 1",
                "search.per_collection_limit",
            ));
        }
        if self.search.min_query_len == 0 {
            return Err(AlumnetError::invalid_input_field(
                "Minimum query length must be at least 1",
                "search.min_query_len",
            ));
        }
        if self.history.capacity == 0 {
            return Err(AlumnetError::invalid_input_field(
                "History capacity must be at least 1",
                "history.capacity",
            ));
        }
        Ok(())
    }

    /// Merge with another config; set values in `other` win
    pub fn merge(&mut self, other: AlumnetConfig) {
        self.api.merge(other.api);
        self.search = other.search;
        self.history.merge(other.history);
        self.logging.merge(other.logging);
    }
}

/// Backend API settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Origin the `/api/...` paths are resolved against
    pub base_url: String,
    /// Bearer token forwarded on every search request
    pub auth_token: Option<String>,
    /// Per-request timeout. None leaves requests unbounded.
    pub request_timeout_secs: Option<u64>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            auth_token: None,
            request_timeout_secs: None,
        }
    }
}

impl ApiConfig {
    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }

    fn merge(&mut self, other: ApiConfig) {
        if !other.base_url.is_empty() {
            self.base_url = other.base_url;
        }
        if other.auth_token.is_some() {
            self.auth_token = other.auth_token;
        }
        if other.request_timeout_secs.is_some() {
            self.request_timeout_secs = other.request_timeout_secs;
        }
    }
}

/// Search behavior knobs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Quiet period after the last keystroke before a search fires
    pub debounce_ms: u64,
    /// Top-N requested from each collection
    pub per_collection_limit: usize,
    /// Trimmed length at which keystrokes start scheduling searches
    pub min_query_len: usize,
    /// Trimmed length a query needs before it can enter history
    pub history_min_len: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            debounce_ms: 300,
            per_collection_limit: 5,
            min_query_len: 2,
            history_min_len: 3,
        }
    }
}

impl SearchConfig {
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}

/// Search history settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HistoryConfig {
    /// Maximum number of remembered queries
    pub capacity: usize,
    /// Override for the history file location
    pub path: Option<PathBuf>,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            capacity: 10,
            path: None,
        }
    }
}

impl HistoryConfig {
    fn merge(&mut self, other: HistoryConfig) {
        self.capacity = other.capacity;
        if other.path.is_some() {
            self.path = other.path;
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,
    /// Log format (pretty, json)
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}

impl LoggingConfig {
    fn merge(&mut self, other: LoggingConfig) {
        if !other.level.is_empty() {
            self.level = other.level;
        }
        if !other.format.is_empty() {
            self.format = other.format;
        }
    }
}
