//! Core error types for Alumnet

use thiserror::Error;

/// Result type alias for Alumnet operations
pub type AlumnetResult<T> = Result<T, AlumnetError>;

/// Main error type for Alumnet
#[derive(Error, Debug, Clone)]
pub enum AlumnetError {
    /// Configuration related errors
    #[error("Configuration error: {message}")]
    Config {
        message: String,
        context: Option<String>,
    },

    /// Transport failures and non-success HTTP statuses
    #[error("HTTP error: {message}")]
    Http {
        message: String,
        url: Option<String>,
        status_code: Option<u16>,
        context: Option<String>,
    },

    /// Response bodies that could not be decoded
    #[error("JSON error: {message}")]
    Json {
        message: String,
        context: Option<String>,
    },

    /// IO errors
    #[error("IO error: {message}")]
    Io {
        message: String,
        path: Option<String>,
        context: Option<String>,
    },

    /// Invalid input errors
    #[error("Invalid input: {message}")]
    InvalidInput {
        message: String,
        field: Option<String>,
        context: Option<String>,
    },
}
