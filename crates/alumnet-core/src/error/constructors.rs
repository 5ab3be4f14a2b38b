//! Constructor methods for AlumnetError

use super::types::AlumnetError;

impl AlumnetError {
    /// Create a new configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
            context: None,
        }
    }

    /// Create a configuration error with context
    pub fn config_with_context(message: impl Into<String>, context: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
            context: Some(context.into()),
        }
    }

    /// Create an HTTP error for a non-success status
    pub fn http_with_status(
        message: impl Into<String>,
        url: impl Into<String>,
        status_code: u16,
    ) -> Self {
        Self::Http {
            message: message.into(),
            url: Some(url.into()),
            status_code: Some(status_code),
            context: None,
        }
    }

    /// Create a new JSON error
    pub fn json(message: impl Into<String>) -> Self {
        Self::Json {
            message: message.into(),
            context: None,
        }
    }

    /// Create a new IO error
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
            path: None,
            context: None,
        }
    }

    /// Create an IO error with path
    pub fn io_with_path(message: impl Into<String>, path: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
            path: Some(path.into()),
            context: None,
        }
    }

    /// Create an invalid input error naming the offending field
    pub fn invalid_input_field(message: impl Into<String>, field: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
            field: Some(field.into()),
            context: None,
        }
    }

    /// Attach context to an existing error
    pub fn with_context(mut self, new_context: impl Into<String>) -> Self {
        match &mut self {
            Self::Config { context, .. }
            | Self::Http { context, .. }
            | Self::Json { context, .. }
            | Self::Io { context, .. }
            | Self::InvalidInput { context, .. } => *context = Some(new_context.into()),
        }
        self
    }
}
