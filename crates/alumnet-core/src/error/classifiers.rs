//! Error classification used by the search dispatcher

use super::types::AlumnetError;

impl AlumnetError {
    /// Stable code for programmatic handling and structured logs
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Config { .. } => "ALUMNET_CONFIG",
            Self::Http { .. } => "ALUMNET_HTTP",
            Self::Json { .. } => "ALUMNET_JSON",
            Self::Io { .. } => "ALUMNET_IO",
            Self::InvalidInput { .. } => "ALUMNET_INVALID_INPUT",
        }
    }

    /// Whether a collection lookup failing this way should simply contribute
    /// no results while its siblings carry on.
    ///
    /// Transport failures and non-success statuses degrade. Anything else
    /// (malformed bodies in particular) empties the whole search.
    pub fn is_degradable(&self) -> bool {
        matches!(self, Self::Http { .. })
    }

    /// HTTP status attached to the error, if any
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Http { status_code, .. } => *status_code,
            _ => None,
        }
    }
}
