//! From trait implementations for AlumnetError conversions

use super::types::AlumnetError;

impl From<std::io::Error> for AlumnetError {
    fn from(error: std::io::Error) -> Self {
        Self::io(error.to_string())
    }
}

impl From<serde_json::Error> for AlumnetError {
    fn from(error: serde_json::Error) -> Self {
        Self::json(error.to_string())
    }
}

impl From<reqwest::Error> for AlumnetError {
    fn from(error: reqwest::Error) -> Self {
        // Body decoding failures belong with malformed JSON, not with transport.
        if error.is_decode() {
            return Self::json(error.to_string());
        }
        let status_code = error.status().map(|s| s.as_u16());
        let url = error.url().map(|u| u.to_string());
        Self::Http {
            message: error.to_string(),
            url,
            status_code,
            context: None,
        }
    }
}
