//! Domain-level error types for follow-diff.
//!
//! All errors are typed with `thiserror`. Malformed export entries are never
//! errors; only file loading, configuration and empty inputs surface here.

use thiserror::Error;

/// Application-level errors.
#[derive(Error, Debug)]
pub enum AppError {
    /// Extraction produced no usernames for one or both inputs.
    #[error("No usernames found in the files")]
    NoUsernames,

    /// Invalid user-supplied data (bad argument values, etc.).
    #[error("Invalid data: {message}")]
    InvalidData { message: String },

    /// JSON parsing or serialization failed.
    #[error("JSON parse error: {message}")]
    JsonParse {
        message: String,
        #[source]
        source: Option<serde_json::Error>,
    },

    /// Configuration or environment error.
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// IO operation failed.
    #[error("IO error: {message}")]
    Io {
        message: String,
        #[source]
        source: Option<std::io::Error>,
    },
}

impl AppError {
    /// Create a JSON parse error.
    pub fn json_parse(err: serde_json::Error) -> Self {
        Self::JsonParse {
            message: err.to_string(),
            source: Some(err),
        }
    }

    /// Create an IO error with context.
    pub fn io(message: impl Into<String>, err: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source: Some(err),
        }
    }
}

/// Result type alias using `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_usernames_message() {
        assert_eq!(
            AppError::NoUsernames.to_string(),
            "No usernames found in the files"
        );
    }

    #[test]
    fn test_io_error_keeps_context() {
        let err = AppError::io(
            "Failed to read following.json",
            std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        );
        assert_eq!(err.to_string(), "IO error: Failed to read following.json");
        assert!(std::error::Error::source(&err).is_some());
    }
}
