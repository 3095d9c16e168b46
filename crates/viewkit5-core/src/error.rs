//! Error handling for ViewKit5
//!
//! A unified error type covering the layers that can actually fail:
//! settings persistence and file I/O. The view-state model itself has no
//! recoverable runtime errors; its setters are total and absent lookups
//! return `Option`.
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Main error type for ViewKit5
///
/// The primary error type used in public APIs. Crate-local error types
/// (such as the settings crate's `SettingsError`) convert into this.
#[derive(Error, Debug)]
pub enum Error {
    /// Settings persistence error
    #[error("Settings error: {0}")]
    Settings(String),

    /// Standard I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an error from a string message
    pub fn other(msg: impl Into<String>) -> Self {
        Error::Other(msg.into())
    }

    /// Create a settings error from a string message
    pub fn settings(msg: impl Into<String>) -> Self {
        Error::Settings(msg.into())
    }

    /// Check if this is a settings error
    pub fn is_settings_error(&self) -> bool {
        matches!(self, Error::Settings(_))
    }
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::settings("default record unreadable");
        assert_eq!(err.to_string(), "Settings error: default record unreadable");

        let err = Error::other("unexpected");
        assert_eq!(err.to_string(), "unexpected");
    }

    #[test]
    fn test_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
        assert!(!err.is_settings_error());
    }
}
