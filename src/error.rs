//! Error types for the unprofile library.

use std::io;
use thiserror::Error;

/// Result type alias for unprofile operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur around extraction.
///
/// Extraction itself is infallible: any text, however malformed, maps to a
/// best-effort (possibly mostly-empty) [`crate::ProfileRecord`]. Errors only
/// arise at the edges, when reading snapshot files, serializing output, or
/// loading configuration.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Error serializing or deserializing JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A configuration file could not be interpreted.
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Generic error with message.
    #[error("{0}")]
    Other(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::Config("missing session id".to_string());
        assert_eq!(err.to_string(), "Invalid configuration: missing session id");

        let err = Error::Other("boom".to_string());
        assert_eq!(err.to_string(), "boom");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }
}
