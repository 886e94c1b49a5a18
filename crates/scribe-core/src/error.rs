//! Error types for Scribe

use std::path::PathBuf;

/// Scribe error type
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Config error: {0}")]
    ConfigError(String),

    #[error("Malformed config file '{path}': {source}")]
    ConfigParseError {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid date format pattern: {0}")]
    DateFormatError(String),

    #[error("Failed to create log directory '{path}': {source}")]
    DirectoryError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to rotate log file '{path}': {source}")]
    RotationError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to append to log file '{path}': {source}")]
    AppendError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// Result type alias for Scribe
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Error::ConfigError(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::DateFormatError("%Q".to_string());
        assert_eq!(err.to_string(), "Invalid date format pattern: %Q");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::IoError(_)));
    }
}
