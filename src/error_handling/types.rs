//! Error type definitions.
//!
//! This module defines all error types used throughout the application.

use std::path::PathBuf;

use log::SetLoggerError;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),
}

/// Error types for the export run.
///
/// A line-count mismatch is deliberately absent: verification is report-only
/// and never surfaces as an error.
#[derive(Error, Debug)]
pub enum ExportError {
    /// The output directory does not exist. Raised before any file or
    /// connection is opened.
    #[error("output directory does not exist: {}", .0.display())]
    OutputDirMissing(PathBuf),

    /// Database connection or query failure at any stage.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Sitemap file write or read-back failure.
    #[error("sitemap file error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_dir_message_names_the_path() {
        let err = ExportError::OutputDirMissing(PathBuf::from("/no/such/dir"));
        assert_eq!(
            err.to_string(),
            "output directory does not exist: /no/such/dir"
        );
    }

    #[test]
    fn test_io_error_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: ExportError = io.into();
        assert!(err.to_string().starts_with("sitemap file error"));
    }
}
