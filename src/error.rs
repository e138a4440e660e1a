//! Error types for SmartPark
//!
//! Library code returns `SmartparkResult`; the binary wraps it in `anyhow`.
//! Ordinary car park outcomes (full lot, duplicate plate, unknown plate) are
//! not errors and never appear here.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for SmartPark operations
pub type SmartparkResult<T> = Result<T, SmartparkError>;

/// Main error type for SmartPark operations
#[derive(Error, Debug)]
pub enum SmartparkError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Appending to the audit log failed
    #[error("failed to append to audit log {path}: {source}")]
    LogWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration file could not be parsed
    #[error("invalid configuration in {file}: {message}")]
    ConfigParse { file: PathBuf, message: String },
}
