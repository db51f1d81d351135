//! Error types for fintrack core operations.
//!
//! Errors are descriptive at the core level; the CLI layer maps these
//! to user-friendly messages.

use thiserror::Error;

/// Result type alias for fintrack operations.
pub type Result<T> = std::result::Result<T, FintrackError>;

/// Core error type for fintrack operations.
#[derive(Debug, Error)]
pub enum FintrackError {
    /// Storage backend error
    #[error("Storage error: {0}")]
    Storage(String),

    /// Data validation error
    #[error("Validation error: {0}")]
    Validation(String),
}

impl From<std::io::Error> for FintrackError {
    fn from(err: std::io::Error) -> Self {
        FintrackError::Storage(err.to_string())
    }
}

impl From<serde_json::Error> for FintrackError {
    fn from(err: serde_json::Error) -> Self {
        FintrackError::Validation(err.to_string())
    }
}
