//! Top-level error type for the command line tool.

use thiserror::Error;

/// Result type alias for CLI operations
pub type Result<T> = std::result::Result<T, AppError>;

/// Errors that abort a run
#[derive(Error, Debug)]
pub enum AppError {
    /// Terminal output failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Tree merge aborted
    #[error("{0}")]
    Merge(#[from] crate::universal::Error),
}
