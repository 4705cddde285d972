//! Error types for tree merging operations.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Result type alias for merge operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while mirroring and merging architecture trees.
#[derive(Error, Debug)]
pub enum Error {
    /// Filesystem operation failed on a specific path.
    #[error("{context}: {}: {source}", .path.display())]
    Fs {
        /// What was being attempted
        context: &'static str,
        /// Path the operation failed on
        path: PathBuf,
        /// Underlying IO error
        #[source]
        source: std::io::Error,
    },

    /// Unattributed IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Directory traversal failed
    #[error("failed to walk directory tree: {0}")]
    WalkDir(#[from] walkdir::Error),

    /// Entry produced by the walker did not lie under its root
    #[error("path is outside of its source tree: {0}")]
    StripPrefix(#[from] std::path::StripPrefixError),

    /// The external merge tool could not be run or exited unsuccessfully.
    #[error(
        "merge tool failed for {} (exit status: {}): {stderr}",
        .destination.display(),
        .status.map_or_else(|| "none".to_string(), |c| c.to_string())
    )]
    MergeTool {
        /// Universal binary that was being produced
        destination: PathBuf,
        /// Exit code, `None` when the tool never ran or was killed by a signal
        status: Option<i32>,
        /// Captured standard error (or spawn failure message)
        stderr: String,
    },

    /// Catch-all with a message
    #[error("{0}")]
    GenericError(String),
}

/// Attaches path context to IO results.
pub trait ErrorExt<T> {
    /// Wraps the error as [`Error::Fs`] naming `path`.
    fn fs_context(self, context: &'static str, path: impl AsRef<Path>) -> Result<T>;
}

impl<T> ErrorExt<T> for std::io::Result<T> {
    fn fs_context(self, context: &'static str, path: impl AsRef<Path>) -> Result<T> {
        self.map_err(|source| Error::Fs {
            context,
            path: path.as_ref().to_path_buf(),
            source,
        })
    }
}

/// Converts a missing value into [`Error::GenericError`].
pub trait Context<T> {
    /// Attaches a static message.
    fn context(self, msg: &str) -> Result<T>;
}

impl<T> Context<T> for Option<T> {
    fn context(self, msg: &str) -> Result<T> {
        self.ok_or_else(|| Error::GenericError(msg.to_string()))
    }
}

/// Returns early with an [`Error::GenericError`] built from a format string.
#[macro_export]
macro_rules! bail {
    ($($arg:tt)*) => {
        return Err($crate::universal::Error::GenericError(format!($($arg)*)))
    };
}
