//! Creation of universal binaries from two single-architecture files.
//!
//! The walker only depends on the [`UniversalMerge`] capability. The
//! production implementation is [`LipoMerger`], which shells out to Apple's
//! `lipo`; tests plug in their own implementations.

mod lipo;
mod tool_detection;

pub use lipo::LipoMerger;
pub use tool_detection::detect_merge_tool;

use crate::universal::Result;
use std::future::Future;
use std::path::Path;

/// Combines two architecture-specific files into one universal file.
pub trait UniversalMerge {
    /// Merges `primary` and `secondary` into `destination`.
    ///
    /// The parent directory of `destination` already exists. A failure is
    /// reported as [`Error::MergeTool`](crate::universal::Error::MergeTool)
    /// so the caller can record it and move on to the next entry.
    fn merge(
        &self,
        primary: &Path,
        secondary: &Path,
        destination: &Path,
    ) -> impl Future<Output = Result<()>>;
}
