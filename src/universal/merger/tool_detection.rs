//! External merge tool availability checking.

use std::ffi::OsStr;
use std::path::PathBuf;

/// Resolves the merge tool on `PATH` (or as given, when it is a path).
///
/// Called once before the walk. A missing tool is only a warning: every
/// merge will then fail on its own and be reported per file, while plain
/// copies still go through.
pub fn detect_merge_tool(program: &OsStr) -> Option<PathBuf> {
    match which::which(program) {
        Ok(path) => {
            log::debug!("Found merge tool at: {}", path.display());
            Some(path)
        }
        Err(e) => {
            log::warn!(
                "{} not found: {}. Universal binaries cannot be created; \
                 install the Xcode Command Line Tools or pass --lipo.",
                program.to_string_lossy(),
                e
            );
            None
        }
    }
}
