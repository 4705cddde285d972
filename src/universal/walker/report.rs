//! Outcome of a merge run.

use std::path::PathBuf;

/// Why a primary entry produced no destination entry.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum SkipReason {
    /// The merge candidate has no file at the same relative path in the
    /// secondary tree.
    MissingCounterpart {
        /// Expected counterpart location
        counterpart: PathBuf,
    },
}

/// A skipped primary entry.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SkippedEntry {
    /// Path relative to the tree roots
    pub relative: PathBuf,
    pub reason: SkipReason,
}

/// A merge the external tool did not complete.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MergeFailure {
    /// Path relative to the tree roots
    pub relative: PathBuf,
    /// Rendered tool error
    pub message: String,
}

/// Per-run counters and the entries that need attention.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct MergeReport {
    pub directories: usize,
    pub copied: usize,
    pub symlinks: usize,
    pub merged: usize,
    /// Entries copied from the secondary tree because the primary lacks them
    pub secondary_only: usize,
    pub skipped: Vec<SkippedEntry>,
    pub failures: Vec<MergeFailure>,
}

impl MergeReport {
    /// True when every merge candidate that had a counterpart was merged.
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }

    /// One-line summary for logs and terminal output.
    pub fn summary(&self) -> String {
        format!(
            "{} merged, {} copied, {} symlinks, {} directories, {} secondary-only, {} skipped, {} failed",
            self.merged,
            self.copied,
            self.symlinks,
            self.directories,
            self.secondary_only,
            self.skipped.len(),
            self.failures.len()
        )
    }
}
