//! Path correspondence between the primary, secondary and destination trees.
//!
//! Pure path arithmetic, nothing here touches the filesystem.

use std::path::{Path, PathBuf};

/// The three roots of a merge run.
///
/// A relative path names the same entry under every root: the destination
/// mirrors the primary tree, and a merge candidate's counterpart sits at the
/// identical relative path under the secondary tree.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TreeRoots {
    primary: PathBuf,
    secondary: PathBuf,
    destination: PathBuf,
}

impl TreeRoots {
    /// Creates roots from the primary, secondary and destination paths.
    pub fn new(
        primary: impl Into<PathBuf>,
        secondary: impl Into<PathBuf>,
        destination: impl Into<PathBuf>,
    ) -> Self {
        Self {
            primary: primary.into(),
            secondary: secondary.into(),
            destination: destination.into(),
        }
    }

    pub fn primary(&self) -> &Path {
        &self.primary
    }

    pub fn secondary(&self) -> &Path {
        &self.secondary
    }

    pub fn destination(&self) -> &Path {
        &self.destination
    }

    /// Computes the counterpart of `primary_path` under the secondary tree.
    ///
    /// `<primary>/sub/dir/lib.a` maps to `<secondary>/sub/dir/lib.a`. The
    /// result is not checked for existence. Returns `None` only when
    /// `primary_path` does not lie under the primary root.
    pub fn counterpart(&self, primary_path: &Path) -> Option<PathBuf> {
        primary_path
            .strip_prefix(&self.primary)
            .ok()
            .map(|relative| self.secondary_path(relative))
    }

    /// Joins `relative` onto the secondary root.
    pub fn secondary_path(&self, relative: &Path) -> PathBuf {
        join_relative(&self.secondary, relative)
    }

    /// Joins `relative` onto the destination root.
    pub fn destination_path(&self, relative: &Path) -> PathBuf {
        join_relative(&self.destination, relative)
    }

    /// Joins `relative` onto the primary root.
    pub fn primary_path(&self, relative: &Path) -> PathBuf {
        join_relative(&self.primary, relative)
    }
}

// An empty relative path is the root itself; `join("")` would append a
// trailing separator.
fn join_relative(root: &Path, relative: &Path) -> PathBuf {
    if relative.as_os_str().is_empty() {
        root.to_path_buf()
    } else {
        root.join(relative)
    }
}
