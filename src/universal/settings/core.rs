//! Core Settings struct and implementations.

use super::SecondaryOnlyPolicy;
use crate::universal::correlate::TreeRoots;
use std::path::Path;

/// Settings for one tree merge run.
///
/// Constructed via [`SettingsBuilder`](super::SettingsBuilder). Immutable for
/// the lifetime of the run and passed explicitly to the walker.
///
/// # Examples
///
/// ```no_run
/// use kodegen_bundler_universal::universal::SettingsBuilder;
///
/// # fn example() -> kodegen_bundler_universal::universal::Result<()> {
/// let settings = SettingsBuilder::new()
///     .primary("build/arm64")
///     .secondary("build/x86_64")
///     .destination("build/universal")
///     .build()?;
/// assert_eq!(settings.merge_tool().to_str(), Some("lipo"));
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct Settings {
    /// Primary, secondary and destination roots.
    roots: TreeRoots,

    /// Program used to create universal binaries.
    ///
    /// Resolved through `PATH` when not absolute.
    merge_tool: std::ffi::OsString,

    /// What to do with entries that only exist in the secondary tree.
    secondary_only: SecondaryOnlyPolicy,
}

impl Settings {
    pub(super) fn new(
        roots: TreeRoots,
        merge_tool: std::ffi::OsString,
        secondary_only: SecondaryOnlyPolicy,
    ) -> Self {
        Self {
            roots,
            merge_tool,
            secondary_only,
        }
    }

    /// Returns the tree roots.
    pub fn roots(&self) -> &TreeRoots {
        &self.roots
    }

    /// Returns the primary tree root.
    pub fn primary(&self) -> &Path {
        self.roots.primary()
    }

    /// Returns the secondary tree root.
    pub fn secondary(&self) -> &Path {
        self.roots.secondary()
    }

    /// Returns the destination tree root.
    pub fn destination(&self) -> &Path {
        self.roots.destination()
    }

    /// Returns the merge tool program.
    pub fn merge_tool(&self) -> &std::ffi::OsStr {
        &self.merge_tool
    }

    /// Returns the secondary-only entry policy.
    pub fn secondary_only(&self) -> SecondaryOnlyPolicy {
        self.secondary_only
    }
}
