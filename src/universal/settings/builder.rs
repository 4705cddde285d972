//! Builder for constructing Settings.

use super::{SecondaryOnlyPolicy, Settings};
use crate::universal::correlate::TreeRoots;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Default external tool used to create universal binaries.
pub const DEFAULT_MERGE_TOOL: &str = "lipo";

/// Builder for constructing [`Settings`].
///
/// # Examples
///
/// ```no_run
/// use kodegen_bundler_universal::universal::{SecondaryOnlyPolicy, SettingsBuilder};
///
/// # fn example() -> kodegen_bundler_universal::universal::Result<()> {
/// let settings = SettingsBuilder::new()
///     .primary("out/arm64")
///     .secondary("out/x64")
///     .destination("out/universal")
///     .merge_tool("/usr/bin/lipo")
///     .secondary_only(SecondaryOnlyPolicy::Copy)
///     .build()?;
/// # Ok(())
/// # }
/// ```
#[derive(Default)]
pub struct SettingsBuilder {
    primary: Option<PathBuf>,
    secondary: Option<PathBuf>,
    destination: Option<PathBuf>,
    merge_tool: Option<OsString>,
    secondary_only: SecondaryOnlyPolicy,
}

impl SettingsBuilder {
    /// Creates a new settings builder.
    pub fn new() -> Self {
        Default::default()
    }

    /// Sets the primary tree, the source of every non-merged file.
    ///
    /// # Required
    pub fn primary<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.primary = Some(path.as_ref().to_path_buf());
        self
    }

    /// Sets the tree holding the alternate architecture's libraries.
    ///
    /// # Required
    pub fn secondary<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.secondary = Some(path.as_ref().to_path_buf());
        self
    }

    /// Sets the output tree.
    ///
    /// # Required
    pub fn destination<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.destination = Some(path.as_ref().to_path_buf());
        self
    }

    /// Sets the merge tool program.
    ///
    /// Default: `lipo`
    pub fn merge_tool<S: Into<OsString>>(mut self, program: S) -> Self {
        self.merge_tool = Some(program.into());
        self
    }

    /// Sets the policy for entries present only in the secondary tree.
    ///
    /// Default: [`SecondaryOnlyPolicy::Ignore`]
    pub fn secondary_only(mut self, policy: SecondaryOnlyPolicy) -> Self {
        self.secondary_only = policy;
        self
    }

    /// Builds the settings.
    ///
    /// # Errors
    ///
    /// Returns an error if any of the three roots is missing.
    pub fn build(self) -> crate::universal::Result<Settings> {
        use crate::universal::error::Context;

        let roots = TreeRoots::new(
            self.primary.context("primary tree is required")?,
            self.secondary.context("secondary tree is required")?,
            self.destination.context("destination tree is required")?,
        );

        Ok(Settings::new(
            roots,
            self.merge_tool
                .unwrap_or_else(|| OsString::from(DEFAULT_MERGE_TOOL)),
            self.secondary_only,
        ))
    }
}
