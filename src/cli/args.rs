//! Command line argument parsing and validation.
//!
//! This module provides CLI argument parsing using clap and the conversion
//! of parsed arguments into merge [`Settings`].

use crate::universal::{DEFAULT_MERGE_TOOL, SecondaryOnlyPolicy, Settings, SettingsBuilder};
use clap::Parser;
use std::ffi::OsString;
use std::path::PathBuf;

/// Merge two per-architecture build trees into universal binaries
#[derive(Parser, Debug)]
#[command(
    name = "kodegen_bundler_universal",
    version,
    about = "Merge two per-architecture build trees into one tree of universal binaries",
    long_about = "Mirrors PRIMARY into DESTINATION. Static libraries (*.a) and Mach-O binaries are
combined with the file at the same relative path in SECONDARY using lipo; every
other file, directory and symlink is copied from PRIMARY.

Usage:
  kodegen_bundler_universal build/arm64 build/x86_64 build/universal
  kodegen_bundler_universal --include-secondary-only deps/arm64 deps/x64 deps/universal

Exit code 0 = every merge candidate with a counterpart was merged."
)]
pub struct Args {
    /// Primary architecture tree, source of every non-merged file
    #[arg(value_name = "PRIMARY")]
    pub primary: PathBuf,

    /// Tree holding the other architecture's libraries and binaries
    #[arg(value_name = "SECONDARY")]
    pub secondary: PathBuf,

    /// Output tree for the universal result
    #[arg(value_name = "DESTINATION")]
    pub destination: PathBuf,

    /// Positional values after DESTINATION, accepted and ignored
    #[arg(value_name = "IGNORED", hide = true)]
    pub ignored: Vec<OsString>,

    /// Program used to create universal binaries
    #[arg(long, value_name = "PROGRAM", env = "LIPO", default_value = DEFAULT_MERGE_TOOL)]
    pub lipo: OsString,

    /// Also copy entries that exist only in the secondary tree
    ///
    /// By default the primary tree alone decides which files end up in the
    /// destination.
    #[arg(long)]
    pub include_secondary_only: bool,

    /// Print one line per copied, linked or merged entry
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// Parse command line arguments
    pub fn try_parse_args() -> Result<Self, clap::Error> {
        Self::try_parse()
    }

    /// Policy for secondary-only entries selected on the command line
    pub fn secondary_only_policy(&self) -> SecondaryOnlyPolicy {
        if self.include_secondary_only {
            SecondaryOnlyPolicy::Copy
        } else {
            SecondaryOnlyPolicy::Ignore
        }
    }

    /// Build merge settings from the parsed arguments
    pub fn to_settings(&self) -> crate::universal::Result<Settings> {
        SettingsBuilder::new()
            .primary(&self.primary)
            .secondary(&self.secondary)
            .destination(&self.destination)
            .merge_tool(self.lipo.clone())
            .secondary_only(self.secondary_only_policy())
            .build()
    }
}

/// Configuration derived from command line arguments
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    /// Output manager for terminal output
    output: super::OutputManager,
}

impl From<&Args> for RuntimeConfig {
    fn from(args: &Args) -> Self {
        Self {
            output: super::OutputManager::new(args.verbose),
        }
    }
}

impl RuntimeConfig {
    /// Get a reference to the output manager
    pub fn output(&self) -> &super::OutputManager {
        &self.output
    }

    /// Print verbose message if in verbose mode
    pub fn verbose_println(&self, message: &str) -> std::io::Result<()> {
        self.output.verbose(message)
    }

    /// Print success message, verbose mode only
    pub fn success_println(&self, message: &str) -> std::io::Result<()> {
        if self.output.is_verbose() {
            self.output.success(message)?;
        }
        Ok(())
    }

    /// Print warning message
    pub fn warning_println(&self, message: &str) -> std::io::Result<()> {
        self.output.warn(message)
    }

    /// Print error message
    pub fn error_println(&self, message: &str) -> std::io::Result<()> {
        self.output.error(message)
    }
}
