//! Terminal output for merge runs.
//!
//! Diagnostics about individual entries go to stdout so they interleave with
//! progress lines; failures go to stderr.

use std::io::{self, Write};

/// Writes progress, diagnostics and results to the terminal.
#[derive(Debug, Clone)]
pub struct OutputManager {
    verbose: bool,
}

impl OutputManager {
    /// Create an output manager; `verbose` enables per-entry lines.
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }

    pub fn is_verbose(&self) -> bool {
        self.verbose
    }

    /// Print a line only in verbose mode
    pub fn verbose(&self, message: &str) -> io::Result<()> {
        if self.verbose {
            writeln!(io::stdout().lock(), "{message}")?;
        }
        Ok(())
    }

    /// Print a diagnostic to stdout
    pub fn warn(&self, message: &str) -> io::Result<()> {
        writeln!(io::stdout().lock(), "{message}")
    }

    /// Print an error to stderr
    pub fn error(&self, message: &str) -> io::Result<()> {
        writeln!(io::stderr().lock(), "error: {message}")
    }

    /// Print a success line to stdout
    pub fn success(&self, message: &str) -> io::Result<()> {
        writeln!(io::stdout().lock(), "✓ {message}")
    }
}
