//! `lipo`-backed universal binary creation.

use super::UniversalMerge;
use crate::universal::{Error, Result};
use std::ffi::OsString;
use std::path::Path;
use tokio::process::Command;

/// Runs `<program> -create <primary> <secondary> -output <destination>`.
#[derive(Clone, Debug)]
pub struct LipoMerger {
    program: OsString,
}

impl LipoMerger {
    /// Creates a merger running `program`, looked up on `PATH` when relative.
    pub fn new(program: impl Into<OsString>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl UniversalMerge for LipoMerger {
    async fn merge(&self, primary: &Path, secondary: &Path, destination: &Path) -> Result<()> {
        log::debug!(
            "{} -create {} {} -output {}",
            self.program.to_string_lossy(),
            primary.display(),
            secondary.display(),
            destination.display()
        );

        // Command: lipo -create <primary> <secondary> -output <universal>
        let output = Command::new(&self.program)
            .arg("-create")
            .arg(primary)
            .arg(secondary)
            .arg("-output")
            .arg(destination)
            .output()
            .await
            .map_err(|e| Error::MergeTool {
                destination: destination.to_path_buf(),
                status: None,
                stderr: format!(
                    "failed to run {}: {}",
                    self.program.to_string_lossy(),
                    e
                ),
            })?;

        if !output.status.success() {
            return Err(Error::MergeTool {
                destination: destination.to_path_buf(),
                status: output.status.code(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(())
    }
}
