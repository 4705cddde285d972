//! Command line interface for the universal tree merger.
//!
//! Parses arguments, reports usage errors, runs the merge and maps its
//! outcome onto the process exit code.

mod args;
mod output;

pub use args::{Args, RuntimeConfig};
pub use output::OutputManager;

use crate::error::Result;
use crate::universal::{LipoMerger, TreeMerger, detect_merge_tool};
use clap::CommandFactory;
use clap::error::ErrorKind;
use std::io::Write;

/// Exit code for missing or malformed arguments
pub const USAGE_EXIT_CODE: i32 = 2;

/// Exit code when the run finished but some merges failed
pub const MERGE_FAILURE_EXIT_CODE: i32 = 1;

/// Main CLI entry point
pub async fn run() -> Result<i32> {
    let args = match Args::try_parse_args() {
        Ok(args) => args,
        Err(e) => return report_parse_error(e),
    };

    if !args.ignored.is_empty() {
        log::debug!("ignoring extra arguments: {:?}", args.ignored);
    }

    let config = RuntimeConfig::from(&args);
    let settings = args.to_settings()?;

    if detect_merge_tool(settings.merge_tool()).is_none() {
        config.warning_println(&format!(
            "warning: {} not found, universal binaries will not be created",
            settings.merge_tool().to_string_lossy()
        ))?;
    }

    let merger = LipoMerger::new(settings.merge_tool());
    let report = TreeMerger::new(settings, merger)
        .run(config.output())
        .await?;

    if report.is_success() {
        config.success_println(&report.summary())?;
        Ok(0)
    } else {
        config.verbose_println(&report.summary())?;
        config.error_println(&format!(
            "{} of {} merges failed",
            report.failures.len(),
            report.failures.len() + report.merged
        ))?;
        Ok(MERGE_FAILURE_EXIT_CODE)
    }
}

/// Prints a parse failure to stdout and picks the exit code.
///
/// `--help` and `--version` are not failures and exit with 0.
fn report_parse_error(e: clap::Error) -> Result<i32> {
    let mut stdout = std::io::stdout().lock();
    match e.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
            write!(stdout, "{}", e.render())?;
            Ok(0)
        }
        ErrorKind::MissingRequiredArgument => {
            writeln!(stdout, "Not enough args")?;
            writeln!(stdout, "{}", Args::command().render_usage())?;
            Ok(USAGE_EXIT_CODE)
        }
        _ => {
            write!(stdout, "{}", e.render())?;
            Ok(USAGE_EXIT_CODE)
        }
    }
}
