//! Tree walk driving classification, copying and merging.

use crate::cli::OutputManager;
use crate::universal::{
    Error, Result, SecondaryOnlyPolicy, Settings,
    classify::{FileKind, classify},
    error::Context,
    merger::UniversalMerge,
    utils::fs,
};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use super::report::{MergeFailure, MergeReport, SkipReason, SkippedEntry};

/// Mirrors the primary tree into the destination, merging every library and
/// Mach-O binary with its counterpart from the secondary tree.
///
/// Entries are processed one at a time in directory enumeration order; each
/// copy or merge completes before the next entry is looked at. The
/// destination is populated incrementally and is left as-is if the run
/// aborts.
///
/// # Examples
///
/// ```no_run
/// use kodegen_bundler_universal::cli::OutputManager;
/// use kodegen_bundler_universal::universal::{LipoMerger, SettingsBuilder, TreeMerger};
///
/// # async fn example() -> kodegen_bundler_universal::universal::Result<()> {
/// let settings = SettingsBuilder::new()
///     .primary("out/arm64")
///     .secondary("out/x64")
///     .destination("out/universal")
///     .build()?;
/// let merger = LipoMerger::new(settings.merge_tool());
/// let report = TreeMerger::new(settings, merger)
///     .run(&OutputManager::new(false))
///     .await?;
/// println!("{}", report.summary());
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct TreeMerger<M> {
    settings: Settings,
    merger: M,
}

impl<M: UniversalMerge> TreeMerger<M> {
    pub fn new(settings: Settings, merger: M) -> Self {
        Self { settings, merger }
    }

    /// Runs the merge.
    ///
    /// Missing counterparts and merge tool failures are reported through
    /// `output` and recorded in the returned [`MergeReport`]; the walk
    /// continues past them. Any other IO failure aborts the run.
    pub async fn run(&self, output: &OutputManager) -> Result<MergeReport> {
        let roots = self.settings.roots();
        let mut report = MergeReport::default();
        let mut dirs = Vec::new();

        log::info!(
            "Merging {} and {} into {}",
            roots.primary().display(),
            roots.secondary().display(),
            roots.destination().display()
        );

        for entry in WalkDir::new(roots.primary()).follow_links(false) {
            let entry = entry?;
            let relative = entry.path().strip_prefix(roots.primary())?;
            let dest = roots.destination_path(relative);

            if entry.file_type().is_dir() {
                fs::create_dir_all(&dest).await?;
                dirs.push((entry.path().to_path_buf(), dest));
                report.directories += 1;
                continue;
            }

            self.process_entry(entry.path(), relative, &dest, output, &mut report)
                .await?;
        }

        if self.settings.secondary_only() == SecondaryOnlyPolicy::Copy {
            self.copy_secondary_only(output, &mut report, &mut dirs)
                .await?;
        }

        fs::copy_dir_metadata(dirs).await?;

        log::info!("Tree merge finished: {}", report.summary());
        Ok(report)
    }

    async fn process_entry(
        &self,
        path: &Path,
        relative: &Path,
        dest: &Path,
        output: &OutputManager,
        report: &mut MergeReport,
    ) -> Result<()> {
        let kind = classify(path);
        log::debug!("{} classified as {:?}", relative.display(), kind);

        match kind {
            FileKind::SymbolicLink => {
                fs::copy_symlink(path, dest).await?;
                report.symlinks += 1;
                output.verbose(&format!("link   {}", relative.display()))?;
            }
            FileKind::RegularFile => {
                fs::copy_file(path, dest).await?;
                report.copied += 1;
                output.verbose(&format!("copy   {}", relative.display()))?;
            }
            FileKind::ArchiveLibrary | FileKind::UniversalCandidateBinary => {
                self.merge_entry(path, relative, dest, output, report)
                    .await?;
            }
        }

        Ok(())
    }

    async fn merge_entry(
        &self,
        path: &Path,
        relative: &Path,
        dest: &Path,
        output: &OutputManager,
        report: &mut MergeReport,
    ) -> Result<()> {
        let counterpart = self
            .settings
            .roots()
            .counterpart(path)
            .context("walked entry is outside of the primary tree")?;

        // Broken symlinks count as missing, like any unreadable counterpart.
        let exists = tokio::fs::try_exists(&counterpart).await.unwrap_or(false);
        if !exists {
            output.warn(&format!(
                "Lib not found in secondary source: {}",
                counterpart.display()
            ))?;
            report.skipped.push(SkippedEntry {
                relative: relative.to_path_buf(),
                reason: SkipReason::MissingCounterpart { counterpart },
            });
            return Ok(());
        }

        match self.merger.merge(path, &counterpart, dest).await {
            Ok(()) => {
                report.merged += 1;
                output.verbose(&format!("merge  {}", relative.display()))?;
            }
            Err(e @ Error::MergeTool { .. }) => {
                log::warn!("merge of {} failed: {}", relative.display(), e);
                output.error(&format!("Failed to merge {}: {}", relative.display(), e))?;
                report.failures.push(MergeFailure {
                    relative: relative.to_path_buf(),
                    message: e.to_string(),
                });
            }
            Err(e) => return Err(e),
        }

        Ok(())
    }

    /// Copies entries that exist only in the secondary tree.
    ///
    /// A secondary directory whose primary twin is not a directory is left
    /// out together with its contents.
    async fn copy_secondary_only(
        &self,
        output: &OutputManager,
        report: &mut MergeReport,
        dirs: &mut Vec<(PathBuf, PathBuf)>,
    ) -> Result<()> {
        let roots = self.settings.roots();
        let mut entries = WalkDir::new(roots.secondary())
            .follow_links(false)
            .min_depth(1)
            .into_iter();

        while let Some(entry) = entries.next() {
            let entry = entry?;
            let relative = entry.path().strip_prefix(roots.secondary())?;
            let is_dir = entry.file_type().is_dir();

            if let Ok(twin) = tokio::fs::symlink_metadata(roots.primary_path(relative)).await {
                if is_dir && !twin.is_dir() {
                    log::warn!(
                        "{} is a directory in the secondary tree only, skipping its contents",
                        relative.display()
                    );
                    entries.skip_current_dir();
                }
                continue;
            }

            let dest = roots.destination_path(relative);
            if is_dir {
                fs::create_dir_all(&dest).await?;
                dirs.push((entry.path().to_path_buf(), dest));
                report.directories += 1;
                continue;
            }

            if entry.path_is_symlink() {
                fs::copy_symlink(entry.path(), &dest).await?;
            } else {
                fs::copy_file(entry.path(), &dest).await?;
            }
            report.secondary_only += 1;
            output.verbose(&format!("extra  {}", relative.display()))?;
        }

        Ok(())
    }
}
