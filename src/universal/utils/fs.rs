//! File system utilities for mirroring trees.
//!
//! Provides copies that keep permission bits and timestamps, symlink
//! recreation, and directory creation with path-aware errors.

use crate::bail;
use crate::universal::{Result, error::ErrorExt};
use std::fs::{self, FileTimes, Permissions};
use std::io;
use std::path::{Path, PathBuf};

/// Creates `path` and all missing parents. Succeeds if it already exists.
pub async fn create_dir_all(path: &Path) -> Result<()> {
    tokio::fs::create_dir_all(path)
        .await
        .fs_context("failed to create directory", path)
}

/// Copies a regular file, then carries over permission bits and the access
/// and modification times of `from`.
///
/// An existing file at `to` is overwritten.
pub async fn copy_file(from: &Path, to: &Path) -> Result<()> {
    let metadata = tokio::fs::metadata(from)
        .await
        .fs_context("failed to read metadata", from)?;
    if !metadata.is_file() {
        bail!("{} is not a file", from.display());
    }

    let from = from.to_path_buf();
    let to = to.to_path_buf();

    // Offload blocking work to dedicated thread pool
    tokio::task::spawn_blocking(move || copy_file_blocking(&from, &to, &metadata))
        .await
        .map_err(|e| {
            crate::universal::Error::GenericError(format!("file copy task panicked: {e}"))
        })?
}

fn copy_file_blocking(from: &Path, to: &Path, metadata: &fs::Metadata) -> Result<()> {
    // A read-only file left behind by an earlier run would refuse the copy.
    let stale = fs::symlink_metadata(to)
        .map(|existing| existing.file_type().is_symlink() || existing.permissions().readonly())
        .unwrap_or(false);
    if stale {
        fs::remove_file(to).fs_context("failed to replace existing file", to)?;
    }

    fs::copy(from, to).fs_context("failed to copy file", from)?;

    let times = file_times(metadata);

    // fs::copy already applied the permission bits, so the file may be
    // read-only. Timestamps are set through a handle opened for writing
    // before the final permissions are restored.
    let writable = writable_permissions(metadata.permissions());
    fs::set_permissions(to, writable).fs_context("failed to set permissions", to)?;
    fs::OpenOptions::new()
        .write(true)
        .open(to)
        .and_then(|file| file.set_times(times))
        .fs_context("failed to set file times", to)?;
    fs::set_permissions(to, metadata.permissions()).fs_context("failed to set permissions", to)?;

    Ok(())
}

fn writable_permissions(mut permissions: Permissions) -> Permissions {
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        permissions.set_mode(permissions.mode() | 0o200);
    }
    #[cfg(not(unix))]
    {
        permissions.set_readonly(false);
    }
    permissions
}

/// Recreates the symlink at `from` as a link at `to` pointing to the same
/// target. The target is neither followed nor required to exist.
pub async fn copy_symlink(from: &Path, to: &Path) -> Result<()> {
    let target = tokio::fs::read_link(from)
        .await
        .fs_context("failed to read symlink", from)?;

    match tokio::fs::symlink_metadata(to).await {
        Ok(_) => tokio::fs::remove_file(to)
            .await
            .fs_context("failed to replace existing entry", to)?,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {}
        Err(e) => return Err(e).fs_context("failed to inspect destination", to),
    }

    let points_to_dir = tokio::fs::metadata(from)
        .await
        .map(|meta| meta.is_dir())
        .unwrap_or(false);
    let (target_for_link, to_owned) = (target.clone(), to.to_path_buf());

    tokio::task::spawn_blocking(move || {
        if points_to_dir {
            symlink_dir(&target_for_link, &to_owned)
        } else {
            symlink_file(&target_for_link, &to_owned)
        }
    })
    .await
    .map_err(|e| crate::universal::Error::GenericError(format!("symlink task panicked: {e}")))?
    .fs_context("failed to create symlink", to)?;

    log::trace!("{} -> {}", to.display(), target.display());
    Ok(())
}

/// Copies the permission bits and access/modification times of each
/// `(source, destination)` directory pair.
///
/// Pairs are applied deepest first, after all contents are in place, so
/// restricting a parent never blocks updating its children and later writes
/// do not bump the copied times.
pub async fn copy_dir_metadata(mut dirs: Vec<(PathBuf, PathBuf)>) -> Result<()> {
    dirs.sort_by_key(|(_, dst)| std::cmp::Reverse(dst.components().count()));

    tokio::task::spawn_blocking(move || {
        for (src, dst) in dirs {
            copy_dir_metadata_blocking(&src, &dst)?;
        }
        Ok(())
    })
    .await
    .map_err(|e| {
        crate::universal::Error::GenericError(format!("directory metadata task panicked: {e}"))
    })?
}

fn copy_dir_metadata_blocking(src: &Path, dst: &Path) -> Result<()> {
    let metadata = fs::metadata(src).fs_context("failed to read metadata", src)?;

    // Times first: the destination still has its default, writable mode.
    fs::File::open(dst)
        .and_then(|dir| dir.set_times(file_times(&metadata)))
        .fs_context("failed to set directory times", dst)?;
    fs::set_permissions(dst, metadata.permissions()).fs_context("failed to set permissions", dst)?;

    Ok(())
}

fn file_times(metadata: &fs::Metadata) -> FileTimes {
    let mut times = FileTimes::new();
    if let Ok(accessed) = metadata.accessed() {
        times = times.set_accessed(accessed);
    }
    if let Ok(modified) = metadata.modified() {
        times = times.set_modified(modified);
    }
    times
}

/// Makes a symbolic link to a directory.
#[cfg(unix)]
fn symlink_dir(src: &Path, dst: &Path) -> io::Result<()> {
    std::os::unix::fs::symlink(src, dst)
}

/// Makes a symbolic link to a directory.
#[cfg(windows)]
fn symlink_dir(src: &Path, dst: &Path) -> io::Result<()> {
    std::os::windows::fs::symlink_dir(src, dst)
}

/// Makes a symbolic link to a file.
#[cfg(unix)]
fn symlink_file(src: &Path, dst: &Path) -> io::Result<()> {
    std::os::unix::fs::symlink(src, dst)
}

/// Makes a symbolic link to a file.
#[cfg(windows)]
fn symlink_file(src: &Path, dst: &Path) -> io::Result<()> {
    std::os::windows::fs::symlink_file(src, dst)
}
