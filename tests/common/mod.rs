//! Shared fixtures for tree merge tests.
#![allow(dead_code)]

use kodegen_bundler_universal::universal::{Error, Result, UniversalMerge};
use std::cell::RefCell;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Leading bytes of a little-endian 64-bit Mach-O file as stored on disk.
pub const MACHO_64: [u8; 8] = [0xCF, 0xFA, 0xED, 0xFE, 0x0C, 0x00, 0x00, 0x01];

/// Leading bytes of a little-endian 32-bit Mach-O file as stored on disk.
pub const MACHO_32: [u8; 8] = [0xCE, 0xFA, 0xED, 0xFE, 0x07, 0x00, 0x00, 0x00];

/// Primary, secondary and destination roots inside one temporary directory.
pub struct Trees {
    _tmp: TempDir,
    pub primary: PathBuf,
    pub secondary: PathBuf,
    pub destination: PathBuf,
}

impl Trees {
    pub fn new() -> Self {
        let tmp = TempDir::new().expect("create temp dir");
        let primary = tmp.path().join("arm64");
        let secondary = tmp.path().join("x86_64");
        let destination = tmp.path().join("universal");
        fs::create_dir_all(&primary).expect("create primary tree");
        fs::create_dir_all(&secondary).expect("create secondary tree");

        Self {
            _tmp: tmp,
            primary,
            secondary,
            destination,
        }
    }

    /// Directory holding the three trees, for helper scripts.
    pub fn scratch(&self) -> &Path {
        self._tmp.path()
    }
}

/// Writes `contents` at `root/relative`, creating parent directories.
pub fn write(root: &Path, relative: &str, contents: &[u8]) -> PathBuf {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("create parent directory");
    }
    fs::write(&path, contents).expect("write fixture file");
    path
}

/// Writes a small fake Mach-O object tagged with `arch`.
pub fn write_macho(root: &Path, relative: &str, arch: &str) -> PathBuf {
    let mut contents = MACHO_64.to_vec();
    contents.extend_from_slice(arch.as_bytes());
    write(root, relative, &contents)
}

/// Merger that writes the primary bytes followed by the secondary bytes.
#[derive(Default)]
pub struct ConcatMerger {
    pub calls: RefCell<Vec<(PathBuf, PathBuf, PathBuf)>>,
}

impl UniversalMerge for ConcatMerger {
    async fn merge(&self, primary: &Path, secondary: &Path, destination: &Path) -> Result<()> {
        let mut contents = fs::read(primary)?;
        contents.extend(fs::read(secondary)?);
        fs::write(destination, contents)?;
        self.calls.borrow_mut().push((
            primary.to_path_buf(),
            secondary.to_path_buf(),
            destination.to_path_buf(),
        ));
        Ok(())
    }
}

/// Merger that fails like `lipo` rejecting its inputs.
pub struct FailingMerger;

impl UniversalMerge for FailingMerger {
    async fn merge(&self, _primary: &Path, _secondary: &Path, destination: &Path) -> Result<()> {
        Err(Error::MergeTool {
            destination: destination.to_path_buf(),
            status: Some(1),
            stderr: "fatal error: have the same architectures".to_string(),
        })
    }
}

/// Installs an executable `lipo` stand-in that concatenates its inputs, or
/// exits 1 with a message on stderr when `fail` is set.
#[cfg(unix)]
pub fn fake_lipo(dir: &Path, fail: bool) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let script = if fail {
        "#!/bin/sh\necho \"lipo: boom\" >&2\nexit 1\n".to_string()
    } else {
        "#!/bin/sh\n[ \"$1\" = \"-create\" ] || exit 64\n[ \"$4\" = \"-output\" ] || exit 64\ncat \"$2\" \"$3\" > \"$5\"\n"
            .to_string()
    };
    let path = dir.join(if fail { "lipo-fail" } else { "lipo-concat" });
    fs::write(&path, script).expect("write fake lipo");
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).expect("chmod fake lipo");
    path
}
