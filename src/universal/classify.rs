//! Per-entry classification: copy as-is or merge with the counterpart.
//!
//! A non-directory entry is a merge candidate when it is a static library
//! (`.a`) or starts with a thin Mach-O header. Symbolic links are never
//! candidates; they are recreated as links by the walker.

use goblin::mach::header::{MH_CIGAM, MH_CIGAM_64};
use std::io::Read;
use std::path::Path;

/// Extension of static library archives, compared case-sensitively.
const ARCHIVE_EXTENSION: &str = "a";

/// Classification of a non-directory entry of a source tree.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FileKind {
    /// Plain file, copied verbatim.
    RegularFile,
    /// Symbolic link, recreated without following.
    SymbolicLink,
    /// `.a` static library.
    ArchiveLibrary,
    /// File carrying a 32- or 64-bit Mach-O magic.
    UniversalCandidateBinary,
}

impl FileKind {
    /// Whether the entry must be merged with its counterpart.
    pub fn is_merge_candidate(self) -> bool {
        matches!(
            self,
            FileKind::ArchiveLibrary | FileKind::UniversalCandidateBinary
        )
    }
}

/// Classifies the entry at `path`.
///
/// The decision is recomputed on every call. Reading the leading bytes fails
/// closed: an unreadable, empty or short file is a [`FileKind::RegularFile`]
/// and the IO error is never surfaced.
pub fn classify(path: &Path) -> FileKind {
    let is_symlink = std::fs::symlink_metadata(path)
        .map(|meta| meta.file_type().is_symlink())
        .unwrap_or(false);
    if is_symlink {
        return FileKind::SymbolicLink;
    }

    if has_archive_extension(path) {
        return FileKind::ArchiveLibrary;
    }

    match read_magic(path) {
        Ok(magic) if has_macho_magic(&magic) => FileKind::UniversalCandidateBinary,
        Ok(_) => FileKind::RegularFile,
        Err(e) => {
            log::trace!(
                "treating {} as a plain file, magic unreadable: {}",
                path.display(),
                e
            );
            FileKind::RegularFile
        }
    }
}

/// Shorthand for `classify(path).is_merge_candidate()`.
pub fn is_merge_candidate(path: &Path) -> bool {
    classify(path).is_merge_candidate()
}

/// Returns true when the first four bytes, read big-endian, are the
/// on-disk form of a little-endian 64-bit or 32-bit Mach-O header.
pub fn has_macho_magic(bytes: &[u8]) -> bool {
    let Some(head) = bytes.first_chunk::<4>() else {
        return false;
    };
    matches!(u32::from_be_bytes(*head), MH_CIGAM_64 | MH_CIGAM)
}

fn has_archive_extension(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext == ARCHIVE_EXTENSION)
}

fn read_magic(path: &Path) -> std::io::Result<[u8; 4]> {
    let mut magic = [0u8; 4];
    std::fs::File::open(path)?.read_exact(&mut magic)?;
    Ok(magic)
}
