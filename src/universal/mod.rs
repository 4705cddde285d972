//! Universal binary tree merging.
//!
//! Two build trees, one per CPU architecture, are combined into a single
//! output tree. Static libraries and Mach-O binaries are merged with their
//! counterparts through `lipo`; every other entry is copied from the
//! primary tree.
//!
//! # Module Organization
//!
//! - [`classify`] - copy or merge decision per entry
//! - [`correlate`] - counterpart paths across the three roots
//! - [`merger`] - the external merge tool
//! - [`settings`] - run configuration
//! - [`walker`] - the tree walk tying it together

pub mod classify;
pub mod correlate;
pub mod error;
pub mod merger;
pub mod settings;
pub mod utils;
pub mod walker;

pub use classify::{FileKind, classify, is_merge_candidate};
pub use correlate::TreeRoots;
pub use error::{Error, Result};
pub use merger::{LipoMerger, UniversalMerge, detect_merge_tool};
pub use settings::{DEFAULT_MERGE_TOOL, SecondaryOnlyPolicy, Settings, SettingsBuilder};
pub use walker::{MergeFailure, MergeReport, SkipReason, SkippedEntry, TreeMerger};
