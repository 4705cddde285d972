//! Configuration for a tree merge run.

mod builder;
mod core;

pub use builder::{DEFAULT_MERGE_TOOL, SettingsBuilder};
pub use self::core::Settings;

/// Handling of entries that exist in the secondary tree but not in the primary.
///
/// The primary tree is authoritative for the file set unless told otherwise.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum SecondaryOnlyPolicy {
    /// Leave secondary-only entries out of the destination.
    #[default]
    Ignore,
    /// Copy secondary-only entries verbatim into the destination.
    Copy,
}
