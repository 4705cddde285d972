//! Primary tree traversal.

mod orchestrator;
mod report;

pub use orchestrator::TreeMerger;
pub use report::{MergeFailure, MergeReport, SkipReason, SkippedEntry};
