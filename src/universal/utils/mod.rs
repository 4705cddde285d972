//! Utility modules for tree merging.

pub mod fs;
