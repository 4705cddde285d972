//! Universal binary tree merger
//!
//! Combines two build output trees, one per CPU architecture, into a single
//! tree in which static libraries and Mach-O binaries are universal
//! (multi-architecture) files and everything else is copied from the
//! primary tree.
//!
//! It can be used both as a CLI tool and as a library dependency.

pub mod cli;
pub mod error;
pub mod universal;

// Re-export commonly used types
pub use error::{AppError, Result};
