//! Renamer module.
//!
//! Provides:
//! - Description sanitization
//! - Naming-scheme composition and collision resolution
//! - Discriminated per-file rename outcomes

pub mod renamer;
pub mod sanitize;

pub use renamer::{rename_entry, RenameFailure, RenameOutcome};
pub use sanitize::sanitize_description;
