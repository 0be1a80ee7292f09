//! Scanner module.
//!
//! Provides:
//! - Recursive directory traversal with hidden-entry pruning
//! - Processed-marker detection for idempotent re-runs

pub mod markers;
pub mod scanner;

pub use markers::has_processed_marker;
pub use scanner::{scan, ScanEntry, ScanReport, ScanResult};
