//! imgscan - rename image files from vision-model descriptions.
//!
//! This library walks a directory tree, requests a short keyword description
//! for each image from an OpenAI-compatible vision API, and renames the file
//! according to a configurable naming scheme.
//!
//! # Features
//!
//! - Recursive scanning with hidden-file/directory pruning
//! - Skip detection for files renamed by a previous run
//! - Filesystem-safe sanitization of model output
//! - Collision-safe renaming with numeric suffixes
//! - Dry-run mode with zero filesystem mutation
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use imgscan::config::Config;
//! use imgscan::scan::scan;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::default();
//!     let scan_result = scan(
//!         Path::new("./photos"),
//!         &config.rename.prefix,
//!         config.rename.naming_scheme,
//!         config.behavior.skip_processed,
//!     )?;
//!     println!("{} files to process", scan_result.entries.len());
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod media;
pub mod output;
pub mod rename;
pub mod scan;

// Re-exports for convenience
pub use api::{DescriptionProvider, VisionApi};
pub use config::{Config, NamingScheme};
pub use error::{Error, Result};
pub use rename::{rename_entry, RenameFailure, RenameOutcome};
pub use scan::{scan, ScanEntry, ScanResult};
