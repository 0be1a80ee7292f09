//! Directory tree scanning.

use std::path::{Path, PathBuf};

use tracing::debug;
use walkdir::{DirEntry, WalkDir};

use crate::config::{Config, NamingScheme};
use crate::error::{Error, Result};
use crate::scan::markers::has_processed_marker;

/// One file selected for processing.
///
/// Created during the walk, consumed exactly once by the rename step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanEntry {
    /// Path to the image file.
    pub path: PathBuf,
    /// Directory in which the new name will be created.
    pub containing_directory: PathBuf,
}

/// Per-category skip counters, reported after the scan.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanReport {
    pub skipped_hidden: u64,
    pub skipped_unsupported: u64,
    pub skipped_processed: u64,
}

/// Result of scanning a directory tree.
#[derive(Debug, Default)]
pub struct ScanResult {
    pub entries: Vec<ScanEntry>,
    pub report: ScanReport,
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry
        .file_name()
        .to_str()
        .map(|name| name.starts_with('.'))
        .unwrap_or(false)
}

/// Walk `root` and collect supported image files.
///
/// Hidden directories are pruned before descent; hidden files and files with
/// unsupported extensions are counted and skipped. When `skip_processed` is
/// set, files whose stem carries the processed marker for `scheme` are
/// skipped as well. Entries within a directory are visited in filename order
/// so dry runs are reproducible.
///
/// Only directory metadata is read; file contents are never opened.
pub fn scan(
    root: &Path,
    prefix: &str,
    scheme: NamingScheme,
    skip_processed: bool,
) -> Result<ScanResult> {
    if !root.is_dir() {
        return Err(Error::InvalidTargetDirectory(root.display().to_string()));
    }

    let mut result = ScanResult::default();

    let walker = WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        // Prune hidden directories (like .git, .venv) before descending.
        // The root itself is exempt so "." works as a target.
        .filter_entry(|e| e.depth() == 0 || !e.file_type().is_dir() || !is_hidden(e));

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                debug!("Skipping unreadable entry: {}", e);
                continue;
            }
        };

        if !entry.file_type().is_file() {
            continue;
        }

        if is_hidden(&entry) {
            result.report.skipped_hidden += 1;
            continue;
        }

        let supported = entry
            .path()
            .extension()
            .and_then(|ext| ext.to_str())
            .map(Config::is_supported_extension)
            .unwrap_or(false);
        if !supported {
            result.report.skipped_unsupported += 1;
            continue;
        }

        let filename = entry.file_name().to_string_lossy();
        if skip_processed && has_processed_marker(&filename, prefix, scheme) {
            debug!("Skipping already processed file: {}", entry.path().display());
            result.report.skipped_processed += 1;
            continue;
        }

        let containing_directory = entry
            .path()
            .parent()
            .unwrap_or(root)
            .to_path_buf();

        result.entries.push(ScanEntry {
            path: entry.path().to_path_buf(),
            containing_directory,
        });
    }

    Ok(result)
}
