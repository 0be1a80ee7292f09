//! Filename composition and collision-safe renaming.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

use crate::config::NamingScheme;
use crate::rename::sanitize::sanitize_description;
use crate::scan::ScanEntry;

/// Numbered-suffix attempts before giving up on a unique name.
const MAX_COLLISION_ATTEMPTS: u32 = 100;

/// Why a single file could not be renamed.
///
/// These are per-file outcomes, not process errors; one file failing never
/// aborts the batch.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RenameFailure {
    #[error("description sanitized to an empty string")]
    EmptyDescription,

    #[error("no description available: {0}")]
    DescriptionUnavailable(String),

    #[error("no unique filename found for '{base}' after {attempts} attempts")]
    NoUniqueName { base: String, attempts: u32 },

    #[error("rename failed: {0}")]
    Filesystem(String),
}

/// Result of attempting to rename one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenameOutcome {
    /// The file was renamed on disk.
    Renamed { old: PathBuf, new: PathBuf },
    /// Dry-run mode; the rename was planned but nothing was touched.
    DryRunPlanned { old: PathBuf, new: PathBuf },
    /// The file was left untouched.
    Failed { old: PathBuf, reason: RenameFailure },
}

impl RenameOutcome {
    /// Whether the outcome counts as a success (real or simulated).
    pub fn is_success(&self) -> bool {
        !matches!(self, RenameOutcome::Failed { .. })
    }
}

/// Split a filename into its stem and extension, keeping the extension's
/// leading dot and original case.
fn split_stem_ext(filename: &str) -> (&str, &str) {
    match filename.rsplit_once('.') {
        // A leading dot is a hidden file, not an extension separator
        Some((stem, _)) if !stem.is_empty() => (stem, &filename[stem.len()..]),
        _ => (filename, ""),
    }
}

/// Compose the base filename (without extension) for a sanitized description.
fn compose_base(stem: &str, prefix: &str, sanitized: &str, scheme: NamingScheme) -> String {
    match scheme {
        NamingScheme::OriginalPrefixDesc => format!("{}_{}_{}", stem, prefix, sanitized),
        NamingScheme::PrefixDesc => format!("{}_{}", prefix, sanitized),
        NamingScheme::DescOnly => sanitized.to_string(),
    }
}

/// Find a free path for `base` + `ext` in `dir`, appending `_1`, `_2`, ...
/// before the extension until one is available.
///
/// Existence is re-checked against the filesystem on every attempt rather
/// than against an in-memory set, so names taken earlier in the same run are
/// seen here.
fn resolve_collision(dir: &Path, base: &str, ext: &str) -> Result<PathBuf, RenameFailure> {
    let candidate = dir.join(format!("{}{}", base, ext));
    if !candidate.exists() {
        return Ok(candidate);
    }

    for counter in 1..=MAX_COLLISION_ATTEMPTS {
        let candidate = dir.join(format!("{}_{}{}", base, counter, ext));
        if !candidate.exists() {
            return Ok(candidate);
        }
    }

    Err(RenameFailure::NoUniqueName {
        base: base.to_string(),
        attempts: MAX_COLLISION_ATTEMPTS,
    })
}

/// Rename one scanned file according to a raw model description.
///
/// The description is sanitized, a new name is composed per `scheme`,
/// collisions are resolved with numeric suffixes, and the file is renamed
/// within its containing directory. In dry-run mode the plan is returned and
/// the filesystem stays untouched. Every failure mode is reported in the
/// outcome; the original file is never left in a partial state.
pub fn rename_entry(
    entry: &ScanEntry,
    description: &str,
    scheme: NamingScheme,
    prefix: &str,
    dry_run: bool,
) -> RenameOutcome {
    let old = entry.path.clone();

    let sanitized = sanitize_description(description);
    if sanitized.is_empty() {
        return RenameOutcome::Failed {
            old,
            reason: RenameFailure::EmptyDescription,
        };
    }

    let filename = entry
        .path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let (stem, ext) = split_stem_ext(&filename);

    let base = compose_base(stem, prefix, &sanitized, scheme);

    let new = match resolve_collision(&entry.containing_directory, &base, ext) {
        Ok(path) => path,
        Err(reason) => return RenameOutcome::Failed { old, reason },
    };

    if dry_run {
        return RenameOutcome::DryRunPlanned { old, new };
    }

    match fs::rename(&old, &new) {
        Ok(()) => {
            debug!("Renamed '{}' to '{}'", old.display(), new.display());
            RenameOutcome::Renamed { old, new }
        }
        Err(e) => RenameOutcome::Failed {
            old,
            reason: RenameFailure::Filesystem(e.to_string()),
        },
    }
}
