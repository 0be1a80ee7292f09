//! Configuration validation logic.

use crate::config::loader::Config;
use crate::error::{Error, Result};
use regex::Regex;
use url::Url;

/// Maximum prefix length. Long prefixes crowd out the description part
/// of the new filename.
const MAX_PREFIX_LENGTH: usize = 32;

/// Validate the entire configuration.
pub fn validate_config(config: &Config) -> Result<()> {
    validate_api_base_url(&config.api.base_url)?;
    validate_prefix(&config.rename.prefix)?;

    if let Some(dir) = &config.behavior.target_directory {
        if !dir.is_dir() {
            return Err(Error::InvalidTargetDirectory(dir.display().to_string()));
        }
    }

    Ok(())
}

/// Validate that the API base URL parses.
pub fn validate_api_base_url(base_url: &str) -> Result<()> {
    Url::parse(base_url)?;
    Ok(())
}

/// Validate the processed-file prefix.
///
/// An empty prefix is allowed; it disables skip detection for the
/// prefix-based schemes.
pub fn validate_prefix(prefix: &str) -> Result<()> {
    if prefix.is_empty() {
        return Ok(());
    }

    if prefix.len() > MAX_PREFIX_LENGTH {
        return Err(Error::ConfigValidation {
            field: "prefix".to_string(),
            message: format!(
                "Prefix must be at most {} characters (got {})",
                MAX_PREFIX_LENGTH,
                prefix.len()
            ),
        });
    }

    // Prefix pattern: alphanumeric, hyphens, underscores
    let prefix_pattern = Regex::new(r"^[a-zA-Z0-9_-]+$").unwrap();
    if !prefix_pattern.is_match(prefix) {
        return Err(Error::ConfigValidation {
            field: "prefix".to_string(),
            message: format!(
                "Prefix '{}' contains invalid characters. Only alphanumeric, hyphens, and underscores allowed.",
                prefix
            ),
        });
    }

    Ok(())
}

/// Resolve interactions between the naming scheme and the skip flag,
/// mutating the config where a setting cannot be honored.
///
/// Returns human-readable warnings for the caller to print.
pub fn reconcile_scheme_options(config: &mut Config) -> Vec<String> {
    let mut warnings = Vec::new();

    if config.rename.naming_scheme.uses_prefix() && config.rename.prefix.is_empty() {
        warnings.push(
            "Naming scheme uses a prefix, but the prefix is empty. \
             Files will not be skippable on a re-run."
                .to_string(),
        );
    }

    if !config.rename.naming_scheme.supports_skip_detection() && config.behavior.skip_processed {
        warnings.push(format!(
            "Cannot reliably skip processed files with the '{}' naming scheme. Disabling skip.",
            config.rename.naming_scheme
        ));
        config.behavior.skip_processed = false;
    }

    if !config.behavior.skip_processed {
        warnings.push(
            "Running without skipping processed files. Files may be renamed multiple times."
                .to_string(),
        );
    }

    warnings
}
