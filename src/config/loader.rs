//! Configuration structures and loading logic.

use crate::config::schemes::NamingScheme;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Supported image file extensions, compared case-insensitively.
pub const SUPPORTED_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "webp", "gif"];

/// Main configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub rename: RenameConfig,

    #[serde(default)]
    pub behavior: BehaviorConfig,
}

/// Vision API configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the OpenAI-compatible API (e.g. LM Studio).
    #[serde(default = "default_api_base_url")]
    pub base_url: String,

    /// Model name to use for API calls.
    #[serde(default = "default_model")]
    pub model: String,

    /// LLM temperature. Lower is more focused.
    #[serde(default = "default_temperature")]
    pub temperature: f32,

    /// Max tokens for the response. Keep low for keywords.
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,

    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,
}

/// Renaming configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenameConfig {
    /// Prefix marking processed files. Empty string disables the marker.
    #[serde(default = "default_prefix")]
    pub prefix: String,

    /// How original name, prefix and description combine.
    #[serde(default)]
    pub naming_scheme: NamingScheme,
}

/// Behavior configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BehaviorConfig {
    /// Target directory to process.
    #[serde(default)]
    pub target_directory: Option<PathBuf>,

    /// Skip files that already carry the processed marker.
    #[serde(default = "default_true")]
    pub skip_processed: bool,

    /// Report planned renames without touching the filesystem.
    #[serde(default)]
    pub dry_run: bool,

    /// Verbose output (API calls, skipped files).
    #[serde(default)]
    pub verbose: bool,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_api_base_url(),
            model: default_model(),
            temperature: default_temperature(),
            max_tokens: default_max_tokens(),
            timeout_seconds: default_timeout(),
        }
    }
}

impl Default for RenameConfig {
    fn default() -> Self {
        Self {
            prefix: default_prefix(),
            naming_scheme: NamingScheme::default(),
        }
    }
}

impl Default for BehaviorConfig {
    fn default() -> Self {
        Self {
            target_directory: None,
            skip_processed: true,
            dry_run: false,
            verbose: false,
        }
    }
}

fn default_api_base_url() -> String {
    "http://127.0.0.1:1234/v1".to_string()
}

fn default_model() -> String {
    "llama3.1-11b-vision-instruct".to_string()
}

fn default_temperature() -> f32 {
    0.3
}

fn default_max_tokens() -> u32 {
    50
}

fn default_timeout() -> u64 {
    60
}

fn default_prefix() -> String {
    "IMGSCAN".to_string()
}

fn default_true() -> bool {
    true
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::Config(format!("Configuration file not found: {}", path.display()))
            } else {
                Error::Io(e)
            }
        })?;

        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Whether a filename extension belongs to a supported image type.
    pub fn is_supported_extension(ext: &str) -> bool {
        let ext = ext.to_lowercase();
        SUPPORTED_EXTENSIONS.contains(&ext.as_str())
    }
}
