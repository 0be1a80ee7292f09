//! Error types for the imgscan application.

use thiserror::Error;

/// Main error type for the application.
///
/// Per-file rename failures are not represented here; they are data
/// (`rename::RenameOutcome::Failed`) so a single bad file never aborts
/// the batch.
#[derive(Error, Debug)]
pub enum Error {
    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid configuration value for '{field}': {message}")]
    ConfigValidation { field: String, message: String },

    #[error("Target directory not found or not a directory: {0}")]
    InvalidTargetDirectory(String),

    // API errors
    #[error("API error: {0}")]
    Api(String),

    #[error("API request timed out after {0} seconds")]
    ApiTimeout(u64),

    // Image errors
    #[error("Image encoding error: {0}")]
    ImageEncoding(String),

    // User interaction
    #[error("Operation cancelled by user")]
    Cancelled,

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // HTTP errors
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    // Serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    // URL parsing errors
    #[error("Invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),
}

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Process exit codes.
///
/// A batch that completes always exits 0, even when every file inside it
/// failed; only an invalid invocation or a user cancellation exits 1.
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const ABORT: i32 = 1;
}
