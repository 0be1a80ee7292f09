//! Configuration module for imgscan.
//!
//! This module handles:
//! - Loading configuration from TOML files
//! - CLI argument merging
//! - Configuration validation and scheme/skip reconciliation

pub mod loader;
pub mod schemes;
pub mod validation;

pub use loader::{ApiConfig, BehaviorConfig, Config, RenameConfig, SUPPORTED_EXTENSIONS};
pub use schemes::NamingScheme;
pub use validation::{reconcile_scheme_options, validate_config};
