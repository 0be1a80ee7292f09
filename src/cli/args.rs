//! Command-line argument definitions using clap.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use crate::config::{Config, NamingScheme};

/// Image renaming CLI.
#[derive(Parser, Debug)]
#[command(
    name = "imgscan",
    version,
    about = "Scan images, get keyword descriptions via a vision API, and rename files",
    long_about = "A CLI tool that walks a directory tree, asks an OpenAI-compatible vision \
                  model for a short keyword description of each image, and renames the file \
                  accordingly.\n\n\
                  Files renamed by a previous run are detected by their prefix marker and \
                  skipped, so re-running over the same tree is safe."
)]
pub struct Args {
    /// Root directory to process. If omitted, you will be prompted interactively.
    #[arg(short = 'd', long = "target-directory")]
    pub target_directory: Option<PathBuf>,

    /// Base URL of the OpenAI-compatible API (e.g. LM Studio).
    #[arg(long, env = "IMGSCAN_API_BASE_URL")]
    pub api_base_url: Option<String>,

    /// Model name to use for API calls.
    #[arg(long, env = "IMGSCAN_MODEL")]
    pub model: Option<String>,

    /// LLM temperature (creativity). Lower is more focused.
    #[arg(long)]
    pub temperature: Option<f32>,

    /// Max tokens for the LLM response. Keep low for keywords.
    #[arg(long)]
    pub max_tokens: Option<u32>,

    /// Prefix marking processed files. Pass an empty string to disable.
    #[arg(long)]
    pub prefix: Option<String>,

    /// How to name renamed files.
    #[arg(long, value_enum)]
    pub naming_scheme: Option<NamingSchemeArg>,

    /// Skip files that appear already processed (default).
    #[arg(long, overrides_with = "no_skip_processed")]
    pub skip_processed: bool,

    /// Do not skip files that appear already processed.
    #[arg(long, overrides_with = "skip_processed")]
    pub no_skip_processed: bool,

    /// Show what would be renamed without actually changing files.
    #[arg(long)]
    pub dry_run: bool,

    /// Enable verbose output (API calls, skipped files, etc.).
    #[arg(short, long)]
    pub verbose: bool,

    /// Skip the final confirmation prompt before processing.
    #[arg(short, long)]
    pub yes: bool,

    /// Path to configuration file.
    #[arg(short, long, default_value = "imgscan.toml")]
    pub config: PathBuf,
}

/// CLI naming scheme argument.
#[derive(Debug, Clone, Copy, ValueEnum)]
#[value(rename_all = "snake_case")]
pub enum NamingSchemeArg {
    /// {original}_{prefix}_{description}.ext
    OriginalPrefixDesc,
    /// {prefix}_{description}.ext
    PrefixDesc,
    /// {description}.ext
    DescOnly,
}

impl From<NamingSchemeArg> for NamingScheme {
    fn from(arg: NamingSchemeArg) -> Self {
        match arg {
            NamingSchemeArg::OriginalPrefixDesc => NamingScheme::OriginalPrefixDesc,
            NamingSchemeArg::PrefixDesc => NamingScheme::PrefixDesc,
            NamingSchemeArg::DescOnly => NamingScheme::DescOnly,
        }
    }
}

impl Args {
    /// Merge CLI arguments into an existing config, overriding where specified.
    pub fn merge_into_config(self, config: &mut Config) {
        if let Some(dir) = self.target_directory {
            config.behavior.target_directory = Some(dir);
        }

        if let Some(base_url) = self.api_base_url {
            config.api.base_url = base_url;
        }

        if let Some(model) = self.model {
            config.api.model = model;
        }

        if let Some(temperature) = self.temperature {
            config.api.temperature = temperature;
        }

        if let Some(max_tokens) = self.max_tokens {
            config.api.max_tokens = max_tokens;
        }

        if let Some(prefix) = self.prefix {
            config.rename.prefix = prefix;
        }

        if let Some(scheme) = self.naming_scheme {
            config.rename.naming_scheme = scheme.into();
        }

        // Boolean flag pair; at most one survives arg parsing
        if self.skip_processed {
            config.behavior.skip_processed = true;
        }

        if self.no_skip_processed {
            config.behavior.skip_processed = false;
        }

        if self.dry_run {
            config.behavior.dry_run = true;
        }

        if self.verbose {
            config.behavior.verbose = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_overrides() {
        let args = Args {
            target_directory: Some(PathBuf::from("/photos")),
            api_base_url: None,
            model: Some("qwen2-vl".to_string()),
            temperature: None,
            max_tokens: None,
            prefix: Some(String::new()),
            naming_scheme: Some(NamingSchemeArg::DescOnly),
            skip_processed: false,
            no_skip_processed: true,
            dry_run: true,
            verbose: false,
            yes: false,
            config: PathBuf::from("imgscan.toml"),
        };

        let mut config = Config::default();
        args.merge_into_config(&mut config);

        assert_eq!(
            config.behavior.target_directory,
            Some(PathBuf::from("/photos"))
        );
        assert_eq!(config.api.model, "qwen2-vl");
        // Unset args leave config defaults alone
        assert_eq!(config.api.base_url, "http://127.0.0.1:1234/v1");
        assert_eq!(config.rename.prefix, "");
        assert_eq!(config.rename.naming_scheme, NamingScheme::DescOnly);
        assert!(!config.behavior.skip_processed);
        assert!(config.behavior.dry_run);
    }

    #[test]
    fn test_skip_processed_flag_reenables_config_false() {
        let args = Args {
            target_directory: None,
            api_base_url: None,
            model: None,
            temperature: None,
            max_tokens: None,
            prefix: None,
            naming_scheme: None,
            skip_processed: true,
            no_skip_processed: false,
            dry_run: false,
            verbose: false,
            yes: false,
            config: PathBuf::from("imgscan.toml"),
        };

        // Config file disabled skipping; the positive flag wins
        let mut config = Config::default();
        config.behavior.skip_processed = false;
        args.merge_into_config(&mut config);

        assert!(config.behavior.skip_processed);
    }

    #[test]
    fn test_neither_skip_flag_keeps_config_value() {
        let args = Args {
            target_directory: None,
            api_base_url: None,
            model: None,
            temperature: None,
            max_tokens: None,
            prefix: None,
            naming_scheme: None,
            skip_processed: false,
            no_skip_processed: false,
            dry_run: false,
            verbose: false,
            yes: false,
            config: PathBuf::from("imgscan.toml"),
        };

        let mut config = Config::default();
        config.behavior.skip_processed = false;
        args.merge_into_config(&mut config);

        assert!(!config.behavior.skip_processed);
    }
}
