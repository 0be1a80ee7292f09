//! imgscan - CLI entry point.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use dialoguer::{Confirm, Input};
use tracing_subscriber::{fmt, EnvFilter};

use imgscan::{
    api::{DescriptionProvider, VisionApi},
    cli::Args,
    config::{reconcile_scheme_options, validate_config, Config},
    error::{exit_codes, Error, Result},
    output::{
        create_file_bar, create_scan_spinner, print_banner, print_error, print_info,
        print_run_summary, print_scan_report, print_settings_review, print_warning, RunStats,
    },
    rename::{rename_entry, RenameFailure, RenameOutcome},
    scan::{scan, ScanEntry},
};

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(e) => {
            print_error(&format!("{}", e));
            ExitCode::from(exit_codes::ABORT as u8)
        }
    }
}

async fn run() -> Result<()> {
    // Parse CLI arguments
    let args = Args::parse();

    // Set up logging
    let log_level = if args.verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    fmt().with_env_filter(filter).with_target(false).init();

    // Print banner
    print_banner();

    // Load configuration and merge CLI arguments over it
    let assume_yes = args.yes;
    let mut config = if args.config.exists() {
        Config::load(&args.config)?
    } else {
        Config::default()
    };
    args.merge_into_config(&mut config);

    // Resolve the target directory, prompting if it was not given
    let target_directory = resolve_target_directory(&mut config)?;
    print_info(&format!(
        "Using target directory: {}",
        target_directory.display()
    ));

    // Validate configuration and reconcile scheme/skip interactions
    validate_config(&config)?;
    for warning in reconcile_scheme_options(&mut config) {
        print_warning(&warning);
    }

    // Confirmation prompt
    if !assume_yes {
        print_settings_review(&config, &target_directory);
        let confirmed = Confirm::new()
            .with_prompt("Proceed with processing?")
            .default(false)
            .interact()
            .map_err(|_| Error::Cancelled)?;
        if !confirmed {
            return Err(Error::Cancelled);
        }
    }

    // Scan the directory tree
    let spinner = create_scan_spinner("Scanning directories for image files...");
    let scan_result = scan(
        &target_directory,
        &config.rename.prefix,
        config.rename.naming_scheme,
        config.behavior.skip_processed,
    )?;
    spinner.finish_and_clear();

    print_scan_report(&scan_result.report, scan_result.entries.len());
    if scan_result.entries.is_empty() {
        return Ok(());
    }

    // Initialize the API client
    let api = VisionApi::new(&config.api)?;

    // Process files
    print_info(&format!(
        "Starting processing... (Dry Run: {})",
        config.behavior.dry_run
    ));
    let bar = create_file_bar(scan_result.entries.len() as u64);
    let mut stats = RunStats::default();

    for entry in &scan_result.entries {
        let outcome = process_entry(&api, &config, entry).await;
        report_outcome(&bar, &outcome, config.behavior.verbose);
        stats.record(&outcome);
        bar.inc(1);
    }

    bar.finish_and_clear();
    print_run_summary(&stats, config.behavior.dry_run);

    Ok(())
}

/// Fetch a description for one file and rename it, folding every failure
/// into a discriminated outcome.
async fn process_entry(
    provider: &impl DescriptionProvider,
    config: &Config,
    entry: &ScanEntry,
) -> RenameOutcome {
    let description = match provider.describe(&entry.path).await {
        Ok(description) => description,
        Err(e) => {
            return RenameOutcome::Failed {
                old: entry.path.clone(),
                reason: RenameFailure::DescriptionUnavailable(e.to_string()),
            }
        }
    };

    rename_entry(
        entry,
        &description,
        config.rename.naming_scheme,
        &config.rename.prefix,
        config.behavior.dry_run,
    )
}

/// Print one outcome above the progress bar.
fn report_outcome(bar: &indicatif::ProgressBar, outcome: &RenameOutcome, verbose: bool) {
    match outcome {
        RenameOutcome::Renamed { old, new } => {
            if verbose {
                bar.println(format!(
                    "Renamed '{}' to '{}'",
                    file_name(old),
                    file_name(new)
                ));
            }
        }
        RenameOutcome::DryRunPlanned { old, new } => {
            bar.println(format!(
                "[DRY RUN] Would rename '{}' to '{}'",
                file_name(old),
                file_name(new)
            ));
        }
        RenameOutcome::Failed { old, reason } => {
            bar.println(format!("Skipping '{}': {}", file_name(old), reason));
        }
    }
}

fn file_name(path: &std::path::Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Take the target directory from config or prompt for it, and verify it
/// exists. The canonicalized path is written back into the config.
fn resolve_target_directory(config: &mut Config) -> Result<PathBuf> {
    let target = match config.behavior.target_directory.clone() {
        Some(dir) => dir,
        None => {
            print_info("Target directory not specified. Please select interactively.");
            let home = directories::UserDirs::new()
                .map(|dirs| dirs.home_dir().display().to_string())
                .unwrap_or_else(|| ".".to_string());
            let input: String = Input::new()
                .with_prompt("Enter target directory path")
                .default(home)
                .interact_text()
                .map_err(|_| Error::Cancelled)?;
            PathBuf::from(input.trim())
        }
    };

    if !target.is_dir() {
        return Err(Error::InvalidTargetDirectory(target.display().to_string()));
    }

    let resolved = target.canonicalize()?;
    config.behavior.target_directory = Some(resolved.clone());
    Ok(resolved)
}
