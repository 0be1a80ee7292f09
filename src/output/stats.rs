//! Statistics reporting.

use console::style;

use crate::rename::RenameOutcome;
use crate::scan::ScanReport;

/// Success/failure tallies for one run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunStats {
    pub succeeded: u64,
    pub failed: u64,
}

impl RunStats {
    /// Record the outcome of one file.
    pub fn record(&mut self, outcome: &RenameOutcome) {
        if outcome.is_success() {
            self.succeeded += 1;
        } else {
            self.failed += 1;
        }
    }

    /// Total number of files accounted for.
    pub fn total(&self) -> u64 {
        self.succeeded + self.failed
    }
}

/// Print what the scan skipped, per category.
pub fn print_scan_report(report: &ScanReport, found: usize) {
    if found == 0 {
        println!("No processable image files found.");
        println!(
            "Skipped {} processed, {} non-image, {} hidden files.",
            report.skipped_processed, report.skipped_unsupported, report.skipped_hidden
        );
        return;
    }

    println!("Found {} image files to process.", found);
    if report.skipped_processed > 0 {
        println!(
            "(Skipped {} previously processed files)",
            report.skipped_processed
        );
    }
    if report.skipped_unsupported > 0 {
        println!("(Skipped {} non-image files)", report.skipped_unsupported);
    }
    if report.skipped_hidden > 0 {
        println!("(Skipped {} hidden files)", report.skipped_hidden);
    }
}

/// Print the final run summary.
pub fn print_run_summary(stats: &RunStats, dry_run: bool) {
    println!();
    println!("{}", style("═".repeat(50)).dim());
    println!("{}", style("Processing Summary:").bold());
    if dry_run {
        println!(
            "  Dry run complete. Would have attempted {} files.",
            stats.total()
        );
        println!("  Simulated renames:  {}", style(stats.succeeded).green());
        println!(
            "  Simulated failures: {} (API errors, bad descriptions, etc.)",
            style(stats.failed).yellow()
        );
    } else {
        println!("  Renamed: {}", style(stats.succeeded).green());
        println!(
            "  Failed:  {} (API errors, bad descriptions, rename errors, etc.)",
            if stats.failed > 0 {
                style(stats.failed).red()
            } else {
                style(stats.failed).green()
            }
        );
    }
    println!("{}", style("═".repeat(50)).dim());
}
