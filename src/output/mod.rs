//! Output module for console output and progress.
//!
//! Provides:
//! - Colored console output
//! - Progress bars
//! - Scan and run statistics reporting

pub mod console;
pub mod progress;
pub mod stats;

pub use console::{print_banner, print_error, print_info, print_settings_review, print_warning};
pub use progress::{create_file_bar, create_scan_spinner};
pub use stats::{print_run_summary, print_scan_report, RunStats};
