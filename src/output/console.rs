//! Console output utilities.

use console::style;

use crate::config::Config;

/// Print an info message.
pub fn print_info(message: &str) {
    println!("{} {}", style("INFO").cyan().bold(), message);
}

/// Print a warning message.
pub fn print_warning(message: &str) {
    eprintln!("{} {}", style("WARN").yellow().bold(), message);
}

/// Print an error message.
pub fn print_error(message: &str) {
    eprintln!("{} {}", style("ERROR").red().bold(), message);
}

/// Print the application banner.
pub fn print_banner() {
    let banner = r#"
╔═══════════════════════════════════════════════════╗
║     imgscan                                       ║
║     Vision-model powered image renamer            ║
╚═══════════════════════════════════════════════════╝
"#;
    println!("{}", style(banner).cyan());
}

/// Print the settings review shown before the confirmation prompt.
pub fn print_settings_review(config: &Config, target_directory: &std::path::Path) {
    println!();
    println!("{}", style("Review Settings:").bold());
    println!("  Target Directory: {}", target_directory.display());
    println!("  API URL:          {}", config.api.base_url);
    println!("  Model:            {}", config.api.model);
    println!(
        "  Naming Scheme:    {} (Prefix: '{}')",
        config.rename.naming_scheme, config.rename.prefix
    );
    println!("  Skip Processed:   {}", config.behavior.skip_processed);
    println!("  Dry Run:          {}", config.behavior.dry_run);
    println!();
}
