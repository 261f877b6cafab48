//! Formatting functions for operator-facing output.
//!
//! Everything here goes to stdout, errors included, so a pipeline log shows
//! the whole run in order. Styling is dropped when stdout is not a terminal.

use console::style;

use crate::boundary::NormalizationWarning;

/// Format an error line.
pub fn format_error(message: &str) -> String {
    format!("{} {}", style("ERROR:").red().bold(), message)
}

/// Format a normalization warning line.
pub fn format_warning(warning: &NormalizationWarning) -> String {
    format!("{} {}", style("WARNING:").yellow().bold(), warning)
}

/// Format the package header line.
pub fn format_package(name: &str) -> String {
    format!("--- Package: {} ---", style(name).bold())
}

/// Print an error message.
pub fn display_error(message: &str) {
    println!("{}", format_error(message));
}

/// Print a normalization warning.
pub fn display_warning(warning: &NormalizationWarning) {
    println!("{}", format_warning(warning));
}

/// Print the name of the package being bumped.
pub fn display_package(name: &str) {
    println!("{}", format_package(name));
}

/// Print the version before and after the bump.
///
/// # Arguments
/// * `current` - Version text as read from the metadata file
/// * `new` - Version text written back
pub fn display_versions(current: &str, new: &str) {
    println!("Current version: {}", current);
    println!("New version: {}", style(new).green());
}

/// Print a note that the file was left unchanged.
pub fn display_dry_run(path: &str) {
    println!("{} {} not modified", style("Dry run:").cyan(), path);
}
