//! Status message functions for terminal output.

use owo_colors::OwoColorize;

use super::colors_enabled;

/// Print a success message to stderr.
///
/// # Arguments
///
/// * `message` - Message to display
///
/// # Examples
///
/// ```no_run
/// use pagekit_cli::ui::success;
///
/// success("Wrote development configuration to pack.json");
/// ```
pub fn success(message: &str) {
    if colors_enabled() {
        eprintln!("{} {}", "✓".green().bold(), message);
    } else {
        eprintln!("✓ {}", message);
    }
}

/// Print an info message to stderr.
///
/// # Arguments
///
/// * `message` - Message to display
pub fn info(message: &str) {
    if colors_enabled() {
        eprintln!("{} {}", "ℹ".blue().bold(), message);
    } else {
        eprintln!("ℹ {}", message);
    }
}

/// Print a warning message to stderr.
///
/// # Arguments
///
/// * `message` - Message to display
///
/// # Examples
///
/// ```no_run
/// use pagekit_cli::ui::warning;
///
/// warning("No page templates found in src/views");
/// ```
pub fn warning(message: &str) {
    if colors_enabled() {
        eprintln!("{} {}", "⚠".yellow().bold(), message.yellow());
    } else {
        eprintln!("⚠ {}", message);
    }
}
