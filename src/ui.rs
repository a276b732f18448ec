//! Formatting for user-facing output.
//!
//! Styling comes from `console` and is dropped automatically when the stream
//! is not a terminal, so CI logs get plain `ERROR: ` lines.

use console::style;

use crate::warning::GateWarning;

/// Print the single failure diagnostic
pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red().bold().for_stderr(), message);
}

/// Print the final success line
pub fn display_success(message: &str) {
    println!("{} {}", style("✓").green(), message);
}

/// Print a non-fatal warning
pub fn display_warning(warning: &GateWarning) {
    eprintln!("{} {}", style("WARNING:").yellow().for_stderr(), warning);
}
