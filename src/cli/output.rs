//! Terminal output formatting with colors
//!
//! Respects NO_COLOR, CLICOLOR, CLICOLOR_FORCE automatically.

use colored::Colorize;

/// Print error (red bold "error:" prefix) to stderr
pub fn error(msg: &(impl std::fmt::Display + ?Sized)) {
    eprintln!("{}: {}", "error".red().bold(), msg);
}

/// Print hint (yellow "hint:" prefix) to stderr
pub fn hint(msg: &(impl std::fmt::Display + ?Sized)) {
    eprintln!("{}: {}", "hint".yellow(), msg);
}

/// Print section header (cyan bold)
pub fn header(msg: &(impl std::fmt::Display + ?Sized)) -> String {
    msg.to_string().cyan().bold().to_string()
}

/// Highlight a verb or option name (green)
pub fn name(msg: &(impl std::fmt::Display + ?Sized)) -> String {
    msg.to_string().green().to_string()
}

/// Print plain output (no color) to stdout
pub fn info(msg: &(impl std::fmt::Display + ?Sized)) {
    println!("{}", msg);
}

/// Print plain output (no color) to stderr
pub fn info_err(msg: &(impl std::fmt::Display + ?Sized)) {
    eprintln!("{}", msg);
}
