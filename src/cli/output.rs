use colored::Colorize;
use std::fmt;

/// Print an informational message.
pub fn info(message: impl fmt::Display) {
    println!("{}", message.to_string().bright_cyan());
}

/// Print a success message.
pub fn success(message: impl fmt::Display) {
    println!("{}", message.to_string().bright_green());
}

/// Print a warning message.
pub fn warning(message: impl fmt::Display) {
    println!("{}", message.to_string().bright_yellow());
}

/// Print an error message to stderr.
pub fn error(message: impl fmt::Display) {
    eprintln!("{}", message.to_string().bright_red());
}

/// Print a section header.
pub fn section(title: impl fmt::Display) {
    println!("{}", format!("=== {} ===", title).bold());
}
