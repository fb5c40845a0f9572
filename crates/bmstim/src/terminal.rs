//! Styled status lines on stderr.

use std::path::Path;

use console::style;

/// Print a success message to stderr.
pub fn success(message: &str) {
    eprintln!("{} {}", style("✓").green().bold(), message);
}

/// Print an error message to stderr.
pub fn error(message: &str) {
    eprintln!("{} {}", style("✗").red().bold(), message);
}

/// Print a dimmed detail line to stderr.
pub fn dim(message: &str) {
    eprintln!("  {}", style(message).dim());
}

/// Print a path output (like "-> /path/to/file").
pub fn path_output(path: &Path) {
    eprintln!("  {} {}", style("→").dim(), style(path.display()).dim());
}
