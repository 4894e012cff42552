//! UI helpers for CLI display.

use console::{style, Color};

/// Check if color output is disabled via `NO_COLOR` env var.
#[must_use]
pub fn is_color_disabled() -> bool {
    std::env::var("NO_COLOR").is_ok()
}

/// Format a header line, plain or styled.
#[must_use]
pub fn header_line(text: &str, plain: bool) -> String {
    let line = format!("=== {text} ===");
    if plain {
        line
    } else {
        style(line).bold().cyan().force_styling(true).to_string()
    }
}

/// Format a message behind a `[TAG]` prefix, plain or styled.
#[must_use]
pub fn status_line(tag: &str, color: Color, text: &str, plain: bool) -> String {
    let tag = format!("[{tag}]");
    if plain {
        format!("{tag} {text}")
    } else {
        let tag = style(tag).fg(color).bold().force_styling(true);
        format!("{tag} {text}")
    }
}

/// Print a styled header.
pub fn print_header(text: &str) {
    println!("{}", header_line(text, is_color_disabled()));
}

/// Print a success message.
pub fn print_success(text: &str) {
    println!("{}", status_line("OK", Color::Green, text, is_color_disabled()));
}

/// Print a warning message.
pub fn print_warning(text: &str) {
    eprintln!("{}", status_line("WARN", Color::Yellow, text, is_color_disabled()));
}

/// Print an error message.
pub fn print_error(text: &str) {
    eprintln!("{}", status_line("ERROR", Color::Red, text, is_color_disabled()));
}
