//! UI helpers for CLI display.

use console::style;

/// Check if color output is disabled via `NO_COLOR` env var.
#[must_use]
pub fn is_color_disabled() -> bool {
    std::env::var("NO_COLOR").is_ok()
}

/// Label for a comparison row.
#[must_use]
pub fn status_label(ok: bool) -> String {
    let text = if ok { "OK" } else { "ERROR" };
    if is_color_disabled() {
        text.to_string()
    } else if ok {
        style(text).green().to_string()
    } else {
        style(text).red().bold().to_string()
    }
}

/// Print a section header.
pub fn print_header(text: &str) {
    if is_color_disabled() {
        println!("{text}");
        println!("{:-<60}", "");
    } else {
        println!("{}", style(text).bold().cyan());
        println!("{}", style(format!("{:-<60}", "")).dim());
    }
}

/// Print the outcome of a cross-validation run.
pub fn print_verdict(agreeing: usize) {
    let text = format!("{agreeing} multipliers agree");
    if is_color_disabled() {
        println!("[OK] {text}");
    } else {
        println!("{} {text}", style("[OK]").green().bold());
    }
}

/// Print an error message to stderr.
pub fn print_error(text: &str) {
    if is_color_disabled() {
        eprintln!("Error: {text}");
    } else {
        eprintln!("{} {text}", style("Error:").red().bold());
    }
}
