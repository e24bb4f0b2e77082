//! Shared console helpers: color gating and message prefixes.

use owo_colors::OwoColorize;

/// Colors are on unless `NO_COLOR` is set.
pub fn use_colors() -> bool {
    std::env::var_os("NO_COLOR").is_none()
}

/// Leading symbol for informational lines.
pub fn info_prefix() -> String {
    if use_colors() {
        "ℹ".blue().bold().to_string()
    } else {
        "ℹ".to_string()
    }
}

/// Leading symbol for success lines.
pub fn ok_prefix() -> String {
    if use_colors() {
        "✔".green().bold().to_string()
    } else {
        "✔".to_string()
    }
}

/// Leading symbol for error lines.
pub fn error_prefix() -> String {
    if use_colors() {
        "✖".red().bold().to_string()
    } else {
        "✖".to_string()
    }
}
