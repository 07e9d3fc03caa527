//! Coloring for rejection and error messages.

use std::io::IsTerminal;
use std::sync::OnceLock;

static NO_COLOR: OnceLock<bool> = OnceLock::new();

const RESET: &str = "\x1b[0m";
const RED: &str = "\x1b[31m";
const YELLOW: &str = "\x1b[33m";

/// Decides once whether messages are colored.
///
/// Color is off for `--no-color`, any non-empty `NO_COLOR`, or a stdout that
/// is not a terminal (piped sessions stay plain).
pub fn init(no_color_flag: bool) {
    let env_disabled = std::env::var_os("NO_COLOR").is_some_and(|value| !value.is_empty());
    let _ = NO_COLOR.set(no_color_flag || env_disabled || !std::io::stdout().is_terminal());
}

/// Colors stay off until [`init`] runs.
pub fn is_disabled() -> bool {
    *NO_COLOR.get().unwrap_or(&true)
}

fn paint(text: &str, code: &str, disabled: bool) -> String {
    if disabled {
        text.to_string()
    } else {
        format!("{code}{text}{RESET}")
    }
}

pub struct Colors;

impl Colors {
    pub fn error(text: &str) -> String {
        paint(text, RED, is_disabled())
    }

    /// Used for re-prompt notices.
    pub fn warning(text: &str) -> String {
        paint(text, YELLOW, is_disabled())
    }
}
