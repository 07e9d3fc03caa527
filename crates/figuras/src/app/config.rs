//! Application configuration.

use std::env;

use tracing::warn;

use crate::app::commands::Cli;

pub const LOG_LEVEL_ENV: &str = "FIGURAS_LOG_LEVEL";

const DEFAULT_LOG_LEVEL: &str = "warn";
const VERBOSE_LOG_LEVEL: &str = "debug";
const KNOWN_LEVELS: [&str; 6] = ["off", "error", "warn", "info", "debug", "trace"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    log_level: String,
    no_color: bool,
    /// Value of the level variable that could not be used, reported once
    /// tracing is up.
    rejected_level: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            no_color: false,
            rejected_level: None,
        }
    }
}

impl AppConfig {
    pub fn from_cli(cli: &Cli) -> Self {
        let config = Self::from_env().with_no_color(cli.no_color);
        if cli.verbose {
            config.with_log_level(VERBOSE_LOG_LEVEL)
        } else {
            config
        }
    }

    pub fn from_env() -> Self {
        let mut config = Self::default();
        match parse_env_level(LOG_LEVEL_ENV) {
            LevelSetting::Unset => {}
            LevelSetting::Valid(level) => config.log_level = level,
            LevelSetting::Invalid(raw) => config.rejected_level = Some(raw),
        }
        config
    }

    pub fn log_level(&self) -> &str {
        &self.log_level
    }

    pub fn no_color(&self) -> bool {
        self.no_color
    }

    pub fn with_log_level(mut self, level: &str) -> Self {
        self.log_level = level.to_string();
        self
    }

    pub fn with_no_color(mut self, no_color: bool) -> Self {
        self.no_color = no_color;
        self
    }

    /// Logs settings that fell back to defaults. Call after tracing is initialized.
    pub fn report_fallbacks(&self) {
        if let Some(raw) = &self.rejected_level {
            warn!(
                value = %raw,
                key = LOG_LEVEL_ENV,
                default = DEFAULT_LOG_LEVEL,
                "Invalid log level; using default"
            );
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
enum LevelSetting {
    Unset,
    Valid(String),
    Invalid(String),
}

fn parse_env_level(key: &str) -> LevelSetting {
    let value = match env::var(key) {
        Ok(value) => value,
        Err(_) => return LevelSetting::Unset,
    };
    parse_level(&value)
}

fn parse_level(value: &str) -> LevelSetting {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return LevelSetting::Unset;
    }
    let level = trimmed.to_lowercase();
    if KNOWN_LEVELS.contains(&level.as_str()) {
        LevelSetting::Valid(level)
    } else {
        LevelSetting::Invalid(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cli(args: &[&str]) -> Cli {
        use clap::Parser;
        let mut argv = vec!["figuras"];
        argv.extend_from_slice(args);
        Cli::parse_from(argv)
    }

    #[test]
    fn test_parse_level() {
        assert_eq!(parse_level("debug"), LevelSetting::Valid("debug".into()));
        assert_eq!(parse_level("  INFO "), LevelSetting::Valid("info".into()));
        assert_eq!(parse_level(""), LevelSetting::Unset);
        assert_eq!(parse_level("   "), LevelSetting::Unset);
        assert_eq!(parse_level("loud"), LevelSetting::Invalid("loud".into()));
    }

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.log_level(), "warn");
        assert!(!config.no_color());
    }

    #[test]
    fn test_builders() {
        let config = AppConfig::default()
            .with_log_level("trace")
            .with_no_color(true);
        assert_eq!(config.log_level(), "trace");
        assert!(config.no_color());
    }

    #[test]
    fn test_verbose_overrides_level() {
        let config = AppConfig::from_cli(&cli(&["--verbose"]));
        assert_eq!(config.log_level(), "debug");
    }

    #[test]
    fn test_no_color_flag() {
        let config = AppConfig::from_cli(&cli(&["--no-color"]));
        assert!(config.no_color());
    }
}
