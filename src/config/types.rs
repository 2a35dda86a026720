//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument
//! parsing and exporter configuration.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::constants::{
    DEFAULT_BASE_URL, DEFAULT_DB_HOST, DEFAULT_DB_NAME, DEFAULT_DB_PORT, DEFAULT_KEY_COLUMN,
    DEFAULT_PATH_COLUMN, DEFAULT_TABLE, PAGE_SIZE,
};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to
/// most verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// Controls how log messages are formatted:
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Fixed exporter configuration: where the rows live and how lines are built.
///
/// The CLI does not expose any of this; it is compile-time configuration
/// gathered into one structure so library callers (and tests) can substitute
/// their own table, base URL, or page size.
#[derive(Debug, Clone)]
pub struct ExporterSettings {
    /// Database host
    pub db_host: String,
    /// Database port
    pub db_port: u16,
    /// Database (schema) name
    pub db_name: String,
    /// Table holding the exportable rows
    pub table: String,
    /// Integer paging-key column
    pub key_column: String,
    /// Path column appended to the base URL
    pub path_column: String,
    /// Base URL each line starts with
    pub base_url: String,
    /// Width of one key-range page
    pub page_size: i64,
}

impl Default for ExporterSettings {
    fn default() -> Self {
        Self {
            db_host: DEFAULT_DB_HOST.to_string(),
            db_port: DEFAULT_DB_PORT,
            db_name: DEFAULT_DB_NAME.to_string(),
            table: DEFAULT_TABLE.to_string(),
            key_column: DEFAULT_KEY_COLUMN.to_string(),
            path_column: DEFAULT_PATH_COLUMN.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            page_size: PAGE_SIZE,
        }
    }
}

/// Run configuration (CLI surface plus exporter settings).
///
/// The three positional arguments mirror the tool's historical invocation:
/// output directory, database username, database password. Everything else
/// is fixed configuration carried in [`ExporterSettings`].
#[derive(Parser, Debug, Clone)]
#[command(
    name = "sitemap_export",
    about = "Exports one URL per database row into siteMap.txt and verifies the line count"
)]
pub struct Config {
    /// Directory the sitemap file is written into (must already exist)
    pub output_dir: PathBuf,

    /// Database username
    pub db_user: String,

    /// Database password
    pub db_password: String,

    /// Log level
    #[arg(long, value_enum, default_value = "info")]
    pub log_level: LogLevel,

    /// Log format
    #[arg(long, value_enum, default_value = "plain")]
    pub log_format: LogFormat,

    /// Fixed exporter settings (not exposed on the CLI)
    #[arg(skip)]
    pub settings: ExporterSettings,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("."),
            db_user: String::new(),
            db_password: String::new(),
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
            settings: ExporterSettings::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_conversion() {
        // Test all LogLevel variants convert correctly to log::LevelFilter
        assert_eq!(
            log::LevelFilter::from(LogLevel::Error),
            log::LevelFilter::Error
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Warn),
            log::LevelFilter::Warn
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Info),
            log::LevelFilter::Info
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Debug),
            log::LevelFilter::Debug
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Trace),
            log::LevelFilter::Trace
        );
    }

    #[test]
    fn test_settings_default() {
        let settings = ExporterSettings::default();
        assert_eq!(settings.page_size, 10_000);
        assert_eq!(settings.db_port, 3306);
        assert_eq!(settings.table, "pages");
        assert_eq!(settings.key_column, "id");
        assert_eq!(settings.base_url, "https://youtube.com");
    }

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.output_dir, PathBuf::from("."));
        assert!(config.db_user.is_empty());
        assert_eq!(config.settings.page_size, 10_000);
    }
}
