//! Tests for command-line argument parsing.

use clap::Parser;
use sitemap_export::Config;
use std::path::PathBuf;

#[test]
fn positional_arguments_map_in_order() {
    let config = Config::try_parse_from(["sitemap_export", "/var/www", "exporter", "secret"])
        .expect("three positional args must parse");

    assert_eq!(config.output_dir, PathBuf::from("/var/www"));
    assert_eq!(config.db_user, "exporter");
    assert_eq!(config.db_password, "secret");
}

#[test]
fn missing_positional_arguments_are_rejected() {
    assert!(Config::try_parse_from(["sitemap_export"]).is_err());
    assert!(Config::try_parse_from(["sitemap_export", "/var/www"]).is_err());
    assert!(Config::try_parse_from(["sitemap_export", "/var/www", "exporter"]).is_err());
}

#[test]
fn log_flags_parse_with_defaults() {
    let config = Config::try_parse_from([
        "sitemap_export",
        "/var/www",
        "exporter",
        "secret",
        "--log-level",
        "debug",
        "--log-format",
        "json",
    ])
    .expect("log flags must parse");

    assert!(matches!(
        config.log_level,
        sitemap_export::LogLevel::Debug
    ));
    assert!(matches!(
        config.log_format,
        sitemap_export::LogFormat::Json
    ));
}

#[test]
fn settings_are_not_cli_configurable() {
    // The exporter settings ride along with compile-time defaults; there is
    // no flag that reaches them
    let config = Config::try_parse_from(["sitemap_export", "/var/www", "exporter", "secret"])
        .expect("parse");
    assert_eq!(config.settings.page_size, 10_000);
    assert_eq!(config.settings.base_url, "https://youtube.com");

    assert!(Config::try_parse_from([
        "sitemap_export",
        "/var/www",
        "exporter",
        "secret",
        "--base-url",
        "https://example.com",
    ])
    .is_err());
}
