//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `sitemap_export` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - User-facing output formatting
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use sitemap_export::initialization::init_logger_with;
use sitemap_export::{run_export, Config};

#[tokio::main]
async fn main() -> Result<()> {
    // Parse command-line arguments into Config
    let config = Config::parse();

    // Initialize logger based on config
    let log_level = config.log_level.clone();
    let log_format = config.log_format.clone();
    init_logger_with(log_level.into(), log_format).context("Failed to initialize logger")?;

    // Run the export using the library
    match run_export(config).await {
        Ok(report) => {
            // Print user-friendly summary
            println!(
                "✅ Wrote {} line{} ({} row{} expected) in {:.1}s - {}",
                report.written_lines,
                if report.written_lines == 1 { "" } else { "s" },
                report.expected_rows,
                if report.expected_rows == 1 { "" } else { "s" },
                report.elapsed_seconds,
                report.output_path.display()
            );
            if !report.counts_match {
                println!("⚠️ Written line count does not match the reported row count - see log output");
            }
            Ok(())
        }
        Err(e) => {
            eprintln!("sitemap_export error: {:#}", e);
            process::exit(1);
        }
    }
}
