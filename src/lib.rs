//! sitemap_export library: paged database-to-sitemap export.
//!
//! This library reads rows from a relational table in fixed-size key-range
//! pages, writes one derived URL per row to a `siteMap.txt` file, and then
//! verifies that the number of lines written equals the row count the
//! database reported.
//!
//! # Example
//!
//! ```no_run
//! use sitemap_export::{run_export, Config};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config {
//!     output_dir: std::path::PathBuf::from("/var/www"),
//!     db_user: "exporter".into(),
//!     db_password: "secret".into(),
//!     ..Default::default()
//! };
//!
//! let report = run_export(config).await?;
//! println!("{} expected, {} written", report.expected_rows, report.written_lines);
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Use `#[tokio::main]` in your
//! application or ensure you're calling library functions within an async
//! context.

#![warn(missing_docs)]

pub mod config;
mod error_handling;
pub mod export;
pub mod initialization;
pub mod storage;

// Re-export public API
pub use config::{Config, ExporterSettings, LogFormat, LogLevel};
pub use error_handling::{ExportError, InitializationError};
pub use run::{export_to_dir, run_export, ExportReport};

// Internal run module (contains the main export logic)
mod run {
    use std::path::{Path, PathBuf};
    use std::time::Instant;

    use anyhow::{Context, Result};
    use log::info;

    use crate::config::{Config, ExporterSettings};
    use crate::error_handling::ExportError;
    use crate::export::{count_lines, export_pages, report_line_count, SitemapWriter};
    use crate::storage::{init_db_pool, MySqlRowSource, RowSource};

    /// Results of a completed export run.
    #[derive(Debug, Clone)]
    pub struct ExportReport {
        /// Row count the database reported before paging
        pub expected_rows: i64,
        /// Lines counted in the written sitemap file
        pub written_lines: i64,
        /// Whether the two counts agree
        pub counts_match: bool,
        /// Path of the sitemap file
        pub output_path: PathBuf,
        /// Elapsed wall-clock time in seconds
        pub elapsed_seconds: f64,
    }

    /// Runs a full export with the provided configuration.
    ///
    /// This is the main entry point for the library. It validates the output
    /// directory, connects to the database with the configured credentials,
    /// streams every row into the sitemap file page by page, and verifies
    /// the written line count against the reported row count.
    ///
    /// # Arguments
    ///
    /// * `config` - Configuration for the run (output directory, credentials,
    ///   exporter settings)
    ///
    /// # Returns
    ///
    /// Returns an `ExportReport` with both counts, or an error if the export
    /// failed to complete.
    ///
    /// # Errors
    ///
    /// This function will return an error if:
    /// - The output directory does not exist (checked before anything is opened)
    /// - The database connection cannot be established
    /// - Any query or file write fails mid-run
    ///
    /// A line-count mismatch at the end is NOT an error: it is reported in
    /// the logs and reflected in `ExportReport::counts_match`, and the run
    /// still completes normally.
    pub async fn run_export(config: Config) -> Result<ExportReport> {
        if !config.output_dir.is_dir() {
            return Err(ExportError::OutputDirMissing(config.output_dir.clone()).into());
        }

        let pool = init_db_pool(&config.settings, &config.db_user, &config.db_password)
            .await
            .context("Failed to connect to database")?;
        let source = MySqlRowSource::new(pool, &config.settings);

        export_to_dir(&source, &config.output_dir, &config.settings).await
    }

    /// Exports every row from `source` into `<output_dir>/siteMap.txt`.
    ///
    /// This is the database-agnostic part of the run: `run_export` wires it
    /// to MySQL, tests wire it to an in-memory source. The file is created
    /// fresh (truncating any previous copy), written page by page, closed,
    /// and reopened read-only for the final line count.
    pub async fn export_to_dir<S: RowSource>(
        source: &S,
        output_dir: &Path,
        settings: &ExporterSettings,
    ) -> Result<ExportReport> {
        if !output_dir.is_dir() {
            return Err(ExportError::OutputDirMissing(output_dir.to_path_buf()).into());
        }

        let started = Instant::now();
        let mut writer = SitemapWriter::create(output_dir, &settings.base_url)?;
        info!("Writing sitemap to {}", writer.path().display());

        let stats = export_pages(source, &mut writer, settings.page_size).await?;
        let output_path = writer.finish()?;

        let written_lines = count_lines(&output_path).await?;
        let counts_match = report_line_count(stats.expected_rows, written_lines);

        let elapsed_seconds = started.elapsed().as_secs_f64();
        info!("{elapsed_seconds:.1} seconds to run");
        info!("File written to filepath: {}", output_path.display());

        Ok(ExportReport {
            expected_rows: stats.expected_rows,
            written_lines,
            counts_match,
            output_path,
            elapsed_seconds,
        })
    }
}
