//! Sitemap writing: the page loop and the buffered line writer.
//!
//! The loop walks the key space `[0, max_key]` in fixed-width ranges,
//! issuing one bounded query per range and streaming the result rows into
//! the file. Nothing beyond one page of rows is ever held in memory.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use log::info;

use crate::config::SITEMAP_FILE_NAME;
use crate::storage::{RowSource, SiteRow};

/// Buffered writer for the sitemap file.
///
/// Creates (or truncates) `siteMap.txt` in the output directory and writes
/// one URL per row. The page loop flushes once per page so memory stays
/// bounded and progress is visible on disk.
pub struct SitemapWriter {
    writer: BufWriter<File>,
    path: PathBuf,
    base_url: String,
}

impl SitemapWriter {
    /// Creates the sitemap file inside `output_dir`, truncating any previous copy.
    pub fn create(output_dir: &Path, base_url: &str) -> Result<Self> {
        let path = output_dir.join(SITEMAP_FILE_NAME);
        let file =
            File::create(&path).with_context(|| format!("Failed to create {}", path.display()))?;

        Ok(Self {
            writer: BufWriter::new(file),
            path,
            base_url: base_url.to_string(),
        })
    }

    /// Path of the file being written.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Writes one row as `<base_url><path>` followed by a newline.
    pub fn write_row(&mut self, row: &SiteRow) -> Result<()> {
        writeln!(self.writer, "{}{}", self.base_url, row.path)
            .context("Failed to write sitemap line")
    }

    /// Flushes buffered lines to disk.
    pub fn flush(&mut self) -> Result<()> {
        self.writer.flush().context("Failed to flush sitemap file")
    }

    /// Flushes and closes the file, returning its path.
    pub fn finish(mut self) -> Result<PathBuf> {
        self.flush()?;
        Ok(self.path)
    }
}

/// Counts gathered by the page loop.
#[derive(Debug, Clone, Copy)]
pub struct PageLoopStats {
    /// Row count the database reported before paging
    pub expected_rows: i64,
    /// Rows actually written to the sitemap
    pub rows_written: i64,
    /// Number of page queries issued
    pub pages: u32,
}

/// Disjoint, contiguous page bounds `[lo, hi]` covering `[0, max_key]`.
///
/// The last page may extend past `max_key`; the range query filters it.
fn page_bounds(max_key: i64, page_size: i64) -> impl Iterator<Item = (i64, i64)> {
    (0..=max_key)
        .step_by(page_size as usize)
        .map(move |lo| (lo, lo + page_size - 1))
}

/// Runs the export loop: count, max key, then one range query per page.
///
/// Rows stream through the writer page by page and the writer is flushed
/// after every page. One progress line is logged per page with its elapsed
/// time and position in the key space. Returns the counts the caller needs
/// for the final verification.
///
/// Keys do not have to be dense: a sparse key space simply yields smaller
/// pages, and an empty table (no max key) yields no pages at all.
pub async fn export_pages<S: RowSource>(
    source: &S,
    writer: &mut SitemapWriter,
    page_size: i64,
) -> Result<PageLoopStats> {
    let expected_rows = source.count().await?;
    let max_key = source.max_key().await?;
    info!("{expected_rows} rows to export (max key: {max_key:?})");

    let mut stats = PageLoopStats {
        expected_rows,
        rows_written: 0,
        pages: 0,
    };

    let Some(max_key) = max_key else {
        // Empty table: the file stays empty and verification compares 0 to 0
        return Ok(stats);
    };

    for (lo, hi) in page_bounds(max_key, page_size) {
        let page_started = Instant::now();

        let rows = source.page_rows(lo, hi).await?;
        for row in &rows {
            writer.write_row(row)?;
        }
        writer.flush()?;

        stats.rows_written += rows.len() as i64;
        stats.pages += 1;
        info!(
            "{}ms - {}/{}",
            page_started.elapsed().as_millis(),
            lo,
            max_key
        );
    }

    Ok(stats)
}
