//! Post-export verification: reopen the sitemap and count its lines.
//!
//! The line count is the run's only correctness safeguard. A mismatch is
//! reported, never raised: the file stays on disk and the process exits
//! normally either way.

use std::path::Path;

use anyhow::{Context, Result};
use log::{info, warn};
use tokio::fs::File;
use tokio::io::{AsyncBufReadExt, BufReader};

/// Counts the lines in the written sitemap file.
///
/// The file is reopened read-only; the writer must already be closed.
pub async fn count_lines(path: &Path) -> Result<i64> {
    let file = File::open(path)
        .await
        .with_context(|| format!("Failed to reopen {} for verification", path.display()))?;
    let reader = BufReader::new(file);

    let mut lines = reader.lines();
    let mut count: i64 = 0;
    while lines
        .next_line()
        .await
        .context("Failed to read sitemap line")?
        .is_some()
    {
        count += 1;
    }

    Ok(count)
}

/// Compares written lines against the expected row count and logs the verdict.
///
/// Returns whether the counts agree.
pub fn report_line_count(expected_rows: i64, written_lines: i64) -> bool {
    let equal = expected_rows == written_lines;
    if equal {
        info!("Equal row count!");
    } else {
        warn!("ERROR: Unequal row count");
    }
    info!("{expected_rows} rows expected");
    info!("{written_lines} rows written");
    equal
}
