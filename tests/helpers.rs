// Shared test helpers: an in-memory row source for exercising the page loop.
//
// This module is #[path]-included by each integration test file, so items
// unused by a particular file carry #[allow(dead_code)].

use std::sync::Mutex;

use anyhow::{anyhow, Result};
use sitemap_export::storage::{RowSource, SiteRow};

/// In-memory row source that records every page request it serves.
pub struct FakeRowSource {
    rows: Vec<SiteRow>,
    reported_count: Option<i64>,
    /// Page bounds in the order they were requested.
    pub requested_pages: Mutex<Vec<(i64, i64)>>,
}

impl FakeRowSource {
    #[allow(dead_code)]
    pub fn new(rows: Vec<SiteRow>) -> Self {
        Self {
            rows,
            reported_count: None,
            requested_pages: Mutex::new(Vec::new()),
        }
    }

    /// Makes COUNT report a different number than the rows actually served,
    /// for exercising the mismatch path.
    #[allow(dead_code)]
    pub fn with_reported_count(rows: Vec<SiteRow>, reported_count: i64) -> Self {
        Self {
            rows,
            reported_count: Some(reported_count),
            requested_pages: Mutex::new(Vec::new()),
        }
    }
}

impl RowSource for FakeRowSource {
    async fn count(&self) -> Result<i64> {
        Ok(self.reported_count.unwrap_or(self.rows.len() as i64))
    }

    async fn max_key(&self) -> Result<Option<i64>> {
        Ok(self.rows.iter().map(|r| r.id).max())
    }

    async fn page_rows(&self, lo: i64, hi: i64) -> Result<Vec<SiteRow>> {
        self.requested_pages
            .lock()
            .map_err(|_| anyhow!("page log poisoned"))?
            .push((lo, hi));

        Ok(self
            .rows
            .iter()
            .filter(|r| r.id >= lo && r.id <= hi)
            .cloned()
            .collect())
    }
}

/// Builds `n` rows with dense keys `0..n`.
#[allow(dead_code)]
pub fn dense_rows(n: i64) -> Vec<SiteRow> {
    (0..n)
        .map(|id| SiteRow {
            id,
            path: format!("/watch?v={id}"),
        })
        .collect()
}
