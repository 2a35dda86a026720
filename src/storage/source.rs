//! Row source abstraction over the database.
//!
//! The exporter needs exactly three capabilities from the database: a row
//! count, the maximum paging key, and one bounded range query. Writing the
//! page loop against this trait keeps it testable with an in-memory fake
//! instead of a live server.

use anyhow::{Context, Result};
use sqlx::{MySqlPool, Row};

use crate::config::ExporterSettings;

/// One exportable row: the paging key and the path used to build the URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteRow {
    /// Integer paging key.
    pub id: i64,
    /// Path appended to the base URL.
    pub path: String,
}

/// Narrow database capability the exporter pages through.
#[allow(async_fn_in_trait)]
pub trait RowSource {
    /// Total number of exportable rows.
    async fn count(&self) -> Result<i64>;

    /// Largest paging key, or `None` if the table is empty.
    async fn max_key(&self) -> Result<Option<i64>>;

    /// All rows whose key falls in `[lo, hi]`, ordered by key.
    async fn page_rows(&self, lo: i64, hi: i64) -> Result<Vec<SiteRow>>;
}

/// [`RowSource`] backed by a MySQL connection pool.
///
/// The three statements are fixed for the run and built once from the
/// settings. Page bounds are bound as parameters, never interpolated.
pub struct MySqlRowSource {
    pool: MySqlPool,
    count_sql: String,
    max_key_sql: String,
    page_sql: String,
}

fn count_statement(settings: &ExporterSettings) -> String {
    format!("SELECT COUNT(*) FROM {}", settings.table)
}

fn max_key_statement(settings: &ExporterSettings) -> String {
    format!(
        "SELECT MAX({}) FROM {}",
        settings.key_column, settings.table
    )
}

fn page_statement(settings: &ExporterSettings) -> String {
    format!(
        "SELECT {key}, {path} FROM {table} WHERE {key} BETWEEN ? AND ? ORDER BY {key}",
        key = settings.key_column,
        path = settings.path_column,
        table = settings.table,
    )
}

impl MySqlRowSource {
    /// Builds the fixed statements for the configured table and columns.
    pub fn new(pool: MySqlPool, settings: &ExporterSettings) -> Self {
        Self {
            pool,
            count_sql: count_statement(settings),
            max_key_sql: max_key_statement(settings),
            page_sql: page_statement(settings),
        }
    }
}

impl RowSource for MySqlRowSource {
    async fn count(&self) -> Result<i64> {
        let count: i64 = sqlx::query_scalar(&self.count_sql)
            .fetch_one(&self.pool)
            .await
            .context("Failed to query row count")?;
        Ok(count)
    }

    async fn max_key(&self) -> Result<Option<i64>> {
        // MAX over an empty table is SQL NULL
        let max: Option<i64> = sqlx::query_scalar(&self.max_key_sql)
            .fetch_one(&self.pool)
            .await
            .context("Failed to query max paging key")?;
        Ok(max)
    }

    async fn page_rows(&self, lo: i64, hi: i64) -> Result<Vec<SiteRow>> {
        let rows = sqlx::query(&self.page_sql)
            .bind(lo)
            .bind(hi)
            .fetch_all(&self.pool)
            .await
            .with_context(|| format!("Failed to query page [{lo}, {hi}]"))?;

        Ok(rows
            .iter()
            .map(|row| SiteRow {
                id: row.get(0),
                path: row.get(1),
            })
            .collect())
    }
}
