//! Sitemap export: the page loop, the file writer, and the final verification.

mod sitemap;
mod verify;

pub use sitemap::{export_pages, PageLoopStats, SitemapWriter};
pub use verify::{count_lines, report_line_count};
