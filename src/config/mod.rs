//! Application configuration and constants.
//!
//! This module provides:
//! - Configuration constants (page size, file name, fixed database endpoint)
//! - CLI option types and parsing
//! - The exporter settings structure

mod constants;
mod types;

// Re-export all constants
pub use constants::*;
pub use types::{Config, ExporterSettings, LogFormat, LogLevel};
