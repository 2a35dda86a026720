//! Error types for initialization and the export run.

mod types;

pub use types::{ExportError, InitializationError};
