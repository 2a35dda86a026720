//! Database access: connection pool and the narrow row-source capability.

mod pool;
mod source;

pub use pool::init_db_pool;
pub use source::{MySqlRowSource, RowSource, SiteRow};
