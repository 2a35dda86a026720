//! Configuration constants.

/// Width of one key-range page: each page query covers this many key values.
pub const PAGE_SIZE: i64 = 10_000;

/// Name of the sitemap file created inside the output directory.
pub const SITEMAP_FILE_NAME: &str = "siteMap.txt";

/// Base URL prepended to every row's path column.
pub const DEFAULT_BASE_URL: &str = "https://youtube.com";

/// Fixed database host. Credentials come from the CLI, the endpoint does not.
pub const DEFAULT_DB_HOST: &str = "localhost";

/// Fixed database port.
pub const DEFAULT_DB_PORT: u16 = 3306;

/// Fixed database name.
pub const DEFAULT_DB_NAME: &str = "sitemap";

/// Table the exporter reads from.
pub const DEFAULT_TABLE: &str = "pages";

/// Integer paging-key column.
pub const DEFAULT_KEY_COLUMN: &str = "id";

/// Path column used to build each URL.
pub const DEFAULT_PATH_COLUMN: &str = "path";
