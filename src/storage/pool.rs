//! Database connection pool management.

use log::{error, info};
use sqlx::mysql::{MySqlConnectOptions, MySqlPoolOptions};
use sqlx::MySqlPool;

use crate::config::ExporterSettings;
use crate::error_handling::ExportError;

/// Opens a MySQL pool holding exactly one connection.
///
/// The endpoint (host, port, database) comes from the settings; only the
/// credentials vary per run. The export is strictly sequential, so one
/// connection is the whole pool and it is held until the run ends.
///
/// # Errors
///
/// Returns `ExportError::Database` if the connection cannot be established
/// (bad credentials, unreachable host). There is no retry.
pub async fn init_db_pool(
    settings: &ExporterSettings,
    username: &str,
    password: &str,
) -> Result<MySqlPool, ExportError> {
    let options = MySqlConnectOptions::new()
        .host(&settings.db_host)
        .port(settings.db_port)
        .database(&settings.db_name)
        .username(username)
        .password(password);

    let pool = MySqlPoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await
        .map_err(|e| {
            error!("Failed to connect to database: {e}");
            ExportError::Database(e)
        })?;

    info!(
        "Connected to mysql://{}@{}:{}/{}",
        username, settings.db_host, settings.db_port, settings.db_name
    );

    Ok(pool)
}
