use sqlx::mysql::{MySqlPool, MySqlPoolOptions};
use tracing::info;

use crate::config::DbSettings;
use crate::error::StoreError;

/// Open a connection pool against the configured MariaDB instance.
///
/// Connections are checked out per operation and returned on every exit
/// path; a small pool is plenty for this sequential workload.
pub async fn connect(settings: &DbSettings) -> Result<MySqlPool, StoreError> {
    info!(
        "📂 Database: {}@{}:{}/{}",
        settings.user, settings.host, settings.port, settings.database
    );

    let pool = MySqlPoolOptions::new()
        .max_connections(5)
        .acquire_timeout(settings.connect_timeout())
        .connect(&settings.connection_url())
        .await?;

    info!("✅ Database connected successfully");

    Ok(pool)
}
