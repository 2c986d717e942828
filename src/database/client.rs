// file: src/database/client.rs
// description: sqlx connection pool setup for the surname store
// reference: https://docs.rs/sqlx

use crate::config::DatabaseConfig;
use crate::error::Result;
use sqlx::AnyPool;
use sqlx::any::{AnyPoolOptions, install_default_drivers};
use std::time::Duration;
use tracing::{debug, info};

/// Open a pool for the configured MySQL server.
pub async fn connect(config: &DatabaseConfig) -> Result<AnyPool> {
    info!("Connecting to {}", config.redacted_url());
    connect_url(&config.connection_url(), Duration::from_secs(config.timeout)).await
}

/// Open a pool for any URL sqlx has a driver for (`mysql://`, `sqlite://`).
///
/// The pool holds a single connection: a run issues one query at a time.
pub async fn connect_url(url: &str, timeout: Duration) -> Result<AnyPool> {
    install_default_drivers();

    let pool = AnyPoolOptions::new()
        .max_connections(1)
        .acquire_timeout(timeout)
        .connect(url)
        .await?;

    debug!("Database pool ready");
    Ok(pool)
}

pub async fn ping(pool: &AnyPool) -> Result<()> {
    debug!("Checking database connection");
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}
