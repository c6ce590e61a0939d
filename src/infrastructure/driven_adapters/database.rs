//! Database Connection Management
//!
//! Builds the PostgreSQL pool backing the lockfile store. Pool bounds and
//! the acquire timeout come from configuration; lockfile operations block
//! on an acquired connection, so a slow acquire surfaces as a storage
//! fault instead of hanging the request.

use std::time::Duration;

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use super::config::DatabaseConfig;

/// Create the connection pool for the lockfile store
pub async fn create_pool(config: &DatabaseConfig) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .acquire_timeout(Duration::from_secs(config.acquire_timeout_secs))
        .connect(&config.url)
        .await
}
