//! Database connection pool management.
//!
//! The seeder is a short-lived process, so the pool is small and a failed
//! connection should surface immediately rather than on first use.

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use std::time::Duration;
use tracing::debug;

/// Database configuration.
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub connect_timeout_secs: u64,
}

/// Creates a PostgreSQL connection pool and verifies connectivity with a
/// round trip before returning it.
pub async fn create_pool(config: &DatabaseConfig) -> Result<PgPool, sqlx::Error> {
    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(Duration::from_secs(config.connect_timeout_secs))
        .connect(&config.url)
        .await?;

    sqlx::query("SELECT 1").execute(&pool).await?;
    debug!(max_connections = config.max_connections, "database pool ready");
    Ok(pool)
}
