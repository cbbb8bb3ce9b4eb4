//! Connection pool construction.

use crate::error::DbError;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use std::time::Duration;

/// Alias for the Postgres pool used throughout the workspace.
pub type DbPool = PgPool;

/// Connect to Postgres with sensible pool defaults.
///
/// # Errors
///
/// Returns `DbError::ConnectionFailed` if the database is unreachable or the
/// credentials are invalid.
pub async fn connect(database_url: &str, max_connections: u32) -> Result<DbPool, DbError> {
    let pool = PgPoolOptions::new()
        .max_connections(max_connections)
        .acquire_timeout(Duration::from_secs(5))
        .connect(database_url)
        .await
        .map_err(DbError::ConnectionFailed)?;

    tracing::info!(max_connections, "Database pool established");
    Ok(pool)
}
