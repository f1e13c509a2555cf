//! SQLite connection pool and schema bootstrap.

use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use tracing::info;

use crate::DbError;

/// Type alias for the shared SQLite pool used across the whole application.
pub type DbPool = SqlitePool;

pub const DEFAULT_DATABASE_URL: &str = "sqlite://transportes.db";
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Connection parameters, built once at start-up and passed to [`create_pool`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DbConfig {
    pub database_url: String,
    pub max_connections: u32,
}

impl DbConfig {
    pub fn new(database_url: impl Into<String>, max_connections: u32) -> Self {
        Self {
            database_url: database_url.into(),
            max_connections,
        }
    }
}

impl Default for DbConfig {
    fn default() -> Self {
        Self::new(DEFAULT_DATABASE_URL, DEFAULT_MAX_CONNECTIONS)
    }
}

/// Create a new connection pool from `config`.
///
/// The database file is created if it does not exist yet.
pub async fn create_pool(config: &DbConfig) -> Result<DbPool, DbError> {
    info!(
        "Connecting to {} (max_connections={})",
        config.database_url, config.max_connections
    );
    let options = SqliteConnectOptions::from_str(&config.database_url)?.create_if_missing(true);
    let pool = SqlitePoolOptions::new()
        .max_connections(config.max_connections)
        .connect_with(options)
        .await?;
    Ok(pool)
}

// `AUTOINCREMENT` keeps ids of deleted rows from being handed out again.
const CREATE_TRANSPORTES: &str = r#"
    CREATE TABLE IF NOT EXISTS transportes (
        id        INTEGER PRIMARY KEY AUTOINCREMENT,
        nombre    TEXT    NOT NULL,
        capacidad INTEGER NOT NULL,
        tipo      TEXT    NOT NULL
    )
"#;

const CREATE_NOMBRE_INDEX: &str =
    "CREATE INDEX IF NOT EXISTS ix_transportes_nombre ON transportes (nombre)";

/// Create the `transportes` table and its index if they are missing.
///
/// Idempotent; safe to call on every start-up.
pub async fn ensure_schema(pool: &DbPool) -> Result<(), DbError> {
    info!("Ensuring database schema");
    sqlx::query(CREATE_TRANSPORTES).execute(pool).await?;
    sqlx::query(CREATE_NOMBRE_INDEX).execute(pool).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_points_at_local_file() {
        let config = DbConfig::default();
        assert_eq!(config.database_url, "sqlite://transportes.db");
        assert_eq!(config.max_connections, 5);
    }

    #[tokio::test]
    async fn bootstrap_creates_file_and_is_idempotent() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("bootstrap.db");
        let config = DbConfig::new(format!("sqlite://{}", path.display()), 1);

        let pool = create_pool(&config).await.expect("pool");
        ensure_schema(&pool).await.expect("first bootstrap");
        ensure_schema(&pool).await.expect("second bootstrap");

        assert!(path.exists());
        let (count,): (i64,) = sqlx::query_as(
            "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = 'transportes'",
        )
        .fetch_one(&pool)
        .await
        .expect("query sqlite_master");
        assert_eq!(count, 1);
    }
}
