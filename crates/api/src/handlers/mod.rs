//! Request handlers and the state they share.

pub mod health;
pub mod transports;

use db::DbPool;
use sqlx::{pool::PoolConnection, Sqlite};

use crate::ApiError;

/// Shared application state. Holds no mutable data of its own; everything
/// lives in the database.
#[derive(Clone)]
pub struct AppState {
    pub pool: DbPool,
}

impl AppState {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Check out one connection for the current request. It goes back to the
    /// pool when the guard is dropped, whether the handler succeeded or not.
    pub async fn connection(&self) -> Result<PoolConnection<Sqlite>, ApiError> {
        Ok(self.pool.acquire().await?)
    }
}
