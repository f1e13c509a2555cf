//! `db` crate — pure persistence layer.
//!
//! Provides the connection pool, schema bootstrap, the `transportes` row
//! struct, and repository functions over that table. Field rules live in the
//! `domain` crate; nothing here re-checks them.

pub mod error;
pub mod pool;
pub mod repository;
pub mod models;

pub use pool::{DbConfig, DbPool};
pub use error::DbError;
pub use models::TransportRow;
