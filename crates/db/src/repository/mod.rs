//! Repository functions — one function per database operation.
//!
//! Every function takes a `&mut SqliteConnection` checked out of the pool by
//! the caller for the duration of one request, and returns a
//! `Result<T, DbError>`. No field validation, no HTTP types — pure SQL.

pub mod transports;
