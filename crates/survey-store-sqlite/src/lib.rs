//! SQLite backend for the survey store.
//!
//! Each survey form is one row; its question list is kept as a JSON document
//! in a single column so order survives verbatim. Wraps [`tokio_rusqlite`] so
//! all database access runs on a dedicated thread without blocking the async
//! runtime.

mod encode;
mod schema;
mod store;

pub mod error;

pub use error::{Error, Result};
pub use store::SqliteStore;
