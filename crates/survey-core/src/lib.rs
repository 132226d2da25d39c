//! Core types and the update operation for the survey service.
//!
//! This crate is deliberately free of HTTP and database dependencies. The
//! storage backend (`survey-store-sqlite`) and the HTTP layer (`survey-api`)
//! both depend on it.

// We intentionally use native `async fn` in traits (stabilised in Rust 1.75).
// Suppress the advisory lint about `Send` bounds on the returned futures.
#![allow(async_fn_in_trait)]

pub mod error;
pub mod store;
pub mod survey;
pub mod update;

pub use error::{Error, Result};
