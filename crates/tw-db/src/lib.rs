//! tw-db - Database abstraction layer for Tideway
//!
//! Defines the [`Database`] trait migration definitions execute against,
//! and the DuckDB backend implementing it.

pub mod duckdb;
pub mod error;
pub mod traits;

pub use duckdb::DuckDbBackend;
pub use error::{DbError, DbResult};
pub use traits::Database;
