//! tw-ledger - Applied-migration ledger for Tideway.
//!
//! A thin DuckDB-backed store of which migration versions have been
//! applied. Record existence is the engine's sole source of truth for
//! "applied"; everything here is plain CRUD plus the explicit one-time
//! table initialization.

pub mod connection;
pub mod error;
pub mod store;

pub use connection::LedgerDb;
pub use error::{LedgerError, LedgerResult};
pub use store::SortDir;
