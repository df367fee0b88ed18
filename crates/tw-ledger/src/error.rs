//! Error types for the migration ledger.

use thiserror::Error;

/// Ledger errors.
#[derive(Error, Debug)]
pub enum LedgerError {
    /// Failed to open the ledger database (L001).
    #[error("[L001] Ledger connection failed: {0}")]
    ConnectionError(String),

    /// The ledger table already exists (L002).
    ///
    /// Raised by the explicit initialize operation; callers report it and
    /// exit cleanly rather than treating it as fatal.
    #[error("[L002] Ledger table '{table}' already exists")]
    AlreadyInitialized { table: String },

    /// SQL execution against the ledger failed (L003).
    #[error("[L003] Ledger query failed: {0}")]
    QueryError(String),

    /// A stored row could not be read back into a record (L004).
    #[error("[L004] Corrupt ledger row: {0}")]
    CorruptRow(String),

    /// DuckDB driver error with preserved source chain (L005).
    #[error("[L005] DuckDB error")]
    DuckDb(#[source] duckdb::Error),
}

/// Result type alias for [`LedgerError`].
pub type LedgerResult<T> = Result<T, LedgerError>;

impl From<duckdb::Error> for LedgerError {
    fn from(err: duckdb::Error) -> Self {
        LedgerError::DuckDb(err)
    }
}
