//! Ledger connection wrapper.
//!
//! [`LedgerDb`] owns a DuckDB [`Connection`] and the name of the table
//! holding applied-migration records. The table is created only by the
//! explicit [`LedgerDb::initialize`] operation, never implicitly on open.

use crate::error::{LedgerError, LedgerResult};
use duckdb::Connection;
use std::path::Path;

/// Wrapper around a DuckDB connection to the project database.
///
/// Single-threaded, one command invocation per process, so no `Mutex` is
/// needed. The connection is usually a `try_clone` of the one backing the
/// schema connection, so the ledger and the migrations themselves see one
/// database instance.
pub struct LedgerDb {
    conn: Connection,
    table: String,
}

impl LedgerDb {
    /// Wrap an existing connection.
    pub fn new(conn: Connection, table: impl Into<String>) -> Self {
        Self {
            conn,
            table: table.into(),
        }
    }

    /// Open the database at `path`.
    pub fn open(path: &Path, table: impl Into<String>) -> LedgerResult<Self> {
        let conn = Connection::open(path)
            .map_err(|e| LedgerError::ConnectionError(format!("{e}: {}", path.display())))?;
        Ok(Self::new(conn, table))
    }

    /// Open an in-memory database. Useful for unit tests.
    pub fn open_memory(table: impl Into<String>) -> LedgerResult<Self> {
        let conn = Connection::open_in_memory()
            .map_err(|e| LedgerError::ConnectionError(e.to_string()))?;
        Ok(Self::new(conn, table))
    }

    /// Borrow the underlying DuckDB connection.
    pub fn conn(&self) -> &Connection {
        &self.conn
    }

    /// Name of the ledger table.
    pub fn table(&self) -> &str {
        &self.table
    }

    /// Whether the ledger table exists.
    pub fn is_initialized(&self) -> LedgerResult<bool> {
        let count: i64 = self.conn.query_row(
            "SELECT COUNT(*) FROM information_schema.tables WHERE table_schema = 'main' AND table_name = ?",
            duckdb::params![self.table],
            |row| row.get(0),
        )?;
        Ok(count > 0)
    }

    /// Create the ledger table.
    ///
    /// Fails with [`LedgerError::AlreadyInitialized`] if the table exists;
    /// creation is an explicit one-time operation.
    pub fn initialize(&self) -> LedgerResult<()> {
        if self.is_initialized()? {
            return Err(LedgerError::AlreadyInitialized {
                table: self.table.clone(),
            });
        }
        log::debug!("creating ledger table {}", self.table);
        self.conn
            .execute_batch(&format!(
                "CREATE TABLE {} (
                     version     VARCHAR(20) NOT NULL PRIMARY KEY,
                     description VARCHAR NOT NULL,
                     created_at  TIMESTAMP NOT NULL DEFAULT now()
                 );",
                self.table
            ))
            .map_err(|e| LedgerError::QueryError(format!("failed to create ledger table: {e}")))?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "connection_test.rs"]
mod tests;
