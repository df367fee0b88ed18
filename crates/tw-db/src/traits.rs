//! Schema connection trait definition

use crate::error::DbResult;
use async_trait::async_trait;

/// The live schema connection handed to migration definitions.
///
/// Every `up()`/`down()` mutates schema state exclusively through this
/// trait. Implementations must be Send + Sync for async operation.
#[async_trait]
pub trait Database: Send + Sync {
    /// Execute a single SQL statement, returns affected rows
    async fn execute(&self, sql: &str) -> DbResult<usize>;

    /// Execute multiple SQL statements
    async fn execute_batch(&self, sql: &str) -> DbResult<()>;

    /// Check if a table or view exists
    async fn relation_exists(&self, name: &str) -> DbResult<bool>;

    /// Execute a query returning its row count (for tests and sanity
    /// checks inside definitions)
    async fn query_count(&self, sql: &str) -> DbResult<usize>;

    /// Drop a table or view if it exists
    async fn drop_if_exists(&self, name: &str) -> DbResult<()>;

    /// Database type identifier for logging
    fn db_type(&self) -> &'static str;
}
