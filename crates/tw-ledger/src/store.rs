//! CRUD over applied-migration records.

use crate::connection::LedgerDb;
use crate::error::{LedgerError, LedgerResult};
use chrono::NaiveDateTime;
use tw_core::{LedgerRecord, Version};

/// Timestamp format used when writing and reading `created_at`.
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Ordering direction for [`LedgerDb::query_all`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDir {
    Asc,
    Desc,
}

impl SortDir {
    fn as_sql(self) -> &'static str {
        match self {
            SortDir::Asc => "ASC",
            SortDir::Desc => "DESC",
        }
    }
}

fn row_to_record(version: String, description: String, created_at: String) -> LedgerResult<LedgerRecord> {
    let version = Version::try_new(version).map_err(|e| LedgerError::CorruptRow(e.to_string()))?;
    let created_at = NaiveDateTime::parse_from_str(&created_at, TIMESTAMP_FORMAT)
        .map_err(|e| LedgerError::CorruptRow(format!("bad created_at: {e}")))?;
    Ok(LedgerRecord {
        version,
        description,
        created_at,
    })
}

impl LedgerDb {
    /// All records, ordered by version in the caller-specified direction.
    pub fn query_all(&self, dir: SortDir) -> LedgerResult<Vec<LedgerRecord>> {
        let sql = format!(
            "SELECT version, description, strftime(created_at, '{fmt}')
             FROM {table} ORDER BY version {dir}",
            fmt = TIMESTAMP_FORMAT,
            table = self.table(),
            dir = dir.as_sql(),
        );
        let mut stmt = self.conn().prepare(&sql)?;
        let rows = stmt
            .query_map([], |row| {
                Ok((
                    row.get::<_, String>(0)?,
                    row.get::<_, String>(1)?,
                    row.get::<_, String>(2)?,
                ))
            })?
            .collect::<Result<Vec<_>, _>>()?;

        rows.into_iter()
            .map(|(v, d, c)| row_to_record(v, d, c))
            .collect()
    }

    /// Look up a single record by version.
    pub fn find_by_version(&self, version: &Version) -> LedgerResult<Option<LedgerRecord>> {
        let sql = format!(
            "SELECT version, description, strftime(created_at, '{fmt}')
             FROM {table} WHERE version = ?",
            fmt = TIMESTAMP_FORMAT,
            table = self.table(),
        );
        let mut stmt = self.conn().prepare(&sql)?;
        let mut rows = stmt
            .query_map(duckdb::params![version.as_str()], |row| {
                Ok((
                    row.get::<_, String>(0)?,
                    row.get::<_, String>(1)?,
                    row.get::<_, String>(2)?,
                ))
            })?
            .collect::<Result<Vec<_>, _>>()?;

        match rows.pop() {
            Some((v, d, c)) => Ok(Some(row_to_record(v, d, c)?)),
            None => Ok(None),
        }
    }

    /// Insert a record.
    ///
    /// The PRIMARY KEY on version rejects duplicates; that constraint is
    /// the only guard against a concurrent second process applying the
    /// same migration.
    pub fn create(&self, record: &LedgerRecord) -> LedgerResult<()> {
        let sql = format!(
            "INSERT INTO {} (version, description, created_at) VALUES (?, ?, ?)",
            self.table()
        );
        self.conn()
            .execute(
                &sql,
                duckdb::params![
                    record.version.as_str(),
                    record.description,
                    record.created_at.format(TIMESTAMP_FORMAT).to_string(),
                ],
            )
            .map_err(|e| LedgerError::QueryError(format!("failed to record migration: {e}")))?;
        Ok(())
    }

    /// Update an existing record's description and timestamp by version.
    pub fn save(&self, record: &LedgerRecord) -> LedgerResult<()> {
        let sql = format!(
            "UPDATE {} SET description = ?, created_at = ? WHERE version = ?",
            self.table()
        );
        self.conn()
            .execute(
                &sql,
                duckdb::params![
                    record.description,
                    record.created_at.format(TIMESTAMP_FORMAT).to_string(),
                    record.version.as_str(),
                ],
            )
            .map_err(|e| LedgerError::QueryError(format!("failed to update record: {e}")))?;
        Ok(())
    }

    /// Delete the record for a version. Returns whether a row was removed.
    pub fn delete(&self, version: &Version) -> LedgerResult<bool> {
        let sql = format!("DELETE FROM {} WHERE version = ?", self.table());
        let removed = self
            .conn()
            .execute(&sql, duckdb::params![version.as_str()])
            .map_err(|e| LedgerError::QueryError(format!("failed to delete record: {e}")))?;
        Ok(removed > 0)
    }
}

#[cfg(test)]
#[path = "store_test.rs"]
mod tests;
