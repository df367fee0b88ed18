//! Ledger record type.

use crate::version::Version;
use chrono::NaiveDateTime;

/// One applied migration as persisted in the ledger table.
///
/// Created when an `up()` execution succeeds, deleted when the matching
/// `down()` succeeds. Existence of a record is the sole source of truth
/// for "applied".
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct LedgerRecord {
    pub version: Version,
    /// Humanized description, e.g. `add user table`.
    pub description: String,
    pub created_at: NaiveDateTime,
}

impl LedgerRecord {
    /// Build a record stamped with the current time.
    pub fn new(version: Version, description: impl Into<String>) -> Self {
        Self {
            version,
            description: description.into(),
            created_at: chrono::Utc::now().naive_utc(),
        }
    }
}
