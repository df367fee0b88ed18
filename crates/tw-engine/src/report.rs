//! Status reporting: the merged view of registry and ledger.

use chrono::NaiveDateTime;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;
use tw_core::{humanize, LedgerRecord, Version};

/// Whether a version is currently applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RowState {
    Up,
    Down,
}

impl fmt::Display for RowState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RowState::Up => f.write_str("UP"),
            RowState::Down => f.write_str("DOWN"),
        }
    }
}

/// One line of `tw status` output.
#[derive(Debug, Clone, Serialize)]
pub struct StatusRow {
    pub version: Version,
    pub description: String,
    /// Set for applied versions only; pending rows have no date.
    pub applied_at: Option<NaiveDateTime>,
    pub state: RowState,
}

/// Merge a registry scan and the ledger rows into status rows, ascending
/// by version.
///
/// Pure function over its two inputs: one row per version in the union of
/// the two sources. Applied versions (ledger rows, orphans included) take
/// description and timestamp from the ledger; pending versions take the
/// humanized description from the registry.
pub fn build_status(
    scanned: &BTreeMap<Version, String>,
    records: &[LedgerRecord],
) -> Vec<StatusRow> {
    let by_version: BTreeMap<&Version, &LedgerRecord> =
        records.iter().map(|r| (&r.version, r)).collect();

    let mut versions: Vec<&Version> = scanned.keys().chain(by_version.keys().copied()).collect();
    versions.sort();
    versions.dedup();

    versions
        .into_iter()
        .map(|version| match by_version.get(version) {
            Some(record) => StatusRow {
                version: version.clone(),
                description: record.description.clone(),
                applied_at: Some(record.created_at),
                state: RowState::Up,
            },
            None => StatusRow {
                version: version.clone(),
                description: humanize(&scanned[version]),
                applied_at: None,
                state: RowState::Down,
            },
        })
        .collect()
}

#[cfg(test)]
#[path = "report_test.rs"]
mod tests;
