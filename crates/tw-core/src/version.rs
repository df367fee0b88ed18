//! Migration version identifiers.
//!
//! A [`Version`] is a sortable string assigned at scaffold time, formatted
//! `YYYYMMDD_HHMMSS`. Lexicographic order equals chronological order for
//! that format, which is what the whole engine relies on for ordering.

use crate::error::{CoreError, CoreResult};
use chrono::NaiveDateTime;
use std::fmt;

/// Maximum length of a version string (ledger column width).
pub const MAX_VERSION_LEN: usize = 20;

/// Timestamp format used for freshly scaffolded versions.
const VERSION_FORMAT: &str = "%Y%m%d_%H%M%S";

/// Sortable migration version, e.g. `20210915_100000`.
///
/// Scanned entries may carry any combination of digits and underscores up
/// to [`MAX_VERSION_LEN`] characters; only the scaffold generator commits
/// to the canonical timestamp format.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize)]
pub struct Version(String);

impl Version {
    /// Validate and wrap a version string.
    pub fn try_new(value: impl Into<String>) -> CoreResult<Self> {
        let s = value.into();
        if s.is_empty() {
            return Err(CoreError::InvalidVersion {
                value: s,
                reason: "must not be empty".to_string(),
            });
        }
        if s.len() > MAX_VERSION_LEN {
            return Err(CoreError::InvalidVersion {
                value: s,
                reason: format!("longer than {MAX_VERSION_LEN} characters"),
            });
        }
        if !s.chars().all(|c| c.is_ascii_digit() || c == '_') {
            return Err(CoreError::InvalidVersion {
                value: s,
                reason: "only digits and underscores are allowed".to_string(),
            });
        }
        Ok(Self(s))
    }

    /// Version for the current local time, canonical format.
    pub fn now() -> Self {
        Self::from_timestamp(&chrono::Local::now().naive_local())
    }

    /// Version for an arbitrary timestamp, canonical format.
    pub fn from_timestamp(t: &NaiveDateTime) -> Self {
        Self(t.format(VERSION_FORMAT).to_string())
    }

    /// The version with separators stripped, e.g. `20210915100000`.
    ///
    /// Used by the symbol-name transform shared between the scaffold
    /// generator and the loader.
    pub fn digits(&self) -> String {
        self.0.chars().filter(|c| c.is_ascii_digit()).collect()
    }

    /// Return the underlying string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the wrapper and return the inner `String`.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Version {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::borrow::Borrow<str> for Version {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Version {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::try_new(value)
    }
}

impl TryFrom<&str> for Version {
    type Error = CoreError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::try_new(value)
    }
}

impl<'de> serde::Deserialize<'de> for Version {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = <String as serde::Deserialize>::deserialize(deserializer)?;
        Version::try_new(s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
#[path = "version_test.rs"]
mod tests;
