//! Migration naming convention and the transforms derived from it.
//!
//! An entry in the migration directory is named `<version>_<slug>` where
//! the version is digits and underscores and the slug is letters and
//! underscores. [`Descriptor::parse`] splits a file stem back into the two
//! parts; [`symbol_name`] is the single implementation of the
//! scaffold/loader round-trip: both sides must derive the exact same type
//! name from a (description, version) pair.

use crate::error::{CoreError, CoreResult};
use crate::version::Version;
use regex::Regex;
use std::sync::OnceLock;

static ENTRY_RE: OnceLock<Regex> = OnceLock::new();

/// Naming pattern for migration entries: `<version>_<slug>`.
///
/// Backtracking resolves the ambiguity between the two underscore-bearing
/// halves: the slug cannot contain digits, so the version capture keeps
/// every digit group and the slug starts at the first letter.
fn entry_re() -> &'static Regex {
    ENTRY_RE.get_or_init(|| Regex::new(r"^(?i)([0-9_]+)_([a-z_]+)$").expect("valid regex"))
}

/// A migration discovered by name: `{version, description}`.
///
/// The description is the slug exactly as it appears in the entry name,
/// so [`Descriptor::file_name`] reconstructs the on-disk name. Descriptors
/// are derived purely from the naming convention and never persisted.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Descriptor {
    pub version: Version,
    pub description: String,
}

impl Descriptor {
    /// Parse an entry stem (file name without extension) into a descriptor.
    ///
    /// Returns `None` for names outside the convention; callers skip those
    /// silently.
    pub fn parse(stem: &str) -> Option<Self> {
        let caps = entry_re().captures(stem)?;
        let version = Version::try_new(&caps[1]).ok()?;
        Some(Self {
            version,
            description: caps[2].to_string(),
        })
    }

    /// The entry file name for this descriptor, e.g.
    /// `20210915_100000_add_user_table.rs`.
    pub fn file_name(&self) -> String {
        format!("{}_{}.rs", self.version, self.description)
    }

    /// The Rust module name the generated index uses for this entry.
    ///
    /// Identifiers cannot start with a digit, so the module is the file
    /// stem prefixed with `m`.
    pub fn module_name(&self) -> String {
        format!("m{}_{}", self.version, self.description)
    }

    /// The type name of this migration's definition struct.
    pub fn symbol_name(&self) -> String {
        symbol_name(&self.description, &self.version)
    }
}

/// Derive the definition type name from a description and version:
/// PascalCased description followed by the version digits.
///
/// `("add_role_table", 20210915_100000)` -> `AddRoleTable20210915100000`.
pub fn symbol_name(description: &str, version: &Version) -> String {
    let mut symbol = String::new();
    for word in slugify(description).split('_').filter(|w| !w.is_empty()) {
        let mut chars = word.chars();
        if let Some(first) = chars.next() {
            symbol.push(first.to_ascii_uppercase());
            symbol.push_str(chars.as_str());
        }
    }
    symbol.push_str(&version.digits());
    symbol
}

/// Turn a free-form description into a slug matching the naming pattern.
///
/// Lowercases, maps whitespace and hyphens to underscores, drops every
/// other character (the slug charset is letters and underscores only),
/// and collapses runs of underscores.
pub fn slugify(description: &str) -> String {
    let mut slug = String::with_capacity(description.len());
    for c in description.chars() {
        match c {
            'a'..='z' | '_' => slug.push(c),
            'A'..='Z' => slug.push(c.to_ascii_lowercase()),
            ' ' | '\t' | '-' => slug.push('_'),
            _ => {}
        }
    }
    let mut collapsed = String::with_capacity(slug.len());
    for part in slug.split('_').filter(|p| !p.is_empty()) {
        if !collapsed.is_empty() {
            collapsed.push('_');
        }
        collapsed.push_str(part);
    }
    collapsed
}

/// Validate a description and return its slug, or an error when nothing
/// usable remains after slugification.
pub fn slug_for(description: &str) -> CoreResult<String> {
    let slug = slugify(description);
    if slug.is_empty() {
        return Err(CoreError::InvalidDescription {
            description: description.to_string(),
            reason: "must contain at least one letter".to_string(),
        });
    }
    Ok(slug)
}

/// Human-readable form of a slug: underscores become spaces.
///
/// This is what gets persisted in the ledger and displayed in status
/// output.
pub fn humanize(slug: &str) -> String {
    slug.replace('_', " ")
}

#[cfg(test)]
#[path = "descriptor_test.rs"]
mod tests;
