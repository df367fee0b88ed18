//! Migration directory scanner.

use crate::descriptor::Descriptor;
use crate::error::{CoreError, CoreResult};
use crate::version::Version;
use std::collections::BTreeMap;
use std::path::Path;

/// Scan a migration directory and return version -> description, ascending
/// by version (`BTreeMap` iteration order).
///
/// Each `.rs` entry's file stem is matched against the naming convention;
/// anything else (the generated `mod.rs` index included) is silently
/// skipped. Two entries carrying the same version is an error, as the
/// version is the identity of a migration everywhere else.
pub fn scan(dir: &Path) -> CoreResult<BTreeMap<Version, String>> {
    if !dir.is_dir() {
        return Err(CoreError::MigrationDirNotFound {
            path: dir.display().to_string(),
        });
    }

    let entries = std::fs::read_dir(dir).map_err(|e| CoreError::IoWithPath {
        path: dir.display().to_string(),
        source: e,
    })?;

    let mut found = BTreeMap::new();
    for entry in entries {
        let entry = entry.map_err(|e| CoreError::IoWithPath {
            path: dir.display().to_string(),
            source: e,
        })?;
        let path = entry.path();

        if !path.is_file() || !path.extension().is_some_and(|e| e == "rs") {
            continue;
        }
        let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
            continue;
        };
        let Some(descriptor) = Descriptor::parse(stem) else {
            log::debug!("skipping non-migration entry: {}", path.display());
            continue;
        };

        if found
            .insert(descriptor.version.clone(), descriptor.description)
            .is_some()
        {
            return Err(CoreError::DuplicateVersion {
                version: descriptor.version.into_inner(),
            });
        }
    }

    Ok(found)
}

/// Scan a directory into descriptors, ascending by version.
pub fn scan_descriptors(dir: &Path) -> CoreResult<Vec<Descriptor>> {
    Ok(scan(dir)?
        .into_iter()
        .map(|(version, description)| Descriptor {
            version,
            description,
        })
        .collect())
}

#[cfg(test)]
#[path = "registry_test.rs"]
mod tests;
