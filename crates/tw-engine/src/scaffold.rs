//! Scaffold generator for new migration definitions.

use crate::error::EngineResult;
use chrono::{Duration, Local};
use minijinja::{context, Environment};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tw_core::{registry, slug_for, symbol_name, CoreError, Descriptor, Version};

/// Template for a fresh definition file; `up()`/`down()` are left empty
/// for the implementer to fill in.
const DEFINITION_TEMPLATE: &str = include_str!("templates/definition.rs.jinja");

/// Template for the generated module index (`mod.rs`) that wires every
/// definition file into a [`crate::DefinitionRegistry`].
const INDEX_TEMPLATE: &str = include_str!("templates/index.rs.jinja");

/// Name of the generated index file inside the migration directory.
pub const INDEX_FILE: &str = "mod.rs";

/// Result of a scaffold run.
#[derive(Debug)]
pub struct Scaffolded {
    pub version: Version,
    pub slug: String,
    pub symbol: String,
    /// Path of the definition file that was written.
    pub path: PathBuf,
    /// Path of the regenerated index module.
    pub index_path: PathBuf,
}

#[derive(Serialize)]
struct IndexEntry {
    file: String,
    module: String,
    symbol: String,
}

/// Creates uniquely versioned definition files from a template and keeps
/// the module index in sync with the directory contents.
pub struct ScaffoldGenerator {
    migration_dir: PathBuf,
}

impl ScaffoldGenerator {
    pub fn new(migration_dir: impl Into<PathBuf>) -> Self {
        Self {
            migration_dir: migration_dir.into(),
        }
    }

    /// Scaffold a new migration from a free-form description.
    ///
    /// The version is the current local time. Two scaffolds within the
    /// same second would collide, so the timestamp is bumped forward one
    /// second at a time until the version is unused.
    pub fn create(&self, description: &str) -> EngineResult<Scaffolded> {
        let slug = slug_for(description)?;
        let existing = registry::scan(&self.migration_dir)?;

        let mut timestamp = Local::now().naive_local();
        let mut version = Version::from_timestamp(&timestamp);
        while existing.contains_key(&version) {
            timestamp += Duration::seconds(1);
            version = Version::from_timestamp(&timestamp);
        }

        let symbol = symbol_name(&slug, &version);
        let descriptor = Descriptor {
            version: version.clone(),
            description: slug.clone(),
        };
        let path = self.migration_dir.join(descriptor.file_name());

        let env = Environment::new();
        let content = env.render_str(
            DEFINITION_TEMPLATE,
            context! { symbol => symbol, version => version.as_str() },
        )?;
        write_file(&path, &content)?;
        log::debug!("scaffolded {}", path.display());

        let index_path = self.write_index()?;

        Ok(Scaffolded {
            version,
            slug,
            symbol,
            path,
            index_path,
        })
    }

    /// Regenerate the module index from the directory contents.
    ///
    /// The index declares each definition file as a module (via `#[path]`,
    /// since the file names start with digits) and assembles the registry,
    /// so a project binary picks up new migrations at its next build.
    pub fn write_index(&self) -> EngineResult<PathBuf> {
        let entries: Vec<IndexEntry> = registry::scan_descriptors(&self.migration_dir)?
            .into_iter()
            .map(|d| IndexEntry {
                file: d.file_name(),
                module: d.module_name(),
                symbol: d.symbol_name(),
            })
            .collect();

        let env = Environment::new();
        let content = env.render_str(INDEX_TEMPLATE, context! { migrations => entries })?;

        let path = self.migration_dir.join(INDEX_FILE);
        write_file(&path, &content)?;
        Ok(path)
    }
}

/// Write a file, mapping permission failures to the configuration error
/// the caller expects for a read-only migration directory.
fn write_file(path: &Path, content: &str) -> Result<(), CoreError> {
    std::fs::write(path, content).map_err(|e| {
        if e.kind() == std::io::ErrorKind::PermissionDenied {
            CoreError::MigrationDirNotWritable {
                path: path
                    .parent()
                    .unwrap_or(path)
                    .display()
                    .to_string(),
            }
        } else {
            CoreError::IoWithPath {
                path: path.display().to_string(),
                source: e,
            }
        }
    })
}

#[cfg(test)]
#[path = "scaffold_test.rs"]
mod tests;
