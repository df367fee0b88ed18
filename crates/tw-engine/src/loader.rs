//! Definition resolution for discovered migrations.

use crate::definition::{Definition, DefinitionRegistry};
use crate::error::{EngineError, EngineResult};
use std::path::PathBuf;
use tw_core::Descriptor;

/// Resolves a scanned descriptor to its executable definition.
///
/// Resolution is a two-step check mirroring how the migration was
/// produced: the backing file written by the scaffold must still exist,
/// and the constructor the generated index registered for the version
/// must be present. The error for a missing constructor names the
/// expected type via the same transform the scaffold used, so the message
/// points at the exact symbol to restore.
pub struct Loader<'a> {
    migration_dir: PathBuf,
    registry: &'a DefinitionRegistry,
}

impl<'a> Loader<'a> {
    pub fn new(migration_dir: impl Into<PathBuf>, registry: &'a DefinitionRegistry) -> Self {
        Self {
            migration_dir: migration_dir.into(),
            registry,
        }
    }

    /// Resolve a descriptor to its definition.
    pub fn load(&self, descriptor: &Descriptor) -> EngineResult<&'a dyn Definition> {
        let path = self.migration_dir.join(descriptor.file_name());
        if !path.is_file() {
            return Err(EngineError::NotFound {
                version: descriptor.version.clone(),
                path: path.display().to_string(),
            });
        }

        self.registry
            .get(descriptor.version.as_str())
            .ok_or_else(|| EngineError::DefinitionMissing {
                symbol: descriptor.symbol_name(),
                version: descriptor.version.clone(),
            })
    }
}

#[cfg(test)]
#[path = "loader_test.rs"]
mod tests;
