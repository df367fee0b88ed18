//! Migration definitions and the registry that resolves them.

use async_trait::async_trait;
use std::collections::BTreeMap;
use tw_db::{Database, DbResult};

/// One migration's forward and backward schema changes.
///
/// Definitions are stateless; both operations mutate schema state only
/// through the injected connection and return no value. A definition is
/// constructed once at registration and may be invoked any number of
/// times.
#[async_trait]
pub trait Definition: Send + Sync {
    /// The version this definition belongs to, e.g. `20210915_100000`.
    fn version(&self) -> &str;

    /// Apply the migration.
    async fn up(&self, db: &dyn Database) -> DbResult<()>;

    /// Roll the migration back.
    async fn down(&self, db: &dyn Database) -> DbResult<()>;
}

/// Explicit constructor table mapping version -> definition.
///
/// The generated index module in a project's migration directory builds
/// one of these from every definition file; there is no runtime symbol
/// lookup anywhere.
#[derive(Default)]
pub struct DefinitionRegistry {
    defs: BTreeMap<String, Box<dyn Definition>>,
}

impl DefinitionRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a registry from boxed definitions, keyed by their versions.
    pub fn from_definitions(defs: Vec<Box<dyn Definition>>) -> Self {
        let mut registry = Self::new();
        for def in defs {
            registry.register(def);
        }
        registry
    }

    /// Register a definition. A later registration for the same version
    /// replaces the earlier one.
    pub fn register(&mut self, def: Box<dyn Definition>) {
        let version = def.version().to_string();
        if self.defs.insert(version.clone(), def).is_some() {
            log::warn!("definition for version {version} registered twice, keeping the last");
        }
    }

    /// Look up the definition for a version.
    pub fn get(&self, version: &str) -> Option<&dyn Definition> {
        self.defs.get(version).map(|d| d.as_ref())
    }

    /// Registered versions, ascending.
    pub fn versions(&self) -> impl Iterator<Item = &str> {
        self.defs.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.defs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.defs.is_empty()
    }
}

#[cfg(test)]
#[path = "definition_test.rs"]
mod tests;
