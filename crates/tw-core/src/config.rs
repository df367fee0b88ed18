//! Configuration types and parsing for tideway.yml

use crate::error::{CoreError, CoreResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Name of the project configuration file.
pub const CONFIG_FILE: &str = "tideway.yml";

/// Main project configuration from tideway.yml
///
/// There is no hidden process-wide state: the config is loaded once per
/// command and passed explicitly into every component that needs it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Project name
    pub name: String,

    /// Directory containing migration definition files
    #[serde(default = "default_migration_path")]
    pub migration_path: String,

    /// Name of the ledger table tracking applied migrations
    #[serde(default = "default_ledger_table")]
    pub ledger_table: String,

    /// Database connection configuration
    #[serde(default)]
    pub database: DatabaseConfig,
}

/// Database connection configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DatabaseConfig {
    /// Database type
    #[serde(default, rename = "type")]
    pub db_type: DbType,

    /// Path to the database file, or `:memory:`
    #[serde(default = "default_database_path")]
    pub path: String,
}

/// Supported database backends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DbType {
    #[default]
    Duckdb,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            db_type: DbType::Duckdb,
            path: default_database_path(),
        }
    }
}

fn default_migration_path() -> String {
    "migrations".to_string()
}

fn default_ledger_table() -> String {
    "tideway_migrations".to_string()
}

fn default_database_path() -> String {
    "tideway.duckdb".to_string()
}

impl Config {
    /// Load configuration from a specific file path
    pub fn load(path: &Path) -> CoreResult<Self> {
        if !path.exists() {
            return Err(CoreError::ConfigNotFound {
                path: path.display().to_string(),
            });
        }
        let content = std::fs::read_to_string(path).map_err(|e| CoreError::IoWithPath {
            path: path.display().to_string(),
            source: e,
        })?;
        let config: Config = serde_yaml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from `<dir>/tideway.yml`
    pub fn load_from_dir(dir: &Path) -> CoreResult<Self> {
        Self::load(&dir.join(CONFIG_FILE))
    }

    /// The ledger table name is interpolated into SQL, so it must be a
    /// plain identifier.
    fn validate(&self) -> CoreResult<()> {
        let mut chars = self.ledger_table.chars();
        let valid_start = chars
            .next()
            .is_some_and(|c| c.is_ascii_alphabetic() || c == '_');
        let valid_rest = chars.all(|c| c.is_ascii_alphanumeric() || c == '_');
        if !valid_start || !valid_rest {
            return Err(CoreError::ConfigInvalid {
                message: format!(
                    "ledger_table '{}' must be a plain SQL identifier",
                    self.ledger_table
                ),
            });
        }
        Ok(())
    }

    /// Absolute path of the migration directory under a project root
    pub fn migration_path_absolute(&self, root: &Path) -> PathBuf {
        let path = Path::new(&self.migration_path);
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            root.join(path)
        }
    }

    /// Absolute path of the database file under a project root
    /// (`:memory:` is passed through untouched)
    pub fn database_path_absolute(&self, root: &Path) -> String {
        let path = Path::new(&self.database.path);
        if self.database.path == ":memory:" || path.is_absolute() {
            self.database.path.clone()
        } else {
            root.join(path).display().to_string()
        }
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
