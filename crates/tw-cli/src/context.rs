//! Runtime context for CLI commands

use anyhow::{Context, Result};
use duckdb::Connection;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tw_core::Config;
use tw_db::{Database, DuckDbBackend};
use tw_ledger::LedgerDb;

use crate::cli::GlobalArgs;

/// Load the project configuration for the current invocation.
pub(crate) fn load_config(global: &GlobalArgs) -> Result<(PathBuf, Config)> {
    let root = Path::new(&global.project_dir).to_path_buf();
    let config = if let Some(config_path) = &global.config {
        Config::load(Path::new(config_path)).context("Failed to load configuration file")?
    } else {
        Config::load_from_dir(&root).context("Failed to load project configuration")?
    };
    Ok((root, config))
}

/// Runtime context containing config, schema connection, and ledger
pub(crate) struct RuntimeContext {
    /// Project root directory
    pub root: PathBuf,

    /// Project configuration
    pub config: Config,

    /// Schema connection handed to migration definitions
    pub db: Arc<dyn Database>,

    /// Applied-migration ledger
    pub ledger: LedgerDb,

    /// Verbose output enabled
    pub verbose: bool,
}

impl RuntimeContext {
    /// Create a new runtime context from global arguments.
    ///
    /// Opens the project database once and splits the connection between
    /// the ledger and the schema backend, so both see one database
    /// instance.
    pub fn new(global: &GlobalArgs) -> Result<Self> {
        let (root, config) = load_config(global)?;

        let db_path = global
            .target
            .clone()
            .unwrap_or_else(|| config.database_path_absolute(&root));
        let conn = if db_path == ":memory:" {
            Connection::open_in_memory()
        } else {
            Connection::open(&db_path)
        }
        .with_context(|| format!("Failed to open database at {db_path}"))?;

        let ledger_conn = conn
            .try_clone()
            .context("Failed to clone database connection")?;
        let ledger = LedgerDb::new(ledger_conn, &config.ledger_table);
        let db: Arc<dyn Database> = Arc::new(DuckDbBackend::from_connection(conn));

        Ok(Self {
            root,
            config,
            db,
            ledger,
            verbose: global.verbose,
        })
    }

    /// Absolute migration directory for this project
    pub fn migration_dir(&self) -> PathBuf {
        self.config.migration_path_absolute(&self.root)
    }

    /// Print verbose output if enabled
    pub fn verbose(&self, msg: &str) {
        if self.verbose {
            eprintln!("[verbose] {}", msg);
        }
    }
}
