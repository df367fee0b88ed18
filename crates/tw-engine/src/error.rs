//! Error types for the migration engine.

use thiserror::Error;
use tw_core::Version;

/// Engine errors.
///
/// `NotFound` and `DefinitionMissing` are fatal and never caught;
/// `Validation` is the one non-fatal case: callers report it and finish
/// without executing anything.
#[derive(Error, Debug)]
pub enum EngineError {
    /// A migration's backing file is gone (G001).
    #[error("[G001] Migration definition not found: {path}")]
    NotFound { version: Version, path: String },

    /// The definition file exists but no constructor is registered for
    /// its version (G002).
    #[error("[G002] Definition '{symbol}' for version {version} is not registered")]
    DefinitionMissing { symbol: String, version: Version },

    /// A caller-supplied version does not qualify for the requested
    /// operation (G003).
    #[error("[G003] {message}")]
    Validation { message: String },

    /// Core error (configuration, naming, scanning).
    #[error(transparent)]
    Core(#[from] tw_core::CoreError),

    /// Schema connection error, including failures raised inside
    /// `up()`/`down()` bodies; propagated uncaught.
    #[error(transparent)]
    Db(#[from] tw_db::DbError),

    /// Ledger error.
    #[error(transparent)]
    Ledger(#[from] tw_ledger::LedgerError),

    /// Template rendering error from the scaffold generator.
    #[error("[G004] Template error: {0}")]
    Template(#[from] minijinja::Error),
}

/// Result type alias for [`EngineError`].
pub type EngineResult<T> = Result<T, EngineError>;
