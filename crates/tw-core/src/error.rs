//! Error types for tw-core

use thiserror::Error;

/// Core error type for Tideway
#[derive(Error, Debug)]
pub enum CoreError {
    /// E001: Configuration file not found
    #[error("[E001] Config file not found: {path}")]
    ConfigNotFound { path: String },

    /// E002: Invalid configuration value
    #[error("[E002] Invalid config: {message}")]
    ConfigInvalid { message: String },

    /// E003: Migration directory not found
    #[error("[E003] Migration directory not found: {path}")]
    MigrationDirNotFound { path: String },

    /// E004: Migration directory not writable
    #[error("[E004] Migration directory not writable: {path}")]
    MigrationDirNotWritable { path: String },

    /// E005: Duplicate migration version across two entries
    #[error("[E005] Duplicate migration version: {version}")]
    DuplicateVersion { version: String },

    /// E006: Malformed version string
    #[error("[E006] Invalid version '{value}': {reason}")]
    InvalidVersion { value: String, reason: String },

    /// E007: Description cannot be turned into a migration slug
    #[error("[E007] Invalid description '{description}': {reason}")]
    InvalidDescription {
        description: String,
        reason: String,
    },

    /// E008: IO error
    #[error("[E008] IO error: {0}")]
    Io(#[from] std::io::Error),

    /// E009: IO error with file path context
    #[error("[E009] Failed to access '{path}': {source}")]
    IoWithPath {
        path: String,
        source: std::io::Error,
    },

    /// E010: YAML parse error
    #[error("[E010] Config parse error: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for CoreError
pub type CoreResult<T> = Result<T, CoreError>;
