//! tw-core - Core library for Tideway
//!
//! This crate provides the shared vocabulary of the migration engine:
//! version identifiers, the entry naming convention and its transforms,
//! the directory scanner, ledger record type, configuration parsing, and
//! the core error type used across all Tideway components.

pub mod config;
pub mod descriptor;
pub mod error;
pub mod record;
pub mod registry;
pub mod version;

pub use config::{Config, DatabaseConfig, DbType, CONFIG_FILE};
pub use descriptor::{humanize, slug_for, slugify, symbol_name, Descriptor};
pub use error::{CoreError, CoreResult};
pub use record::LedgerRecord;
pub use version::Version;
