//! Tideway CLI - versioned schema migrations for DuckDB

use anyhow::Result;
use tw_engine::DefinitionRegistry;

#[tokio::main]
async fn main() -> Result<()> {
    // The standalone binary carries no compiled definitions; project
    // migration binaries call `tw_cli::run_cli` with the registry from
    // their generated migration index instead.
    tw_cli::run_cli(DefinitionRegistry::new()).await
}
