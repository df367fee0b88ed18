//! Init command implementation - creates the ledger table

use anyhow::{Context, Result};
use tw_ledger::LedgerError;

use crate::cli::GlobalArgs;
use crate::context::RuntimeContext;

/// Execute the init command
pub(crate) async fn execute(global: &GlobalArgs) -> Result<()> {
    let ctx = RuntimeContext::new(global)?;
    ctx.verbose(&format!("ledger table: {}", ctx.config.ledger_table));

    match ctx.ledger.initialize() {
        Ok(()) => {
            println!("Created ledger table '{}'.", ctx.config.ledger_table);
            Ok(())
        }
        // Reported, not fatal: an existing table means setup already ran.
        Err(LedgerError::AlreadyInitialized { table }) => {
            println!("Ledger table '{table}' already exists, nothing to do.");
            Ok(())
        }
        Err(e) => Err(e).context("Failed to create ledger table"),
    }
}
