//! Reset command implementation - rolls back every applied migration

use anyhow::{Context, Result};
use tw_engine::{DefinitionRegistry, Interaction, Orchestrator};

use crate::cli::{GlobalArgs, ResetArgs};
use crate::context::RuntimeContext;
use crate::prompt::StdinPrompt;

/// Execute the reset command
pub(crate) async fn execute(
    args: &ResetArgs,
    global: &GlobalArgs,
    registry: &DefinitionRegistry,
) -> Result<()> {
    let ctx = RuntimeContext::new(global)?;

    // One confirmation before any execution starts; there is no
    // mid-batch abort once the rollback begins.
    if !args.yes && !StdinPrompt.confirm("This rolls back every applied migration. Continue?") {
        println!("Aborted.");
        return Ok(());
    }

    let orchestrator = Orchestrator::new(ctx.migration_dir(), ctx.db.clone(), &ctx.ledger, registry);
    let rolled_back = orchestrator
        .reset_all()
        .await
        .context("Rollback failed; migrations not yet rolled back remain recorded")?;

    if !rolled_back.is_empty() {
        println!("Rolled back {} migration(s) successfully.", rolled_back.len());
    }
    Ok(())
}
