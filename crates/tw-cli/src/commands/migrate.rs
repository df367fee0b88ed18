//! Migrate command implementation - applies every pending migration

use anyhow::{Context, Result};
use tw_engine::{DefinitionRegistry, Orchestrator};

use crate::cli::GlobalArgs;
use crate::context::RuntimeContext;

/// Execute the migrate command
pub(crate) async fn execute(global: &GlobalArgs, registry: &DefinitionRegistry) -> Result<()> {
    let ctx = RuntimeContext::new(global)?;
    ctx.verbose(&format!(
        "migration directory: {}",
        ctx.migration_dir().display()
    ));

    let orchestrator = Orchestrator::new(ctx.migration_dir(), ctx.db.clone(), &ctx.ledger, registry);
    let applied = orchestrator
        .up_to_latest()
        .await
        .context("Migration run failed; steps applied before the failure remain recorded")?;

    if !applied.is_empty() {
        println!("Applied {} migration(s) successfully.", applied.len());
    }
    Ok(())
}
