//! Exec command implementation - applies or rolls back one migration

use anyhow::{Context, Result};
use tw_engine::{DefinitionRegistry, EngineError, Interaction, NonInteractive, Orchestrator};

use crate::cli::{Direction, ExecArgs, GlobalArgs};
use crate::context::RuntimeContext;
use crate::prompt::StdinPrompt;

/// Execute the exec command
pub(crate) async fn execute(
    args: &ExecArgs,
    global: &GlobalArgs,
    registry: &DefinitionRegistry,
) -> Result<()> {
    let ctx = RuntimeContext::new(global)?;
    let orchestrator = Orchestrator::new(ctx.migration_dir(), ctx.db.clone(), &ctx.ledger, registry);

    let ui: Box<dyn Interaction> = if args.yes {
        Box::new(NonInteractive)
    } else {
        Box::new(StdinPrompt)
    };

    let result = match args.direction {
        Direction::Up => orchestrator.pick_up(args.id.as_deref(), ui.as_ref()).await,
        Direction::Down => orchestrator.pick_down(args.id.as_deref(), ui.as_ref()).await,
    };

    match result {
        Ok(Some(descriptor)) => {
            match args.direction {
                Direction::Up => {
                    println!("Applied {}_{}.", descriptor.version, descriptor.description)
                }
                Direction::Down => println!(
                    "Rolled back {}_{}.",
                    descriptor.version, descriptor.description
                ),
            }
            Ok(())
        }
        Ok(None) => {
            match args.direction {
                Direction::Up => println!("Nothing to apply."),
                Direction::Down => println!("Nothing to roll back."),
            }
            Ok(())
        }
        // A bad --id is reported without failing the process; nothing ran.
        Err(EngineError::Validation { message }) => {
            eprintln!("{message}");
            Ok(())
        }
        Err(e) => Err(e).context("Migration execution failed"),
    }
}
