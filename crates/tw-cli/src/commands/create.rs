//! Create command implementation - scaffolds a new migration definition

use anyhow::{Context, Result};
use tw_engine::ScaffoldGenerator;

use crate::cli::{CreateArgs, GlobalArgs};
use crate::context::load_config;

/// Execute the create command
///
/// Deliberately does not open the database: scaffolding is a pure
/// filesystem operation.
pub(crate) async fn execute(args: &CreateArgs, global: &GlobalArgs) -> Result<()> {
    let (root, config) = load_config(global)?;
    let migration_dir = config.migration_path_absolute(&root);

    let generator = ScaffoldGenerator::new(&migration_dir);
    let scaffolded = generator
        .create(&args.description)
        .context("Failed to scaffold migration")?;

    println!("Created {}", scaffolded.path.display());
    println!("  version: {}", scaffolded.version);
    println!("  symbol:  {}", scaffolded.symbol);
    println!();
    println!("Next steps:");
    println!("  1. Fill in up()/down() in the new file");
    println!("  2. Rebuild your migration binary, then run:");
    println!("       tw migrate");

    Ok(())
}
