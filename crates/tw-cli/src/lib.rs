//! tw-cli - Tideway command line interface.
//!
//! The standalone `tw` binary handles project-level operations (init,
//! create, status). A project's own migration binary embeds its compiled
//! definitions by calling [`run_cli`] with the registry built by the
//! generated migration index:
//!
//! ```ignore
//! mod migrations;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     tw_cli::run_cli(migrations::definitions()).await
//! }
//! ```

use anyhow::Result;
use clap::Parser;
use tw_engine::DefinitionRegistry;

mod cli;
mod commands;
mod context;
mod prompt;

use cli::Cli;
use commands::{create, exec, init, migrate, reset, status};

/// Parse arguments and dispatch to the selected subcommand.
pub async fn run_cli(registry: DefinitionRegistry) -> Result<()> {
    let cli = Cli::parse();
    log::debug!("dispatching {:?}", cli.command);

    match &cli.command {
        cli::Commands::Init => init::execute(&cli.global).await,
        cli::Commands::Create(args) => create::execute(args, &cli.global).await,
        cli::Commands::Exec(args) => exec::execute(args, &cli.global, &registry).await,
        cli::Commands::Migrate => migrate::execute(&cli.global, &registry).await,
        cli::Commands::Reset(args) => reset::execute(args, &cli.global, &registry).await,
        cli::Commands::Status(args) => status::execute(args, &cli.global).await,
    }
}
