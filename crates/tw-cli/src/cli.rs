//! CLI argument definitions using clap derive API

use clap::{Args, Parser, Subcommand, ValueEnum};

/// Tideway - versioned schema migrations for DuckDB
#[derive(Parser, Debug)]
#[command(name = "tw")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Global options
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Global arguments available to all commands
#[derive(Args, Debug, Clone)]
pub struct GlobalArgs {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to project directory
    #[arg(short = 'p', long, global = true, default_value = ".")]
    pub project_dir: String,

    /// Override config file path
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Override database path
    #[arg(short, long, global = true)]
    pub target: Option<String>,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create the ledger table tracking applied migrations
    Init,

    /// Scaffold a new migration definition
    Create(CreateArgs),

    /// Apply or roll back a single migration
    Exec(ExecArgs),

    /// Apply every pending migration in order
    Migrate,

    /// Roll back every applied migration, most recent first
    Reset(ResetArgs),

    /// Show applied and pending migrations
    Status(StatusArgs),
}

/// Arguments for the create command
#[derive(Args, Debug)]
pub struct CreateArgs {
    /// Free-form description, e.g. "add user table"
    pub description: String,
}

/// Arguments for the exec command
#[derive(Args, Debug)]
pub struct ExecArgs {
    /// Direction to execute
    #[arg(value_enum)]
    pub direction: Direction,

    /// Version to execute (defaults to an interactive choice)
    #[arg(long = "id")]
    pub id: Option<String>,

    /// Skip prompts and pick the default candidate
    #[arg(short = 'y', long)]
    pub yes: bool,
}

/// Execution direction
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Apply a pending migration
    Up,
    /// Roll back an applied migration
    Down,
}

/// Arguments for the reset command
#[derive(Args, Debug)]
pub struct ResetArgs {
    /// Skip the confirmation prompt
    #[arg(short = 'y', long)]
    pub yes: bool,
}

/// Arguments for the status command
#[derive(Args, Debug)]
pub struct StatusArgs {
    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub output: StatusOutput,
}

/// Status output formats
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusOutput {
    /// Table format
    Table,
    /// JSON output
    Json,
}
