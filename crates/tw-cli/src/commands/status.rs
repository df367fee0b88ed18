//! Status command implementation

use anyhow::{Context, Result};
use tw_core::registry;
use tw_engine::{build_status, StatusRow};
use tw_ledger::SortDir;

use crate::cli::{GlobalArgs, StatusArgs, StatusOutput};
use crate::context::RuntimeContext;

/// Execute the status command
pub(crate) async fn execute(args: &StatusArgs, global: &GlobalArgs) -> Result<()> {
    let ctx = RuntimeContext::new(global)?;
    let scanned = registry::scan(&ctx.migration_dir())
        .context("Failed to scan migration directory")?;

    let records = if ctx.ledger.is_initialized().context("Failed to inspect ledger")? {
        ctx.ledger
            .query_all(SortDir::Asc)
            .context("Failed to read ledger")?
    } else {
        ctx.verbose("ledger table missing; run `tw init`");
        Vec::new()
    };

    let rows = build_status(&scanned, &records);

    match args.output {
        StatusOutput::Json => println!("{}", serde_json::to_string_pretty(&rows)?),
        StatusOutput::Table => print_table(&rows),
    }
    Ok(())
}

fn print_table(rows: &[StatusRow]) {
    if rows.is_empty() {
        println!("No migrations found.");
        return;
    }

    let version_w = rows
        .iter()
        .map(|r| r.version.as_str().len())
        .max()
        .unwrap_or(0)
        .max("VERSION".len());
    let desc_w = rows
        .iter()
        .map(|r| r.description.len())
        .max()
        .unwrap_or(0)
        .max("DESCRIPTION".len());

    println!(
        "{:<version_w$}  {:<desc_w$}  {:<19}  {}",
        "VERSION", "DESCRIPTION", "APPLIED AT", "STATUS"
    );
    for row in rows {
        let applied = row
            .applied_at
            .map(|t| t.format("%Y-%m-%d %H:%M:%S").to_string())
            .unwrap_or_default();
        println!(
            "{:<version_w$}  {:<desc_w$}  {:<19}  {}",
            row.version.as_str(),
            row.description,
            applied,
            row.state
        );
    }
}
