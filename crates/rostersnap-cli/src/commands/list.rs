//! List command
//!
//! Usage: rostersnap list [--all]

use clap::Args;
use rostersnap_core::model::ChainEntry;
use rostersnap_store::load_chain;

use super::{format_millis, CommandResult, Context};

#[derive(Debug, Args)]
pub struct ListArgs {
    /// Include entries in the trash
    #[arg(long)]
    pub all: bool,
}

pub fn execute(ctx: &Context, args: ListArgs) -> CommandResult {
    let chain = load_chain(&ctx.chain_path)?;
    if chain.is_empty() {
        println!("No snapshots yet.");
        return Ok(());
    }

    for (index, entry) in chain.entries() {
        if entry.is_deleted() && !args.all {
            continue;
        }
        println!("{}", format_entry(index, entry));
    }
    Ok(())
}

fn format_entry(index: i64, entry: &dyn ChainEntry) -> String {
    let mut line = format!(
        "{:>4}  {}  {}",
        index,
        format_millis(entry.date_millis_utc()),
        entry.name()
    );
    if let Some(deleted) = entry.deleted_date_millis_utc() {
        line.push_str(&format!("  [deleted {}]", format_millis(deleted)));
    }
    line
}
