//! Show command
//!
//! Usage: rostersnap show <INDEX>

use clap::Args;
use rostersnap_core::resolve_snapshot_at_index;
use rostersnap_store::load_chain;

use super::{engine_error, CommandResult, Context};

#[derive(Debug, Args)]
pub struct ShowArgs {
    /// Chain index (-1 for the base)
    #[arg(allow_negative_numbers = true)]
    pub index: i64,
}

pub fn execute(ctx: &Context, args: ShowArgs) -> CommandResult {
    let chain = load_chain(&ctx.chain_path)?;
    let snapshot = resolve_snapshot_at_index(&chain, args.index).map_err(engine_error("show"))?;
    println!("{}", serde_json::to_string_pretty(&snapshot)?);
    Ok(())
}
