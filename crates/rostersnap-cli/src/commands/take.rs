//! Take command
//!
//! Usage: rostersnap take --roster <FILE> --name <NAME> [--date-millis <MS>]

use clap::Args;
use rostersnap_core::model::snapshot_roster;
use rostersnap_core::take_snapshot;
use rostersnap_store::{load_chain, load_live_roster, load_policy, save_chain};
use std::path::PathBuf;

use super::lifecycle::validate_name;
use super::{engine_error, now_millis, CommandResult, Context};

#[derive(Debug, Args)]
pub struct TakeArgs {
    /// Live roster JSON document exported by the game helper
    #[arg(long)]
    pub roster: PathBuf,

    /// Label for the new snapshot
    #[arg(long)]
    pub name: String,

    /// Capture time in UTC milliseconds (default: now)
    #[arg(long)]
    pub date_millis: Option<i64>,
}

pub fn execute(ctx: &Context, args: TakeArgs) -> CommandResult {
    let name = validate_name("take", &args.name)?;
    let policy = load_policy(&ctx.policy_path)?;
    let chain = load_chain(&ctx.chain_path)?;
    let roster = load_live_roster(&args.roster)?;

    let snapshot = snapshot_roster(&roster, name, args.date_millis.unwrap_or_else(now_millis));
    let next = take_snapshot(&chain, snapshot, &policy).map_err(engine_error("take"))?;
    save_chain(&ctx.chain_path, &next)?;

    println!(
        "✓ Took snapshot '{}' ({} entries in chain)",
        name,
        next.len()
    );
    Ok(())
}
