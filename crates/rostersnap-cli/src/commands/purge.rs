//! Purge and empty-trash commands
//!
//! Usage:
//!   rostersnap purge
//!   rostersnap empty-trash

use rostersnap_core::{purge_all_deleted_snapshots, purge_oldest_deleted_snapshots};
use rostersnap_store::{load_chain, load_policy, save_chain};

use super::{engine_error, CommandResult, Context};

pub fn execute_purge(ctx: &Context) -> CommandResult {
    let policy = load_policy(&ctx.policy_path)?;
    let chain = load_chain(&ctx.chain_path)?;
    let purged = purge_oldest_deleted_snapshots(&chain, &policy).map_err(engine_error("purge"))?;
    save_chain(&ctx.chain_path, &purged)?;
    println!(
        "✓ Purged {} entries ({} left in trash)",
        chain.len() - purged.len(),
        purged.deleted_count()
    );
    Ok(())
}

pub fn execute_empty_trash(ctx: &Context) -> CommandResult {
    let chain = load_chain(&ctx.chain_path)?;
    let purged = purge_all_deleted_snapshots(&chain).map_err(engine_error("empty-trash"))?;
    save_chain(&ctx.chain_path, &purged)?;
    println!("✓ Emptied trash ({} entries removed)", chain.len() - purged.len());
    Ok(())
}
