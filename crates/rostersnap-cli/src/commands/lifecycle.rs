//! Delete, restore and rename commands
//!
//! Usage:
//!   rostersnap delete <INDEX>
//!   rostersnap restore <INDEX>
//!   rostersnap rename <INDEX> <NAME>

use clap::Args;
use rostersnap_core::errors::{ExError, ExErrorKind};
use rostersnap_core::{
    delete_live_snapshot, purge_oldest_deleted_snapshots, rename_snapshot, restore_snapshot,
    RosterSnapshotChain,
};
use rostersnap_store::{load_chain, load_policy, save_chain};

use super::{engine_error, now_millis, CommandResult, Context};

#[derive(Debug, Args)]
pub struct DeleteArgs {
    /// Chain index (-1 for the base)
    #[arg(allow_negative_numbers = true)]
    pub index: i64,
}

#[derive(Debug, Args)]
pub struct RestoreArgs {
    /// Chain index (-1 for the base)
    #[arg(allow_negative_numbers = true)]
    pub index: i64,
}

#[derive(Debug, Args)]
pub struct RenameArgs {
    /// Chain index (-1 for the base)
    #[arg(allow_negative_numbers = true)]
    pub index: i64,

    /// New label
    pub name: String,
}

/// Reject blank snapshot names
pub(crate) fn validate_name<'a>(op: &'static str, name: &'a str) -> Result<&'a str, ExError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(ExError::new(ExErrorKind::InvalidInput)
            .with_op(op)
            .with_message("Snapshot name cannot be blank"));
    }
    Ok(trimmed)
}

pub fn execute_delete(ctx: &Context, args: DeleteArgs) -> CommandResult {
    let policy = load_policy(&ctx.policy_path)?;
    let chain = load_chain(&ctx.chain_path)?;

    let deleted = delete_live_snapshot(&chain, args.index, now_millis());
    if !report_change(&chain, &deleted, args.index) {
        return Ok(());
    }

    let purged =
        purge_oldest_deleted_snapshots(&deleted, &policy).map_err(engine_error("delete"))?;
    save_chain(&ctx.chain_path, &purged)?;

    println!("✓ Moved entry {} to the trash", args.index);
    let dropped = deleted.len() - purged.len();
    if dropped > 0 {
        println!("  Purged {} oldest trashed entries", dropped);
    }
    Ok(())
}

pub fn execute_restore(ctx: &Context, args: RestoreArgs) -> CommandResult {
    let chain = load_chain(&ctx.chain_path)?;
    let restored = restore_snapshot(&chain, args.index);
    if report_change(&chain, &restored, args.index) {
        save_chain(&ctx.chain_path, &restored)?;
        println!("✓ Restored entry {}", args.index);
    }
    Ok(())
}

pub fn execute_rename(ctx: &Context, args: RenameArgs) -> CommandResult {
    let name = validate_name("rename", &args.name)?;
    let chain = load_chain(&ctx.chain_path)?;
    let renamed = rename_snapshot(&chain, args.index, name);
    if report_change(&chain, &renamed, args.index) {
        save_chain(&ctx.chain_path, &renamed)?;
        println!("✓ Renamed entry {} to '{}'", args.index, name);
    }
    Ok(())
}

/// Print a notice when the index no longer addresses an entry
///
/// Returns false when the chain has no entry at `index`, in which case there
/// is nothing to save.
fn report_change(before: &RosterSnapshotChain, after: &RosterSnapshotChain, index: i64) -> bool {
    if !before.contains_index(index) {
        println!("No entry at index {}; chain unchanged", index);
        return false;
    }
    if before == after {
        tracing::debug!(chain_index = index, "entry already in requested state");
    }
    true
}
