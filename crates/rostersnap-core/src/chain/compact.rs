//! Chain rebuilding: appending snapshots and purging deleted entries.
//!
//! Removing a link from the middle of the chain invalidates the next diff's
//! base, so every operation here resolves the whole old chain first, edits
//! the flat list of snapshots, and re-diffs consecutive pairs with full
//! fidelity. Old and new diff bases are never mixed.

use std::collections::HashSet;
use std::time::Instant;

use super::resolve::resolve_all_snapshots;
use crate::config::RetentionPolicy;
use crate::diff::{diff_snapshots, fix_snapshot, DiffFlags};
use crate::errors::Result;
use crate::model::{RosterSnapshot, RosterSnapshotChain};
use crate::{log_op_end, log_op_error, log_op_start};

/// Build a chain from resolved snapshots in order
///
/// The first snapshot becomes the base; each following snapshot becomes a
/// full-fidelity diff against its predecessor. No snapshots yields an empty
/// chain.
pub fn rebuild_chain(snapshots: &[RosterSnapshot]) -> RosterSnapshotChain {
    let Some(base) = snapshots.first() else {
        return RosterSnapshotChain::new();
    };

    RosterSnapshotChain {
        base: Some(base.clone()),
        diffs: snapshots
            .windows(2)
            .map(|pair| diff_snapshots(&pair[0], &pair[1], DiffFlags::ALL))
            .collect(),
    }
}

/// Permanently remove the oldest soft-deleted entries beyond the trash cap
///
/// Deleted entries are ordered by deletion time (ties keep chain order). When
/// their count exceeds `policy.max_deleted_snapshots`, the oldest excess is
/// dropped and the chain is rebuilt from the survivors. Otherwise the chain
/// is returned unchanged.
///
/// # Errors
///
/// Returns `IncompleteNewUnit` if the existing chain cannot be resolved.
pub fn purge_oldest_deleted_snapshots(
    chain: &RosterSnapshotChain,
    policy: &RetentionPolicy,
) -> Result<RosterSnapshotChain> {
    log_op_start!("purge_oldest_deleted_snapshots", chain_len = chain.len());
    let start = Instant::now();

    let result = purge_oldest_deleted_impl(chain, policy.max_deleted_snapshots);
    finish("purge_oldest_deleted_snapshots", start, result)
}

/// Permanently remove every soft-deleted entry ("empty trash")
///
/// # Errors
///
/// Returns `IncompleteNewUnit` if the existing chain cannot be resolved.
pub fn purge_all_deleted_snapshots(chain: &RosterSnapshotChain) -> Result<RosterSnapshotChain> {
    log_op_start!("purge_all_deleted_snapshots", chain_len = chain.len());
    let start = Instant::now();

    let result = purge_oldest_deleted_impl(chain, 0);
    finish("purge_all_deleted_snapshots", start, result)
}

/// Append a newly taken snapshot as the newest chain entry
///
/// The snapshot is normalized, the whole existing chain is resolved, the new
/// snapshot appended, and the chain rebuilt. If the rebuilt chain would hold
/// more than `policy.max_snapshots - 1` diffs, the oldest diffs after the base
/// are dropped.
///
/// Dropped entries are discarded outright, not moved to the trash. This
/// loses history and is logged at warn level.
///
/// # Errors
///
/// - `InvalidPolicy` if the policy fails validation
/// - `IncompleteNewUnit` if the existing chain cannot be resolved
pub fn take_snapshot(
    chain: &RosterSnapshotChain,
    snapshot: RosterSnapshot,
    policy: &RetentionPolicy,
) -> Result<RosterSnapshotChain> {
    log_op_start!(
        "take_snapshot",
        chain_len = chain.len(),
        name = snapshot.name.as_str()
    );
    let start = Instant::now();

    let result = take_snapshot_impl(chain, snapshot, policy);
    finish("take_snapshot", start, result)
}

fn take_snapshot_impl(
    chain: &RosterSnapshotChain,
    snapshot: RosterSnapshot,
    policy: &RetentionPolicy,
) -> Result<RosterSnapshotChain> {
    policy.validate()?;

    let mut snapshots = resolve_all_snapshots(chain)?;
    snapshots.push(fix_snapshot(snapshot));

    if snapshots.len() > policy.max_snapshots {
        let excess = snapshots.len() - policy.max_snapshots;
        let dropped: Vec<String> = snapshots
            .drain(1..1 + excess)
            .map(|s| s.name)
            .collect();
        tracing::warn!(
            op = "take_snapshot",
            dropped_len = excess,
            max_snapshots = policy.max_snapshots,
            dropped = ?dropped,
            "snapshot cap exceeded; oldest entries after the base discarded permanently"
        );
    }

    Ok(rebuild_chain(&snapshots))
}

fn purge_oldest_deleted_impl(
    chain: &RosterSnapshotChain,
    max_deleted: usize,
) -> Result<RosterSnapshotChain> {
    let snapshots = resolve_all_snapshots(chain)?;

    let mut deleted: Vec<(usize, i64)> = snapshots
        .iter()
        .enumerate()
        .filter_map(|(pos, s)| s.deleted_date_millis_utc.map(|date| (pos, date)))
        .collect();

    if deleted.len() <= max_deleted {
        tracing::debug!(
            deleted_len = deleted.len(),
            max_deleted,
            "trash within cap; nothing to purge"
        );
        return Ok(chain.clone());
    }

    deleted.sort_by_key(|&(_, date)| date);
    let excess = deleted.len() - max_deleted;
    let doomed: HashSet<usize> = deleted[..excess].iter().map(|&(pos, _)| pos).collect();

    let survivors: Vec<RosterSnapshot> = snapshots
        .into_iter()
        .enumerate()
        .filter(|(pos, _)| !doomed.contains(pos))
        .map(|(_, s)| s)
        .collect();

    tracing::debug!(
        deleted_len = deleted.len(),
        purged_len = excess,
        chain_len = survivors.len(),
        "purged deleted snapshots"
    );

    Ok(rebuild_chain(&survivors))
}

fn finish(
    op: &'static str,
    start: Instant,
    result: Result<RosterSnapshotChain>,
) -> Result<RosterSnapshotChain> {
    let elapsed = start.elapsed().as_millis() as u64;
    match &result {
        Ok(next) => {
            log_op_end!(op, duration_ms = elapsed, chain_len = next.len());
        }
        Err(e) => {
            log_op_error!(op, e.clone(), duration_ms = elapsed);
        }
    }
    result
}
