//! Chain resolution: reconstructing snapshots from the base and diff chain.

use crate::diff::{diff_snapshots, resolve_snapshot_diff, DiffFlags};
use crate::errors::{Result, RosterError};
use crate::model::{
    ChainEntry, ChainIndex, RosterSnapshot, RosterSnapshotChain, RosterSnapshotDiff, BASE_INDEX,
};

/// Reconstruct the snapshot at `index` (`-1` for the base)
///
/// Folds every diff up to and including `index` onto the base. Costs
/// `index + 1` snapshot reconstructions; callers needing several indices
/// should use [`resolve_all_snapshots`].
///
/// # Errors
///
/// - `EmptyChain` if the chain has no base
/// - `IndexOutOfBounds` if `index` is neither `-1` nor a position in `diffs`
/// - `IncompleteNewUnit` if a diff on the way is malformed
pub fn resolve_snapshot_at_index(
    chain: &RosterSnapshotChain,
    index: ChainIndex,
) -> Result<RosterSnapshot> {
    let base = chain
        .base
        .as_ref()
        .ok_or(RosterError::EmptyChain { index })?;

    if !chain.contains_index(index) {
        return Err(RosterError::IndexOutOfBounds {
            index,
            len: chain.diffs.len(),
        });
    }

    if index == BASE_INDEX {
        return Ok(base.clone());
    }

    chain.diffs[..=index as usize]
        .iter()
        .try_fold(base.clone(), |acc, diff| resolve_snapshot_diff(&acc, diff))
}

/// Reconstruct every entry in chain order: `[base, diffs[0], diffs[1], ...]`
///
/// Soft-deleted entries are included. Empty when the chain has no base.
///
/// # Errors
///
/// Returns `IncompleteNewUnit` if a diff is malformed.
pub fn resolve_all_snapshots(chain: &RosterSnapshotChain) -> Result<Vec<RosterSnapshot>> {
    let Some(base) = &chain.base else {
        return Ok(Vec::new());
    };

    let mut out = Vec::with_capacity(chain.diffs.len() + 1);
    out.push(base.clone());
    for diff in &chain.diffs {
        let next = resolve_snapshot_diff(&out[out.len() - 1], diff)?;
        out.push(next);
    }
    Ok(out)
}

/// Reconstruct the live (not soft-deleted) entries in chain order
///
/// The fold still walks through deleted diffs, so later entries reconstruct
/// exactly as they would without the deletion.
///
/// # Errors
///
/// Returns `IncompleteNewUnit` if a diff is malformed.
pub fn resolve_live_snapshots(chain: &RosterSnapshotChain) -> Result<Vec<RosterSnapshot>> {
    Ok(resolve_all_snapshots(chain)?
        .into_iter()
        .filter(|s| !s.is_deleted())
        .collect())
}

/// Chain indices of the live entries, in order (`-1` for the base)
///
/// Comparison selectors address snapshots by position in this list; once
/// entries are deleted, that position differs from the raw chain index.
pub fn get_live_snapshot_indices(chain: &RosterSnapshotChain) -> Vec<ChainIndex> {
    chain
        .entries()
        .into_iter()
        .filter(|(_, entry)| !entry.is_deleted())
        .map(|(index, _)| index)
        .collect()
}

/// Diff the snapshot at `right` against the snapshot at `left`
///
/// # Errors
///
/// Same as [`resolve_snapshot_at_index`] for either index.
pub fn compare_snapshots(
    chain: &RosterSnapshotChain,
    left: ChainIndex,
    right: ChainIndex,
    flags: DiffFlags,
) -> Result<RosterSnapshotDiff> {
    let left = resolve_snapshot_at_index(chain, left)?;
    let right = resolve_snapshot_at_index(chain, right)?;
    Ok(diff_snapshots(&left, &right, flags))
}
