//! Normalization of snapshots loaded from host storage.

use crate::model::{RosterSnapshot, RosterSnapshotChain, UnitDiff, UnitProgression};

/// Clamp every negative numeric field of every unit to zero
pub fn fix_snapshot(mut snapshot: RosterSnapshot) -> RosterSnapshot {
    snapshot
        .characters
        .iter_mut()
        .for_each(UnitProgression::normalize);
    snapshot
        .vehicles
        .iter_mut()
        .for_each(UnitProgression::normalize);
    snapshot
}

/// Apply [`fix_snapshot`] to the base and the same clamp to every populated
/// diff field
pub fn fix_chain(mut chain: RosterSnapshotChain) -> RosterSnapshotChain {
    chain.base = chain.base.map(fix_snapshot);
    for diff in &mut chain.diffs {
        diff.character_diffs.iter_mut().for_each(UnitDiff::normalize);
        diff.vehicle_diffs.iter_mut().for_each(UnitDiff::normalize);
    }
    chain
}
