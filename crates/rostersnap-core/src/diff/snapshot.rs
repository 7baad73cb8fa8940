//! Whole-snapshot diff and resolve.

use std::collections::HashMap;

use super::unit::{diff_unit, full_diff, resolve_unit_diff};
use crate::errors::Result;
use crate::model::{RosterSnapshot, RosterSnapshotDiff, UnitDiff, UnitProgression};

/// Which live-tracked fields a snapshot diff records
///
/// Shards, mythic shards and character xp level change constantly and are
/// tracked live outside the chain. A comparison diff normally excludes them;
/// chain compaction must include them so no information is lost.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DiffFlags {
    pub shards: bool,
    pub mythic_shards: bool,
    pub xp_level: bool,
}

impl DiffFlags {
    /// Record every field (full fidelity, used when rebuilding a chain)
    pub const ALL: DiffFlags = DiffFlags {
        shards: true,
        mythic_shards: true,
        xp_level: true,
    };

    /// Record only progression fields
    pub const NONE: DiffFlags = DiffFlags {
        shards: false,
        mythic_shards: false,
        xp_level: false,
    };
}

/// Diff `compare` against `base`
///
/// The header (name, dates) is copied from `compare`. Units new in `compare`
/// get fully populated diffs; units present in both are diffed after the
/// fields excluded by `flags` are reset to `base`'s values, and dropped when
/// nothing changed.
///
/// Units are append-only: a unit present in `base` but missing from
/// `compare` is not represented in the result.
pub fn diff_snapshots(
    base: &RosterSnapshot,
    compare: &RosterSnapshot,
    flags: DiffFlags,
) -> RosterSnapshotDiff {
    RosterSnapshotDiff {
        name: compare.name.clone(),
        date_millis_utc: compare.date_millis_utc,
        deleted_date_millis_utc: compare.deleted_date_millis_utc,
        character_diffs: diff_units(&base.characters, &compare.characters, flags),
        vehicle_diffs: diff_units(&base.vehicles, &compare.vehicles, flags),
    }
}

/// Apply a snapshot diff to `base`
///
/// The header of the result comes from `diff`, not `base`. Units named in the
/// diff are updated in place; units the base lacks are appended in diff order.
///
/// # Errors
///
/// Returns `IncompleteNewUnit` when a diff entry introduces a unit without
/// populating every field.
pub fn resolve_snapshot_diff(
    base: &RosterSnapshot,
    diff: &RosterSnapshotDiff,
) -> Result<RosterSnapshot> {
    Ok(RosterSnapshot {
        name: diff.name.clone(),
        date_millis_utc: diff.date_millis_utc,
        deleted_date_millis_utc: diff.deleted_date_millis_utc,
        characters: resolve_units(&base.characters, &diff.character_diffs)?,
        vehicles: resolve_units(&base.vehicles, &diff.vehicle_diffs)?,
    })
}

fn diff_units<U: UnitProgression>(base: &[U], compare: &[U], flags: DiffFlags) -> Vec<U::Diff> {
    let by_id: HashMap<&str, &U> = base.iter().map(|u| (u.id(), u)).collect();

    compare
        .iter()
        .filter_map(|cur| match by_id.get(cur.id()) {
            None => Some(full_diff(cur)),
            Some(prev) => {
                let mut normalized = cur.clone();
                normalized.inherit_untracked(prev, flags);
                let diff = diff_unit(*prev, &normalized);
                (!diff.is_empty()).then_some(diff)
            }
        })
        .collect()
}

fn resolve_units<U: UnitProgression>(base: &[U], diffs: &[U::Diff]) -> Result<Vec<U>> {
    let mut units = base.to_vec();
    let mut positions: HashMap<String, usize> = units
        .iter()
        .enumerate()
        .map(|(i, u)| (u.id().to_string(), i))
        .collect();

    for diff in diffs {
        match positions.get(diff.id()) {
            Some(&pos) => units[pos] = resolve_unit_diff(Some(&units[pos]), diff)?,
            None => {
                let unit = resolve_unit_diff::<U>(None, diff)?;
                positions.insert(diff.id().to_string(), units.len());
                units.push(unit);
            }
        }
    }

    Ok(units)
}
