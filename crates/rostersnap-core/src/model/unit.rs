//! Shared behaviour of unit progression snapshots and their sparse diffs.

use std::fmt::Debug;

use crate::diff::DiffFlags;
use crate::errors::{Result, RosterError};

/// A unit's progression at a point in time (character or vehicle).
///
/// The `id` is the join key across snapshots and never changes. Implementors
/// provide the field-by-field work; the generic diff and resolve functions in
/// [`crate::diff`] are written once against this trait.
pub trait UnitProgression: Clone + Debug + PartialEq {
    /// Sparse diff type for this unit kind
    type Diff: UnitDiff;

    /// Stable unit identifier
    fn id(&self) -> &str;

    /// Diff containing only the fields of `self` that differ from `base`
    fn diff_from(&self, base: &Self) -> Self::Diff;

    /// Apply a diff on top of `self`; absent diff fields inherit from `self`
    fn apply(&self, diff: &Self::Diff) -> Self;

    /// Build a unit with no predecessor from a fully populated diff
    ///
    /// # Errors
    ///
    /// Returns `IncompleteNewUnit` naming the first absent field.
    fn from_diff(diff: &Self::Diff) -> Result<Self>;

    /// Diff with every field populated, used for units that are new in a snapshot
    fn to_full_diff(&self) -> Self::Diff;

    /// Copy the live-tracked fields (shards, mythic shards, xp level) from
    /// `base` wherever `flags` excludes them from the diff
    fn inherit_untracked(&mut self, base: &Self, flags: DiffFlags);

    /// Clamp negative numeric fields to zero
    fn normalize(&mut self);
}

/// Sparse per-unit diff: `None` fields mean "unchanged, inherit from base".
pub trait UnitDiff: Clone + Debug + PartialEq {
    /// Identifier of the unit this diff applies to
    fn id(&self) -> &str;

    /// True when only the identifier is set (no real change)
    fn is_empty(&self) -> bool;

    /// Clamp negative populated fields to zero
    fn normalize(&mut self);
}

/// Clamp helper shared by the normalization passes.
pub(crate) fn non_negative(value: i32) -> i32 {
    value.max(0)
}

/// Diff helper: `Some(cur)` when the value changed.
pub(crate) fn changed<T: PartialEq + Copy>(base: T, cur: T) -> Option<T> {
    if base != cur {
        Some(cur)
    } else {
        None
    }
}

/// New-unit helper: a field the diff must populate.
pub(crate) fn require<T: Copy>(value: Option<T>, unit_id: &str, field: &'static str) -> Result<T> {
    value.ok_or_else(|| RosterError::IncompleteNewUnit {
        unit_id: unit_id.to_string(),
        field,
    })
}
