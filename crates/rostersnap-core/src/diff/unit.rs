//! Single-unit diff and resolve primitives.
//!
//! Generic over [`UnitProgression`], so characters and vehicles share one
//! implementation of the "absent means inherit" contract.

use crate::errors::Result;
use crate::model::{UnitDiff, UnitProgression};

/// Diff `cur` against its predecessor `base`
///
/// A field is populated iff its value differs; the id is always set. Applying
/// the result with [`resolve_unit_diff`] on `base` reproduces `cur` exactly.
pub fn diff_unit<U: UnitProgression>(base: &U, cur: &U) -> U::Diff {
    cur.diff_from(base)
}

/// Fully populated diff for a unit that has no predecessor
pub fn full_diff<U: UnitProgression>(unit: &U) -> U::Diff {
    unit.to_full_diff()
}

/// Apply a unit diff
///
/// With a `base`, every field is `diff.field` when present and `base.field`
/// otherwise. Without a `base` the unit is new and the diff must populate
/// every field.
///
/// # Errors
///
/// Returns `IncompleteNewUnit` when `base` is `None` and the diff leaves a
/// field absent. Nothing is defaulted.
pub fn resolve_unit_diff<U: UnitProgression>(base: Option<&U>, diff: &U::Diff) -> Result<U> {
    match base {
        Some(base) => Ok(base.apply(diff)),
        None => {
            tracing::trace!(unit_id = diff.id(), "constructing new unit from diff");
            U::from_diff(diff)
        }
    }
}
