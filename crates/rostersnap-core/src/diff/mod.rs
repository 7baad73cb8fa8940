//! Roster snapshot diff engine.
//!
//! Sparse diffs between roster snapshots and their application.
//!
//! ## Entry points
//!
//! ```
//! use rostersnap_core::diff::{diff_snapshots, resolve_snapshot_diff, DiffFlags};
//! use rostersnap_core::model::RosterSnapshot;
//!
//! let before = RosterSnapshot::new("before", 0);
//! let after = RosterSnapshot::new("after", 1);
//! let diff = diff_snapshots(&before, &after, DiffFlags::ALL);
//! let rebuilt = resolve_snapshot_diff(&before, &diff).unwrap();
//! assert_eq!(rebuilt, after);
//! ```
//!
//! ## Guarantees
//!
//! - **Absent means inherit**: a `None` diff field is never defaulted.
//! - **Round-trip**: resolving a full-fidelity diff against its base
//!   reproduces the compared snapshot.
//! - **No aliasing**: diffing and resolving always produce new values.
//! - **Append-only units**: units missing from the compared snapshot are not
//!   represented; rosters only gain units.

pub mod human_summary;
pub mod normalize;
pub mod snapshot;
pub mod unit;

pub use human_summary::render_diff_summary;
pub use normalize::{fix_chain, fix_snapshot};
pub use snapshot::{diff_snapshots, resolve_snapshot_diff, DiffFlags};
pub use unit::{diff_unit, full_diff, resolve_unit_diff};
