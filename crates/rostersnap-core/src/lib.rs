//! rostersnap core - roster snapshot chain engine
//!
//! Stores a history of roster snapshots as one full base snapshot followed
//! by sparse per-unit diffs, and provides:
//! - Diffing and resolving snapshots (characters and vehicles)
//! - Reconstructing any chain entry, all entries, or only the live ones
//! - Soft-deletion, restoration and renaming of entries
//! - Appending new snapshots and purging the trash under a retention policy
//!
//! Every operation is pure: it takes a chain by reference and returns a new
//! one. Persistence lives in `rostersnap-store`.

pub mod chain;
pub mod config;
pub mod diff;
pub mod errors;
pub mod logging_facility;
pub mod model;

pub use rostersnap_core_types::schema;

// Re-export commonly used types
pub use chain::{
    compare_snapshots, delete_live_snapshot, get_live_snapshot_indices,
    purge_all_deleted_snapshots, purge_oldest_deleted_snapshots, rename_snapshot,
    resolve_all_snapshots, resolve_live_snapshots, resolve_snapshot_at_index, restore_snapshot,
    take_snapshot,
};
pub use config::{RetentionPolicy, MAX_DELETED_SNAPSHOTS, MAX_SNAPSHOTS};
pub use diff::DiffFlags;
pub use errors::{ExError, ExErrorKind, Result, RosterError};
pub use model::{
    ChainIndex, CharacterDiff, CharacterSnapshot, RosterSnapshot, RosterSnapshotChain,
    RosterSnapshotDiff, VehicleDiff, VehicleSnapshot, BASE_INDEX,
};
