//! Chain-level operations over a [`RosterSnapshotChain`].
//!
//! All functions are pure: they read the input chain and return new values.
//! Index `-1` addresses the base everywhere.
//!
//! - [`resolve`]: reconstructing one, all, or the live snapshots
//! - [`lifecycle`]: soft-delete, restore, rename
//! - [`compact`]: take snapshot, purge, rebuild
//!
//! [`RosterSnapshotChain`]: crate::model::RosterSnapshotChain

pub mod compact;
pub mod lifecycle;
pub mod resolve;

pub use compact::{
    purge_all_deleted_snapshots, purge_oldest_deleted_snapshots, rebuild_chain, take_snapshot,
};
pub use lifecycle::{delete_live_snapshot, rename_snapshot, restore_snapshot};
pub use resolve::{
    compare_snapshots, get_live_snapshot_indices, resolve_all_snapshots, resolve_live_snapshots,
    resolve_snapshot_at_index,
};
