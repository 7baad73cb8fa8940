//! Soft-deletion, restoration and renaming of chain entries.
//!
//! These only touch entry headers, so the diff chain stays valid: a deleted
//! diff still participates in reconstructing every later entry.
//!
//! An index that does not address an entry (stale UI, double click) is not
//! an error here. The operation logs at debug and returns an unmodified copy.

use std::time::Instant;

use crate::model::{ChainEntry, ChainIndex, RosterSnapshotChain};
use crate::{log_op_end, log_op_start};

/// Soft-delete the entry at `index` (`-1` for the base)
///
/// No-op (returns a copy) when the chain is empty, `index < -1`, or
/// `index >= diffs.len()`.
pub fn delete_live_snapshot(
    chain: &RosterSnapshotChain,
    index: ChainIndex,
    deletion_time_millis: i64,
) -> RosterSnapshotChain {
    update_entry(chain, index, "delete_live_snapshot", |entry| {
        entry.set_deleted_date_millis_utc(Some(deletion_time_millis))
    })
}

/// Clear the soft-deletion mark on the entry at `index`
///
/// Same bounds handling as [`delete_live_snapshot`].
pub fn restore_snapshot(chain: &RosterSnapshotChain, index: ChainIndex) -> RosterSnapshotChain {
    update_entry(chain, index, "restore_snapshot", |entry| {
        entry.set_deleted_date_millis_utc(None)
    })
}

/// Change the user label of the entry at `index`
///
/// Same bounds handling as [`delete_live_snapshot`]. Name validation is up to
/// the host.
pub fn rename_snapshot(
    chain: &RosterSnapshotChain,
    index: ChainIndex,
    name: impl Into<String>,
) -> RosterSnapshotChain {
    let name = name.into();
    update_entry(chain, index, "rename_snapshot", |entry| entry.set_name(name))
}

fn update_entry(
    chain: &RosterSnapshotChain,
    index: ChainIndex,
    op: &'static str,
    update: impl FnOnce(&mut dyn ChainEntry),
) -> RosterSnapshotChain {
    log_op_start!(op, chain_index = index);
    let start = Instant::now();

    let mut next = chain.clone();
    match next.entry_mut(index) {
        Some(entry) => update(entry),
        None => tracing::debug!(
            op,
            chain_index = index,
            chain_len = chain.len(),
            "index does not address an entry; chain unchanged"
        ),
    }

    log_op_end!(op, duration_ms = start.elapsed().as_millis() as u64);
    next
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{RosterSnapshot, RosterSnapshotDiff};

    fn chain() -> RosterSnapshotChain {
        RosterSnapshotChain {
            base: Some(RosterSnapshot::new("base", 0)),
            diffs: vec![
                RosterSnapshotDiff {
                    name: "s1".to_string(),
                    date_millis_utc: 1,
                    ..RosterSnapshotDiff::default()
                },
                RosterSnapshotDiff {
                    name: "s2".to_string(),
                    date_millis_utc: 2,
                    ..RosterSnapshotDiff::default()
                },
            ],
        }
    }

    #[test]
    fn test_delete_base_and_diff() {
        let chain = chain();
        let deleted = delete_live_snapshot(&chain, -1, 100);
        assert_eq!(deleted.base.as_ref().unwrap().deleted_date_millis_utc, Some(100));

        let deleted = delete_live_snapshot(&chain, 1, 200);
        assert_eq!(deleted.diffs[1].deleted_date_millis_utc, Some(200));
        assert_eq!(deleted.diffs[0].deleted_date_millis_utc, None);

        // input untouched
        assert_eq!(chain.deleted_count(), 0);
    }

    #[test]
    fn test_delete_out_of_range_is_noop() {
        let chain = chain();
        assert_eq!(delete_live_snapshot(&chain, 2, 5), chain);
        assert_eq!(delete_live_snapshot(&chain, -2, 5), chain);

        let empty = RosterSnapshotChain::new();
        assert_eq!(delete_live_snapshot(&empty, -1, 5), empty);
    }

    #[test]
    fn test_restore_clears_mark() {
        let chain = chain();
        let restored = restore_snapshot(&delete_live_snapshot(&chain, 0, 9), 0);
        assert_eq!(restored, chain);
        assert_eq!(restore_snapshot(&chain, 7), chain);
    }

    #[test]
    fn test_rename_entry() {
        let chain = chain();
        let renamed = rename_snapshot(&chain, 0, "after raid");
        assert_eq!(renamed.diffs[0].name, "after raid");
        assert_eq!(rename_snapshot(&chain, 5, "x"), chain);
    }
}
