#![allow(clippy::unwrap_used, clippy::expect_used)]

use proptest::prelude::*;
use rostersnap_core::chain::rebuild_chain;
use rostersnap_core::diff::{diff_snapshots, fix_snapshot, resolve_snapshot_diff};
use rostersnap_core::{
    delete_live_snapshot, purge_oldest_deleted_snapshots, resolve_all_snapshots,
    resolve_live_snapshots, resolve_snapshot_at_index, restore_snapshot, take_snapshot,
    CharacterSnapshot, ChainIndex, DiffFlags, RetentionPolicy, RosterSnapshot,
    RosterSnapshotChain, VehicleSnapshot,
};

const MAX_CHARACTERS: usize = 4;
const MAX_VEHICLES: usize = 3;

type CharacterStats = [i32; 8];
type VehicleStats = ([i32; 6], bool);
type Step = (usize, usize, Vec<CharacterStats>, Vec<VehicleStats>);

fn character(i: usize, s: &CharacterStats) -> CharacterSnapshot {
    CharacterSnapshot {
        id: format!("c{i}"),
        rank: s[0],
        rarity: s[1],
        stars: s[2],
        active_ability_level: s[3],
        passive_ability_level: s[4],
        xp_level: s[5],
        shards: s[6],
        mythic_shards: s[7],
    }
}

fn vehicle(i: usize, (s, locked): &VehicleStats) -> VehicleSnapshot {
    VehicleSnapshot {
        id: format!("v{i}"),
        rarity: s[0],
        stars: s[1],
        primary_ability_level: s[2],
        secondary_ability_level: s[3],
        locked: *locked,
        shards: s[4],
        mythic_shards: s[5],
    }
}

fn step_strategy() -> impl Strategy<Value = Step> {
    (
        0..=MAX_CHARACTERS,
        0..=MAX_VEHICLES,
        prop::collection::vec(prop::array::uniform8(0i32..40), MAX_CHARACTERS),
        prop::collection::vec(
            (prop::array::uniform6(0i32..40), any::<bool>()),
            MAX_VEHICLES,
        ),
    )
}

/// A history of snapshots in which units are only ever added, always in the
/// same relative order
fn history_strategy() -> impl Strategy<Value = Vec<RosterSnapshot>> {
    prop::collection::vec(step_strategy(), 1..8).prop_map(|steps| {
        let mut characters = 0;
        let mut vehicles = 0;
        steps
            .into_iter()
            .enumerate()
            .map(|(i, (c, v, cstats, vstats))| {
                characters = characters.max(c);
                vehicles = vehicles.max(v);
                RosterSnapshot {
                    characters: cstats[..characters]
                        .iter()
                        .enumerate()
                        .map(|(j, s)| character(j, s))
                        .collect(),
                    vehicles: vstats[..vehicles]
                        .iter()
                        .enumerate()
                        .map(|(j, s)| vehicle(j, s))
                        .collect(),
                    ..RosterSnapshot::new(format!("s{i}"), i as i64 * 1_000)
                }
            })
            .collect()
    })
}

fn flags_strategy() -> impl Strategy<Value = DiffFlags> {
    (any::<bool>(), any::<bool>(), any::<bool>()).prop_map(|(shards, mythic_shards, xp_level)| {
        DiffFlags {
            shards,
            mythic_shards,
            xp_level,
        }
    })
}

fn chain_index(position: usize) -> ChainIndex {
    position as ChainIndex - 1
}

proptest! {
    #![proptest_config(ProptestConfig { cases: 64, .. ProptestConfig::default() })]

    #[test]
    fn full_fidelity_diff_round_trips(history in history_strategy()) {
        for pair in history.windows(2) {
            let diff = diff_snapshots(&pair[0], &pair[1], DiffFlags::ALL);
            prop_assert_eq!(&resolve_snapshot_diff(&pair[0], &diff).unwrap(), &pair[1]);
        }
    }

    #[test]
    fn diff_against_self_is_empty(history in history_strategy(), flags in flags_strategy()) {
        for snapshot in &history {
            prop_assert!(diff_snapshots(snapshot, snapshot, flags).is_empty());
        }
    }

    #[test]
    fn rebuilt_chain_reproduces_history(history in history_strategy()) {
        let chain = rebuild_chain(&history);
        prop_assert_eq!(chain.diffs.len(), history.len() - 1);
        prop_assert_eq!(resolve_all_snapshots(&chain).unwrap(), history);
    }

    #[test]
    fn resolve_all_agrees_with_resolve_at_index(history in history_strategy()) {
        let chain = rebuild_chain(&history);
        let all = resolve_all_snapshots(&chain).unwrap();
        for (pos, snapshot) in all.iter().enumerate() {
            prop_assert_eq!(
                snapshot,
                &resolve_snapshot_at_index(&chain, chain_index(pos)).unwrap()
            );
        }
    }

    #[test]
    fn deletion_preserves_every_reconstruction(
        history in history_strategy(),
        pick in any::<prop::sample::Index>(),
    ) {
        let chain = rebuild_chain(&history);
        let pos = pick.index(history.len());
        let deleted = delete_live_snapshot(&chain, chain_index(pos), 99);

        let before = resolve_all_snapshots(&chain).unwrap();
        let after = resolve_all_snapshots(&deleted).unwrap();
        prop_assert_eq!(after.len(), before.len());
        for (i, (a, b)) in after.iter().zip(&before).enumerate() {
            prop_assert_eq!(&a.characters, &b.characters);
            prop_assert_eq!(&a.vehicles, &b.vehicles);
            prop_assert_eq!(a.deleted_date_millis_utc.is_some(), i == pos);
        }
        prop_assert_eq!(resolve_live_snapshots(&deleted).unwrap().len(), history.len() - 1);
    }

    #[test]
    fn restore_inverts_delete(
        history in history_strategy(),
        pick in any::<prop::sample::Index>(),
    ) {
        let chain = rebuild_chain(&history);
        let index = chain_index(pick.index(history.len()));
        let round_trip = restore_snapshot(&delete_live_snapshot(&chain, index, 7), index);
        prop_assert_eq!(round_trip, chain);
    }

    #[test]
    fn purge_respects_trash_cap_and_keeps_live_view(
        history in history_strategy(),
        deletions in prop::collection::vec(prop::option::of(0i64..50), 8),
        cap in 0usize..4,
    ) {
        let marked: Vec<RosterSnapshot> = history
            .into_iter()
            .zip(deletions)
            .map(|(mut s, deleted)| {
                s.deleted_date_millis_utc = deleted;
                s
            })
            .collect();
        let chain = rebuild_chain(&marked);
        let policy = RetentionPolicy {
            max_deleted_snapshots: cap,
            ..RetentionPolicy::default()
        };

        let purged = purge_oldest_deleted_snapshots(&chain, &policy).unwrap();
        prop_assert_eq!(purged.deleted_count(), chain.deleted_count().min(cap));
        prop_assert_eq!(
            resolve_live_snapshots(&purged).unwrap(),
            resolve_live_snapshots(&chain).unwrap()
        );
    }

    #[test]
    fn take_snapshot_respects_live_cap(
        history in history_strategy(),
        max_snapshots in 2usize..5,
    ) {
        let policy = RetentionPolicy {
            max_snapshots,
            ..RetentionPolicy::default()
        };
        let mut chain = RosterSnapshotChain::new();
        for snapshot in &history {
            chain = take_snapshot(&chain, snapshot.clone(), &policy).unwrap();
            prop_assert!(chain.len() <= max_snapshots);
            let newest = resolve_all_snapshots(&chain).unwrap().pop().unwrap();
            prop_assert_eq!(&newest, &fix_snapshot(snapshot.clone()));
        }
        prop_assert_eq!(chain.base.map(|b| b.name), Some(history[0].name.clone()));
    }
}
