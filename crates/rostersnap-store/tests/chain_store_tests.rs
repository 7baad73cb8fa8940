#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::fs;

use rostersnap_core::errors::ExErrorKind;
use rostersnap_core::model::snapshot_roster;
use rostersnap_core::{
    delete_live_snapshot, resolve_all_snapshots, take_snapshot, CharacterSnapshot,
    RetentionPolicy, RosterSnapshot, RosterSnapshotChain,
};
use rostersnap_store::{load_chain, load_live_roster, save_chain};
use tempfile::TempDir;

fn snapshot(name: &str, date: i64, rank: i32) -> RosterSnapshot {
    RosterSnapshot {
        characters: vec![CharacterSnapshot {
            id: "A".to_string(),
            rank,
            rarity: 1,
            stars: 0,
            active_ability_level: 1,
            passive_ability_level: 1,
            xp_level: 1,
            shards: 0,
            mythic_shards: 0,
        }],
        ..RosterSnapshot::new(name, date)
    }
}

#[test]
fn test_save_then_load_round_trip() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(".rostersnap").join("chain.json");
    let policy = RetentionPolicy::default();

    let mut chain = RosterSnapshotChain::new();
    for (i, rank) in [1, 2, 4].into_iter().enumerate() {
        chain = take_snapshot(&chain, snapshot(&format!("w{i}"), i as i64, rank), &policy).unwrap();
    }
    let chain = delete_live_snapshot(&chain, 0, 99);

    save_chain(&path, &chain).unwrap();
    let loaded = load_chain(&path).unwrap();

    assert_eq!(loaded, chain);
    assert_eq!(
        resolve_all_snapshots(&loaded).unwrap(),
        resolve_all_snapshots(&chain).unwrap()
    );
}

#[test]
fn test_persisted_shape_is_camel_case_and_sparse() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("chain.json");
    let policy = RetentionPolicy::default();

    let chain = take_snapshot(&RosterSnapshotChain::new(), snapshot("a", 1, 1), &policy).unwrap();
    let chain = take_snapshot(&chain, snapshot("b", 2, 3), &policy).unwrap();
    save_chain(&path, &chain).unwrap();

    let json: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(json["base"]["dateMillisUtc"], 1);
    assert!(json["base"].get("deletedDateMillisUtc").is_none());
    assert_eq!(
        json["diffs"][0]["characterDiffs"],
        serde_json::json!([{ "id": "A", "rank": 3 }])
    );
}

#[test]
fn test_load_clamps_negative_counts() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("chain.json");
    fs::write(
        &path,
        r#"{
            "base": {
                "name": "old host",
                "dateMillisUtc": 0,
                "characters": [{
                    "id": "A", "rank": 1, "rarity": 1, "stars": 0,
                    "activeAbilityLevel": 1, "passiveAbilityLevel": 1,
                    "shards": -5
                }],
                "vehicles": []
            },
            "diffs": [{
                "name": "next",
                "dateMillisUtc": 1,
                "characterDiffs": [{ "id": "A", "mythicShards": -2 }],
                "vehicleDiffs": []
            }]
        }"#,
    )
    .unwrap();

    let chain = load_chain(&path).unwrap();
    let base = chain.base.as_ref().unwrap();
    assert_eq!(base.characters[0].shards, 0);
    assert_eq!(base.characters[0].xp_level, 0);
    assert_eq!(chain.diffs[0].character_diffs[0].mythic_shards, Some(0));
}

#[test]
fn test_live_roster_document_snapshots() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("roster.json");
    fs::write(
        &path,
        r#"{
            "characters": [{
                "id": "A", "name": "Captain", "faction": "Ultramarines",
                "rank": 4, "rarity": 2, "stars": 3,
                "activeAbilityLevel": 8, "passiveAbilityLevel": 7,
                "level": 15, "xp": 900, "shards": 12, "mythicShards": 0,
                "upgrades": ["a", "b"]
            }],
            "vehicles": [{ "id": "rhino", "locked": true }]
        }"#,
    )
    .unwrap();

    let roster = load_live_roster(&path).unwrap();
    let snapshot = snapshot_roster(&roster, "from file", 5);
    assert_eq!(snapshot.character("A").unwrap().xp_level, 15);
    assert!(snapshot.vehicle("rhino").unwrap().locked);
}

#[test]
fn test_invalid_live_roster_is_serialization_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("roster.json");
    fs::write(&path, "[1, 2, 3]").unwrap();

    assert_eq!(
        load_live_roster(&path).unwrap_err().kind(),
        ExErrorKind::Serialization
    );
}
