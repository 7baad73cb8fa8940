//! Live roster records supplied by the host application.
//!
//! These carry far more than the snapshot chain tracks (names, factions,
//! equipped upgrades, raw xp). Snapshotting projects them down to
//! [`CharacterSnapshot`] / [`VehicleSnapshot`].

use serde::{Deserialize, Serialize};

use super::character::CharacterSnapshot;
use super::roster::RosterSnapshot;
use super::vehicle::VehicleSnapshot;

/// A character as the host application tracks it
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LiveCharacter {
    pub id: String,
    pub name: String,
    pub faction: String,
    pub rank: i32,
    pub rarity: i32,
    pub stars: i32,
    pub active_ability_level: i32,
    pub passive_ability_level: i32,
    /// Character level
    pub level: i32,
    /// Raw experience points toward the next level
    pub xp: i64,
    pub shards: i32,
    pub mythic_shards: i32,
    /// Upgrade ids equipped at the current rank
    pub upgrades: Vec<String>,
}

/// A vehicle (machine of war) as the host application tracks it
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LiveVehicle {
    pub id: String,
    pub name: String,
    pub faction: String,
    pub rarity: i32,
    pub stars: i32,
    pub primary_ability_level: i32,
    pub secondary_ability_level: i32,
    pub locked: bool,
    pub shards: i32,
    pub mythic_shards: i32,
}

/// The host's full live roster
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LiveRoster {
    pub characters: Vec<LiveCharacter>,
    pub vehicles: Vec<LiveVehicle>,
}

/// Project a live character down to its snapshot shape
pub fn snapshot_character(full: &LiveCharacter) -> CharacterSnapshot {
    CharacterSnapshot {
        id: full.id.clone(),
        rank: full.rank,
        rarity: full.rarity,
        stars: full.stars,
        active_ability_level: full.active_ability_level,
        passive_ability_level: full.passive_ability_level,
        xp_level: full.level,
        shards: full.shards,
        mythic_shards: full.mythic_shards,
    }
}

/// Project a live vehicle down to its snapshot shape
pub fn snapshot_vehicle(full: &LiveVehicle) -> VehicleSnapshot {
    VehicleSnapshot {
        id: full.id.clone(),
        rarity: full.rarity,
        stars: full.stars,
        primary_ability_level: full.primary_ability_level,
        secondary_ability_level: full.secondary_ability_level,
        locked: full.locked,
        shards: full.shards,
        mythic_shards: full.mythic_shards,
    }
}

/// Snapshot the whole live roster under a user label and capture time
pub fn snapshot_roster(
    roster: &LiveRoster,
    name: impl Into<String>,
    date_millis_utc: i64,
) -> RosterSnapshot {
    RosterSnapshot {
        name: name.into(),
        date_millis_utc,
        deleted_date_millis_utc: None,
        characters: roster.characters.iter().map(snapshot_character).collect(),
        vehicles: roster.vehicles.iter().map(snapshot_vehicle).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_character_drops_descriptive_fields() {
        let live = LiveCharacter {
            id: "bloodDante".to_string(),
            name: "Dante".to_string(),
            faction: "BloodAngels".to_string(),
            rank: 9,
            rarity: 3,
            stars: 6,
            active_ability_level: 30,
            passive_ability_level: 29,
            level: 35,
            xp: 1234,
            shards: 88,
            mythic_shards: 2,
            upgrades: vec!["u1".to_string()],
        };
        let snap = snapshot_character(&live);
        assert_eq!(snap.id, "bloodDante");
        assert_eq!(snap.xp_level, 35);
        assert_eq!(snap.mythic_shards, 2);
    }

    #[test]
    fn test_live_roster_ignores_unknown_host_fields() {
        let json = r#"{"characters":[{"id":"a","rank":2,"bias":"alwaysRecommend"}],
            "vehicles":[{"id":"v","locked":true}],"inventory":{}}"#;
        let roster: LiveRoster = serde_json::from_str(json).unwrap();
        let snap = snapshot_roster(&roster, "now", 10);
        assert_eq!(snap.characters[0].rank, 2);
        assert!(snap.vehicles[0].locked);
        assert!(snap.deleted_date_millis_utc.is_none());
    }
}
