use serde::{Deserialize, Serialize};

use super::unit::{changed, non_negative, require, UnitDiff, UnitProgression};
use crate::diff::DiffFlags;
use crate::errors::Result;

/// Vehicle (machine of war) progression at a point in time
///
/// Vehicles have no rank and no character level; instead they carry a
/// locked flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleSnapshot {
    /// Stable unit identifier
    pub id: String,

    /// Ordinal rarity
    pub rarity: i32,

    /// Star tier
    pub stars: i32,

    pub primary_ability_level: i32,

    pub secondary_ability_level: i32,

    /// True while the vehicle has not been unlocked
    pub locked: bool,

    pub shards: i32,

    #[serde(default)]
    pub mythic_shards: i32,
}

/// Sparse vehicle diff
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleDiff {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rarity: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stars: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary_ability_level: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secondary_ability_level: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locked: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shards: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mythic_shards: Option<i32>,
}

impl VehicleDiff {
    /// Diff that changes nothing for the given unit
    pub fn unchanged(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }
}

impl UnitProgression for VehicleSnapshot {
    type Diff = VehicleDiff;

    fn id(&self) -> &str {
        &self.id
    }

    fn diff_from(&self, base: &Self) -> VehicleDiff {
        VehicleDiff {
            id: self.id.clone(),
            rarity: changed(base.rarity, self.rarity),
            stars: changed(base.stars, self.stars),
            primary_ability_level: changed(base.primary_ability_level, self.primary_ability_level),
            secondary_ability_level: changed(
                base.secondary_ability_level,
                self.secondary_ability_level,
            ),
            locked: changed(base.locked, self.locked),
            shards: changed(base.shards, self.shards),
            mythic_shards: changed(base.mythic_shards, self.mythic_shards),
        }
    }

    fn apply(&self, diff: &VehicleDiff) -> Self {
        Self {
            id: self.id.clone(),
            rarity: diff.rarity.unwrap_or(self.rarity),
            stars: diff.stars.unwrap_or(self.stars),
            primary_ability_level: diff
                .primary_ability_level
                .unwrap_or(self.primary_ability_level),
            secondary_ability_level: diff
                .secondary_ability_level
                .unwrap_or(self.secondary_ability_level),
            locked: diff.locked.unwrap_or(self.locked),
            shards: diff.shards.unwrap_or(self.shards),
            mythic_shards: diff.mythic_shards.unwrap_or(self.mythic_shards),
        }
    }

    fn from_diff(diff: &VehicleDiff) -> Result<Self> {
        let id = diff.id.as_str();
        Ok(Self {
            id: diff.id.clone(),
            rarity: require(diff.rarity, id, "rarity")?,
            stars: require(diff.stars, id, "stars")?,
            primary_ability_level: require(diff.primary_ability_level, id, "primaryAbilityLevel")?,
            secondary_ability_level: require(
                diff.secondary_ability_level,
                id,
                "secondaryAbilityLevel",
            )?,
            locked: require(diff.locked, id, "locked")?,
            shards: require(diff.shards, id, "shards")?,
            mythic_shards: require(diff.mythic_shards, id, "mythicShards")?,
        })
    }

    fn to_full_diff(&self) -> VehicleDiff {
        VehicleDiff {
            id: self.id.clone(),
            rarity: Some(self.rarity),
            stars: Some(self.stars),
            primary_ability_level: Some(self.primary_ability_level),
            secondary_ability_level: Some(self.secondary_ability_level),
            locked: Some(self.locked),
            shards: Some(self.shards),
            mythic_shards: Some(self.mythic_shards),
        }
    }

    // Vehicles have no xp level, so only the shard flags apply.
    fn inherit_untracked(&mut self, base: &Self, flags: DiffFlags) {
        if !flags.shards {
            self.shards = base.shards;
        }
        if !flags.mythic_shards {
            self.mythic_shards = base.mythic_shards;
        }
    }

    fn normalize(&mut self) {
        self.rarity = non_negative(self.rarity);
        self.stars = non_negative(self.stars);
        self.primary_ability_level = non_negative(self.primary_ability_level);
        self.secondary_ability_level = non_negative(self.secondary_ability_level);
        self.shards = non_negative(self.shards);
        self.mythic_shards = non_negative(self.mythic_shards);
    }
}

impl UnitDiff for VehicleDiff {
    fn id(&self) -> &str {
        &self.id
    }

    fn is_empty(&self) -> bool {
        self.rarity.is_none()
            && self.stars.is_none()
            && self.primary_ability_level.is_none()
            && self.secondary_ability_level.is_none()
            && self.locked.is_none()
            && self.shards.is_none()
            && self.mythic_shards.is_none()
    }

    fn normalize(&mut self) {
        for field in [
            &mut self.rarity,
            &mut self.stars,
            &mut self.primary_ability_level,
            &mut self.secondary_ability_level,
            &mut self.shards,
            &mut self.mythic_shards,
        ] {
            *field = field.map(non_negative);
        }
    }
}
