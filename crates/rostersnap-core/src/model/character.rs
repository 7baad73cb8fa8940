use serde::{Deserialize, Serialize};

use super::unit::{changed, non_negative, require, UnitDiff, UnitProgression};
use crate::diff::DiffFlags;
use crate::errors::Result;

/// Character progression at a point in time
///
/// Projection of a live character record down to the fields the snapshot
/// chain tracks. Serialized with the host application's camelCase keys.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterSnapshot {
    /// Stable unit identifier
    pub id: String,

    /// Ordinal progression tier
    pub rank: i32,

    /// Ordinal rarity
    pub rarity: i32,

    /// Star tier
    pub stars: i32,

    pub active_ability_level: i32,

    pub passive_ability_level: i32,

    /// Character level
    #[serde(default)]
    pub xp_level: i32,

    /// Accumulated shards
    pub shards: i32,

    /// Accumulated mythic shards
    #[serde(default)]
    pub mythic_shards: i32,
}

/// Sparse character diff
///
/// Only fields whose value differs from the predecessor snapshot are `Some`.
/// Absent fields are not written when serialized.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterDiff {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rank: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rarity: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stars: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active_ability_level: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub passive_ability_level: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub xp_level: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shards: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mythic_shards: Option<i32>,
}

impl CharacterDiff {
    /// Diff that changes nothing for the given unit
    pub fn unchanged(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }
}

impl UnitProgression for CharacterSnapshot {
    type Diff = CharacterDiff;

    fn id(&self) -> &str {
        &self.id
    }

    fn diff_from(&self, base: &Self) -> CharacterDiff {
        CharacterDiff {
            id: self.id.clone(),
            rank: changed(base.rank, self.rank),
            rarity: changed(base.rarity, self.rarity),
            stars: changed(base.stars, self.stars),
            active_ability_level: changed(base.active_ability_level, self.active_ability_level),
            passive_ability_level: changed(
                base.passive_ability_level,
                self.passive_ability_level,
            ),
            xp_level: changed(base.xp_level, self.xp_level),
            shards: changed(base.shards, self.shards),
            mythic_shards: changed(base.mythic_shards, self.mythic_shards),
        }
    }

    fn apply(&self, diff: &CharacterDiff) -> Self {
        Self {
            id: self.id.clone(),
            rank: diff.rank.unwrap_or(self.rank),
            rarity: diff.rarity.unwrap_or(self.rarity),
            stars: diff.stars.unwrap_or(self.stars),
            active_ability_level: diff
                .active_ability_level
                .unwrap_or(self.active_ability_level),
            passive_ability_level: diff
                .passive_ability_level
                .unwrap_or(self.passive_ability_level),
            xp_level: diff.xp_level.unwrap_or(self.xp_level),
            shards: diff.shards.unwrap_or(self.shards),
            mythic_shards: diff.mythic_shards.unwrap_or(self.mythic_shards),
        }
    }

    fn from_diff(diff: &CharacterDiff) -> Result<Self> {
        let id = diff.id.as_str();
        Ok(Self {
            id: diff.id.clone(),
            rank: require(diff.rank, id, "rank")?,
            rarity: require(diff.rarity, id, "rarity")?,
            stars: require(diff.stars, id, "stars")?,
            active_ability_level: require(diff.active_ability_level, id, "activeAbilityLevel")?,
            passive_ability_level: require(
                diff.passive_ability_level,
                id,
                "passiveAbilityLevel",
            )?,
            xp_level: require(diff.xp_level, id, "xpLevel")?,
            shards: require(diff.shards, id, "shards")?,
            mythic_shards: require(diff.mythic_shards, id, "mythicShards")?,
        })
    }

    fn to_full_diff(&self) -> CharacterDiff {
        CharacterDiff {
            id: self.id.clone(),
            rank: Some(self.rank),
            rarity: Some(self.rarity),
            stars: Some(self.stars),
            active_ability_level: Some(self.active_ability_level),
            passive_ability_level: Some(self.passive_ability_level),
            xp_level: Some(self.xp_level),
            shards: Some(self.shards),
            mythic_shards: Some(self.mythic_shards),
        }
    }

    fn inherit_untracked(&mut self, base: &Self, flags: DiffFlags) {
        if !flags.shards {
            self.shards = base.shards;
        }
        if !flags.mythic_shards {
            self.mythic_shards = base.mythic_shards;
        }
        if !flags.xp_level {
            self.xp_level = base.xp_level;
        }
    }

    fn normalize(&mut self) {
        self.rank = non_negative(self.rank);
        self.rarity = non_negative(self.rarity);
        self.stars = non_negative(self.stars);
        self.active_ability_level = non_negative(self.active_ability_level);
        self.passive_ability_level = non_negative(self.passive_ability_level);
        self.xp_level = non_negative(self.xp_level);
        self.shards = non_negative(self.shards);
        self.mythic_shards = non_negative(self.mythic_shards);
    }
}

impl UnitDiff for CharacterDiff {
    fn id(&self) -> &str {
        &self.id
    }

    fn is_empty(&self) -> bool {
        self.rank.is_none()
            && self.rarity.is_none()
            && self.stars.is_none()
            && self.active_ability_level.is_none()
            && self.passive_ability_level.is_none()
            && self.xp_level.is_none()
            && self.shards.is_none()
            && self.mythic_shards.is_none()
    }

    fn normalize(&mut self) {
        for field in [
            &mut self.rank,
            &mut self.rarity,
            &mut self.stars,
            &mut self.active_ability_level,
            &mut self.passive_ability_level,
            &mut self.xp_level,
            &mut self.shards,
            &mut self.mythic_shards,
        ] {
            *field = field.map(non_negative);
        }
    }
}
