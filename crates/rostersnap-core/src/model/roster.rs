use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::character::{CharacterDiff, CharacterSnapshot};
use super::vehicle::{VehicleDiff, VehicleSnapshot};

/// A user-captured roster at a point in time
///
/// Unit ids are unique within `characters` and within `vehicles`. The
/// snapshot is soft-deleted exactly when `deleted_date_millis_utc` is set.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RosterSnapshot {
    /// User label
    pub name: String,

    /// Capture time, milliseconds since the Unix epoch (UTC)
    pub date_millis_utc: i64,

    /// Soft-deletion time, if deleted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deleted_date_millis_utc: Option<i64>,

    pub characters: Vec<CharacterSnapshot>,

    pub vehicles: Vec<VehicleSnapshot>,
}

impl RosterSnapshot {
    /// Create an empty, live snapshot
    pub fn new(name: impl Into<String>, date_millis_utc: i64) -> Self {
        Self {
            name: name.into(),
            date_millis_utc,
            ..Self::default()
        }
    }

    /// Capture time as a UTC timestamp (None if out of chrono's range)
    pub fn date(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp_millis(self.date_millis_utc)
    }

    /// Look up a character by id
    pub fn character(&self, id: &str) -> Option<&CharacterSnapshot> {
        self.characters.iter().find(|c| c.id == id)
    }

    /// Look up a vehicle by id
    pub fn vehicle(&self, id: &str) -> Option<&VehicleSnapshot> {
        self.vehicles.iter().find(|v| v.id == id)
    }
}

/// Incremental change from one roster snapshot to the next
///
/// Same header as [`RosterSnapshot`]; the unit lists hold only changed units.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RosterSnapshotDiff {
    pub name: String,

    pub date_millis_utc: i64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deleted_date_millis_utc: Option<i64>,

    #[serde(default)]
    pub character_diffs: Vec<CharacterDiff>,

    #[serde(default)]
    pub vehicle_diffs: Vec<VehicleDiff>,
}

impl RosterSnapshotDiff {
    /// True when no unit changed
    pub fn is_empty(&self) -> bool {
        self.character_diffs.is_empty() && self.vehicle_diffs.is_empty()
    }

    /// Capture time as a UTC timestamp
    pub fn date(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp_millis(self.date_millis_utc)
    }
}

/// Header fields shared by every chain entry (the base snapshot and each diff)
///
/// Lets chain-level bookkeeping (delete, restore, rename) address an entry
/// without caring whether it is the base or a diff.
pub trait ChainEntry {
    fn name(&self) -> &str;
    fn set_name(&mut self, name: String);
    fn date_millis_utc(&self) -> i64;
    fn deleted_date_millis_utc(&self) -> Option<i64>;
    fn set_deleted_date_millis_utc(&mut self, date: Option<i64>);

    fn is_deleted(&self) -> bool {
        self.deleted_date_millis_utc().is_some()
    }
}

macro_rules! impl_chain_entry {
    ($ty:ty) => {
        impl ChainEntry for $ty {
            fn name(&self) -> &str {
                &self.name
            }

            fn set_name(&mut self, name: String) {
                self.name = name;
            }

            fn date_millis_utc(&self) -> i64 {
                self.date_millis_utc
            }

            fn deleted_date_millis_utc(&self) -> Option<i64> {
                self.deleted_date_millis_utc
            }

            fn set_deleted_date_millis_utc(&mut self, date: Option<i64>) {
                self.deleted_date_millis_utc = date;
            }
        }
    };
}

impl_chain_entry!(RosterSnapshot);
impl_chain_entry!(RosterSnapshotDiff);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_live_snapshot_omits_deleted_date() {
        let snap = RosterSnapshot::new("Week 1", 1_700_000_000_000);
        let json = serde_json::to_value(&snap).unwrap();
        assert!(json.get("deletedDateMillisUtc").is_none());
        assert_eq!(json["dateMillisUtc"], 1_700_000_000_000i64);
    }

    #[test]
    fn test_chain_entry_deletion_flag() {
        let mut diff = RosterSnapshotDiff::default();
        assert!(!diff.is_deleted());
        diff.set_deleted_date_millis_utc(Some(5));
        assert!(diff.is_deleted());
    }

    #[test]
    fn test_date_conversion() {
        let snap = RosterSnapshot::new("epoch", 0);
        assert_eq!(snap.date().map(|d| d.timestamp()), Some(0));
    }
}
