pub mod chain;
pub mod character;
pub mod live;
pub mod roster;
pub mod unit;
pub mod vehicle;

pub use chain::{ChainIndex, RosterSnapshotChain, BASE_INDEX};
pub use character::{CharacterDiff, CharacterSnapshot};
pub use live::{
    snapshot_character, snapshot_roster, snapshot_vehicle, LiveCharacter, LiveRoster, LiveVehicle,
};
pub use roster::{ChainEntry, RosterSnapshot, RosterSnapshotDiff};
pub use unit::{UnitDiff, UnitProgression};
pub use vehicle::{VehicleDiff, VehicleSnapshot};
