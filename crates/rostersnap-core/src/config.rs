//! Retention configuration for snapshot chains.

use serde::{Deserialize, Serialize};

use crate::errors::{Result, RosterError};

/// Live retention cap: at most this many live chain entries (base included)
pub const MAX_SNAPSHOTS: usize = 20;

/// Trash retention cap: at most this many soft-deleted entries
pub const MAX_DELETED_SNAPSHOTS: usize = 20;

/// Bounded-retention policy applied by `take_snapshot` and the purge
///
/// Deserializes from a partial document; absent keys fall back to the
/// constants above.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RetentionPolicy {
    pub max_snapshots: usize,
    pub max_deleted_snapshots: usize,
}

impl Default for RetentionPolicy {
    fn default() -> Self {
        Self {
            max_snapshots: MAX_SNAPSHOTS,
            max_deleted_snapshots: MAX_DELETED_SNAPSHOTS,
        }
    }
}

impl RetentionPolicy {
    /// Check that the policy can hold at least the base snapshot
    ///
    /// # Errors
    ///
    /// Returns `InvalidPolicy` if `max_snapshots` is zero.
    pub fn validate(&self) -> Result<()> {
        if self.max_snapshots == 0 {
            return Err(RosterError::InvalidPolicy {
                reason: "max_snapshots must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}
