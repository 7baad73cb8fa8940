use serde::{Deserialize, Serialize};

use super::roster::{ChainEntry, RosterSnapshot, RosterSnapshotDiff};

/// Position in a snapshot chain: `-1` is the base, `i >= 0` is `diffs[i]`
pub type ChainIndex = i64;

/// Index that addresses the base snapshot
pub const BASE_INDEX: ChainIndex = -1;

/// The persisted snapshot history: a base snapshot plus a chain of diffs
///
/// `diffs[0]` is a diff against `base`; `diffs[i]` is a diff against the
/// resolution of `diffs[i - 1]`. When `base` is `None` the chain is empty and
/// `diffs` is ignored.
///
/// Operations never mutate a chain in place: every mutating operation in
/// [`crate::chain`] takes `&RosterSnapshotChain` and returns a new value.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RosterSnapshotChain {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base: Option<RosterSnapshot>,

    #[serde(default)]
    pub diffs: Vec<RosterSnapshotDiff>,
}

impl RosterSnapshotChain {
    /// Create an empty chain
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a chain holding a single base snapshot
    pub fn with_base(base: RosterSnapshot) -> Self {
        Self {
            base: Some(base),
            diffs: Vec::new(),
        }
    }

    /// True when there is no base snapshot
    pub fn is_empty(&self) -> bool {
        self.base.is_none()
    }

    /// Number of entries (base plus diffs); zero for an empty chain
    pub fn len(&self) -> usize {
        match self.base {
            Some(_) => 1 + self.diffs.len(),
            None => 0,
        }
    }

    /// True when `index` addresses an existing entry (`-1` for the base)
    pub fn contains_index(&self, index: ChainIndex) -> bool {
        self.base.is_some()
            && index >= BASE_INDEX
            && (index == BASE_INDEX || (index as usize) < self.diffs.len())
    }

    /// Header view of the entry at `index`
    pub fn entry(&self, index: ChainIndex) -> Option<&dyn ChainEntry> {
        if !self.contains_index(index) {
            return None;
        }
        if index == BASE_INDEX {
            self.base.as_ref().map(|b| b as &dyn ChainEntry)
        } else {
            self.diffs.get(index as usize).map(|d| d as &dyn ChainEntry)
        }
    }

    /// Mutable header view of the entry at `index`
    pub(crate) fn entry_mut(&mut self, index: ChainIndex) -> Option<&mut dyn ChainEntry> {
        if !self.contains_index(index) {
            return None;
        }
        if index == BASE_INDEX {
            self.base.as_mut().map(|b| b as &mut dyn ChainEntry)
        } else {
            self.diffs
                .get_mut(index as usize)
                .map(|d| d as &mut dyn ChainEntry)
        }
    }

    /// Every entry header in chain order, paired with its index
    pub fn entries(&self) -> Vec<(ChainIndex, &dyn ChainEntry)> {
        let Some(base) = &self.base else {
            return Vec::new();
        };
        let mut out: Vec<(ChainIndex, &dyn ChainEntry)> =
            vec![(BASE_INDEX, base as &dyn ChainEntry)];
        out.extend(
            self.diffs
                .iter()
                .enumerate()
                .map(|(i, d)| (i as ChainIndex, d as &dyn ChainEntry)),
        );
        out
    }

    /// Number of soft-deleted entries
    pub fn deleted_count(&self) -> usize {
        self.entries().iter().filter(|(_, e)| e.is_deleted()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chain_with_diffs(n: usize) -> RosterSnapshotChain {
        let mut chain = RosterSnapshotChain::with_base(RosterSnapshot::new("base", 0));
        for i in 0..n {
            chain.diffs.push(RosterSnapshotDiff {
                name: format!("d{}", i),
                date_millis_utc: i as i64 + 1,
                ..RosterSnapshotDiff::default()
            });
        }
        chain
    }

    #[test]
    fn test_contains_index_bounds() {
        let chain = chain_with_diffs(2);
        assert!(chain.contains_index(-1));
        assert!(chain.contains_index(0));
        assert!(chain.contains_index(1));
        assert!(!chain.contains_index(2));
        assert!(!chain.contains_index(-2));
    }

    #[test]
    fn test_empty_chain_has_no_entries() {
        let mut chain = chain_with_diffs(3);
        chain.base = None;
        assert!(chain.is_empty());
        assert_eq!(chain.len(), 0);
        assert!(chain.entries().is_empty());
        assert!(!chain.contains_index(0));
    }

    #[test]
    fn test_entry_names_in_order() {
        let chain = chain_with_diffs(2);
        let names: Vec<&str> = chain.entries().iter().map(|(_, e)| e.name()).collect();
        assert_eq!(names, vec!["base", "d0", "d1"]);
    }

    #[test]
    fn test_missing_base_deserializes_as_empty() {
        let chain: RosterSnapshotChain = serde_json::from_str(r#"{"diffs":[]}"#).unwrap();
        assert!(chain.is_empty());
    }
}
