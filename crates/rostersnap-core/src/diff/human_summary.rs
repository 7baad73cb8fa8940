//! Human-readable summary renderer for roster snapshot diffs.

use crate::model::{CharacterDiff, RosterSnapshotDiff, VehicleDiff};

/// Render a Markdown summary of a [`RosterSnapshotDiff`].
///
/// Lists every changed unit with its changed fields. Informational only.
pub fn render_diff_summary(diff: &RosterSnapshotDiff) -> String {
    let mut out = String::new();

    out.push_str(&format!("## {}\n\n", diff.name));
    match diff.date() {
        Some(date) => out.push_str(&format!(
            "**Taken**: {}\n\n",
            date.format("%Y-%m-%d %H:%M UTC")
        )),
        None => out.push_str(&format!("**Taken**: {} ms\n\n", diff.date_millis_utc)),
    }

    if diff.is_empty() {
        out.push_str("_No changes._\n");
        return out;
    }

    if !diff.character_diffs.is_empty() {
        out.push_str(&format!(
            "### Characters ({})\n\n",
            diff.character_diffs.len()
        ));
        for d in &diff.character_diffs {
            out.push_str(&format!("- `{}`: {}\n", d.id, character_changes(d).join(", ")));
        }
        out.push('\n');
    }

    if !diff.vehicle_diffs.is_empty() {
        out.push_str(&format!("### Vehicles ({})\n\n", diff.vehicle_diffs.len()));
        for d in &diff.vehicle_diffs {
            out.push_str(&format!("- `{}`: {}\n", d.id, vehicle_changes(d).join(", ")));
        }
        out.push('\n');
    }

    out
}

fn push_change<T: std::fmt::Display>(out: &mut Vec<String>, label: &str, value: Option<T>) {
    if let Some(v) = value {
        out.push(format!("{label} → {v}"));
    }
}

fn character_changes(d: &CharacterDiff) -> Vec<String> {
    let mut out = Vec::new();
    push_change(&mut out, "rank", d.rank);
    push_change(&mut out, "rarity", d.rarity);
    push_change(&mut out, "stars", d.stars);
    push_change(&mut out, "active ability", d.active_ability_level);
    push_change(&mut out, "passive ability", d.passive_ability_level);
    push_change(&mut out, "level", d.xp_level);
    push_change(&mut out, "shards", d.shards);
    push_change(&mut out, "mythic shards", d.mythic_shards);
    out
}

fn vehicle_changes(d: &VehicleDiff) -> Vec<String> {
    let mut out = Vec::new();
    push_change(&mut out, "rarity", d.rarity);
    push_change(&mut out, "stars", d.stars);
    push_change(&mut out, "primary ability", d.primary_ability_level);
    push_change(&mut out, "secondary ability", d.secondary_ability_level);
    if let Some(locked) = d.locked {
        out.push(if locked { "locked" } else { "unlocked" }.to_string());
    }
    push_change(&mut out, "shards", d.shards);
    push_change(&mut out, "mythic shards", d.mythic_shards);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_diff_summary() {
        let diff = RosterSnapshotDiff {
            name: "Week 2".to_string(),
            date_millis_utc: 0,
            ..RosterSnapshotDiff::default()
        };
        let summary = render_diff_summary(&diff);
        assert!(summary.starts_with("## Week 2"));
        assert!(summary.contains("1970-01-01 00:00 UTC"));
        assert!(summary.contains("_No changes._"));
    }

    #[test]
    fn test_summary_lists_changed_fields() {
        let diff = RosterSnapshotDiff {
            name: "Week 3".to_string(),
            character_diffs: vec![CharacterDiff {
                rank: Some(3),
                stars: Some(2),
                ..CharacterDiff::unchanged("A")
            }],
            vehicle_diffs: vec![VehicleDiff {
                locked: Some(false),
                ..VehicleDiff::unchanged("rhino")
            }],
            ..RosterSnapshotDiff::default()
        };
        let summary = render_diff_summary(&diff);
        assert!(summary.contains("### Characters (1)"));
        assert!(summary.contains("- `A`: rank → 3, stars → 2"));
        assert!(summary.contains("- `rhino`: unlocked"));
    }
}
