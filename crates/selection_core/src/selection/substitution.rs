//! Substitution Diff Engine.
//!
//! Stateless comparison of two consecutive periods' assignments. A position
//! counts as a substitution only when it is occupied on both sides by
//! different players; a position that did not exist before is an addition,
//! and an empty side is not a substitution at all. Callers recompute per
//! render and may cache by `(PeriodId, label)`; the engine keeps no memory.

use std::collections::BTreeMap;

use crate::models::{Assignment, SlotId};

/// Whether the occupant of `position_label` changed between two periods.
pub fn is_substitution(
    current: &BTreeMap<SlotId, Assignment>,
    previous: &BTreeMap<SlotId, Assignment>,
    position_label: &str,
) -> bool {
    let now = current.values().find(|a| a.position_label == position_label);
    let then = previous.values().find(|a| a.position_label == position_label);
    match (now, then) {
        (Some(now), Some(then)) => now.player_id != then.player_id,
        _ => false,
    }
}

/// Per-label substitution flags for every occupied slot of `current`.
pub fn substitution_flags(
    current: &BTreeMap<SlotId, Assignment>,
    previous: &BTreeMap<SlotId, Assignment>,
) -> BTreeMap<String, bool> {
    current
        .values()
        .map(|a| {
            let label = a.position_label.clone();
            let flag = is_substitution(current, previous, &label);
            (label, flag)
        })
        .collect()
}
