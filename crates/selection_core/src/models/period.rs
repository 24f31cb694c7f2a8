//! Timed periods.
//!
//! Each team owns an ordered set of periods (halves plus user-added
//! sub-intervals); each period owns an independent assignment map.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use super::assignment::Assignment;
use super::slot::SlotId;

/// Allowed period length in minutes. Out-of-range input is rejected, never
/// clamped, so the caller can surface a validation error.
pub const MIN_DURATION_MINUTES: u32 = 1;
pub const MAX_DURATION_MINUTES: u32 = 90;

/// Which half of the match a period belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Half {
    First,
    Second,
}

impl Half {
    /// 1-based index used for display and external data.
    pub fn index(&self) -> u8 {
        match self {
            Half::First => 1,
            Half::Second => 2,
        }
    }

    pub fn from_index(index: u8) -> Option<Half> {
        match index {
            1 => Some(Half::First),
            2 => Some(Half::Second),
            _ => None,
        }
    }

    pub fn previous(&self) -> Option<Half> {
        match self {
            Half::First => None,
            Half::Second => Some(Half::First),
        }
    }
}

/// Identifier of a period within a team.
///
/// Ids 1 and 2 are permanently reserved for the seeded "First Half" and
/// "Second Half"; user-added periods allocate monotonically from 3 and ids
/// are never recycled, so a stale id can never silently alias a new period.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct PeriodId(u32);

impl PeriodId {
    pub const FIRST_HALF: PeriodId = PeriodId(1);
    pub const SECOND_HALF: PeriodId = PeriodId(2);
    /// First id handed to a user-added period.
    pub const FIRST_USER_ID: u32 = 3;

    pub fn new(raw: u32) -> Self {
        PeriodId(raw)
    }

    pub fn raw(&self) -> u32 {
        self.0
    }

    pub fn is_reserved(&self) -> bool {
        *self == Self::FIRST_HALF || *self == Self::SECOND_HALF
    }

    /// Display name derived from the id, stable across reloads.
    pub fn display_name(&self) -> String {
        match *self {
            Self::FIRST_HALF => "First Half".to_string(),
            Self::SECOND_HALF => "Second Half".to_string(),
            PeriodId(n) => format!("Period {n}"),
        }
    }
}

impl fmt::Display for PeriodId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// One timed segment with its own slot assignments.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Period {
    pub id: PeriodId,
    pub half: Half,
    /// 0-based position within the half.
    pub order_within_half: u32,
    pub duration_minutes: u32,
    /// Occupied slots only; absence of a key means unassigned.
    pub assignments: BTreeMap<SlotId, Assignment>,
    /// Monotonic bench-slot counter. Never decremented, so deleted bench
    /// slots cannot be reallocated while stale references exist.
    #[serde(default)]
    pub(crate) next_sub_index: u32,
}

impl Period {
    pub fn new(id: PeriodId, half: Half, order_within_half: u32, duration_minutes: u32) -> Self {
        Period {
            id,
            half,
            order_within_half,
            duration_minutes,
            assignments: BTreeMap::new(),
            next_sub_index: 0,
        }
    }

    /// Whether the duration is inside the allowed range.
    pub fn duration_in_range(minutes: u32) -> bool {
        (MIN_DURATION_MINUTES..=MAX_DURATION_MINUTES).contains(&minutes)
    }

    /// Slot currently held by `player`, if any.
    pub fn slot_of(&self, player: super::player::PlayerId) -> Option<&SlotId> {
        self.assignments.iter().find(|(_, a)| a.player_id == player).map(|(slot, _)| slot)
    }

    /// Assignment whose canonical label matches, if any.
    pub fn assignment_by_label(&self, label: &str) -> Option<&Assignment> {
        self.assignments.values().find(|a| a.position_label == label)
    }

    /// Number of bench slots ever allocated in this period.
    pub fn substitute_count(&self) -> u32 {
        self.next_sub_index
    }
}

// Equality is observable selection content; the bench-slot allocation counter
// is internal and not recoverable from the sparse persisted format.
impl PartialEq for Period {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
            && self.half == other.half
            && self.order_within_half == other.order_within_half
            && self.duration_minutes == other.duration_minutes
            && self.assignments == other.assignments
    }
}
