//! Per-team selection state.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use super::period::{Half, Period, PeriodId};
use super::player::PlayerId;
use super::slot::PositionCode;

/// In-memory team identifier, 0-indexed.
///
/// The persisted record format is 1-indexed; the persistence adapter is the
/// single place that applies the offset, so nothing else may assume a base.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct TeamId(u32);

impl TeamId {
    pub const fn new(index: u32) -> Self {
        TeamId(index)
    }

    pub fn index(&self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for TeamId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Age/ability band used to look up eligible players from the roster
/// collaborator.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TeamCategory(String);

impl TeamCategory {
    pub fn new(category: impl Into<String>) -> Self {
        TeamCategory(category.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for TeamCategory {
    fn default() -> Self {
        TeamCategory("OPEN".to_string())
    }
}

/// One team's squad, captain, and periods.
///
/// A team's squad is the superset from which assignments for any of its
/// periods may be drawn; a squad player may be benched everywhere.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamSelection {
    pub id: TeamId,
    pub display_name: String,
    pub category: TeamCategory,
    /// Players eligible for assignment in any period of this team.
    pub squad: BTreeSet<PlayerId>,
    /// Must be a current squad member when set; not necessarily assigned.
    pub captain: Option<PlayerId>,
    pub periods: BTreeMap<PeriodId, Period>,
    /// Formation slots valid for this team, from the fixture format.
    pub layout: Vec<PositionCode>,
    /// Monotonic period-id allocator, never recycled.
    #[serde(default = "first_user_period_id")]
    pub(crate) next_period_id: u32,
}

fn first_user_period_id() -> u32 {
    PeriodId::FIRST_USER_ID
}

impl TeamSelection {
    /// Create a team pre-seeded with the two reserved half periods.
    pub fn new(
        id: TeamId,
        display_name: impl Into<String>,
        category: TeamCategory,
        layout: Vec<PositionCode>,
        half_duration_minutes: u32,
    ) -> Self {
        let mut periods = BTreeMap::new();
        periods.insert(
            PeriodId::FIRST_HALF,
            Period::new(PeriodId::FIRST_HALF, Half::First, 0, half_duration_minutes),
        );
        periods.insert(
            PeriodId::SECOND_HALF,
            Period::new(PeriodId::SECOND_HALF, Half::Second, 0, half_duration_minutes),
        );
        TeamSelection {
            id,
            display_name: display_name.into(),
            category,
            squad: BTreeSet::new(),
            captain: None,
            periods,
            layout,
            next_period_id: PeriodId::FIRST_USER_ID,
        }
    }

    pub fn period(&self, id: PeriodId) -> Option<&Period> {
        self.periods.get(&id)
    }

    pub fn period_mut(&mut self, id: PeriodId) -> Option<&mut Period> {
        self.periods.get_mut(&id)
    }

    /// Periods in playing order: by half, then by order within the half.
    pub fn periods_in_order(&self) -> Vec<&Period> {
        let mut ordered: Vec<&Period> = self.periods.values().collect();
        ordered.sort_by_key(|p| (p.half, p.order_within_half));
        ordered
    }

    /// The period played immediately before `id`, if any.
    pub fn preceding_period(&self, id: PeriodId) -> Option<&Period> {
        let ordered = self.periods_in_order();
        let idx = ordered.iter().position(|p| p.id == id)?;
        if idx == 0 {
            None
        } else {
            Some(ordered[idx - 1])
        }
    }

    /// Whether the code names a formation slot this team can field.
    pub fn layout_contains(&self, code: &PositionCode) -> bool {
        self.layout.contains(code)
    }

    pub fn is_in_squad(&self, player: PlayerId) -> bool {
        self.squad.contains(&player)
    }
}

// Equality is observable selection content; the period-id allocator is
// internal and not recoverable from the sparse persisted format.
impl PartialEq for TeamSelection {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
            && self.display_name == other.display_name
            && self.category == other.category
            && self.squad == other.squad
            && self.captain == other.captain
            && self.periods == other.periods
            && self.layout == other.layout
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout() -> Vec<PositionCode> {
        ["GK", "DL", "DC", "DR"].iter().map(PositionCode::new).collect()
    }

    #[test]
    fn new_team_is_seeded_with_both_halves() {
        let team = TeamSelection::new(TeamId::new(0), "Team 1", TeamCategory::default(), layout(), 25);
        assert_eq!(team.periods.len(), 2);
        assert!(team.period(PeriodId::FIRST_HALF).is_some());
        assert!(team.period(PeriodId::SECOND_HALF).is_some());
        assert_eq!(team.period(PeriodId::FIRST_HALF).unwrap().duration_minutes, 25);
    }

    #[test]
    fn periods_order_by_half_then_order() {
        let mut team =
            TeamSelection::new(TeamId::new(0), "Team 1", TeamCategory::default(), layout(), 25);
        let extra = Period::new(PeriodId::new(3), Half::First, 1, 10);
        team.periods.insert(extra.id, extra);
        let order: Vec<PeriodId> = team.periods_in_order().iter().map(|p| p.id).collect();
        assert_eq!(order, vec![PeriodId::FIRST_HALF, PeriodId::new(3), PeriodId::SECOND_HALF]);
    }

    #[test]
    fn preceding_period_walks_playing_order() {
        let team = TeamSelection::new(TeamId::new(0), "Team 1", TeamCategory::default(), layout(), 25);
        assert!(team.preceding_period(PeriodId::FIRST_HALF).is_none());
        assert_eq!(
            team.preceding_period(PeriodId::SECOND_HALF).unwrap().id,
            PeriodId::FIRST_HALF
        );
    }
}
