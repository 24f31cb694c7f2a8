//! Squad Membership Tracker.
//!
//! Tracks which players are eligible for assignment per team and answers
//! cross-team membership queries. Removing a player from a squad always wins
//! over a stale assignment: their slots are pruned silently rather than the
//! operation failing, because the membership invariant takes precedence.

use std::collections::BTreeSet;
use tracing::debug;

use crate::error::SquadError;
use crate::models::{PlayerId, TeamId};

use super::SelectionState;

impl SelectionState {
    /// Replace a team's squad set.
    ///
    /// Assignments held by removed players (in any period of the team) are
    /// pruned, and the captaincy is cleared if the captain was removed.
    pub fn set_squad(&mut self, team: TeamId, players: impl IntoIterator<Item = PlayerId>) {
        let squad: BTreeSet<PlayerId> =
            players.into_iter().filter(|p| !p.is_unassigned()).collect();
        let team_state = self.team_mut(team);

        for period in team_state.periods.values_mut() {
            let stale: Vec<_> = period
                .assignments
                .iter()
                .filter(|(_, a)| !squad.contains(&a.player_id))
                .map(|(slot, a)| (slot.clone(), a.player_id))
                .collect();
            for (slot, player) in stale {
                period.assignments.remove(&slot);
                debug!(team = %team, period = %period.id, slot = %slot, player = %player,
                    "pruned assignment of player removed from squad");
            }
        }

        if let Some(captain) = team_state.captain {
            if !squad.contains(&captain) {
                team_state.captain = None;
                debug!(team = %team, player = %captain, "cleared captain removed from squad");
            }
        }

        team_state.squad = squad;
    }

    /// Set or clear a team's captain. The captain must be a current squad
    /// member; they need not hold a slot.
    pub fn set_captain(
        &mut self,
        team: TeamId,
        captain: Option<PlayerId>,
    ) -> Result<(), SquadError> {
        if let Some(player) = captain {
            if !self.team(team).is_in_squad(player) {
                return Err(SquadError::CaptainNotInSquad { player });
            }
        }
        self.team_mut(team).captain = captain;
        Ok(())
    }

    /// Teams whose squad currently contains `player`. Pure read, O(teams).
    pub fn teams_containing(&self, player: PlayerId) -> BTreeSet<TeamId> {
        self.teams()
            .iter()
            .filter(|t| t.is_in_squad(player))
            .map(|t| t.id)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{PeriodId, PositionCode, SlotId, TeamCategory, TeamSelection};

    const TEAM: TeamId = TeamId::new(0);

    fn test_state() -> SelectionState {
        let layout = ["GK", "DC", "MC", "ST"].iter().map(PositionCode::new).collect();
        SelectionState::new(vec![TeamSelection::new(
            TEAM,
            "Team 1",
            TeamCategory::default(),
            layout,
            25,
        )])
    }

    #[test]
    fn removing_a_player_prunes_their_assignments() {
        let (p1, p2) = (PlayerId::new(), PlayerId::new());
        let mut state = test_state();
        state.set_squad(TEAM, [p1, p2]);
        state.assign(TEAM, PeriodId::FIRST_HALF, SlotId::position("GK"), p1).unwrap();
        state.assign(TEAM, PeriodId::SECOND_HALF, SlotId::position("GK"), p1).unwrap();
        state.assign(TEAM, PeriodId::FIRST_HALF, SlotId::position("DC"), p2).unwrap();

        state.set_squad(TEAM, [p2]);

        assert!(state.get(TEAM, PeriodId::FIRST_HALF).unwrap().get(&SlotId::position("GK")).is_none());
        assert!(state.get(TEAM, PeriodId::SECOND_HALF).unwrap().is_empty());
        // Unrelated assignment untouched
        assert_eq!(
            state.get(TEAM, PeriodId::FIRST_HALF).unwrap()[&SlotId::position("DC")].player_id,
            p2
        );
    }

    #[test]
    fn squad_membership_is_checked_at_assignment_time() {
        let p1 = PlayerId::new();
        let mut state = test_state();
        state.set_squad(TEAM, [p1]);
        state.assign(TEAM, PeriodId::FIRST_HALF, SlotId::position("GK"), p1).unwrap();
        state.set_squad(TEAM, []);
        // Re-assignment after removal must now be rejected
        let err = state
            .assign(TEAM, PeriodId::FIRST_HALF, SlotId::position("GK"), p1)
            .unwrap_err();
        assert_eq!(err, crate::error::AssignError::NotInSquad { player: p1 });
    }

    #[test]
    fn captain_must_be_in_squad() {
        let (p1, outsider) = (PlayerId::new(), PlayerId::new());
        let mut state = test_state();
        state.set_squad(TEAM, [p1]);
        assert_eq!(
            state.set_captain(TEAM, Some(outsider)),
            Err(SquadError::CaptainNotInSquad { player: outsider })
        );
        state.set_captain(TEAM, Some(p1)).unwrap();
        assert_eq!(state.team(TEAM).captain, Some(p1));
    }

    #[test]
    fn removing_the_captain_clears_the_captaincy() {
        let p1 = PlayerId::new();
        let mut state = test_state();
        state.set_squad(TEAM, [p1]);
        state.set_captain(TEAM, Some(p1)).unwrap();
        state.set_squad(TEAM, []);
        assert_eq!(state.team(TEAM).captain, None);
    }

    #[test]
    fn teams_containing_reports_every_membership() {
        let p1 = PlayerId::new();
        let layout: Vec<PositionCode> = ["GK"].iter().map(PositionCode::new).collect();
        let mut state = SelectionState::new(vec![
            TeamSelection::new(TeamId::new(0), "Team 1", TeamCategory::default(), layout.clone(), 25),
            TeamSelection::new(TeamId::new(1), "Team 2", TeamCategory::default(), layout.clone(), 25),
            TeamSelection::new(TeamId::new(2), "Team 3", TeamCategory::default(), layout, 25),
        ]);
        state.set_squad(TeamId::new(0), [p1]);
        state.set_squad(TeamId::new(2), [p1]);
        let teams = state.teams_containing(p1);
        assert_eq!(teams.into_iter().collect::<Vec<_>>(), vec![TeamId::new(0), TeamId::new(2)]);
    }

    #[test]
    fn sentinel_is_never_admitted_to_a_squad() {
        let mut state = test_state();
        state.set_squad(TEAM, [PlayerId::UNASSIGNED]);
        assert!(state.team(TEAM).squad.is_empty());
    }
}
