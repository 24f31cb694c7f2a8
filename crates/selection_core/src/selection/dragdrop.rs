//! Drag/Drop Coordinator.
//!
//! Translates the two supported interaction modes (select-then-click and
//! native drag) into Assignment Store calls. Reconciliation policy: a drop
//! sourced from another slot swaps the two occupants; a drop sourced from the
//! unassigned pool displaces the occupant, who becomes unassigned. A
//! pool-sourced drop must never create a second unresolved occupant.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;

use crate::error::AssignError;
use crate::models::{Assignment, PeriodId, PlayerId, SlotId, TeamId};

use super::SelectionState;

/// Result of a settled drop: the full period map after all store calls, so
/// consumers never observe an intermediate inconsistent state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DropOutcome {
    /// Snapshot of the target period after the drop settled.
    pub period: BTreeMap<SlotId, Assignment>,
    /// Player displaced from the target slot, if any.
    pub displaced: Option<PlayerId>,
    /// True when the displaced player was moved into the drag's source slot.
    pub swapped: bool,
}

/// Interaction state for one editor session.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DragDropCoordinator {
    picked: Option<PlayerId>,
}

impl DragDropCoordinator {
    pub fn new() -> Self {
        Self::default()
    }

    /// The player currently picked for select-then-click, if any.
    pub fn picked(&self) -> Option<PlayerId> {
        self.picked
    }

    /// Pick a player for select-then-click. Picking the already-picked
    /// player again deselects (toggle). Returns the selection afterwards.
    pub fn pick(&mut self, player: PlayerId) -> Option<PlayerId> {
        if self.picked == Some(player) {
            self.picked = None;
        } else {
            self.picked = Some(player);
        }
        self.picked
    }

    pub fn clear_pick(&mut self) {
        self.picked = None;
    }

    /// Select-then-click: apply the picked player to a clicked slot.
    ///
    /// Clears the pick once consumed. Returns `Ok(None)` when nothing was
    /// picked. Picked players come from the unassigned pool view, so the
    /// drop carries no source slot and an occupant is displaced, not swapped.
    pub fn click_slot(
        &mut self,
        state: &mut SelectionState,
        team: TeamId,
        period: PeriodId,
        target: SlotId,
    ) -> Result<Option<DropOutcome>, AssignError> {
        let Some(player) = self.picked.take() else {
            return Ok(None);
        };
        self.handle_drop(state, team, period, target, player, None).map(Some)
    }

    /// Apply a drop of `player` onto `target`.
    ///
    /// `source` is the slot the drag originated from, or `None` when it came
    /// from the unassigned-players pool. All store mutations settle before
    /// the outcome snapshot is taken.
    pub fn handle_drop(
        &mut self,
        state: &mut SelectionState,
        team: TeamId,
        period: PeriodId,
        target: SlotId,
        player: PlayerId,
        source: Option<SlotId>,
    ) -> Result<DropOutcome, AssignError> {
        let current = state
            .get(team, period)
            .ok_or(AssignError::UnknownPeriod { period })?;

        // Dropping a player onto their own slot is a no-op.
        if current.get(&target).map(|a| a.player_id) == Some(player) {
            return Ok(DropOutcome { period: current, displaced: None, swapped: false });
        }

        let displaced = state.assign(team, period, target.clone(), player)?.map(|a| a.player_id);

        let mut swapped = false;
        if let (Some(displaced_player), Some(source_slot)) = (displaced, source) {
            // Swap: the drag originated from a slot, so the displaced
            // occupant takes it over. Cannot be rejected: the displaced
            // player is a squad member and the source slot was just vacated.
            state.assign(team, period, source_slot, displaced_player)?;
            swapped = true;
        }

        debug!(team = %team, period = %period, target = %target, player = %player,
            displaced = ?displaced, swapped, "drop settled");

        let period_map = state.get(team, period).ok_or(AssignError::UnknownPeriod { period })?;
        Ok(DropOutcome { period: period_map, displaced, swapped })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{PositionCode, TeamCategory, TeamSelection};

    const TEAM: TeamId = TeamId::new(0);

    fn test_state(squad: &[PlayerId]) -> SelectionState {
        let layout = ["GK", "DC", "MC", "ST"].iter().map(PositionCode::new).collect();
        let mut team =
            TeamSelection::new(TEAM, "Team 1", TeamCategory::default(), layout, 25);
        team.squad = squad.iter().copied().collect();
        SelectionState::new(vec![team])
    }

    #[test]
    fn slot_sourced_drop_swaps_the_occupants() {
        let (p1, p2) = (PlayerId::new(), PlayerId::new());
        let mut state = test_state(&[p1, p2]);
        let (a, b) = (SlotId::position("DC"), SlotId::position("MC"));
        state.assign(TEAM, PeriodId::FIRST_HALF, a.clone(), p1).unwrap();
        state.assign(TEAM, PeriodId::FIRST_HALF, b.clone(), p2).unwrap();

        let mut dragdrop = DragDropCoordinator::new();
        let outcome = dragdrop
            .handle_drop(&mut state, TEAM, PeriodId::FIRST_HALF, b.clone(), p1, Some(a.clone()))
            .unwrap();

        assert!(outcome.swapped);
        assert_eq!(outcome.displaced, Some(p2));
        assert_eq!(outcome.period[&a].player_id, p2, "slot A must hold P2, not go unassigned");
        assert_eq!(outcome.period[&b].player_id, p1);
    }

    #[test]
    fn pool_sourced_drop_displaces_the_occupant() {
        let (p2, p3) = (PlayerId::new(), PlayerId::new());
        let mut state = test_state(&[p2, p3]);
        let b = SlotId::position("MC");
        state.assign(TEAM, PeriodId::FIRST_HALF, b.clone(), p2).unwrap();

        let mut dragdrop = DragDropCoordinator::new();
        let outcome = dragdrop
            .handle_drop(&mut state, TEAM, PeriodId::FIRST_HALF, b.clone(), p3, None)
            .unwrap();

        assert!(!outcome.swapped);
        assert_eq!(outcome.displaced, Some(p2));
        assert_eq!(outcome.period[&b].player_id, p3);
        // P2 is unassigned, not parked anywhere else
        assert_eq!(outcome.period.values().filter(|a| a.player_id == p2).count(), 0);
    }

    #[test]
    fn dropping_onto_own_slot_is_a_noop() {
        let p1 = PlayerId::new();
        let mut state = test_state(&[p1]);
        let gk = SlotId::position("GK");
        state.assign(TEAM, PeriodId::FIRST_HALF, gk.clone(), p1).unwrap();
        let before = state.clone();

        let mut dragdrop = DragDropCoordinator::new();
        let outcome = dragdrop
            .handle_drop(&mut state, TEAM, PeriodId::FIRST_HALF, gk.clone(), p1, Some(gk))
            .unwrap();

        assert_eq!(state, before);
        assert_eq!(outcome.displaced, None);
        assert!(!outcome.swapped);
    }

    #[test]
    fn picking_the_same_player_twice_deselects() {
        let p1 = PlayerId::new();
        let mut dragdrop = DragDropCoordinator::new();
        assert_eq!(dragdrop.pick(p1), Some(p1));
        assert_eq!(dragdrop.pick(p1), None);
    }

    #[test]
    fn click_slot_consumes_the_pick_and_displaces() {
        let (p1, p2) = (PlayerId::new(), PlayerId::new());
        let mut state = test_state(&[p1, p2]);
        let gk = SlotId::position("GK");
        state.assign(TEAM, PeriodId::FIRST_HALF, gk.clone(), p2).unwrap();

        let mut dragdrop = DragDropCoordinator::new();
        dragdrop.pick(p1);
        let outcome =
            dragdrop.click_slot(&mut state, TEAM, PeriodId::FIRST_HALF, gk.clone()).unwrap().unwrap();

        assert_eq!(outcome.period[&gk].player_id, p1);
        assert_eq!(outcome.displaced, Some(p2));
        assert!(!outcome.swapped, "pool-sourced clicks never swap");
        assert_eq!(dragdrop.picked(), None);

        // Nothing picked: click is inert
        assert!(dragdrop
            .click_slot(&mut state, TEAM, PeriodId::FIRST_HALF, gk)
            .unwrap()
            .is_none());
    }

    #[test]
    fn drop_on_bench_slot_flags_a_substitution() {
        let p1 = PlayerId::new();
        let mut state = test_state(&[p1]);
        let bench = state.add_substitute_slot(TEAM, PeriodId::FIRST_HALF).unwrap();

        let mut dragdrop = DragDropCoordinator::new();
        let outcome = dragdrop
            .handle_drop(&mut state, TEAM, PeriodId::FIRST_HALF, bench.clone(), p1, None)
            .unwrap();
        assert!(outcome.period[&bench].is_substitution);
    }

    #[test]
    fn failed_drop_leaves_state_unchanged() {
        let p1 = PlayerId::new();
        let outsider = PlayerId::new();
        let mut state = test_state(&[p1]);
        state.assign(TEAM, PeriodId::FIRST_HALF, SlotId::position("GK"), p1).unwrap();
        let before = state.clone();

        let mut dragdrop = DragDropCoordinator::new();
        let err = dragdrop
            .handle_drop(&mut state, TEAM, PeriodId::FIRST_HALF, SlotId::position("GK"), outsider, None)
            .unwrap_err();
        assert_eq!(err, AssignError::NotInSquad { player: outsider });
        assert_eq!(state, before);
    }
}
