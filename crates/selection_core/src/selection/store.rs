//! Assignment Store.
//!
//! Atomic slot mutations over `SelectionState`. Enforces the
//! one-player-per-slot-per-period invariant with move semantics: assigning a
//! player who already holds a different slot in the same period clears the
//! old slot first, so a duplicate can never be observed. A rejected
//! operation leaves state unchanged.

use std::collections::BTreeMap;
use tracing::debug;

use crate::error::AssignError;
use crate::models::{Assignment, PeriodId, PlayerId, SlotId, TeamId};

use super::SelectionState;

impl SelectionState {
    /// Assign `player` to `slot` in the given period.
    ///
    /// Returns the prior occupant of the slot, if any, so the caller can
    /// decide between swap and displace. Assigning the unassigned sentinel
    /// clears the slot. Assigning the current occupant is a no-op.
    pub fn assign(
        &mut self,
        team: TeamId,
        period: PeriodId,
        slot: SlotId,
        player: PlayerId,
    ) -> Result<Option<Assignment>, AssignError> {
        let team_state = self.team(team);
        let period_state =
            team_state.period(period).ok_or(AssignError::UnknownPeriod { period })?;

        // Structural slot validity: position codes must belong to the team's
        // layout, bench indices must have been allocated in this period.
        let valid = match &slot {
            SlotId::Position(code) => team_state.layout_contains(code),
            SlotId::Substitute(index) => *index < period_state.substitute_count(),
        };
        if !valid {
            return Err(AssignError::InvalidSlot { label: slot.label() });
        }
        let in_squad = team_state.is_in_squad(player);

        if player.is_unassigned() {
            return Ok(self.remove(team, period, slot));
        }
        if !in_squad {
            return Err(AssignError::NotInSquad { player });
        }

        let period_state = self
            .team_mut(team)
            .period_mut(period)
            .expect("period checked above");

        let prior = period_state.assignments.get(&slot).cloned();
        if prior.as_ref().map(|a| a.player_id) == Some(player) {
            return Ok(None);
        }

        // Move semantics: clear the player's old slot before inserting, and
        // let the performance tag follow the player within the period.
        let mut category = None;
        if let Some(old_slot) = period_state.slot_of(player).cloned() {
            if let Some(old) = period_state.assignments.remove(&old_slot) {
                category = Some(old.performance_category);
            }
        }

        let mut assignment = Assignment::new(player, slot.label(), slot.is_substitute());
        if let Some(category) = category {
            assignment = assignment.with_category(category);
        }
        period_state.assignments.insert(slot.clone(), assignment);

        debug!(team = %team, period = %period, slot = %slot, player = %player, "assigned");
        Ok(prior)
    }

    /// Clear one slot. Idempotent; returns the removed assignment, if any.
    pub fn remove(&mut self, team: TeamId, period: PeriodId, slot: SlotId) -> Option<Assignment> {
        let removed =
            self.team_mut(team).period_mut(period).and_then(|p| p.assignments.remove(&slot));
        if removed.is_some() {
            debug!(team = %team, period = %period, slot = %slot, "cleared");
        }
        removed
    }

    /// Read-only snapshot of one period's assignment map.
    pub fn get(&self, team: TeamId, period: PeriodId) -> Option<BTreeMap<SlotId, Assignment>> {
        self.team(team).period(period).map(|p| p.assignments.clone())
    }

    /// Allocate the next bench slot for a period.
    ///
    /// Indices come from the period's monotonic counter and are never
    /// recycled, even after the slot is cleared or its period edited, so a
    /// re-render holding a stale slot id cannot alias new data.
    pub fn add_substitute_slot(
        &mut self,
        team: TeamId,
        period: PeriodId,
    ) -> Result<SlotId, AssignError> {
        let period_state = self
            .team_mut(team)
            .period_mut(period)
            .ok_or(AssignError::UnknownPeriod { period })?;
        let slot = SlotId::substitute(period_state.next_sub_index);
        period_state.next_sub_index += 1;
        Ok(slot)
    }
}
