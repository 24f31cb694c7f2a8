//! Engine facade.
//!
//! `SelectionEngine` is what the UI layer holds: the selection state, the
//! drag interaction state, and the fixture the session was seeded from, with
//! every mutation entry point and the explicit save. All operations are
//! synchronous; the only asynchronous boundary is inside the storage
//! collaborator, and the save snapshot is taken before that call begins, so
//! edits made during an in-flight save land in the next one.

use std::collections::BTreeMap;
use tracing::{error, info};

use crate::error::{AssignError, PeriodError, SquadError};
use crate::fixture::{FixtureDefinition, RosterProvider};
use crate::models::{
    Assignment, Half, PeriodId, Player, PlayerId, SlotId, TeamId,
};
use crate::persist::{self, SaveError, SelectionRecord, StorageClient};
use crate::selection::substitution;
use crate::selection::{DragDropCoordinator, DropOutcome, SelectionState};

#[derive(Debug, Clone, PartialEq)]
pub struct SelectionEngine {
    fixture: FixtureDefinition,
    state: SelectionState,
    dragdrop: DragDropCoordinator,
}

impl Default for SelectionEngine {
    fn default() -> Self {
        Self::new_from_fixture(FixtureDefinition::default())
    }
}

impl SelectionEngine {
    /// Seed a fresh editor session from a fixture definition.
    ///
    /// Seeding is reconstruction of an empty record set, so a brand-new
    /// session and a reload are the same code path.
    pub fn new_from_fixture(fixture: FixtureDefinition) -> Self {
        Self::from_records(fixture, &[])
    }

    /// Rebuild a session from previously persisted records.
    pub fn from_records(fixture: FixtureDefinition, records: &[SelectionRecord]) -> Self {
        let state = persist::reconstruct(records, &fixture);
        SelectionEngine { fixture, state, dragdrop: DragDropCoordinator::new() }
    }

    pub fn fixture(&self) -> &FixtureDefinition {
        &self.fixture
    }

    /// Current state, borrowed for rendering.
    pub fn state(&self) -> &SelectionState {
        &self.state
    }

    /// Cloned snapshot, detached from later mutations.
    pub fn snapshot(&self) -> SelectionState {
        self.state.clone()
    }

    // ========================
    // Squad
    // ========================

    pub fn set_squad(&mut self, team: TeamId, players: impl IntoIterator<Item = PlayerId>) {
        self.state.set_squad(team, players);
    }

    /// Replace a squad, admitting only players the roster collaborator
    /// offers for the team's category.
    pub fn set_squad_from_roster(
        &mut self,
        team: TeamId,
        players: impl IntoIterator<Item = PlayerId>,
        roster: &dyn RosterProvider,
    ) -> Result<(), SquadError> {
        let eligible: Vec<PlayerId> = roster
            .list_players(&self.state.team(team).category)
            .into_iter()
            .map(|p| p.id)
            .collect();
        let players: Vec<PlayerId> = players.into_iter().collect();
        for player in &players {
            if !eligible.contains(player) {
                return Err(SquadError::NotInRoster { player: *player });
            }
        }
        self.state.set_squad(team, players);
        Ok(())
    }

    pub fn set_captain(
        &mut self,
        team: TeamId,
        captain: Option<PlayerId>,
    ) -> Result<(), SquadError> {
        self.state.set_captain(team, captain)
    }

    /// Players the roster collaborator offers for a team's category.
    pub fn roster_players(&self, team: TeamId, roster: &dyn RosterProvider) -> Vec<Player> {
        roster.list_players(&self.state.team(team).category)
    }

    /// Cross-team membership, for "also selected elsewhere" badges.
    pub fn teams_containing(&self, player: PlayerId) -> std::collections::BTreeSet<TeamId> {
        self.state.teams_containing(player)
    }

    // ========================
    // Assignments
    // ========================

    pub fn assign(
        &mut self,
        team: TeamId,
        period: PeriodId,
        slot: SlotId,
        player: PlayerId,
    ) -> Result<Option<Assignment>, AssignError> {
        self.state.assign(team, period, slot, player)
    }

    pub fn remove(&mut self, team: TeamId, period: PeriodId, slot: SlotId) -> Option<Assignment> {
        self.state.remove(team, period, slot)
    }

    pub fn get(&self, team: TeamId, period: PeriodId) -> Option<BTreeMap<SlotId, Assignment>> {
        self.state.get(team, period)
    }

    pub fn add_substitute_slot(
        &mut self,
        team: TeamId,
        period: PeriodId,
    ) -> Result<SlotId, AssignError> {
        self.state.add_substitute_slot(team, period)
    }

    // ========================
    // Drag and drop
    // ========================

    pub fn pick_player(&mut self, player: PlayerId) -> Option<PlayerId> {
        self.dragdrop.pick(player)
    }

    pub fn picked_player(&self) -> Option<PlayerId> {
        self.dragdrop.picked()
    }

    pub fn click_slot(
        &mut self,
        team: TeamId,
        period: PeriodId,
        target: SlotId,
    ) -> Result<Option<DropOutcome>, AssignError> {
        self.dragdrop.click_slot(&mut self.state, team, period, target)
    }

    pub fn handle_drop(
        &mut self,
        team: TeamId,
        period: PeriodId,
        target: SlotId,
        player: PlayerId,
        source: Option<SlotId>,
    ) -> Result<DropOutcome, AssignError> {
        self.dragdrop.handle_drop(&mut self.state, team, period, target, player, source)
    }

    // ========================
    // Periods
    // ========================

    pub fn add_period(
        &mut self,
        team: TeamId,
        half: Half,
        duration_minutes: u32,
    ) -> Result<PeriodId, PeriodError> {
        self.state.add_period(team, half, duration_minutes)
    }

    pub fn delete_period(&mut self, team: TeamId, period: PeriodId) -> Result<(), PeriodError> {
        self.state.delete_period(team, period)
    }

    pub fn update_duration(
        &mut self,
        team: TeamId,
        period: PeriodId,
        minutes: u32,
    ) -> Result<(), PeriodError> {
        self.state.update_duration(team, period, minutes)
    }

    /// Per-position substitution flags for a period, diffed against the
    /// period played immediately before it. The first period has none.
    pub fn substitution_flags(&self, team: TeamId, period: PeriodId) -> BTreeMap<String, bool> {
        let team_state = self.state.team(team);
        let Some(current) = team_state.period(period) else {
            return BTreeMap::new();
        };
        match team_state.preceding_period(period) {
            Some(previous) => {
                substitution::substitution_flags(&current.assignments, &previous.assignments)
            }
            None => current
                .assignments
                .values()
                .map(|a| (a.position_label.clone(), false))
                .collect(),
        }
    }

    // ========================
    // Save
    // ========================

    /// Flatten the current state and hand it to the storage collaborator.
    ///
    /// The snapshot is taken synchronously before the call, so concurrent
    /// edits are excluded from this save and picked up by the next one.
    /// Returns the number of records written.
    pub fn save(&self, storage: &dyn StorageClient) -> Result<usize, SaveError> {
        let records = persist::flatten(&self.state);
        info!(fixture = %self.fixture.id, records = records.len(), "saving selections");
        match storage.replace_selections(self.fixture.id, &records) {
            Ok(()) => Ok(records.len()),
            Err(crate::persist::ReplaceError::DeleteFailed(cause)) => {
                error!(fixture = %self.fixture.id, %cause, "save rejected in delete phase");
                Err(SaveError::ReplaceRejected(cause))
            }
            Err(crate::persist::ReplaceError::InsertFailed(cause)) => {
                error!(fixture = %self.fixture.id, %cause, "partial replace: insert phase failed");
                Err(SaveError::PartialReplace(cause))
            }
        }
    }
}
