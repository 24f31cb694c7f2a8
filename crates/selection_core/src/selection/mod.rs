//! Selection state and the operations over it.
//!
//! `SelectionState` is the canonical nested map of
//! team → period → slot → assignment. It is mutated only through the typed
//! operations in this module tree (store, squad, periods, dragdrop); readers
//! only ever receive cloned snapshots.

pub mod dragdrop;
pub mod periods;
pub mod squad;
pub mod store;
pub mod substitution;

use serde::{Deserialize, Serialize};

use crate::models::{TeamId, TeamSelection};

pub use dragdrop::{DragDropCoordinator, DropOutcome};

/// Root of the in-memory model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectionState {
    teams: Vec<TeamSelection>,
}

impl SelectionState {
    pub fn new(teams: Vec<TeamSelection>) -> Self {
        SelectionState { teams }
    }

    pub fn teams(&self) -> &[TeamSelection] {
        &self.teams
    }

    pub fn team_count(&self) -> usize {
        self.teams.len()
    }

    /// Look up a team.
    ///
    /// # Panics
    /// Panics on an out-of-range id. Team ids are fixed at fixture seeding,
    /// so an unknown id is caller misuse, not recoverable user input.
    pub fn team(&self, id: TeamId) -> &TeamSelection {
        self.teams.get(id.index()).unwrap_or_else(|| {
            panic!("unknown team id {id}: selection state has {} teams", self.teams.len())
        })
    }

    pub(crate) fn team_mut(&mut self, id: TeamId) -> &mut TeamSelection {
        let count = self.teams.len();
        self.teams
            .get_mut(id.index())
            .unwrap_or_else(|| panic!("unknown team id {id}: selection state has {count} teams"))
    }

    pub(crate) fn push_team(&mut self, team: TeamSelection) {
        self.teams.push(team);
    }
}
