//! Fixture definition and roster collaborator interfaces.
//!
//! The fixture definition seeds the engine: how many teams take part, each
//! team's category, and the match format that determines the default slot
//! layout. Player reference data is consumed read-only from the roster
//! collaborator.

pub mod formats;

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::models::{Player, TeamCategory};

/// Identifier of the fixture the selections belong to.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct FixtureId(Uuid);

impl FixtureId {
    pub fn new() -> Self {
        FixtureId(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl From<Uuid> for FixtureId {
    fn from(id: Uuid) -> Self {
        FixtureId(id)
    }
}

impl fmt::Display for FixtureId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// External fixture configuration the engine is seeded from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FixtureDefinition {
    pub id: FixtureId,
    pub number_of_teams: u32,
    /// Category per team; teams beyond the list reuse the last entry.
    pub categories: Vec<TeamCategory>,
    /// Format key, e.g. "7-a-side". Determines layout and default duration.
    pub format: String,
}

impl FixtureDefinition {
    pub fn new(id: FixtureId, number_of_teams: u32, format: impl Into<String>) -> Self {
        FixtureDefinition { id, number_of_teams, categories: Vec::new(), format: format.into() }
    }

    pub fn with_categories(mut self, categories: Vec<TeamCategory>) -> Self {
        self.categories = categories;
        self
    }

    /// Category for a 0-indexed team.
    pub fn category_for(&self, team_index: usize) -> TeamCategory {
        self.categories
            .get(team_index)
            .or_else(|| self.categories.last())
            .cloned()
            .unwrap_or_default()
    }
}

impl Default for FixtureDefinition {
    fn default() -> Self {
        FixtureDefinition::new(FixtureId::default(), 1, "7-a-side")
    }
}

/// Read-only roster collaborator.
pub trait RosterProvider {
    /// Players eligible for a team category.
    fn list_players(&self, category: &TeamCategory) -> Vec<Player>;
}
