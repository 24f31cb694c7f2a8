//! # selection_core - Squad Selection and Formation Assignment Engine
//!
//! This library implements the squad/formation assignment engine of a
//! sports-club management application: assigning players to on-pitch
//! positions and bench slots across multiple timed periods per team,
//! detecting when a position change between periods constitutes a
//! substitution, and reconciling the nested in-memory model with the flat
//! persisted record format.
//!
//! ## Features
//! - One canonical assignment store with typed, non-throwing validation
//! - Swap/displace drag-and-drop reconciliation
//! - Carry-forward period duplication and substitution diffing
//! - Sparse flatten/reconstruct persistence with replace-style storage

pub mod engine;
pub mod error;
pub mod fixture;
pub mod models;
pub mod persist;
pub mod selection;
pub mod state;

// Re-export main API types
pub use engine::SelectionEngine;
pub use error::{AssignError, PeriodError, SquadError};
pub use fixture::{FixtureDefinition, FixtureId, RosterProvider};
pub use models::{
    Assignment, Half, PerformanceCategory, Period, PeriodId, Player, PlayerId, PositionCode,
    SlotId, TeamCategory, TeamId, TeamSelection,
};
pub use persist::{
    flatten, reconstruct, records_from_json, records_to_json, ReplaceError, SaveError,
    SelectionRecord, StorageClient,
};
pub use selection::substitution::{is_substitution, substitution_flags};
pub use selection::{DragDropCoordinator, DropOutcome, SelectionState};
pub use state::{get_engine, get_engine_mut, reset_engine, set_engine, SELECTION_ENGINE};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const SCHEMA_VERSION: u8 = 1;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_editor_session_flow() {
        let fixture = FixtureDefinition::new(FixtureId::new(), 1, "7-a-side");
        let mut engine = SelectionEngine::new_from_fixture(fixture);
        let team = TeamId::new(0);

        let keeper = PlayerId::new();
        let defender = PlayerId::new();
        let finisher = PlayerId::new();
        engine.set_squad(team, [keeper, defender, finisher]);
        engine.set_captain(team, Some(keeper)).unwrap();

        // First-half lineup via select-then-click
        engine.pick_player(keeper);
        engine.click_slot(team, PeriodId::FIRST_HALF, SlotId::position("GK")).unwrap();
        engine.pick_player(defender);
        engine.click_slot(team, PeriodId::FIRST_HALF, SlotId::position("DC")).unwrap();

        // Bench slot for the finisher
        let bench = engine.add_substitute_slot(team, PeriodId::FIRST_HALF).unwrap();
        engine.assign(team, PeriodId::FIRST_HALF, bench.clone(), finisher).unwrap();

        // Second half starts as an edit of the first: drag the finisher in
        // for the defender (pool-style drop, so the defender drops out).
        engine.assign(team, PeriodId::SECOND_HALF, SlotId::position("GK"), keeper).unwrap();
        engine.assign(team, PeriodId::SECOND_HALF, SlotId::position("DC"), defender).unwrap();
        let outcome = engine
            .handle_drop(team, PeriodId::SECOND_HALF, SlotId::position("DC"), finisher, None)
            .unwrap();
        assert_eq!(outcome.displaced, Some(defender));

        let flags = engine.substitution_flags(team, PeriodId::SECOND_HALF);
        assert_eq!(flags["DC"], true);
        assert_eq!(flags["GK"], false);

        // Persist, reload, and keep editing
        let records = flatten(engine.state());
        assert_eq!(records.len(), 5);
        let resumed = SelectionEngine::from_records(engine.fixture().clone(), &records);
        assert_eq!(resumed.state(), engine.state());
    }

    #[test]
    fn global_engine_round_trip() {
        let fixture = FixtureDefinition::new(FixtureId::new(), 3, "5-a-side");
        reset_engine(fixture.clone());
        {
            let engine = get_engine();
            assert_eq!(engine.state().team_count(), 3);
        }
        {
            let mut engine = get_engine_mut();
            let player = PlayerId::new();
            engine.set_squad(TeamId::new(2), [player]);
            assert_eq!(engine.teams_containing(player).len(), 1);
        }
        // Leave a clean default for other embedders
        set_engine(SelectionEngine::default());
    }
}
