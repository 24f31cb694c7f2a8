//! Persistence Format Adapter.
//!
//! Bidirectional mapping between the nested in-memory model and the flat
//! record list. Flatten emits one record per occupied slot; reconstruct
//! rebuilds the nested state from a record batch. The mapping is lossy at
//! the edges the flat shape cannot express: benched squad members, a captain
//! with no assignment, and the half placement of user-added periods.

use std::collections::BTreeMap;
use tracing::warn;

use crate::fixture::{formats, FixtureDefinition};
use crate::models::{
    Assignment, Half, PerformanceCategory, Period, PeriodId, PlayerId, SlotId, TeamId,
    TeamSelection,
};
use crate::selection::SelectionState;

use super::record::SelectionRecord;

/// Flatten the state into persistence records.
///
/// Sparse by construction: empty slots produce nothing. The captain flag
/// rides on every record of the captain's assignments. Team numbers are
/// 1-indexed here and nowhere else.
pub fn flatten(state: &SelectionState) -> Vec<SelectionRecord> {
    let mut records = Vec::new();
    for team in state.teams() {
        let team_number = team.id.index() as u32 + 1;
        for period in team.periods_in_order() {
            for assignment in period.assignments.values() {
                records.push(SelectionRecord {
                    team_number,
                    period_id: period.id.raw(),
                    slot_label: assignment.position_label.clone(),
                    player_id: *assignment.player_id.as_uuid(),
                    performance_category: assignment.performance_category.as_str().to_string(),
                    is_captain: team.captain == Some(assignment.player_id),
                    duration_minutes: period.duration_minutes,
                });
            }
        }
    }
    records
}

/// Rebuild the nested state from a record batch.
///
/// Policies for data the flat shape leaves ambiguous:
/// - assigned players are re-admitted to their team's squad, so assignment
///   always implies membership after a reload;
/// - the captain is the first `is_captain` record per team; later conflicting
///   records are discarded;
/// - user-added periods are placed in the second half in ascending id order
///   (the record shape carries no half field);
/// - a record that would put a player in two slots of one period is dropped;
/// - unparseable slot labels are dropped.
/// Dropped records are logged, never fatal: reload must always produce a
/// consistent state to edit from.
pub fn reconstruct(records: &[SelectionRecord], fixture: &FixtureDefinition) -> SelectionState {
    let layout = formats::layout_codes(&fixture.format);
    let default_duration = formats::default_half_duration(&fixture.format);

    let highest_team = records.iter().map(|r| r.team_number).max().unwrap_or(0);
    let team_count = fixture.number_of_teams.max(highest_team).max(1);

    let mut state = SelectionState::new(
        (0..team_count)
            .map(|i| {
                TeamSelection::new(
                    TeamId::new(i),
                    format!("Team {}", i + 1),
                    fixture.category_for(i as usize),
                    layout.clone(),
                    default_duration,
                )
            })
            .collect(),
    );

    // First pass: materialize every period mentioned by the records, so
    // user-added periods exist before assignments land in them.
    let mut period_ids: BTreeMap<u32, BTreeMap<u32, u32>> = BTreeMap::new();
    for record in records {
        if record.team_number == 0 {
            warn!(?record, "dropping record with 0 team number in 1-indexed format");
            continue;
        }
        period_ids
            .entry(record.team_number)
            .or_default()
            .insert(record.period_id, record.duration_minutes);
    }

    for (team_number, periods) in &period_ids {
        let team = state.team_mut(TeamId::new(team_number - 1));
        let mut extra_order = team
            .periods
            .values()
            .filter(|p| p.half == Half::Second)
            .count() as u32;
        for (&raw_id, &duration) in periods {
            let id = PeriodId::new(raw_id);
            if let Some(existing) = team.period_mut(id) {
                existing.duration_minutes = duration;
                continue;
            }
            let period = Period::new(id, Half::Second, extra_order, duration);
            extra_order += 1;
            team.periods.insert(id, period);
        }
        if let Some(&max_id) = periods.keys().max() {
            team.next_period_id = team.next_period_id.max(max_id + 1);
        }
    }

    // Second pass: assignments, squad re-admission, captaincy.
    for record in records {
        if record.team_number == 0 {
            continue;
        }
        let slot: SlotId = match record.slot_label.parse() {
            Ok(slot) => slot,
            Err(err) => {
                warn!(%err, "dropping record with unparseable slot label");
                continue;
            }
        };
        let player = PlayerId::from(record.player_id);
        if player.is_unassigned() {
            warn!(?record, "dropping record carrying the unassigned sentinel");
            continue;
        }

        let team = state.team_mut(TeamId::new(record.team_number - 1));
        team.squad.insert(player);
        if record.is_captain && team.captain.is_none() {
            team.captain = Some(player);
        }

        let period = team
            .period_mut(PeriodId::new(record.period_id))
            .expect("period materialized in first pass");
        if period.slot_of(player).is_some() {
            warn!(?record, "dropping record duplicating a player within a period");
            continue;
        }
        if let SlotId::Substitute(index) = slot {
            // Counter restored from the highest persisted index; the sparse
            // format carries no allocation history to be more precise with.
            period.next_sub_index = period.next_sub_index.max(index + 1);
        }
        let assignment = Assignment::new(player, slot.label(), slot.is_substitute())
            .with_category(PerformanceCategory::new(&record.performance_category));
        period.assignments.insert(slot, assignment);
    }

    state
}
