//! Period Manager.
//!
//! CRUD over a team's timed periods. A newly added period starts from a
//! carry-forward clone of the period played immediately before it, so the
//! editor continues from the previous lineup rather than a blank pitch.

use tracing::debug;

use crate::error::PeriodError;
use crate::models::{Half, Period, PeriodId, TeamId};

use super::SelectionState;

impl SelectionState {
    /// Add a period to the given half and return its id.
    ///
    /// The new period clones the assignments of its predecessor: the last
    /// period of the same half, or the last period of the previous half when
    /// this is the first added to its half. Performance tags are carried and
    /// substitution flags keep whatever value they had; only a later diff
    /// against the preceding period can change their interpretation.
    pub fn add_period(
        &mut self,
        team: TeamId,
        half: Half,
        duration_minutes: u32,
    ) -> Result<PeriodId, PeriodError> {
        if !Period::duration_in_range(duration_minutes) {
            return Err(PeriodError::DurationOutOfRange { minutes: duration_minutes });
        }

        let team_state = self.team_mut(team);
        let id = PeriodId::new(team_state.next_period_id);
        team_state.next_period_id += 1;

        let order_within_half =
            team_state.periods.values().filter(|p| p.half == half).count() as u32;

        let predecessor = team_state
            .periods
            .values()
            .filter(|p| p.half == half)
            .max_by_key(|p| p.order_within_half)
            .or_else(|| {
                half.previous().and_then(|prev| {
                    team_state
                        .periods
                        .values()
                        .filter(|p| p.half == prev)
                        .max_by_key(|p| p.order_within_half)
                })
            });

        let mut period = Period::new(id, half, order_within_half, duration_minutes);
        if let Some(source) = predecessor {
            period.assignments = source.assignments.clone();
            period.next_sub_index = source.next_sub_index;
        }

        team_state.periods.insert(id, period);
        debug!(team = %team, period = %id, half = half.index(), "added period");
        Ok(id)
    }

    /// Delete a period and its assignment map.
    ///
    /// The two seeded half periods are permanently reserved and refuse
    /// deletion without mutating anything.
    pub fn delete_period(&mut self, team: TeamId, period: PeriodId) -> Result<(), PeriodError> {
        if period.is_reserved() {
            return Err(PeriodError::ReservedPeriod { period });
        }
        let team_state = self.team_mut(team);
        if team_state.periods.remove(&period).is_none() {
            return Err(PeriodError::UnknownPeriod { period });
        }
        debug!(team = %team, period = %period, "deleted period");
        Ok(())
    }

    /// Change a period's duration. Out-of-range input is rejected with an
    /// actionable message, never clamped.
    pub fn update_duration(
        &mut self,
        team: TeamId,
        period: PeriodId,
        minutes: u32,
    ) -> Result<(), PeriodError> {
        if !Period::duration_in_range(minutes) {
            return Err(PeriodError::DurationOutOfRange { minutes });
        }
        let period_state = self
            .team_mut(team)
            .period_mut(period)
            .ok_or(PeriodError::UnknownPeriod { period })?;
        period_state.duration_minutes = minutes;
        Ok(())
    }
}
