//! Typed validation rejections.
//!
//! Every error here is recoverable at the call site: the offending operation
//! returns it without mutating any state, and the caller decides how to
//! surface the message. Only caller misuse (an out-of-range team id) is
//! treated as fatal and panics with a diagnostic.

use std::fmt;

use crate::models::{PeriodId, PlayerId, MAX_DURATION_MINUTES, MIN_DURATION_MINUTES};

/// Rejection from an assignment mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssignError {
    /// The player is not a member of the team's squad.
    NotInSquad { player: PlayerId },
    /// The slot is not structurally valid for the team's current period set.
    InvalidSlot { label: String },
    /// The period does not exist (it may have been deleted).
    UnknownPeriod { period: PeriodId },
}

impl fmt::Display for AssignError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            AssignError::NotInSquad { player } => {
                write!(f, "player {player} is not in the squad")
            }
            AssignError::InvalidSlot { label } => {
                write!(f, "slot {label:?} is not valid for this team")
            }
            AssignError::UnknownPeriod { period } => {
                write!(f, "period {period} does not exist")
            }
        }
    }
}

impl std::error::Error for AssignError {}

/// Rejection from a period mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PeriodError {
    /// Duration outside the allowed range; rejected, never clamped.
    DurationOutOfRange { minutes: u32 },
    /// The seeded half periods can never be deleted.
    ReservedPeriod { period: PeriodId },
    /// The period does not exist.
    UnknownPeriod { period: PeriodId },
}

impl fmt::Display for PeriodError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            PeriodError::DurationOutOfRange { minutes } => write!(
                f,
                "duration must be between {MIN_DURATION_MINUTES} and {MAX_DURATION_MINUTES} minutes, got {minutes}"
            ),
            PeriodError::ReservedPeriod { period } => {
                write!(f, "{} cannot be deleted", period.display_name())
            }
            PeriodError::UnknownPeriod { period } => {
                write!(f, "period {period} does not exist")
            }
        }
    }
}

impl std::error::Error for PeriodError {}

/// Rejection from a squad mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SquadError {
    /// The captain must be a current squad member.
    CaptainNotInSquad { player: PlayerId },
    /// The player is not offered by the roster collaborator for this
    /// team's category.
    NotInRoster { player: PlayerId },
}

impl fmt::Display for SquadError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SquadError::CaptainNotInSquad { player } => {
                write!(f, "captain {player} is not in the squad")
            }
            SquadError::NotInRoster { player } => {
                write!(f, "player {player} is not in the roster for this category")
            }
        }
    }
}

impl std::error::Error for SquadError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duration_message_is_actionable() {
        let err = PeriodError::DurationOutOfRange { minutes: 91 };
        assert_eq!(err.to_string(), "duration must be between 1 and 90 minutes, got 91");
    }

    #[test]
    fn reserved_period_message_names_the_period() {
        let err = PeriodError::ReservedPeriod { period: PeriodId::FIRST_HALF };
        assert_eq!(err.to_string(), "First Half cannot be deleted");
    }
}
