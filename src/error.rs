use thiserror::Error;

use crate::schedule::types::{PreferenceType, SlotId, TeamId};

/// Errors raised while building a league or loading one from disk.
///
/// Scheduling itself never fails: a pair that cannot be placed is recorded
/// as unmatched, not reported here.
#[derive(Error, Debug)]
pub enum LeagueError {
    #[error("team '{team}' references slot {slot}, which is outside the slot universe")]
    UnknownSlot { team: String, slot: SlotId },

    #[error("team '{team}' lists slot {slot} as both {first:?} and {second:?}")]
    ConflictingPreference {
        team: String,
        slot: SlotId,
        first: PreferenceType,
        second: PreferenceType,
    },

    #[error("team id {0} is used by more than one team")]
    DuplicateTeamId(TeamId),

    #[error("invalid team order: {0}")]
    InvalidTeamOrder(String),

    #[error("team '{team}' was built for {found} slots but the league has {expected}")]
    SlotUniverseMismatch { team: String, expected: u32, found: u32 },

    #[error("slot {0} is already taken")]
    SlotOccupied(SlotId),

    #[error("slot {0} is not part of this league")]
    SlotNotInLeague(SlotId),

    #[error("team {0} is not part of this league")]
    UnknownTeam(TeamId),

    #[error("'{0}' cannot be matched against itself")]
    SelfMatchup(String),

    #[error("'{0}' and '{1}' have already been decided")]
    PairAlreadyDecided(String, String),

    #[error("row {row}: {message}")]
    InvalidRow { row: usize, message: String },

    #[error("row {row}: unknown slot '{label}'")]
    UnknownSlotLabel { row: usize, label: String },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, LeagueError>;
