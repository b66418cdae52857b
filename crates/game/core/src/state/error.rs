//! State construction and invariant errors.

use crate::error::{ErrorSeverity, GameError};
use crate::state::{JobId, PlayerId};

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StateError {
    #[error("a game needs at least one player")]
    NoPlayers,

    #[error("job {job} is held by {holders} players")]
    JobHeldTwice { job: JobId, holders: usize },

    #[error("job {job} is held by {holder} but still in the job deck")]
    JobHeldAndAvailable { job: JobId, holder: PlayerId },

    #[error("active player index {index} out of range for {players} players")]
    ActiveIndexOutOfRange { index: usize, players: usize },
}

impl GameError for StateError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::NoPlayers => ErrorSeverity::Validation,
            _ => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::NoPlayers => "STATE_NO_PLAYERS",
            Self::JobHeldTwice { .. } => "STATE_JOB_HELD_TWICE",
            Self::JobHeldAndAvailable { .. } => "STATE_JOB_HELD_AND_AVAILABLE",
            Self::ActiveIndexOutOfRange { .. } => "STATE_ACTIVE_INDEX_OUT_OF_RANGE",
        }
    }
}
