//! Rejection reasons for every action.

use crate::env::OracleError;
use crate::error::{ErrorContext, ErrorSeverity, GameError};
use crate::minor_works::MinorWorkError;
use crate::state::{GameState, JobId, PlayerId, Stage, StateError, WorkId};
use crate::zeitgeist::ZeitgeistKind;

/// Why an action was refused. A refused action never changes state.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum ActionError {
    #[error("not legal while in the {actual} stage")]
    WrongStage { actual: Stage, context: ErrorContext },

    #[error("{action} already used this turn")]
    OncePerTurn {
        action: &'static str,
        context: ErrorContext,
    },

    #[error("needs {needed} time but only {available} left")]
    InsufficientTime {
        needed: u32,
        available: u32,
        context: ErrorContext,
    },

    #[error("cannot afford the cost")]
    CannotAfford { context: ErrorContext },

    #[error("{deck} deck and discard are both empty")]
    DeckEmpty { deck: &'static str },

    #[error("no {deck} card is available to this art path")]
    NoEligibleCard { deck: &'static str },

    #[error("home roll sequence already completed")]
    HomeSequenceComplete,

    #[error("a {kind} card is already pending")]
    CardPending { kind: &'static str },

    #[error("no {kind} card is pending")]
    NothingPending { kind: &'static str },

    #[error("already holding job {0}")]
    AlreadyEmployed(JobId),

    #[error("not holding a job")]
    Unemployed,

    #[error("job {0} is not in the job deck")]
    JobUnavailable(JobId),

    #[error("job {0} is not in the catalog")]
    UnknownJob(JobId),

    #[error("was fired from job {0}")]
    FiredFromJob(JobId),

    #[error("minor work {0} is not available to this art path")]
    UnknownMinorWork(WorkId),

    #[error(transparent)]
    MinorWork(#[from] MinorWorkError),

    #[error("portfolio already compiled")]
    PortfolioAlreadyBuilt,

    #[error("portfolio needs {need} completed minor works, have {have}")]
    NotEnoughMinorWorks { have: u32, need: u32 },

    #[error("no portfolio compiled")]
    PortfolioMissing,

    #[error("scandal {scandal} blocks masterwork progress")]
    ScandalBlocksMasterwork { scandal: u32 },

    #[error("no {stat} left for this turn's focus")]
    FocusDepleted { stat: crate::state::Stat },

    #[error("no focus stat rolled this turn")]
    NoFocusStat,

    #[error("maintenance check already done this turn")]
    MaintenanceAlreadyDone,

    #[error("lay low is only allowed as the first action of a pro turn with scandal")]
    CannotLayLow,

    #[error("hit piece already used this game")]
    HitPieceUsed,

    #[error("{0} is not a valid hit piece target")]
    InvalidHitTarget(PlayerId),

    #[error("no scandal to buy out")]
    NoScandal,

    #[error("zeitgeist {0} is not active")]
    ZeitgeistInactive(ZeitgeistKind),

    #[error("cannot convert inspiration into {0}")]
    InvalidConversion(crate::state::Stat),

    #[error(transparent)]
    Oracle(#[from] OracleError),

    #[error(transparent)]
    Invariant(#[from] StateError),
}

impl ActionError {
    pub(crate) fn wrong_stage(state: &GameState) -> Self {
        Self::WrongStage {
            actual: state.active_player().stage,
            context: context_of(state),
        }
    }

    pub(crate) fn once_per_turn(state: &GameState, action: &'static str) -> Self {
        Self::OncePerTurn {
            action,
            context: context_of(state),
        }
    }

    pub(crate) fn insufficient_time(state: &GameState, needed: u32) -> Self {
        Self::InsufficientTime {
            needed,
            available: state.active_player().time_this_turn,
            context: context_of(state),
        }
    }

    pub(crate) fn cannot_afford(state: &GameState) -> Self {
        Self::CannotAfford {
            context: context_of(state),
        }
    }
}

fn context_of(state: &GameState) -> ErrorContext {
    ErrorContext::new(state.turn).with_player(state.active_player().id)
}

impl GameError for ActionError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::InsufficientTime { .. }
            | Self::CannotAfford { .. }
            | Self::NothingPending { .. }
            | Self::CardPending { .. }
            | Self::NotEnoughMinorWorks { .. }
            | Self::ScandalBlocksMasterwork { .. }
            | Self::FocusDepleted { .. }
            | Self::NoScandal => ErrorSeverity::Recoverable,
            Self::MinorWork(error) => error.severity(),
            Self::Oracle(error) => error.severity(),
            Self::Invariant(error) => error.severity(),
            _ => ErrorSeverity::Validation,
        }
    }

    fn context(&self) -> Option<&ErrorContext> {
        match self {
            Self::WrongStage { context, .. }
            | Self::OncePerTurn { context, .. }
            | Self::InsufficientTime { context, .. }
            | Self::CannotAfford { context } => Some(context),
            _ => None,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::WrongStage { .. } => "ACTION_WRONG_STAGE",
            Self::OncePerTurn { .. } => "ACTION_ONCE_PER_TURN",
            Self::InsufficientTime { .. } => "ACTION_INSUFFICIENT_TIME",
            Self::CannotAfford { .. } => "ACTION_CANNOT_AFFORD",
            Self::DeckEmpty { .. } => "ACTION_DECK_EMPTY",
            Self::NoEligibleCard { .. } => "ACTION_NO_ELIGIBLE_CARD",
            Self::HomeSequenceComplete => "ACTION_HOME_SEQUENCE_COMPLETE",
            Self::CardPending { .. } => "ACTION_CARD_PENDING",
            Self::NothingPending { .. } => "ACTION_NOTHING_PENDING",
            Self::AlreadyEmployed(_) => "ACTION_ALREADY_EMPLOYED",
            Self::Unemployed => "ACTION_UNEMPLOYED",
            Self::JobUnavailable(_) => "ACTION_JOB_UNAVAILABLE",
            Self::UnknownJob(_) => "ACTION_UNKNOWN_JOB",
            Self::FiredFromJob(_) => "ACTION_FIRED_FROM_JOB",
            Self::UnknownMinorWork(_) => "ACTION_UNKNOWN_MINOR_WORK",
            Self::MinorWork(error) => error.error_code(),
            Self::PortfolioAlreadyBuilt => "ACTION_PORTFOLIO_ALREADY_BUILT",
            Self::NotEnoughMinorWorks { .. } => "ACTION_NOT_ENOUGH_MINOR_WORKS",
            Self::PortfolioMissing => "ACTION_PORTFOLIO_MISSING",
            Self::ScandalBlocksMasterwork { .. } => "ACTION_SCANDAL_BLOCKS_MASTERWORK",
            Self::FocusDepleted { .. } => "ACTION_FOCUS_DEPLETED",
            Self::NoFocusStat => "ACTION_NO_FOCUS_STAT",
            Self::MaintenanceAlreadyDone => "ACTION_MAINTENANCE_ALREADY_DONE",
            Self::CannotLayLow => "ACTION_CANNOT_LAY_LOW",
            Self::HitPieceUsed => "ACTION_HIT_PIECE_USED",
            Self::InvalidHitTarget(_) => "ACTION_INVALID_HIT_TARGET",
            Self::NoScandal => "ACTION_NO_SCANDAL",
            Self::ZeitgeistInactive(_) => "ACTION_ZEITGEIST_INACTIVE",
            Self::InvalidConversion(_) => "ACTION_INVALID_CONVERSION",
            Self::Oracle(error) => error.error_code(),
            Self::Invariant(error) => error.error_code(),
        }
    }
}
