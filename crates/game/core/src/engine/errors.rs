//! Error types for action execution pipeline.

use crate::action::ActionError;
use crate::env::OracleError;
use crate::error::{ErrorContext, ErrorSeverity, GameError};
use crate::state::GameStatus;

/// Identifies which stage of the transition pipeline produced an error.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TransitionPhase {
    PreValidate,
    Apply,
    PostValidate,
}

impl TransitionPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransitionPhase::PreValidate => "pre_validate",
            TransitionPhase::Apply => "apply",
            TransitionPhase::PostValidate => "post_validate",
        }
    }
}

/// Associates a transition phase with the underlying error.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TransitionPhaseError<E> {
    pub phase: TransitionPhase,
    pub error: E,
}

impl<E> TransitionPhaseError<E> {
    pub fn new(phase: TransitionPhase, error: E) -> Self {
        Self { phase, error }
    }
}

impl<E: std::fmt::Display> std::fmt::Display for TransitionPhaseError<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} failed: {}", self.phase.as_str(), self.error)
    }
}

impl<E: std::fmt::Display + std::fmt::Debug> std::error::Error for TransitionPhaseError<E> {}

type Rejection = TransitionPhaseError<ActionError>;

/// Errors surfaced while executing an action through the game engine.
///
/// Any error means the state was left exactly as it was before the call.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum ExecuteError {
    #[error("turn action failed: {0}")]
    Turn(Rejection),

    #[error("home action failed: {0}")]
    Home(Rejection),

    #[error("dreamer action failed: {0}")]
    Dreamer(Rejection),

    #[error("job action failed: {0}")]
    Job(Rejection),

    #[error("amateur action failed: {0}")]
    Amateur(Rejection),

    #[error("pro action failed: {0}")]
    Pro(Rejection),

    #[error("pr action failed: {0}")]
    Pr(Rejection),

    #[error("downtime action failed: {0}")]
    Downtime(Rejection),

    #[error("zeitgeist action failed: {0}")]
    Zeitgeist(Rejection),

    #[error("game is over ({status})")]
    GameOver { status: GameStatus },

    #[error("post-execution hook failed: {0}")]
    Oracle(#[from] OracleError),
}

impl ExecuteError {
    /// The phase-tagged rejection, when an action handler refused.
    pub fn rejection(&self) -> Option<&TransitionPhaseError<ActionError>> {
        match self {
            Self::Turn(rejection)
            | Self::Home(rejection)
            | Self::Dreamer(rejection)
            | Self::Job(rejection)
            | Self::Amateur(rejection)
            | Self::Pro(rejection)
            | Self::Pr(rejection)
            | Self::Downtime(rejection)
            | Self::Zeitgeist(rejection) => Some(rejection),
            Self::GameOver { .. } | Self::Oracle(_) => None,
        }
    }

    pub fn action_error(&self) -> Option<&ActionError> {
        self.rejection().map(|rejection| &rejection.error)
    }
}

impl GameError for ExecuteError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::GameOver { .. } => ErrorSeverity::Validation,
            Self::Oracle(error) => error.severity(),
            _ => self
                .action_error()
                .map_or(ErrorSeverity::Internal, GameError::severity),
        }
    }

    fn context(&self) -> Option<&ErrorContext> {
        self.action_error().and_then(GameError::context)
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::GameOver { .. } => "EXECUTE_GAME_OVER",
            Self::Oracle(error) => error.error_code(),
            _ => self
                .action_error()
                .map_or("EXECUTE_UNKNOWN", GameError::error_code),
        }
    }
}
