//! Common error infrastructure for starving-core.
//!
//! Domain errors live next to the code that raises them (`ActionError` in
//! [`crate::action`], `OracleError` in [`crate::env`]). This module holds the
//! shared classification used by all of them.

use crate::state::PlayerId;

/// Severity level of an error, used for categorization and recovery strategies.
///
/// - **Recoverable**: the action is legal later in the turn or game (not enough Time yet)
/// - **Validation**: the action is illegal in the current stage or was already used
/// - **Internal**: a state inconsistency that indicates a bug
/// - **Fatal**: the engine cannot proceed (missing oracle)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    Recoverable,
    Validation,
    Internal,
    Fatal,
}

impl ErrorSeverity {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
            Self::Internal => "internal",
            Self::Fatal => "fatal",
        }
    }

    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }

    /// Returns true if this error indicates an internal bug.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal | Self::Fatal)
    }
}

/// Contextual information attached to errors for debugging and diagnostics.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ErrorContext {
    /// Player whose action was rejected.
    pub player: Option<PlayerId>,

    /// Round counter at the time of the error.
    pub turn: u32,

    /// Optional static message providing additional context.
    pub message: Option<&'static str>,
}

impl ErrorContext {
    #[must_use]
    pub const fn new(turn: u32) -> Self {
        Self {
            player: None,
            turn,
            message: None,
        }
    }

    #[must_use]
    pub const fn with_player(mut self, player: PlayerId) -> Self {
        self.player = Some(player);
        self
    }

    #[must_use]
    pub const fn with_message(mut self, message: &'static str) -> Self {
        self.message = Some(message);
        self
    }
}

impl Default for ErrorContext {
    fn default() -> Self {
        Self::new(0)
    }
}

/// Common trait for all starving-core errors.
///
/// Implementors derive `thiserror::Error` for Display and classify each
/// variant by recoverability, not by impact.
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    fn severity(&self) -> ErrorSeverity;

    fn context(&self) -> Option<&ErrorContext> {
        None
    }

    /// Stable identifier for this error variant, used in logs and tests.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_helpers_classify_levels() {
        assert!(ErrorSeverity::Recoverable.is_recoverable());
        assert!(!ErrorSeverity::Validation.is_recoverable());
        assert!(ErrorSeverity::Internal.is_internal());
        assert!(ErrorSeverity::Fatal.is_internal());
        assert_eq!(ErrorSeverity::Validation.as_str(), "validation");
    }

    #[test]
    fn context_builder_attaches_fields() {
        let context = ErrorContext::new(7)
            .with_player(PlayerId(2))
            .with_message("no time left");

        assert_eq!(context.turn, 7);
        assert_eq!(context.player, Some(PlayerId(2)));
        assert_eq!(context.message, Some("no time left"));
    }
}
