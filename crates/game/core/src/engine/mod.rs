//! Action execution pipeline.
//!
//! The [`GameEngine`] is the authoritative reducer for [`GameState`]. It
//! runs the transition phases against a scratch copy, lets post-execution
//! hooks react to the resulting delta, and commits only when everything
//! succeeded. A rejected action therefore never leaves a partial update.

mod errors;
mod hook;
mod transition;

pub use errors::{ExecuteError, TransitionPhase, TransitionPhaseError};
pub use hook::{
    LayLowConsumptionHook, PostExecutionHook, ZeitgeistEffectsHook, ZeitgeistMilestoneHook,
    default_hooks,
};

use std::sync::Arc;

use tracing::debug;

use crate::action::Action;
use crate::env::GameEnv;
use crate::error::GameError;
use crate::state::{GameState, StateDelta};

/// Complete outcome of action execution.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExecutionOutcome {
    /// State change metadata (which fields changed), hooks included.
    pub delta: StateDelta,

    /// Names of the hooks that ran, in execution order.
    pub hooks_fired: Vec<String>,
}

/// Game engine that manages action execution.
///
/// All state mutations flow through the three-phase action pipeline:
/// pre_validate → apply → post_validate, followed by the hook pass.
pub struct GameEngine<'a> {
    state: &'a mut GameState,
    hooks: Arc<[Arc<dyn PostExecutionHook>]>,
}

impl<'a> GameEngine<'a> {
    /// Creates a new game engine with the default hooks.
    pub fn new(state: &'a mut GameState) -> Self {
        Self::with_hooks(state, default_hooks())
    }

    /// Creates an engine with a custom hook set, run in slice order.
    pub fn with_hooks(state: &'a mut GameState, hooks: Arc<[Arc<dyn PostExecutionHook>]>) -> Self {
        Self { state, hooks }
    }

    pub fn state(&self) -> &GameState {
        self.state
    }

    /// Executes an action for the active player.
    ///
    /// # Errors
    ///
    /// Returns [`ExecuteError::GameOver`] once the game has ended, a
    /// phase-tagged rejection when the action is illegal, or an oracle error
    /// when a hook could not reach its oracle. The state is untouched in
    /// every error case.
    pub fn execute(
        &mut self,
        env: GameEnv<'_>,
        action: &Action,
    ) -> Result<ExecutionOutcome, ExecuteError> {
        if self.state.is_over() {
            return Err(ExecuteError::GameOver {
                status: self.state.status,
            });
        }

        let mut next = self.state.clone();
        transition::execute_transition(action, &mut next, &env)?;

        let mut delta = StateDelta::from_states(action.clone(), self.state, &next);
        let mut hooks_fired = Vec::new();
        if !delta.is_empty() {
            for hook in self.hooks.iter() {
                if hook.should_trigger(&delta) {
                    hook.apply(&mut next, &delta, &env)?;
                    hooks_fired.push(hook.name().to_owned());
                }
            }
            if !hooks_fired.is_empty() {
                delta = StateDelta::from_states(action.clone(), self.state, &next);
            }
        }

        debug!(
            action = action.name(),
            seat = self.state.active_player_index,
            turn = self.state.turn,
            hooks = hooks_fired.len(),
            "action applied"
        );
        *self.state = next;

        Ok(ExecutionOutcome { delta, hooks_fired })
    }
}

/// Pure reducer: returns the state after `action`.
///
/// Rejected actions and finished games return an unchanged copy of `state`.
/// Use [`GameEngine::execute`] to learn why an action was refused.
pub fn apply(state: &GameState, action: &Action, env: GameEnv<'_>) -> GameState {
    let mut next = state.clone();
    if let Err(error) = GameEngine::new(&mut next).execute(env, action) {
        debug!(
            action = action.name(),
            code = error.error_code(),
            %error,
            "action rejected"
        );
    }
    next
}
