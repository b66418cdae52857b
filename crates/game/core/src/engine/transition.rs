//! Action transition dispatch and execution logic.

use crate::action::{Action, ActionTransition};
use crate::env::GameEnv;
use crate::state::GameState;

use super::errors::{ExecuteError, TransitionPhase, TransitionPhaseError};

/// Executes a transition through the three-phase pipeline.
///
/// Phases:
/// 1. `pre_validate` - Check preconditions before mutation
/// 2. `apply` - Mutate the game state
/// 3. `post_validate` - Verify postconditions after mutation
#[inline]
fn drive_transition<T>(
    transition: &T,
    state: &mut GameState,
    env: &GameEnv<'_>,
) -> Result<(), TransitionPhaseError<T::Error>>
where
    T: ActionTransition,
{
    transition
        .pre_validate(state, env)
        .map_err(|error| TransitionPhaseError::new(TransitionPhase::PreValidate, error))?;

    transition
        .apply(state, env)
        .map_err(|error| TransitionPhaseError::new(TransitionPhase::Apply, error))?;

    transition
        .post_validate(state, env)
        .map_err(|error| TransitionPhaseError::new(TransitionPhase::PostValidate, error))?;

    Ok(())
}

/// Routes each action group to its transition.
///
/// `state` is mutated in place even on failure; the engine only ever passes
/// a scratch copy.
pub(super) fn execute_transition(
    action: &Action,
    state: &mut GameState,
    env: &GameEnv<'_>,
) -> Result<(), ExecuteError> {
    match action {
        Action::Turn(transition) => {
            drive_transition(transition, state, env).map_err(ExecuteError::Turn)
        }
        Action::Home(transition) => {
            drive_transition(transition, state, env).map_err(ExecuteError::Home)
        }
        Action::Dreamer(transition) => {
            drive_transition(transition, state, env).map_err(ExecuteError::Dreamer)
        }
        Action::Job(transition) => drive_transition(transition, state, env).map_err(ExecuteError::Job),
        Action::Amateur(transition) => {
            drive_transition(transition, state, env).map_err(ExecuteError::Amateur)
        }
        Action::Pro(transition) => drive_transition(transition, state, env).map_err(ExecuteError::Pro),
        Action::Pr(transition) => drive_transition(transition, state, env).map_err(ExecuteError::Pr),
        Action::Downtime(transition) => {
            drive_transition(transition, state, env).map_err(ExecuteError::Downtime)
        }
        Action::Zeitgeist(transition) => {
            drive_transition(transition, state, env).map_err(ExecuteError::Zeitgeist)
        }
    }
}
