use crate::env::GameEnv;
use crate::state::GameState;

/// Defines how a concrete action mutates game state.
///
/// `pre_validate` sees the state before mutation and rejects illegal actions;
/// `apply` assumes it passed. `post_validate` re-checks invariants afterwards.
/// The engine runs all three against a scratch copy, so an error in any phase
/// leaves the caller's state untouched.
pub trait ActionTransition {
    type Error;

    /// Validates pre-conditions using the state **before** mutation.
    fn pre_validate(&self, _state: &GameState, _env: &GameEnv<'_>) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Applies the action by mutating the game state directly.
    fn apply(&self, state: &mut GameState, env: &GameEnv<'_>) -> Result<(), Self::Error>;

    /// Validates post-conditions using the state **after** mutation.
    fn post_validate(&self, _state: &GameState, _env: &GameEnv<'_>) -> Result<(), Self::Error> {
        Ok(())
    }
}
