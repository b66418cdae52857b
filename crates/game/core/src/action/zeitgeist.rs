//! Zeitgeist-granted actions.

use tracing::debug;

use super::{ActionError, ActionTransition, ZeitgeistAction, require_unused};
use crate::env::GameEnv;
use crate::state::{GameState, LastResult, Stat, TurnFlags};
use crate::zeitgeist::ZeitgeistKind;

impl ActionTransition for ZeitgeistAction {
    type Error = ActionError;

    fn pre_validate(&self, state: &GameState, _env: &GameEnv<'_>) -> Result<(), Self::Error> {
        match *self {
            ZeitgeistAction::AiBoomConvert { into } => {
                if !state.zeitgeist.is_active(ZeitgeistKind::AiBoom) {
                    return Err(ActionError::ZeitgeistInactive(ZeitgeistKind::AiBoom));
                }
                if into == Stat::Inspiration {
                    return Err(ActionError::InvalidConversion(into));
                }
                require_unused(state, TurnFlags::AI_BOOM_USED, "AI_BOOM_CONVERT")?;
                if state.active_player().resources.inspiration < 1 {
                    return Err(ActionError::cannot_afford(state));
                }
                Ok(())
            }
        }
    }

    fn apply(&self, state: &mut GameState, _env: &GameEnv<'_>) -> Result<(), Self::Error> {
        match *self {
            ZeitgeistAction::AiBoomConvert { into } => {
                let player = state.active_player_mut();
                player.resources.apply_delta(Stat::Inspiration, -1);
                player.resources.apply_delta(into, 1);
                player.turn.mark(TurnFlags::AI_BOOM_USED);
                player.last.record(LastResult::AiBoom { into });
                debug!(player = %player.id, %into, "ai boom conversion");
            }
        }
        Ok(())
    }
}
