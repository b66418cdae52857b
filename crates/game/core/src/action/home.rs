//! Home stage: home cards and leaving home.

use tracing::info;

use super::{ActionError, ActionTransition, HomeAction, require_stage, require_unused};
use crate::effect::apply_effects;
use crate::env::{GameEnv, RollPurpose};
use crate::state::{GameState, LastResult, RollCheck, Stage, TurnFlags};

impl ActionTransition for HomeAction {
    type Error = ActionError;

    fn pre_validate(&self, state: &GameState, _env: &GameEnv<'_>) -> Result<(), Self::Error> {
        require_stage(state, Stage::Home)?;
        match self {
            HomeAction::DrawHomeCard => {
                require_unused(state, TurnFlags::HOME_CARD_DRAWN, "DRAW_HOME_CARD")?;
                if state.home_deck.is_exhausted() {
                    return Err(ActionError::DeckEmpty { deck: "home" });
                }
                Ok(())
            }
            HomeAction::AttemptLeaveHome => {
                require_unused(state, TurnFlags::LEAVE_HOME_ATTEMPTED, "ATTEMPT_LEAVE_HOME")?;
                let steps = state.config.home.roll_sequence.len() as u32;
                if state.active_player().home_progress >= steps {
                    return Err(ActionError::HomeSequenceComplete);
                }
                Ok(())
            }
        }
    }

    fn apply(&self, state: &mut GameState, env: &GameEnv<'_>) -> Result<(), Self::Error> {
        let rng = env.rng()?;
        match self {
            HomeAction::DrawHomeCard => {
                state.ready_deck(rng, |state| &mut state.home_deck);
                let card = state
                    .home_deck
                    .draw()
                    .ok_or(ActionError::DeckEmpty { deck: "home" })?;

                let player = state.active_player_mut();
                apply_effects(player, &card.effects);
                player.turn.mark(TurnFlags::HOME_CARD_DRAWN);
                player.last.record(LastResult::HomeCard { card: card.id });
            }
            HomeAction::AttemptLeaveHome => {
                let sequence = &state.config.home.roll_sequence;
                let steps = sequence.len() as u32;
                let required = sequence
                    .get(state.active_player().home_progress as usize)
                    .copied()
                    .ok_or(ActionError::HomeSequenceComplete)?;

                let check = RollCheck::new(state.roll_d6(rng, RollPurpose::LeaveHome), required);

                let player = state.active_player_mut();
                player.turn.mark(TurnFlags::LEAVE_HOME_ATTEMPTED);
                if check.success {
                    player.home_progress += 1;
                }
                player.last.record(LastResult::LeaveHome { check });

                if player.home_progress >= steps {
                    player.enter_stage(Stage::Dreamer);
                    info!(player = %player.id, "left home");
                }
            }
        }
        Ok(())
    }
}
