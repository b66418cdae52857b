//! Dreamer stage: social events and the advance to Amateur.

use tracing::info;

use super::{
    ActionError, ActionTransition, DreamerAction, require_stage, require_time, require_unused,
};
use crate::cards::{SocialCard, SocialChoice};
use crate::effect::apply_effects;
use crate::env::{GameEnv, RollPurpose};
use crate::state::{GameState, LastResult, RollCheck, Stage, TurnFlags};

impl ActionTransition for DreamerAction {
    type Error = ActionError;

    fn pre_validate(&self, state: &GameState, _env: &GameEnv<'_>) -> Result<(), Self::Error> {
        require_stage(state, Stage::Dreamer)?;
        let player = state.active_player();

        match self {
            DreamerAction::DrawSocialCard => {
                if player.pending_social.is_some() {
                    return Err(ActionError::CardPending { kind: "social" });
                }
                require_time(state, 1)?;
                let path = player.art_path;
                if !state.social_deck.any(|card| card.is_available_to(path)) {
                    return Err(ActionError::NoEligibleCard { deck: "social" });
                }
                Ok(())
            }
            DreamerAction::AttendSocialEvent | DreamerAction::SkipSocialEvent => {
                if player.pending_social.is_none() {
                    return Err(ActionError::NothingPending { kind: "social" });
                }
                Ok(())
            }
            DreamerAction::AttemptAdvanceDreamer => {
                require_unused(
                    state,
                    TurnFlags::DREAMER_ADVANCE_ATTEMPTED,
                    "ATTEMPT_ADVANCE_DREAMER",
                )?;
                if !player
                    .resources
                    .can_afford(&state.config.dreamer.advance_cost)
                {
                    return Err(ActionError::cannot_afford(state));
                }
                Ok(())
            }
        }
    }

    fn apply(&self, state: &mut GameState, env: &GameEnv<'_>) -> Result<(), Self::Error> {
        match self {
            DreamerAction::DrawSocialCard => {
                let rng = env.rng()?;
                let path = state.active_player().art_path;
                state.ready_deck_for(
                    rng,
                    |state| &mut state.social_deck,
                    |card: &SocialCard| card.is_available_to(path),
                );

                let card = state
                    .social_deck
                    .draw_first_where(|card| card.is_available_to(path))
                    .ok_or(ActionError::NoEligibleCard { deck: "social" })?;

                let player = state.active_player_mut();
                player
                    .last
                    .record(LastResult::SocialDrawn { card: card.id.clone() });
                player.pending_social = Some(card);
            }
            DreamerAction::AttendSocialEvent => resolve_social(state, SocialChoice::Attend)?,
            DreamerAction::SkipSocialEvent => resolve_social(state, SocialChoice::Skip)?,
            DreamerAction::AttemptAdvanceDreamer => {
                let rng = env.rng()?;
                let cost = state.config.dreamer.advance_cost;
                let target = state.config.dreamer.advance_roll_target;

                let player = state.active_player_mut();
                player.turn.mark(TurnFlags::DREAMER_ADVANCE_ATTEMPTED);
                player.resources.pay(&cost);

                let check = RollCheck::new(state.roll_d6(rng, RollPurpose::DreamerAdvance), target);
                let player = state.active_player_mut();
                player.last.record(LastResult::DreamerAdvance { check });
                if check.success {
                    player.enter_stage(Stage::Amateur);
                    info!(player = %player.id, "advanced to amateur");
                }
            }
        }
        Ok(())
    }
}

fn resolve_social(state: &mut GameState, choice: SocialChoice) -> Result<(), ActionError> {
    let player = state.active_player_mut();
    let card = player
        .pending_social
        .take()
        .ok_or(ActionError::NothingPending { kind: "social" })?;

    apply_effects(player, card.branch(choice));
    player.spend_time(card.time_cost());
    player.last.record(LastResult::SocialResolved {
        card: card.id,
        choice,
    });
    Ok(())
}
