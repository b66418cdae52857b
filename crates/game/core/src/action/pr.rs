//! Scandal: laying low, hit pieces and buyouts.

use tracing::info;

use super::turn::{EndTurnGuard, end_turn};
use super::{ActionError, ActionTransition, PrAction, require_left_home, require_time};
use crate::env::{GameEnv, RollPurpose};
use crate::state::{GameState, LastResult, Stage, TurnFlags};

impl ActionTransition for PrAction {
    type Error = ActionError;

    fn pre_validate(&self, state: &GameState, _env: &GameEnv<'_>) -> Result<(), Self::Error> {
        let player = state.active_player();
        match self {
            PrAction::LayLow => {
                let allowed = player.stage == Stage::Pro
                    && player.scandal > 0
                    && player.turn.has(TurnFlags::CAN_LAY_LOW);
                if !allowed {
                    return Err(ActionError::CannotLayLow);
                }
                Ok(())
            }
            PrAction::PlantHitPiece { target } => {
                require_left_home(state)?;
                if player.hit_piece_used {
                    return Err(ActionError::HitPieceUsed);
                }
                require_time(state, 1)?;
                let valid_target = *target != player.id
                    && state
                        .player(*target)
                        .is_some_and(|target| target.stage == Stage::Pro);
                if !valid_target {
                    return Err(ActionError::InvalidHitTarget(*target));
                }
                Ok(())
            }
            PrAction::BuyoutScandal { amount } => {
                require_left_home(state)?;
                if player.scandal == 0 {
                    return Err(ActionError::NoScandal);
                }
                if buyout_amount(state, *amount) == 0 {
                    return Err(ActionError::cannot_afford(state));
                }
                Ok(())
            }
        }
    }

    fn apply(&self, state: &mut GameState, env: &GameEnv<'_>) -> Result<(), Self::Error> {
        match *self {
            PrAction::LayLow => {
                let rng = env.rng()?;
                let roll = state.roll_d6(rng, RollPurpose::LayLow);
                let player = state.active_player_mut();
                let removed = roll.min(player.scandal);
                player.scandal -= removed;
                let id = player.id;
                info!(player = %id, roll, removed, "laid low");

                end_turn(state, env, EndTurnGuard::Bypass)?;
                if let Some(player) = state.player_mut(id) {
                    player.last.record(LastResult::LayLow { roll, removed });
                }
            }
            PrAction::PlantHitPiece { target } => {
                let attacker = state.active_player_mut();
                let scandal = attacker.time_this_turn;
                attacker.time_this_turn = 0;
                attacker.hit_piece_used = true;
                attacker
                    .last
                    .record(LastResult::HitPiece { target, scandal });
                let attacker = attacker.id;

                let victim = state
                    .player_mut(target)
                    .ok_or(ActionError::InvalidHitTarget(target))?;
                victim.scandal += scandal;
                info!(%attacker, %target, scandal, "hit piece planted");
            }
            PrAction::BuyoutScandal { amount } => {
                let removed = buyout_amount(state, amount);
                let money_spent = removed * state.config.pro.buyout_money_per_scandal;
                let player = state.active_player_mut();
                player.scandal -= removed;
                player.resources.money -= money_spent as i32;
                player.last.record(LastResult::Buyout {
                    removed,
                    money_spent,
                });
            }
        }
        Ok(())
    }
}

/// Scandal removable right now: capped by the request, remaining scandal and money.
fn buyout_amount(state: &GameState, requested: Option<u32>) -> u32 {
    let player = state.active_player();
    let affordable = (player.resources.money.max(0) as u32)
        .checked_div(state.config.pro.buyout_money_per_scandal)
        .unwrap_or(u32::MAX);
    requested
        .unwrap_or(player.scandal)
        .min(player.scandal)
        .min(affordable)
}
