//! Pro stage: the Masterwork race, Pro cards and maintenance.

use tracing::{info, warn};

use super::{
    ActionError, ActionTransition, ProAction, check_masterwork_win, require_stage, require_time,
};
use crate::cards::ProOutcome;
use crate::effect::apply_effects;
use crate::env::{GameEnv, RollPurpose};
use crate::state::{GameState, LastResult, RollCheck, Stage, TurnFlags};

impl ActionTransition for ProAction {
    type Error = ActionError;

    fn pre_validate(&self, state: &GameState, _env: &GameEnv<'_>) -> Result<(), Self::Error> {
        require_stage(state, Stage::Pro)?;
        let player = state.active_player();

        match self {
            ProAction::WorkOnMasterwork { time_spent } => {
                if player.scandal > 0 {
                    return Err(ActionError::ScandalBlocksMasterwork {
                        scandal: player.scandal,
                    });
                }
                require_time(state, 1)?;
                if *time_spent == Some(0) {
                    return Err(ActionError::insufficient_time(state, 1));
                }
                let focus = player.focus_stat().ok_or(ActionError::NoFocusStat)?;
                if player.resources.get(focus) < 1 {
                    return Err(ActionError::FocusDepleted { stat: focus });
                }
                Ok(())
            }
            ProAction::DrawProCard => {
                if player.pending_pro.is_some() {
                    return Err(ActionError::CardPending { kind: "pro" });
                }
                if state.pro_deck.is_exhausted() {
                    return Err(ActionError::DeckEmpty { deck: "pro" });
                }
                require_time(state, pro_draw_cost(state))
            }
            ProAction::ResolveProCardChoice { .. } => {
                if player.pending_pro.is_none() {
                    return Err(ActionError::NothingPending { kind: "pro" });
                }
                Ok(())
            }
            ProAction::ProMaintenanceCheck => {
                if player.turn.has(TurnFlags::PRO_MAINTENANCE_DONE) {
                    return Err(ActionError::MaintenanceAlreadyDone);
                }
                Ok(())
            }
        }
    }

    fn apply(&self, state: &mut GameState, env: &GameEnv<'_>) -> Result<(), Self::Error> {
        match *self {
            ProAction::WorkOnMasterwork { time_spent } => {
                let player = state.active_player_mut();
                let focus = player.focus_stat().ok_or(ActionError::NoFocusStat)?;
                let spent = time_spent
                    .unwrap_or(player.time_this_turn)
                    .min(player.time_this_turn);

                player.resources.apply_delta(focus, -1);
                player.masterwork_progress = player.masterwork_progress.saturating_add(spent as i32);
                player.spend_time(spent);
                player.last.record(LastResult::Masterwork {
                    spent,
                    progress: player.masterwork_progress,
                });
                check_masterwork_win(state);
            }
            ProAction::DrawProCard => {
                let rng = env.rng()?;
                state.ready_deck(rng, |state| &mut state.pro_deck);
                let cost = pro_draw_cost(state);
                require_time(state, cost)?;

                let card = state
                    .pro_deck
                    .draw()
                    .ok_or(ActionError::DeckEmpty { deck: "pro" })?;
                let player = state.active_player_mut();
                player.spend_time(cost);

                let pending = card.is_branching();
                player.last.record(LastResult::ProCardDrawn {
                    card: card.id.clone(),
                    pending,
                });
                if pending {
                    player.pending_pro = Some(card);
                } else {
                    apply_effects(player, &card.effects);
                    check_masterwork_win(state);
                }
            }
            ProAction::ResolveProCardChoice { outcome } => {
                resolve_pro_card(state, outcome)?;
                check_masterwork_win(state);
            }
            ProAction::ProMaintenanceCheck => {
                let rng = env.rng()?;
                let target = state.config.pro.maintenance_roll_target;
                let check = RollCheck::new(state.roll_d6(rng, RollPurpose::Maintenance), target);

                let player = state.active_player_mut();
                player.turn.mark(TurnFlags::PRO_MAINTENANCE_DONE);
                player.turn.clear(TurnFlags::PRO_MAINTENANCE_REQUIRED);
                player.last.record(LastResult::Maintenance { check });
                if !check.success {
                    player.enter_stage(Stage::Amateur);
                    warn!(player = %player.id, roll = check.roll, "failed maintenance, demoted");
                }
            }
        }
        Ok(())
    }
}

/// Time cost of the top Pro card, or the configured default.
fn pro_draw_cost(state: &GameState) -> u32 {
    state
        .pro_deck
        .peek()
        .and_then(|card| card.time_cost)
        .unwrap_or(state.config.pro.draw_time_cost)
}

fn resolve_pro_card(state: &mut GameState, outcome: ProOutcome) -> Result<(), ActionError> {
    let player = state.active_player_mut();
    let card = player
        .pending_pro
        .take()
        .ok_or(ActionError::NothingPending { kind: "pro" })?;

    apply_effects(player, &card.effects);
    apply_effects(player, card.branch(outcome));
    info!(player = %player.id, card = %card.id, %outcome, "pro card resolved");
    player.last.record(LastResult::ProCardResolved {
        card: card.id,
        outcome,
    });
    Ok(())
}
