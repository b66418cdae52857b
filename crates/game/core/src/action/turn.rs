//! Turn lifecycle: start, end, and the per-turn Time roll.

use tracing::{debug, info};

use super::{ActionError, ActionTransition, TurnAction, require_left_home, require_unused};
use crate::effect::{Effect, apply_effects};
use crate::env::{GameEnv, RollPurpose};
use crate::state::{GameState, GameStatus, LastResult, LossReason, Stage, Stat, TurnFlags};

impl ActionTransition for TurnAction {
    type Error = ActionError;

    fn pre_validate(&self, state: &GameState, _env: &GameEnv<'_>) -> Result<(), Self::Error> {
        match self {
            TurnAction::StartTurn | TurnAction::EndTurn => Ok(()),
            TurnAction::RollTime => {
                require_left_home(state)?;
                require_unused(state, TurnFlags::ROLLED_TIME, "ROLL_TIME")
            }
        }
    }

    fn apply(&self, state: &mut GameState, env: &GameEnv<'_>) -> Result<(), Self::Error> {
        match self {
            TurnAction::StartTurn => start_turn(state, env),
            TurnAction::EndTurn => end_turn(state, env, EndTurnGuard::Enforce),
            TurnAction::RollTime => roll_time(state, env),
        }
    }
}

/// Whether `end_turn` honours the Pro maintenance guard.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) enum EndTurnGuard {
    Enforce,
    /// Used by `LAY_LOW`, which ends the turn before maintenance can happen.
    Bypass,
}

/// Resets the active player's turn record and pays passive income.
pub(super) fn start_turn(state: &mut GameState, env: &GameEnv<'_>) -> Result<(), ActionError> {
    let player = state.active_player_mut();
    player.turn.reset();
    player.last.clear();
    player.time_this_turn = 0;

    let stage = player.stage;
    if stage == Stage::Pro && player.scandal > 0 {
        player.turn.mark(TurnFlags::CAN_LAY_LOW);
    }

    if stage >= Stage::Amateur {
        let passive: Vec<Effect> = player.minor_works.passive_effects().cloned().collect();
        apply_effects(player, &passive);
    }

    if stage == Stage::Pro {
        let rng = env.rng()?;
        let face = state.roll_d6(rng, RollPurpose::FocusStat);
        let focus = Stat::FOCUS_CANDIDATES[(face as usize - 1) % Stat::FOCUS_CANDIDATES.len()];
        state.active_player_mut().turn.focus_stat = Some(focus);
    }

    debug!(
        seat = state.active_player_index,
        turn = state.turn,
        %stage,
        "turn started"
    );
    Ok(())
}

/// Closes the active player's turn and hands over to the next seat.
pub(super) fn end_turn(
    state: &mut GameState,
    env: &GameEnv<'_>,
    guard: EndTurnGuard,
) -> Result<(), ActionError> {
    let skip_limit = state.config.amateur.job_loss_skip_count;
    let player = state.active_player_mut();

    if guard == EndTurnGuard::Enforce
        && player.stage == Stage::Pro
        && !player.turn.has(TurnFlags::PRO_MAINTENANCE_DONE)
    {
        player.turn.mark(TurnFlags::PRO_MAINTENANCE_REQUIRED);
        debug!(player = %player.id, "end turn blocked until maintenance check");
        return Ok(());
    }

    let ending = player.id;
    let mut fired = None;
    if player.job.job_id.is_some() && !player.turn.has(TurnFlags::WORKED) {
        player.job.skipped_work_count += 1;
        if player.job.skipped_work_count >= skip_limit {
            fired = player.job.job_id.take();
        }
    }
    if let Some(job) = &fired {
        player.job.skipped_work_count = 0;
        player.job.fired_jobs.push(job.clone());
        info!(player = %ending, %job, "fired for skipping work");
        state.job_deck.push(job.clone());
    }

    advance_seat(state);

    let max_turns = state.config.global.max_turns;
    if max_turns > 0 && state.turn > max_turns {
        state.status = GameStatus::Lost;
        state.loss_reason = Some(LossReason::MaxTurns);
        info!(turn = state.turn, max_turns, "game lost: turn limit reached");
    } else {
        start_turn(state, env)?;
    }

    // Recorded after the next turn starts so a single-player log keeps it.
    if let Some(job) = fired {
        if let Some(player) = state.player_mut(ending) {
            player.last.record(LastResult::Fired { job });
        }
    }
    Ok(())
}

fn advance_seat(state: &mut GameState) {
    let seats = state.players.len();
    if seats <= 1 {
        state.turn += 1;
        return;
    }

    state.active_player_index = (state.active_player_index + 1) % seats;
    if state.active_player_index == 0 {
        state.turn += 1;
    }
}

fn roll_time(state: &mut GameState, env: &GameEnv<'_>) -> Result<(), ActionError> {
    let rng = env.rng()?;
    let roll = state.roll_d6(rng, RollPurpose::TimeRoll);

    let player = state.active_player_mut();
    let gained = if player.stage == Stage::Pro {
        roll.saturating_sub(player.scandal)
    } else {
        roll
    };
    player.time_this_turn += gained;
    player.turn.mark(TurnFlags::ROLLED_TIME);
    player.last.record(LastResult::TimeRoll { roll, gained });
    Ok(())
}
