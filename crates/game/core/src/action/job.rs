//! Job market: exclusive jobs drawn from a shared deck.

use tracing::debug;

use super::{
    ActionError, ActionTransition, JobAction, require_left_home, require_stage, require_unused,
};
use crate::effect::apply_effects;
use crate::env::GameEnv;
use crate::state::{GameState, LastResult, Stage, TurnFlags};

impl ActionTransition for JobAction {
    type Error = ActionError;

    fn pre_validate(&self, state: &GameState, env: &GameEnv<'_>) -> Result<(), Self::Error> {
        let player = state.active_player();
        match self {
            JobAction::ChooseJob { job_id } => {
                require_stage(state, Stage::Dreamer)?;
                if let Some(current) = &player.job.job_id {
                    return Err(ActionError::AlreadyEmployed(current.clone()));
                }
                if player.job.fired_jobs.contains(job_id) {
                    return Err(ActionError::FiredFromJob(job_id.clone()));
                }
                if !state.job_deck.contains(job_id) {
                    return Err(ActionError::JobUnavailable(job_id.clone()));
                }
                if env.catalog()?.job(job_id).is_none() {
                    return Err(ActionError::UnknownJob(job_id.clone()));
                }
                Ok(())
            }
            JobAction::QuitJob => {
                require_left_home(state)?;
                if player.job.job_id.is_none() {
                    return Err(ActionError::Unemployed);
                }
                Ok(())
            }
            JobAction::GoToWork => {
                require_left_home(state)?;
                if player.job.job_id.is_none() {
                    return Err(ActionError::Unemployed);
                }
                require_unused(state, TurnFlags::WORKED, "GO_TO_WORK")
            }
        }
    }

    fn apply(&self, state: &mut GameState, env: &GameEnv<'_>) -> Result<(), Self::Error> {
        match self {
            JobAction::ChooseJob { job_id } => {
                state.job_deck.retain(|job| job != job_id);
                let player = state.active_player_mut();
                player.job.job_id = Some(job_id.clone());
                player.job.skipped_work_count = 0;
                debug!(player = %player.id, job = %job_id, "took job");
            }
            JobAction::QuitJob => {
                let player = state.active_player_mut();
                let job = player.job.job_id.take().ok_or(ActionError::Unemployed)?;
                player.job.skipped_work_count = 0;
                debug!(player = %player.id, %job, "quit job");
                state.job_deck.push(job);
            }
            JobAction::GoToWork => {
                let catalog = env.catalog()?;
                let player = state.active_player_mut();
                let job_id = player.job.job_id.clone().ok_or(ActionError::Unemployed)?;
                let job = catalog
                    .job(&job_id)
                    .ok_or_else(|| ActionError::UnknownJob(job_id.clone()))?;

                apply_effects(player, &job.effects);
                player.turn.mark(TurnFlags::WORKED);
                player.last.record(LastResult::Worked { job: job_id });
            }
        }
        Ok(())
    }

    fn post_validate(&self, state: &GameState, _env: &GameEnv<'_>) -> Result<(), Self::Error> {
        state.check_invariants()?;
        Ok(())
    }
}
