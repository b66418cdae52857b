//! Amateur stage: professional development, Minor Works and the portfolio.

use tracing::{debug, info};

use super::{AmateurAction, ActionError, ActionTransition, require_stage, require_time};
use crate::cards::MinorWorkBoost;
use crate::effect::apply_effects;
use crate::env::{CatalogOracle, GameEnv, RollPurpose};
use crate::minor_works::{MinorWorkError, MinorWorkTemplate, ProgressOutcome};
use crate::state::{GameState, LastResult, PlayerState, RollCheck, Stage, Stat, WorkId};

impl ActionTransition for AmateurAction {
    type Error = ActionError;

    fn pre_validate(&self, state: &GameState, env: &GameEnv<'_>) -> Result<(), Self::Error> {
        require_stage(state, Stage::Amateur)?;
        let player = state.active_player();

        match self {
            AmateurAction::TakeProfDev => {
                if state.prof_dev_deck.is_exhausted() {
                    return Err(ActionError::DeckEmpty { deck: "prof_dev" });
                }
                require_time(state, prof_dev_cost(state))
            }
            AmateurAction::StartMinorWork { work_id } => {
                let template = env
                    .catalog()?
                    .minor_work(player.art_path, work_id)
                    .ok_or_else(|| ActionError::UnknownMinorWork(work_id.clone()))?;
                player
                    .minor_works
                    .check_start(template, state.config.amateur.max_minor_works)?;
                Ok(())
            }
            AmateurAction::ProgressMinorWork => {
                if player.minor_works.in_progress().is_none() {
                    return Err(MinorWorkError::NothingInProgress.into());
                }
                require_time(state, 1)
            }
            AmateurAction::CompilePortfolio => {
                if player.portfolio_built {
                    return Err(ActionError::PortfolioAlreadyBuilt);
                }
                let need = state.config.amateur.portfolio_min_works();
                let have = player.minor_works.completed_count();
                if have < need {
                    return Err(ActionError::NotEnoughMinorWorks { have, need });
                }
                if !player
                    .resources
                    .can_afford(&state.config.amateur.portfolio_cost)
                {
                    return Err(ActionError::cannot_afford(state));
                }
                Ok(())
            }
            AmateurAction::AttemptAdvancePro => {
                if !player.portfolio_built {
                    return Err(ActionError::PortfolioMissing);
                }
                Ok(())
            }
        }
    }

    fn apply(&self, state: &mut GameState, env: &GameEnv<'_>) -> Result<(), Self::Error> {
        match self {
            AmateurAction::TakeProfDev => take_prof_dev(state, env)?,
            AmateurAction::StartMinorWork { work_id } => {
                let catalog = env.catalog()?;
                let cap = state.config.amateur.max_minor_works;
                let player = state.active_player_mut();
                let template = catalog
                    .minor_work(player.art_path, work_id)
                    .ok_or_else(|| ActionError::UnknownMinorWork(work_id.clone()))?;

                player.minor_works.start(template, cap)?;
                player.last.record(LastResult::MinorWorkStarted {
                    work: work_id.clone(),
                });
            }
            AmateurAction::ProgressMinorWork => progress_minor_work(state, env)?,
            AmateurAction::CompilePortfolio => {
                let cost = state.config.amateur.portfolio_cost;
                let player = state.active_player_mut();
                player.resources.pay(&cost);
                player.portfolio_built = true;
                player.last.record(LastResult::PortfolioCompiled);
                debug!(player = %player.id, "portfolio compiled");
            }
            AmateurAction::AttemptAdvancePro => {
                let rng = env.rng()?;
                let target = state.config.amateur.pro_advance_roll_target;
                let check = RollCheck::new(state.roll_d6(rng, RollPurpose::ProAdvance), target);

                let player = state.active_player_mut();
                player.last.record(LastResult::ProAdvance { check });
                if check.success {
                    player.enter_stage(Stage::Pro);
                    info!(player = %player.id, "turned pro");
                }
            }
        }
        Ok(())
    }
}

/// Time cost of the top ProfDev card, or the configured default.
fn prof_dev_cost(state: &GameState) -> u32 {
    state
        .prof_dev_deck
        .peek()
        .and_then(|card| card.time_cost)
        .unwrap_or(state.config.amateur.prof_dev_time_cost)
}

fn take_prof_dev(state: &mut GameState, env: &GameEnv<'_>) -> Result<(), ActionError> {
    let rng = env.rng()?;
    let catalog = env.catalog()?;
    state.ready_deck(rng, |state| &mut state.prof_dev_deck);

    // Peek again: a reshuffle may have put a different card on top.
    let cost = prof_dev_cost(state);
    require_time(state, cost)?;

    let card = state
        .prof_dev_deck
        .draw()
        .ok_or(ActionError::DeckEmpty { deck: "prof_dev" })?;
    let cap = state.config.amateur.max_minor_works;

    let player = state.active_player_mut();
    apply_effects(player, &card.effects);
    let boosted = match card.minor_work {
        Some(boost) => boost_minor_work(player, catalog, boost, cap)?,
        None => None,
    };
    player.spend_time(cost);
    player.last.record(LastResult::ProfDev {
        card: card.id,
        boosted,
    });
    Ok(())
}

/// Pushes the player's Minor Work forward without completing it, starting
/// one first when the slot is free. Returns the boosted work and its progress.
fn boost_minor_work(
    player: &mut PlayerState,
    catalog: &dyn CatalogOracle,
    boost: MinorWorkBoost,
    cap: u32,
) -> Result<Option<(WorkId, u32)>, ActionError> {
    let path = player.art_path;
    let template = match player.minor_works.in_progress() {
        Some(current) => catalog
            .minor_work(path, &current.id)
            .ok_or_else(|| ActionError::UnknownMinorWork(current.id.clone()))?,
        None => {
            let candidate = match boost.kind {
                Some(kind) => catalog.minor_work_of_kind(path, kind),
                None => catalog
                    .minor_works(path)
                    .iter()
                    .find(|template| !player.minor_works.has_completed(&template.id)),
            };
            let Some(template) =
                candidate.filter(|template| player.minor_works.check_start(template, cap).is_ok())
            else {
                return Ok(None);
            };
            player.minor_works.start(template, cap)?;
            template
        }
    };

    let progress = player.minor_works.boost(template, boost.progress)?;
    Ok(Some((template.id.clone(), progress)))
}

fn progress_minor_work(state: &mut GameState, env: &GameEnv<'_>) -> Result<(), ActionError> {
    let catalog = env.catalog()?;
    let player = state.active_player_mut();
    let current = player
        .minor_works
        .in_progress()
        .map(|work| work.id.clone())
        .ok_or(MinorWorkError::NothingInProgress)?;
    let template: &MinorWorkTemplate = catalog
        .minor_work(player.art_path, &current)
        .ok_or(ActionError::UnknownMinorWork(current))?;

    let outcome = player.minor_works.progress(template)?;
    player.spend_time(1);

    match outcome {
        ProgressOutcome::Advanced { progress, target } => {
            player.last.record(LastResult::MinorWorkProgressed {
                work: template.id.clone(),
                progress,
                target,
            });
        }
        ProgressOutcome::Completed(completion) => {
            apply_effects(player, &completion.on_complete_effects);
            if let Some(payout) = completion.platform_payout {
                player.resources.apply_delta(Stat::Money, payout);
            }
            info!(player = %player.id, work = %completion.work, "minor work completed");
            player
                .last
                .record(LastResult::MinorWorkCompleted { work: completion.work });
        }
    }
    Ok(())
}
