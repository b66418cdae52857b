//! Post-execution hooks that apply additional state changes after action execution.
//!
//! Hooks are triggered based on the state delta produced by an action. They
//! carry the game-wide concerns that no single stage handler owns: Zeitgeist
//! milestones, Zeitgeist side effects, and Lay-Low eligibility.

use std::sync::Arc;

use tracing::{debug, info};

use crate::action::{Action, AmateurAction, DreamerAction, JobAction, PrAction, ProAction};
use crate::env::{GameEnv, OracleError, RollPurpose};
use crate::state::{GameState, Stage, StateDelta, Stat, TurnFlags};
use crate::zeitgeist::ZeitgeistKind;

/// A hook that is applied after an action has been executed.
///
/// Hooks can inspect the state delta and conditionally apply additional
/// state changes directly to the game state.
///
/// Hooks are executed in priority order (lower priority values execute first).
pub trait PostExecutionHook: Send + Sync {
    fn name(&self) -> &'static str;

    /// Returns the priority of this hook. Lower values execute first.
    /// Default priority is 0.
    fn priority(&self) -> i32 {
        0
    }

    /// Determines whether this hook should be triggered based on the state delta.
    fn should_trigger(&self, delta: &StateDelta) -> bool;

    /// Applies the hook's effects to the game state directly.
    fn apply(
        &self,
        state: &mut GameState,
        delta: &StateDelta,
        env: &GameEnv<'_>,
    ) -> Result<(), OracleError>;
}

/// Rolls a new Zeitgeist the first time anyone reaches Dreamer, Amateur or Pro.
///
/// At most one milestone fires per action, checked in stage order.
#[derive(Debug)]
pub struct ZeitgeistMilestoneHook;

impl ZeitgeistMilestoneHook {
    fn pending_milestone(state: &GameState, delta: &StateDelta) -> Option<Stage> {
        Stage::MILESTONES.into_iter().find(|stage| {
            !state.zeitgeist.milestones.is_fired(*stage)
                && delta.stage_changes().any(|(_, change)| change.to == *stage)
        })
    }
}

impl PostExecutionHook for ZeitgeistMilestoneHook {
    fn name(&self) -> &'static str {
        "zeitgeist_milestone"
    }

    fn priority(&self) -> i32 {
        -10
    }

    fn should_trigger(&self, delta: &StateDelta) -> bool {
        delta.stage_changes().next().is_some()
    }

    fn apply(
        &self,
        state: &mut GameState,
        delta: &StateDelta,
        env: &GameEnv<'_>,
    ) -> Result<(), OracleError> {
        let Some(stage) = Self::pending_milestone(state, delta) else {
            return Ok(());
        };

        let rng = env.rng()?;
        let roll = state.roll_d6(rng, RollPurpose::Zeitgeist);
        state.zeitgeist.milestones.fire(stage);
        if let Some(kind) = ZeitgeistKind::from_roll(roll) {
            state.zeitgeist.replace(kind);
            info!(%stage, roll, zeitgeist = kind.title(), "zeitgeist shifted");
        }
        Ok(())
    }
}

/// Small bonuses the active Zeitgeist grants on specific actions.
#[derive(Debug)]
pub struct ZeitgeistEffectsHook;

impl ZeitgeistEffectsHook {
    fn draws_card(action: &Action) -> bool {
        matches!(
            action,
            Action::Dreamer(DreamerAction::DrawSocialCard)
                | Action::Amateur(AmateurAction::TakeProfDev)
                | Action::Pro(ProAction::DrawProCard)
        )
    }
}

impl PostExecutionHook for ZeitgeistEffectsHook {
    fn name(&self) -> &'static str {
        "zeitgeist_effects"
    }

    fn should_trigger(&self, delta: &StateDelta) -> bool {
        !delta.action.is_turn_boundary()
    }

    fn apply(
        &self,
        state: &mut GameState,
        delta: &StateDelta,
        _env: &GameEnv<'_>,
    ) -> Result<(), OracleError> {
        let Some(kind) = state.zeitgeist.current else {
            return Ok(());
        };

        match (kind, &delta.action) {
            (ZeitgeistKind::GigEconomy, Action::Job(JobAction::GoToWork)) => {
                state
                    .active_player_mut()
                    .resources
                    .apply_delta(Stat::Money, 1);
            }
            (ZeitgeistKind::StreamingEra, action) if Self::draws_card(action) => {
                state.active_player_mut().adjust_time(1);
            }
            (ZeitgeistKind::CultureWar, Action::Pr(PrAction::PlantHitPiece { target })) => {
                if let Some(victim) = state.player_mut(*target) {
                    victim.scandal += 1;
                }
            }
            (ZeitgeistKind::WellnessCulture, Action::Downtime(downtime)) => {
                state
                    .active_player_mut()
                    .resources
                    .apply_delta(downtime.stat(), 1);
            }
            (ZeitgeistKind::IndieWave, _) if delta.completed_works().next().is_some() => {
                let seats: Vec<usize> = delta.completed_works().collect();
                for seat in seats {
                    if let Some(player) = state.players.get_mut(seat) {
                        player.resources.apply_delta(Stat::Craft, 1);
                    }
                }
            }
            _ => return Ok(()),
        }

        debug!(zeitgeist = %kind, action = delta.action.name(), "zeitgeist bonus applied");
        Ok(())
    }
}

/// Any real action forfeits the turn's chance to lay low.
#[derive(Debug)]
pub struct LayLowConsumptionHook;

impl PostExecutionHook for LayLowConsumptionHook {
    fn name(&self) -> &'static str {
        "lay_low_consumption"
    }

    fn priority(&self) -> i32 {
        10
    }

    fn should_trigger(&self, delta: &StateDelta) -> bool {
        !delta.action.is_turn_boundary() && !matches!(delta.action, Action::Pr(PrAction::LayLow))
    }

    fn apply(
        &self,
        state: &mut GameState,
        _delta: &StateDelta,
        _env: &GameEnv<'_>,
    ) -> Result<(), OracleError> {
        let turn = &mut state.active_player_mut().turn;
        turn.clear(TurnFlags::CAN_LAY_LOW);
        turn.mark(TurnFlags::HAS_ACTED);
        Ok(())
    }
}

/// Returns the default set of hooks that should be applied after every action execution.
/// Hooks are returned in an Arc for efficient sharing without cloning.
pub fn default_hooks() -> Arc<[Arc<dyn PostExecutionHook>]> {
    let mut hooks: Vec<Arc<dyn PostExecutionHook>> = vec![
        Arc::new(ZeitgeistMilestoneHook),
        Arc::new(ZeitgeistEffectsHook),
        Arc::new(LayLowConsumptionHook),
    ];

    // Sort by priority (lower values first)
    hooks.sort_by_key(|h| h.priority());

    hooks.into()
}
