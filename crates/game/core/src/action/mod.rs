//! Action vocabulary.
//!
//! Every action is a closed, tagged variant grouped by the rules area that
//! owns it. Each group implements [`ActionTransition`]; the engine routes an
//! [`Action`] to exactly one group and wraps any rejection with the phase that
//! produced it.
//!
//! With the `serde` feature, actions serialize as flat tagged objects such as
//! `{"type": "CHOOSE_JOB", "job_id": "job_teacher"}`.

mod amateur;
mod downtime;
mod dreamer;
mod error;
mod home;
mod job;
mod pr;
mod pro;
mod transition;
mod turn;
mod zeitgeist;

pub use error::ActionError;
pub use transition::ActionTransition;

use crate::cards::ProOutcome;
use crate::env::GameEnv;
use crate::state::{GameState, JobId, PlayerId, Stage, Stat, TurnFlags, WorkId};

/// Turn lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::IntoStaticStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")
)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum TurnAction {
    StartTurn,
    /// Refused while a Pro player still owes a maintenance check.
    EndTurn,
    RollTime,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::IntoStaticStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")
)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum HomeAction {
    DrawHomeCard,
    AttemptLeaveHome,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::IntoStaticStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")
)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum DreamerAction {
    DrawSocialCard,
    AttendSocialEvent,
    SkipSocialEvent,
    AttemptAdvanceDreamer,
}

/// Job market. A job survives stage changes, so these are not tied to Dreamer.
#[derive(Clone, Debug, PartialEq, Eq, Hash, strum::IntoStaticStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")
)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum JobAction {
    ChooseJob { job_id: JobId },
    QuitJob,
    GoToWork,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, strum::IntoStaticStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")
)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum AmateurAction {
    TakeProfDev,
    StartMinorWork { work_id: WorkId },
    ProgressMinorWork,
    CompilePortfolio,
    AttemptAdvancePro,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::IntoStaticStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")
)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum ProAction {
    /// Spends `time_spent` Time (all remaining Time when absent).
    WorkOnMasterwork { time_spent: Option<u32> },
    DrawProCard,
    ResolveProCardChoice { outcome: ProOutcome },
    ProMaintenanceCheck,
}

/// Scandal management.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::IntoStaticStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")
)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum PrAction {
    LayLow,
    PlantHitPiece { target: PlayerId },
    /// Removes up to `amount` Scandal (all of it when absent).
    BuyoutScandal { amount: Option<u32> },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::IntoStaticStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")
)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum DowntimeAction {
    #[cfg_attr(feature = "serde", serde(rename = "DOWNTIME_PRACTICE"))]
    #[strum(serialize = "DOWNTIME_PRACTICE")]
    Practice,
    Sleep,
    EatAtHome,
}

impl DowntimeAction {
    pub fn stat(self) -> Stat {
        match self {
            Self::Practice => Stat::Craft,
            Self::Sleep => Stat::Inspiration,
            Self::EatAtHome => Stat::Food,
        }
    }

    fn flag(self) -> TurnFlags {
        match self {
            Self::Practice => TurnFlags::PRACTICED,
            Self::Sleep => TurnFlags::SLEPT,
            Self::EatAtHome => TurnFlags::ATE_AT_HOME,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::IntoStaticStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")
)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum ZeitgeistAction {
    AiBoomConvert { into: Stat },
}

/// Any action a player can dispatch.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum Action {
    Turn(TurnAction),
    Home(HomeAction),
    Dreamer(DreamerAction),
    Job(JobAction),
    Amateur(AmateurAction),
    Pro(ProAction),
    Pr(PrAction),
    Downtime(DowntimeAction),
    Zeitgeist(ZeitgeistAction),
}

macro_rules! impl_from_group {
    ($($group:ident => $variant:ident),* $(,)?) => {
        $(
            impl From<$group> for Action {
                fn from(action: $group) -> Self {
                    Action::$variant(action)
                }
            }
        )*
    };
}

impl_from_group! {
    TurnAction => Turn,
    HomeAction => Home,
    DreamerAction => Dreamer,
    JobAction => Job,
    AmateurAction => Amateur,
    ProAction => Pro,
    PrAction => Pr,
    DowntimeAction => Downtime,
    ZeitgeistAction => Zeitgeist,
}

impl Action {
    pub const START_TURN: Action = Action::Turn(TurnAction::StartTurn);
    pub const END_TURN: Action = Action::Turn(TurnAction::EndTurn);
    pub const ROLL_TIME: Action = Action::Turn(TurnAction::RollTime);

    /// Wire name of the action, e.g. `DRAW_HOME_CARD`.
    pub fn name(&self) -> &'static str {
        match self {
            Action::Turn(action) => action.into(),
            Action::Home(action) => action.into(),
            Action::Dreamer(action) => action.into(),
            Action::Job(action) => action.into(),
            Action::Amateur(action) => action.into(),
            Action::Pro(action) => action.into(),
            Action::Pr(action) => action.into(),
            Action::Downtime(action) => action.into(),
            Action::Zeitgeist(action) => action.into(),
        }
    }

    /// `START_TURN` and `END_TURN`.
    pub fn is_turn_boundary(&self) -> bool {
        matches!(
            self,
            Action::Turn(TurnAction::StartTurn | TurnAction::EndTurn)
        )
    }
}

// Shared precondition checks for the active player.

fn require_stage(state: &GameState, stage: Stage) -> Result<(), ActionError> {
    if state.active_player().stage != stage {
        return Err(ActionError::wrong_stage(state));
    }
    Ok(())
}

fn require_left_home(state: &GameState) -> Result<(), ActionError> {
    if state.active_player().stage == Stage::Home {
        return Err(ActionError::wrong_stage(state));
    }
    Ok(())
}

fn require_unused(
    state: &GameState,
    flag: TurnFlags,
    action: &'static str,
) -> Result<(), ActionError> {
    if state.active_player().turn.has(flag) {
        return Err(ActionError::once_per_turn(state, action));
    }
    Ok(())
}

fn require_time(state: &GameState, needed: u32) -> Result<(), ActionError> {
    if state.active_player().time_this_turn < needed {
        return Err(ActionError::insufficient_time(state, needed));
    }
    Ok(())
}

/// Ends the game in the active player's favour once their Masterwork is done.
fn check_masterwork_win(state: &mut GameState) {
    let target = state.config.pro.masterwork_target_progress;
    let player = state.active_player();
    if player.stage == Stage::Pro && player.masterwork_progress >= target {
        let winner = player.id;
        state.status = crate::state::GameStatus::Won;
        state.winner = Some(winner);
        tracing::info!(%winner, turn = state.turn, "masterwork complete");
    }
}

/// Runs only the pre-validation phase of `action`.
///
/// Lets callers list legal actions without cloning the state. A pass here does
/// not guarantee success: deck contents and dice are only known at apply time.
pub fn validate(action: &Action, state: &GameState, env: &GameEnv<'_>) -> Result<(), ActionError> {
    match action {
        Action::Turn(action) => action.pre_validate(state, env),
        Action::Home(action) => action.pre_validate(state, env),
        Action::Dreamer(action) => action.pre_validate(state, env),
        Action::Job(action) => action.pre_validate(state, env),
        Action::Amateur(action) => action.pre_validate(state, env),
        Action::Pro(action) => action.pre_validate(state, env),
        Action::Pr(action) => action.pre_validate(state, env),
        Action::Downtime(action) => action.pre_validate(state, env),
        Action::Zeitgeist(action) => action.pre_validate(state, env),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_match_wire_vocabulary() {
        assert_eq!(Action::START_TURN.name(), "START_TURN");
        assert_eq!(Action::from(HomeAction::DrawHomeCard).name(), "DRAW_HOME_CARD");
        assert_eq!(
            Action::from(JobAction::ChooseJob {
                job_id: JobId::from("job_teacher")
            })
            .name(),
            "CHOOSE_JOB"
        );
        assert_eq!(
            Action::from(ProAction::ResolveProCardChoice {
                outcome: ProOutcome::Success
            })
            .name(),
            "RESOLVE_PRO_CARD_CHOICE"
        );
        assert_eq!(Action::from(DowntimeAction::Practice).name(), "DOWNTIME_PRACTICE");
        assert_eq!(Action::from(DowntimeAction::EatAtHome).name(), "EAT_AT_HOME");
    }

    #[test]
    fn only_start_and_end_are_turn_boundaries() {
        assert!(Action::START_TURN.is_turn_boundary());
        assert!(Action::END_TURN.is_turn_boundary());
        assert!(!Action::ROLL_TIME.is_turn_boundary());
        assert!(!Action::from(PrAction::LayLow).is_turn_boundary());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn actions_serialize_as_flat_tagged_objects() {
        let action = Action::from(PrAction::BuyoutScandal { amount: None });
        let json = serde_json::to_value(&action).unwrap();
        assert_eq!(json["type"], "BUYOUT_SCANDAL");

        let parsed: Action =
            serde_json::from_str(r#"{"type":"CHOOSE_JOB","job_id":"job_admin"}"#).unwrap();
        assert_eq!(
            parsed,
            Action::Job(JobAction::ChooseJob {
                job_id: JobId::from("job_admin")
            })
        );

        let parsed: Action = serde_json::from_str(r#"{"type":"DOWNTIME_PRACTICE"}"#).unwrap();
        assert_eq!(parsed, Action::Downtime(DowntimeAction::Practice));
    }
}
