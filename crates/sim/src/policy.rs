//! Self-play policies.
//!
//! A policy only ranks actions. The runner filters the ranking through
//! [`starving_core::action::validate`] and falls back to `END_TURN`.

use starving_core::state::TurnFlags;
use starving_core::zeitgeist::ZeitgeistKind;
use starving_core::{
    Action, AmateurAction, CatalogOracle, DowntimeAction, DreamerAction, GameEnv, GameState,
    HomeAction, JobAction, PlayerState, PrAction, ProAction, ProOutcome, Stage, Stat,
    ZeitgeistAction,
};

/// Ranks the actions the active player would like to take, best first.
pub trait Policy {
    fn name(&self) -> &'static str;

    fn candidates(&self, state: &GameState, env: &GameEnv<'_>) -> Vec<Action>;
}

/// Resource levels below which the heuristic spends Time on downtime.
const LOW_STAT: u32 = 1;

/// Stage-aware greedy play: climb the career ladder as fast as the rules allow.
#[derive(Clone, Copy, Debug, Default)]
pub struct Heuristic;

impl Policy for Heuristic {
    fn name(&self) -> &'static str {
        "heuristic"
    }

    fn candidates(&self, state: &GameState, env: &GameEnv<'_>) -> Vec<Action> {
        let player = state.active_player();
        let mut ranked = Vec::new();

        if player.stage == Stage::Home {
            ranked.push(HomeAction::DrawHomeCard.into());
            ranked.push(HomeAction::AttemptLeaveHome.into());
            return ranked;
        }

        ranked.push(Action::ROLL_TIME);
        public_relations(state, player, &mut ranked);
        ai_boom(state, player, &mut ranked);

        match player.stage {
            Stage::Home => {}
            Stage::Dreamer => dreamer(state, player, &mut ranked),
            Stage::Amateur => amateur(player, env, &mut ranked),
            Stage::Pro => pro(player, &mut ranked),
        }

        downtime(player, &mut ranked);
        ranked
    }
}

fn public_relations(state: &GameState, player: &PlayerState, ranked: &mut Vec<Action>) {
    if player.scandal == 0 {
        return;
    }
    if player.resources.money > 0 {
        ranked.push(PrAction::BuyoutScandal { amount: None }.into());
    }
    // Laying low forfeits the rest of the turn; only worth it with no Time left.
    if player.turn.has(TurnFlags::ROLLED_TIME) && player.time_this_turn == 0 {
        ranked.push(PrAction::LayLow.into());
    }
    if !player.hit_piece_used {
        if let Some(rival) = leading_rival(state, player) {
            ranked.push(PrAction::PlantHitPiece { target: rival }.into());
        }
    }
}

/// The other Pro closest to finishing a Masterwork.
fn leading_rival(state: &GameState, player: &PlayerState) -> Option<starving_core::PlayerId> {
    state
        .players
        .iter()
        .filter(|other| other.id != player.id && other.stage == Stage::Pro)
        .max_by_key(|other| other.masterwork_progress)
        .map(|other| other.id)
}

fn ai_boom(state: &GameState, player: &PlayerState, ranked: &mut Vec<Action>) {
    if !state.zeitgeist.is_active(ZeitgeistKind::AiBoom) {
        return;
    }
    let into = player
        .focus_stat()
        .filter(|stat| *stat != Stat::Inspiration)
        .unwrap_or(Stat::Craft);
    ranked.push(ZeitgeistAction::AiBoomConvert { into }.into());
}

fn dreamer(state: &GameState, player: &PlayerState, ranked: &mut Vec<Action>) {
    if player.pending_social.is_some() {
        ranked.push(DreamerAction::AttendSocialEvent.into());
        ranked.push(DreamerAction::SkipSocialEvent.into());
    }
    if player.job.job_id.is_none() {
        let open = state
            .job_deck
            .iter()
            .find(|job| !player.job.fired_jobs.contains(job));
        if let Some(job_id) = open {
            ranked.push(
                JobAction::ChooseJob {
                    job_id: job_id.clone(),
                }
                .into(),
            );
        }
    }
    ranked.push(JobAction::GoToWork.into());
    ranked.push(DreamerAction::AttemptAdvanceDreamer.into());
    ranked.push(DreamerAction::DrawSocialCard.into());
}

fn amateur(player: &PlayerState, env: &GameEnv<'_>, ranked: &mut Vec<Action>) {
    ranked.push(AmateurAction::AttemptAdvancePro.into());
    ranked.push(AmateurAction::CompilePortfolio.into());
    ranked.push(JobAction::GoToWork.into());

    if player.minor_works.in_progress().is_some() {
        ranked.push(AmateurAction::ProgressMinorWork.into());
    } else {
        let next = env.catalog().ok().and_then(|catalog| {
            catalog
                .minor_works(player.art_path)
                .iter()
                .find(|template| !player.minor_works.has_completed(&template.id))
        });
        if let Some(template) = next {
            ranked.push(
                AmateurAction::StartMinorWork {
                    work_id: template.id.clone(),
                }
                .into(),
            );
        }
    }
    ranked.push(AmateurAction::TakeProfDev.into());
}

fn pro(player: &PlayerState, ranked: &mut Vec<Action>) {
    if player.pending_pro.is_some() {
        // Success is never worse than failure for the player resolving it.
        ranked.push(
            ProAction::ResolveProCardChoice {
                outcome: ProOutcome::Success,
            }
            .into(),
        );
    }
    ranked.push(ProAction::ProMaintenanceCheck.into());
    ranked.push(JobAction::GoToWork.into());
    ranked.push(ProAction::DrawProCard.into());
    ranked.push(ProAction::WorkOnMasterwork { time_spent: None }.into());
}

fn downtime(player: &PlayerState, ranked: &mut Vec<Action>) {
    let resources = &player.resources;
    if resources.food <= LOW_STAT {
        ranked.push(DowntimeAction::EatAtHome.into());
    }
    if resources.inspiration <= LOW_STAT {
        ranked.push(DowntimeAction::Sleep.into());
    }
    if resources.craft <= LOW_STAT {
        ranked.push(DowntimeAction::Practice.into());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use starving_content::GameContent;
    use starving_core::{Env, PcgRng, PlayerSetup};

    fn fresh_state(content: &GameContent) -> GameState {
        GameState::new(
            content.config.clone(),
            vec![PlayerSetup::new("Ada", "author")],
            content.decks.clone(),
            content.job_ids(),
            11,
        )
        .unwrap()
    }

    #[test]
    fn home_players_only_try_home_actions() {
        let content = GameContent::builtin();
        let state = fresh_state(&content);
        let env = Env::with_all(&content.catalog, &PcgRng).into_game_env();

        let ranked = Heuristic.candidates(&state, &env);

        assert_eq!(
            ranked,
            vec![
                Action::from(HomeAction::DrawHomeCard),
                Action::from(HomeAction::AttemptLeaveHome),
            ]
        );
    }

    #[test]
    fn dreamers_look_for_a_job_first() {
        let content = GameContent::builtin();
        let mut state = fresh_state(&content);
        state.players[0].stage = Stage::Dreamer;
        let env = Env::with_all(&content.catalog, &PcgRng).into_game_env();

        let ranked = Heuristic.candidates(&state, &env);

        assert_eq!(ranked[0], Action::ROLL_TIME);
        let first_job = content.job_ids()[0].clone();
        assert!(ranked.contains(&Action::from(JobAction::ChooseJob { job_id: first_job })));
    }

    #[test]
    fn amateurs_start_the_first_unfinished_work() {
        let content = GameContent::builtin();
        let mut state = fresh_state(&content);
        state.players[0].stage = Stage::Amateur;
        let env = Env::with_all(&content.catalog, &PcgRng).into_game_env();

        let ranked = Heuristic.candidates(&state, &env);

        let quick = content.catalog.minor_works(state.players[0].art_path)[0]
            .id
            .clone();
        assert!(ranked.contains(&Action::from(AmateurAction::StartMinorWork { work_id: quick })));
        assert!(!ranked.contains(&Action::from(AmateurAction::ProgressMinorWork)));
    }

    #[test]
    fn scandal_prefers_buyout_when_money_allows() {
        let content = GameContent::builtin();
        let mut state = fresh_state(&content);
        let player = &mut state.players[0];
        player.stage = Stage::Pro;
        player.scandal = 2;
        player.resources.money = 3;
        let env = Env::with_all(&content.catalog, &PcgRng).into_game_env();

        let ranked = Heuristic.candidates(&state, &env);

        assert_eq!(ranked[1], Action::from(PrAction::BuyoutScandal { amount: None }));
        assert!(!ranked.contains(&Action::from(PrAction::LayLow)));
    }
}
