//! Drives one self-play game through the engine.

use std::collections::{BTreeMap, HashMap};

use anyhow::Context;
use starving_content::GameContent;
use starving_core::{
    Action, ArtPath, Env, GameEngine, GameError, GameState, PcgRng, PlayerSetup, action,
};
use tracing::{debug, info};

use crate::policy::Policy;
use crate::report::GameReport;

/// How often one exact action may be dispatched within a single turn.
const REPEAT_LIMIT: u32 = 3;

/// Batch-wide settings for [`Runner::play`].
#[derive(Clone, Copy, Debug)]
pub struct RunSettings {
    pub players: usize,
    /// Hard cap on dispatched actions per game.
    pub max_actions: u32,
}

pub struct Runner<'a, P> {
    content: &'a GameContent,
    policy: P,
    settings: RunSettings,
}

impl<'a, P: Policy> Runner<'a, P> {
    pub fn new(content: &'a GameContent, policy: P, settings: RunSettings) -> Self {
        Self {
            content,
            policy,
            settings,
        }
    }

    pub fn policy(&self) -> &P {
        &self.policy
    }

    /// Seats for a game: art paths rotate so every discipline gets played.
    fn seats(&self, seed: u64) -> Vec<PlayerSetup> {
        (0..self.settings.players)
            .map(|seat| {
                let art_path = ArtPath::ALL[(seed as usize + seat) % ArtPath::ALL.len()];
                PlayerSetup {
                    name: format!("Artist {}", seat + 1),
                    art_path,
                }
            })
            .collect()
    }

    /// Plays one game to completion or to the action cap.
    pub fn play(&self, seed: u64) -> anyhow::Result<GameReport> {
        let mut state = GameState::new(
            self.content.config.clone(),
            self.seats(seed),
            self.content.decks.clone(),
            self.content.job_ids(),
            seed,
        )
        .with_context(|| format!("creating game {seed}"))?;

        let rng = PcgRng;
        let env = Env::with_all(&self.content.catalog, &rng);
        let mut counts: BTreeMap<&'static str, u32> = BTreeMap::new();
        let mut attempts: HashMap<Action, u32> = HashMap::new();
        let mut dispatched = 0;

        // Later turns are opened by END_TURN itself.
        GameEngine::new(&mut state)
            .execute(env.as_game_env(), &Action::START_TURN)
            .with_context(|| format!("opening game {seed}"))?;
        counts.insert(Action::START_TURN.name(), 1);

        while !state.is_over() && dispatched < self.settings.max_actions {
            let game_env = env.as_game_env();
            let action = self
                .policy
                .candidates(&state, &game_env)
                .into_iter()
                .filter(|candidate| attempts.get(candidate).copied().unwrap_or(0) < REPEAT_LIMIT)
                .find(|candidate| action::validate(candidate, &state, &game_env).is_ok())
                .unwrap_or(Action::END_TURN);
            *attempts.entry(action.clone()).or_default() += 1;

            let seat = (state.turn, state.active_player_index);
            match GameEngine::new(&mut state).execute(game_env, &action) {
                Ok(_) => *counts.entry(action.name()).or_default() += 1,
                Err(error) => debug!(
                    seed,
                    action = action.name(),
                    code = error.error_code(),
                    %error,
                    "policy action rejected"
                ),
            }
            dispatched += 1;

            if seat != (state.turn, state.active_player_index) {
                attempts.clear();
            }
        }

        info!(
            seed,
            status = %state.status,
            turns = state.turn,
            actions = dispatched,
            "game finished"
        );
        Ok(GameReport::new(seed, &state, counts))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::policy::Heuristic;
    use starving_core::GameStatus;

    fn settings(players: usize) -> RunSettings {
        RunSettings {
            players,
            max_actions: 20_000,
        }
    }

    #[test]
    fn games_end_within_the_turn_limit() {
        let content = GameContent::builtin();
        let runner = Runner::new(&content, Heuristic, settings(2));

        let report = runner.play(3).unwrap();

        assert!(!report.truncated);
        assert_ne!(report.status, GameStatus::InProgress);
        assert!(report.turns <= content.config.global.max_turns + 1);
        assert_eq!(report.action_counts.get("START_TURN"), Some(&1));
    }

    #[test]
    fn same_seed_replays_identically() {
        let content = GameContent::builtin();
        let runner = Runner::new(&content, Heuristic, settings(3));

        assert_eq!(runner.play(42).unwrap(), runner.play(42).unwrap());
    }

    #[test]
    fn action_cap_truncates_the_game() {
        let content = GameContent::builtin();
        let runner = Runner::new(
            &content,
            Heuristic,
            RunSettings {
                players: 1,
                max_actions: 4,
            },
        );

        let report = runner.play(1).unwrap();

        assert!(report.truncated);
        assert_eq!(report.status, GameStatus::InProgress);
    }

    #[test]
    fn zero_players_is_an_error() {
        let content = GameContent::builtin();
        let runner = Runner::new(&content, Heuristic, settings(0));

        let error = runner.play(9).unwrap_err();
        assert!(format!("{error:#}").contains("creating game 9"));
    }

    #[test]
    fn seats_rotate_through_art_paths() {
        let content = GameContent::builtin();
        let runner = Runner::new(&content, Heuristic, settings(2));

        let seats = runner.seats(1);
        assert_eq!(seats[0].art_path, ArtPath::ALL[1]);
        assert_eq!(seats[1].art_path, ArtPath::ALL[2]);
    }
}
