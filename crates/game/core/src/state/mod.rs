//! Authoritative game state representation.
//!
//! This module owns the data structures that describe players, decks, the job
//! market and the Zeitgeist. Callers clone or query this state but mutate it
//! exclusively through the engine.
mod deck;
pub mod delta;
mod error;
mod ids;
mod player;
mod resources;
mod results;
mod turn;

pub use deck::Deck;
pub use delta::{PlayerChanges, PlayerFields, StageChange, StateDelta, TableFields};
pub use error::StateError;
pub use ids::{CardId, JobId, PlayerId, WorkId};
pub use player::{ArtPath, JobSlot, PlayerState, Stage};
pub use resources::{Resources, Stat, StatCost};
pub use results::{LastResult, LastResults, RollCheck};
pub use turn::{TurnFlags, TurnRecord};

use std::collections::BTreeMap;

use crate::cards::{HomeCard, ProCard, ProfDevCard, SocialCard};
use crate::config::GameConfig;
use crate::env::{RngOracle, RollPurpose, compute_seed};
use crate::zeitgeist::ZeitgeistState;

#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum GameStatus {
    #[default]
    InProgress,
    Won,
    Lost,
}

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString, strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum LossReason {
    MaxTurns,
}

/// Name and discipline for one seat at game creation.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlayerSetup {
    pub name: String,
    pub art_path: ArtPath,
}

impl PlayerSetup {
    /// `art_path` is normalized, so aliases such as `writer` are accepted.
    pub fn new(name: impl Into<String>, art_path: &str) -> Self {
        Self {
            name: name.into(),
            art_path: ArtPath::normalize(art_path),
        }
    }
}

/// Card lists for the four stage decks, first card on top.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct StartingDecks {
    pub home: Vec<HomeCard>,
    pub social: Vec<SocialCard>,
    pub prof_dev: Vec<ProfDevCard>,
    pub pro: Vec<ProCard>,
}

/// Canonical snapshot of the deterministic game state.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameState {
    /// Set once at game creation. Combined with `rng_nonce` for every roll.
    pub game_seed: u64,
    /// Number of random draws taken so far.
    pub rng_nonce: u64,

    /// Round counter, starting at 1.
    pub turn: u32,
    pub active_player_index: usize,
    pub players: Vec<PlayerState>,
    pub config: GameConfig,

    pub home_deck: Deck<HomeCard>,
    pub social_deck: Deck<SocialCard>,
    pub prof_dev_deck: Deck<ProfDevCard>,
    pub pro_deck: Deck<ProCard>,
    /// Jobs nobody currently holds.
    pub job_deck: Vec<JobId>,

    pub status: GameStatus,
    pub winner: Option<PlayerId>,
    pub loss_reason: Option<LossReason>,

    pub zeitgeist: ZeitgeistState,
}

impl GameState {
    /// Creates a fresh game. Seat `i` becomes player `P{i+1}` on the Home stage.
    ///
    /// The first turn is not started; dispatch `START_TURN` before acting.
    pub fn new(
        config: GameConfig,
        players: Vec<PlayerSetup>,
        decks: StartingDecks,
        jobs: Vec<JobId>,
        game_seed: u64,
    ) -> Result<Self, StateError> {
        if players.is_empty() {
            return Err(StateError::NoPlayers);
        }

        let players = players
            .into_iter()
            .enumerate()
            .map(|(seat, setup)| {
                PlayerState::new(PlayerId::for_seat(seat), setup.name, setup.art_path)
            })
            .collect();

        Ok(Self {
            game_seed,
            rng_nonce: 0,
            turn: 1,
            active_player_index: 0,
            players,
            config,
            home_deck: Deck::from_top(decks.home),
            social_deck: Deck::from_top(decks.social),
            prof_dev_deck: Deck::from_top(decks.prof_dev),
            pro_deck: Deck::from_top(decks.pro),
            job_deck: jobs,
            status: GameStatus::InProgress,
            winner: None,
            loss_reason: None,
            zeitgeist: ZeitgeistState::default(),
        })
    }

    pub fn is_over(&self) -> bool {
        self.status != GameStatus::InProgress
    }

    /// Player at `active_player_index`.
    ///
    /// # Panics
    ///
    /// Panics if the active index is out of range, which [`Self::check_invariants`] rules out.
    pub fn active_player(&self) -> &PlayerState {
        &self.players[self.active_player_index]
    }

    pub fn active_player_mut(&mut self) -> &mut PlayerState {
        &mut self.players[self.active_player_index]
    }

    pub fn player(&self, id: PlayerId) -> Option<&PlayerState> {
        self.players.iter().find(|player| player.id == id)
    }

    pub fn player_mut(&mut self, id: PlayerId) -> Option<&mut PlayerState> {
        self.players.iter_mut().find(|player| player.id == id)
    }

    /// Derives the seed for the next random draw and advances the nonce.
    pub fn next_seed(&mut self, purpose: RollPurpose) -> u64 {
        let seed = compute_seed(
            self.game_seed,
            self.rng_nonce,
            self.active_player_index as u32,
            purpose,
        );
        self.rng_nonce += 1;
        seed
    }

    pub fn roll_d6<R>(&mut self, rng: &R, purpose: RollPurpose) -> u32
    where
        R: RngOracle + ?Sized,
    {
        let roll = rng.roll_d6(self.next_seed(purpose));
        tracing::trace!(?purpose, roll, seat = self.active_player_index, "rolled d6");
        roll
    }

    /// Reshuffles the selected deck's discard pile if its draw pile is empty.
    pub fn ready_deck<C, R, F>(&mut self, rng: &R, select: F)
    where
        C: Clone,
        R: RngOracle + ?Sized,
        F: Fn(&mut GameState) -> &mut Deck<C>,
    {
        self.ready_deck_for(rng, select, |_| true);
    }

    /// Reshuffles the selected deck when every card matching `eligible` sits
    /// in the discard pile.
    pub fn ready_deck_for<C, R, F, E>(&mut self, rng: &R, select: F, eligible: E)
    where
        C: Clone,
        R: RngOracle + ?Sized,
        F: Fn(&mut GameState) -> &mut Deck<C>,
        E: Fn(&C) -> bool,
    {
        if select(self).needs_refill_for(eligible) {
            let seed = self.next_seed(RollPurpose::Shuffle);
            select(self).refill(rng, seed);
        }
    }

    /// Verifies the cross-player invariants the type system cannot express.
    pub fn check_invariants(&self) -> Result<(), StateError> {
        if self.active_player_index >= self.players.len() {
            return Err(StateError::ActiveIndexOutOfRange {
                index: self.active_player_index,
                players: self.players.len(),
            });
        }

        let mut holders: BTreeMap<&JobId, Vec<PlayerId>> = BTreeMap::new();
        for player in &self.players {
            if let Some(job) = &player.job.job_id {
                holders.entry(job).or_default().push(player.id);
            }
        }
        for (job, held_by) in holders {
            if held_by.len() > 1 {
                return Err(StateError::JobHeldTwice {
                    job: job.clone(),
                    holders: held_by.len(),
                });
            }
            if self.job_deck.contains(job) {
                return Err(StateError::JobHeldAndAvailable {
                    job: job.clone(),
                    holder: held_by[0],
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_player_game() -> GameState {
        GameState::new(
            GameConfig::default(),
            vec![
                PlayerSetup::new("Ada", "writer"),
                PlayerSetup::new("Bo", "dance"),
            ],
            StartingDecks::default(),
            vec![JobId::from("job_teacher"), JobId::from("job_admin")],
            11,
        )
        .expect("two players is a valid game")
    }

    #[test]
    fn new_game_seats_players_at_home() {
        let state = two_player_game();

        assert_eq!(state.turn, 1);
        assert_eq!(state.active_player_index, 0);
        assert_eq!(state.players[0].id, PlayerId(1));
        assert_eq!(state.players[1].id.to_string(), "P2");
        assert_eq!(state.players[0].art_path, ArtPath::Author);
        assert_eq!(state.players[1].art_path, ArtPath::Dancer);
        assert!(state.players.iter().all(|p| p.stage == Stage::Home));
        assert_eq!(state.status, GameStatus::InProgress);
        assert!(state.check_invariants().is_ok());
    }

    #[test]
    fn empty_player_list_is_rejected() {
        let result = GameState::new(
            GameConfig::default(),
            Vec::new(),
            StartingDecks::default(),
            Vec::new(),
            0,
        );
        assert_eq!(result, Err(StateError::NoPlayers));
    }

    #[test]
    fn job_exclusivity_violations_are_detected() {
        let mut state = two_player_game();
        state.players[0].job.job_id = Some(JobId::from("job_teacher"));
        assert!(matches!(
            state.check_invariants(),
            Err(StateError::JobHeldAndAvailable { .. })
        ));

        state.job_deck.retain(|job| job.as_str() != "job_teacher");
        state.players[1].job.job_id = Some(JobId::from("job_teacher"));
        assert!(matches!(
            state.check_invariants(),
            Err(StateError::JobHeldTwice { holders: 2, .. })
        ));
    }

    #[test]
    fn seeds_advance_with_each_draw() {
        let mut state = two_player_game();
        let first = state.next_seed(RollPurpose::TimeRoll);
        let second = state.next_seed(RollPurpose::TimeRoll);

        assert_ne!(first, second);
        assert_eq!(state.rng_nonce, 2);
    }
}
