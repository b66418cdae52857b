//! JSON batch summary.

use std::collections::BTreeMap;

use serde::Serialize;
use starving_core::{ArtPath, GameState, GameStatus, LossReason, PlayerId, Stage};

/// Final standing of one seat.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PlayerSummary {
    pub id: PlayerId,
    pub name: String,
    pub art_path: ArtPath,
    pub stage: Stage,
    pub masterwork_progress: i32,
    pub money: i32,
    pub scandal: u32,
    pub minor_works_completed: u32,
}

impl PlayerSummary {
    fn from_state(state: &GameState) -> Vec<Self> {
        state
            .players
            .iter()
            .map(|player| Self {
                id: player.id,
                name: player.name.clone(),
                art_path: player.art_path,
                stage: player.stage,
                masterwork_progress: player.masterwork_progress,
                money: player.resources.money,
                scandal: player.scandal,
                minor_works_completed: player.minor_works.completed_count(),
            })
            .collect()
    }
}

/// Outcome of one simulated game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct GameReport {
    pub seed: u64,
    pub status: GameStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loss_reason: Option<LossReason>,
    pub turns: u32,
    pub winner: Option<PlayerId>,
    /// True when the action cap stopped the game before it finished.
    pub truncated: bool,
    pub players: Vec<PlayerSummary>,
    /// Accepted actions by wire name.
    pub action_counts: BTreeMap<&'static str, u32>,
}

impl GameReport {
    pub fn new(seed: u64, state: &GameState, action_counts: BTreeMap<&'static str, u32>) -> Self {
        Self {
            seed,
            status: state.status,
            loss_reason: state.loss_reason,
            turns: state.turn,
            winner: state.winner,
            truncated: !state.is_over(),
            players: PlayerSummary::from_state(state),
            action_counts,
        }
    }
}

/// Aggregate over a batch of games.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct BatchReport {
    pub games: usize,
    pub players: usize,
    pub seed_start: u64,
    pub policy: &'static str,
    pub win_rate: f64,
    pub avg_turns: f64,
    pub results: Vec<GameReport>,
}

impl BatchReport {
    pub fn new(
        players: usize,
        seed_start: u64,
        policy: &'static str,
        results: Vec<GameReport>,
    ) -> Self {
        let games = results.len();
        let wins = results
            .iter()
            .filter(|result| result.status == GameStatus::Won)
            .count();
        let turns: u64 = results.iter().map(|result| u64::from(result.turns)).sum();

        Self {
            games,
            players,
            seed_start,
            policy,
            win_rate: ratio(wins as f64, games),
            avg_turns: ratio(turns as f64, games),
            results,
        }
    }
}

fn ratio(total: f64, games: usize) -> f64 {
    if games == 0 {
        return 0.0;
    }
    total / games as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(seed: u64, status: GameStatus, turns: u32) -> GameReport {
        GameReport {
            seed,
            status,
            loss_reason: None,
            turns,
            winner: None,
            truncated: false,
            players: Vec::new(),
            action_counts: BTreeMap::new(),
        }
    }

    #[test]
    fn aggregates_win_rate_and_turns() {
        let batch = BatchReport::new(
            2,
            100,
            "heuristic",
            vec![
                report(100, GameStatus::Won, 10),
                report(101, GameStatus::Lost, 30),
            ],
        );

        assert_eq!(batch.games, 2);
        assert_eq!(batch.win_rate, 0.5);
        assert_eq!(batch.avg_turns, 20.0);
    }

    #[test]
    fn empty_batch_has_zero_rates() {
        let batch = BatchReport::new(1, 0, "heuristic", Vec::new());
        assert_eq!(batch.win_rate, 0.0);
        assert_eq!(batch.avg_turns, 0.0);
    }

    #[test]
    fn serializes_status_in_snake_case() {
        let json = serde_json::to_value(report(7, GameStatus::InProgress, 3)).unwrap();
        assert_eq!(json["status"], "in_progress");
        assert!(json.get("loss_reason").is_none());
    }
}
