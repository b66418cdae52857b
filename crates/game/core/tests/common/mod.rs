#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::Mutex;

use starving_core::env::{CatalogSnapshot, Env, JobDefinition, RngOracle};
use starving_core::{
    Action, ArtPath, Effect, ExecuteError, ExecutionOutcome, GameConfig, GameEngine, GameState,
    JobId, MinorWorkKind, MinorWorkTemplate, PlayerSetup, StartingDecks, Stat, WorkId,
};

/// Dice that return scripted faces, then a fixed fallback face forever.
pub struct ScriptedRng {
    faces: Mutex<VecDeque<u32>>,
    fallback: u32,
}

impl ScriptedRng {
    pub fn always(face: u32) -> Self {
        Self::script(&[], face)
    }

    pub fn script(faces: &[u32], fallback: u32) -> Self {
        Self {
            faces: Mutex::new(faces.iter().copied().collect()),
            fallback,
        }
    }
}

impl RngOracle for ScriptedRng {
    // `roll_die` adds one, so face `n` is produced by returning `n - 1`.
    fn next_u32(&self, _seed: u64) -> u32 {
        let face = self
            .faces
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(self.fallback);
        face - 1
    }
}

pub fn jobs() -> Vec<JobDefinition> {
    vec![
        JobDefinition::new(
            "job_teacher",
            "Teacher",
            vec![
                Effect::stat(Stat::Money, 1),
                Effect::stat(Stat::Inspiration, 2),
                Effect::time(-2),
            ],
        ),
        JobDefinition::new(
            "job_admin",
            "Admin",
            vec![
                Effect::stat(Stat::Money, 1),
                Effect::stat(Stat::Inspiration, -2),
                Effect::stat(Stat::Food, 1),
            ],
        ),
    ]
}

pub fn author_templates() -> Vec<MinorWorkTemplate> {
    vec![
        MinorWorkTemplate {
            id: WorkId::from("mw_author_quick"),
            name: "Microfiction Thread".into(),
            art_path: ArtPath::Author,
            kind: MinorWorkKind::Quick,
            progress_target: 2,
            on_complete_effects: vec![Effect::stat(Stat::Inspiration, 1)],
            effects_per_turn: Vec::new(),
        },
        MinorWorkTemplate {
            id: WorkId::from("mw_author_career"),
            name: "Serial Newsletter".into(),
            art_path: ArtPath::Author,
            kind: MinorWorkKind::Career,
            progress_target: 4,
            on_complete_effects: Vec::new(),
            effects_per_turn: vec![Effect::stat(Stat::Money, 1)],
        },
        MinorWorkTemplate {
            id: WorkId::from("mw_author_spotlight"),
            name: "Short Story Collection".into(),
            art_path: ArtPath::Author,
            kind: MinorWorkKind::Spotlight,
            progress_target: 5,
            on_complete_effects: vec![Effect::stat(Stat::Money, 3)],
            effects_per_turn: Vec::new(),
        },
    ]
}

pub fn catalog() -> CatalogSnapshot {
    CatalogSnapshot::new(jobs(), author_templates())
}

pub fn new_game(players: &[(&str, &str)], decks: StartingDecks, config: GameConfig) -> GameState {
    let setups = players
        .iter()
        .map(|(name, path)| PlayerSetup::new(*name, path))
        .collect();
    let job_ids = jobs().into_iter().map(|job| job.id).collect::<Vec<JobId>>();
    GameState::new(config, setups, decks, job_ids, 7).unwrap()
}

/// A game plus the oracles needed to drive it.
pub struct Harness {
    pub state: GameState,
    pub catalog: CatalogSnapshot,
    pub rng: ScriptedRng,
}

impl Harness {
    pub fn new(state: GameState, rng: ScriptedRng) -> Self {
        Self {
            state,
            catalog: catalog(),
            rng,
        }
    }

    pub fn solo(path: &str, rng: ScriptedRng) -> Self {
        Self::new(
            new_game(&[("Ada", path)], StartingDecks::default(), GameConfig::default()),
            rng,
        )
    }

    pub fn exec(&mut self, action: impl Into<Action>) -> Result<ExecutionOutcome, ExecuteError> {
        let env = Env::with_all(&self.catalog, &self.rng).into_game_env();
        GameEngine::new(&mut self.state).execute(env, &action.into())
    }

    pub fn ok(&mut self, action: impl Into<Action>) -> ExecutionOutcome {
        let action = action.into();
        let name = action.name();
        self.exec(action)
            .unwrap_or_else(|error| panic!("{name} should succeed: {error}"))
    }
}
