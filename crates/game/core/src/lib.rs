//! Deterministic rules engine for the Starving Artist career game.
//!
//! `starving-core` defines the canonical rules (actions, engine, game state)
//! and exposes pure APIs that can be reused by frontends and offline tools.
//! All state mutation flows through [`engine::GameEngine`]; randomness and
//! catalog data are injected through the oracles in [`env`].
pub mod action;
pub mod cards;
pub mod config;
pub mod effect;
pub mod engine;
pub mod env;
pub mod error;
pub mod minor_works;
pub mod state;
pub mod zeitgeist;

pub use action::{
    Action, ActionError, ActionTransition, AmateurAction, DowntimeAction, DreamerAction,
    HomeAction, JobAction, PrAction, ProAction, TurnAction, ZeitgeistAction,
};
pub use cards::{HomeCard, ProCard, ProOutcome, ProfDevCard, SocialCard, SocialChoice};
pub use config::GameConfig;
pub use effect::Effect;
pub use engine::{
    ExecuteError, ExecutionOutcome, GameEngine, PostExecutionHook, TransitionPhase,
    TransitionPhaseError, apply,
};
pub use env::{CatalogOracle, CatalogSnapshot, Env, GameEnv, JobDefinition, PcgRng, RngOracle};
pub use error::{ErrorContext, ErrorSeverity, GameError};
pub use minor_works::{MinorWorkKind, MinorWorkTemplate};
pub use state::{
    ArtPath, GameState, GameStatus, JobId, LastResult, LossReason, PlayerId, PlayerSetup,
    PlayerState, Stage, StartingDecks, StateDelta, Stat, WorkId,
};
pub use zeitgeist::ZeitgeistKind;
