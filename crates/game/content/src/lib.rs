//! Data-driven content definitions and loaders.
//!
//! This crate houses the static catalog for Starving Artist and loaders for
//! RON/TOML data files:
//! - Jobs and Minor Work templates (built in, or data-driven via RON)
//! - Starting decks for the four stages (data-driven via RON)
//! - Game configuration (data-driven via TOML)
//!
//! Content is consumed through the core oracles and never mutated by the engine.

pub mod builtin;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use builtin::{builtin_catalog, builtin_jobs, builtin_minor_works, sample_decks};

#[cfg(feature = "loaders")]
pub use loaders::{CatalogLoader, ConfigLoader, ContentFactory, DeckLoader, GameContent};
