//! Content loaders for reading game data from files.
//!
//! This module converts RON/TOML files into the plain core types the engine
//! consumes: [`starving_core::GameConfig`], [`starving_core::StartingDecks`]
//! and a [`starving_core::CatalogSnapshot`].

pub mod catalog;
pub mod config;
pub mod decks;
pub mod factory;

pub use catalog::CatalogLoader;
pub use config::ConfigLoader;
pub use decks::DeckLoader;
pub use factory::{ContentFactory, GameContent};

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
