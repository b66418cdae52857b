//! Content factory for building oracles from data files.

use std::path::{Path, PathBuf};

use anyhow::Context;
use starving_core::{CatalogSnapshot, GameConfig, JobId, StartingDecks};

use crate::builtin::{builtin_catalog, sample_decks};
use crate::loaders::{CatalogLoader, ConfigLoader, DeckLoader, LoadResult};

/// Everything needed to set up a game.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameContent {
    pub config: GameConfig,
    pub decks: StartingDecks,
    pub catalog: CatalogSnapshot,
}

impl GameContent {
    /// Standard tuning with the built-in catalog and sample decks.
    pub fn builtin() -> Self {
        Self {
            config: GameConfig::default(),
            decks: sample_decks(),
            catalog: builtin_catalog(),
        }
    }

    /// Job ids in catalog order, used to seed the job deck.
    pub fn job_ids(&self) -> Vec<JobId> {
        self.catalog.jobs.iter().map(|job| job.id.clone()).collect()
    }
}

/// Content factory that loads all game content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml
/// ├── catalog.ron
/// └── decks.ron
/// ```
///
/// Any file that is missing falls back to the built-in content.
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Factory for the `data/` directory shipped with this crate.
    pub fn bundled() -> Self {
        Self::new(Path::new(env!("CARGO_MANIFEST_DIR")).join("data"))
    }

    /// Load game configuration from `config.toml`.
    pub fn load_config(&self) -> LoadResult<GameConfig> {
        let path = self.data_dir.join("config.toml");
        if !path.exists() {
            return Ok(GameConfig::default());
        }
        ConfigLoader::load(&path)
    }

    /// Load the four stage decks from `decks.ron`.
    pub fn load_decks(&self) -> LoadResult<StartingDecks> {
        let path = self.data_dir.join("decks.ron");
        if !path.exists() {
            return Ok(sample_decks());
        }
        DeckLoader::load(&path)
    }

    /// Load jobs and Minor Work templates from `catalog.ron`.
    pub fn load_catalog(&self) -> LoadResult<CatalogSnapshot> {
        let path = self.data_dir.join("catalog.ron");
        if !path.exists() {
            return Ok(builtin_catalog());
        }
        CatalogLoader::load(&path)
    }

    pub fn load_all(&self) -> LoadResult<GameContent> {
        let content = GameContent {
            config: self.load_config().context("loading config")?,
            decks: self.load_decks().context("loading decks")?,
            catalog: self.load_catalog().context("loading catalog")?,
        };
        tracing::info!(
            data_dir = %self.data_dir.display(),
            jobs = content.catalog.jobs.len(),
            "content loaded"
        );
        Ok(content)
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}
