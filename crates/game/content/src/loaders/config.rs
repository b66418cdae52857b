//! Game configuration loader.

use std::path::Path;

use starving_core::GameConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for game configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    ///
    /// Missing sections and keys fall back to the standard tuning.
    pub fn load(path: &Path) -> LoadResult<GameConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<GameConfig> {
        let config: GameConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;

        if config.home.roll_sequence.is_empty() {
            anyhow::bail!("home.roll_sequence must name at least one roll target");
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_config_keeps_defaults() {
        let config = ConfigLoader::parse(
            r#"
            [global]
            max_turns = 25

            [dreamer.advance_cost]
            money = 3
            "#,
        )
        .unwrap();

        assert_eq!(config.global.max_turns, 25);
        assert_eq!(config.dreamer.advance_cost.money, 3);
        assert_eq!(config.dreamer.advance_cost.inspiration, 0);
        assert_eq!(config.home.roll_sequence, vec![4, 3, 2]);
    }

    #[test]
    fn empty_roll_sequence_is_rejected() {
        let error = ConfigLoader::parse("[home]\nroll_sequence = []\n").unwrap_err();
        assert!(error.to_string().contains("roll_sequence"));
    }
}
