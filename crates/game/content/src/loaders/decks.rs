//! Starting deck loader.

use std::collections::HashSet;
use std::path::Path;

use starving_core::StartingDecks;
use starving_core::state::CardId;

use crate::loaders::{LoadResult, read_file};

/// Loader for the four stage decks from a RON file.
///
/// ```ron
/// (
///     home: [(id: "home_001", name: "Birthday Check", effects: [{"type": "stat", "stat": "money", "delta": 2}])],
///     social: [],
///     prof_dev: [],
///     pro: [],
/// )
/// ```
///
/// Effects use map syntax so their `type` tag survives RON parsing.
pub struct DeckLoader;

impl DeckLoader {
    pub fn load(path: &Path) -> LoadResult<StartingDecks> {
        let content = read_file(path)?;
        Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("Failed to load decks from {}: {}", path.display(), e))
    }

    pub fn parse(content: &str) -> LoadResult<StartingDecks> {
        let decks: StartingDecks = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse decks RON: {}", e))?;

        let ids = decks
            .home
            .iter()
            .map(|card| &card.id)
            .chain(decks.social.iter().map(|card| &card.id))
            .chain(decks.prof_dev.iter().map(|card| &card.id))
            .chain(decks.pro.iter().map(|card| &card.id));
        ensure_unique(ids)?;

        tracing::debug!(
            home = decks.home.len(),
            social = decks.social.len(),
            prof_dev = decks.prof_dev.len(),
            pro = decks.pro.len(),
            "decks parsed"
        );
        Ok(decks)
    }
}

fn ensure_unique<'a>(ids: impl Iterator<Item = &'a CardId>) -> LoadResult<()> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            anyhow::bail!("Duplicate card id {}", id);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use starving_core::{Effect, Stat};

    #[test]
    fn parses_cards_with_optional_fields() {
        let decks = DeckLoader::parse(
            r#"(
                home: [
                    (id: "home_001", effects: [{"type": "stat", "stat": "money", "delta": 2}]),
                ],
                social: [
                    (id: "soc_001", time_cost: Some(2), allowed_paths: [musician]),
                ],
                pro: [
                    (id: "pro_001", fail_effects: Some([{"type": "masterwork", "delta": -1}])),
                ],
            )"#,
        )
        .unwrap();

        assert_eq!(decks.home[0].effects, vec![Effect::stat(Stat::Money, 2)]);
        assert_eq!(decks.social[0].time_cost(), 2);
        assert!(decks.prof_dev.is_empty());
        assert!(decks.pro[0].is_branching());
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let error = DeckLoader::parse(
            r#"(home: [(id: "card_001")], pro: [(id: "card_001")])"#,
        )
        .unwrap_err();
        assert!(error.to_string().contains("card_001"));
    }
}
