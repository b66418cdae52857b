//! Job and Minor Work catalog loader.

use std::collections::{BTreeMap, HashSet};
use std::path::Path;

use serde::{Deserialize, Serialize};
use starving_core::{ArtPath, CatalogSnapshot, JobDefinition, MinorWorkKind, MinorWorkTemplate};

use crate::loaders::{LoadResult, read_file};

/// Catalog file layout: flat lists, grouped by art path after loading.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct CatalogRon {
    jobs: Vec<JobDefinition>,
    minor_works: Vec<MinorWorkTemplate>,
}

/// Loader for the job and Minor Work catalog from a RON file.
pub struct CatalogLoader;

impl CatalogLoader {
    pub fn load(path: &Path) -> LoadResult<CatalogSnapshot> {
        let content = read_file(path)?;
        Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("Failed to load catalog from {}: {}", path.display(), e))
    }

    pub fn parse(content: &str) -> LoadResult<CatalogSnapshot> {
        let data: CatalogRon = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse catalog RON: {}", e))?;

        let mut job_ids = HashSet::new();
        for job in &data.jobs {
            if !job_ids.insert(&job.id) {
                anyhow::bail!("Duplicate job id {}", job.id);
            }
        }

        // Each path needs exactly one template of each kind.
        let mut kinds: BTreeMap<ArtPath, Vec<MinorWorkKind>> = BTreeMap::new();
        for template in &data.minor_works {
            let seen = kinds.entry(template.art_path).or_default();
            if seen.contains(&template.kind) {
                anyhow::bail!(
                    "{} has more than one {} minor work",
                    template.art_path,
                    template.kind
                );
            }
            seen.push(template.kind);
        }
        for (path, seen) in &kinds {
            if seen.len() != 3 {
                tracing::warn!(%path, templates = seen.len(), "art path is missing minor works");
            }
        }

        Ok(CatalogSnapshot::new(data.jobs, data.minor_works))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use starving_core::CatalogOracle;

    const CATALOG: &str = r#"(
        jobs: [
            (id: "job_teacher", name: "Teacher", effects: [{"type": "time", "delta": -2}]),
        ],
        minor_works: [
            (
                id: "mw_dance_instagram_reel_combo",
                name: "Instagram Reel Combo",
                art_path: dancer,
                kind: quick,
                progress_target: 2,
                on_complete_effects: [{"type": "stat", "stat": "inspiration", "delta": 2}],
            ),
        ],
    )"#;

    #[test]
    fn groups_templates_by_path() {
        let catalog = CatalogLoader::parse(CATALOG).unwrap();

        assert_eq!(catalog.jobs().len(), 1);
        let dancer = catalog.minor_works(ArtPath::Dancer);
        assert_eq!(dancer.len(), 1);
        assert_eq!(dancer[0].kind, MinorWorkKind::Quick);
        assert!(dancer[0].effects_per_turn.is_empty());
    }

    #[test]
    fn duplicate_kinds_are_rejected() {
        let doubled = CATALOG.replace(
            "minor_works: [",
            r#"minor_works: [
            (id: "mw_other", name: "Other", art_path: dancer, kind: quick, progress_target: 1),"#,
        );
        assert!(CatalogLoader::parse(&doubled).is_err());
    }
}
