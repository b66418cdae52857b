//! Owned catalog implementation.

use std::collections::BTreeMap;

use super::catalog::{CatalogOracle, JobDefinition};
use crate::minor_works::MinorWorkTemplate;
use crate::state::ArtPath;

/// Catalog backed by owned collections. Loaders and tests build one of these.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CatalogSnapshot {
    pub jobs: Vec<JobDefinition>,
    pub minor_works: BTreeMap<ArtPath, Vec<MinorWorkTemplate>>,
}

impl CatalogSnapshot {
    /// Groups `templates` by art path, each group in Quick/Career/Spotlight order.
    pub fn new(jobs: Vec<JobDefinition>, templates: Vec<MinorWorkTemplate>) -> Self {
        let mut minor_works: BTreeMap<ArtPath, Vec<MinorWorkTemplate>> = BTreeMap::new();
        for template in templates {
            minor_works
                .entry(template.art_path)
                .or_default()
                .push(template);
        }
        for group in minor_works.values_mut() {
            group.sort_by_key(|template| template.kind);
        }
        Self { jobs, minor_works }
    }
}

impl CatalogOracle for CatalogSnapshot {
    fn jobs(&self) -> &[JobDefinition] {
        &self.jobs
    }

    fn minor_works(&self, path: ArtPath) -> &[MinorWorkTemplate] {
        self.minor_works
            .get(&path)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::minor_works::MinorWorkKind;
    use crate::state::WorkId;

    fn template(path: ArtPath, kind: MinorWorkKind) -> MinorWorkTemplate {
        MinorWorkTemplate {
            id: WorkId::new(format!("{path}_{kind}")),
            name: format!("{path} {kind}"),
            art_path: path,
            kind,
            progress_target: 2,
            on_complete_effects: Vec::new(),
            effects_per_turn: Vec::new(),
        }
    }

    #[test]
    fn templates_are_grouped_by_path_in_kind_order() {
        let catalog = CatalogSnapshot::new(
            Vec::new(),
            vec![
                template(ArtPath::Dancer, MinorWorkKind::Spotlight),
                template(ArtPath::Author, MinorWorkKind::Career),
                template(ArtPath::Dancer, MinorWorkKind::Quick),
                template(ArtPath::Author, MinorWorkKind::Quick),
            ],
        );

        let author: Vec<_> = catalog
            .minor_works(ArtPath::Author)
            .iter()
            .map(|template| template.kind)
            .collect();
        assert_eq!(author, vec![MinorWorkKind::Quick, MinorWorkKind::Career]);
        assert_eq!(catalog.minor_works(ArtPath::Dancer).len(), 2);
        assert!(catalog.minor_works(ArtPath::Actor).is_empty());
        assert!(
            catalog
                .minor_work_of_kind(ArtPath::Dancer, MinorWorkKind::Spotlight)
                .is_some()
        );
    }

    #[test]
    fn job_lookup_by_id() {
        let catalog = CatalogSnapshot::new(
            vec![JobDefinition::new("job_teacher", "Teacher", Vec::new())],
            Vec::new(),
        );

        assert!(catalog.job(&"job_teacher".into()).is_some());
        assert!(catalog.job(&"job_astronaut".into()).is_none());
    }
}
