//! Static catalog data: jobs and Minor Work templates.

use crate::effect::Effect;
use crate::minor_works::{MinorWorkKind, MinorWorkTemplate};
use crate::state::{ArtPath, JobId, WorkId};

/// Read-only access to catalog data. Never mutated by reducers.
pub trait CatalogOracle: Send + Sync {
    fn jobs(&self) -> &[JobDefinition];

    /// Templates for one art path, in Quick/Career/Spotlight order.
    fn minor_works(&self, path: ArtPath) -> &[MinorWorkTemplate];

    fn job(&self, id: &JobId) -> Option<&JobDefinition> {
        self.jobs().iter().find(|job| &job.id == id)
    }

    fn minor_work(&self, path: ArtPath, id: &WorkId) -> Option<&MinorWorkTemplate> {
        self.minor_works(path)
            .iter()
            .find(|template| &template.id == id)
    }

    fn minor_work_of_kind(&self, path: ArtPath, kind: MinorWorkKind) -> Option<&MinorWorkTemplate> {
        self.minor_works(path)
            .iter()
            .find(|template| template.kind == kind)
    }
}

/// A day job. Going to work applies `effects` once per turn.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct JobDefinition {
    pub id: JobId,
    pub name: String,
    pub effects: Vec<Effect>,
}

impl JobDefinition {
    pub fn new(id: impl Into<String>, name: impl Into<String>, effects: Vec<Effect>) -> Self {
        Self {
            id: JobId::new(id),
            name: name.into(),
            effects,
        }
    }
}
