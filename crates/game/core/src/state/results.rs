//! Last-result read model consumed by presentation layers.

use super::ids::{CardId, JobId, PlayerId, WorkId};
use super::resources::Stat;
use crate::cards::{ProOutcome, SocialChoice};

/// Outcome of a die-gated check.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RollCheck {
    pub roll: u32,
    pub target: u32,
    pub success: bool,
}

impl RollCheck {
    /// "Roll ≥ target" succeeds.
    pub fn new(roll: u32, target: u32) -> Self {
        Self {
            roll,
            target,
            success: roll >= target,
        }
    }
}

/// Something that happened to a player during the current turn.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "snake_case"))]
pub enum LastResult {
    HomeCard { card: CardId },
    LeaveHome { check: RollCheck },
    TimeRoll { roll: u32, gained: u32 },
    SocialDrawn { card: CardId },
    SocialResolved { card: CardId, choice: SocialChoice },
    Worked { job: JobId },
    Fired { job: JobId },
    DreamerAdvance { check: RollCheck },
    ProfDev { card: CardId, boosted: Option<(WorkId, u32)> },
    MinorWorkStarted { work: WorkId },
    MinorWorkProgressed { work: WorkId, progress: u32, target: u32 },
    MinorWorkCompleted { work: WorkId },
    PortfolioCompiled,
    ProAdvance { check: RollCheck },
    Masterwork { spent: u32, progress: i32 },
    ProCardDrawn { card: CardId, pending: bool },
    ProCardResolved { card: CardId, outcome: ProOutcome },
    Maintenance { check: RollCheck },
    LayLow { roll: u32, removed: u32 },
    HitPiece { target: PlayerId, scandal: u32 },
    Buyout { removed: u32, money_spent: u32 },
    Downtime { stat: Stat },
    AiBoom { into: Stat },
}

/// Ordered log of the current turn's results. Cleared at turn start.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LastResults {
    entries: Vec<LastResult>,
}

impl LastResults {
    pub fn record(&mut self, result: LastResult) {
        self.entries.push(result);
    }

    pub fn latest(&self) -> Option<&LastResult> {
        self.entries.last()
    }

    pub fn iter(&self) -> impl Iterator<Item = &LastResult> {
        self.entries.iter()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
