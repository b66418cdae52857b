//! Minor Works: one-in-progress, multi-pip side projects.
//!
//! The tracker enforces the structural rules (single slot, completion cap,
//! no repeats); stage handlers own Time spending and effect application.

use crate::effect::Effect;
use crate::error::{ErrorSeverity, GameError};
use crate::state::{ArtPath, WorkId};

/// Money paid out when a Spotlight completes while a platform bonus is banked.
pub const PLATFORM_BONUS_AMOUNT: i32 = 2;

#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum MinorWorkKind {
    /// Short, cheap; banks a platform bonus on completion.
    Quick,
    /// Pays its effects every turn once completed.
    Career,
    /// Large one-time payout.
    Spotlight,
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MinorWorkTemplate {
    pub id: WorkId,
    pub name: String,
    pub art_path: ArtPath,
    pub kind: MinorWorkKind,
    pub progress_target: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub on_complete_effects: Vec<Effect>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub effects_per_turn: Vec<Effect>,
}

impl MinorWorkTemplate {
    /// Progress target, never below one pip.
    pub fn target(&self) -> u32 {
        self.progress_target.max(1)
    }

    /// Highest progress a boost may reach without completing the work.
    pub fn boost_cap(&self) -> u32 {
        self.target() - 1
    }
}

/// A finished work kept for passive income and portfolio counting.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CompletedWork {
    pub id: WorkId,
    pub name: String,
    pub kind: MinorWorkKind,
    pub effects_per_turn: Vec<Effect>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WorkInProgress {
    pub id: WorkId,
    pub progress: u32,
}

/// Result of adding a pip.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ProgressOutcome {
    Advanced { progress: u32, target: u32 },
    Completed(Completion),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Completion {
    pub work: WorkId,
    pub on_complete_effects: Vec<Effect>,
    /// Extra money from a consumed platform bonus.
    pub platform_payout: Option<i32>,
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MinorWorkError {
    #[error("minor work {0} is already in progress")]
    AlreadyInProgress(WorkId),

    #[error("minor work cap of {cap} completed works reached")]
    CapReached { cap: u32 },

    #[error("minor work {0} was already completed")]
    AlreadyCompleted(WorkId),

    #[error("no minor work in progress")]
    NothingInProgress,

    #[error("template {expected} does not match work in progress {actual}")]
    TemplateMismatch { expected: WorkId, actual: WorkId },
}

impl GameError for MinorWorkError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::TemplateMismatch { .. } => ErrorSeverity::Internal,
            _ => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::AlreadyInProgress(_) => "MINOR_WORK_IN_PROGRESS",
            Self::CapReached { .. } => "MINOR_WORK_CAP_REACHED",
            Self::AlreadyCompleted(_) => "MINOR_WORK_ALREADY_COMPLETED",
            Self::NothingInProgress => "MINOR_WORK_NONE_IN_PROGRESS",
            Self::TemplateMismatch { .. } => "MINOR_WORK_TEMPLATE_MISMATCH",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MinorWorkTracker {
    completed: Vec<CompletedWork>,
    in_progress: Option<WorkInProgress>,
    platform_bonus: bool,
}

impl MinorWorkTracker {
    pub fn completed(&self) -> &[CompletedWork] {
        &self.completed
    }

    pub fn completed_count(&self) -> u32 {
        self.completed.len() as u32
    }

    pub fn in_progress(&self) -> Option<&WorkInProgress> {
        self.in_progress.as_ref()
    }

    pub fn has_completed(&self, id: &WorkId) -> bool {
        self.completed.iter().any(|work| &work.id == id)
    }

    pub fn has_platform_bonus(&self) -> bool {
        self.platform_bonus
    }

    /// Checks whether `template` could be started right now.
    pub fn check_start(&self, template: &MinorWorkTemplate, cap: u32) -> Result<(), MinorWorkError> {
        if let Some(current) = &self.in_progress {
            return Err(MinorWorkError::AlreadyInProgress(current.id.clone()));
        }
        if self.completed_count() >= cap {
            return Err(MinorWorkError::CapReached { cap });
        }
        if self.has_completed(&template.id) {
            return Err(MinorWorkError::AlreadyCompleted(template.id.clone()));
        }
        Ok(())
    }

    pub fn start(&mut self, template: &MinorWorkTemplate, cap: u32) -> Result<(), MinorWorkError> {
        self.check_start(template, cap)?;
        self.in_progress = Some(WorkInProgress {
            id: template.id.clone(),
            progress: 0,
        });
        Ok(())
    }

    /// Adds one pip to the work in progress, completing it at its target.
    pub fn progress(
        &mut self,
        template: &MinorWorkTemplate,
    ) -> Result<ProgressOutcome, MinorWorkError> {
        let current = self.matching_in_progress(template)?;
        current.progress += 1;
        let progress = current.progress;

        if progress < template.target() {
            return Ok(ProgressOutcome::Advanced {
                progress,
                target: template.target(),
            });
        }

        Ok(ProgressOutcome::Completed(self.complete(template)))
    }

    /// Adds up to `amount` pips without ever completing the work.
    /// Returns the new progress.
    pub fn boost(
        &mut self,
        template: &MinorWorkTemplate,
        amount: u32,
    ) -> Result<u32, MinorWorkError> {
        let current = self.matching_in_progress(template)?;
        current.progress = current
            .progress
            .saturating_add(amount)
            .min(template.boost_cap())
            .max(current.progress);
        Ok(current.progress)
    }

    /// Per-turn income of every completed work, in completion order.
    pub fn passive_effects(&self) -> impl Iterator<Item = &Effect> {
        self.completed
            .iter()
            .flat_map(|work| work.effects_per_turn.iter())
    }

    fn matching_in_progress(
        &mut self,
        template: &MinorWorkTemplate,
    ) -> Result<&mut WorkInProgress, MinorWorkError> {
        let current = self
            .in_progress
            .as_mut()
            .ok_or(MinorWorkError::NothingInProgress)?;
        if current.id != template.id {
            return Err(MinorWorkError::TemplateMismatch {
                expected: template.id.clone(),
                actual: current.id.clone(),
            });
        }
        Ok(current)
    }

    fn complete(&mut self, template: &MinorWorkTemplate) -> Completion {
        self.in_progress = None;
        self.completed.push(CompletedWork {
            id: template.id.clone(),
            name: template.name.clone(),
            kind: template.kind,
            effects_per_turn: template.effects_per_turn.clone(),
        });

        let platform_payout = match template.kind {
            MinorWorkKind::Quick => {
                self.platform_bonus = true;
                None
            }
            MinorWorkKind::Spotlight if self.platform_bonus => {
                self.platform_bonus = false;
                Some(PLATFORM_BONUS_AMOUNT)
            }
            _ => None,
        };

        Completion {
            work: template.id.clone(),
            on_complete_effects: template.on_complete_effects.clone(),
            platform_payout,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Stat;

    fn template(id: &str, kind: MinorWorkKind, target: u32) -> MinorWorkTemplate {
        MinorWorkTemplate {
            id: WorkId::from(id),
            name: id.to_owned(),
            art_path: ArtPath::Author,
            kind,
            progress_target: target,
            on_complete_effects: vec![Effect::stat(Stat::Money, 3)],
            effects_per_turn: match kind {
                MinorWorkKind::Career => vec![Effect::stat(Stat::Inspiration, 1)],
                _ => Vec::new(),
            },
        }
    }

    #[test]
    fn only_one_work_in_progress() {
        let quick = template("quick", MinorWorkKind::Quick, 2);
        let career = template("career", MinorWorkKind::Career, 4);
        let mut tracker = MinorWorkTracker::default();

        tracker.start(&quick, 3).unwrap();
        assert_eq!(
            tracker.start(&career, 3),
            Err(MinorWorkError::AlreadyInProgress(WorkId::from("quick")))
        );
    }

    #[test]
    fn progress_completes_at_target() {
        let quick = template("quick", MinorWorkKind::Quick, 2);
        let mut tracker = MinorWorkTracker::default();
        tracker.start(&quick, 3).unwrap();

        assert_eq!(
            tracker.progress(&quick).unwrap(),
            ProgressOutcome::Advanced {
                progress: 1,
                target: 2
            }
        );
        let ProgressOutcome::Completed(completion) = tracker.progress(&quick).unwrap() else {
            panic!("second pip should complete the quick work");
        };

        assert_eq!(completion.work, WorkId::from("quick"));
        assert_eq!(completion.on_complete_effects.len(), 1);
        assert!(tracker.in_progress().is_none());
        assert_eq!(tracker.completed_count(), 1);
        assert!(tracker.has_platform_bonus());
    }

    #[test]
    fn completed_work_cannot_be_restarted() {
        let quick = template("quick", MinorWorkKind::Quick, 1);
        let mut tracker = MinorWorkTracker::default();
        tracker.start(&quick, 3).unwrap();
        tracker.progress(&quick).unwrap();

        assert_eq!(
            tracker.start(&quick, 3),
            Err(MinorWorkError::AlreadyCompleted(WorkId::from("quick")))
        );
    }

    #[test]
    fn cap_blocks_new_works() {
        let quick = template("quick", MinorWorkKind::Quick, 1);
        let career = template("career", MinorWorkKind::Career, 1);
        let mut tracker = MinorWorkTracker::default();
        tracker.start(&quick, 1).unwrap();
        tracker.progress(&quick).unwrap();

        assert_eq!(
            tracker.start(&career, 1),
            Err(MinorWorkError::CapReached { cap: 1 })
        );
    }

    #[test]
    fn boost_never_completes() {
        let career = template("career", MinorWorkKind::Career, 4);
        let mut tracker = MinorWorkTracker::default();
        tracker.start(&career, 3).unwrap();

        assert_eq!(tracker.boost(&career, 2), Ok(2));
        assert_eq!(tracker.boost(&career, 5), Ok(3));
        assert_eq!(tracker.in_progress().map(|work| work.progress), Some(3));
        assert_eq!(tracker.completed_count(), 0);
    }

    #[test]
    fn spotlight_consumes_platform_bonus() {
        let quick = template("quick", MinorWorkKind::Quick, 1);
        let spotlight = template("spotlight", MinorWorkKind::Spotlight, 1);
        let mut tracker = MinorWorkTracker::default();

        tracker.start(&quick, 3).unwrap();
        tracker.progress(&quick).unwrap();
        tracker.start(&spotlight, 3).unwrap();
        let ProgressOutcome::Completed(completion) = tracker.progress(&spotlight).unwrap() else {
            panic!("spotlight should complete");
        };

        assert_eq!(completion.platform_payout, Some(PLATFORM_BONUS_AMOUNT));
        assert!(!tracker.has_platform_bonus());
    }

    #[test]
    fn passive_effects_come_from_completed_career_works() {
        let career = template("career", MinorWorkKind::Career, 1);
        let mut tracker = MinorWorkTracker::default();
        tracker.start(&career, 3).unwrap();
        tracker.progress(&career).unwrap();

        let passive: Vec<_> = tracker.passive_effects().cloned().collect();
        assert_eq!(passive, vec![Effect::stat(Stat::Inspiration, 1)]);
    }
}
