//! Card shapes for the four stage decks.
//!
//! Cards are produced by a loader outside the engine and arrive as plain data.
//! Missing optional fields fall back to the configured defaults (time costs)
//! or to "no effect" (branches, effect lists).

use crate::effect::Effect;
use crate::minor_works::MinorWorkKind;
use crate::state::{ArtPath, CardId};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct HomeCard {
    pub id: CardId,
    pub name: String,
    pub text: String,
    pub effects: Vec<Effect>,
}

/// Attend/skip choice for a pending Social card.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString, strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum SocialChoice {
    Attend,
    Skip,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SocialBranch {
    pub effects: Vec<Effect>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SocialCard {
    pub id: CardId,
    pub name: String,
    pub text: String,
    /// Time charged when the event is resolved. Defaults to 1.
    pub time_cost: Option<u32>,
    pub attend: SocialBranch,
    pub skip: SocialBranch,
    /// When non-empty, only these paths may draw the card.
    pub allowed_paths: Vec<ArtPath>,
    pub blocked_paths: Vec<ArtPath>,
}

impl SocialCard {
    pub const DEFAULT_TIME_COST: u32 = 1;

    pub fn time_cost(&self) -> u32 {
        self.time_cost.unwrap_or(Self::DEFAULT_TIME_COST)
    }

    pub fn is_available_to(&self, path: ArtPath) -> bool {
        if self.blocked_paths.contains(&path) {
            return false;
        }
        self.allowed_paths.is_empty() || self.allowed_paths.contains(&path)
    }

    pub fn branch(&self, choice: SocialChoice) -> &[Effect] {
        match choice {
            SocialChoice::Attend => &self.attend.effects,
            SocialChoice::Skip => &self.skip.effects,
        }
    }
}

/// Progress a ProfDev card adds to the player's Minor Work.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MinorWorkBoost {
    /// Template to start when nothing is in progress. `None` picks the first
    /// template the player has not completed.
    pub kind: Option<MinorWorkKind>,
    pub progress: u32,
}

impl Default for MinorWorkBoost {
    fn default() -> Self {
        Self {
            kind: None,
            progress: 1,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ProfDevCard {
    pub id: CardId,
    pub name: String,
    pub text: String,
    pub time_cost: Option<u32>,
    pub effects: Vec<Effect>,
    pub minor_work: Option<MinorWorkBoost>,
}

/// Branch picked when resolving a two-outcome Pro card.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString, strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum ProOutcome {
    Success,
    Fail,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ProCard {
    pub id: CardId,
    pub name: String,
    pub text: String,
    pub time_cost: Option<u32>,
    /// Always applied: at draw for plain cards, at resolution for branching ones.
    pub effects: Vec<Effect>,
    pub success_effects: Option<Vec<Effect>>,
    pub fail_effects: Option<Vec<Effect>>,
}

impl ProCard {
    /// Branching cards wait for `RESOLVE_PRO_CARD_CHOICE`.
    pub fn is_branching(&self) -> bool {
        self.success_effects.is_some() || self.fail_effects.is_some()
    }

    pub fn branch(&self, outcome: ProOutcome) -> &[Effect] {
        let branch = match outcome {
            ProOutcome::Success => &self.success_effects,
            ProOutcome::Fail => &self.fail_effects,
        };
        branch.as_deref().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Stat;

    #[test]
    fn social_card_path_filters() {
        let open = SocialCard::default();
        assert!(open.is_available_to(ArtPath::Dancer));

        let musicians_only = SocialCard {
            allowed_paths: vec![ArtPath::Musician],
            ..SocialCard::default()
        };
        assert!(musicians_only.is_available_to(ArtPath::Musician));
        assert!(!musicians_only.is_available_to(ArtPath::Author));

        let no_actors = SocialCard {
            blocked_paths: vec![ArtPath::Actor],
            ..SocialCard::default()
        };
        assert!(!no_actors.is_available_to(ArtPath::Actor));
        assert!(no_actors.is_available_to(ArtPath::Author));
    }

    #[test]
    fn social_time_cost_defaults_to_one() {
        assert_eq!(SocialCard::default().time_cost(), 1);
    }

    #[test]
    fn pro_card_branching_detection() {
        let plain = ProCard {
            effects: vec![Effect::masterwork(2)],
            ..ProCard::default()
        };
        assert!(!plain.is_branching());
        assert!(plain.branch(ProOutcome::Success).is_empty());

        let review = ProCard {
            fail_effects: Some(vec![Effect::stat(Stat::Inspiration, -2)]),
            ..ProCard::default()
        };
        assert!(review.is_branching());
        assert_eq!(review.branch(ProOutcome::Fail).len(), 1);
        assert!(review.branch(ProOutcome::Success).is_empty());
    }
}
