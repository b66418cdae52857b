//! Game-wide Zeitgeist modifiers.
//!
//! A Zeitgeist is rolled the first time any player reaches Dreamer, Amateur
//! and Pro. The active one tweaks how later actions resolve for every player.

use crate::state::Stage;

#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum ZeitgeistKind {
    /// Once per turn, convert 1 Inspiration into 1 Money, Food or Craft.
    AiBoom,
    /// +1 Craft whenever a Minor Work completes.
    IndieWave,
    /// Downtime actions grant +1 extra.
    WellnessCulture,
    /// +1 Money on every Go To Work.
    GigEconomy,
    /// +1 Time refunded after drawing a Social, ProfDev or Pro card.
    StreamingEra,
    /// Hit pieces inflict +1 extra Scandal.
    CultureWar,
}

impl ZeitgeistKind {
    pub const ALL: [ZeitgeistKind; 6] = [
        ZeitgeistKind::AiBoom,
        ZeitgeistKind::IndieWave,
        ZeitgeistKind::WellnessCulture,
        ZeitgeistKind::GigEconomy,
        ZeitgeistKind::StreamingEra,
        ZeitgeistKind::CultureWar,
    ];

    /// Maps a d6 face to its Zeitgeist.
    pub fn from_roll(roll: u32) -> Option<Self> {
        let index = roll.checked_sub(1)? as usize;
        Self::ALL.get(index).copied()
    }

    pub fn roll(self) -> u32 {
        Self::ALL
            .iter()
            .position(|kind| *kind == self)
            .map_or(0, |index| index as u32 + 1)
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::AiBoom => "AI Boom",
            Self::IndieWave => "Indie Wave",
            Self::WellnessCulture => "Wellness Culture",
            Self::GigEconomy => "Gig Economy",
            Self::StreamingEra => "Streaming Era",
            Self::CultureWar => "Culture War",
        }
    }
}

/// Which stage milestones have already fired.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Milestones {
    pub dreamer: bool,
    pub amateur: bool,
    pub pro: bool,
}

impl Milestones {
    pub fn is_fired(&self, stage: Stage) -> bool {
        match stage {
            Stage::Home => true,
            Stage::Dreamer => self.dreamer,
            Stage::Amateur => self.amateur,
            Stage::Pro => self.pro,
        }
    }

    pub fn fire(&mut self, stage: Stage) {
        match stage {
            Stage::Home => {}
            Stage::Dreamer => self.dreamer = true,
            Stage::Amateur => self.amateur = true,
            Stage::Pro => self.pro = true,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ZeitgeistState {
    pub current: Option<ZeitgeistKind>,
    pub milestones: Milestones,
    /// Previously active Zeitgeists, oldest first.
    pub history: Vec<ZeitgeistKind>,
}

impl ZeitgeistState {
    pub fn is_active(&self, kind: ZeitgeistKind) -> bool {
        self.current == Some(kind)
    }

    /// Replaces the current Zeitgeist, pushing the old one to history.
    pub fn replace(&mut self, next: ZeitgeistKind) {
        if let Some(previous) = self.current.replace(next) {
            self.history.push(previous);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rolls_map_to_kinds() {
        assert_eq!(ZeitgeistKind::from_roll(1), Some(ZeitgeistKind::AiBoom));
        assert_eq!(ZeitgeistKind::from_roll(6), Some(ZeitgeistKind::CultureWar));
        assert_eq!(ZeitgeistKind::from_roll(0), None);
        assert_eq!(ZeitgeistKind::from_roll(7), None);
        assert_eq!(ZeitgeistKind::GigEconomy.roll(), 4);
    }

    #[test]
    fn replace_keeps_history() {
        let mut state = ZeitgeistState::default();
        state.replace(ZeitgeistKind::IndieWave);
        state.replace(ZeitgeistKind::CultureWar);

        assert!(state.is_active(ZeitgeistKind::CultureWar));
        assert_eq!(state.history, vec![ZeitgeistKind::IndieWave]);
    }

    #[test]
    fn milestones_fire_once() {
        let mut milestones = Milestones::default();
        assert!(!milestones.is_fired(Stage::Amateur));
        milestones.fire(Stage::Amateur);
        assert!(milestones.is_fired(Stage::Amateur));
        assert!(!milestones.is_fired(Stage::Pro));
    }
}
