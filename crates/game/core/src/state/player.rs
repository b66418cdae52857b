//! Per-player career state.

use super::ids::{JobId, PlayerId};
use super::resources::{Resources, Stat};
use super::results::LastResults;
use super::turn::TurnRecord;
use crate::cards::{ProCard, SocialCard};
use crate::minor_works::MinorWorkTracker;

/// Career stage. Ordering follows progression.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
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
pub enum Stage {
    #[default]
    Home,
    Dreamer,
    Amateur,
    Pro,
}

impl Stage {
    /// Stages that fire a Zeitgeist milestone, in priority order.
    pub const MILESTONES: [Stage; 3] = [Stage::Dreamer, Stage::Amateur, Stage::Pro];
}

/// Artistic discipline. Selects the Minor Work templates and filters Social cards.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
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
#[strum(ascii_case_insensitive)]
pub enum ArtPath {
    #[strum(to_string = "author", serialize = "writer")]
    Author,
    #[strum(to_string = "musician", serialize = "music")]
    Musician,
    #[default]
    #[strum(
        to_string = "visual_artist",
        serialize = "painter",
        serialize = "artist",
        serialize = "visual"
    )]
    VisualArtist,
    #[strum(to_string = "filmmaker", serialize = "video", serialize = "creator")]
    Filmmaker,
    #[strum(to_string = "actor", serialize = "performer")]
    Actor,
    #[strum(to_string = "dancer", serialize = "dance")]
    Dancer,
}

impl ArtPath {
    pub const ALL: [ArtPath; 6] = [
        ArtPath::Author,
        ArtPath::Musician,
        ArtPath::VisualArtist,
        ArtPath::Filmmaker,
        ArtPath::Actor,
        ArtPath::Dancer,
    ];

    /// Resolves free-form input (aliases, spaces, hyphens) to a path.
    /// Unrecognized input falls back to the default path.
    pub fn normalize(raw: &str) -> Self {
        let key: String = raw
            .trim()
            .chars()
            .map(|c| if c == ' ' || c == '-' { '_' } else { c })
            .collect();
        key.parse().unwrap_or_default()
    }
}

/// Job market slot.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct JobSlot {
    pub job_id: Option<JobId>,
    /// Turns ended without going to work. Cumulative until fired.
    pub skipped_work_count: u32,
    pub fired_jobs: Vec<JobId>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlayerState {
    pub id: PlayerId,
    pub name: String,
    pub art_path: ArtPath,
    pub stage: Stage,
    pub resources: Resources,
    pub time_this_turn: u32,

    pub home_progress: u32,
    pub minor_works: MinorWorkTracker,
    pub portfolio_built: bool,
    pub masterwork_progress: i32,

    pub job: JobSlot,

    pub scandal: u32,
    pub hit_piece_used: bool,

    pub pending_social: Option<SocialCard>,
    pub pending_pro: Option<ProCard>,

    /// Per-turn gating, reset by every turn start.
    pub turn: TurnRecord,
    /// Presentation read-model; never consulted by rules.
    pub last: LastResults,
}

impl PlayerState {
    pub fn new(id: PlayerId, name: impl Into<String>, art_path: ArtPath) -> Self {
        Self {
            id,
            name: name.into(),
            art_path,
            stage: Stage::Home,
            resources: Resources::default(),
            time_this_turn: 0,
            home_progress: 0,
            minor_works: MinorWorkTracker::default(),
            portfolio_built: false,
            masterwork_progress: 0,
            job: JobSlot::default(),
            scandal: 0,
            hit_piece_used: false,
            pending_social: None,
            pending_pro: None,
            turn: TurnRecord::default(),
            last: LastResults::default(),
        }
    }

    /// Adds `delta` to the turn's Time, flooring at zero.
    pub fn adjust_time(&mut self, delta: i32) {
        self.time_this_turn = if delta >= 0 {
            self.time_this_turn.saturating_add(delta as u32)
        } else {
            self.time_this_turn.saturating_sub(delta.unsigned_abs())
        };
    }

    pub fn spend_time(&mut self, amount: u32) {
        self.time_this_turn = self.time_this_turn.saturating_sub(amount);
    }

    /// Moves to `stage`, zeroing the turn's Time as every stage change does.
    pub fn enter_stage(&mut self, stage: Stage) {
        self.stage = stage;
        self.time_this_turn = 0;
    }

    pub fn focus_stat(&self) -> Option<Stat> {
        self.turn.focus_stat
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn art_path_aliases_resolve() {
        assert_eq!(ArtPath::normalize("writer"), ArtPath::Author);
        assert_eq!(ArtPath::normalize("Music"), ArtPath::Musician);
        assert_eq!(ArtPath::normalize("visual artist"), ArtPath::VisualArtist);
        assert_eq!(ArtPath::normalize("painter"), ArtPath::VisualArtist);
        assert_eq!(ArtPath::normalize("creator"), ArtPath::Filmmaker);
        assert_eq!(ArtPath::normalize("performer"), ArtPath::Actor);
        assert_eq!(ArtPath::normalize(" dance "), ArtPath::Dancer);
    }

    #[test]
    fn unknown_art_path_falls_back_to_default() {
        assert_eq!(ArtPath::normalize("sculptor"), ArtPath::VisualArtist);
        assert_eq!(ArtPath::normalize(""), ArtPath::VisualArtist);
    }

    #[test]
    fn art_path_displays_canonical_name() {
        assert_eq!(ArtPath::VisualArtist.to_string(), "visual_artist");
        assert_eq!(ArtPath::Author.as_ref(), "author");
    }

    #[test]
    fn stages_are_ordered_by_progression() {
        assert!(Stage::Home < Stage::Dreamer);
        assert!(Stage::Amateur < Stage::Pro);
    }

    #[test]
    fn entering_a_stage_zeroes_time() {
        let mut player = PlayerState::new(PlayerId(1), "Ada", ArtPath::Author);
        player.time_this_turn = 4;
        player.enter_stage(Stage::Dreamer);

        assert_eq!(player.stage, Stage::Dreamer);
        assert_eq!(player.time_this_turn, 0);
    }
}
