//! Effect vocabulary shared by every card, job, and Minor Work.
//!
//! Effects are plain deltas. Stage handlers never touch resources directly
//! when a card is involved; they hand the card's effect list to
//! [`apply_effects`] so clamping stays uniform.

use crate::state::{PlayerState, Stat};

/// A single typed delta.
///
/// Serialized with an internal `type` tag, so `{type: "stat", stat: "money", delta: 2}`
/// in content files maps onto [`Effect::Stat`]. Tags this build does not know
/// deserialize into [`Effect::Unknown`] and are skipped by the interpreter.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "type", rename_all = "snake_case"))]
pub enum Effect {
    Stat { stat: Stat, delta: i32 },
    Time { delta: i32 },
    Masterwork { delta: i32 },
    #[cfg_attr(feature = "serde", serde(other))]
    Unknown,
}

impl Effect {
    pub const fn stat(stat: Stat, delta: i32) -> Self {
        Self::Stat { stat, delta }
    }

    pub const fn time(delta: i32) -> Self {
        Self::Time { delta }
    }

    pub const fn masterwork(delta: i32) -> Self {
        Self::Masterwork { delta }
    }

    /// Applies this effect to `player`.
    pub fn apply_to(&self, player: &mut PlayerState) {
        match *self {
            Effect::Stat { stat, delta } => player.resources.apply_delta(stat, delta),
            Effect::Time { delta } => player.adjust_time(delta),
            Effect::Masterwork { delta } => {
                player.masterwork_progress = player.masterwork_progress.saturating_add(delta)
            }
            Effect::Unknown => {}
        }
    }
}

/// Applies every effect in order.
pub fn apply_effects(player: &mut PlayerState, effects: &[Effect]) {
    for effect in effects {
        effect.apply_to(player);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{ArtPath, PlayerId};

    fn player() -> PlayerState {
        PlayerState::new(PlayerId(1), "Ada", ArtPath::Author)
    }

    #[test]
    fn stat_effects_respect_clamping() {
        let mut player = player();
        apply_effects(
            &mut player,
            &[
                Effect::stat(Stat::Money, -3),
                Effect::stat(Stat::Craft, -1),
                Effect::stat(Stat::Inspiration, 2),
            ],
        );

        assert_eq!(player.resources.money, -3);
        assert_eq!(player.resources.craft, 0);
        assert_eq!(player.resources.inspiration, 2);
    }

    #[test]
    fn time_floor_is_zero_and_masterwork_is_unbounded() {
        let mut player = player();
        player.time_this_turn = 2;
        apply_effects(
            &mut player,
            &[Effect::time(-5), Effect::masterwork(-1), Effect::Unknown],
        );

        assert_eq!(player.time_this_turn, 0);
        assert_eq!(player.masterwork_progress, -1);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn unknown_effect_tags_degrade_to_no_effect() {
        let effects: Vec<Effect> = serde_json::from_str(
            r#"[{"type":"stat","stat":"money","delta":2},{"type":"extra_draw"}]"#,
        )
        .expect("effects should parse");

        assert_eq!(effects, vec![Effect::stat(Stat::Money, 2), Effect::Unknown]);
    }
}
