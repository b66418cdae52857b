//! Bitmask summary of what an action changed.
//!
//! Deltas carry no values, only which fields moved. Post-execution hooks use
//! them to decide whether to fire; presentation layers use them to decide
//! what to redraw.

use bitflags::bitflags;

use crate::action::Action;
use crate::state::{GameState, PlayerId, PlayerState, Stage};

bitflags! {
    /// Fields of a [`PlayerState`] that changed.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct PlayerFields: u16 {
        const STAGE          = 1 << 0;
        const RESOURCES      = 1 << 1;
        const TIME           = 1 << 2;
        const HOME_PROGRESS  = 1 << 3;
        const MINOR_WORKS    = 1 << 4;
        const WORK_COMPLETED = 1 << 5;
        const PORTFOLIO      = 1 << 6;
        const MASTERWORK     = 1 << 7;
        const JOB            = 1 << 8;
        const SCANDAL        = 1 << 9;
        const HIT_PIECE      = 1 << 10;
        const PENDING        = 1 << 11;
        const TURN           = 1 << 12;
        const LAST_RESULTS   = 1 << 13;
    }
}

bitflags! {
    /// Game-wide fields that changed.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct TableFields: u16 {
        const TURN          = 1 << 0;
        const ACTIVE_SEAT   = 1 << 1;
        const STATUS        = 1 << 2;
        const ZEITGEIST     = 1 << 3;
        const HOME_DECK     = 1 << 4;
        const SOCIAL_DECK   = 1 << 5;
        const PROF_DEV_DECK = 1 << 6;
        const PRO_DECK      = 1 << 7;
        const JOB_DECK      = 1 << 8;
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StageChange {
    pub from: Stage,
    pub to: Stage,
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlayerChanges {
    pub seat: usize,
    pub id: PlayerId,
    pub fields: PlayerFields,
    pub stage: Option<StageChange>,
}

impl PlayerChanges {
    fn from_states(seat: usize, before: &PlayerState, after: &PlayerState) -> Option<Self> {
        let mut fields = PlayerFields::empty();
        fields.set(PlayerFields::STAGE, before.stage != after.stage);
        fields.set(PlayerFields::RESOURCES, before.resources != after.resources);
        fields.set(PlayerFields::TIME, before.time_this_turn != after.time_this_turn);
        fields.set(
            PlayerFields::HOME_PROGRESS,
            before.home_progress != after.home_progress,
        );
        fields.set(PlayerFields::MINOR_WORKS, before.minor_works != after.minor_works);
        fields.set(
            PlayerFields::WORK_COMPLETED,
            after.minor_works.completed_count() > before.minor_works.completed_count(),
        );
        fields.set(
            PlayerFields::PORTFOLIO,
            before.portfolio_built != after.portfolio_built,
        );
        fields.set(
            PlayerFields::MASTERWORK,
            before.masterwork_progress != after.masterwork_progress,
        );
        fields.set(PlayerFields::JOB, before.job != after.job);
        fields.set(PlayerFields::SCANDAL, before.scandal != after.scandal);
        fields.set(
            PlayerFields::HIT_PIECE,
            before.hit_piece_used != after.hit_piece_used,
        );
        fields.set(
            PlayerFields::PENDING,
            before.pending_social != after.pending_social || before.pending_pro != after.pending_pro,
        );
        fields.set(PlayerFields::TURN, before.turn != after.turn);
        fields.set(PlayerFields::LAST_RESULTS, before.last != after.last);

        if fields.is_empty() {
            return None;
        }

        let stage = (before.stage != after.stage).then_some(StageChange {
            from: before.stage,
            to: after.stage,
        });

        Some(Self {
            seat,
            id: after.id,
            fields,
            stage,
        })
    }
}

/// Minimal description of an executed action's impact on the state.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StateDelta {
    /// The action that caused this transition.
    pub action: Action,
    pub table: TableFields,
    /// Only players with at least one changed field, in seat order.
    pub players: Vec<PlayerChanges>,
}

impl StateDelta {
    pub fn from_states(action: Action, before: &GameState, after: &GameState) -> Self {
        let mut table = TableFields::empty();
        table.set(TableFields::TURN, before.turn != after.turn);
        table.set(
            TableFields::ACTIVE_SEAT,
            before.active_player_index != after.active_player_index,
        );
        table.set(
            TableFields::STATUS,
            before.status != after.status || before.winner != after.winner,
        );
        table.set(TableFields::ZEITGEIST, before.zeitgeist != after.zeitgeist);
        table.set(TableFields::HOME_DECK, before.home_deck != after.home_deck);
        table.set(TableFields::SOCIAL_DECK, before.social_deck != after.social_deck);
        table.set(
            TableFields::PROF_DEV_DECK,
            before.prof_dev_deck != after.prof_dev_deck,
        );
        table.set(TableFields::PRO_DECK, before.pro_deck != after.pro_deck);
        table.set(TableFields::JOB_DECK, before.job_deck != after.job_deck);

        let players = before
            .players
            .iter()
            .zip(after.players.iter())
            .enumerate()
            .filter_map(|(seat, (before, after))| PlayerChanges::from_states(seat, before, after))
            .collect();

        Self {
            action,
            table,
            players,
        }
    }

    /// Returns true if no state changes occurred (no-op action).
    pub fn is_empty(&self) -> bool {
        self.table.is_empty() && self.players.is_empty()
    }

    pub fn player(&self, seat: usize) -> Option<&PlayerChanges> {
        self.players.iter().find(|changes| changes.seat == seat)
    }

    /// Stage transitions in seat order.
    pub fn stage_changes(&self) -> impl Iterator<Item = (usize, StageChange)> + '_ {
        self.players
            .iter()
            .filter_map(|changes| changes.stage.map(|stage| (changes.seat, stage)))
    }

    /// Seats whose player completed a Minor Work.
    pub fn completed_works(&self) -> impl Iterator<Item = usize> + '_ {
        self.players
            .iter()
            .filter(|changes| changes.fields.contains(PlayerFields::WORK_COMPLETED))
            .map(|changes| changes.seat)
    }
}
