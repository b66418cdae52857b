//! Per-turn transient record.
//!
//! Everything here is gating state: it is consulted by validation and wiped by
//! every turn start. Presentation history lives in [`super::LastResults`].

use bitflags::bitflags;

use super::resources::Stat;

bitflags! {
    /// Once-per-turn markers and turn-scoped permissions.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct TurnFlags: u16 {
        const ROLLED_TIME               = 1 << 0;
        const WORKED                    = 1 << 1;
        const PRACTICED                 = 1 << 2;
        const SLEPT                     = 1 << 3;
        const ATE_AT_HOME               = 1 << 4;
        const HOME_CARD_DRAWN           = 1 << 5;
        const LEAVE_HOME_ATTEMPTED      = 1 << 6;
        const DREAMER_ADVANCE_ATTEMPTED = 1 << 7;
        const PRO_MAINTENANCE_DONE      = 1 << 8;
        const PRO_MAINTENANCE_REQUIRED  = 1 << 9;
        const CAN_LAY_LOW               = 1 << 10;
        const HAS_ACTED                 = 1 << 11;
        const AI_BOOM_USED              = 1 << 12;
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TurnRecord {
    pub flags: TurnFlags,
    /// Pro masterwork focus, re-rolled every Pro turn start.
    pub focus_stat: Option<Stat>,
}

impl TurnRecord {
    pub fn has(&self, flag: TurnFlags) -> bool {
        self.flags.contains(flag)
    }

    pub fn mark(&mut self, flag: TurnFlags) {
        self.flags.insert(flag);
    }

    pub fn clear(&mut self, flag: TurnFlags) {
        self.flags.remove(flag);
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
