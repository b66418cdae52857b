//! Downtime: practice, sleep and eating at home.

use super::{
    Action, ActionError, ActionTransition, DowntimeAction, require_left_home, require_time,
    require_unused,
};
use crate::env::GameEnv;
use crate::state::{GameState, LastResult};

/// Time charged by every downtime action.
const DOWNTIME_TIME_COST: u32 = 1;

impl ActionTransition for DowntimeAction {
    type Error = ActionError;

    fn pre_validate(&self, state: &GameState, _env: &GameEnv<'_>) -> Result<(), Self::Error> {
        require_left_home(state)?;
        let action = Action::from(*self).name();
        require_unused(state, self.flag(), action)?;
        require_time(state, DOWNTIME_TIME_COST)
    }

    fn apply(&self, state: &mut GameState, _env: &GameEnv<'_>) -> Result<(), Self::Error> {
        let stat = self.stat();
        let player = state.active_player_mut();
        player.spend_time(DOWNTIME_TIME_COST);
        player.resources.apply_delta(stat, 1);
        player.turn.mark(self.flag());
        player.last.record(LastResult::Downtime { stat });
        Ok(())
    }
}
