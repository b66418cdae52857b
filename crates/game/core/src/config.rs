use crate::state::StatCost;

/// Tuning parameters, partitioned by stage. Immutable for a game's duration.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GameConfig {
    pub home: HomeConfig,
    pub dreamer: DreamerConfig,
    pub amateur: AmateurConfig,
    pub pro: ProConfig,
    pub global: GlobalConfig,
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct HomeConfig {
    /// Required d6 result for each leave-home step, in order.
    pub roll_sequence: Vec<u32>,
}

impl HomeConfig {
    pub const DEFAULT_ROLL_SEQUENCE: [u32; 3] = [4, 3, 2];
}

impl Default for HomeConfig {
    fn default() -> Self {
        Self {
            roll_sequence: Self::DEFAULT_ROLL_SEQUENCE.to_vec(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DreamerConfig {
    pub advance_cost: StatCost,
    pub advance_roll_target: u32,
}

impl DreamerConfig {
    pub const DEFAULT_ADVANCE_COST: StatCost = StatCost::new(5, 0, 5, 3);
    pub const DEFAULT_ADVANCE_ROLL_TARGET: u32 = 4;
}

impl Default for DreamerConfig {
    fn default() -> Self {
        Self {
            advance_cost: Self::DEFAULT_ADVANCE_COST,
            advance_roll_target: Self::DEFAULT_ADVANCE_ROLL_TARGET,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AmateurConfig {
    pub portfolio_cost: StatCost,
    /// Completed Minor Works needed to compile a portfolio.
    /// `None` means "as many as the cap".
    pub portfolio_min_works: Option<u32>,
    pub max_minor_works: u32,
    /// Skipped work turns before a job is lost.
    pub job_loss_skip_count: u32,
    pub pro_advance_roll_target: u32,
    /// Time cost of a ProfDev card that does not name its own.
    pub prof_dev_time_cost: u32,
}

impl AmateurConfig {
    pub const DEFAULT_PORTFOLIO_COST: StatCost = StatCost::new(5, 0, 3, 2);
    pub const DEFAULT_MAX_MINOR_WORKS: u32 = 3;
    pub const DEFAULT_JOB_LOSS_SKIP_COUNT: u32 = 3;
    pub const DEFAULT_PRO_ADVANCE_ROLL_TARGET: u32 = 4;
    pub const DEFAULT_PROF_DEV_TIME_COST: u32 = 2;

    pub fn portfolio_min_works(&self) -> u32 {
        self.portfolio_min_works.unwrap_or(self.max_minor_works)
    }
}

impl Default for AmateurConfig {
    fn default() -> Self {
        Self {
            portfolio_cost: Self::DEFAULT_PORTFOLIO_COST,
            portfolio_min_works: None,
            max_minor_works: Self::DEFAULT_MAX_MINOR_WORKS,
            job_loss_skip_count: Self::DEFAULT_JOB_LOSS_SKIP_COUNT,
            pro_advance_roll_target: Self::DEFAULT_PRO_ADVANCE_ROLL_TARGET,
            prof_dev_time_cost: Self::DEFAULT_PROF_DEV_TIME_COST,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ProConfig {
    pub maintenance_roll_target: u32,
    pub masterwork_target_progress: i32,
    /// Time cost of a Pro card that does not name its own.
    pub draw_time_cost: u32,
    /// Money paid per point of Scandal bought out.
    pub buyout_money_per_scandal: u32,
}

impl ProConfig {
    pub const DEFAULT_MAINTENANCE_ROLL_TARGET: u32 = 4;
    pub const DEFAULT_MASTERWORK_TARGET_PROGRESS: i32 = 10;
    pub const DEFAULT_DRAW_TIME_COST: u32 = 3;
    pub const DEFAULT_BUYOUT_MONEY_PER_SCANDAL: u32 = 3;
}

impl Default for ProConfig {
    fn default() -> Self {
        Self {
            maintenance_roll_target: Self::DEFAULT_MAINTENANCE_ROLL_TARGET,
            masterwork_target_progress: Self::DEFAULT_MASTERWORK_TARGET_PROGRESS,
            draw_time_cost: Self::DEFAULT_DRAW_TIME_COST,
            buyout_money_per_scandal: Self::DEFAULT_BUYOUT_MONEY_PER_SCANDAL,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GlobalConfig {
    /// Rounds played before the game is lost. `0` disables the limit.
    pub max_turns: u32,
}

impl GlobalConfig {
    pub const DEFAULT_MAX_TURNS: u32 = 40;
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            max_turns: Self::DEFAULT_MAX_TURNS,
        }
    }
}
