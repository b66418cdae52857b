//! The four career resources and their clamping rules.

/// One of the four tracked resources.
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
pub enum Stat {
    Money,
    Food,
    Inspiration,
    Craft,
}

impl Stat {
    /// Stats that can be chosen as the Pro masterwork focus.
    pub const FOCUS_CANDIDATES: [Stat; 3] = [Stat::Food, Stat::Inspiration, Stat::Craft];
}

/// Money may go negative (debt); the other three are floor-clamped at zero.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Resources {
    pub money: i32,
    pub food: u32,
    pub inspiration: u32,
    pub craft: u32,
}

impl Resources {
    pub fn get(&self, stat: Stat) -> i32 {
        match stat {
            Stat::Money => self.money,
            Stat::Food => self.food as i32,
            Stat::Inspiration => self.inspiration as i32,
            Stat::Craft => self.craft as i32,
        }
    }

    /// Adds `delta` to `stat`, clamping clamped stats at zero.
    pub fn apply_delta(&mut self, stat: Stat, delta: i32) {
        match stat {
            Stat::Money => self.money = self.money.saturating_add(delta),
            Stat::Food => self.food = clamped_add(self.food, delta),
            Stat::Inspiration => self.inspiration = clamped_add(self.inspiration, delta),
            Stat::Craft => self.craft = clamped_add(self.craft, delta),
        }
    }

    pub fn can_afford(&self, cost: &StatCost) -> bool {
        self.money >= cost.money as i32
            && self.food >= cost.food
            && self.inspiration >= cost.inspiration
            && self.craft >= cost.craft
    }

    /// Deducts `cost`. Callers check [`Self::can_afford`] first.
    pub fn pay(&mut self, cost: &StatCost) {
        self.money = self.money.saturating_sub(cost.money as i32);
        self.food = self.food.saturating_sub(cost.food);
        self.inspiration = self.inspiration.saturating_sub(cost.inspiration);
        self.craft = self.craft.saturating_sub(cost.craft);
    }
}

fn clamped_add(value: u32, delta: i32) -> u32 {
    if delta >= 0 {
        value.saturating_add(delta as u32)
    } else {
        value.saturating_sub(delta.unsigned_abs())
    }
}

/// A fixed resource price (advancement, portfolio).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct StatCost {
    pub money: u32,
    pub food: u32,
    pub inspiration: u32,
    pub craft: u32,
}

impl StatCost {
    pub const fn new(money: u32, food: u32, inspiration: u32, craft: u32) -> Self {
        Self {
            money,
            food,
            inspiration,
            craft,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamped_stats_never_go_negative() {
        let mut resources = Resources::default();
        resources.apply_delta(Stat::Food, -3);
        resources.apply_delta(Stat::Inspiration, 2);
        resources.apply_delta(Stat::Inspiration, -5);

        assert_eq!(resources.food, 0);
        assert_eq!(resources.inspiration, 0);
    }

    #[test]
    fn money_allows_debt() {
        let mut resources = Resources::default();
        resources.apply_delta(Stat::Money, -2);
        assert_eq!(resources.money, -2);
        assert_eq!(resources.get(Stat::Money), -2);
    }

    #[test]
    fn pay_deducts_exactly_the_cost() {
        let mut resources = Resources {
            money: 6,
            food: 1,
            inspiration: 4,
            craft: 2,
        };
        let cost = StatCost::new(5, 0, 3, 2);

        assert!(resources.can_afford(&cost));
        resources.pay(&cost);
        assert_eq!(
            resources,
            Resources {
                money: 1,
                food: 1,
                inspiration: 1,
                craft: 0,
            }
        );
        assert!(!resources.can_afford(&cost));
    }

    #[test]
    fn stat_parses_case_insensitively() {
        assert_eq!("Craft".parse::<Stat>().ok(), Some(Stat::Craft));
        assert_eq!(Stat::Inspiration.to_string(), "inspiration");
    }
}
