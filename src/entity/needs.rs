//! Bodily needs that grow every tick and hurt when maxed out

use serde::{Deserialize, Serialize};

/// Per-tick growth of each counter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NeedRates {
    pub hunger: u32,
    pub thirst: u32,
    pub sleepiness: u32,
    pub loneliness: u32,
}

impl Default for NeedRates {
    fn default() -> Self {
        Self {
            hunger: 1,
            thirst: 1,
            sleepiness: 1,
            loneliness: 1,
        }
    }
}

/// A need that hit its maximum this tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NeedType {
    Hunger,
    Thirst,
    Sleepiness,
    Loneliness,
}

impl NeedType {
    pub fn complaint(&self) -> &'static str {
        match self {
            NeedType::Hunger => "I am starving!",
            NeedType::Thirst => "I am dying of thirst!",
            NeedType::Sleepiness => "I am extremely tired!",
            NeedType::Loneliness => "I am extremely lonely!",
        }
    }

    /// Whether being maxed out costs hit points
    pub fn is_harmful(&self) -> bool {
        !matches!(self, NeedType::Loneliness)
    }
}

/// Four independent counters, 0 = satisfied
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Needs {
    pub hunger: u32,
    pub thirst: u32,
    pub sleepiness: u32,
    pub loneliness: u32,

    pub max_hunger: u32,
    pub max_thirst: u32,
    pub max_sleepiness: u32,
    pub max_loneliness: u32,
}

impl Needs {
    pub fn new(max_hunger: u32, max_thirst: u32, max_sleepiness: u32, max_loneliness: u32) -> Self {
        Self {
            hunger: 0,
            thirst: 0,
            sleepiness: 0,
            loneliness: 0,
            max_hunger,
            max_thirst,
            max_sleepiness,
            max_loneliness,
        }
    }

    /// Grow every counter and clamp at its max.
    ///
    /// Returns the needs that are at their max after this update, in fixed
    /// order. The caller turns them into complaints and damage.
    pub fn update(&mut self, rates: NeedRates) -> Vec<NeedType> {
        let mut maxed = Vec::new();

        let counters = [
            (NeedType::Hunger, &mut self.hunger, self.max_hunger, rates.hunger),
            (NeedType::Thirst, &mut self.thirst, self.max_thirst, rates.thirst),
            (
                NeedType::Sleepiness,
                &mut self.sleepiness,
                self.max_sleepiness,
                rates.sleepiness,
            ),
            (
                NeedType::Loneliness,
                &mut self.loneliness,
                self.max_loneliness,
                rates.loneliness,
            ),
        ];

        for (need, value, max, rate) in counters {
            *value = value.saturating_add(rate);
            if *value >= max {
                *value = max;
                maxed.push(need);
            }
        }

        maxed
    }

    /// Reduce hunger and thirst, floored at zero
    pub fn eat(&mut self, nutrition: u32, water_content: u32) {
        self.hunger = self.hunger.saturating_sub(nutrition);
        self.thirst = self.thirst.saturating_sub(water_content);
    }

    pub fn report(&self) -> String {
        format!(
            "Hunger: {}/{}, Thirst: {}/{}, Sleepiness: {}/{}, Loneliness: {}/{}",
            self.hunger,
            self.max_hunger,
            self.thirst,
            self.max_thirst,
            self.sleepiness,
            self.max_sleepiness,
            self.loneliness,
            self.max_loneliness
        )
    }
}

impl Default for Needs {
    fn default() -> Self {
        // Two days without food, one without water
        Self::new(2 * 1440, 1440, 2 * 1440, 3 * 1440)
    }
}
