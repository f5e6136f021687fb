//! World clock
//!
//! One tick is one in-game minute. The clock is owned by the `World` and only
//! the tick driver advances it.

use serde::{Deserialize, Serialize};

use crate::core::types::Tick;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorldClock {
    tick: Tick,
    ticks_per_day: u64,
}

impl WorldClock {
    pub fn new(ticks_per_day: u64) -> Self {
        Self {
            tick: 0,
            ticks_per_day: ticks_per_day.max(1),
        }
    }

    /// A clock already showing `tick`
    pub fn at(tick: Tick, ticks_per_day: u64) -> Self {
        Self {
            tick,
            ..Self::new(ticks_per_day)
        }
    }

    pub fn advance(&mut self) -> Tick {
        self.tick += 1;
        self.tick
    }

    pub fn current_tick(&self) -> Tick {
        self.tick
    }

    pub fn current_day(&self) -> u64 {
        self.tick / self.ticks_per_day
    }

    /// `day D HH:MM` for an arbitrary tick
    pub fn format(&self, tick: Tick) -> String {
        let day = tick / self.ticks_per_day;
        let minute_of_day = (tick % self.ticks_per_day) * 24 * 60 / self.ticks_per_day;
        format!("day {} {:02}:{:02}", day, minute_of_day / 60, minute_of_day % 60)
    }
}

impl Default for WorldClock {
    fn default() -> Self {
        Self::new(24 * 60)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clock_advances() {
        let mut clock = WorldClock::default();
        assert_eq!(clock.current_tick(), 0);

        assert_eq!(clock.advance(), 1);
        for _ in 0..1439 {
            clock.advance();
        }
        assert_eq!(clock.current_tick(), 1440);
        assert_eq!(clock.current_day(), 1);
    }

    #[test]
    fn test_format_minutes() {
        let clock = WorldClock::default();
        assert_eq!(clock.format(0), "day 0 00:00");
        assert_eq!(clock.format(61), "day 0 01:01");
        assert_eq!(clock.format(1440 + 5), "day 1 00:05");
    }

    #[test]
    fn test_clock_starting_mid_run() {
        let mut clock = WorldClock::at(3000, 1440);
        assert_eq!(clock.current_tick(), 3000);
        assert_eq!(clock.current_day(), 2);
        assert_eq!(clock.advance(), 3001);
    }
}
