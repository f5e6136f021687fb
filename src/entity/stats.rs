//! Slowly changing flavor attributes

use rand::Rng;
use serde::{Deserialize, Serialize};

const MINUTES_PER_YEAR: u64 = 60 * 24 * 365;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stats {
    /// Age in in-game minutes
    pub age_minutes: u64,
    pub intelligence: i32,
    pub strength: i32,
    pub dexterity: i32,
    pub stamina: i32,
}

impl Stats {
    pub fn new(age_years: u64, intelligence: i32, strength: i32, dexterity: i32, stamina: i32) -> Self {
        Self {
            age_minutes: age_years * MINUTES_PER_YEAR,
            intelligence,
            strength,
            dexterity,
            stamina,
        }
    }

    /// Roll an adult with attributes in 3..=18
    pub fn roll(rng: &mut impl Rng) -> Self {
        let mut attribute = || (0..3).map(|_| rng.gen_range(1..=6)).sum::<i32>();
        let (intelligence, strength, dexterity, stamina) =
            (attribute(), attribute(), attribute(), attribute());
        Self::new(rng.gen_range(18..=60), intelligence, strength, dexterity, stamina)
    }

    pub fn age_years(&self) -> u64 {
        self.age_minutes / MINUTES_PER_YEAR
    }

    /// One tick is one minute of aging
    pub fn update(&mut self) {
        self.age_minutes += 1;
    }

    pub fn report(&self) -> String {
        format!(
            "Intelligence: {}, Strength: {}, Stamina: {}, Dexterity: {}, Age: {}",
            self.intelligence,
            self.strength,
            self.stamina,
            self.dexterity,
            self.age_years()
        )
    }
}

impl Default for Stats {
    fn default() -> Self {
        Self::new(30, 10, 10, 10, 10)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_aging_by_minutes() {
        let mut stats = Stats::new(20, 1, 2, 3, 4);
        for _ in 0..MINUTES_PER_YEAR {
            stats.update();
        }
        assert_eq!(stats.age_years(), 21);
    }

    #[test]
    fn test_rolled_attributes_in_range() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        for _ in 0..50 {
            let stats = Stats::roll(&mut rng);
            for value in [stats.intelligence, stats.strength, stats.dexterity, stats.stamina] {
                assert!((3..=18).contains(&value));
            }
            assert!((18..=60).contains(&stats.age_years()));
        }
    }

    #[test]
    fn test_report_format() {
        let stats = Stats::new(30, 12, 8, 14, 9);
        assert_eq!(
            stats.report(),
            "Intelligence: 12, Strength: 8, Stamina: 9, Dexterity: 14, Age: 30"
        );
    }
}
