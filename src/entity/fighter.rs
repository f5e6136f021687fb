//! Combat statistics

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fighter {
    pub max_hp: i32,
    hp: i32,
    pub defense: i32,
    pub power: i32,
}

impl Fighter {
    pub fn new(hp: i32, defense: i32, power: i32) -> Self {
        let max_hp = hp.max(0);
        Self {
            max_hp,
            hp: max_hp,
            defense,
            power,
        }
    }

    pub fn hp(&self) -> i32 {
        self.hp
    }

    /// Clamp into `[0, max_hp]` and store. Returns the stored value.
    ///
    /// Death is handled by the owning entity, which knows about the AI.
    pub fn set_hp(&mut self, value: i32) -> i32 {
        self.hp = value.clamp(0, self.max_hp);
        self.hp
    }

    /// Raw damage of an attack against `defender`. May be zero or negative.
    pub fn damage_against(&self, defender: &Fighter) -> i32 {
        self.power - defender.defense
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hp_is_clamped() {
        let mut fighter = Fighter::new(10, 0, 1);
        assert_eq!(fighter.set_hp(25), 10);
        assert_eq!(fighter.set_hp(-4), 0);
        assert_eq!(fighter.hp(), 0);
    }

    #[test]
    fn test_damage_against() {
        let attacker = Fighter::new(30, 2, 5);
        let defender = Fighter::new(10, 2, 3);
        assert_eq!(attacker.damage_against(&defender), 3);
        assert_eq!(defender.damage_against(&attacker), 1);
        assert!(Fighter::new(5, 0, 1).damage_against(&Fighter::new(5, 4, 1)) < 0);
    }
}
