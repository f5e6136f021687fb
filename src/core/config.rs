//! Simulation configuration with documented constants
//!
//! Every tunable lives here. A config is built from `Default`, or parsed from
//! TOML, and then handed to the `World`; nothing reads it from global state.

use std::path::Path;

use serde::Deserialize;

use crate::core::error::{Result, RogueError};

/// Configuration for the simulation systems
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    // === MAP ===
    pub map_width: i32,
    pub map_height: i32,

    /// Seed for the world RNG. Same seed, same run.
    pub seed: u64,

    // === PERCEPTION ===
    /// Field-of-view radius for actors that don't specify their own
    pub default_eyesight: i32,

    /// Observation log capacity for the player
    ///
    /// The player's log doubles as the message panel, so it is kept longer
    /// than an NPC's.
    pub player_log_capacity: usize,

    /// Observation log capacity for every other actor
    pub npc_log_capacity: usize,

    // === NEEDS ===
    /// Amount each need counter grows per tick
    pub hunger_per_tick: u32,
    pub thirst_per_tick: u32,
    pub sleepiness_per_tick: u32,
    pub loneliness_per_tick: u32,

    // === PATHFINDING ===
    /// Extra cost of a cell occupied by a movement-blocking entity
    ///
    /// Lower = monsters queue up behind each other in corridors.
    /// Higher = monsters take long detours to surround the target.
    pub blocked_cell_penalty: u32,

    // === BUILDINGS ===
    /// Energy a tree regains each tick (capped at its max energy)
    pub tree_energy_regen: u32,

    // === TIME ===
    /// Ticks per in-game day. One tick is one minute.
    pub ticks_per_day: u64,

    // === TEXT GENERATION ===
    /// Use the offline canned text generator instead of calling an LLM
    pub cost_saving_mode: bool,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            map_width: 80,
            map_height: 43,
            seed: 42,

            default_eyesight: 8,
            player_log_capacity: 1024,
            npc_log_capacity: 512,

            hunger_per_tick: 1,
            thirst_per_tick: 1,
            sleepiness_per_tick: 1,
            loneliness_per_tick: 1,

            blocked_cell_penalty: 10,

            tree_energy_regen: 1,

            ticks_per_day: 24 * 60,

            cost_saving_mode: true,
        }
    }
}

impl SimulationConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a TOML document. Missing keys fall back to defaults.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: SimulationConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a TOML config file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> Result<()> {
        if self.map_width <= 0 || self.map_height <= 0 {
            return Err(RogueError::InvalidConfig(format!(
                "map must have a positive size, got {}x{}",
                self.map_width, self.map_height
            )));
        }

        if self.default_eyesight <= 0 {
            return Err(RogueError::InvalidConfig(
                "default_eyesight must be positive".into(),
            ));
        }

        if self.player_log_capacity == 0 || self.npc_log_capacity == 0 {
            return Err(RogueError::InvalidConfig(
                "observation log capacity must be at least 1".into(),
            ));
        }

        if self.ticks_per_day == 0 {
            return Err(RogueError::InvalidConfig("ticks_per_day must be positive".into()));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(SimulationConfig::default().validate().is_ok());
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config = SimulationConfig::from_toml_str(
            r#"
            map_width = 20
            map_height = 10
            seed = 7
            "#,
        )
        .unwrap();

        assert_eq!(config.map_width, 20);
        assert_eq!(config.map_height, 10);
        assert_eq!(config.seed, 7);
        assert_eq!(config.blocked_cell_penalty, 10);
        assert_eq!(config.default_eyesight, 8);
    }

    #[test]
    fn test_rejects_empty_map() {
        let result = SimulationConfig::from_toml_str("map_width = 0");
        assert!(matches!(result, Err(RogueError::InvalidConfig(_))));
    }

    #[test]
    fn test_rejects_malformed_toml() {
        let result = SimulationConfig::from_toml_str("map_width = \"wide\"");
        assert!(matches!(result, Err(RogueError::TomlError(_))));
    }
}
