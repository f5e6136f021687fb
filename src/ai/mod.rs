//! Per-actor decision strategies
//!
//! A strategy only plans: it reads the world (and may draw from the RNG or
//! rewrite itself) and returns the action to perform. The tick driver stores
//! the updated strategy back on the actor before performing, so an actor
//! killed by its own action stays dead.

pub mod confused;
pub mod explore;
pub mod hostile;
pub mod wander;

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::actions::ActionKind;
use crate::core::types::{EntityId, Point};
use crate::ecs::world::World;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Ai {
    /// Acts only on direct input
    Player,
    /// Chases the player; keeps the last computed path between ticks
    Hostile { path: VecDeque<Point> },
    /// Stumbles around, then reverts to `previous`
    Confused {
        previous: Box<Ai>,
        turns_remaining: u32,
    },
    AutoExplore,
    Wanderer,
}

impl Ai {
    pub fn hostile() -> Self {
        Ai::Hostile {
            path: VecDeque::new(),
        }
    }

    pub fn confused(previous: Ai, turns_remaining: u32) -> Self {
        Ai::Confused {
            previous: Box::new(previous),
            turns_remaining,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Ai::Player => "player",
            Ai::Hostile { .. } => "hostile",
            Ai::Confused { .. } => "confused",
            Ai::AutoExplore => "auto-explore",
            Ai::Wanderer => "wanderer",
        }
    }

    /// Decide this tick's action for `me`. `None` means the turn is spent
    /// without acting.
    pub fn plan(&mut self, world: &mut World, me: EntityId) -> Option<ActionKind> {
        match self {
            Ai::Player => None,
            Ai::Hostile { path } => Some(hostile::plan(path, world, me)),
            Ai::Confused { .. } => confused::plan(self, world, me),
            Ai::AutoExplore => Some(explore::plan(world, me)),
            Ai::Wanderer => Some(wander::plan(world, me)),
        }
    }
}
