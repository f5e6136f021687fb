//! The acting entity variant and its component bundle

use serde::{Deserialize, Serialize};

use crate::ai::Ai;
use crate::core::types::Point;
use crate::entity::fighter::Fighter;
use crate::entity::identity::Identity;
use crate::entity::inventory::Inventory;
use crate::entity::needs::Needs;
use crate::entity::observation::ObservationLog;
use crate::entity::relationships::Relationships;
use crate::entity::stats::Stats;
use crate::events::EventSignal;
use crate::spatial::fov::compute_fov;
use crate::spatial::grid::Grid;
use crate::world::map::GameMap;

/// Components every actor carries, plus the optional social ones.
///
/// `ai == None` means the actor is dead; nothing else marks death.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Actor {
    pub fighter: Fighter,
    pub inventory: Inventory,
    pub needs: Needs,
    pub stats: Stats,
    pub log: ObservationLog,
    pub relationships: Option<Relationships>,
    pub identity: Option<Identity>,

    /// Cells in view after the last refresh
    pub visible: Grid<bool>,
    /// Every cell ever in view
    pub explored: Grid<bool>,
    pub eyesight: i32,

    pub ai: Option<Ai>,
    /// Fixed at construction
    pub signals: Vec<EventSignal>,
}

impl Actor {
    pub fn is_alive(&self) -> bool {
        self.ai.is_some()
    }

    /// Dead actors see nothing
    pub fn can_see(&self, x: i32, y: i32) -> bool {
        self.is_alive() && self.visible.is_set(x, y)
    }

    /// Recompute visibility from `origin` and fold it into explored memory
    pub fn update_fov(&mut self, map: &GameMap, origin: Point) {
        compute_fov(&mut self.visible, origin, self.eyesight, &|x, y| {
            map.is_transparent(x, y)
        });
        self.explored.union_with(&self.visible);
    }
}
