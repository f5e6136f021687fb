//! Building interactions

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::core::error::{ActionResult, Impossible};
use crate::core::types::EntityId;
use crate::ecs::world::World;
use crate::entity::factories;

/// Fruit tree. Energy regenerates on the tree's own tick; each apple that
/// falls costs `energy_for_apple`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tree {
    pub max_energy: u32,
    pub current_energy: u32,
    pub energy_for_apple: u32,
}

impl Default for Tree {
    fn default() -> Self {
        Self {
            max_energy: 100,
            current_energy: 10,
            energy_for_apple: 10,
        }
    }
}

impl Tree {
    pub fn apples_on_tree(&self) -> u32 {
        self.current_energy
            .checked_div(self.energy_for_apple)
            .unwrap_or(0)
    }

    pub fn regenerate(&mut self, amount: u32) {
        self.current_energy = self.current_energy.saturating_add(amount).min(self.max_energy);
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Interactable {
    Tree(Tree),
}

impl Interactable {
    /// Per-tick update, independent of any actor's turn
    pub fn tick(&mut self, energy_regen: u32) {
        match self {
            Interactable::Tree(tree) => tree.regenerate(energy_regen),
        }
    }

    /// Run the interaction of `building` on behalf of `actor`
    pub fn interact(world: &mut World, actor: EntityId, building: EntityId) -> ActionResult {
        let Some(entity) = world.get(building) else {
            return Err(Impossible::new("No building to interact with."));
        };
        let name = entity.name.clone();
        let (tx, ty) = entity.position();

        let Some(Interactable::Tree(tree)) = entity.building().map(|b| b.interactable.clone()) else {
            return Err(Impossible::new("No building to interact with."));
        };

        let apples = tree.apples_on_tree();
        if apples == 0 {
            world.observe_plain(actor, format!("There are no apples on the {name}."));
            return Ok(());
        }

        let mut to_drop = world.rng.gen_range(1..=apples);
        if let Some(Interactable::Tree(live)) = world
            .get_mut(building)
            .and_then(|e| e.building_mut())
            .map(|b| &mut b.interactable)
        {
            live.current_energy -= to_drop * live.energy_for_apple;
        }

        let mut attempts = to_drop * 2;
        let mut dropped = 0;
        while to_drop > 0 && attempts > 0 {
            let dx = world.rng.gen_range(1..=3) * if world.rng.gen_bool(0.5) { 1 } else { -1 };
            let dy = world.rng.gen_range(1..=3) * if world.rng.gen_bool(0.5) { 1 } else { -1 };
            let (x, y) = (tx + dx, ty + dy);

            if world.can_spawn_at(x, y) {
                match factories::spawn_apple(world, x, y) {
                    Ok(_) => {
                        to_drop -= 1;
                        dropped += 1;
                    }
                    Err(err) => tracing::warn!(%err, x, y, "apple could not be placed"),
                }
            }
            attempts -= 1;
        }

        tracing::debug!(%building, dropped, "tree harvested");
        world.observe_plain(actor, format!("I shook the {name} and {dropped} apples fell."));
        Ok(())
    }
}
