//! Item effects

use serde::{Deserialize, Serialize};

use crate::ai::Ai;
use crate::core::error::{ActionResult, Impossible};
use crate::core::types::{EntityId, Point};
use crate::ecs::world::World;
use crate::render::colors;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Consumable {
    Food { nutrition: u32, water_content: u32 },
    Healing { amount: i32 },
    Confusion { number_of_turns: u32 },
    Fireball { damage: i32, radius: i32 },
    Lightning { damage: i32, maximum_range: i32 },
}

impl Consumable {
    /// Whether using the item needs a target cell chosen by the user
    pub fn needs_target(&self) -> bool {
        matches!(self, Consumable::Confusion { .. } | Consumable::Fireball { .. })
    }

    /// Apply the effect of `item` used by `user`, aimed at `target`.
    ///
    /// The item is consumed only when the effect goes through.
    pub fn activate(&self, world: &mut World, user: EntityId, item: EntityId, target: Point) -> ActionResult {
        match *self {
            Consumable::Food {
                nutrition,
                water_content,
            } => {
                consume(world, user, item);
                let now = world.now();
                if let Some(actor) = world.actor_mut(user) {
                    actor.needs.eat(nutrition, water_content);
                    let text = format!(
                        "I am less hungry and thirsty! Hunger now: {}, Thirst now: {}",
                        actor.needs.hunger, actor.needs.thirst
                    );
                    actor.log.note(text, now);
                }
                Ok(())
            }

            Consumable::Healing { amount } => {
                consume(world, user, item);
                let now = world.now();
                if let Some(entity) = world.get_mut(user) {
                    entity.heal(amount, now);
                }
                Ok(())
            }

            Consumable::Confusion { number_of_turns } => {
                if !user_can_see(world, user, target) {
                    return Err(Impossible::new("You cannot target an area that you cannot see."));
                }
                let victim = world
                    .actor_at(target.0, target.1)
                    .ok_or_else(|| Impossible::new("You must select an enemy to target."))?;
                if victim == user {
                    return Err(Impossible::new("You cannot confuse yourself!"));
                }

                let victim_name = world.name_of(victim);
                world.observe(
                    user,
                    format!("The eyes of the {victim_name} look vacant, as it starts to stumble around!"),
                    colors::STATUS_EFFECT_APPLIED,
                );
                if let Some(actor) = world.actor_mut(victim) {
                    if let Some(previous) = actor.ai.take() {
                        actor.ai = Some(Ai::confused(previous, number_of_turns));
                    }
                }
                consume(world, user, item);
                Ok(())
            }

            Consumable::Fireball { damage, radius } => {
                if !user_can_see(world, user, target) {
                    return Err(Impossible::new("You cannot target an area that you cannot see."));
                }

                let radius = f64::from(radius);
                let hit: Vec<EntityId> = world
                    .living_actors()
                    .filter(|e| e.distance(target.0, target.1) <= radius)
                    .map(|e| e.id)
                    .collect();
                if hit.is_empty() {
                    return Err(Impossible::new("There are no targets in the radius."));
                }

                for victim in hit {
                    let name = world.name_of(victim);
                    world.observe(
                        user,
                        format!("The {name} is engulfed in a fiery explosion, taking {damage} damage!"),
                        colors::WHITE,
                    );
                    world.damage(victim, damage);
                }
                consume(world, user, item);
                Ok(())
            }

            Consumable::Lightning {
                damage,
                maximum_range,
            } => {
                let Some(origin) = world.get(user).map(|e| e.position()) else {
                    return Err(Impossible::new("No such actor."));
                };

                let mut closest = f64::from(maximum_range) + 1.0;
                let mut victim = None;
                for candidate in world.living_actors() {
                    if candidate.id == user || !user_can_see(world, user, candidate.position()) {
                        continue;
                    }
                    let distance = candidate.distance(origin.0, origin.1);
                    if distance < closest {
                        closest = distance;
                        victim = Some(candidate.id);
                    }
                }

                let victim = victim.ok_or_else(|| Impossible::new("No enemy is close enough to strike."))?;
                let name = world.name_of(victim);
                world.observe(
                    user,
                    format!("A lightning bolt strikes the {name} with a loud thunder, for {damage} damage!"),
                    colors::WHITE,
                );
                world.damage(victim, damage);
                consume(world, user, item);
                Ok(())
            }
        }
    }
}

fn user_can_see(world: &World, user: EntityId, (x, y): Point) -> bool {
    world.actor(user).is_some_and(|a| a.can_see(x, y))
}

/// Take the item out of the user's inventory and out of the world
fn consume(world: &mut World, user: EntityId, item: EntityId) {
    let name = world.name_of(item);
    if let Some(actor) = world.actor_mut(user) {
        actor.inventory.remove(item);
    }
    world.observe(user, format!("I consumed the {name}"), colors::WHITE);
    world.destroy(item);
}
