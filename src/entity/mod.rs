//! Grid-resident entities
//!
//! An `Entity` carries the shared attributes (position, name, glyph,
//! blocking, draw order) and exactly one variant body. Entities never hold
//! references to each other; relations go through `EntityId`s resolved
//! against the world's arena.

pub mod actor;
pub mod consumable;
pub mod factories;
pub mod fighter;
pub mod identity;
pub mod interactable;
pub mod inventory;
pub mod names;
pub mod needs;
pub mod observation;
pub mod relationships;
pub mod stats;

use serde::{Deserialize, Serialize};

use crate::core::types::{euclidean, EntityId, EntityKind, Point, RenderOrder, Rgb, Tick};
use crate::render::colors;

pub use actor::Actor;
pub use consumable::Consumable;
pub use interactable::Interactable;

/// Where an entity currently lives
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Container {
    Map,
    Inventory(EntityId),
    /// Built but not yet spawned
    Detached,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Item {
    pub consumable: Consumable,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Building {
    pub interactable: Interactable,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum EntityBody {
    Actor(Box<Actor>),
    Item(Item),
    Building(Building),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Entity {
    /// Assigned by the world on spawn
    pub id: EntityId,
    pub name: String,
    pub kind: EntityKind,
    pub x: i32,
    pub y: i32,
    pub glyph: char,
    pub color: Rgb,
    pub blocks_movement: bool,
    pub render_order: RenderOrder,
    pub container: Container,
    pub body: EntityBody,
}

impl Entity {
    pub fn new_actor(name: impl Into<String>, kind: EntityKind, glyph: char, color: Rgb, actor: Actor) -> Self {
        Self {
            id: EntityId(0),
            name: name.into(),
            kind,
            x: 0,
            y: 0,
            glyph,
            color,
            blocks_movement: true,
            render_order: RenderOrder::Actor,
            container: Container::Detached,
            body: EntityBody::Actor(Box::new(actor)),
        }
    }

    pub fn new_item(name: impl Into<String>, glyph: char, color: Rgb, consumable: Consumable) -> Self {
        Self {
            id: EntityId(0),
            name: name.into(),
            kind: EntityKind::Item,
            x: 0,
            y: 0,
            glyph,
            color,
            blocks_movement: false,
            render_order: RenderOrder::Item,
            container: Container::Detached,
            body: EntityBody::Item(Item { consumable }),
        }
    }

    pub fn new_building(name: impl Into<String>, glyph: char, color: Rgb, interactable: Interactable) -> Self {
        Self {
            id: EntityId(0),
            name: name.into(),
            kind: EntityKind::Building,
            x: 0,
            y: 0,
            glyph,
            color,
            blocks_movement: true,
            render_order: RenderOrder::Building,
            container: Container::Detached,
            body: EntityBody::Building(Building { interactable }),
        }
    }

    pub fn at(mut self, x: i32, y: i32) -> Self {
        self.x = x;
        self.y = y;
        self
    }

    pub fn position(&self) -> Point {
        (self.x, self.y)
    }

    /// `Name (KIND)`
    pub fn full_name(&self) -> String {
        format!("{} ({})", self.name, self.kind.label())
    }

    pub fn distance(&self, x: i32, y: i32) -> f64 {
        euclidean(self.position(), (x, y))
    }

    pub fn actor(&self) -> Option<&Actor> {
        match &self.body {
            EntityBody::Actor(actor) => Some(actor),
            _ => None,
        }
    }

    pub fn actor_mut(&mut self) -> Option<&mut Actor> {
        match &mut self.body {
            EntityBody::Actor(actor) => Some(actor),
            _ => None,
        }
    }

    pub fn item(&self) -> Option<&Item> {
        match &self.body {
            EntityBody::Item(item) => Some(item),
            _ => None,
        }
    }

    pub fn building(&self) -> Option<&Building> {
        match &self.body {
            EntityBody::Building(building) => Some(building),
            _ => None,
        }
    }

    pub fn building_mut(&mut self) -> Option<&mut Building> {
        match &mut self.body {
            EntityBody::Building(building) => Some(building),
            _ => None,
        }
    }

    pub fn is_living_actor(&self) -> bool {
        self.actor().is_some_and(Actor::is_alive)
    }

    /// Append to this entity's own log, if it keeps one
    pub fn observe(&mut self, text: impl Into<String>, color: Rgb, now: Tick) {
        if let Some(actor) = self.actor_mut() {
            actor.log.add(text, color, None, now);
        }
    }

    /// Subtract hit points. Dropping to zero kills a living actor; further
    /// damage to a corpse changes nothing.
    pub fn take_damage(&mut self, amount: i32, now: Tick) {
        let Some(actor) = self.actor_mut() else {
            return;
        };
        if !actor.is_alive() {
            return;
        }

        let hp = actor.fighter.set_hp(actor.fighter.hp() - amount);
        actor.log.note(
            format!("I took damage! My HP decreased by {amount} to {hp}"),
            now,
        );

        if hp == 0 {
            self.die(now);
        }
    }

    /// Restore hit points up to the max. Returns the amount recovered.
    pub fn heal(&mut self, amount: i32, now: Tick) -> i32 {
        let Some(actor) = self.actor_mut() else {
            return 0;
        };
        let before = actor.fighter.hp();
        if before == actor.fighter.max_hp {
            return 0;
        }

        let after = actor.fighter.set_hp(before + amount.max(0));
        let recovered = after - before;
        actor.log.add(
            format!("I healed! My HP increased by {recovered} to {after}"),
            colors::HEALTH_RECOVERED,
            None,
            now,
        );
        recovered
    }

    fn die(&mut self, now: Tick) {
        let was = self.full_name();
        let Some(actor) = self.actor_mut() else {
            return;
        };
        if actor.ai.take().is_none() {
            return;
        }
        actor.log.add("I am dead!", colors::DEATH, None, now);

        self.glyph = '%';
        self.color = colors::DEATH;
        self.blocks_movement = false;
        self.name = format!("remains of {}", self.name);
        self.render_order = RenderOrder::Corpse;

        tracing::info!(entity = %self.id, name = %was, tick = now, "died");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::factories::actor_template;

    fn orc(hp: i32) -> Entity {
        let mut entity = Entity::new_actor("Gorb", EntityKind::Orc, 'o', colors::ORC, actor_template(10, 10, hp, 0, 3));
        entity.id = EntityId(1);
        entity
    }

    #[test]
    fn test_full_name() {
        assert_eq!(orc(10).full_name(), "Gorb (ORC)");
    }

    #[test]
    fn test_damage_until_death() {
        let mut entity = orc(10);
        entity.take_damage(3, 1);
        assert_eq!(entity.actor().unwrap().fighter.hp(), 7);
        assert!(entity.is_living_actor());

        entity.take_damage(7, 2);
        assert!(!entity.is_living_actor());
        assert_eq!(entity.glyph, '%');
        assert_eq!(entity.name, "remains of Gorb");
        assert!(!entity.blocks_movement);
        assert_eq!(entity.render_order, RenderOrder::Corpse);
    }

    #[test]
    fn test_death_is_idempotent() {
        let mut entity = orc(5);
        entity.take_damage(50, 1);
        entity.take_damage(50, 2);

        assert_eq!(entity.name, "remains of Gorb");
        let deaths = entity
            .actor()
            .unwrap()
            .log
            .iter()
            .filter(|o| o.text == "I am dead!")
            .count();
        assert_eq!(deaths, 1);
    }

    #[test]
    fn test_heal_caps_at_max() {
        let mut entity = orc(10);
        assert_eq!(entity.heal(5, 0), 0);
        entity.take_damage(4, 1);
        assert_eq!(entity.heal(10, 2), 4);
        assert_eq!(entity.actor().unwrap().fighter.hp(), 10);
    }
}
