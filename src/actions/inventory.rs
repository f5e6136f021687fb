//! Picking up, dropping and using items

use crate::core::error::{ActionResult, Impossible};
use crate::core::types::{EntityId, Point};
use crate::ecs::world::World;
use crate::events::{EventKind, GameEvent};

pub fn pickup(world: &mut World, actor: EntityId) -> ActionResult {
    let (x, y) = world
        .get(actor)
        .map(|e| e.position())
        .ok_or_else(|| Impossible::new("No such actor."))?;

    let item = world
        .items()
        .find(|e| e.x == x && e.y == y)
        .map(|e| e.id)
        .ok_or_else(|| Impossible::new("There is nothing here to pick up."))?;

    world.stow(actor, item)?;

    let name = world.name_of(item);
    world.observe_plain(actor, format!("I picked up the {name}!"));
    world.emit(GameEvent::new((x, y), world.now(), EventKind::Pickup { actor, item }));
    Ok(())
}

fn held_item(world: &World, actor: EntityId, item: EntityId) -> Result<Point, Impossible> {
    let entity = world.get(actor).ok_or_else(|| Impossible::new("No such actor."))?;
    let holds = entity.actor().is_some_and(|a| a.inventory.contains(item));
    if !holds {
        return Err(Impossible::new("You do not have that item."));
    }
    Ok(entity.position())
}

pub fn drop(world: &mut World, actor: EntityId, item: EntityId) -> ActionResult {
    let (x, y) = held_item(world, actor, item)?;

    world
        .place(item, x, y)
        .map_err(|err| Impossible::new(err.to_string()))?;

    let name = world.name_of(item);
    world.observe_plain(actor, format!("I dropped the {name}."));
    world.emit(GameEvent::new((x, y), world.now(), EventKind::Drop { actor, item }));
    Ok(())
}

/// Hand the item to its consumable effect. The effect decides validity and
/// consumes the item on success.
pub fn use_item(world: &mut World, actor: EntityId, item: EntityId, target: Option<Point>) -> ActionResult {
    let here = held_item(world, actor, item)?;
    let consumable = world
        .get(item)
        .and_then(|e| e.item())
        .map(|i| i.consumable.clone())
        .ok_or_else(|| Impossible::new("That cannot be used."))?;
    if target.is_none() && consumable.needs_target() {
        return Err(Impossible::new("You must select a target."));
    }

    consumable.activate(world, actor, item, target.unwrap_or(here))?;

    world.emit(GameEvent::new(here, world.now(), EventKind::Use { actor, item }));
    Ok(())
}
