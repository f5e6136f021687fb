//! Self-observation. Each action writes a first-person report to the
//! actor's own log.

use crate::core::error::{ActionResult, Impossible};
use crate::core::types::EntityId;
use crate::ecs::world::World;
use crate::entity::inventory::Inventory;

fn no_actor() -> Impossible {
    Impossible::new("No such actor.")
}

/// Describe the tile underfoot and everything in view. Living actors seen
/// for the first time are recorded as met.
pub fn look_around(world: &mut World, me: EntityId) -> ActionResult {
    let entity = world.get(me).ok_or_else(no_actor)?;
    let actor = entity.actor().ok_or_else(no_actor)?;
    let (x, y) = entity.position();

    let tile = world.map.tile(x, y).map_or("nothing", |t| t.name());
    let mut lines = vec![format!("I am standing on {tile} at [{x}, {y}]. I see the following:")];

    let mut seen: Vec<_> = world
        .map_entities()
        .filter(|e| e.id != me && actor.can_see(e.x, e.y))
        .collect();
    seen.sort_by_key(|e| (e.x, e.y, e.id));

    let mut newly_met = Vec::new();
    for other in seen {
        lines.push(format!("  - {} at [{}, {}]", other.full_name(), other.x, other.y));
        if other.is_living_actor() {
            newly_met.push((other.full_name(), other.x, other.y));
        }
    }

    for (name, ox, oy) in newly_met {
        let is_new = world
            .actor_mut(me)
            .and_then(|a| a.relationships.as_mut())
            .is_some_and(|r| r.meet(&name));
        if is_new {
            world.observe_plain(me, format!("I met {name} at [{ox}, {oy}]"));
        }
    }

    world.observe_plain(me, lines.join("\n"));
    Ok(())
}

pub fn needs(world: &mut World, me: EntityId) -> ActionResult {
    let report = world.actor(me).ok_or_else(no_actor)?.needs.report();
    world.observe_plain(me, format!("My current needs: {report}"));
    Ok(())
}

pub fn inventory(world: &mut World, me: EntityId) -> ActionResult {
    let actor = world.actor(me).ok_or_else(no_actor)?;
    let names: Vec<String> = actor.inventory.items().iter().map(|&id| world.name_of(id)).collect();
    let mut report = Inventory::report(names.iter().map(String::as_str));
    if actor.inventory.gold > 0 {
        report.push_str(&format!(" I have {} gold.", actor.inventory.gold));
    }
    world.observe_plain(me, format!("My inventory: {report}"));
    Ok(())
}

pub fn stats(world: &mut World, me: EntityId) -> ActionResult {
    let report = world.actor(me).ok_or_else(no_actor)?.stats.report();
    world.observe_plain(me, format!("My stats: {report}"));
    Ok(())
}

pub fn relationships(world: &mut World, me: EntityId) -> ActionResult {
    let report = world
        .actor(me)
        .ok_or_else(no_actor)?
        .relationships
        .as_ref()
        .map(|r| r.report())
        .ok_or_else(|| Impossible::new("I have nobody to think about."))?;
    world.observe_plain(me, format!("My relationships: {report}"));
    Ok(())
}

pub fn identity(world: &mut World, me: EntityId) -> ActionResult {
    let report = world
        .actor(me)
        .ok_or_else(no_actor)?
        .identity
        .as_ref()
        .map(|i| i.report().to_string())
        .ok_or_else(|| Impossible::new("I do not know who I am."))?;
    world.observe_plain(me, format!("My origin: {report}"));
    Ok(())
}

/// Ask the text collaborator to sum up the log and remember the answer
pub fn reflect(world: &mut World, me: EntityId) -> ActionResult {
    match world.reflect_on(me) {
        Ok(reflection) => {
            world.observe_plain(me, reflection);
            Ok(())
        }
        Err(err) => {
            tracing::warn!(actor = %me, %err, "reflection failed");
            Err(Impossible::new("I cannot collect my thoughts."))
        }
    }
}
