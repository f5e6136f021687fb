use crate::actions::step;
use crate::core::error::{ActionResult, Impossible};
use crate::core::types::EntityId;
use crate::ecs::world::World;
use crate::entity::interactable::Interactable;
use crate::events::{EventKind, GameEvent};

pub fn building_interact(world: &mut World, actor: EntityId, dx: i32, dy: i32) -> ActionResult {
    let (from, (x, y)) = step(world, actor, dx, dy)?;
    let building = world
        .building_at(x, y)
        .ok_or_else(|| Impossible::new("No building to interact with."))?;

    world.emit(GameEvent::new(
        from,
        world.now(),
        EventKind::BuildingInteract { actor, building },
    ));

    Interactable::interact(world, actor, building)
}
