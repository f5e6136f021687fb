//! Walk toward the nearest unexplored ground

use crate::actions::ActionKind;
use crate::core::types::{EntityId, DIRECTIONS};
use crate::ecs::world::World;
use crate::spatial::grid::Grid;
use crate::spatial::pathfinding::distance_map;

/// Distance field over walkable, unoccupied cells, seeded from every such
/// cell `me` has not explored yet.
pub fn frontier_distances(world: &World, me: EntityId) -> Option<Grid<Option<u32>>> {
    let explored = &world.actor(me)?.explored;

    let mut occupied = Grid::new(world.map.width, world.map.height, false);
    for entity in world.map_entities().filter(|e| e.blocks_movement) {
        occupied.set(entity.x, entity.y, true);
    }

    let passable = |x: i32, y: i32| world.map.is_walkable(x, y) && !occupied.is_set(x, y);
    let frontier: Vec<_> = world
        .map
        .tiles()
        .iter()
        .map(|(p, _)| p)
        .filter(|&(x, y)| passable(x, y) && !explored.is_set(x, y))
        .collect();

    Some(distance_map(world.map.width, world.map.height, frontier, &passable))
}

/// Step to the neighbour with the smallest finite distance. The first
/// neighbour in `DIRECTIONS` order wins ties. Waits when nothing is reachable.
pub fn plan(world: &World, me: EntityId) -> ActionKind {
    let Some((x, y)) = world.get(me).map(|e| e.position()) else {
        return ActionKind::Wait;
    };
    let Some(distances) = frontier_distances(world, me) else {
        return ActionKind::Wait;
    };

    let mut best: Option<(u32, i32, i32)> = None;
    for &(dx, dy) in &DIRECTIONS {
        let Some(&Some(d)) = distances.get(x + dx, y + dy) else {
            continue;
        };
        if best.map_or(true, |(min, _, _)| d < min) {
            best = Some((d, dx, dy));
        }
    }

    match best {
        Some((_, dx, dy)) => ActionKind::Move { dx, dy },
        None => ActionKind::Wait,
    }
}
