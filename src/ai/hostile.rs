//! Pursuit of the player over a crowd-aware cost grid

use std::collections::VecDeque;

use crate::actions::ActionKind;
use crate::core::types::{chebyshev, EntityId, Point};
use crate::ecs::world::World;
use crate::spatial::pathfinding::find_path;

/// Melee when adjacent and seen, re-path when seen, otherwise follow the
/// cached path or wait.
pub fn plan(path: &mut VecDeque<Point>, world: &World, me: EntityId) -> ActionKind {
    let Some(here) = world.get(me).map(|e| e.position()) else {
        return ActionKind::Wait;
    };
    let Some(target) = world.player().and_then(|p| world.get(p)).map(|e| e.position()) else {
        return ActionKind::Wait;
    };

    let (dx, dy) = (target.0 - here.0, target.1 - here.1);

    if world.player_can_see(here.0, here.1) {
        if chebyshev(here, target) <= 1 {
            return ActionKind::Melee { dx, dy };
        }
        *path = path_to(world, here, target);
    }

    match path.pop_front() {
        Some((x, y)) => ActionKind::Move {
            dx: x - here.0,
            dy: y - here.1,
        },
        None => ActionKind::Wait,
    }
}

/// Steps from `start` (exclusive) to `goal` (inclusive). Empty if unreachable.
pub fn path_to(world: &World, start: Point, goal: Point) -> VecDeque<Point> {
    let cost = world.cost_grid();
    find_path(&cost, start, goal)
        .map(|steps| steps.into_iter().skip(1).collect())
        .unwrap_or_default()
}
