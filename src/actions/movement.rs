//! Directional actions: move, melee and the bump dispatcher

use crate::actions::{interact, step, BLOCKED};
use crate::core::error::{ActionResult, Impossible};
use crate::core::types::EntityId;
use crate::ecs::world::World;
use crate::entity::names::capitalize;
use crate::events::{EventKind, GameEvent};
use crate::render::colors;

pub fn move_by(world: &mut World, actor: EntityId, dx: i32, dy: i32) -> ActionResult {
    let (from, (x, y)) = step(world, actor, dx, dy)?;

    if !world.map.in_bounds(x, y) || !world.map.is_walkable(x, y) || world.blocking_entity_at(x, y).is_some() {
        return Err(Impossible::new(BLOCKED));
    }

    // Listeners see the world as it was before the step
    world.emit(GameEvent::new(from, world.now(), EventKind::Move { actor, dx, dy }));

    if let Some(entity) = world.get_mut(actor) {
        entity.x = x;
        entity.y = y;
    }
    Ok(())
}

pub fn melee(world: &mut World, actor: EntityId, dx: i32, dy: i32) -> ActionResult {
    let (from, (x, y)) = step(world, actor, dx, dy)?;
    let target = world
        .actor_at(x, y)
        .filter(|&target| target != actor)
        .ok_or_else(|| Impossible::new("Nothing to attack."))?;

    let (Some(attacker), Some(defender)) = (world.actor(actor), world.actor(target)) else {
        return Err(Impossible::new("Nothing to attack."));
    };
    let damage = attacker.fighter.damage_against(&defender.fighter);

    world.emit(GameEvent::new(from, world.now(), EventKind::Attack { actor, target }));

    let description = format!(
        "{} attacks {}",
        capitalize(&world.name_of(actor)),
        world.name_of(target)
    );
    let color = if world.player() == Some(actor) {
        colors::PLAYER_ATK
    } else {
        colors::ENEMY_ATK
    };

    if damage > 0 {
        world.observe(actor, format!("{description} for {damage} hit points."), color);
        world.damage(target, damage);
    } else {
        world.observe(actor, format!("{description} but does no damage."), color);
    }
    Ok(())
}

/// Attack a living actor in the way, else use a building, else step.
/// Bumping into one's own cell does nothing.
pub fn bump(world: &mut World, actor: EntityId, dx: i32, dy: i32) -> ActionResult {
    if (dx, dy) == (0, 0) {
        return Ok(());
    }
    let (_, (x, y)) = step(world, actor, dx, dy)?;

    if world.actor_at(x, y).is_some() {
        melee(world, actor, dx, dy)
    } else if world.building_at(x, y).is_some() {
        interact::building_interact(world, actor, dx, dy)
    } else {
        move_by(world, actor, dx, dy)
    }
}

#[cfg(test)]
mod tests {
    use std::io;
    use std::sync::{Arc, Mutex};

    use tracing_subscriber::fmt::MakeWriter;

    use super::*;
    use crate::actions::{Action, ActionKind};
    use crate::core::config::SimulationConfig;
    use crate::entity::factories;
    use crate::llm::text::CannedText;
    use crate::world::tile::TileKind;

    fn world() -> World {
        let config = SimulationConfig {
            map_width: 10,
            map_height: 10,
            ..SimulationConfig::default()
        };
        World::with_text_generator(config, Box::new(CannedText::new())).unwrap()
    }

    fn position(world: &World, id: EntityId) -> (i32, i32) {
        world.get(id).unwrap().position()
    }

    fn reason(result: ActionResult) -> String {
        result.unwrap_err().reason().to_string()
    }

    #[test]
    fn test_overflowing_delta_is_blocked() {
        let mut world = world();
        let player = factories::spawn_player(&mut world, 5, 5).unwrap();

        for (dx, dy) in [(i32::MAX, 0), (0, i32::MAX), (i32::MIN, i32::MIN)] {
            let moved = Action::new(player, ActionKind::Move { dx, dy }).perform(&mut world);
            assert_eq!(reason(moved), BLOCKED);
            let hit = Action::new(player, ActionKind::Melee { dx, dy }).perform(&mut world);
            assert!(hit.is_err());
            let bumped = Action::new(player, ActionKind::Bump { dx, dy }).perform(&mut world);
            assert!(bumped.is_err());
            let used = Action::new(player, ActionKind::BuildingInteract { dx, dy }).perform(&mut world);
            assert!(used.is_err());
        }
        assert_eq!(position(&world, player), (5, 5));
    }

    #[test]
    fn test_wall_blocks_movement() {
        let mut world = world();
        world.map.set_tile(6, 5, TileKind::Wall);
        let player = factories::spawn_player(&mut world, 5, 5).unwrap();

        assert_eq!(reason(move_by(&mut world, player, 1, 0)), BLOCKED);
        assert_eq!(position(&world, player), (5, 5));
    }

    #[test]
    fn test_living_actor_blocks_movement() {
        let mut world = world();
        let player = factories::spawn_player(&mut world, 5, 5).unwrap();
        factories::spawn_orc(&mut world, 5, 6).unwrap();

        assert_eq!(reason(move_by(&mut world, player, 0, 1)), BLOCKED);
        assert_eq!(position(&world, player), (5, 5));
    }

    #[test]
    fn test_corpse_can_be_walked_over() {
        let mut world = world();
        let player = factories::spawn_player(&mut world, 5, 5).unwrap();
        let orc = factories::spawn_orc(&mut world, 6, 6).unwrap();
        world.damage(orc, 100);
        assert!(!world.get(orc).unwrap().blocks_movement);

        move_by(&mut world, player, 1, 1).unwrap();
        assert_eq!(position(&world, player), (6, 6));
    }

    #[test]
    fn test_melee_on_own_cell_hits_nothing() {
        let mut world = world();
        let player = factories::spawn_player(&mut world, 5, 5).unwrap();
        let hp = world.actor(player).unwrap().fighter.hp();

        assert_eq!(reason(melee(&mut world, player, 0, 0)), "Nothing to attack.");
        assert_eq!(world.actor(player).unwrap().fighter.hp(), hp);
    }

    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl io::Write for Captured {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl<'a> MakeWriter<'a> for Captured {
        type Writer = Captured;

        fn make_writer(&'a self) -> Self::Writer {
            self.clone()
        }
    }

    #[test]
    fn test_watchers_see_the_mover_where_it_started() {
        let mut world = world();
        let watcher = factories::spawn_wandering_human(&mut world, 2, 5).unwrap();
        let mover = factories::spawn_wandering_human(&mut world, 5, 5).unwrap();

        let output = Captured::default();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(output.clone())
            .with_ansi(false)
            .with_max_level(tracing::Level::DEBUG)
            .finish();
        tracing::subscriber::with_default(subscriber, || {
            move_by(&mut world, mover, 1, 0).unwrap();
        });

        let text = String::from_utf8(output.0.lock().unwrap().clone()).unwrap();
        let seen = text
            .lines()
            .find(|line| line.contains("saw a move") && line.contains(&format!("observer={watcher}")))
            .unwrap();
        assert!(seen.contains("from_x=5"), "{seen}");
        assert!(seen.contains("from_y=5"), "{seen}");
        assert_eq!(position(&world, mover), (6, 5));
    }
}
