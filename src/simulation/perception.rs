//! Perception system - what an actor notices of the events around it
//!
//! Every delivered event passes the visibility gate first: an actor never
//! records anything that happened outside its current field of view.

use crate::core::types::EntityId;
use crate::ecs::world::World;
use crate::events::{EventKind, GameEvent};
use crate::render::colors;

/// Handle one event on behalf of a subscribed actor
pub fn observe_event(world: &mut World, observer: EntityId, event: &GameEvent) {
    let Some((x, y)) = event.at else {
        return;
    };
    let Some(actor) = world.actor(observer) else {
        return;
    };
    if !actor.can_see(x, y) {
        tracing::trace!(%observer, x, y, signal = ?event.signal(), "out of view");
        return;
    }

    match event.kind {
        EventKind::Attack { actor, target } => {
            let now = world.now();
            if actor == observer {
                let text = format!("I attacked {}", world.full_name_of(target));
                if let Some(me) = world.actor_mut(observer) {
                    me.log.add(text, colors::WHITE, Some(event.clone()), now);
                }
            }
            if target == observer {
                let text = format!("I was attacked by {}", world.full_name_of(actor));
                if let Some(me) = world.actor_mut(observer) {
                    me.log.add(text, colors::WHITE, Some(event.clone()), now);
                }
            }
        }
        EventKind::Move { actor, dx, dy } if actor != observer => {
            tracing::debug!(%observer, mover = %actor, from_x = x, from_y = y, dx, dy, "saw a move");
        }
        _ => {
            tracing::trace!(%observer, kind = ?event.kind, "noticed");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::SimulationConfig;
    use crate::entity::factories;
    use crate::llm::text::CannedText;
    use crate::world::tile::TileKind;

    fn world() -> World {
        let config = SimulationConfig {
            map_width: 20,
            map_height: 20,
            ..SimulationConfig::default()
        };
        World::with_text_generator(config, Box::new(CannedText::new())).unwrap()
    }

    fn attack(actor: EntityId, target: EntityId, at: (i32, i32)) -> GameEvent {
        GameEvent::new(at, 1, EventKind::Attack { actor, target })
    }

    #[test]
    fn test_attack_is_recorded_by_both_sides() {
        let mut world = world();
        let a = factories::spawn_orc(&mut world, 5, 5).unwrap();
        let b = factories::spawn_troll(&mut world, 6, 5).unwrap();

        let event = attack(a, b, (5, 5));
        observe_event(&mut world, a, &event);
        observe_event(&mut world, b, &event);

        let b_name = world.get(b).unwrap().full_name();
        let a_name = world.get(a).unwrap().full_name();
        assert!(world.actor(a).unwrap().log.contains_text(&format!("I attacked {b_name}")));
        assert!(world.actor(b).unwrap().log.contains_text(&format!("I was attacked by {a_name}")));
        assert_eq!(world.actor(b).unwrap().log.last().unwrap().event, Some(event));
    }

    #[test]
    fn test_event_behind_wall_is_not_observed() {
        let mut world = world();
        world.map.fill_rect(10, 0, 10, 19, TileKind::Wall);
        let watcher = factories::spawn_orc(&mut world, 5, 5).unwrap();
        let a = factories::spawn_orc(&mut world, 15, 5).unwrap();
        let before = world.actor(watcher).unwrap().log.len();

        observe_event(&mut world, watcher, &attack(a, watcher, (15, 5)));
        assert_eq!(world.actor(watcher).unwrap().log.len(), before);
    }

    #[test]
    fn test_dead_actor_observes_nothing() {
        let mut world = world();
        let a = factories::spawn_orc(&mut world, 5, 5).unwrap();
        let b = factories::spawn_orc(&mut world, 6, 5).unwrap();
        world.damage(b, 100);
        let before = world.actor(b).unwrap().log.len();

        observe_event(&mut world, b, &attack(a, b, (5, 5)));
        assert_eq!(world.actor(b).unwrap().log.len(), before);
    }
}
