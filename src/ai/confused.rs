//! Temporary random stumbling

use rand::seq::SliceRandom;

use crate::actions::ActionKind;
use crate::ai::Ai;
use crate::core::types::{EntityId, DIRECTIONS};
use crate::ecs::world::World;
use crate::render::colors;

/// Bump in a random direction and count down. When the counter runs out the
/// strategy turns back into the one it replaced.
pub fn plan(ai: &mut Ai, world: &mut World, me: EntityId) -> Option<ActionKind> {
    let Ai::Confused {
        previous,
        turns_remaining,
    } = ai
    else {
        return None;
    };

    if *turns_remaining == 0 {
        let restored = std::mem::replace(previous.as_mut(), Ai::Player);
        *ai = restored;
        announce_recovery(world, me);
        return None;
    }

    let &(dx, dy) = DIRECTIONS.choose(&mut world.rng)?;
    *turns_remaining -= 1;

    if *turns_remaining == 0 {
        let restored = std::mem::replace(previous.as_mut(), Ai::Player);
        *ai = restored;
        announce_recovery(world, me);
    }

    Some(ActionKind::Bump { dx, dy })
}

fn announce_recovery(world: &mut World, me: EntityId) {
    world.observe_plain(me, "I am no longer confused.");

    let Some(player) = world.player().filter(|&p| p != me) else {
        return;
    };
    let Some((x, y)) = world.get(me).map(|e| e.position()) else {
        return;
    };
    if world.player_can_see(x, y) {
        let name = world.name_of(me);
        world.observe(player, format!("The {name} is no longer confused."), colors::WHITE);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::SimulationConfig;
    use crate::llm::text::CannedText;

    fn world() -> World {
        let config = SimulationConfig {
            map_width: 5,
            map_height: 5,
            ..SimulationConfig::default()
        };
        World::with_text_generator(config, Box::new(CannedText::new())).unwrap()
    }

    #[test]
    fn test_reverts_after_exact_turn_count() {
        let mut world = world();
        let mut ai = Ai::confused(Ai::Wanderer, 3);

        for _ in 0..3 {
            let action = ai.plan(&mut world, crate::core::types::EntityId(1));
            assert!(matches!(action, Some(ActionKind::Bump { dx, dy }) if DIRECTIONS.contains(&(dx, dy))));
        }
        assert_eq!(ai, Ai::Wanderer);
    }

    #[test]
    fn test_zero_turns_reverts_without_acting() {
        let mut world = world();
        let mut ai = Ai::confused(Ai::hostile(), 0);
        assert_eq!(ai.plan(&mut world, crate::core::types::EntityId(1)), None);
        assert_eq!(ai, Ai::hostile());
    }
}
