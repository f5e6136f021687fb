//! Idle behaviour: occasional self-observation, otherwise random steps

use rand::Rng;

use crate::actions::ActionKind;
use crate::core::types::EntityId;
use crate::ecs::world::World;

/// Thresholds checked top to bottom, each against a fresh draw
const CASCADE: [(f64, ActionKind); 6] = [
    (0.01, ActionKind::ObserveStats),
    (0.02, ActionKind::ObserveNeeds),
    (0.03, ActionKind::ObserveInventory),
    (0.05, ActionKind::ObserveIdentity),
    (0.1, ActionKind::LookAround),
    (0.2, ActionKind::Wait),
];

pub fn plan(world: &mut World, _me: EntityId) -> ActionKind {
    let dx = world.rng.gen_range(-1..=1);
    let dy = world.rng.gen_range(-1..=1);

    for (threshold, action) in CASCADE {
        if world.rng.gen::<f64>() < threshold {
            return action;
        }
    }

    if (dx, dy) == (0, 0) {
        ActionKind::Wait
    } else {
        ActionKind::Move { dx, dy }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::SimulationConfig;
    use crate::llm::text::CannedText;

    #[test]
    fn test_mostly_moves_and_stays_in_range() {
        let mut world =
            World::with_text_generator(SimulationConfig::default(), Box::new(CannedText::new())).unwrap();

        let mut moves = 0;
        for _ in 0..1000 {
            match plan(&mut world, EntityId(1)) {
                ActionKind::Move { dx, dy } => {
                    assert!((-1..=1).contains(&dx) && (-1..=1).contains(&dy));
                    assert_ne!((dx, dy), (0, 0));
                    moves += 1;
                }
                ActionKind::Wait
                | ActionKind::ObserveStats
                | ActionKind::ObserveNeeds
                | ActionKind::ObserveInventory
                | ActionKind::ObserveIdentity
                | ActionKind::LookAround => {}
                other => panic!("unexpected {other:?}"),
            }
        }
        // Independent draws leave roughly 0.99*0.98*0.97*0.95*0.9*0.8 * 8/9 of turns to moves
        assert!(moves > 400 && moves < 750, "moves = {moves}");
    }
}
