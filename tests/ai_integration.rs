//! Integration tests for the AI strategies running under the tick driver

use roguelife::actions::{Action, ActionKind};
use roguelife::ai::Ai;
use roguelife::core::config::SimulationConfig;
use roguelife::ecs::world::World;
use roguelife::entity::factories;
use roguelife::llm::text::CannedText;
use roguelife::simulation::run_tick;
use roguelife::spatial::grid::Grid;
use roguelife::world::{GameMap, TileKind};

fn world(width: i32, height: i32) -> World {
    let config = SimulationConfig {
        map_width: width,
        map_height: height,
        ..SimulationConfig::default()
    };
    World::with_text_generator(config, Box::new(CannedText::new())).unwrap()
}

#[test]
fn test_confusion_scroll_wears_off() {
    let mut world = world(20, 20);
    let player = factories::spawn_player(&mut world, 2, 2).unwrap();
    let orc = factories::spawn_orc(&mut world, 5, 2).unwrap();
    let scroll = factories::spawn_confusion_scroll(&mut world, 2, 2).unwrap();

    Action::new(player, ActionKind::Pickup).perform(&mut world).unwrap();
    Action::new(
        player,
        ActionKind::UseItem {
            item: scroll,
            target: Some((5, 2)),
        },
    )
    .perform(&mut world)
    .unwrap();

    assert_eq!(
        world.actor(orc).unwrap().ai,
        Some(Ai::confused(Ai::hostile(), 10))
    );
    assert!(!world.contains(scroll));

    for turn in 1..10 {
        run_tick(&mut world);
        match &world.actor(orc).unwrap().ai {
            Some(Ai::Confused { turns_remaining, .. }) => assert_eq!(*turns_remaining, 10 - turn),
            other => panic!("still confused after {turn} turns, got {other:?}"),
        }
    }

    run_tick(&mut world);
    assert_eq!(world.actor(orc).unwrap().ai, Some(Ai::hostile()));
    assert!(world
        .actor(orc)
        .unwrap()
        .log
        .contains_text("I am no longer confused."));
}

#[test]
fn test_cannot_confuse_self() {
    let mut world = world(20, 20);
    let player = factories::spawn_player(&mut world, 2, 2).unwrap();
    let scroll = factories::spawn_confusion_scroll(&mut world, 2, 2).unwrap();
    Action::new(player, ActionKind::Pickup).perform(&mut world).unwrap();

    let result = Action::new(
        player,
        ActionKind::UseItem {
            item: scroll,
            target: Some((2, 2)),
        },
    )
    .perform(&mut world);

    assert_eq!(result.unwrap_err().reason(), "You cannot confuse yourself!");
    assert!(world.actor(player).unwrap().inventory.contains(scroll));
}

#[test]
fn test_explorer_memory_only_grows() {
    let mut world = world(30, 20);
    let mut map = GameMap::new(30, 20, TileKind::Floor);
    map.fill_rect(14, 0, 14, 15, TileKind::Wall);
    world.map = map;
    let explorer = factories::spawn_exploring_human(&mut world, 3, 3).unwrap();

    let mut previous: Grid<bool> = world.actor(explorer).unwrap().explored.clone();
    for _ in 0..300 {
        run_tick(&mut world);
        let actor = world.actor(explorer).unwrap();
        assert!(actor.explored.is_superset_of(&actor.visible));
        assert!(actor.explored.is_superset_of(&previous));
        previous = actor.explored.clone();
    }

    // It has been behind the wall by now
    let actor = world.actor(explorer).unwrap();
    assert!(actor.explored.is_set(20, 5));
}

#[test]
fn test_wanderer_keeps_a_diary() {
    let mut world = world(20, 20);
    let human = factories::spawn_wandering_human(&mut world, 10, 10).unwrap();
    let born = world.actor(human).unwrap().stats.age_minutes;

    for _ in 0..300 {
        run_tick(&mut world);
    }

    let actor = world.actor(human).unwrap();
    assert!(actor.is_alive());
    assert_eq!(actor.stats.age_minutes, born + 300);
    assert!(actor.log.iter().any(|o| o.text.starts_with("I am standing on")));
}

#[test]
fn test_monsters_meet_through_look_around() {
    let mut world = world(20, 20);
    let human = factories::spawn_wandering_human(&mut world, 5, 5).unwrap();
    let orc = factories::spawn_orc(&mut world, 7, 5).unwrap();

    Action::new(human, ActionKind::LookAround).perform(&mut world).unwrap();
    Action::new(human, ActionKind::LookAround).perform(&mut world).unwrap();

    let orc_name = world.full_name_of(orc);
    let actor = world.actor(human).unwrap();
    let meetings = actor
        .log
        .iter()
        .filter(|o| o.text.starts_with(&format!("I met {orc_name}")))
        .count();
    assert_eq!(meetings, 1);
    assert_eq!(
        actor.relationships.as_ref().unwrap().get(&orc_name),
        Some(0)
    );
}

#[test]
fn test_targeted_scroll_needs_a_target() {
    let mut world = world(20, 20);
    let player = factories::spawn_player(&mut world, 2, 2).unwrap();
    factories::spawn_orc(&mut world, 3, 2).unwrap();
    let scroll = factories::spawn_confusion_scroll(&mut world, 2, 2).unwrap();
    Action::new(player, ActionKind::Pickup).perform(&mut world).unwrap();

    let result = Action::new(player, ActionKind::UseItem { item: scroll, target: None }).perform(&mut world);

    assert_eq!(result.unwrap_err().reason(), "You must select a target.");
    assert!(world.actor(player).unwrap().inventory.contains(scroll));
}
