//! Integration tests for melee and offensive items

use roguelife::actions::{Action, ActionKind};
use roguelife::ai::Ai;
use roguelife::core::config::SimulationConfig;
use roguelife::core::types::{EntityId, EntityKind, RenderOrder};
use roguelife::ecs::world::World;
use roguelife::entity::{factories, Entity};
use roguelife::llm::text::CannedText;
use roguelife::render::colors;

fn world(width: i32, height: i32) -> World {
    let config = SimulationConfig {
        map_width: width,
        map_height: height,
        ..SimulationConfig::default()
    };
    World::with_text_generator(config, Box::new(CannedText::new())).unwrap()
}

fn brute(world: &mut World, name: &str, hp: i32, defense: i32, power: i32, at: (i32, i32)) -> EntityId {
    let actor = factories::actor_template(world.map.width, world.map.height, hp, defense, power);
    let entity = Entity::new_actor(name, EntityKind::Orc, 'o', colors::ORC, actor).at(at.0, at.1);
    world.spawn(entity).unwrap()
}

fn hp(world: &World, id: EntityId) -> i32 {
    world.actor(id).unwrap().fighter.hp()
}

fn deaths(world: &World, id: EntityId) -> usize {
    world
        .actor(id)
        .unwrap()
        .log
        .iter()
        .filter(|o| o.text == "I am dead!")
        .count()
}

#[test]
fn test_melee_until_death() {
    let mut world = world(10, 10);
    let attacker = brute(&mut world, "Attacker", 10, 0, 5, (2, 2));
    let defender = brute(&mut world, "Defender", 10, 2, 3, (3, 2));

    let hit = Action::new(attacker, ActionKind::Melee { dx: 1, dy: 0 });
    hit.perform(&mut world).unwrap();
    assert_eq!(hp(&world, defender), 7);
    assert!(world
        .actor(attacker)
        .unwrap()
        .log
        .contains_text("Attacker attacks Defender for 3 hit points."));
    assert!(world
        .actor(defender)
        .unwrap()
        .log
        .contains_text("I was attacked by Attacker (ORC)"));

    for _ in 0..3 {
        hit.perform(&mut world).unwrap();
    }
    assert_eq!(hp(&world, defender), 0);

    let corpse = world.get(defender).unwrap();
    assert!(!corpse.is_living_actor());
    assert_eq!(corpse.glyph, '%');
    assert_eq!(corpse.render_order, RenderOrder::Corpse);
    assert!(!corpse.blocks_movement);
    assert_eq!(deaths(&world, defender), 1);

    // Nothing left to hit, and the corpse does not die twice
    let again = hit.perform(&mut world);
    assert_eq!(again.unwrap_err().reason(), "Nothing to attack.");
    world.damage(defender, 5);
    assert_eq!(deaths(&world, defender), 1);
}

#[test]
fn test_weak_attack_does_no_damage() {
    let mut world = world(10, 10);
    let attacker = brute(&mut world, "Weakling", 10, 0, 1, (2, 2));
    let defender = brute(&mut world, "Wall", 10, 4, 1, (2, 3));

    Action::new(attacker, ActionKind::Melee { dx: 0, dy: 1 })
        .perform(&mut world)
        .unwrap();

    assert_eq!(hp(&world, defender), 10);
    assert!(world
        .actor(attacker)
        .unwrap()
        .log
        .contains_text("Weakling attacks Wall but does no damage."));
}

#[test]
fn test_dead_cannot_act() {
    let mut world = world(10, 10);
    let victim = brute(&mut world, "Victim", 1, 0, 1, (2, 2));
    world.damage(victim, 1);

    let result = Action::new(victim, ActionKind::Wait).perform(&mut world);
    assert_eq!(result.unwrap_err().reason(), "The dead cannot act.");
}

#[test]
fn test_bump_attacks_living_actor() {
    let mut world = world(10, 10);
    let attacker = brute(&mut world, "Attacker", 10, 0, 5, (2, 2));
    let defender = brute(&mut world, "Defender", 10, 0, 3, (3, 3));

    Action::new(attacker, ActionKind::Bump { dx: 1, dy: 1 })
        .perform(&mut world)
        .unwrap();

    assert_eq!(hp(&world, defender), 5);
    assert_eq!(world.get(attacker).unwrap().position(), (2, 2));
}

fn hold(world: &mut World, owner: EntityId, item: EntityId) {
    let (x, y) = world.get(owner).unwrap().position();
    world.place(item, x, y).unwrap();
    Action::new(owner, ActionKind::Pickup).perform(world).unwrap();
    assert!(world.actor(owner).unwrap().inventory.contains(item));
}

#[test]
fn test_lightning_strikes_nearest_visible_enemy() {
    let mut world = world(20, 20);
    let player = factories::spawn_player(&mut world, 5, 5).unwrap();
    let near = brute(&mut world, "Near", 30, 0, 1, (7, 5));
    let far = brute(&mut world, "Far", 30, 0, 1, (9, 5));
    let scroll = factories::spawn_lightning_scroll(&mut world, 0, 0).unwrap();
    hold(&mut world, player, scroll);

    Action::new(player, ActionKind::UseItem { item: scroll, target: None })
        .perform(&mut world)
        .unwrap();

    assert_eq!(hp(&world, near), 10);
    assert_eq!(hp(&world, far), 30);
    assert!(!world.contains(scroll));
    assert!(world
        .actor(player)
        .unwrap()
        .log
        .contains_text("A lightning bolt strikes the Near with a loud thunder, for 20 damage!"));
}

#[test]
fn test_lightning_without_target_keeps_scroll() {
    let mut world = world(20, 20);
    let player = factories::spawn_player(&mut world, 5, 5).unwrap();
    brute(&mut world, "Distant", 30, 0, 1, (15, 15));
    let scroll = factories::spawn_lightning_scroll(&mut world, 0, 0).unwrap();
    hold(&mut world, player, scroll);

    let result = Action::new(player, ActionKind::UseItem { item: scroll, target: None }).perform(&mut world);

    assert_eq!(result.unwrap_err().reason(), "No enemy is close enough to strike.");
    assert!(world.actor(player).unwrap().inventory.contains(scroll));
}

#[test]
fn test_fireball_hits_everyone_in_radius() {
    let mut world = world(20, 20);
    let player = factories::spawn_player(&mut world, 2, 2).unwrap();
    let a = brute(&mut world, "A", 20, 0, 1, (6, 4));
    let b = brute(&mut world, "B", 20, 0, 1, (7, 5));
    let outside = brute(&mut world, "C", 20, 0, 1, (12, 12));
    let scroll = factories::spawn_fireball_scroll(&mut world, 0, 0).unwrap();
    hold(&mut world, player, scroll);

    Action::new(
        player,
        ActionKind::UseItem {
            item: scroll,
            target: Some((6, 5)),
        },
    )
    .perform(&mut world)
    .unwrap();

    assert_eq!(hp(&world, a), 8);
    assert_eq!(hp(&world, b), 8);
    assert_eq!(hp(&world, outside), 20);
    assert!(!world.contains(scroll));
}

#[test]
fn test_fireball_needs_a_visible_target() {
    let mut world = world(20, 20);
    let player = factories::spawn_player(&mut world, 2, 2).unwrap();
    let scroll = factories::spawn_fireball_scroll(&mut world, 0, 0).unwrap();
    hold(&mut world, player, scroll);

    let unseen = Action::new(
        player,
        ActionKind::UseItem {
            item: scroll,
            target: Some((18, 18)),
        },
    )
    .perform(&mut world);
    assert_eq!(
        unseen.unwrap_err().reason(),
        "You cannot target an area that you cannot see."
    );

    let empty = Action::new(
        player,
        ActionKind::UseItem {
            item: scroll,
            target: Some((6, 2)),
        },
    )
    .perform(&mut world);
    assert_eq!(empty.unwrap_err().reason(), "There are no targets in the radius.");
    assert!(world.contains(scroll));
}

#[test]
fn test_hostile_closes_in_and_attacks() {
    let mut world = world(20, 10);
    let player = factories::spawn_player(&mut world, 2, 5).unwrap();
    let orc = factories::spawn_orc(&mut world, 8, 5).unwrap();
    assert_eq!(world.actor(orc).unwrap().ai, Some(Ai::hostile()));

    let start = hp(&world, player);
    for _ in 0..10 {
        roguelife::simulation::run_tick(&mut world);
    }

    let (ox, oy) = world.get(orc).unwrap().position();
    assert!((ox - 2).abs() <= 1 && (oy - 5).abs() <= 1, "orc at ({ox}, {oy})");
    assert!(hp(&world, player) < start);
}
