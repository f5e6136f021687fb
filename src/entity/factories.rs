//! Prefabricated entities
//!
//! Every `spawn_*` builds the entity and hands it to `World::spawn`, which
//! assigns the id, places it and announces it.

use crate::ai::Ai;
use crate::core::error::Result;
use crate::core::types::{EntityId, EntityKind};
use crate::ecs::world::World;
use crate::entity::consumable::Consumable;
use crate::entity::fighter::Fighter;
use crate::entity::identity::Identity;
use crate::entity::interactable::{Interactable, Tree};
use crate::entity::inventory::Inventory;
use crate::entity::needs::Needs;
use crate::entity::observation::ObservationLog;
use crate::entity::relationships::Relationships;
use crate::entity::stats::Stats;
use crate::entity::{names, Actor, Entity};
use crate::events::EventSignal;
use crate::render::colors;
use crate::spatial::grid::Grid;

/// Everything an actor can notice
const ALL_SIGNALS: [EventSignal; 7] = [
    EventSignal::Spawn,
    EventSignal::Attack,
    EventSignal::Pickup,
    EventSignal::Drop,
    EventSignal::Use,
    EventSignal::Move,
    EventSignal::BuildingInteract,
];

/// A monster-grade actor sized for a `width` x `height` map: no inventory,
/// default needs and stats, hostile AI, listening to attacks only.
pub fn actor_template(width: i32, height: i32, hp: i32, defense: i32, power: i32) -> Actor {
    Actor {
        fighter: Fighter::new(hp, defense, power),
        inventory: Inventory::new(0),
        needs: Needs::default(),
        stats: Stats::default(),
        log: ObservationLog::new(512),
        relationships: None,
        identity: None,
        visible: Grid::new(width, height, false),
        explored: Grid::new(width, height, false),
        eyesight: 8,
        ai: Some(Ai::hostile()),
        signals: vec![EventSignal::Attack],
    }
}

fn monster(world: &mut World, kind: EntityKind, hp: i32, defense: i32, power: i32) -> Actor {
    let mut actor = actor_template(world.map.width, world.map.height, hp, defense, power);
    actor.log = ObservationLog::new(world.config.npc_log_capacity);
    actor.eyesight = world.config.default_eyesight;
    actor.stats = Stats::roll(&mut world.rng);
    actor.identity = Some(Identity::for_creature(kind));
    actor
}

fn human(world: &mut World, name: &str, ai: Ai) -> Result<Actor> {
    let mut actor = actor_template(world.map.width, world.map.height, 20, 1, 3);
    actor.inventory = Inventory::new(10);
    actor.log = ObservationLog::new(world.config.npc_log_capacity);
    actor.eyesight = world.config.default_eyesight;
    actor.stats = Stats::roll(&mut world.rng);
    actor.relationships = Some(Relationships::new());
    actor.identity = Some(world.generate_identity(name)?);
    actor.ai = Some(ai);
    actor.signals = ALL_SIGNALS.to_vec();
    Ok(actor)
}

/// The player. Also registered as the world's player.
pub fn spawn_player(world: &mut World, x: i32, y: i32) -> Result<EntityId> {
    let mut actor = actor_template(world.map.width, world.map.height, 30, 2, 5);
    actor.inventory = Inventory::new(26);
    actor.log = ObservationLog::new(world.config.player_log_capacity);
    actor.eyesight = world.config.default_eyesight;
    actor.relationships = Some(Relationships::new());
    actor.identity = Some(world.generate_identity("Player")?);
    actor.ai = Some(Ai::Player);
    actor.signals = ALL_SIGNALS.to_vec();

    let entity = Entity::new_actor("Player", EntityKind::Player, '@', colors::PLAYER, actor).at(x, y);
    let id = world.spawn(entity)?;
    world.set_player(id);
    Ok(id)
}

pub fn spawn_orc(world: &mut World, x: i32, y: i32) -> Result<EntityId> {
    let name = names::generate_name(EntityKind::Orc, &mut world.rng)?;
    let actor = monster(world, EntityKind::Orc, 10, 0, 3);
    world.spawn(Entity::new_actor(name, EntityKind::Orc, 'o', colors::ORC, actor).at(x, y))
}

pub fn spawn_troll(world: &mut World, x: i32, y: i32) -> Result<EntityId> {
    let name = names::generate_name(EntityKind::Troll, &mut world.rng)?;
    let actor = monster(world, EntityKind::Troll, 16, 1, 4);
    world.spawn(Entity::new_actor(name, EntityKind::Troll, 'T', colors::TROLL, actor).at(x, y))
}

/// A human who idles, looks around and wanders at random
pub fn spawn_wandering_human(world: &mut World, x: i32, y: i32) -> Result<EntityId> {
    let name = names::generate_name(EntityKind::Human, &mut world.rng)?;
    let actor = human(world, &name, Ai::Wanderer)?;
    world.spawn(Entity::new_actor(name, EntityKind::Human, 'h', colors::HUMAN, actor).at(x, y))
}

/// A human who walks toward unexplored ground
pub fn spawn_exploring_human(world: &mut World, x: i32, y: i32) -> Result<EntityId> {
    let name = names::generate_name(EntityKind::Human, &mut world.rng)?;
    let actor = human(world, &name, Ai::AutoExplore)?;
    world.spawn(Entity::new_actor(name, EntityKind::Human, 'h', colors::HUMAN, actor).at(x, y))
}

pub fn spawn_health_potion(world: &mut World, x: i32, y: i32) -> Result<EntityId> {
    let item = Entity::new_item(
        "Health Potion",
        '!',
        colors::HEALTH_POTION,
        Consumable::Healing { amount: 4 },
    );
    world.spawn(item.at(x, y))
}

pub fn spawn_confusion_scroll(world: &mut World, x: i32, y: i32) -> Result<EntityId> {
    let item = Entity::new_item(
        "Confusion Scroll",
        '~',
        colors::CONFUSION_SCROLL,
        Consumable::Confusion { number_of_turns: 10 },
    );
    world.spawn(item.at(x, y))
}

pub fn spawn_fireball_scroll(world: &mut World, x: i32, y: i32) -> Result<EntityId> {
    let item = Entity::new_item(
        "Fireball Scroll",
        '~',
        colors::FIREBALL_SCROLL,
        Consumable::Fireball { damage: 12, radius: 3 },
    );
    world.spawn(item.at(x, y))
}

pub fn spawn_lightning_scroll(world: &mut World, x: i32, y: i32) -> Result<EntityId> {
    let item = Entity::new_item(
        "Lightning Scroll",
        '~',
        colors::LIGHTNING_SCROLL,
        Consumable::Lightning {
            damage: 20,
            maximum_range: 5,
        },
    );
    world.spawn(item.at(x, y))
}

pub fn spawn_apple(world: &mut World, x: i32, y: i32) -> Result<EntityId> {
    let item = Entity::new_item(
        "Apple",
        'a',
        colors::APPLE,
        Consumable::Food {
            nutrition: 300,
            water_content: 100,
        },
    );
    world.spawn(item.at(x, y))
}

pub fn spawn_tree(world: &mut World, x: i32, y: i32) -> Result<EntityId> {
    let building = Entity::new_building("Tree", '♣', colors::TREE, Interactable::Tree(Tree::default()));
    world.spawn(building.at(x, y))
}
