//! ECS World - owns every entity and the state they share
//!
//! Entities live in an arena keyed by `EntityId`; the map only records which
//! ids are placed on it. All cross-entity mutation goes through this type.

use std::collections::BTreeMap;
use std::path::Path;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::core::clock::WorldClock;
use crate::core::config::SimulationConfig;
use crate::core::error::{ActionResult, Impossible, Result, RogueError};
use crate::core::types::{EntityId, Rgb, Tick};
use crate::entity::identity::Identity;
use crate::entity::needs::NeedRates;
use crate::entity::{Actor, Container, Entity, EntityBody};
use crate::events::{EventBus, EventKind, EventSignal, GameEvent};
use crate::llm::text::{CannedText, LlmTextGenerator, TextGenerator};
use crate::render::colors;
use crate::simulation::{perception, tick};
use crate::spatial::grid::Grid;
use crate::world::map::GameMap;
use crate::world::tile::TileKind;

/// The game world containing all entities
pub struct World {
    pub map: GameMap,
    entities: BTreeMap<EntityId, Entity>,
    pub bus: EventBus,
    pub clock: WorldClock,
    pub rng: ChaCha8Rng,
    pub config: SimulationConfig,
    player: Option<EntityId>,
    text: Box<dyn TextGenerator>,
    next_id: u32,
}

impl World {
    /// Build an empty world of floor tiles. The text collaborator is chosen
    /// from the config; a missing LLM setup falls back to canned text.
    pub fn new(config: SimulationConfig) -> Result<Self> {
        let text: Box<dyn TextGenerator> = if config.cost_saving_mode {
            Box::new(CannedText::new())
        } else {
            match LlmTextGenerator::from_env() {
                Ok(generator) => Box::new(generator),
                Err(err) => {
                    tracing::warn!(%err, "LLM unavailable, using canned text");
                    Box::new(CannedText::new())
                }
            }
        };
        Self::with_text_generator(config, text)
    }

    pub fn with_text_generator(config: SimulationConfig, text: Box<dyn TextGenerator>) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            map: GameMap::new(config.map_width, config.map_height, TileKind::Floor),
            entities: BTreeMap::new(),
            bus: EventBus::new(),
            clock: WorldClock::new(config.ticks_per_day),
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            config,
            player: None,
            text,
            next_id: 1,
        })
    }

    pub fn now(&self) -> Tick {
        self.clock.current_tick()
    }

    pub fn player(&self) -> Option<EntityId> {
        self.player
    }

    pub fn set_player(&mut self, id: EntityId) {
        self.player = Some(id);
    }

    pub fn need_rates(&self) -> NeedRates {
        NeedRates {
            hunger: self.config.hunger_per_tick,
            thirst: self.config.thirst_per_tick,
            sleepiness: self.config.sleepiness_per_tick,
            loneliness: self.config.loneliness_per_tick,
        }
    }

    // === LOOKUP ===

    pub fn contains(&self, id: EntityId) -> bool {
        self.entities.contains_key(&id)
    }

    pub fn get(&self, id: EntityId) -> Option<&Entity> {
        self.entities.get(&id)
    }

    pub fn get_mut(&mut self, id: EntityId) -> Option<&mut Entity> {
        self.entities.get_mut(&id)
    }

    pub fn actor(&self, id: EntityId) -> Option<&Actor> {
        self.get(id).and_then(Entity::actor)
    }

    pub fn actor_mut(&mut self, id: EntityId) -> Option<&mut Actor> {
        self.get_mut(id).and_then(Entity::actor_mut)
    }

    /// Display name, or the id for entities that are gone
    pub fn name_of(&self, id: EntityId) -> String {
        self.get(id).map_or_else(|| id.to_string(), |e| e.name.clone())
    }

    pub fn full_name_of(&self, id: EntityId) -> String {
        self.get(id).map_or_else(|| id.to_string(), Entity::full_name)
    }

    /// Every entity in the arena, in id order
    pub fn entities(&self) -> impl Iterator<Item = &Entity> {
        self.entities.values()
    }

    pub fn entity_count(&self) -> usize {
        self.entities.len()
    }

    /// Entities placed on the map, in id order
    pub fn map_entities(&self) -> impl Iterator<Item = &Entity> {
        self.map.entity_ids().filter_map(|id| self.entities.get(&id))
    }

    pub fn living_actors(&self) -> impl Iterator<Item = &Entity> {
        self.map_entities().filter(|e| e.is_living_actor())
    }

    pub fn items(&self) -> impl Iterator<Item = &Entity> {
        self.map_entities().filter(|e| e.item().is_some())
    }

    pub fn buildings(&self) -> impl Iterator<Item = &Entity> {
        self.map_entities().filter(|e| e.building().is_some())
    }

    pub fn entities_at(&self, x: i32, y: i32) -> impl Iterator<Item = &Entity> {
        self.map_entities().filter(move |e| e.x == x && e.y == y)
    }

    pub fn blocking_entity_at(&self, x: i32, y: i32) -> Option<EntityId> {
        self.entities_at(x, y).find(|e| e.blocks_movement).map(|e| e.id)
    }

    /// Living actor standing at a cell
    pub fn actor_at(&self, x: i32, y: i32) -> Option<EntityId> {
        self.entities_at(x, y).find(|e| e.is_living_actor()).map(|e| e.id)
    }

    pub fn building_at(&self, x: i32, y: i32) -> Option<EntityId> {
        self.entities_at(x, y).find(|e| e.building().is_some()).map(|e| e.id)
    }

    pub fn can_spawn_at(&self, x: i32, y: i32) -> bool {
        self.map.is_walkable(x, y) && self.blocking_entity_at(x, y).is_none()
    }

    /// Whether the player currently sees a cell. The player's view is the
    /// authority for monsters deciding to give chase.
    pub fn player_can_see(&self, x: i32, y: i32) -> bool {
        self.player
            .and_then(|id| self.actor(id))
            .is_some_and(|a| a.can_see(x, y))
    }

    /// Per-cell movement cost for pathfinding: 0 for impassable cells, 1 for
    /// open ground, plus the crowding penalty for each blocking entity.
    pub fn cost_grid(&self) -> Grid<u32> {
        let mut cost = Grid::new(self.map.width, self.map.height, 0u32);
        for ((x, y), tile) in self.map.tiles().iter() {
            if tile.walkable {
                cost.set(x, y, 1);
            }
        }
        for entity in self.map_entities().filter(|e| e.blocks_movement) {
            if let Some(c) = cost.get_mut(entity.x, entity.y) {
                if *c > 0 {
                    *c += self.config.blocked_cell_penalty;
                }
            }
        }
        cost
    }

    // === LIFECYCLE ===

    /// Assign an id, put the entity on the map at its position, register its
    /// subscriptions and announce it with a Spawn event.
    pub fn spawn(&mut self, mut entity: Entity) -> Result<EntityId> {
        if !self.map.in_bounds(entity.x, entity.y) {
            return Err(RogueError::OutOfBounds(entity.x, entity.y));
        }

        let id = EntityId(self.next_id);
        self.next_id += 1;
        entity.id = id;
        entity.container = Container::Map;

        match &entity.body {
            EntityBody::Actor(actor) => {
                self.bus.subscribe(EventSignal::Tick, id);
                for &signal in &actor.signals {
                    self.bus.subscribe(signal, id);
                }
            }
            EntityBody::Building(_) => self.bus.subscribe(EventSignal::Tick, id),
            EntityBody::Item(_) => {}
        }

        let at = entity.position();
        tracing::debug!(%id, name = %entity.full_name(), x = at.0, y = at.1, "spawn");

        self.entities.insert(id, entity);
        self.map.insert(id);
        self.update_fov(id);

        self.emit(GameEvent::new(at, self.now(), EventKind::Spawn { entity: id }));
        Ok(id)
    }

    /// Move an entity onto the map at `(x, y)`, taking it out of whatever
    /// inventory held it.
    pub fn place(&mut self, id: EntityId, x: i32, y: i32) -> Result<()> {
        if !self.map.in_bounds(x, y) {
            return Err(RogueError::OutOfBounds(x, y));
        }
        let container = self.get(id).ok_or(RogueError::EntityNotFound(id))?.container;
        if let Container::Inventory(owner) = container {
            if let Some(actor) = self.actor_mut(owner) {
                actor.inventory.remove(id);
            }
        }

        let entity = self.get_mut(id).ok_or(RogueError::EntityNotFound(id))?;
        entity.x = x;
        entity.y = y;
        entity.container = Container::Map;
        self.map.insert(id);
        Ok(())
    }

    /// Move an item from the map into an actor's inventory
    pub(crate) fn stow(&mut self, owner: EntityId, item: EntityId) -> ActionResult {
        let actor = self
            .actor_mut(owner)
            .ok_or_else(|| Impossible::new("No such actor."))?;
        actor.inventory.add(item)?;

        self.map.remove(item);
        if let Some(entity) = self.get_mut(item) {
            entity.container = Container::Inventory(owner);
        }
        Ok(())
    }

    /// Remove an entity from every container and from the bus
    pub fn destroy(&mut self, id: EntityId) -> Option<Entity> {
        let entity = self.entities.remove(&id)?;
        self.map.remove(id);
        if let Container::Inventory(owner) = entity.container {
            if let Some(actor) = self.actor_mut(owner) {
                actor.inventory.remove(id);
            }
        }
        self.bus.unsubscribe_all(id);
        if self.player == Some(id) {
            self.player = None;
        }
        tracing::debug!(%id, name = %entity.name, "destroyed");
        Some(entity)
    }

    // === EVENTS ===

    /// Deliver an event to every current subscriber of its signal, in
    /// registration order. Handlers run synchronously and may emit.
    pub fn emit(&mut self, event: GameEvent) {
        let signal = event.signal();
        tracing::trace!(?signal, at = ?event.at, "emit");

        for id in self.bus.subscribers(signal) {
            if !self.contains(id) {
                continue;
            }
            match signal {
                EventSignal::Tick => tick::take_turn(self, id),
                _ => perception::observe_event(self, id, &event),
            }
        }
    }

    // === OBSERVATIONS & DAMAGE ===

    /// Append to an actor's own log, stamped with the current tick
    pub fn observe(&mut self, id: EntityId, text: impl Into<String>, color: Rgb) {
        let now = self.now();
        if let Some(entity) = self.get_mut(id) {
            entity.observe(text, color, now);
        }
    }

    pub fn observe_plain(&mut self, id: EntityId, text: impl Into<String>) {
        self.observe(id, text, colors::WHITE);
    }

    pub fn damage(&mut self, id: EntityId, amount: i32) {
        let now = self.now();
        if let Some(entity) = self.get_mut(id) {
            entity.take_damage(amount, now);
        }
    }

    /// Recompute an actor's view from where it stands
    pub fn update_fov(&mut self, id: EntityId) {
        let Some(entity) = self.entities.get_mut(&id) else {
            return;
        };
        let origin = entity.position();
        if let EntityBody::Actor(actor) = &mut entity.body {
            actor.update_fov(&self.map, origin);
        }
    }

    // === TEXT ===

    /// Backstory from the text collaborator, parsed for gender tags
    pub fn generate_identity(&mut self, name: &str) -> Result<Identity> {
        let raw = self.text.identity(name)?;
        Identity::from_text(name, &raw)
    }

    /// Summary of an actor's observations from the text collaborator
    pub fn reflect_on(&mut self, id: EntityId) -> Result<String> {
        let entity = self.entities.get(&id).ok_or(RogueError::EntityNotFound(id))?;
        let actor = entity.actor().ok_or(RogueError::NotAnActor(id))?;
        self.text.reflection(&entity.name, &actor.log)
    }

    // === PERSISTENCE ===

    pub fn snapshot(&self) -> WorldSnapshot {
        WorldSnapshot {
            tick: self.now(),
            seed: self.config.seed,
            map: self.map.clone(),
            entities: self.entities.values().cloned().collect(),
            player: self.player,
        }
    }

    /// Rebuild a world from a snapshot. Subscriptions are re-derived from
    /// each actor's signal list; the RNG is reseeded from seed and tick.
    pub fn from_snapshot(snapshot: WorldSnapshot, config: SimulationConfig) -> Result<Self> {
        let mut world = Self::with_text_generator(config, Box::new(CannedText::new()))?;
        world.map = snapshot.map;
        world.rng = ChaCha8Rng::seed_from_u64(snapshot.seed ^ snapshot.tick);
        world.clock = WorldClock::at(snapshot.tick, world.config.ticks_per_day);

        for entity in snapshot.entities {
            let id = entity.id;
            match &entity.body {
                EntityBody::Actor(actor) => {
                    world.bus.subscribe(EventSignal::Tick, id);
                    for &signal in &actor.signals {
                        world.bus.subscribe(signal, id);
                    }
                }
                EntityBody::Building(_) => world.bus.subscribe(EventSignal::Tick, id),
                EntityBody::Item(_) => {}
            }
            world.next_id = world.next_id.max(id.0 + 1);
            world.entities.insert(id, entity);
        }
        world.player = snapshot.player.filter(|id| world.contains(*id));
        Ok(world)
    }
}

/// Serialisable copy of the whole simulation state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorldSnapshot {
    pub tick: Tick,
    pub seed: u64,
    pub map: GameMap,
    pub entities: Vec<Entity>,
    pub player: Option<EntityId>,
}

impl WorldSnapshot {
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        std::fs::write(path, self.to_json()?)?;
        Ok(())
    }
}
