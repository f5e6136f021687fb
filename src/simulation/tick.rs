//! Tick system - one step of the simulation
//!
//! `run_tick` advances the clock and broadcasts the Tick event. Each Tick
//! subscriber takes its turn in registration order: buildings update their
//! interactable, living actors plan, act, refresh their view and then age
//! their needs and stats. Turns are strictly sequential, so an actor's move
//! is visible to the next actor in the same tick.

use crate::actions::{Action, ActionKind};
use crate::core::error::{ActionResult, Impossible};
use crate::core::types::{EntityId, Tick};
use crate::ecs::world::World;
use crate::entity::EntityBody;
use crate::events::GameEvent;
use crate::render::colors;

/// Advance the world by one tick. Returns the new tick.
pub fn run_tick(world: &mut World) -> Tick {
    let now = world.clock.advance();
    tracing::trace!(tick = now, "tick");
    world.emit(GameEvent::tick(now));
    now
}

/// A single Tick subscriber's turn
pub fn take_turn(world: &mut World, id: EntityId) {
    let regen = world.config.tree_energy_regen;
    let Some(entity) = world.get_mut(id) else {
        return;
    };

    let acts = match &mut entity.body {
        EntityBody::Building(building) => {
            building.interactable.tick(regen);
            false
        }
        EntityBody::Item(_) => false,
        EntityBody::Actor(actor) => actor.is_alive(),
    };

    if acts {
        actor_turn(world, id);
    }
}

fn actor_turn(world: &mut World, id: EntityId) {
    // Plan on a copy, then store it back before acting
    let Some(mut ai) = world.actor(id).and_then(|a| a.ai.clone()) else {
        return;
    };
    let planned = ai.plan(world, id);
    if let Some(actor) = world.actor_mut(id) {
        if actor.ai.is_some() {
            actor.ai = Some(ai);
        }
    }

    if let Some(kind) = planned {
        if let Err(impossible) = Action::new(id, kind).perform(world) {
            tracing::trace!(actor = %id, ?kind, reason = %impossible, "ai action absorbed");
        }
    }

    world.update_fov(id);

    if world.get(id).is_some_and(|e| e.is_living_actor()) {
        update_needs(world, id);
    }
}

/// Grow needs and age stats; maxed-out needs complain and may hurt
fn update_needs(world: &mut World, id: EntityId) {
    let rates = world.need_rates();
    let now = world.now();
    let Some(entity) = world.get_mut(id) else {
        return;
    };
    let Some(actor) = entity.actor_mut() else {
        return;
    };

    actor.stats.update();
    let maxed = actor.needs.update(rates);

    for need in maxed {
        entity.observe(need.complaint(), colors::NEEDS_WARNING, now);
        if need.is_harmful() {
            entity.take_damage(1, now);
        }
    }
}

/// Perform an action issued directly by the player.
///
/// A refused action is reported in the player's log and the world does not
/// move; a successful one is followed by a full world tick.
pub fn player_turn(world: &mut World, kind: ActionKind) -> ActionResult {
    let Some(player) = world.player() else {
        return Err(Impossible::new("There is no player."));
    };

    match Action::new(player, kind).perform(world) {
        Ok(()) => {
            run_tick(world);
            Ok(())
        }
        Err(impossible) => {
            world.observe(player, impossible.reason(), colors::IMPOSSIBLE);
            Err(impossible)
        }
    }
}
