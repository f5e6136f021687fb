//! Action protocol
//!
//! An `Action` binds one acting entity to an intent. `perform` either
//! applies the intent to the world (mutations plus events) or returns
//! `Impossible` with a reason and leaves the world as it was.

pub mod interact;
pub mod inventory;
pub mod movement;
pub mod observe;

use serde::{Deserialize, Serialize};

use crate::core::error::{ActionResult, Impossible};
use crate::core::types::{EntityId, Point};
use crate::ecs::world::World;

/// What the actor wants to do
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActionKind {
    Wait,
    Move { dx: i32, dy: i32 },
    Melee { dx: i32, dy: i32 },
    /// Attack, interact or move, depending on what is in the way
    Bump { dx: i32, dy: i32 },
    BuildingInteract { dx: i32, dy: i32 },
    Pickup,
    Drop { item: EntityId },
    /// `target` defaults to the user's own cell
    UseItem { item: EntityId, target: Option<Point> },

    LookAround,
    ObserveNeeds,
    ObserveInventory,
    ObserveStats,
    ObserveRelationships,
    ObserveIdentity,
    Reflect,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionCategory {
    Idle,
    Movement,
    Combat,
    Inventory,
    Interaction,
    Observation,
}

impl ActionKind {
    pub fn category(&self) -> ActionCategory {
        match self {
            ActionKind::Wait => ActionCategory::Idle,
            ActionKind::Move { .. } | ActionKind::Bump { .. } => ActionCategory::Movement,
            ActionKind::Melee { .. } => ActionCategory::Combat,
            ActionKind::Pickup | ActionKind::Drop { .. } | ActionKind::UseItem { .. } => ActionCategory::Inventory,
            ActionKind::BuildingInteract { .. } => ActionCategory::Interaction,
            ActionKind::LookAround
            | ActionKind::ObserveNeeds
            | ActionKind::ObserveInventory
            | ActionKind::ObserveStats
            | ActionKind::ObserveRelationships
            | ActionKind::ObserveIdentity
            | ActionKind::Reflect => ActionCategory::Observation,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Action {
    pub actor: EntityId,
    pub kind: ActionKind,
}

impl Action {
    pub fn new(actor: EntityId, kind: ActionKind) -> Self {
        Self { actor, kind }
    }

    pub fn perform(&self, world: &mut World) -> ActionResult {
        let entity = world
            .get(self.actor)
            .ok_or_else(|| Impossible::new("No such actor."))?;
        if !entity.is_living_actor() {
            return Err(Impossible::new("The dead cannot act."));
        }

        tracing::debug!(
            actor = %self.actor,
            kind = ?self.kind,
            category = ?self.kind.category(),
            "perform"
        );

        let me = self.actor;
        match self.kind {
            ActionKind::Wait => Ok(()),
            ActionKind::Move { dx, dy } => movement::move_by(world, me, dx, dy),
            ActionKind::Melee { dx, dy } => movement::melee(world, me, dx, dy),
            ActionKind::Bump { dx, dy } => movement::bump(world, me, dx, dy),
            ActionKind::BuildingInteract { dx, dy } => interact::building_interact(world, me, dx, dy),
            ActionKind::Pickup => inventory::pickup(world, me),
            ActionKind::Drop { item } => inventory::drop(world, me, item),
            ActionKind::UseItem { item, target } => inventory::use_item(world, me, item, target),
            ActionKind::LookAround => observe::look_around(world, me),
            ActionKind::ObserveNeeds => observe::needs(world, me),
            ActionKind::ObserveInventory => observe::inventory(world, me),
            ActionKind::ObserveStats => observe::stats(world, me),
            ActionKind::ObserveRelationships => observe::relationships(world, me),
            ActionKind::ObserveIdentity => observe::identity(world, me),
            ActionKind::Reflect => observe::reflect(world, me),
        }
    }
}

pub(crate) const BLOCKED: &str = "That way is blocked.";

/// The actor's cell and the cell `(dx, dy)` away from it. A delta that leaves
/// the coordinate range is blocked like any other off-map step.
pub(crate) fn step(world: &World, actor: EntityId, dx: i32, dy: i32) -> Result<(Point, Point), Impossible> {
    let (x, y) = world
        .get(actor)
        .map(|e| e.position())
        .ok_or_else(|| Impossible::new("No such actor."))?;
    let to = x
        .checked_add(dx)
        .zip(y.checked_add(dy))
        .ok_or_else(|| Impossible::new(BLOCKED))?;
    Ok(((x, y), to))
}
