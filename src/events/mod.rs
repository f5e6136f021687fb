//! World events and the subscription bus
//!
//! Events are plain values. The bus only records who listens to which
//! signal; the world walks the subscriber list and dispatches synchronously,
//! so an event handler may itself emit further events.

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

use crate::core::types::{EntityId, Point, Tick};

/// Channel an event is broadcast on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventSignal {
    Tick,
    Spawn,
    Attack,
    Pickup,
    Drop,
    Use,
    Move,
    BuildingInteract,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum EventKind {
    Tick,
    Spawn { entity: EntityId },
    Attack { actor: EntityId, target: EntityId },
    Pickup { actor: EntityId, item: EntityId },
    Drop { actor: EntityId, item: EntityId },
    Use { actor: EntityId, item: EntityId },
    Move { actor: EntityId, dx: i32, dy: i32 },
    BuildingInteract { actor: EntityId, building: EntityId },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameEvent {
    /// Where it happened. Only the tick has no position.
    pub at: Option<Point>,
    pub timestamp: Tick,
    pub kind: EventKind,
}

impl GameEvent {
    pub fn tick(timestamp: Tick) -> Self {
        Self {
            at: None,
            timestamp,
            kind: EventKind::Tick,
        }
    }

    pub fn new(at: Point, timestamp: Tick, kind: EventKind) -> Self {
        Self {
            at: Some(at),
            timestamp,
            kind,
        }
    }

    pub fn signal(&self) -> EventSignal {
        match self.kind {
            EventKind::Tick => EventSignal::Tick,
            EventKind::Spawn { .. } => EventSignal::Spawn,
            EventKind::Attack { .. } => EventSignal::Attack,
            EventKind::Pickup { .. } => EventSignal::Pickup,
            EventKind::Drop { .. } => EventSignal::Drop,
            EventKind::Use { .. } => EventSignal::Use,
            EventKind::Move { .. } => EventSignal::Move,
            EventKind::BuildingInteract { .. } => EventSignal::BuildingInteract,
        }
    }

    /// The entity that caused the event
    pub fn actor(&self) -> Option<EntityId> {
        match self.kind {
            EventKind::Tick => None,
            EventKind::Spawn { entity } => Some(entity),
            EventKind::Attack { actor, .. }
            | EventKind::Pickup { actor, .. }
            | EventKind::Drop { actor, .. }
            | EventKind::Use { actor, .. }
            | EventKind::Move { actor, .. }
            | EventKind::BuildingInteract { actor, .. } => Some(actor),
        }
    }
}

/// Per-signal subscriber lists in registration order
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EventBus {
    subscribers: AHashMap<EventSignal, Vec<EntityId>>,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `id` on `signal`. Registering twice is a no-op.
    pub fn subscribe(&mut self, signal: EventSignal, id: EntityId) {
        let list = self.subscribers.entry(signal).or_default();
        if !list.contains(&id) {
            list.push(id);
        }
    }

    /// Snapshot of the subscriber list. Subscriptions made while
    /// delivering do not see the event being delivered.
    pub fn subscribers(&self, signal: EventSignal) -> Vec<EntityId> {
        self.subscribers.get(&signal).cloned().unwrap_or_default()
    }

    pub fn is_subscribed(&self, signal: EventSignal, id: EntityId) -> bool {
        self.subscribers
            .get(&signal)
            .is_some_and(|list| list.contains(&id))
    }

    /// Drop every subscription held by `id`
    pub fn unsubscribe_all(&mut self, id: EntityId) {
        for list in self.subscribers.values_mut() {
            list.retain(|&s| s != id);
        }
    }
}
