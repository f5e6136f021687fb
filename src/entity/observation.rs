//! Bounded first-person memory of what an actor perceived

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::core::types::{Rgb, Tick};
use crate::events::GameEvent;
use crate::render::colors;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    /// Sequence number within the owning log
    pub id: u64,
    pub text: String,
    /// The event that caused this observation, if any
    pub event: Option<GameEvent>,
    pub color: Rgb,
    pub timestamp: Tick,
}

/// FIFO with a hard capacity. The oldest entry is evicted first.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObservationLog {
    capacity: usize,
    observations: VecDeque<Observation>,
    next_id: u64,
}

impl ObservationLog {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            observations: VecDeque::with_capacity(capacity.min(64)),
            next_id: 1,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn add(&mut self, text: impl Into<String>, color: Rgb, event: Option<GameEvent>, timestamp: Tick) {
        let observation = Observation {
            id: self.next_id,
            text: text.into(),
            event,
            color,
            timestamp,
        };
        self.next_id += 1;

        tracing::debug!(timestamp, text = %observation.text, "observation");

        self.observations.push_back(observation);
        while self.observations.len() > self.capacity {
            self.observations.pop_front();
        }
    }

    /// Plain white note with no originating event
    pub fn note(&mut self, text: impl Into<String>, timestamp: Tick) {
        self.add(text, colors::WHITE, None, timestamp);
    }

    pub fn len(&self) -> usize {
        self.observations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }

    /// Oldest first
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Observation> {
        self.observations.iter()
    }

    pub fn last(&self) -> Option<&Observation> {
        self.observations.back()
    }

    /// The newest `count` entries, oldest first
    pub fn recent(&self, count: usize) -> impl Iterator<Item = &Observation> {
        let skip = self.observations.len().saturating_sub(count);
        self.observations.iter().skip(skip)
    }

    pub fn contains_text(&self, text: &str) -> bool {
        self.observations.iter().any(|o| o.text == text)
    }
}
