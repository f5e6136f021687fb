//! Capacity-bounded item storage

use serde::{Deserialize, Serialize};

use crate::core::error::Impossible;
use crate::core::types::EntityId;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Inventory {
    pub capacity: usize,
    pub gold: u32,
    items: Vec<EntityId>,
}

impl Inventory {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            gold: 0,
            items: Vec::new(),
        }
    }

    pub fn items(&self) -> &[EntityId] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.items.len() >= self.capacity
    }

    pub fn contains(&self, item: EntityId) -> bool {
        self.items.contains(&item)
    }

    pub(crate) fn add(&mut self, item: EntityId) -> Result<(), Impossible> {
        if self.is_full() {
            return Err(Impossible::new("Your inventory is full."));
        }
        self.items.push(item);
        Ok(())
    }

    /// Remove an item, keeping the order of the rest
    pub(crate) fn remove(&mut self, item: EntityId) -> bool {
        match self.items.iter().position(|&i| i == item) {
            Some(index) => {
                self.items.remove(index);
                true
            }
            None => false,
        }
    }

    /// First-person listing of the held item names
    pub fn report<'a>(names: impl IntoIterator<Item = &'a str>) -> String {
        let names: Vec<&str> = names.into_iter().collect();
        if names.is_empty() {
            "I have nothing.".to_string()
        } else {
            format!("I have {}.", names.join(", "))
        }
    }
}
