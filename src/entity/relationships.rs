//! Who an actor has met, and how it feels about them

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Relationships {
    /// Keyed by the other actor's full name
    state: BTreeMap<String, i32>,
}

impl Relationships {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a neutral relationship. Returns true only the first time.
    pub fn meet(&mut self, name: &str) -> bool {
        if self.state.contains_key(name) {
            return false;
        }
        self.state.insert(name.to_string(), 0);
        true
    }

    pub fn get(&self, name: &str) -> Option<i32> {
        self.state.get(name).copied()
    }

    pub fn adjust(&mut self, name: &str, delta: i32) {
        *self.state.entry(name.to_string()).or_insert(0) += delta;
    }

    pub fn len(&self) -> usize {
        self.state.len()
    }

    pub fn is_empty(&self) -> bool {
        self.state.is_empty()
    }

    pub fn report(&self) -> String {
        if self.state.is_empty() {
            return "Relationships: none".to_string();
        }
        let entries: Vec<String> = self
            .state
            .iter()
            .map(|(name, value)| format!("{name}: {value}"))
            .collect();
        format!("Relationships: {}", entries.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_meet_once() {
        let mut relationships = Relationships::new();
        assert!(relationships.meet("Gorb (ORC)"));
        assert!(!relationships.meet("Gorb (ORC)"));
        assert_eq!(relationships.get("Gorb (ORC)"), Some(0));
        assert_eq!(relationships.len(), 1);
    }

    #[test]
    fn test_report_is_sorted() {
        let mut relationships = Relationships::new();
        relationships.meet("Zed");
        relationships.adjust("Ann", 3);
        assert_eq!(relationships.report(), "Relationships: Ann: 3, Zed: 0");
        assert_eq!(Relationships::new().report(), "Relationships: none");
    }
}
