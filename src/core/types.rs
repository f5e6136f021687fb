//! Core type definitions used throughout the codebase

use serde::{Deserialize, Serialize};

/// Stable identifier for entities, allocated monotonically by the world
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct EntityId(pub u32);

impl std::fmt::Display for EntityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Game tick counter (one in-game minute)
pub type Tick = u64;

/// Grid coordinate
pub type Point = (i32, i32);

/// The eight compass offsets, dx-major. Auto-explore relies on this order
/// for tie breaking.
pub const DIRECTIONS: [Point; 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// max(|dx|, |dy|)
pub fn chebyshev(a: Point, b: Point) -> i32 {
    (a.0 - b.0).abs().max((a.1 - b.1).abs())
}

pub fn euclidean(a: Point, b: Point) -> f64 {
    let dx = (a.0 - b.0) as f64;
    let dy = (a.1 - b.1) as f64;
    (dx * dx + dy * dy).sqrt()
}

/// 8-bit RGB color carried through for the render collaborator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

/// Species / category tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityKind {
    Player,
    Orc,
    Troll,
    Human,
    Wolf,
    Item,
    Building,
    Unknown,
}

impl EntityKind {
    pub fn label(&self) -> &'static str {
        match self {
            EntityKind::Player => "PLAYER",
            EntityKind::Orc => "ORC",
            EntityKind::Troll => "TROLL",
            EntityKind::Human => "HUMAN",
            EntityKind::Wolf => "WOLF",
            EntityKind::Item => "ITEM",
            EntityKind::Building => "BUILDING",
            EntityKind::Unknown => "UNKNOWN",
        }
    }
}

/// Draw-order tie break. Lower draws first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum RenderOrder {
    Corpse = 0,
    Item = 1,
    Building = 2,
    Actor = 3,
}
