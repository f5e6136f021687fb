//! The tile grid and the set of entities placed on it

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::core::types::{EntityId, Point, DIRECTIONS};
use crate::spatial::grid::Grid;
use crate::world::tile::{Tile, TileKind};

/// Owns the terrain and the membership set of placed entities.
///
/// Entity data lives in the world's arena; the map only records which ids
/// are on it. The set is ordered by id, so iteration follows spawn order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameMap {
    pub width: i32,
    pub height: i32,
    tiles: Grid<Tile>,
    entities: BTreeSet<EntityId>,
}

impl GameMap {
    pub fn new(width: i32, height: i32, fill: TileKind) -> Self {
        Self {
            width,
            height,
            tiles: Grid::new(width, height, Tile::of(fill)),
            entities: BTreeSet::new(),
        }
    }

    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        self.tiles.in_bounds(x, y)
    }

    pub fn tile(&self, x: i32, y: i32) -> Option<&Tile> {
        self.tiles.get(x, y)
    }

    pub fn tiles(&self) -> &Grid<Tile> {
        &self.tiles
    }

    pub fn set_tile(&mut self, x: i32, y: i32, kind: TileKind) {
        self.tiles.set(x, y, Tile::of(kind));
    }

    /// Paint a filled rectangle, clipped to the map
    pub fn fill_rect(&mut self, x1: i32, y1: i32, x2: i32, y2: i32, kind: TileKind) {
        for y in y1..=y2 {
            for x in x1..=x2 {
                self.set_tile(x, y, kind);
            }
        }
    }

    pub fn is_walkable(&self, x: i32, y: i32) -> bool {
        self.tiles.get(x, y).is_some_and(|t| t.walkable)
    }

    pub fn is_transparent(&self, x: i32, y: i32) -> bool {
        self.tiles.get(x, y).is_some_and(|t| t.transparent)
    }

    /// In-bounds 8-neighbours in `DIRECTIONS` order
    pub fn neighbors(&self, x: i32, y: i32) -> impl Iterator<Item = Point> + '_ {
        DIRECTIONS
            .iter()
            .map(move |&(dx, dy)| (x + dx, y + dy))
            .filter(move |&(nx, ny)| self.in_bounds(nx, ny))
    }

    pub fn contains(&self, id: EntityId) -> bool {
        self.entities.contains(&id)
    }

    pub fn entity_ids(&self) -> impl Iterator<Item = EntityId> + '_ {
        self.entities.iter().copied()
    }

    pub fn entity_count(&self) -> usize {
        self.entities.len()
    }

    pub(crate) fn insert(&mut self, id: EntityId) -> bool {
        self.entities.insert(id)
    }

    pub(crate) fn remove(&mut self, id: EntityId) -> bool {
        self.entities.remove(&id)
    }
}
