//! Read-only view of the world for a front end
//!
//! Nothing here mutates simulation state. What is drawn is what the player
//! sees: entities in the player's current view, lit tiles in view, dark
//! tiles from memory, and shroud everywhere else.

pub mod colors;

use crate::core::types::{EntityId, RenderOrder, Rgb};
use crate::ecs::world::World;
use crate::world::tile::{TileGraphic, TileKind, SHROUD};

/// Lightweight snapshot of an entity for rendering
#[derive(Debug, Clone, PartialEq)]
pub struct RenderEntity {
    pub id: EntityId,
    pub x: i32,
    pub y: i32,
    pub glyph: char,
    pub color: Rgb,
    pub render_order: RenderOrder,
    pub name: String,
}

/// Collects the entities the player can see into a reusable buffer, in draw
/// order (corpses first, actors last). Entities with equal render order keep
/// id order.
pub fn collect_render_entities(world: &World, buffer: &mut Vec<RenderEntity>) {
    buffer.clear();

    for entity in world.map_entities() {
        if !world.player_can_see(entity.x, entity.y) {
            continue;
        }
        buffer.push(RenderEntity {
            id: entity.id,
            x: entity.x,
            y: entity.y,
            glyph: entity.glyph,
            color: entity.color,
            render_order: entity.render_order,
            name: entity.name.clone(),
        });
    }

    buffer.sort_by_key(|e| e.render_order);
}

/// Graphic for one map cell from the player's point of view
pub fn tile_graphic_at(world: &World, x: i32, y: i32) -> TileGraphic {
    let Some(tile) = world.map.tile(x, y) else {
        return SHROUD;
    };
    let Some(player) = world.player().and_then(|id| world.actor(id)) else {
        return SHROUD;
    };

    if player.visible.is_set(x, y) {
        tile.light
    } else if player.explored.is_set(x, y) {
        tile.dark
    } else {
        SHROUD
    }
}

fn terrain_char(kind: TileKind) -> char {
    match kind {
        TileKind::Floor => '.',
        TileKind::Wall => '#',
        TileKind::Water => '~',
        TileKind::Sand => ',',
        TileKind::Grass => '"',
        TileKind::Forest => 'T',
        TileKind::Mountain => '^',
    }
}

/// Plain-text frame for headless runs: remembered terrain, with visible
/// entities drawn on top. Unexplored cells are blank.
pub fn ascii_frame(world: &World) -> Vec<String> {
    let explored = world
        .player()
        .and_then(|id| world.actor(id))
        .map(|a| &a.explored);

    let mut rows: Vec<Vec<char>> = (0..world.map.height)
        .map(|y| {
            (0..world.map.width)
                .map(|x| match (world.map.tile(x, y), explored) {
                    (Some(tile), Some(seen)) if seen.is_set(x, y) => terrain_char(tile.kind),
                    _ => ' ',
                })
                .collect()
        })
        .collect();

    let mut entities = Vec::new();
    collect_render_entities(world, &mut entities);
    for e in &entities {
        if let Some(cell) = rows
            .get_mut(e.y as usize)
            .and_then(|row| row.get_mut(e.x as usize))
        {
            *cell = e.glyph;
        }
    }

    rows.into_iter().map(|row| row.into_iter().collect()).collect()
}
