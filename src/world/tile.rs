//! Static per-cell terrain descriptors

use serde::{Deserialize, Serialize};

use crate::core::types::Rgb;

/// Glyph payload for the render collaborator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileGraphic {
    pub ch: char,
    pub fg: Rgb,
    pub bg: Rgb,
}

impl TileGraphic {
    const fn blank(bg: Rgb) -> Self {
        Self {
            ch: ' ',
            fg: Rgb(255, 255, 255),
            bg,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TileKind {
    Floor,
    Wall,
    Water,
    Sand,
    Grass,
    Forest,
    Mountain,
}

/// Immutable cell descriptor. Stored by value in the map grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tile {
    pub kind: TileKind,
    pub walkable: bool,
    pub transparent: bool,
    /// Drawn when remembered but not in view
    pub dark: TileGraphic,
    /// Drawn when in view
    pub light: TileGraphic,
}

impl Tile {
    pub const fn of(kind: TileKind) -> Self {
        match kind {
            TileKind::Floor => Self {
                kind,
                walkable: true,
                transparent: true,
                dark: TileGraphic::blank(Rgb(50, 50, 150)),
                light: TileGraphic::blank(Rgb(200, 180, 50)),
            },
            TileKind::Wall => Self {
                kind,
                walkable: false,
                transparent: false,
                dark: TileGraphic::blank(Rgb(0, 0, 100)),
                light: TileGraphic::blank(Rgb(130, 110, 50)),
            },
            TileKind::Water => Self {
                kind,
                walkable: false,
                transparent: true,
                dark: TileGraphic::blank(Rgb(0, 0, 100)),
                light: TileGraphic::blank(Rgb(0, 0, 255)),
            },
            TileKind::Sand => Self {
                kind,
                walkable: true,
                transparent: true,
                dark: TileGraphic::blank(Rgb(100, 100, 0)),
                light: TileGraphic::blank(Rgb(255, 255, 0)),
            },
            TileKind::Grass => Self {
                kind,
                walkable: true,
                transparent: true,
                dark: TileGraphic::blank(Rgb(0, 100, 0)),
                light: TileGraphic::blank(Rgb(0, 255, 0)),
            },
            TileKind::Forest => Self {
                kind,
                walkable: true,
                transparent: true,
                dark: TileGraphic::blank(Rgb(0, 70, 0)),
                light: TileGraphic::blank(Rgb(0, 190, 0)),
            },
            TileKind::Mountain => Self {
                kind,
                walkable: false,
                transparent: false,
                dark: TileGraphic::blank(Rgb(100, 100, 100)),
                light: TileGraphic::blank(Rgb(255, 255, 255)),
            },
        }
    }

    pub fn name(&self) -> &'static str {
        match self.kind {
            TileKind::Floor => "floor",
            TileKind::Wall => "wall",
            TileKind::Water => "water",
            TileKind::Sand => "sand",
            TileKind::Grass => "grass",
            TileKind::Forest => "forest",
            TileKind::Mountain => "mountain",
        }
    }
}

/// Unexplored, unseen cells
pub const SHROUD: TileGraphic = TileGraphic::blank(Rgb(0, 0, 0));
