pub mod map;
pub mod tile;

pub use map::GameMap;
pub use tile::{Tile, TileKind};
