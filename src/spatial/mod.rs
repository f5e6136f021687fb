pub mod fov;
pub mod grid;
pub mod pathfinding;

pub use grid::Grid;
