pub mod perception;
pub mod tick;

pub use perception::observe_event;
pub use tick::{player_turn, run_tick, take_turn};
