pub mod clock;
pub mod config;
pub mod error;
pub mod types;

pub use clock::WorldClock;
pub use config::SimulationConfig;
pub use error::{ActionResult, Impossible, Result, RogueError};
