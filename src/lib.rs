//! Roguelife - turn-based life simulation on a tile world
//!
//! Entities live in an arena owned by the `World`. Each tick every
//! subscribed actor plans an action through its AI, performs it, and refreshes
//! its field of view; everyone who saw something happen writes it down.

pub mod actions;
pub mod ai;
pub mod core;
pub mod ecs;
pub mod entity;
pub mod events;
pub mod llm;
pub mod render;
pub mod simulation;
pub mod spatial;
pub mod world;
