//! Simulation engine for METAL FORCE.
//!
//! Owns the hecs ECS world, the player and the boss, runs systems once per
//! tick, and produces GameStateSnapshots for the frontend.

pub mod engine;
pub mod player;
pub mod score;
pub mod systems;
pub mod weapon;
pub mod world_setup;

pub use engine::{SimConfig, SimulationEngine};
pub use metalforce_core as core;
