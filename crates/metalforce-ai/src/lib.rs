//! Actor AI for METAL FORCE.
//!
//! Implements the variant-driven enemy behavior, the boss phase state
//! machine, and the per-variant stat profiles. No ECS dependency: actors
//! are plain structs updated by the simulation engine.

pub mod boss;
pub mod enemy;
pub mod profiles;

pub use metalforce_core as core;
