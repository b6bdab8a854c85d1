//! ECS systems that operate on the simulation world each tick.
//!
//! Systems are free functions that take `&mut World` (or `&World` for read-only)
//! plus the engine-owned state they touch. They keep no state of their own.

pub mod actors;
pub mod cleanup;
pub mod combat;
pub mod effects;
pub mod movement;
pub mod snapshot;
pub mod spawner;
