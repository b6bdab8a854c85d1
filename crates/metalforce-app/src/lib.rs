//! METAL FORCE application shell.
//!
//! Wires the simulation to a fixed-rate game loop thread and exposes a small
//! command/snapshot surface a frontend can drive.

pub mod autopilot;
pub mod config;
pub mod error;
pub mod game_loop;
pub mod state;

pub use metalforce_core as core;
