//! Core types and definitions for the METAL FORCE simulation.
//!
//! This crate defines the vocabulary shared across all other crates:
//! projectile and pickup data, attack artifacts, commands, state snapshots,
//! events, and tuning constants. It has no dependency on any runtime,
//! renderer, or input device.

pub mod commands;
pub mod components;
pub mod constants;
pub mod enums;
pub mod events;
pub mod state;
pub mod types;

#[cfg(test)]
mod tests;
