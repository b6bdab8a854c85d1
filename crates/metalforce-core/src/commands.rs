//! Player intents sent from the input layer to the simulation.
//!
//! Commands are queued and applied at the next tick boundary. The simulation
//! does not care which device produced them.

use serde::{Deserialize, Serialize};

/// All possible player actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    // --- Actor control (level-triggered: resend every frame while held) ---
    MoveLeft,
    MoveRight,
    /// Fire the current weapon; respects weapon cooldown.
    Fire,

    // --- Actor control (edge-triggered) ---
    Jump,
    /// Spend one bomb to clear the screen.
    UseBomb,

    // --- Simulation control ---
    /// Toggle between active and paused.
    TogglePause,
    /// Start over from stage 1 with a fresh player.
    Restart,
    /// Continue to the next stage after defeating the boss.
    NextStage,
}
