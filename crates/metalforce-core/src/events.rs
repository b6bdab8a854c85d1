//! Events emitted by the simulation for audio and UI feedback.

use serde::{Deserialize, Serialize};

use crate::enums::*;

/// Something noteworthy that happened during a tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    /// Player weapon produced at least one projectile.
    WeaponFired { weapon: WeaponType },
    /// Player lost health.
    PlayerHit { damage: i32, remaining: i32 },
    /// Enemy entered its death animation.
    EnemyKilled { kind: EnemyKind, x: f32, score: u32 },
    /// Boss lost health.
    BossHit { damage: i32, remaining: i32 },
    /// Explosion effect spawned.
    Explosion { x: f32, y: f32, big: bool },
    PickupCollected { kind: PickupKind },
    BombDetonated { enemies_hit: u32 },
    BossSpawned { x: f32 },
    BossDefeated { bonus: u32 },
    StageStarted { stage: u32 },
    GameOver { score: u32 },
}
