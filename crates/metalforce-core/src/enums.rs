//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Player weapon type.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WeaponType {
    /// Default sidearm, never runs dry.
    #[default]
    Pistol,
    /// Very fast fire rate, low damage.
    HeavyMg,
    /// Five-pellet spread.
    Shotgun,
    /// Slow, heavy, splash damage on impact.
    Rocket,
    /// Short bursts of weak, rapid shots.
    Flame,
}

/// Which side fired a projectile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    Player,
    Enemy,
}

/// Enemy variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EnemyKind {
    /// Basic rifleman.
    Soldier,
    /// Slow, tough, fires often.
    Heavy,
    /// Lobs grenades at the player's position.
    Grenadier,
    /// Frontal shield; only hits from behind land.
    Shield,
    /// Fast melee attacker, never shoots.
    Runner,
}

/// Boss behavior phase.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum BossPhase {
    #[default]
    Idle,
    Shooting,
    MissileBarrage,
    Charge,
    /// Exhausted after a charge; takes double damage.
    Vulnerable,
}

/// Collectible type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PickupKind {
    Health,
    HeavyMg,
    Shotgun,
    Rocket,
    Flame,
    Ammo,
    Bomb,
}

/// Game phase (top-level state).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    #[default]
    Active,
    Paused,
    /// Stage boss defeated.
    Victory,
    /// Player health reached zero.
    GameOver,
}
