//! Variant-specific stat profiles.
//!
//! Consolidates per-variant parameters for enemy behavior.

use metalforce_core::enums::EnemyKind;

/// Stat profile for an enemy variant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnemyProfile {
    pub max_health: i32,
    /// Full walking speed (units/s).
    pub speed: f32,
    /// Seconds between attacks.
    pub shoot_interval: f32,
    /// Points awarded on kill.
    pub score_value: u32,
    /// Fraction of `speed` used while advancing.
    pub move_multiplier: f32,
}

/// Get the stat profile for a given variant.
pub fn get_profile(kind: EnemyKind) -> EnemyProfile {
    match kind {
        EnemyKind::Soldier => EnemyProfile {
            max_health: 30,
            speed: 80.0,
            shoot_interval: 2.0,
            score_value: 100,
            move_multiplier: 0.5,
        },
        EnemyKind::Heavy => EnemyProfile {
            max_health: 80,
            speed: 40.0,
            shoot_interval: 0.5,
            score_value: 300,
            move_multiplier: 0.5,
        },
        EnemyKind::Grenadier => EnemyProfile {
            max_health: 40,
            speed: 60.0,
            shoot_interval: 3.0,
            score_value: 200,
            move_multiplier: 0.5,
        },
        EnemyKind::Shield => EnemyProfile {
            max_health: 60,
            speed: 50.0,
            shoot_interval: 2.5,
            score_value: 250,
            move_multiplier: 0.5,
        },
        // Interval is never reached in practice: runners hurt by contact.
        EnemyKind::Runner => EnemyProfile {
            max_health: 20,
            speed: 150.0,
            shoot_interval: 999.0,
            score_value: 150,
            move_multiplier: 1.0,
        },
    }
}
