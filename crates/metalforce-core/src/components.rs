//! Plain-data entities stored in the hecs world, plus the attack artifacts
//! actors hand back to the engine.
//!
//! Constructors and geometry live here; per-tick behavior lives in the
//! simulation systems.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::enums::*;
use crate::types::Bounds;

/// Parameters describing a single fired shot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShotParams {
    pub damage: i32,
    pub speed: f32,
    /// Degrees above (positive) or below the facing direction.
    pub angle_deg: f32,
    /// Splash radius on impact; zero for no splash.
    pub explosion_radius: f32,
    /// Weapon that fired the shot. `None` for enemy guns.
    pub weapon: Option<WeaponType>,
}

impl ShotParams {
    /// Standard enemy rifle round.
    pub fn enemy_rifle() -> Self {
        Self {
            damage: ENEMY_BULLET_DAMAGE,
            speed: ENEMY_BULLET_SPEED,
            angle_deg: 0.0,
            explosion_radius: 0.0,
            weapon: None,
        }
    }
}

/// A straight-flying projectile.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bullet {
    pub position: Vec2,
    pub velocity: Vec2,
    pub side: Side,
    pub damage: i32,
    pub weapon: Option<WeaponType>,
    pub explosion_radius: f32,
    pub active: bool,
    pub bounds: Bounds,
}

impl Bullet {
    /// Fire a bullet from `origin` toward the facing side, tilted by the shot angle.
    pub fn fire(origin: Vec2, facing_right: bool, side: Side, shot: ShotParams) -> Self {
        let direction = if facing_right { 1.0 } else { -1.0 };
        let radians = shot.angle_deg.to_radians();
        let velocity = Vec2::new(
            direction * shot.speed * radians.cos(),
            shot.speed * radians.sin(),
        );
        let (width, height) = bullet_size(shot.weapon);

        Self {
            position: origin,
            velocity,
            side,
            damage: shot.damage,
            weapon: shot.weapon,
            explosion_radius: shot.explosion_radius,
            active: true,
            bounds: Bounds::new(origin.x, origin.y, width, height),
        }
    }

    pub fn is_player_owned(&self) -> bool {
        self.side == Side::Player
    }
}

/// Bounds size per weapon tag: (width, height).
pub fn bullet_size(weapon: Option<WeaponType>) -> (f32, f32) {
    match weapon {
        Some(WeaponType::Shotgun) => (10.0, 6.0),
        Some(WeaponType::Rocket) => (24.0, 12.0),
        Some(WeaponType::Flame) => (20.0, 16.0),
        Some(WeaponType::Pistol) | Some(WeaponType::HeavyMg) | None => (16.0, 8.0),
    }
}

/// A lobbed explosive following a ballistic arc.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Grenade {
    pub position: Vec2,
    pub velocity: Vec2,
    pub active: bool,
    pub exploded: bool,
    /// Seconds since launch.
    pub age: f32,
    pub bounds: Bounds,
}

impl Grenade {
    /// Lob from `origin` so that the arc carries it to `target_x`.
    pub fn lobbed(origin: Vec2, target_x: f32) -> Self {
        let velocity = Vec2::new((target_x - origin.x) / GRENADE_FLIGHT_SECS, GRENADE_LAUNCH_VY);
        Self {
            position: origin,
            velocity,
            active: true,
            exploded: false,
            age: 0.0,
            bounds: Bounds::new(origin.x, origin.y, GRENADE_SIZE, GRENADE_SIZE),
        }
    }

    /// Area hit by the blast, centered on the grenade.
    pub fn blast_bounds(&self) -> Bounds {
        Bounds::centered_square(self.position, GRENADE_BLAST_HALF * 2.0)
    }
}

/// One-tick melee hitbox. Never stored; resolved the tick it is produced.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MeleeAttack {
    pub position: Vec2,
    pub facing_right: bool,
    pub damage: i32,
}

impl MeleeAttack {
    pub fn new(position: Vec2, facing_right: bool) -> Self {
        Self {
            position,
            facing_right,
            damage: MELEE_DAMAGE,
        }
    }

    pub fn bounds(&self) -> Bounds {
        let x = if self.facing_right {
            self.position.x + MELEE_REACH
        } else {
            self.position.x - MELEE_REACH
        };
        Bounds::new(x, self.position.y, MELEE_WIDTH, MELEE_HEIGHT)
    }
}

/// Artifact produced by an enemy or boss update.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Attack {
    Bullet(Bullet),
    Grenade(Grenade),
    Melee(MeleeAttack),
}

/// What collecting a pickup does to the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PickupEffect {
    Heal(i32),
    Weapon(WeaponType),
    /// Added to the current weapon unless it is the pistol.
    Ammo(i32),
    Bomb,
}

impl PickupKind {
    pub fn effect(self) -> PickupEffect {
        match self {
            PickupKind::Health => PickupEffect::Heal(PICKUP_HEAL_AMOUNT),
            PickupKind::HeavyMg => PickupEffect::Weapon(WeaponType::HeavyMg),
            PickupKind::Shotgun => PickupEffect::Weapon(WeaponType::Shotgun),
            PickupKind::Rocket => PickupEffect::Weapon(WeaponType::Rocket),
            PickupKind::Flame => PickupEffect::Weapon(WeaponType::Flame),
            PickupKind::Ammo => PickupEffect::Ammo(PICKUP_AMMO_AMOUNT),
            PickupKind::Bomb => PickupEffect::Bomb,
        }
    }

    /// Map a uniform roll in `[0, 1)` onto the drop table.
    pub fn from_roll(roll: f32) -> Self {
        match roll {
            r if r < 0.25 => PickupKind::Health,
            r if r < 0.40 => PickupKind::HeavyMg,
            r if r < 0.55 => PickupKind::Shotgun,
            r if r < 0.70 => PickupKind::Rocket,
            r if r < 0.80 => PickupKind::Flame,
            r if r < 0.90 => PickupKind::Ammo,
            _ => PickupKind::Bomb,
        }
    }
}

/// Collectible lying in the world. Never expires.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Pickup {
    pub position: Vec2,
    pub kind: PickupKind,
    pub active: bool,
    pub anim_time: f32,
    /// Visual bob; does not move the bounds.
    pub float_offset: f32,
    pub bounds: Bounds,
}

impl Pickup {
    pub fn new(position: Vec2, kind: PickupKind) -> Self {
        Self {
            position,
            kind,
            active: true,
            anim_time: 0.0,
            float_offset: 0.0,
            bounds: Bounds::new(position.x, position.y, PICKUP_SIZE, PICKUP_SIZE),
        }
    }

    /// Deactivate and hand back the effect.
    pub fn collect(&mut self) -> PickupEffect {
        self.active = false;
        self.kind.effect()
    }
}

/// Time-boxed visual effect. Carries no damage.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Explosion {
    pub position: Vec2,
    pub big: bool,
    pub timer: f32,
    pub frame: u32,
    pub active: bool,
}

impl Explosion {
    pub fn new(position: Vec2, big: bool) -> Self {
        Self {
            position,
            big,
            timer: 0.0,
            frame: 0,
            active: true,
        }
    }
}
