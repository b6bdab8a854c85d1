//! Player weapon: fire cadence, ammo accounting and projectile fan-out.

use glam::Vec2;

use metalforce_core::components::{Bullet, ShotParams};
use metalforce_core::enums::{Side, WeaponType};

/// Ammo value meaning "never runs out".
pub const INFINITE_AMMO: i32 = -1;

/// Muzzle offset applied when firing to the left.
const LEFT_MUZZLE_OFFSET: f32 = 8.0;

/// Fixed per-weapon parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeaponStats {
    pub damage: i32,
    /// Seconds between shots.
    pub fire_rate: f32,
    pub bullet_speed: f32,
    /// Ammo granted on pickup; `INFINITE_AMMO` for the pistol.
    pub ammo: i32,
    pub bullet_count: u32,
    /// Total fan angle in degrees, centered on the facing direction.
    pub spread_deg: f32,
    pub explosion_radius: f32,
}

pub fn weapon_stats(kind: WeaponType) -> WeaponStats {
    match kind {
        WeaponType::Pistol => WeaponStats {
            damage: 20,
            fire_rate: 0.2,
            bullet_speed: 500.0,
            ammo: INFINITE_AMMO,
            bullet_count: 1,
            spread_deg: 0.0,
            explosion_radius: 0.0,
        },
        WeaponType::HeavyMg => WeaponStats {
            damage: 15,
            fire_rate: 0.08,
            bullet_speed: 600.0,
            ammo: 100,
            bullet_count: 1,
            spread_deg: 0.0,
            explosion_radius: 0.0,
        },
        WeaponType::Shotgun => WeaponStats {
            damage: 25,
            fire_rate: 0.5,
            bullet_speed: 450.0,
            ammo: 30,
            bullet_count: 5,
            spread_deg: 15.0,
            explosion_radius: 0.0,
        },
        WeaponType::Rocket => WeaponStats {
            damage: 100,
            fire_rate: 1.0,
            bullet_speed: 300.0,
            ammo: 10,
            bullet_count: 1,
            spread_deg: 0.0,
            explosion_radius: 80.0,
        },
        WeaponType::Flame => WeaponStats {
            damage: 8,
            fire_rate: 0.05,
            bullet_speed: 250.0,
            ammo: 150,
            bullet_count: 1,
            spread_deg: 0.0,
            explosion_radius: 0.0,
        },
    }
}

/// The weapon the player is holding.
#[derive(Debug, Clone)]
pub struct Weapon {
    kind: WeaponType,
    ammo: i32,
    cooldown: f32,
}

impl Default for Weapon {
    fn default() -> Self {
        Self::new(WeaponType::Pistol)
    }
}

impl Weapon {
    pub fn new(kind: WeaponType) -> Self {
        Self {
            kind,
            ammo: weapon_stats(kind).ammo,
            cooldown: 0.0,
        }
    }

    pub fn update(&mut self, dt: f32) {
        self.cooldown = (self.cooldown - dt).max(0.0);
    }

    pub fn can_shoot(&self) -> bool {
        self.cooldown <= 0.0 && (self.ammo == INFINITE_AMMO || self.ammo > 0)
    }

    /// Fire from `origin`. Returns an empty list while cooling down or dry.
    ///
    /// A finite weapon that fires its last round reverts to the pistol; the
    /// bullets of that last shot still carry the emptied weapon's stats.
    pub fn shoot(&mut self, origin: Vec2, facing_right: bool) -> Vec<Bullet> {
        if !self.can_shoot() {
            return Vec::new();
        }

        let kind = self.kind;
        let stats = weapon_stats(kind);
        self.cooldown = stats.fire_rate;

        if self.ammo != INFINITE_AMMO {
            self.ammo -= 1;
            if self.ammo <= 0 {
                self.kind = WeaponType::Pistol;
                self.ammo = INFINITE_AMMO;
            }
        }

        let spawn_x = if facing_right {
            origin.x
        } else {
            origin.x - LEFT_MUZZLE_OFFSET
        };
        let spawn = Vec2::new(spawn_x, origin.y);

        (0..stats.bullet_count)
            .map(|i| {
                let shot = ShotParams {
                    damage: stats.damage,
                    speed: stats.bullet_speed,
                    angle_deg: spread_angle(i, stats.bullet_count, stats.spread_deg),
                    explosion_radius: stats.explosion_radius,
                    weapon: Some(kind),
                };
                Bullet::fire(spawn, facing_right, Side::Player, shot)
            })
            .collect()
    }

    /// Swap to `kind` with a full load of its ammo.
    pub fn pickup_weapon(&mut self, kind: WeaponType) {
        self.kind = kind;
        self.ammo = weapon_stats(kind).ammo;
    }

    /// Top up a finite weapon. The pistol ignores ammo.
    pub fn add_ammo(&mut self, amount: i32) {
        if self.kind != WeaponType::Pistol {
            self.ammo += amount;
        }
    }

    pub fn kind(&self) -> WeaponType {
        self.kind
    }

    pub fn ammo(&self) -> i32 {
        self.ammo
    }

    pub fn cooldown(&self) -> f32 {
        self.cooldown
    }

    pub fn name(&self) -> &'static str {
        match self.kind {
            WeaponType::Pistol => "PISTOL",
            WeaponType::HeavyMg => "HEAVY MG",
            WeaponType::Shotgun => "SHOTGUN",
            WeaponType::Rocket => "ROCKET",
            WeaponType::Flame => "FLAME",
        }
    }

    pub fn ammo_display(&self) -> String {
        if self.ammo == INFINITE_AMMO {
            "∞".to_string()
        } else {
            self.ammo.to_string()
        }
    }
}

/// Angle of pellet `index` when `count` pellets fan evenly over `spread_deg`.
fn spread_angle(index: u32, count: u32, spread_deg: f32) -> f32 {
    if count <= 1 {
        return 0.0;
    }
    let step = spread_deg / (count - 1) as f32;
    -spread_deg / 2.0 + step * index as f32
}
