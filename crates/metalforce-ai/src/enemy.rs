//! Variant-polymorphic enemy actor.
//!
//! One struct carries the shared state of every variant; behavior branches
//! on `kind` inside the shared update, with constants from the profile table.

use glam::Vec2;
use rand::Rng;

use metalforce_core::components::{Attack, Bullet, Grenade, MeleeAttack, ShotParams};
use metalforce_core::constants::*;
use metalforce_core::enums::{EnemyKind, Side};
use metalforce_core::types::Bounds;

use crate::profiles::{get_profile, EnemyProfile};

/// A ground enemy.
#[derive(Debug, Clone)]
pub struct Enemy {
    pub kind: EnemyKind,
    pub position: Vec2,
    pub velocity: Vec2,
    pub bounds: Bounds,
    pub health: i32,
    pub facing_right: bool,
    alive: bool,
    dying: bool,
    shield: bool,
    anim_frame: u32,
    anim_timer: f32,
    death_timer: f32,
    shoot_timer: f32,
    move_timer: f32,
    moving: bool,
    attack_cooldown: f32,
}

impl Enemy {
    /// Enemy standing on the ground at `x`, with its attack clock at zero.
    pub fn new(kind: EnemyKind, x: f32) -> Self {
        let profile = get_profile(kind);
        let mut enemy = Self {
            kind,
            position: Vec2::new(x, GROUND_Y),
            velocity: Vec2::ZERO,
            bounds: Bounds::default(),
            health: profile.max_health,
            facing_right: false,
            alive: true,
            dying: false,
            shield: kind == EnemyKind::Shield,
            anim_frame: 0,
            anim_timer: 0.0,
            death_timer: 0.0,
            shoot_timer: 0.0,
            move_timer: 0.0,
            moving: false,
            attack_cooldown: 0.0,
        };
        enemy.refresh_bounds();
        enemy
    }

    /// Enemy with a randomized head start on its attack clock, so a group
    /// spawned together does not fire in unison.
    pub fn spawn<R: Rng + ?Sized>(kind: EnemyKind, x: f32, rng: &mut R) -> Self {
        let mut enemy = Self::new(kind, x);
        enemy.shoot_timer = rng.gen::<f32>() * ENEMY_SHOOT_TIMER_JITTER;
        enemy
    }

    pub fn profile(&self) -> EnemyProfile {
        get_profile(self.kind)
    }

    /// Advance one tick. Returns at most one attack.
    pub fn update<R: Rng + ?Sized>(&mut self, dt: f32, player: Vec2, rng: &mut R) -> Option<Attack> {
        if !self.alive {
            return None;
        }

        if self.dying {
            self.death_timer += dt;
            self.anim_frame =
                ((self.death_timer / ENEMY_DEATH_FRAME_SECS) as u32).min(ENEMY_DEATH_FRAMES - 1);
            if self.death_timer >= ENEMY_DEATH_SECS {
                self.alive = false;
            }
            return None;
        }

        let profile = self.profile();

        // Ties face left.
        self.facing_right = player.x > self.position.x;

        self.move_timer += dt;
        if self.move_timer >= ENEMY_MOVE_DECISION_SECS {
            self.move_timer = 0.0;
            self.moving = match self.kind {
                EnemyKind::Runner => true,
                EnemyKind::Shield => (player.x - self.position.x).abs() > SHIELD_ADVANCE_DISTANCE,
                _ => rng.gen_bool(0.5),
            };
        }

        self.velocity.x = if self.moving {
            self.direction() * profile.speed * profile.move_multiplier
        } else {
            0.0
        };
        self.position.x += self.velocity.x * dt;
        self.position.y = GROUND_Y;
        self.refresh_bounds();

        self.anim_timer += dt;
        let anim_interval = if self.kind == EnemyKind::Runner {
            RUNNER_ANIM_INTERVAL
        } else {
            ENEMY_ANIM_INTERVAL
        };
        if self.anim_timer >= anim_interval {
            self.anim_timer = 0.0;
            self.anim_frame = (self.anim_frame + 1) % ENEMY_ANIM_FRAMES;
        }

        self.attack_cooldown -= dt;
        self.shoot_timer += dt;
        if self.shoot_timer >= profile.shoot_interval && self.attack_cooldown <= 0.0 {
            self.shoot_timer = 0.0;
            self.attack_cooldown = ENEMY_ATTACK_COOLDOWN;
            return self.attack(player);
        }

        None
    }

    fn attack(&self, player: Vec2) -> Option<Attack> {
        let mid_y = self.position.y + ENEMY_HEIGHT / 2.0;
        match self.kind {
            EnemyKind::Grenadier => {
                let x = if self.facing_right {
                    self.position.x + ENEMY_WIDTH
                } else {
                    self.position.x
                };
                Some(Attack::Grenade(Grenade::lobbed(Vec2::new(x, mid_y), player.x)))
            }
            EnemyKind::Runner => {
                if (player.x - self.position.x).abs() < RUNNER_MELEE_RANGE {
                    Some(Attack::Melee(MeleeAttack::new(self.position, self.facing_right)))
                } else {
                    None
                }
            }
            EnemyKind::Soldier | EnemyKind::Heavy | EnemyKind::Shield => {
                let x = if self.facing_right {
                    self.position.x + ENEMY_WIDTH
                } else {
                    self.position.x - 8.0
                };
                Some(Attack::Bullet(Bullet::fire(
                    Vec2::new(x, mid_y),
                    self.facing_right,
                    Side::Enemy,
                    ShotParams::enemy_rifle(),
                )))
            }
        }
    }

    /// Apply a hit. Returns true if this hit started the death animation.
    ///
    /// A shielded enemy ignores hits that do not come from behind.
    pub fn take_damage(&mut self, amount: i32, from_behind: bool) -> bool {
        if !self.alive || self.dying {
            return false;
        }
        if self.shield && !from_behind {
            return false;
        }

        self.health = (self.health - amount).max(0);
        if self.health == 0 {
            self.dying = true;
            self.death_timer = 0.0;
            self.anim_frame = 0;
            return true;
        }
        false
    }

    /// Strip the shield. Nothing in regular combat calls this.
    pub fn destroy_shield(&mut self) {
        self.shield = false;
    }

    pub fn score_value(&self) -> u32 {
        self.profile().score_value
    }

    pub fn is_alive(&self) -> bool {
        self.alive
    }

    pub fn is_dying(&self) -> bool {
        self.dying
    }

    /// Alive and not yet in its death animation.
    pub fn is_active(&self) -> bool {
        self.alive && !self.dying
    }

    pub fn has_shield(&self) -> bool {
        self.shield
    }

    pub fn anim_frame(&self) -> u32 {
        self.anim_frame
    }

    fn direction(&self) -> f32 {
        if self.facing_right {
            1.0
        } else {
            -1.0
        }
    }

    fn refresh_bounds(&mut self) {
        let width = ENEMY_WIDTH - 20.0;
        let height = ENEMY_HEIGHT - 10.0;
        let offset = if self.shield {
            // The shield covers the front, so the hittable box sits toward the back.
            if self.facing_right {
                0.0
            } else {
                SHIELD_BOUNDS_OFFSET
            }
        } else {
            10.0
        };
        self.bounds = Bounds::new(self.position.x + offset, self.position.y, width, height);
    }
}
