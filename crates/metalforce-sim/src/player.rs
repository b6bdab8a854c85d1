//! The player-controlled soldier.

use glam::Vec2;

use metalforce_core::components::{Bullet, PickupEffect};
use metalforce_core::constants::*;
use metalforce_core::types::Bounds;

use crate::weapon::Weapon;

#[derive(Debug, Clone)]
pub struct Player {
    pub position: Vec2,
    pub velocity: Vec2,
    pub bounds: Bounds,
    pub health: i32,
    pub max_health: i32,
    pub facing_right: bool,
    alive: bool,
    jumping: bool,
    invincible_timer: f32,
    bombs: u32,
    weapon: Weapon,
    anim_frame: u32,
    anim_timer: f32,
}

impl Default for Player {
    fn default() -> Self {
        let mut player = Self {
            position: Vec2::new(PLAYER_START_X, GROUND_Y),
            velocity: Vec2::ZERO,
            bounds: Bounds::default(),
            health: PLAYER_MAX_HEALTH,
            max_health: PLAYER_MAX_HEALTH,
            facing_right: true,
            alive: true,
            jumping: false,
            invincible_timer: 0.0,
            bombs: PLAYER_START_BOMBS,
            weapon: Weapon::default(),
            anim_frame: 0,
            anim_timer: 0.0,
        };
        player.refresh_bounds();
        player
    }
}

impl Player {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn update(&mut self, dt: f32) {
        self.weapon.update(dt);
        self.invincible_timer = (self.invincible_timer - dt).max(0.0);

        self.velocity.y -= PLAYER_GRAVITY * dt;
        self.position += self.velocity * dt;

        if self.position.y <= GROUND_Y {
            self.position.y = GROUND_Y;
            self.velocity.y = 0.0;
            self.jumping = false;
        }

        self.refresh_bounds();

        self.anim_timer += dt;
        if self.anim_timer >= PLAYER_ANIM_INTERVAL {
            self.anim_timer = 0.0;
            self.anim_frame = (self.anim_frame + 1) % PLAYER_ANIM_FRAMES;
        }

        self.velocity.x *= PLAYER_FRICTION;
    }

    pub fn move_left(&mut self) {
        self.velocity.x = -PLAYER_SPEED;
        self.facing_right = false;
    }

    pub fn move_right(&mut self) {
        self.velocity.x = PLAYER_SPEED;
        self.facing_right = true;
    }

    /// Start a jump. Ignored while airborne.
    pub fn jump(&mut self) {
        if !self.jumping {
            self.velocity.y = PLAYER_JUMP_VELOCITY;
            self.jumping = true;
        }
    }

    /// Fire the held weapon from the muzzle on the facing side.
    pub fn shoot(&mut self) -> Vec<Bullet> {
        let x = if self.facing_right {
            self.position.x + PLAYER_WIDTH
        } else {
            self.position.x
        };
        let origin = Vec2::new(x, self.position.y + PLAYER_HEIGHT / 2.0);
        self.weapon.shoot(origin, self.facing_right)
    }

    /// Apply a hit. Returns false when the hit was ignored.
    pub fn take_damage(&mut self, amount: i32) -> bool {
        if !self.alive || self.invincible_timer > 0.0 {
            return false;
        }
        self.health = (self.health - amount).max(0);
        if self.health == 0 {
            self.alive = false;
        }
        self.invincible_timer = PLAYER_INVINCIBLE_SECS;
        true
    }

    pub fn heal(&mut self, amount: i32) {
        self.health = (self.health + amount).min(self.max_health);
    }

    pub fn add_bomb(&mut self) {
        self.bombs += 1;
    }

    /// Spend a bomb if one is left.
    pub fn use_bomb(&mut self) -> bool {
        if self.bombs == 0 {
            return false;
        }
        self.bombs -= 1;
        true
    }

    pub fn apply_pickup(&mut self, effect: PickupEffect) {
        match effect {
            PickupEffect::Heal(amount) => self.heal(amount),
            PickupEffect::Weapon(kind) => self.weapon.pickup_weapon(kind),
            PickupEffect::Ammo(amount) => self.weapon.add_ammo(amount),
            PickupEffect::Bomb => self.add_bomb(),
        }
    }

    /// Back to a fresh soldier at the start line.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Return to the start line between stages, keeping health, weapon and bombs.
    pub fn reposition(&mut self) {
        self.position = Vec2::new(PLAYER_START_X, GROUND_Y);
        self.velocity = Vec2::ZERO;
        self.jumping = false;
        self.refresh_bounds();
    }

    /// Keep the player inside `[min_x, max_x]`.
    pub fn clamp_x(&mut self, min_x: f32, max_x: f32) {
        self.position.x = self.position.x.clamp(min_x, max_x);
        self.refresh_bounds();
    }

    pub fn weapon(&self) -> &Weapon {
        &self.weapon
    }

    pub fn is_alive(&self) -> bool {
        self.alive
    }

    pub fn is_jumping(&self) -> bool {
        self.jumping
    }

    pub fn is_invincible(&self) -> bool {
        self.invincible_timer > 0.0
    }

    pub fn bombs(&self) -> u32 {
        self.bombs
    }

    pub fn anim_frame(&self) -> u32 {
        self.anim_frame
    }

    fn refresh_bounds(&mut self) {
        self.bounds = Bounds::new(
            self.position.x + 10.0,
            self.position.y,
            PLAYER_WIDTH - 20.0,
            PLAYER_HEIGHT - 10.0,
        );
    }
}
