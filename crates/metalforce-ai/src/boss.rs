//! Boss phase state machine.
//!
//! Idle picks the next attack phase from a health-weighted table; every
//! attack phase returns to Idle except Charge, which leaves the boss
//! Vulnerable for a short window first.

use glam::Vec2;
use rand::Rng;
use tracing::debug;

use metalforce_core::components::{Attack, Bullet, Grenade, MeleeAttack, ShotParams};
use metalforce_core::constants::*;
use metalforce_core::enums::{BossPhase, Side};
use metalforce_core::types::Bounds;

/// The end-of-stage boss.
#[derive(Debug, Clone)]
pub struct Boss {
    pub position: Vec2,
    pub bounds: Bounds,
    pub health: i32,
    pub max_health: i32,
    pub facing_right: bool,
    phase: BossPhase,
    phase_timer: f32,
    attack_cooldown: f32,
    alive: bool,
    dying: bool,
    defeated: bool,
    death_timer: f32,
    flash_timer: f32,
    visible: bool,
    anim_frame: u32,
    anim_timer: f32,
}

impl Boss {
    pub fn new(x: f32) -> Self {
        let mut boss = Self {
            position: Vec2::new(x, GROUND_Y),
            bounds: Bounds::default(),
            health: BOSS_MAX_HEALTH,
            max_health: BOSS_MAX_HEALTH,
            facing_right: false,
            phase: BossPhase::Idle,
            phase_timer: 0.0,
            attack_cooldown: 0.0,
            alive: true,
            dying: false,
            defeated: false,
            death_timer: 0.0,
            flash_timer: 0.0,
            visible: true,
            anim_frame: 0,
            anim_timer: 0.0,
        };
        boss.refresh_bounds();
        boss
    }

    /// Advance one tick and collect the attacks produced.
    pub fn update<R: Rng + ?Sized>(&mut self, dt: f32, player_x: f32, rng: &mut R) -> Vec<Attack> {
        let mut attacks = Vec::new();
        if !self.alive {
            return attacks;
        }

        if self.dying {
            self.death_timer += dt;
            self.flash_timer += dt;
            self.visible = ((self.flash_timer * BOSS_FLASH_HZ).floor() as u32) % 2 == 0;
            if self.death_timer >= BOSS_DEATH_SECS {
                self.alive = false;
                self.defeated = true;
                debug!("boss death sequence finished");
            }
            return attacks;
        }

        self.facing_right = player_x > self.position.x;

        self.anim_timer += dt;
        if self.anim_timer >= BOSS_ANIM_INTERVAL {
            self.anim_timer = 0.0;
            self.anim_frame = (self.anim_frame + 1) % BOSS_ANIM_FRAMES;
        }

        self.phase_timer += dt;
        self.attack_cooldown -= dt;

        match self.phase {
            BossPhase::Idle => {
                if self.phase_timer >= BOSS_IDLE_SECS {
                    let next = select_next_phase(self.health_fraction(), rng.gen());
                    self.enter_phase(next);
                }
            }
            BossPhase::Shooting => {
                if self.attack_cooldown <= 0.0 {
                    self.attack_cooldown = BOSS_SHOT_INTERVAL;
                    attacks.extend(self.spread_shot());
                }
                if self.phase_timer >= BOSS_SHOOTING_SECS {
                    self.enter_phase(BossPhase::Idle);
                }
            }
            BossPhase::MissileBarrage => {
                if self.attack_cooldown <= 0.0 {
                    self.attack_cooldown = BOSS_MISSILE_INTERVAL;
                    let origin = Vec2::new(
                        self.position.x + BOSS_WIDTH / 2.0,
                        self.position.y + BOSS_HEIGHT,
                    );
                    attacks.push(Attack::Grenade(Grenade::lobbed(origin, player_x)));
                }
                if self.phase_timer >= BOSS_BARRAGE_SECS {
                    self.enter_phase(BossPhase::Idle);
                }
            }
            BossPhase::Charge => {
                if self.phase_timer >= BOSS_CHARGE_WINDUP_SECS {
                    let direction = if self.facing_right { 1.0 } else { -1.0 };
                    self.position.x += direction * BOSS_CHARGE_SPEED * dt;
                    if self.attack_cooldown <= 0.0 {
                        self.attack_cooldown = BOSS_CHARGE_HIT_INTERVAL;
                        attacks.push(Attack::Melee(MeleeAttack::new(
                            self.position,
                            self.facing_right,
                        )));
                    }
                }
                if self.phase_timer >= BOSS_CHARGE_SECS {
                    self.enter_phase(BossPhase::Vulnerable);
                }
            }
            BossPhase::Vulnerable => {
                if self.phase_timer >= BOSS_VULNERABLE_SECS {
                    self.enter_phase(BossPhase::Idle);
                }
            }
        }

        self.position.x = self.position.x.clamp(BOSS_MIN_X, BOSS_MAX_X);
        self.position.y = GROUND_Y;
        self.refresh_bounds();

        attacks
    }

    fn spread_shot(&self) -> Vec<Attack> {
        let x = if self.facing_right {
            self.position.x + BOSS_WIDTH
        } else {
            self.position.x
        };
        let origin = Vec2::new(x, self.position.y + BOSS_HEIGHT / 2.0);

        BOSS_SHOT_ANGLES
            .iter()
            .map(|&angle_deg| {
                let shot = ShotParams {
                    damage: BOSS_BULLET_DAMAGE,
                    speed: BOSS_BULLET_SPEED,
                    angle_deg,
                    explosion_radius: 0.0,
                    weapon: None,
                };
                Attack::Bullet(Bullet::fire(origin, self.facing_right, Side::Enemy, shot))
            })
            .collect()
    }

    fn enter_phase(&mut self, next: BossPhase) {
        debug!(from = ?self.phase, to = ?next, health = self.health, "boss phase change");
        self.phase = next;
        self.phase_timer = 0.0;
    }

    #[cfg(test)]
    pub(crate) fn force_phase(&mut self, phase: BossPhase) {
        self.enter_phase(phase);
    }

    /// Apply a hit; doubled while vulnerable.
    pub fn take_damage(&mut self, amount: i32) {
        if !self.alive || self.dying {
            return;
        }
        let dealt = if self.phase == BossPhase::Vulnerable {
            amount * BOSS_VULNERABLE_MULTIPLIER
        } else {
            amount
        };
        self.health = (self.health - dealt).max(0);
        if self.health == 0 {
            self.dying = true;
            self.death_timer = 0.0;
            self.flash_timer = 0.0;
            debug!("boss entered death sequence");
        }
    }

    pub fn health_fraction(&self) -> f32 {
        self.health as f32 / self.max_health as f32
    }

    pub fn phase(&self) -> BossPhase {
        self.phase
    }

    pub fn is_vulnerable(&self) -> bool {
        self.phase == BossPhase::Vulnerable
    }

    pub fn is_dying(&self) -> bool {
        self.dying
    }

    pub fn is_alive(&self) -> bool {
        self.alive
    }

    /// Alive and not yet in its death sequence.
    pub fn is_active(&self) -> bool {
        self.alive && !self.dying
    }

    /// Death sequence finished.
    pub fn is_defeated(&self) -> bool {
        self.defeated
    }

    pub fn visible(&self) -> bool {
        self.visible
    }

    pub fn anim_frame(&self) -> u32 {
        self.anim_frame
    }

    fn refresh_bounds(&mut self) {
        self.bounds = Bounds::new(
            self.position.x + 20.0,
            self.position.y,
            BOSS_WIDTH - 40.0,
            BOSS_HEIGHT - 20.0,
        );
    }
}

/// Pick the phase that follows Idle from a uniform roll in `[0, 1)`.
///
/// Charge only enters the rotation once the boss is wounded.
pub fn select_next_phase(health_fraction: f32, roll: f32) -> BossPhase {
    if health_fraction < BOSS_ENRAGED_FRACTION {
        match roll {
            r if r < 1.0 / 3.0 => BossPhase::Charge,
            r if r < 2.0 / 3.0 => BossPhase::MissileBarrage,
            _ => BossPhase::Shooting,
        }
    } else if health_fraction < BOSS_WOUNDED_FRACTION {
        match roll {
            r if r < 0.25 => BossPhase::Charge,
            r if r < 0.5 => BossPhase::MissileBarrage,
            _ => BossPhase::Shooting,
        }
    } else if roll < 0.5 {
        BossPhase::Shooting
    } else {
        BossPhase::MissileBarrage
    }
}
