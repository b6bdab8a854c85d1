//! Simulation constants and tuning parameters.
//!
//! Values are balance data: changing them changes how the game plays.

/// Nominal frame rate driving the simulation (Hz).
pub const TICK_RATE: u32 = 60;

/// Seconds per tick at the nominal frame rate.
pub const DT: f32 = 1.0 / TICK_RATE as f32;

// --- World ---

/// Visible viewport width in world units.
pub const WORLD_WIDTH: f32 = 800.0;

/// Visible viewport height in world units.
pub const WORLD_HEIGHT: f32 = 480.0;

/// Height of the ground plane every actor stands on.
pub const GROUND_Y: f32 = 80.0;

/// Projectiles left of this X are discarded.
pub const WORLD_MIN_X: f32 = -50.0;

/// Projectiles right of this X are discarded.
pub const WORLD_MAX_X: f32 = 3000.0;

/// Projectiles below this Y are discarded.
pub const WORLD_MIN_Y: f32 = -50.0;

/// Projectiles above this Y are discarded.
pub const WORLD_MAX_Y: f32 = WORLD_HEIGHT + 50.0;

/// Camera trails the player by this fraction of the viewport.
pub const CAMERA_LEAD_FRACTION: f32 = 1.0 / 3.0;

/// Extra margin kept between the locked camera and the boss.
pub const CAMERA_BOSS_MARGIN: f32 = 100.0;

// --- Player ---

pub const PLAYER_WIDTH: f32 = 64.0;
pub const PLAYER_HEIGHT: f32 = 64.0;
pub const PLAYER_START_X: f32 = 100.0;
pub const PLAYER_MAX_HEALTH: i32 = 100;
pub const PLAYER_START_BOMBS: u32 = 3;

/// Horizontal run speed.
pub const PLAYER_SPEED: f32 = 200.0;

/// Initial upward velocity of a jump.
pub const PLAYER_JUMP_VELOCITY: f32 = 450.0;

/// Downward acceleration applied to the player.
pub const PLAYER_GRAVITY: f32 = 800.0;

/// Invincibility window after any hit (seconds).
pub const PLAYER_INVINCIBLE_SECS: f32 = 1.5;

/// Per-tick horizontal velocity multiplier.
pub const PLAYER_FRICTION: f32 = 0.85;

pub const PLAYER_ANIM_INTERVAL: f32 = 0.1;
pub const PLAYER_ANIM_FRAMES: u32 = 3;

// --- Enemies ---

pub const ENEMY_WIDTH: f32 = 64.0;
pub const ENEMY_HEIGHT: f32 = 64.0;

/// Seconds between movement re-rolls.
pub const ENEMY_MOVE_DECISION_SECS: f32 = 1.5;

/// Shield enemies only advance while farther than this from the player.
pub const SHIELD_ADVANCE_DISTANCE: f32 = 100.0;

/// Runners only strike when closer than this to the player.
pub const RUNNER_MELEE_RANGE: f32 = 60.0;

/// Shield bounds shift toward the back by this much when facing left.
pub const SHIELD_BOUNDS_OFFSET: f32 = 20.0;

/// Minimum gap between two attacks of the same enemy.
pub const ENEMY_ATTACK_COOLDOWN: f32 = 0.3;

/// Upper bound of the randomized initial shoot timer.
pub const ENEMY_SHOOT_TIMER_JITTER: f32 = 2.0;

pub const ENEMY_ANIM_FRAMES: u32 = 2;
pub const ENEMY_ANIM_INTERVAL: f32 = 0.2;
pub const RUNNER_ANIM_INTERVAL: f32 = 0.1;

pub const ENEMY_DEATH_FRAME_SECS: f32 = 0.15;
pub const ENEMY_DEATH_FRAMES: u32 = 3;

/// Death animation length; the enemy is removed afterwards.
pub const ENEMY_DEATH_SECS: f32 = 0.45;

pub const ENEMY_BULLET_DAMAGE: i32 = 10;
pub const ENEMY_BULLET_SPEED: f32 = 500.0;

// --- Boss ---

pub const BOSS_WIDTH: f32 = 128.0;
pub const BOSS_HEIGHT: f32 = 128.0;
pub const BOSS_MAX_HEALTH: i32 = 500;
pub const BOSS_MIN_X: f32 = 200.0;
pub const BOSS_MAX_X: f32 = 1500.0;

pub const BOSS_IDLE_SECS: f32 = 2.0;
pub const BOSS_SHOOTING_SECS: f32 = 4.0;
pub const BOSS_BARRAGE_SECS: f32 = 3.0;
pub const BOSS_CHARGE_SECS: f32 = 3.0;
pub const BOSS_CHARGE_WINDUP_SECS: f32 = 1.0;
pub const BOSS_VULNERABLE_SECS: f32 = 2.0;

pub const BOSS_SHOT_INTERVAL: f32 = 0.3;
pub const BOSS_SHOT_ANGLES: [f32; 3] = [-10.0, 0.0, 10.0];
pub const BOSS_BULLET_DAMAGE: i32 = 15;
pub const BOSS_BULLET_SPEED: f32 = 400.0;
pub const BOSS_MISSILE_INTERVAL: f32 = 0.5;
pub const BOSS_CHARGE_SPEED: f32 = 300.0;
pub const BOSS_CHARGE_HIT_INTERVAL: f32 = 0.2;

/// Damage multiplier while in the vulnerable phase.
pub const BOSS_VULNERABLE_MULTIPLIER: i32 = 2;

/// Health fraction below which charge becomes as likely as any other attack.
pub const BOSS_ENRAGED_FRACTION: f32 = 0.3;

/// Health fraction below which charge enters the rotation.
pub const BOSS_WOUNDED_FRACTION: f32 = 0.6;

pub const BOSS_DEATH_SECS: f32 = 3.0;

/// Visibility toggles this many times per second while dying.
pub const BOSS_FLASH_HZ: f32 = 10.0;

pub const BOSS_ANIM_INTERVAL: f32 = 0.15;
pub const BOSS_ANIM_FRAMES: u32 = 2;

// --- Projectiles ---

pub const GRENADE_SIZE: f32 = 16.0;

/// Time the lob is tuned to take to reach its target X.
pub const GRENADE_FLIGHT_SECS: f32 = 1.5;
pub const GRENADE_LAUNCH_VY: f32 = 300.0;
pub const GRENADE_GRAVITY: f32 = 400.0;
pub const GRENADE_FUSE_SECS: f32 = 2.0;

/// Half-extent of the grenade blast square.
pub const GRENADE_BLAST_HALF: f32 = 40.0;
pub const GRENADE_DAMAGE: i32 = 30;

pub const MELEE_DAMAGE: i32 = 25;
pub const MELEE_REACH: f32 = 32.0;
pub const MELEE_WIDTH: f32 = 40.0;
pub const MELEE_HEIGHT: f32 = 60.0;

// --- Pickups ---

pub const PICKUP_SIZE: f32 = 32.0;

/// Pickups rest this far above the ground.
pub const PICKUP_HOVER: f32 = 20.0;
pub const PICKUP_HEAL_AMOUNT: i32 = 50;
pub const PICKUP_AMMO_AMOUNT: i32 = 50;
pub const PICKUP_SCORE: u32 = 50;
pub const PICKUP_FLOAT_RATE: f32 = 4.0;
pub const PICKUP_FLOAT_AMPLITUDE: f32 = 4.0;

/// Chance a killed enemy leaves a pickup behind.
pub const PICKUP_DROP_CHANCE: f32 = 0.15;

// --- Explosions ---

pub const EXPLOSION_FRAME_SECS: f32 = 0.1;
pub const EXPLOSION_FRAMES: u32 = 3;

// --- Contact damage ---

pub const ENEMY_CONTACT_DAMAGE: i32 = 5;
pub const BOSS_CONTACT_DAMAGE: i32 = 10;

// --- Bomb ---

/// Damage dealt to every on-screen enemy; above any enemy's max health.
pub const BOMB_ENEMY_DAMAGE: i32 = 999;
pub const BOMB_BOSS_DAMAGE: i32 = 50;

// --- Stages & spawning ---

pub const DEFAULT_STAGE_LENGTH: f32 = 2000.0;
pub const DEFAULT_FINAL_STAGE: u32 = 3;
pub const BOSS_DEFEAT_BONUS: u32 = 5000;

pub const ENEMY_SPAWN_INTERVAL: f32 = 3.0;
pub const PICKUP_SPAWN_INTERVAL: f32 = 8.0;

/// Enemies appear this far beyond the right edge of the viewport.
pub const ENEMY_SPAWN_MARGIN: f32 = 100.0;

/// Horizontal spacing between enemies spawned together.
pub const ENEMY_SPAWN_SPACING: f32 = 200.0;

/// Width of the band right of the viewport where pickups appear.
pub const PICKUP_SPAWN_BAND: f32 = 200.0;
