//! Spawning system: stage setup, timed enemy reinforcements, pickup drops
//! and the boss trigger.

use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info};

use metalforce_core::constants::*;
use metalforce_core::events::GameEvent;

use metalforce_ai::boss::Boss;
use metalforce_ai::enemy::Enemy;

use crate::world_setup;

/// Countdown state for the periodic spawns.
#[derive(Debug, Clone, Default)]
pub struct SpawnTimers {
    pub enemy_secs: f32,
    pub pickup_secs: f32,
}

pub fn stage_title(stage: u32) -> &'static str {
    match stage {
        1 => "JUNGLE ASSAULT",
        2 => "ENEMY BASE",
        3 => "FINAL SHOWDOWN",
        _ => "BONUS STAGE",
    }
}

/// Enemies placed when a stage begins.
pub fn opening_wave_size(stage: u32) -> u32 {
    2 + stage
}

/// Reinforcements stop once this many enemies are on the field.
pub fn enemy_cap(stage: u32) -> usize {
    5 + stage as usize
}

pub fn reinforcement_size(stage: u32) -> u32 {
    1 + stage / 2
}

/// Empty the world and place the opening wave.
pub fn start_stage(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    timers: &mut SpawnTimers,
    stage: u32,
    camera_x: f32,
    events: &mut Vec<GameEvent>,
) {
    world.clear();
    *timers = SpawnTimers::default();

    let count = opening_wave_size(stage);
    world_setup::spawn_enemy_wave(world, rng, stage, camera_x, count);

    info!(stage, title = stage_title(stage), enemies = count, "stage started");
    events.push(GameEvent::StageStarted { stage });
}

/// Advance the spawn timers. Enemy reinforcements only arrive while the
/// field is below the stage cap and the boss has not appeared; the enemy
/// timer keeps running until a wave actually spawns.
pub fn run(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    timers: &mut SpawnTimers,
    stage: u32,
    camera_x: f32,
    boss_spawned: bool,
    dt: f32,
) {
    timers.enemy_secs += dt;
    if timers.enemy_secs >= ENEMY_SPAWN_INTERVAL && !boss_spawned {
        let on_field = world.query::<&Enemy>().iter().count();
        if on_field < enemy_cap(stage) {
            timers.enemy_secs = 0.0;
            let count = reinforcement_size(stage);
            world_setup::spawn_enemy_wave(world, rng, stage, camera_x, count);
            debug!(count, on_field, "reinforcements spawned");
        }
    }

    timers.pickup_secs += dt;
    if timers.pickup_secs >= PICKUP_SPAWN_INTERVAL {
        timers.pickup_secs = 0.0;
        let x = camera_x + WORLD_WIDTH + rng.gen::<f32>() * PICKUP_SPAWN_BAND;
        world_setup::spawn_random_pickup(world, rng, x);
    }
}

/// The boss appears once, when the player reaches the end of the stage.
pub fn boss_due(player_x: f32, stage_length: f32, boss_spawned: bool) -> bool {
    !boss_spawned && player_x >= stage_length
}

pub fn spawn_boss(camera_x: f32, events: &mut Vec<GameEvent>) -> Boss {
    let x = camera_x + WORLD_WIDTH + ENEMY_SPAWN_MARGIN;
    info!(x, "boss spawned");
    events.push(GameEvent::BossSpawned { x });
    Boss::new(x)
}
