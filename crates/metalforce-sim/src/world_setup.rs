//! Entity spawn factories for populating the simulation world.
//!
//! Enemies, projectiles, pickups and explosions are hecs entities with a
//! single component each. The player and the boss live on the engine.

use glam::Vec2;
use hecs::{Entity, World};
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use metalforce_core::components::*;
use metalforce_core::constants::*;
use metalforce_core::enums::*;
use metalforce_core::events::GameEvent;

use metalforce_ai::enemy::Enemy;

pub fn spawn_enemy(world: &mut World, enemy: Enemy) -> Entity {
    world.spawn((enemy,))
}

/// Spawn `count` enemies in a row just past the right edge of the viewport.
/// Variants are rolled from the stage's table.
pub fn spawn_enemy_wave(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    stage: u32,
    camera_x: f32,
    count: u32,
) {
    for i in 0..count {
        let x = camera_x + WORLD_WIDTH + ENEMY_SPAWN_MARGIN + i as f32 * ENEMY_SPAWN_SPACING;
        let kind = enemy_kind_for_roll(stage, rng.gen());
        spawn_enemy(world, Enemy::spawn(kind, x, rng));
    }
}

/// Map a uniform roll in `[0, 1)` onto the stage's enemy mix.
pub fn enemy_kind_for_roll(stage: u32, roll: f32) -> EnemyKind {
    match stage {
        0 | 1 => match roll {
            r if r < 0.7 => EnemyKind::Soldier,
            r if r < 0.9 => EnemyKind::Runner,
            _ => EnemyKind::Grenadier,
        },
        2 => match roll {
            r if r < 0.4 => EnemyKind::Soldier,
            r if r < 0.6 => EnemyKind::Heavy,
            r if r < 0.8 => EnemyKind::Grenadier,
            _ => EnemyKind::Shield,
        },
        _ => match roll {
            r if r < 0.25 => EnemyKind::Soldier,
            r if r < 0.45 => EnemyKind::Heavy,
            r if r < 0.65 => EnemyKind::Grenadier,
            r if r < 0.85 => EnemyKind::Shield,
            _ => EnemyKind::Runner,
        },
    }
}

pub fn spawn_bullet(world: &mut World, bullet: Bullet) -> Entity {
    world.spawn((bullet,))
}

pub fn spawn_grenade(world: &mut World, grenade: Grenade) -> Entity {
    world.spawn((grenade,))
}

/// Spawn a pickup resting just above the ground at `x`.
pub fn spawn_pickup(world: &mut World, x: f32, kind: PickupKind) -> Entity {
    world.spawn((Pickup::new(Vec2::new(x, GROUND_Y + PICKUP_HOVER), kind),))
}

/// Spawn a pickup with a kind rolled from the drop table.
pub fn spawn_random_pickup(world: &mut World, rng: &mut ChaCha8Rng, x: f32) -> Entity {
    let kind = PickupKind::from_roll(rng.gen());
    spawn_pickup(world, x, kind)
}

/// Spawn an explosion effect and report it to the audio/UI layer.
pub fn spawn_explosion(
    world: &mut World,
    events: &mut Vec<GameEvent>,
    position: Vec2,
    big: bool,
) -> Entity {
    events.push(GameEvent::Explosion {
        x: position.x,
        y: position.y,
        big,
    });
    world.spawn((Explosion::new(position, big),))
}
