//! Projectile integration system.
//!
//! Bullets fly straight and leave the world at its bounds; grenades follow a
//! ballistic arc and burst on landing or when the fuse runs out.

use glam::Vec2;
use hecs::World;
use tracing::debug;

use metalforce_core::components::{Bullet, Grenade};
use metalforce_core::constants::*;
use metalforce_core::events::GameEvent;

use crate::player::Player;
use crate::systems::combat::hurt_player;
use crate::world_setup;

/// Move every active bullet and retire those that left the world.
pub fn run_bullets(world: &mut World, dt: f32) {
    for (_entity, bullet) in world.query_mut::<&mut Bullet>() {
        if bullet.active {
            advance_bullet(bullet, dt);
        }
    }
}

pub fn advance_bullet(bullet: &mut Bullet, dt: f32) {
    bullet.position += bullet.velocity * dt;
    bullet.bounds.set_position(bullet.position);

    let p = bullet.position;
    if p.x < WORLD_MIN_X || p.x > WORLD_MAX_X || p.y < WORLD_MIN_Y || p.y > WORLD_MAX_Y {
        bullet.active = false;
    }
}

/// Move every active grenade. Each burst leaves a small explosion and hurts
/// the player if the blast square reaches them.
pub fn run_grenades(world: &mut World, player: &mut Player, dt: f32, events: &mut Vec<GameEvent>) {
    let mut bursts: Vec<Vec2> = Vec::new();

    for (_entity, grenade) in world.query_mut::<&mut Grenade>() {
        if !grenade.active {
            continue;
        }
        if advance_grenade(grenade, dt) {
            if grenade.blast_bounds().overlaps(&player.bounds) {
                hurt_player(player, GRENADE_DAMAGE, events);
            }
            bursts.push(grenade.position);
        }
    }

    for position in bursts {
        debug!(x = position.x, y = position.y, "grenade burst");
        world_setup::spawn_explosion(world, events, position, false);
    }
}

/// Integrate one grenade. Returns true on the tick it explodes.
pub fn advance_grenade(grenade: &mut Grenade, dt: f32) -> bool {
    if !grenade.active {
        return false;
    }

    grenade.velocity.y -= GRENADE_GRAVITY * dt;
    grenade.position += grenade.velocity * dt;
    grenade.bounds.set_position(grenade.position);
    grenade.age += dt;

    if grenade.position.y <= GROUND_Y || grenade.age > GRENADE_FUSE_SECS {
        grenade.active = false;
        grenade.exploded = true;
        return true;
    }
    false
}
