//! Visual-only animation for pickups and explosions.

use hecs::World;

use metalforce_core::components::{Explosion, Pickup};
use metalforce_core::constants::*;

/// Bob pickups in place. Bounds do not move.
pub fn run_pickups(world: &mut World, dt: f32) {
    for (_entity, pickup) in world.query_mut::<&mut Pickup>() {
        pickup.anim_time += dt;
        pickup.float_offset = (pickup.anim_time * PICKUP_FLOAT_RATE).sin() * PICKUP_FLOAT_AMPLITUDE;
    }
}

/// Step explosion frames and retire finished ones.
pub fn run_explosions(world: &mut World, dt: f32) {
    for (_entity, explosion) in world.query_mut::<&mut Explosion>() {
        advance_explosion(explosion, dt);
    }
}

pub fn advance_explosion(explosion: &mut Explosion, dt: f32) {
    explosion.timer += dt;
    explosion.frame = (explosion.timer / EXPLOSION_FRAME_SECS) as u32;
    if explosion.frame >= EXPLOSION_FRAMES {
        explosion.active = false;
    }
}
