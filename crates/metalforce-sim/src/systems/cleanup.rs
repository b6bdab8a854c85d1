//! Cleanup system: removes entities that are finished or inactive.
//!
//! Uses a pre-allocated buffer to avoid per-tick allocation.

use hecs::{Component, Entity, World};

use metalforce_core::components::{Bullet, Explosion, Grenade, Pickup};

use metalforce_ai::enemy::Enemy;

/// Remove enemies whose death animation has finished.
pub fn dead_enemies(world: &mut World, despawn_buffer: &mut Vec<Entity>) {
    despawn_where::<Enemy>(world, despawn_buffer, |enemy| !enemy.is_alive());
}

pub fn spent_bullets(world: &mut World, despawn_buffer: &mut Vec<Entity>) {
    despawn_where::<Bullet>(world, despawn_buffer, |bullet| !bullet.active);
}

pub fn spent_grenades(world: &mut World, despawn_buffer: &mut Vec<Entity>) {
    despawn_where::<Grenade>(world, despawn_buffer, |grenade| !grenade.active);
}

pub fn finished_explosions(world: &mut World, despawn_buffer: &mut Vec<Entity>) {
    despawn_where::<Explosion>(world, despawn_buffer, |explosion| !explosion.active);
}

pub fn collected_pickups(world: &mut World, despawn_buffer: &mut Vec<Entity>) {
    despawn_where::<Pickup>(world, despawn_buffer, |pickup| !pickup.active);
}

fn despawn_where<T: Component>(
    world: &mut World,
    despawn_buffer: &mut Vec<Entity>,
    retire: impl Fn(&T) -> bool,
) {
    despawn_buffer.clear();

    for (entity, item) in world.query_mut::<&T>() {
        if retire(item) {
            despawn_buffer.push(entity);
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}
