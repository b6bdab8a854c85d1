//! Actor AI system: advances enemies and the boss, then routes the attacks
//! they produce.
//!
//! Bullets and grenades become world entities; melee strikes are resolved
//! against the player on the spot.

use hecs::World;
use rand_chacha::ChaCha8Rng;

use metalforce_core::components::Attack;
use metalforce_core::events::GameEvent;

use metalforce_ai::boss::Boss;
use metalforce_ai::enemy::Enemy;

use crate::player::Player;
use crate::systems::combat::hurt_player;
use crate::world_setup;

/// Advance every enemy against the player's current position.
pub fn run_enemies(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    player: &mut Player,
    dt: f32,
    events: &mut Vec<GameEvent>,
) {
    // Collect attacks in a buffer to avoid borrow issues with hecs
    let mut attacks: Vec<Attack> = Vec::new();
    let target = player.position;

    for (_entity, enemy) in world.query_mut::<&mut Enemy>() {
        if let Some(attack) = enemy.update(dt, target, rng) {
            attacks.push(attack);
        }
    }

    route_attacks(world, player, attacks, events);
}

/// Advance the boss. Returns true on the tick its death sequence finishes.
pub fn run_boss(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    boss: &mut Boss,
    player: &mut Player,
    dt: f32,
    events: &mut Vec<GameEvent>,
) -> bool {
    let was_defeated = boss.is_defeated();
    let attacks = boss.update(dt, player.position.x, rng);
    route_attacks(world, player, attacks, events);
    !was_defeated && boss.is_defeated()
}

pub fn route_attacks(
    world: &mut World,
    player: &mut Player,
    attacks: Vec<Attack>,
    events: &mut Vec<GameEvent>,
) {
    for attack in attacks {
        match attack {
            Attack::Bullet(bullet) => {
                world_setup::spawn_bullet(world, bullet);
            }
            Attack::Grenade(grenade) => {
                world_setup::spawn_grenade(world, grenade);
            }
            Attack::Melee(melee) => {
                if melee.bounds().overlaps(&player.bounds) {
                    hurt_player(player, melee.damage, events);
                }
            }
        }
    }
}
