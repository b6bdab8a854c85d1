//! Collision resolution system: bullets, bodies and pickups against each
//! other, in a fixed order, once per tick.
//!
//! Also hosts the screen-clearing bomb, which goes through the same damage
//! and scoring paths.

use glam::Vec2;
use hecs::{Entity, World};
use rand::Rng;
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use metalforce_core::components::{Bullet, Pickup};
use metalforce_core::constants::*;
use metalforce_core::enums::EnemyKind;
use metalforce_core::events::GameEvent;
use metalforce_core::types::Bounds;

use metalforce_ai::boss::Boss;
use metalforce_ai::enemy::Enemy;

use crate::player::Player;
use crate::score::ScoreState;
use crate::world_setup;

/// An enemy that entered its death animation this tick.
#[derive(Debug, Clone, Copy)]
struct Kill {
    kind: EnemyKind,
    x: f32,
    points: u32,
}

impl Kill {
    fn of(enemy: &Enemy) -> Self {
        Self {
            kind: enemy.kind,
            x: enemy.position.x,
            points: enemy.score_value(),
        }
    }
}

/// Run the collision pass.
pub fn run(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    player: &mut Player,
    mut boss: Option<&mut Boss>,
    score: &mut ScoreState,
    events: &mut Vec<GameEvent>,
) {
    resolve_player_bullets(world, rng, boss.as_deref_mut(), score, events);
    resolve_enemy_bullets(world, player, events);
    resolve_contact(world, player, boss.as_deref(), events);
    collect_pickups(world, player, score, events);
}

/// Apply damage to the player and report it if it landed.
pub fn hurt_player(player: &mut Player, amount: i32, events: &mut Vec<GameEvent>) {
    if player.take_damage(amount) {
        events.push(GameEvent::PlayerHit {
            damage: amount,
            remaining: player.health,
        });
    }
}

fn hit_boss(boss: &mut Boss, amount: i32, events: &mut Vec<GameEvent>) {
    let before = boss.health;
    boss.take_damage(amount);
    events.push(GameEvent::BossHit {
        damage: before - boss.health,
        remaining: boss.health,
    });
}

/// Player bullets: the first overlapping enemy consumes the bullet; a bullet
/// that reached no enemy can still hit the boss.
fn resolve_player_bullets(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    mut boss: Option<&mut Boss>,
    score: &mut ScoreState,
    events: &mut Vec<GameEvent>,
) {
    let bullets: Vec<(Entity, Bullet)> = world
        .query::<&Bullet>()
        .iter()
        .filter(|(_, bullet)| bullet.active && bullet.is_player_owned())
        .map(|(entity, bullet)| (entity, *bullet))
        .collect();
    let enemies: Vec<Entity> = world
        .query::<&Enemy>()
        .iter()
        .map(|(entity, _)| entity)
        .collect();

    for (bullet_entity, bullet) in bullets {
        let mut consumed = false;

        for &enemy_entity in &enemies {
            let Some(kill) = strike_enemy(world, enemy_entity, &bullet) else {
                continue;
            };
            consumed = true;

            if let Some(kill) = kill {
                score_kill(score, events, kill);
                roll_drop(world, rng, kill.x);
            }
            if bullet.explosion_radius > 0.0 {
                world_setup::spawn_explosion(world, events, bullet.position, false);
                splash(world, &enemies, enemy_entity, &bullet, score, events);
            }
            break;
        }

        if !consumed {
            if let Some(boss) = boss.as_deref_mut() {
                if boss.is_active() && bullet.bounds.overlaps(&boss.bounds) {
                    consumed = true;
                    hit_boss(boss, bullet.damage, events);
                    if bullet.explosion_radius > 0.0 {
                        world_setup::spawn_explosion(world, events, bullet.position, false);
                    }
                }
            }
        }

        if consumed {
            if let Ok(mut stored) = world.get::<&mut Bullet>(bullet_entity) {
                stored.active = false;
            }
        }
    }
}

/// Hit one enemy with a bullet. `None` when the bullet misses it; otherwise
/// whether the hit killed it.
fn strike_enemy(world: &World, entity: Entity, bullet: &Bullet) -> Option<Option<Kill>> {
    let mut enemy = world.get::<&mut Enemy>(entity).ok()?;
    if !enemy.is_active() || !bullet.bounds.overlaps(&enemy.bounds) {
        return None;
    }

    let from_behind = hit_from_behind(bullet.position.x, enemy.position.x, enemy.facing_right);
    let killed = enemy.take_damage(bullet.damage, from_behind);
    Some(killed.then(|| Kill::of(&enemy)))
}

/// A hit lands from behind when the bullet is on the side the enemy faces away from.
pub fn hit_from_behind(bullet_x: f32, enemy_x: f32, enemy_facing_right: bool) -> bool {
    (bullet_x > enemy_x) != enemy_facing_right
}

/// Half damage from behind to every other enemy in the blast square.
/// Evaluated once per impact.
fn splash(
    world: &mut World,
    enemies: &[Entity],
    primary: Entity,
    bullet: &Bullet,
    score: &mut ScoreState,
    events: &mut Vec<GameEvent>,
) {
    let area = Bounds::centered_square(bullet.position, bullet.explosion_radius);
    let damage = bullet.damage / 2;

    for &entity in enemies {
        if entity == primary {
            continue;
        }
        let Ok(mut other) = world.get::<&mut Enemy>(entity) else {
            continue;
        };
        if !other.is_active() || !area.overlaps(&other.bounds) {
            continue;
        }
        if other.take_damage(damage, true) {
            score_kill(score, events, Kill::of(&other));
        }
    }
}

fn score_kill(score: &mut ScoreState, events: &mut Vec<GameEvent>, kill: Kill) {
    score.record_kill(kill.points);
    debug!(kind = ?kill.kind, x = kill.x, points = kill.points, "enemy killed");
    events.push(GameEvent::EnemyKilled {
        kind: kill.kind,
        x: kill.x,
        score: kill.points,
    });
}

fn roll_drop(world: &mut World, rng: &mut ChaCha8Rng, x: f32) {
    if rng.gen::<f32>() < PICKUP_DROP_CHANCE {
        let entity = world_setup::spawn_random_pickup(world, rng, x);
        debug!(?entity, x, "enemy dropped a pickup");
    }
}

fn resolve_enemy_bullets(world: &mut World, player: &mut Player, events: &mut Vec<GameEvent>) {
    for (_entity, bullet) in world.query_mut::<&mut Bullet>() {
        if bullet.active && !bullet.is_player_owned() && bullet.bounds.overlaps(&player.bounds) {
            bullet.active = false;
            hurt_player(player, bullet.damage, events);
        }
    }
}

/// Touching a live body hurts the player every tick of overlap.
fn resolve_contact(
    world: &mut World,
    player: &mut Player,
    boss: Option<&Boss>,
    events: &mut Vec<GameEvent>,
) {
    for (_entity, enemy) in world.query_mut::<&Enemy>() {
        if enemy.is_active() && player.bounds.overlaps(&enemy.bounds) {
            hurt_player(player, ENEMY_CONTACT_DAMAGE, events);
        }
    }

    if let Some(boss) = boss {
        if boss.is_active() && player.bounds.overlaps(&boss.bounds) {
            hurt_player(player, BOSS_CONTACT_DAMAGE, events);
        }
    }
}

fn collect_pickups(
    world: &mut World,
    player: &mut Player,
    score: &mut ScoreState,
    events: &mut Vec<GameEvent>,
) {
    for (_entity, pickup) in world.query_mut::<&mut Pickup>() {
        if pickup.active && player.bounds.overlaps(&pickup.bounds) {
            let kind = pickup.kind;
            player.apply_pickup(pickup.collect());
            score.add(PICKUP_SCORE);
            debug!(?kind, "pickup collected");
            events.push(GameEvent::PickupCollected { kind });
        }
    }
}

/// Clear the visible window: every on-screen enemy takes lethal damage from
/// behind, the boss takes a fixed hit, and enemy bullets on screen vanish.
/// Returns the number of enemies killed.
pub fn detonate_bomb(
    world: &mut World,
    boss: Option<&mut Boss>,
    camera_x: f32,
    score: &mut ScoreState,
    events: &mut Vec<GameEvent>,
) -> u32 {
    let left = camera_x;
    let right = camera_x + WORLD_WIDTH;
    let on_screen = |x: f32| x >= left && x <= right;

    let mut kills: Vec<Kill> = Vec::new();
    for (_entity, enemy) in world.query_mut::<&mut Enemy>() {
        if enemy.is_active()
            && on_screen(enemy.position.x)
            && enemy.take_damage(BOMB_ENEMY_DAMAGE, true)
        {
            kills.push(Kill::of(enemy));
        }
    }
    let enemies_hit = kills.len() as u32;
    for kill in kills {
        score_kill(score, events, kill);
    }

    if let Some(boss) = boss {
        if boss.is_active() {
            hit_boss(boss, BOMB_BOSS_DAMAGE, events);
        }
    }

    for (_entity, bullet) in world.query_mut::<&mut Bullet>() {
        if !bullet.is_player_owned() && on_screen(bullet.position.x) {
            bullet.active = false;
        }
    }

    let center = Vec2::new(camera_x + WORLD_WIDTH / 2.0, WORLD_HEIGHT / 2.0);
    world_setup::spawn_explosion(world, events, center, true);
    events.push(GameEvent::BombDetonated { enemies_hit });

    enemies_hit
}
