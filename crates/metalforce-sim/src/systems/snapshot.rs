//! Snapshot system: queries the ECS world and builds a complete GameStateSnapshot.
//!
//! This system is read-only; it never modifies the world.

use hecs::World;

use metalforce_core::components::*;
use metalforce_core::enums::*;
use metalforce_core::events::GameEvent;
use metalforce_core::state::*;
use metalforce_core::types::SimTime;

use metalforce_ai::boss::Boss;
use metalforce_ai::enemy::Enemy;

use crate::player::Player;
use crate::score::ScoreState;
use crate::systems::spawner::stage_title;

/// Engine-side state the snapshot reads besides the world.
pub struct SnapshotSource<'a> {
    pub time: SimTime,
    pub phase: GamePhase,
    pub stage: u32,
    pub final_stage: u32,
    pub stage_length: f32,
    pub camera_x: f32,
    pub score: &'a ScoreState,
    pub player: &'a Player,
    pub boss: Option<&'a Boss>,
}

/// Build a complete GameStateSnapshot from the current world state.
pub fn build_snapshot(
    world: &World,
    source: SnapshotSource<'_>,
    events: Vec<GameEvent>,
) -> GameStateSnapshot {
    let player = source.player;
    let victory = source.phase == GamePhase::Victory;

    GameStateSnapshot {
        time: source.time,
        phase: source.phase,
        stage: source.stage,
        stage_title: stage_title(source.stage).to_string(),
        score: source.score.score,
        enemies_killed: source.score.enemies_killed,
        camera_x: source.camera_x,
        player_x: player.position.x,
        stage_progress: (player.position.x / source.stage_length).clamp(0.0, 1.0),
        game_over: source.phase == GamePhase::GameOver,
        victory,
        paused: source.phase == GamePhase::Paused,
        campaign_complete: victory && source.stage >= source.final_stage,
        player: build_player(player),
        enemies: build_enemies(world),
        boss: source.boss.filter(|boss| boss.is_alive()).map(build_boss),
        bullets: build_bullets(world),
        grenades: build_grenades(world),
        pickups: build_pickups(world),
        explosions: build_explosions(world),
        events,
    }
}

fn build_player(player: &Player) -> PlayerView {
    let weapon = player.weapon();
    PlayerView {
        position: player.position,
        facing_right: player.facing_right,
        health: player.health,
        max_health: player.max_health,
        weapon: weapon.kind(),
        weapon_name: weapon.name().to_string(),
        ammo_display: weapon.ammo_display(),
        bombs: player.bombs(),
        is_invincible: player.is_invincible(),
        jumping: player.is_jumping(),
        anim_frame: player.anim_frame(),
    }
}

/// Enemy views ordered left to right.
fn build_enemies(world: &World) -> Vec<EnemyView> {
    let mut enemies: Vec<EnemyView> = world
        .query::<&Enemy>()
        .iter()
        .map(|(_, enemy)| EnemyView {
            position: enemy.position,
            facing_right: enemy.facing_right,
            kind: enemy.kind,
            anim_frame: enemy.anim_frame(),
            is_dying: enemy.is_dying(),
            has_shield: enemy.has_shield(),
        })
        .collect();

    enemies.sort_by(|a, b| a.position.x.total_cmp(&b.position.x));
    enemies
}

fn build_boss(boss: &Boss) -> BossView {
    BossView {
        position: boss.position,
        facing_right: boss.facing_right,
        phase: boss.phase(),
        health: boss.health,
        max_health: boss.max_health,
        is_vulnerable: boss.is_vulnerable(),
        is_dying: boss.is_dying(),
        visible: boss.visible(),
        anim_frame: boss.anim_frame(),
    }
}

fn build_bullets(world: &World) -> Vec<BulletView> {
    world
        .query::<&Bullet>()
        .iter()
        .filter(|(_, bullet)| bullet.active)
        .map(|(_, bullet)| BulletView {
            position: bullet.position,
            side: bullet.side,
            weapon: bullet.weapon,
            moving_right: bullet.velocity.x > 0.0,
        })
        .collect()
}

fn build_grenades(world: &World) -> Vec<GrenadeView> {
    world
        .query::<&Grenade>()
        .iter()
        .filter(|(_, grenade)| grenade.active)
        .map(|(_, grenade)| GrenadeView {
            position: grenade.position,
        })
        .collect()
}

fn build_pickups(world: &World) -> Vec<PickupView> {
    world
        .query::<&Pickup>()
        .iter()
        .filter(|(_, pickup)| pickup.active)
        .map(|(_, pickup)| PickupView {
            position: pickup.position,
            kind: pickup.kind,
            float_offset: pickup.float_offset,
        })
        .collect()
}

fn build_explosions(world: &World) -> Vec<ExplosionView> {
    world
        .query::<&Explosion>()
        .iter()
        .filter(|(_, explosion)| explosion.active)
        .map(|(_, explosion)| ExplosionView {
            position: explosion.position,
            big: explosion.big,
            frame: explosion.frame,
        })
        .collect()
}
