//! Game state snapshot: the complete visible state handed to the renderer each tick.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::events::GameEvent;
use crate::types::SimTime;

/// Complete game state produced after each tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameStateSnapshot {
    pub time: SimTime,
    pub phase: GamePhase,
    pub stage: u32,
    pub stage_title: String,
    pub score: u32,
    pub enemies_killed: u32,
    /// Left edge of the visible window.
    pub camera_x: f32,
    pub player_x: f32,
    /// Progress toward the boss trigger, 0.0 - 1.0.
    pub stage_progress: f32,
    pub game_over: bool,
    pub victory: bool,
    pub paused: bool,
    /// Final stage cleared; no further stage to advance to.
    pub campaign_complete: bool,
    pub player: PlayerView,
    pub enemies: Vec<EnemyView>,
    pub boss: Option<BossView>,
    pub bullets: Vec<BulletView>,
    pub grenades: Vec<GrenadeView>,
    pub pickups: Vec<PickupView>,
    pub explosions: Vec<ExplosionView>,
    pub events: Vec<GameEvent>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlayerView {
    pub position: Vec2,
    pub facing_right: bool,
    pub health: i32,
    pub max_health: i32,
    pub weapon: WeaponType,
    pub weapon_name: String,
    pub ammo_display: String,
    pub bombs: u32,
    pub is_invincible: bool,
    pub jumping: bool,
    pub anim_frame: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnemyView {
    pub position: Vec2,
    pub facing_right: bool,
    pub kind: EnemyKind,
    pub anim_frame: u32,
    pub is_dying: bool,
    pub has_shield: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BossView {
    pub position: Vec2,
    pub facing_right: bool,
    pub phase: BossPhase,
    pub health: i32,
    pub max_health: i32,
    pub is_vulnerable: bool,
    pub is_dying: bool,
    /// False during the dark half of the death flash.
    pub visible: bool,
    pub anim_frame: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BulletView {
    pub position: Vec2,
    pub side: Side,
    pub weapon: Option<WeaponType>,
    pub moving_right: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GrenadeView {
    pub position: Vec2,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PickupView {
    pub position: Vec2,
    pub kind: PickupKind,
    pub float_offset: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExplosionView {
    pub position: Vec2,
    pub big: bool,
    pub frame: u32,
}
