//! Simulation engine, the core of the game.
//!
//! `SimulationEngine` owns the hecs ECS world, the player, the boss slot and
//! the seeded RNG. It applies player commands, runs all systems in a fixed
//! order, and produces `GameStateSnapshot`s. Completely headless, enabling
//! deterministic testing.

use std::collections::VecDeque;

use hecs::{Entity, World};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use metalforce_core::commands::PlayerCommand;
use metalforce_core::constants::*;
use metalforce_core::enums::GamePhase;
use metalforce_core::events::GameEvent;
use metalforce_core::state::GameStateSnapshot;
use metalforce_core::types::SimTime;

use metalforce_ai::boss::Boss;

use crate::player::Player;
use crate::score::ScoreState;
use crate::systems;
use crate::systems::snapshot::SnapshotSource;
use crate::systems::spawner::SpawnTimers;
use crate::world_setup;

/// Configuration for starting a new simulation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same simulation.
    pub seed: u64,
    /// Player X at which the boss appears.
    pub stage_length: f32,
    /// Last stage of the campaign.
    pub final_stage: u32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            stage_length: DEFAULT_STAGE_LENGTH,
            final_stage: DEFAULT_FINAL_STAGE,
        }
    }
}

/// The simulation engine. Owns the ECS world and all sim state.
pub struct SimulationEngine {
    world: World,
    time: SimTime,
    phase: GamePhase,
    config: SimConfig,
    rng: ChaCha8Rng,
    command_queue: VecDeque<PlayerCommand>,
    despawn_buffer: Vec<Entity>,
    events: Vec<GameEvent>,

    player: Player,
    boss: Option<Boss>,
    boss_spawned: bool,
    stage: u32,
    camera_x: f32,
    score: ScoreState,
    spawn_timers: SpawnTimers,
}

impl SimulationEngine {
    /// Create a new simulation engine with the given config and start stage 1.
    pub fn new(config: SimConfig) -> Self {
        let rng = ChaCha8Rng::seed_from_u64(config.seed);
        let mut engine = Self {
            world: World::new(),
            time: SimTime::default(),
            phase: GamePhase::default(),
            config,
            rng,
            command_queue: VecDeque::new(),
            despawn_buffer: Vec::new(),
            events: Vec::new(),
            player: Player::new(),
            boss: None,
            boss_spawned: false,
            stage: 1,
            camera_x: 0.0,
            score: ScoreState::default(),
            spawn_timers: SpawnTimers::default(),
        };
        engine.start_stage();
        engine
    }

    /// Queue a player command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance one nominal tick and return the resulting snapshot.
    pub fn tick(&mut self) -> GameStateSnapshot {
        self.advance(DT)
    }

    /// Advance by `dt` seconds and return the resulting snapshot.
    ///
    /// Outside the active phase only commands are processed; no timer moves.
    pub fn advance(&mut self, dt: f32) -> GameStateSnapshot {
        self.process_commands();

        if self.phase == GamePhase::Active {
            self.run_systems(dt);
            self.time.advance(dt);
        }

        self.snapshot()
    }

    /// Get the current game phase.
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn boss(&self) -> Option<&Boss> {
        self.boss.as_ref()
    }

    pub fn stage(&self) -> u32 {
        self.stage
    }

    pub fn camera_x(&self) -> f32 {
        self.camera_x
    }

    pub fn score(&self) -> &ScoreState {
        &self.score
    }

    /// Remove every enemy (for tests needing an empty field).
    #[cfg(test)]
    pub fn clear_enemies(&mut self) {
        let enemies: Vec<Entity> = self
            .world
            .query::<&metalforce_ai::enemy::Enemy>()
            .iter()
            .map(|(entity, _)| entity)
            .collect();
        for entity in enemies {
            let _ = self.world.despawn(entity);
        }
    }

    /// Spawn an enemy with a zeroed attack clock (for testing).
    #[cfg(test)]
    pub fn spawn_test_enemy(&mut self, kind: metalforce_core::enums::EnemyKind, x: f32) -> Entity {
        world_setup::spawn_enemy(&mut self.world, metalforce_ai::enemy::Enemy::new(kind, x))
    }

    #[cfg(test)]
    pub fn spawn_test_pickup(&mut self, x: f32, kind: metalforce_core::enums::PickupKind) -> Entity {
        world_setup::spawn_pickup(&mut self.world, x, kind)
    }

    #[cfg(test)]
    pub fn spawn_test_bullet(&mut self, bullet: metalforce_core::components::Bullet) -> Entity {
        world_setup::spawn_bullet(&mut self.world, bullet)
    }

    #[cfg(test)]
    pub fn spawn_test_grenade(&mut self, grenade: metalforce_core::components::Grenade) -> Entity {
        world_setup::spawn_grenade(&mut self.world, grenade)
    }

    /// Place the boss directly (for testing).
    #[cfg(test)]
    pub fn spawn_test_boss(&mut self, x: f32) {
        self.boss = Some(Boss::new(x));
        self.boss_spawned = true;
    }

    #[cfg(test)]
    pub fn player_mut(&mut self) -> &mut Player {
        &mut self.player
    }

    #[cfg(test)]
    pub fn boss_mut(&mut self) -> Option<&mut Boss> {
        self.boss.as_mut()
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single player command.
    fn handle_command(&mut self, command: PlayerCommand) {
        let active = self.phase == GamePhase::Active;
        match command {
            PlayerCommand::MoveLeft if active => self.player.move_left(),
            PlayerCommand::MoveRight if active => self.player.move_right(),
            PlayerCommand::Jump if active => self.player.jump(),
            PlayerCommand::Fire if active => self.fire(),
            PlayerCommand::UseBomb if active => self.use_bomb(),
            PlayerCommand::MoveLeft
            | PlayerCommand::MoveRight
            | PlayerCommand::Jump
            | PlayerCommand::Fire
            | PlayerCommand::UseBomb => {
                debug!(?command, phase = ?self.phase, "actor command ignored");
            }
            PlayerCommand::TogglePause => match self.phase {
                GamePhase::Active => self.phase = GamePhase::Paused,
                GamePhase::Paused => self.phase = GamePhase::Active,
                phase => warn!(?phase, "pause toggle ignored"),
            },
            PlayerCommand::Restart => self.restart(),
            PlayerCommand::NextStage => {
                if self.phase == GamePhase::Victory && self.stage < self.config.final_stage {
                    self.next_stage();
                } else {
                    warn!(phase = ?self.phase, stage = self.stage, "next stage ignored");
                }
            }
        }
    }

    fn fire(&mut self) {
        let weapon = self.player.weapon().kind();
        let bullets = self.player.shoot();
        if bullets.is_empty() {
            return;
        }
        for bullet in bullets {
            world_setup::spawn_bullet(&mut self.world, bullet);
        }
        self.events.push(GameEvent::WeaponFired { weapon });
    }

    fn use_bomb(&mut self) {
        if !self.player.use_bomb() {
            debug!("no bombs left");
            return;
        }
        let enemies_hit = systems::combat::detonate_bomb(
            &mut self.world,
            self.boss.as_mut(),
            self.camera_x,
            &mut self.score,
            &mut self.events,
        );
        info!(enemies_hit, bombs_left = self.player.bombs(), "bomb detonated");
    }

    /// Start over from stage 1 with a fresh player and score.
    fn restart(&mut self) {
        info!(from_stage = self.stage, score = self.score.score, "restarting");
        self.player.reset();
        self.score = ScoreState::default();
        self.stage = 1;
        self.time = SimTime::default();
        self.start_stage();
    }

    /// Advance to the next stage, keeping score, health, weapon and bombs.
    fn next_stage(&mut self) {
        self.stage += 1;
        self.player.reposition();
        self.start_stage();
    }

    fn start_stage(&mut self) {
        self.phase = GamePhase::Active;
        self.boss = None;
        self.boss_spawned = false;
        self.camera_x = 0.0;
        self.score.enemies_killed = 0;
        systems::spawner::start_stage(
            &mut self.world,
            &mut self.rng,
            &mut self.spawn_timers,
            self.stage,
            self.camera_x,
            &mut self.events,
        );
    }

    /// Run all systems in order.
    fn run_systems(&mut self, dt: f32) {
        // 1. Player, kept inside the visible window
        self.player.update(dt);
        self.player
            .clamp_x(self.camera_x, self.camera_x + WORLD_WIDTH - PLAYER_WIDTH);

        // 2. Enemies (attacks routed, finished deaths removed)
        systems::actors::run_enemies(
            &mut self.world,
            &mut self.rng,
            &mut self.player,
            dt,
            &mut self.events,
        );
        systems::cleanup::dead_enemies(&mut self.world, &mut self.despawn_buffer);

        // 3. Boss
        if let Some(boss) = self.boss.as_mut() {
            let defeated = systems::actors::run_boss(
                &mut self.world,
                &mut self.rng,
                boss,
                &mut self.player,
                dt,
                &mut self.events,
            );
            if defeated {
                self.on_boss_defeated();
            }
        }

        // 4. Bullets
        systems::movement::run_bullets(&mut self.world, dt);
        systems::cleanup::spent_bullets(&mut self.world, &mut self.despawn_buffer);

        // 5. Grenades
        systems::movement::run_grenades(&mut self.world, &mut self.player, dt, &mut self.events);
        systems::cleanup::spent_grenades(&mut self.world, &mut self.despawn_buffer);

        // 6. Pickups and explosions
        systems::effects::run_pickups(&mut self.world, dt);
        systems::effects::run_explosions(&mut self.world, dt);
        systems::cleanup::finished_explosions(&mut self.world, &mut self.despawn_buffer);

        // 7. Collisions
        systems::combat::run(
            &mut self.world,
            &mut self.rng,
            &mut self.player,
            self.boss.as_mut(),
            &mut self.score,
            &mut self.events,
        );
        systems::cleanup::collected_pickups(&mut self.world, &mut self.despawn_buffer);

        // 8. Spawning
        systems::spawner::run(
            &mut self.world,
            &mut self.rng,
            &mut self.spawn_timers,
            self.stage,
            self.camera_x,
            self.boss_spawned,
            dt,
        );
        if systems::spawner::boss_due(
            self.player.position.x,
            self.config.stage_length,
            self.boss_spawned,
        ) {
            self.boss = Some(systems::spawner::spawn_boss(self.camera_x, &mut self.events));
            self.boss_spawned = true;
        }

        // 9. Game over overrides victory
        if !self.player.is_alive() {
            self.phase = GamePhase::GameOver;
            info!(score = self.score.score, stage = self.stage, "game over");
            self.events.push(GameEvent::GameOver {
                score: self.score.score,
            });
        }

        // 10. Camera
        self.follow_player();
    }

    fn on_boss_defeated(&mut self) {
        self.boss = None;
        self.score.add(BOSS_DEFEAT_BONUS);
        self.phase = GamePhase::Victory;
        info!(stage = self.stage, score = self.score.score, "boss defeated");
        self.events.push(GameEvent::BossDefeated {
            bonus: BOSS_DEFEAT_BONUS,
        });
    }

    /// Trail the player; a live boss locks the camera short of its position.
    fn follow_player(&mut self) {
        let mut camera_x =
            (self.player.position.x - WORLD_WIDTH * CAMERA_LEAD_FRACTION).max(0.0);
        if let Some(boss) = self.boss.as_ref().filter(|boss| boss.is_alive()) {
            camera_x = camera_x.min(boss.position.x - WORLD_WIDTH / 2.0 - CAMERA_BOSS_MARGIN);
        }
        self.camera_x = camera_x;
    }

    fn snapshot(&mut self) -> GameStateSnapshot {
        let events = std::mem::take(&mut self.events);
        systems::snapshot::build_snapshot(
            &self.world,
            SnapshotSource {
                time: self.time,
                phase: self.phase,
                stage: self.stage,
                final_stage: self.config.final_stage,
                stage_length: self.config.stage_length,
                camera_x: self.camera_x,
                score: &self.score,
                player: &self.player,
                boss: self.boss.as_ref(),
            },
            events,
        )
    }
}
