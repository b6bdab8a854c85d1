//! Game loop thread: runs the simulation engine at a fixed wall-clock rate
//! and publishes snapshots.
//!
//! The engine is created inside this thread so it never crosses threads.
//! Commands arrive via `mpsc` channel; the latest snapshot is stored in
//! shared state for polling.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use tracing::{debug, info};

use metalforce_core::events::GameEvent;
use metalforce_core::state::GameStateSnapshot;
use metalforce_sim::engine::{SimConfig, SimulationEngine};

use crate::error::AppError;
use crate::state::GameLoopCommand;

/// Wall-clock duration of one tick at `tick_rate` Hz.
pub fn tick_duration(tick_rate: u32) -> Duration {
    Duration::from_nanos(1_000_000_000 / u64::from(tick_rate.max(1)))
}

/// Spawns the game loop in a new thread.
///
/// Returns the command sender and the thread handle.
pub fn spawn_game_loop(
    config: SimConfig,
    tick_rate: u32,
    latest_snapshot: Arc<Mutex<Option<GameStateSnapshot>>>,
) -> Result<(mpsc::Sender<GameLoopCommand>, JoinHandle<()>), AppError> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<GameLoopCommand>();

    let handle = std::thread::Builder::new()
        .name("metalforce-game-loop".into())
        .spawn(move || {
            run_game_loop(config, tick_rate, cmd_rx, &latest_snapshot);
        })?;

    Ok((cmd_tx, handle))
}

/// The game loop. Runs until Shutdown command or channel disconnect.
fn run_game_loop(
    config: SimConfig,
    tick_rate: u32,
    cmd_rx: mpsc::Receiver<GameLoopCommand>,
    latest_snapshot: &Mutex<Option<GameStateSnapshot>>,
) {
    let mut engine = SimulationEngine::new(config);
    let period = tick_duration(tick_rate);
    let mut next_tick_time = Instant::now();

    loop {
        // 1. Drain all pending commands
        loop {
            match cmd_rx.try_recv() {
                Ok(GameLoopCommand::PlayerCommand(cmd)) => {
                    engine.queue_command(cmd);
                }
                Ok(GameLoopCommand::Shutdown) => {
                    debug!(tick = engine.time().tick, "game loop shutting down");
                    return;
                }
                Err(mpsc::TryRecvError::Empty) => break,
                Err(mpsc::TryRecvError::Disconnected) => return,
            }
        }

        // 2. Advance one fixed step (engine handles pause semantics internally)
        let snapshot = engine.tick();
        log_milestones(&snapshot);

        // 3. Store latest snapshot for polling
        if let Ok(mut lock) = latest_snapshot.lock() {
            *lock = Some(snapshot);
        }

        // 4. Sleep until next tick
        next_tick_time += period;
        let now = Instant::now();
        if next_tick_time > now {
            std::thread::sleep(next_tick_time - now);
        } else if now - next_tick_time > period * 2 {
            // Too far behind; reset to avoid catch-up spiral
            next_tick_time = now;
        }
    }
}

fn log_milestones(snapshot: &GameStateSnapshot) {
    for event in &snapshot.events {
        match event {
            GameEvent::BossSpawned { x } => info!(x, stage = snapshot.stage, "boss incoming"),
            GameEvent::BossDefeated { bonus } => {
                info!(bonus, score = snapshot.score, "stage cleared")
            }
            GameEvent::GameOver { score } => info!(score, stage = snapshot.stage, "player down"),
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use metalforce_core::commands::PlayerCommand;
    use metalforce_core::enums::GamePhase;

    /// Poll the shared snapshot until `done` holds or a second passes.
    fn wait_for(
        latest: &Mutex<Option<GameStateSnapshot>>,
        done: impl Fn(&GameStateSnapshot) -> bool,
    ) -> bool {
        for _ in 0..500 {
            if latest.lock().unwrap().as_ref().is_some_and(&done) {
                return true;
            }
            std::thread::sleep(Duration::from_millis(2));
        }
        false
    }

    #[test]
    fn test_loop_applies_commands_from_channel() {
        let latest = Arc::new(Mutex::new(None));
        let (tx, handle) = spawn_game_loop(SimConfig::default(), 1000, latest.clone()).unwrap();

        tx.send(GameLoopCommand::PlayerCommand(PlayerCommand::UseBomb))
            .unwrap();
        assert!(wait_for(&latest, |s| s.player.bombs == 2));

        tx.send(GameLoopCommand::PlayerCommand(PlayerCommand::TogglePause))
            .unwrap();
        assert!(wait_for(&latest, |s| s.paused));

        tx.send(GameLoopCommand::Shutdown).unwrap();
        handle.join().unwrap();
    }

    #[test]
    fn test_snapshot_serializes() {
        let mut engine = SimulationEngine::new(SimConfig::default());
        for _ in 0..50 {
            engine.queue_command(PlayerCommand::Fire);
            engine.tick();
        }

        let snapshot = engine.tick();
        let json = serde_json::to_string(&snapshot).unwrap();
        assert!(json.contains("\"stage_title\":\"JUNGLE ASSAULT\""));
    }

    #[test]
    fn test_pause_resume_via_commands() {
        let mut engine = SimulationEngine::new(SimConfig::default());
        let snap = engine.tick();
        assert_eq!(snap.phase, GamePhase::Active);

        engine.queue_command(PlayerCommand::TogglePause);
        let snap = engine.tick();
        assert_eq!(snap.phase, GamePhase::Paused);
        let paused_tick = snap.time.tick;

        // Tick while paused: time should not advance
        let snap = engine.tick();
        assert_eq!(snap.time.tick, paused_tick);

        engine.queue_command(PlayerCommand::TogglePause);
        let snap = engine.tick();
        assert_eq!(snap.phase, GamePhase::Active);
        assert!(snap.time.tick > paused_tick);
    }

    #[test]
    fn test_loop_stops_on_shutdown() {
        let latest = Arc::new(Mutex::new(None));
        let (tx, handle) = spawn_game_loop(SimConfig::default(), 1000, latest.clone()).unwrap();
        tx.send(GameLoopCommand::Shutdown).unwrap();
        handle.join().unwrap();
    }

    #[test]
    fn test_loop_stops_when_sender_dropped() {
        let latest = Arc::new(Mutex::new(None));
        let (tx, handle) = spawn_game_loop(SimConfig::default(), 1000, latest).unwrap();
        drop(tx);
        handle.join().unwrap();
    }

    #[test]
    fn test_tick_duration() {
        // 60Hz = 16.666ms per tick
        assert_eq!(tick_duration(60).as_nanos(), 1_000_000_000u128 / 60);
        assert_eq!(tick_duration(0), tick_duration(1));
    }
}
