//! Application state shared between the frontend-facing calls and the game
//! loop thread.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;

use tracing::{info, warn};

use metalforce_core::commands::PlayerCommand;
use metalforce_core::state::GameStateSnapshot;

use crate::config::AppConfig;
use crate::error::AppError;
use crate::game_loop;

/// Commands sent to the game loop thread.
#[derive(Debug)]
pub enum GameLoopCommand {
    /// A player command to forward to the simulation engine.
    PlayerCommand(PlayerCommand),
    /// Shut down the game loop thread gracefully.
    Shutdown,
}

/// Shared application state.
///
/// `AppState` is Send + Sync so a frontend can hold it behind a reference:
/// the sender sits in a `Mutex` and the latest snapshot is shared with the
/// game loop thread through an `Arc`.
pub struct AppState {
    /// `None` until `start` is called.
    pub command_tx: Mutex<Option<mpsc::Sender<GameLoopCommand>>>,
    /// Updated by the game loop thread after each tick.
    pub latest_snapshot: Arc<Mutex<Option<GameStateSnapshot>>>,
    pub running: Mutex<bool>,
    worker: Mutex<Option<JoinHandle<()>>>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            command_tx: Mutex::new(None),
            latest_snapshot: Arc::new(Mutex::new(None)),
            running: Mutex::new(false),
            worker: Mutex::new(None),
        }
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Spawn the game loop thread. Fails if it is already running.
    pub fn start(&self, config: &AppConfig) -> Result<(), AppError> {
        let mut running = self.running.lock().map_err(|_| AppError::Poisoned)?;
        if *running {
            return Err(AppError::AlreadyRunning);
        }

        let (cmd_tx, handle) = game_loop::spawn_game_loop(
            config.sim.clone(),
            config.tick_rate,
            self.latest_snapshot.clone(),
        )?;

        *self.command_tx.lock().map_err(|_| AppError::Poisoned)? = Some(cmd_tx);
        *self.worker.lock().map_err(|_| AppError::Poisoned)? = Some(handle);
        *running = true;
        info!(seed = config.sim.seed, tick_rate = config.tick_rate, "simulation started");
        Ok(())
    }

    /// Forward a player command to the game loop.
    pub fn send_command(&self, command: PlayerCommand) -> Result<(), AppError> {
        let tx = self.command_tx.lock().map_err(|_| AppError::Poisoned)?;
        match tx.as_ref() {
            Some(tx) => tx
                .send(GameLoopCommand::PlayerCommand(command))
                .map_err(|_| AppError::Disconnected),
            None => Err(AppError::NotStarted),
        }
    }

    /// Latest snapshot, for polling.
    pub fn snapshot(&self) -> Result<Option<GameStateSnapshot>, AppError> {
        let lock = self.latest_snapshot.lock().map_err(|_| AppError::Poisoned)?;
        Ok(lock.clone())
    }

    /// Stop the game loop and wait for its thread to exit.
    pub fn shutdown(&self) -> Result<(), AppError> {
        let mut running = self.running.lock().map_err(|_| AppError::Poisoned)?;
        if !*running {
            return Err(AppError::NotStarted);
        }

        if let Some(tx) = self.command_tx.lock().map_err(|_| AppError::Poisoned)?.take() {
            // A loop that already exited has dropped its receiver.
            let _ = tx.send(GameLoopCommand::Shutdown);
        }
        if let Some(handle) = self.worker.lock().map_err(|_| AppError::Poisoned)?.take() {
            if handle.join().is_err() {
                warn!("game loop thread panicked");
            }
        }
        *running = false;
        info!("simulation stopped");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_state_creation() {
        let state = AppState::new();
        assert!(state.command_tx.lock().unwrap().is_none());
        assert!(state.latest_snapshot.lock().unwrap().is_none());
        assert!(!*state.running.lock().unwrap());
    }

    #[test]
    fn test_commands_need_a_running_loop() {
        let state = AppState::new();
        assert!(matches!(
            state.send_command(PlayerCommand::Fire),
            Err(AppError::NotStarted)
        ));
        assert!(matches!(state.shutdown(), Err(AppError::NotStarted)));
    }

    #[test]
    fn test_start_send_shutdown() {
        let state = AppState::new();
        let config = AppConfig {
            tick_rate: 1000,
            ..Default::default()
        };
        state.start(&config).unwrap();
        assert!(matches!(state.start(&config), Err(AppError::AlreadyRunning)));

        state.send_command(PlayerCommand::MoveRight).unwrap();

        let mut snapshot = None;
        for _ in 0..500 {
            snapshot = state.snapshot().unwrap();
            if snapshot.is_some() {
                break;
            }
            std::thread::sleep(std::time::Duration::from_millis(2));
        }
        let snapshot = snapshot.expect("game loop should publish a snapshot");
        assert_eq!(snapshot.stage, 1);

        state.shutdown().unwrap();
        assert!(!*state.running.lock().unwrap());
        assert!(matches!(
            state.send_command(PlayerCommand::Fire),
            Err(AppError::NotStarted)
        ));
    }
}
