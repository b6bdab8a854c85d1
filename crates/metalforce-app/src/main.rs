//! Headless METAL FORCE runner.
//!
//! Usage: `metalforce [--config <path>]`. Runs the game loop for the
//! configured time with scripted input and logs a summary.

use std::path::PathBuf;
use std::time::{Duration, Instant};

use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use metalforce_app::autopilot;
use metalforce_app::config::AppConfig;
use metalforce_app::error::AppError;
use metalforce_app::game_loop::tick_duration;
use metalforce_app::state::AppState;

fn main() -> Result<(), AppError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = match config_path() {
        Some(path) => AppConfig::load(&path)?,
        None => AppConfig::default(),
    };

    let state = AppState::new();
    state.start(&config)?;

    let period = tick_duration(config.tick_rate);
    let run_for = Duration::from_secs_f32(config.run_secs);
    let started = Instant::now();
    let mut last_tick = None;

    while started.elapsed() < run_for {
        if let Some(snapshot) = state.snapshot()? {
            // Only react once per simulated tick.
            if last_tick != Some(snapshot.time.tick) {
                last_tick = Some(snapshot.time.tick);
                for command in autopilot::commands_for(&snapshot) {
                    state.send_command(command)?;
                }
            }
            if snapshot.campaign_complete {
                info!("campaign complete");
                break;
            }
        }
        std::thread::sleep(period);
    }

    let last = state.snapshot()?;
    state.shutdown()?;

    match last {
        Some(snapshot) => info!(
            stage = snapshot.stage,
            score = snapshot.score,
            kills = snapshot.enemies_killed,
            health = snapshot.player.health,
            phase = ?snapshot.phase,
            "run finished"
        ),
        None => warn!("no snapshot was produced"),
    }
    Ok(())
}

/// `--config <path>` or a bare path as the first argument.
fn config_path() -> Option<PathBuf> {
    let mut args = std::env::args().skip(1);
    match args.next()?.as_str() {
        "--config" => args.next().map(PathBuf::from),
        path => Some(PathBuf::from(path)),
    }
}
