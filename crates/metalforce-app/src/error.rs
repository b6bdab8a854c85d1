//! Error types for the application shell.

use thiserror::Error;

/// Errors raised while loading configuration or driving the game loop.
#[derive(Debug, Error)]
pub enum AppError {
    /// Config file could not be read.
    #[error("Failed to read config '{path}': {details}")]
    ConfigRead { path: String, details: String },

    /// Config file is not valid JSON for `AppConfig`.
    #[error("Parse error in '{path}': {details}")]
    ConfigParse { path: String, details: String },

    /// A config value is out of range.
    #[error("Invalid config value for {field}: {reason}")]
    InvalidConfig { field: &'static str, reason: String },

    #[error("Simulation already running")]
    AlreadyRunning,

    #[error("Simulation not started")]
    NotStarted,

    /// The game loop thread is gone.
    #[error("Game loop channel disconnected")]
    Disconnected,

    #[error("Failed to spawn game loop thread: {0}")]
    Spawn(#[from] std::io::Error),

    /// Shared state lock was poisoned by a panicking thread.
    #[error("Shared state lock poisoned")]
    Poisoned,
}
