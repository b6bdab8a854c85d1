//! Application configuration, loaded from an optional JSON file.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use metalforce_core::constants::TICK_RATE;
use metalforce_sim::engine::SimConfig;

use crate::error::AppError;

/// Top-level settings for a headless run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub sim: SimConfig,
    /// Wall-clock ticks per second. The simulation step stays fixed.
    pub tick_rate: u32,
    /// Seconds to run before shutting down.
    pub run_secs: f32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            sim: SimConfig::default(),
            tick_rate: TICK_RATE,
            run_secs: 10.0,
        }
    }
}

impl AppConfig {
    /// Parse and validate a config file.
    pub fn load(path: &Path) -> Result<Self, AppError> {
        let path_str = path.display().to_string();
        let contents = fs::read_to_string(path).map_err(|e| AppError::ConfigRead {
            path: path_str.clone(),
            details: e.to_string(),
        })?;
        let config = Self::parse(&contents, &path_str)?;
        info!(path = %path_str, seed = config.sim.seed, "loaded config");
        Ok(config)
    }

    /// Parse and validate JSON text. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, AppError> {
        Self::parse(json, "<inline>")
    }

    fn parse(json: &str, path: &str) -> Result<Self, AppError> {
        let config: Self = serde_json::from_str(json).map_err(|e| AppError::ConfigParse {
            path: path.to_string(),
            details: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), AppError> {
        if self.tick_rate == 0 {
            return Err(AppError::InvalidConfig {
                field: "tick_rate",
                reason: "must be at least 1".into(),
            });
        }
        if self.sim.stage_length.is_nan() || self.sim.stage_length <= 0.0 {
            return Err(AppError::InvalidConfig {
                field: "sim.stage_length",
                reason: format!("must be positive, got {}", self.sim.stage_length),
            });
        }
        if self.sim.final_stage == 0 {
            return Err(AppError::InvalidConfig {
                field: "sim.final_stage",
                reason: "must be at least 1".into(),
            });
        }
        if self.run_secs.is_nan() || self.run_secs < 0.0 {
            return Err(AppError::InvalidConfig {
                field: "run_secs",
                reason: format!("must not be negative, got {}", self.run_secs),
            });
        }
        Ok(())
    }
}
