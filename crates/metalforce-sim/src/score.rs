//! Running score state tracked by the engine.
//!
//! Stored on `SimulationEngine`, NOT as ECS entities.

#[derive(Debug, Clone, Default)]
pub struct ScoreState {
    pub score: u32,
    /// Kills in the current stage.
    pub enemies_killed: u32,
}

impl ScoreState {
    pub fn record_kill(&mut self, points: u32) {
        self.score += points;
        self.enemies_killed += 1;
    }

    pub fn add(&mut self, points: u32) {
        self.score += points;
    }
}
