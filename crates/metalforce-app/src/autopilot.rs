//! Scripted input for headless runs: push right, keep firing, and move on
//! whenever a stage is cleared.

use metalforce_core::commands::PlayerCommand;
use metalforce_core::state::GameStateSnapshot;

/// Commands to send for the given snapshot.
pub fn commands_for(snapshot: &GameStateSnapshot) -> Vec<PlayerCommand> {
    if snapshot.victory {
        return if snapshot.campaign_complete {
            Vec::new()
        } else {
            vec![PlayerCommand::NextStage]
        };
    }
    if snapshot.game_over || snapshot.paused {
        return Vec::new();
    }

    let mut commands = vec![PlayerCommand::MoveRight, PlayerCommand::Fire];
    if snapshot.time.tick % 45 == 0 {
        commands.push(PlayerCommand::Jump);
    }
    let crowded = snapshot.enemies.iter().filter(|e| !e.is_dying).count() >= 5;
    let hurt = snapshot.player.health * 4 <= snapshot.player.max_health;
    if snapshot.player.bombs > 0 && (crowded || hurt) {
        commands.push(PlayerCommand::UseBomb);
    }
    commands
}

#[cfg(test)]
mod tests {
    use super::*;
    use metalforce_core::enums::GamePhase;
    use metalforce_sim::engine::{SimConfig, SimulationEngine};

    #[test]
    fn test_pushes_forward_while_active() {
        let mut engine = SimulationEngine::new(SimConfig::default());
        let snapshot = engine.tick();
        let commands = commands_for(&snapshot);
        assert!(commands.contains(&PlayerCommand::MoveRight));
        assert!(commands.contains(&PlayerCommand::Fire));
        assert!(!commands.contains(&PlayerCommand::UseBomb));
    }

    #[test]
    fn test_idle_when_over() {
        let snapshot = GameStateSnapshot {
            phase: GamePhase::GameOver,
            game_over: true,
            ..Default::default()
        };
        assert!(commands_for(&snapshot).is_empty());
    }

    #[test]
    fn test_advances_after_victory() {
        let mut snapshot = GameStateSnapshot {
            phase: GamePhase::Victory,
            victory: true,
            ..Default::default()
        };
        assert_eq!(commands_for(&snapshot), vec![PlayerCommand::NextStage]);

        snapshot.campaign_complete = true;
        assert!(commands_for(&snapshot).is_empty());
    }

    #[test]
    fn test_bombs_when_hurt() {
        let mut snapshot = GameStateSnapshot::default();
        snapshot.player.max_health = 100;
        snapshot.player.health = 20;
        snapshot.player.bombs = 1;
        assert!(commands_for(&snapshot).contains(&PlayerCommand::UseBomb));

        snapshot.player.bombs = 0;
        assert!(!commands_for(&snapshot).contains(&PlayerCommand::UseBomb));
    }

    #[test]
    fn test_drives_engine_deterministically() {
        let run = || {
            let mut engine = SimulationEngine::new(SimConfig::default());
            let mut snapshot = engine.tick();
            for _ in 0..600 {
                engine.queue_commands(commands_for(&snapshot));
                snapshot = engine.tick();
            }
            (snapshot.score, snapshot.player_x, snapshot.player.health)
        };
        assert_eq!(run(), run());
    }
}
