#[cfg(test)]
mod tests {
    use glam::Vec2;

    use crate::commands::PlayerCommand;
    use crate::components::*;
    use crate::constants::*;
    use crate::enums::*;
    use crate::events::GameEvent;
    use crate::state::GameStateSnapshot;
    use crate::types::{Bounds, SimTime};

    #[test]
    fn test_bounds_overlap() {
        let a = Bounds::new(0.0, 0.0, 10.0, 10.0);
        let b = Bounds::new(5.0, 5.0, 10.0, 10.0);
        let c = Bounds::new(20.0, 0.0, 10.0, 10.0);
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
        assert!(!a.overlaps(&c));
    }

    #[test]
    fn test_bounds_touching_edges_do_not_overlap() {
        let a = Bounds::new(0.0, 0.0, 10.0, 10.0);
        let right = Bounds::new(10.0, 0.0, 10.0, 10.0);
        let above = Bounds::new(0.0, 10.0, 10.0, 10.0);
        assert!(!a.overlaps(&right));
        assert!(!a.overlaps(&above));
    }

    #[test]
    fn test_centered_square() {
        let sq = Bounds::centered_square(Vec2::new(100.0, 50.0), 80.0);
        assert_eq!(sq, Bounds::new(60.0, 10.0, 80.0, 80.0));
    }

    #[test]
    fn test_sim_time_advance() {
        let mut time = SimTime::default();
        for _ in 0..TICK_RATE {
            time.advance(DT);
        }
        assert_eq!(time.tick, TICK_RATE as u64);
        assert!((time.elapsed_secs - 1.0).abs() < 1e-4);
    }

    #[test]
    fn test_bullet_fire_direction() {
        let right = Bullet::fire(Vec2::ZERO, true, Side::Enemy, ShotParams::enemy_rifle());
        let left = Bullet::fire(Vec2::ZERO, false, Side::Enemy, ShotParams::enemy_rifle());
        assert!((right.velocity.x - ENEMY_BULLET_SPEED).abs() < 1e-3);
        assert!((left.velocity.x + ENEMY_BULLET_SPEED).abs() < 1e-3);
        assert!(right.velocity.y.abs() < 1e-3);
        assert!(right.active);
        assert_eq!(right.damage, ENEMY_BULLET_DAMAGE);
    }

    #[test]
    fn test_bullet_angle_tilts_upward() {
        let shot = ShotParams {
            angle_deg: 10.0,
            ..ShotParams::enemy_rifle()
        };
        let bullet = Bullet::fire(Vec2::ZERO, false, Side::Enemy, shot);
        assert!(bullet.velocity.y > 0.0);
        assert!(bullet.velocity.x < 0.0);
        assert!((bullet.velocity.length() - ENEMY_BULLET_SPEED).abs() < 1e-2);
    }

    #[test]
    fn test_bullet_size_follows_weapon() {
        let rocket = ShotParams {
            weapon: Some(WeaponType::Rocket),
            ..ShotParams::enemy_rifle()
        };
        let bullet = Bullet::fire(Vec2::new(5.0, 6.0), true, Side::Player, rocket);
        assert_eq!(bullet.bounds, Bounds::new(5.0, 6.0, 24.0, 12.0));
        assert!(bullet.is_player_owned());
    }

    #[test]
    fn test_grenade_lob_reaches_target_horizontally() {
        let grenade = Grenade::lobbed(Vec2::new(500.0, 112.0), 200.0);
        assert!((grenade.velocity.x - (-200.0)).abs() < 1e-3);
        assert_eq!(grenade.velocity.y, GRENADE_LAUNCH_VY);
        assert!(!grenade.exploded);
        assert_eq!(
            grenade.blast_bounds(),
            Bounds::new(460.0, 72.0, 80.0, 80.0)
        );
    }

    #[test]
    fn test_melee_bounds_follow_facing() {
        let right = MeleeAttack::new(Vec2::new(100.0, GROUND_Y), true);
        let left = MeleeAttack::new(Vec2::new(100.0, GROUND_Y), false);
        assert_eq!(right.bounds().x, 132.0);
        assert_eq!(left.bounds().x, 68.0);
        assert_eq!(right.damage, MELEE_DAMAGE);
    }

    #[test]
    fn test_pickup_roll_table() {
        assert_eq!(PickupKind::from_roll(0.0), PickupKind::Health);
        assert_eq!(PickupKind::from_roll(0.3), PickupKind::HeavyMg);
        assert_eq!(PickupKind::from_roll(0.5), PickupKind::Shotgun);
        assert_eq!(PickupKind::from_roll(0.6), PickupKind::Rocket);
        assert_eq!(PickupKind::from_roll(0.75), PickupKind::Flame);
        assert_eq!(PickupKind::from_roll(0.85), PickupKind::Ammo);
        assert_eq!(PickupKind::from_roll(0.95), PickupKind::Bomb);
    }

    #[test]
    fn test_pickup_collect_deactivates() {
        let mut pickup = Pickup::new(Vec2::new(10.0, 100.0), PickupKind::Rocket);
        assert!(pickup.active);
        assert_eq!(pickup.collect(), PickupEffect::Weapon(WeaponType::Rocket));
        assert!(!pickup.active);
        assert_eq!(
            PickupKind::Health.effect(),
            PickupEffect::Heal(PICKUP_HEAL_AMOUNT)
        );
        assert_eq!(
            PickupKind::Ammo.effect(),
            PickupEffect::Ammo(PICKUP_AMMO_AMOUNT)
        );
    }

    #[test]
    fn test_command_wire_format() {
        let json = serde_json::to_string(&PlayerCommand::UseBomb).unwrap();
        assert_eq!(json, r#"{"type":"UseBomb"}"#);
        let back: PlayerCommand = serde_json::from_str(r#"{"type":"NextStage"}"#).unwrap();
        assert_eq!(back, PlayerCommand::NextStage);
    }

    #[test]
    fn test_event_wire_format() {
        let event = GameEvent::PickupCollected {
            kind: PickupKind::Bomb,
        };
        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains(r#""type":"PickupCollected""#));
        let back: GameEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(back, event);
    }

    #[test]
    fn test_default_snapshot_serializes() {
        let snapshot = GameStateSnapshot::default();
        let json = serde_json::to_string(&snapshot).unwrap();
        let back: GameStateSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back.phase, GamePhase::Active);
        assert!(back.boss.is_none());
        assert!(back.enemies.is_empty());
    }
}
