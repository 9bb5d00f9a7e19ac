//! Enemy steering behaviors and firing decision
//!
//! Enemy velocity carries the displacement for the current frame
//! (already multiplied by dt), unlike every other body whose velocity is a
//! true rate.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::state::EnemyShip;
use crate::consts::{ENEMY_AIM_SPREAD, ENEMY_FIRE_CONE, ENEMY_JITTER};
use crate::{angle_to, heading, normalize_angle, shortest_angle};

/// Steering variant, fixed for an enemy's lifetime
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EnemyBehavior {
    /// Pursue the player once detected, coast otherwise
    Chase,
    /// Wander between random targets, divert toward the player when detected
    Patrol,
    /// Lie still until the player is close, then lunge
    Ambush,
}

impl EnemyBehavior {
    pub const ALL: [EnemyBehavior; 3] =
        [EnemyBehavior::Chase, EnemyBehavior::Patrol, EnemyBehavior::Ambush];
}

/// Coast decay when a chaser has lost the player
const CHASE_COAST: f32 = 0.98;
/// Decay while an ambusher waits
const AMBUSH_IDLE_DECAY: f32 = 0.9;
const AMBUSH_TURN_BOOST: f32 = 1.2;
const AMBUSH_SPEED_BOOST: f32 = 1.5;

/// Proportional turn toward `target_angle` along the shortest arc
#[inline]
pub fn turn_toward(rotation: f32, target_angle: f32, rate: f32, dt: f32) -> f32 {
    let diff = shortest_angle(rotation, target_angle);
    normalize_angle(rotation + diff * (rate * dt).min(1.0))
}

/// Update rotation and per-frame velocity for one enemy
pub fn steer(
    enemy: &mut EnemyShip,
    player: Vec2,
    dt: f32,
    bounds: Vec2,
    rng: &mut impl Rng,
) {
    let distance = enemy.body.pos.distance(player);
    let detected = distance < enemy.detection_radius;

    match enemy.behavior {
        EnemyBehavior::Chase => {
            if detected {
                let bearing = angle_to(enemy.body.pos, player);
                enemy.body.rotation =
                    turn_toward(enemy.body.rotation, bearing, enemy.rotation_speed, dt);
                enemy.body.vel = heading(enemy.body.rotation) * enemy.speed * dt;
            } else {
                enemy.body.vel *= CHASE_COAST;
            }
        }
        EnemyBehavior::Patrol => {
            enemy.direction_timer += dt;
            if enemy.target.is_none() || enemy.direction_timer >= enemy.direction_change_interval {
                enemy.target = Some(Vec2::new(
                    rng.random::<f32>() * bounds.x,
                    rng.random::<f32>() * bounds.y,
                ));
                enemy.direction_timer = 0.0;
            }
            if detected {
                // A detected player overrides the wander target
                enemy.target = Some(player);
            }
            if let Some(target) = enemy.target {
                let bearing = angle_to(enemy.body.pos, target);
                enemy.body.rotation =
                    turn_toward(enemy.body.rotation, bearing, enemy.rotation_speed, dt);
            }
            enemy.body.vel = heading(enemy.body.rotation) * enemy.speed * dt;
        }
        EnemyBehavior::Ambush => {
            if detected {
                let bearing = angle_to(enemy.body.pos, player);
                enemy.body.rotation = turn_toward(
                    enemy.body.rotation,
                    bearing,
                    enemy.rotation_speed * AMBUSH_TURN_BOOST,
                    dt,
                );
                let urgency = if enemy.detection_radius > 0.0 {
                    ((enemy.detection_radius - distance) / enemy.detection_radius).clamp(0.0, 1.0)
                } else {
                    0.0
                };
                enemy.body.vel = heading(enemy.body.rotation)
                    * enemy.speed
                    * AMBUSH_SPEED_BOOST
                    * urgency
                    * dt;
            } else {
                enemy.body.vel *= AMBUSH_IDLE_DECAY;
            }
        }
    }

    let jitter = (rng.random::<f32>() * 2.0 - 1.0) * ENEMY_JITTER * dt;
    enemy.body.rotation = normalize_angle(enemy.body.rotation + jitter);
}

/// In range, facing the player within the fire cone, and off cooldown
pub fn should_fire(enemy: &EnemyShip, player: Vec2, now_ms: f64) -> bool {
    if enemy.body.pos.distance(player) >= enemy.fire_radius {
        return false;
    }
    let off_axis = shortest_angle(enemy.body.rotation, angle_to(enemy.body.pos, player));
    off_axis.abs() <= ENEMY_FIRE_CONE && enemy.weapon.can_fire(now_ms)
}

/// Uniform aim error for one enemy shot
pub fn aim_error(rng: &mut impl Rng) -> f32 {
    (rng.random::<f32>() * 2.0 - 1.0) * ENEMY_AIM_SPREAD
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::{Body, EnemyTint};
    use crate::sim::weapon::Weapon;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn enemy(behavior: EnemyBehavior, pos: Vec2, rotation: f32) -> EnemyShip {
        EnemyShip {
            body: Body::new(pos, Vec2::ZERO, 20.0, rotation),
            health: 2,
            behavior,
            weapon: Weapon::enemy(),
            detection_radius: 300.0,
            fire_radius: 250.0,
            rotation_speed: 2.0,
            speed: 100.0,
            target: None,
            direction_timer: 0.0,
            direction_change_interval: 3.0,
            tint: EnemyTint::Red,
        }
    }

    const BOUNDS: Vec2 = Vec2::new(800.0, 600.0);
    const DT: f32 = 1.0 / 60.0;

    #[test]
    fn test_turn_toward_takes_short_way() {
        let r = turn_toward(3.0, -3.0, 2.0, 0.1);
        // Shortest path from 3.0 to -3.0 crosses π, so rotation grows
        assert!(r > 3.0 || r < -3.0);
    }

    #[test]
    fn test_chase_moves_toward_player_with_frame_displacement() {
        let mut rng = Pcg32::seed_from_u64(1);
        let mut e = enemy(EnemyBehavior::Chase, Vec2::new(100.0, 100.0), 0.0);
        steer(&mut e, Vec2::new(200.0, 100.0), DT, BOUNDS, &mut rng);
        // Velocity is the per-frame step, speed * dt
        assert!((e.body.vel.length() - 100.0 * DT).abs() < 1e-3);
        assert!(e.body.vel.x > 0.0);
    }

    #[test]
    fn test_chase_coasts_when_player_out_of_range() {
        let mut rng = Pcg32::seed_from_u64(1);
        let mut e = enemy(EnemyBehavior::Chase, Vec2::new(0.0, 0.0), 0.0);
        e.body.vel = Vec2::new(1.0, 0.0);
        steer(&mut e, Vec2::new(700.0, 500.0), DT, BOUNDS, &mut rng);
        assert!((e.body.vel.x - 0.98).abs() < 1e-6);
    }

    #[test]
    fn test_patrol_targets_player_when_detected() {
        let mut rng = Pcg32::seed_from_u64(5);
        let mut e = enemy(EnemyBehavior::Patrol, Vec2::new(100.0, 100.0), 0.0);
        let player = Vec2::new(150.0, 150.0);
        steer(&mut e, player, DT, BOUNDS, &mut rng);
        assert_eq!(e.target, Some(player));
    }

    #[test]
    fn test_patrol_picks_new_target_after_interval() {
        let mut rng = Pcg32::seed_from_u64(5);
        let mut e = enemy(EnemyBehavior::Patrol, Vec2::new(100.0, 100.0), 0.0);
        let far = Vec2::new(790.0, 590.0);
        e.target = Some(Vec2::new(1.0, 1.0));
        e.direction_timer = 2.99;
        steer(&mut e, far, 0.02, BOUNDS, &mut rng);
        assert_ne!(e.target, Some(Vec2::new(1.0, 1.0)));
        assert_eq!(e.direction_timer, 0.0);
    }

    #[test]
    fn test_ambush_waits_then_lunges() {
        let mut rng = Pcg32::seed_from_u64(9);
        let mut e = enemy(EnemyBehavior::Ambush, Vec2::new(100.0, 100.0), 0.0);
        e.body.vel = Vec2::new(1.0, 0.0);
        steer(&mut e, Vec2::new(700.0, 500.0), DT, BOUNDS, &mut rng);
        assert!((e.body.vel.x - 0.9).abs() < 1e-6);

        // Player at half the detection radius: half of the 1.5x boost
        steer(&mut e, Vec2::new(250.0, 100.0), DT, BOUNDS, &mut rng);
        let expected = 100.0 * 1.5 * 0.5 * DT;
        assert!((e.body.vel.length() - expected).abs() < 1e-3);
    }

    #[test]
    fn test_fire_cone() {
        let e = enemy(EnemyBehavior::Chase, Vec2::new(100.0, 100.0), 0.0);
        assert!(should_fire(&e, Vec2::new(200.0, 110.0), 0.0));
        // 90 degrees off axis
        assert!(!should_fire(&e, Vec2::new(100.0, 200.0), 0.0));
        // Out of fire range
        assert!(!should_fire(&e, Vec2::new(390.0, 100.0), 0.0));
    }

    #[test]
    fn test_aim_error_bounded() {
        let mut rng = Pcg32::seed_from_u64(3);
        for _ in 0..200 {
            assert!(aim_error(&mut rng).abs() <= ENEMY_AIM_SPREAD);
        }
    }
}
