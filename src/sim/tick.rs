//! Per-frame simulation step
//!
//! Pipeline: input -> update -> collide -> cleanup -> timed spawns.
//! Rendering reads the result separately and never feeds back.

use super::autopilot;
use super::collision;
use super::entity::{EntityMut, UpdateContext, update};
use super::spawn;
use super::state::{BulletOrigin, GameState};
use super::steering::{aim_error, should_fire};
use super::weapon::fire_volley;
use crate::consts::MAX_FRAME_DT;
use crate::heading;

/// The four logical controls
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    RotateLeft,
    RotateRight,
    Thrust,
    Fire,
}

/// Input intent for a single frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameInput {
    pub rotate_left: bool,
    pub rotate_right: bool,
    pub thrust: bool,
    pub fire: bool,
    /// Demo mode - autopilot replaces the controls
    pub demo: bool,
}

impl FrameInput {
    /// Record a key transition; the latest write wins
    pub fn set(&mut self, action: Action, pressed: bool) {
        match action {
            Action::RotateLeft => self.rotate_left = pressed,
            Action::RotateRight => self.rotate_right = pressed,
            Action::Thrust => self.thrust = pressed,
            Action::Fire => self.fire = pressed,
        }
    }

    pub fn is_pressed(&self, action: Action) -> bool {
        match action {
            Action::RotateLeft => self.rotate_left,
            Action::RotateRight => self.rotate_right,
            Action::Thrust => self.thrust,
            Action::Fire => self.fire,
        }
    }
}

/// Clamp a measured frame delta into `[0, MAX_FRAME_DT]`
pub fn sanitize_dt(dt: f32) -> f32 {
    if dt.is_nan() || dt < 0.0 {
        log::debug!("Discarding invalid frame delta {}", dt);
        return 0.0;
    }
    dt.min(MAX_FRAME_DT)
}

/// Advance the game by one frame
pub fn tick(state: &mut GameState, input: &FrameInput, dt: f32) {
    let dt = sanitize_dt(dt);
    state.events.clear();
    state.frame += 1;
    state.clock_ms += dt as f64 * 1000.0;

    let input = if input.demo {
        autopilot::demo_input(state)
    } else {
        *input
    };

    apply_input(state, &input, dt);
    update_entities(state, dt);
    collision::resolve(state);
    cleanup(state);
    spawn::tick_spawners(state, dt);
}

fn apply_input(state: &mut GameState, input: &FrameInput, dt: f32) {
    let ship = &mut state.ship;
    if input.rotate_left {
        ship.body.rotation -= ship.rotation_speed * dt;
    }
    if input.rotate_right {
        ship.body.rotation += ship.rotation_speed * dt;
    }
    ship.body.rotation = crate::normalize_angle(ship.body.rotation);
    ship.is_thrusting = input.thrust;

    if input.fire {
        let (nose, rotation, level) = (ship.nose(), ship.body.rotation, ship.multi_shot_level);
        if let Some(weapon) = ship.weapon.as_mut() {
            let volley = fire_volley(
                weapon,
                state.clock_ms,
                nose,
                rotation,
                level,
                BulletOrigin::Player,
            );
            state.bullets.extend(volley);
        }
    }
}

fn update_entities(state: &mut GameState, dt: f32) {
    let GameState {
        rng,
        width,
        height,
        clock_ms,
        ship,
        asteroids,
        enemies,
        bullets,
        power_ups,
        ..
    } = state;

    let mut ctx = UpdateContext {
        dt,
        width: *width,
        height: *height,
        player: ship.body.pos,
    };
    update(EntityMut::Ship(&mut *ship), &ctx, rng);
    ctx.player = ship.body.pos;

    for asteroid in asteroids.iter_mut() {
        update(EntityMut::Asteroid(asteroid), &ctx, rng);
    }
    for bullet in bullets.iter_mut() {
        update(EntityMut::Bullet(bullet), &ctx, rng);
    }
    for power_up in power_ups.iter_mut() {
        update(EntityMut::PowerUp(power_up), &ctx, rng);
    }

    // Enemy shots start moving next frame
    for enemy in enemies.iter_mut() {
        update(EntityMut::Enemy(&mut *enemy), &ctx, rng);
        if should_fire(enemy, ctx.player, *clock_ms) {
            let aim = enemy.body.rotation + aim_error(rng);
            let muzzle = enemy.body.pos + heading(enemy.body.rotation) * enemy.body.size;
            bullets.push(enemy.weapon.fire(*clock_ms, muzzle, aim, BulletOrigin::Enemy));
        }
    }
}

/// Purge everything flagged for removal
fn cleanup(state: &mut GameState) {
    state.bullets.retain(|b| b.active);
    state.power_ups.retain(|p| p.active);
    state.asteroids.retain(|a| !a.is_destroyed());
    state.enemies.retain(|e| !e.is_destroyed());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::FRAME_DT;
    use crate::tuning::Tuning;

    fn quiet_state() -> GameState {
        let mut s = GameState::new(12345, 800.0, 600.0, Tuning::default());
        s.asteroids.clear();
        s.enemies.clear();
        // Keep spawners from refilling the field mid-test
        s.tuning.asteroids.replenish_below = 0;
        s.enemy_spawn_timer = f32::INFINITY;
        s.power_up_spawn_timer = f32::INFINITY;
        s
    }

    #[test]
    fn test_input_set_last_write_wins() {
        let mut input = FrameInput::default();
        input.set(Action::Fire, true);
        input.set(Action::Thrust, true);
        input.set(Action::Fire, false);
        assert!(!input.is_pressed(Action::Fire));
        assert!(input.is_pressed(Action::Thrust));
    }

    #[test]
    fn test_sanitize_dt() {
        assert_eq!(sanitize_dt(-1.0), 0.0);
        assert_eq!(sanitize_dt(f32::NAN), 0.0);
        assert_eq!(sanitize_dt(f32::NEG_INFINITY), 0.0);
        assert_eq!(sanitize_dt(5.0), MAX_FRAME_DT);
        // A stalled clock reads as one long frame, same as any large delta
        assert_eq!(sanitize_dt(f32::INFINITY), MAX_FRAME_DT);
        assert_eq!(sanitize_dt(0.0), 0.0);
        assert_eq!(sanitize_dt(0.016), 0.016);
    }

    #[test]
    fn test_negative_dt_freezes_motion() {
        let mut s = quiet_state();
        s.ship.body.vel = glam::Vec2::new(50.0, 0.0);
        let before = s.ship.body.pos;
        tick(&mut s, &FrameInput::default(), -0.5);
        assert_eq!(s.ship.body.pos, before);
        assert_eq!(s.clock_ms, 0.0);
    }

    #[test]
    fn test_rotation_input() {
        let mut s = quiet_state();
        let start = s.ship.body.rotation;
        let input = FrameInput {
            rotate_right: true,
            ..Default::default()
        };
        tick(&mut s, &input, 0.1);
        assert!((s.ship.body.rotation - (start + 0.4)).abs() < 1e-4);
    }

    #[test]
    fn test_held_fire_respects_rate() {
        let mut s = quiet_state();
        let input = FrameInput {
            fire: true,
            ..Default::default()
        };
        // 10 frames at 60 Hz = 166 ms, under the 333 ms basic cooldown
        for _ in 0..10 {
            tick(&mut s, &input, FRAME_DT);
        }
        assert_eq!(s.player_bullets().count(), 1);
        for _ in 0..12 {
            tick(&mut s, &input, FRAME_DT);
        }
        assert_eq!(s.player_bullets().count(), 2);
    }

    #[test]
    fn test_expired_bullets_are_purged() {
        let mut s = quiet_state();
        let input = FrameInput {
            fire: true,
            ..Default::default()
        };
        tick(&mut s, &input, FRAME_DT);
        assert_eq!(s.bullets.len(), 1);
        for _ in 0..25 {
            tick(&mut s, &FrameInput::default(), 0.1);
        }
        assert!(s.bullets.is_empty());
    }

    #[test]
    fn test_determinism() {
        let mut a = GameState::new(99999, 800.0, 600.0, Tuning::default());
        let mut b = GameState::new(99999, 800.0, 600.0, Tuning::default());
        let inputs = [
            FrameInput {
                thrust: true,
                ..Default::default()
            },
            FrameInput {
                fire: true,
                rotate_left: true,
                ..Default::default()
            },
            FrameInput {
                demo: true,
                ..Default::default()
            },
        ];
        for _ in 0..200 {
            for input in &inputs {
                tick(&mut a, input, FRAME_DT);
                tick(&mut b, input, FRAME_DT);
            }
        }
        assert_eq!(a.snapshot(), b.snapshot());
    }
}
