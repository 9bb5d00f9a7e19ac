//! Demo mode - the ship flies itself
//!
//! Turns toward the nearest threat, shoots when roughly lined up and
//! thrusts only when nothing is close.

use super::state::GameState;
use super::tick::FrameInput;
use crate::{angle_to, shortest_angle};

/// Heading error (radians) tolerated before turning
const TURN_DEADBAND: f32 = 0.05;
/// Heading error (radians) within which the autopilot fires
const FIRE_CONE: f32 = 0.2;
/// Keep clear of threats closer than this
const COMFORT_RADIUS: f32 = 220.0;

pub fn demo_input(state: &GameState) -> FrameInput {
    let ship = &state.ship.body;

    let nearest = state
        .asteroids
        .iter()
        .map(|a| a.body.pos)
        .chain(state.enemies.iter().map(|e| e.body.pos))
        .min_by(|a, b| {
            a.distance_squared(ship.pos)
                .partial_cmp(&b.distance_squared(ship.pos))
                .unwrap_or(std::cmp::Ordering::Equal)
        });

    // Nothing to shoot: drift toward the middle and idle
    let target = nearest.unwrap_or_else(|| state.center());
    let error = shortest_angle(ship.rotation, angle_to(ship.pos, target));
    let distance = ship.pos.distance(target);

    // Weave a little so repeated runs don't lock into one orbit
    let time_factor = state.clock_ms as f32 * 0.0005;
    let weave = time_factor.sin() * 0.1;

    let error = error + weave;
    FrameInput {
        rotate_left: error < -TURN_DEADBAND,
        rotate_right: error > TURN_DEADBAND,
        thrust: nearest.is_some() && distance > COMFORT_RADIUS && error.abs() < 0.5,
        fire: nearest.is_some() && error.abs() < FIRE_CONE,
        demo: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;
    use crate::sim::state::{Asteroid, Body};
    use crate::tuning::Tuning;

    fn lone_asteroid_state(at: Vec2) -> GameState {
        let mut s = GameState::new(4, 800.0, 600.0, Tuning::default());
        s.asteroids.clear();
        s.enemies.clear();
        s.asteroids.push(Asteroid {
            body: Body::new(at, Vec2::ZERO, 30.0, 0.0),
            health: 2,
            spin: 0.0,
            outline: [1.0; 8],
        });
        s
    }

    #[test]
    fn test_fires_when_lined_up() {
        let mut s = lone_asteroid_state(Vec2::new(700.0, 300.0));
        s.ship.body.rotation = 0.0;
        let input = demo_input(&s);
        assert!(input.fire);
        assert!(!input.rotate_left && !input.rotate_right);
    }

    #[test]
    fn test_turns_toward_threat() {
        let mut s = lone_asteroid_state(Vec2::new(400.0, 550.0));
        // Facing +x, threat is below (+y): clockwise on screen, rotation grows
        s.ship.body.rotation = 0.0;
        let input = demo_input(&s);
        assert!(input.rotate_right);
        assert!(!input.fire);
    }

    #[test]
    fn test_idle_without_threats() {
        let mut s = lone_asteroid_state(Vec2::ZERO);
        s.asteroids.clear();
        let input = demo_input(&s);
        assert!(!input.fire && !input.thrust);
    }
}
