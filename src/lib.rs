//! Astro Drift - a wrapped-field arcade shooter
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, weapons, spawning, collisions)
//! - `engine`: Control surface driven by an external frame scheduler
//! - `renderer`: Abstract drawing surface and entity silhouettes
//! - `tuning`: Data-driven game balance

pub mod engine;
pub mod renderer;
pub mod sim;
pub mod tuning;

pub use engine::GameEngine;
pub use tuning::{Tuning, TuningError};

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Largest frame delta the simulation will integrate in one step (seconds)
    pub const MAX_FRAME_DT: f32 = 0.1;
    /// Nominal frame delta used by the reference driver (60 Hz)
    pub const FRAME_DT: f32 = 1.0 / 60.0;

    /// Default play-field dimensions
    pub const DEFAULT_WIDTH: f32 = 800.0;
    pub const DEFAULT_HEIGHT: f32 = 600.0;
    /// Seed used when the caller does not provide one
    pub const DEFAULT_SEED: u64 = 0x5eed_a57e;

    /// Collision radii
    pub const SHIP_SIZE: f32 = 15.0;
    pub const ENEMY_SIZE: f32 = 20.0;
    pub const POWER_UP_SIZE: f32 = 15.0;

    /// Rejection sampling attempts before a spawn accepts its last sample
    pub const SPAWN_MAX_ATTEMPTS: u32 = 32;

    /// Asteroid outline vertex count
    pub const ASTEROID_VERTICES: usize = 8;

    /// Enemy heading noise (radians per second, peak)
    pub const ENEMY_JITTER: f32 = 0.1;
    /// Enemies hold fire unless the player is inside this cone (radians, half-angle)
    pub const ENEMY_FIRE_CONE: f32 = std::f32::consts::PI / 6.0;
    /// Uniform aim error applied to enemy shots (radians, half-width)
    pub const ENEMY_AIM_SPREAD: f32 = 0.15;

    /// Shield time consumed per absorbed enemy bullet
    pub const SHIELD_HIT_COST: f32 = 1.0;
    /// Cap on the multi-shot upgrade tier
    pub const MAX_MULTI_SHOT: u8 = 5;
}

/// Normalized angle to [-π, π)
#[inline]
pub fn normalize_angle(mut angle: f32) -> f32 {
    use std::f32::consts::PI;
    if !angle.is_finite() {
        return 0.0;
    }
    while angle >= PI {
        angle -= 2.0 * PI;
    }
    while angle < -PI {
        angle += 2.0 * PI;
    }
    angle
}

/// Signed shortest rotation that takes `from` onto `to`
#[inline]
pub fn shortest_angle(from: f32, to: f32) -> f32 {
    normalize_angle(to - from)
}

/// Bearing of `to` as seen from `from`
#[inline]
pub fn angle_to(from: Vec2, to: Vec2) -> f32 {
    let d = to - from;
    d.y.atan2(d.x)
}

/// Unit vector pointing along `theta`
#[inline]
pub fn heading(theta: f32) -> Vec2 {
    Vec2::new(theta.cos(), theta.sin())
}

/// Circle-circle overlap: strictly closer than the sum of radii
#[inline]
pub fn circles_overlap(a: Vec2, ra: f32, b: Vec2, rb: f32) -> bool {
    a.distance(b) < ra + rb
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::PI;

    #[test]
    fn test_normalize_angle_range() {
        // ±3π sit on the seam; f32 rounding may land either side of it
        for a in [3.0 * PI, -3.0 * PI] {
            let n = normalize_angle(a);
            assert!((-PI..PI).contains(&n), "{a} -> {n}");
            assert!(shortest_angle(n, PI).abs() < 1e-5, "{a} -> {n}");
        }
        assert!((normalize_angle(2.5 * PI) - 0.5 * PI).abs() < 1e-5);
        assert!((normalize_angle(-2.5 * PI) + 0.5 * PI).abs() < 1e-5);
        assert_eq!(normalize_angle(0.5), 0.5);
        assert_eq!(normalize_angle(f32::NAN), 0.0);
    }

    #[test]
    fn test_shortest_angle_crosses_seam() {
        // From just below +π to just above -π is a small positive turn
        let d = shortest_angle(PI - 0.1, -PI + 0.1);
        assert!((d - 0.2).abs() < 1e-5);
        let d = shortest_angle(-PI + 0.1, PI - 0.1);
        assert!((d + 0.2).abs() < 1e-5);
    }

    #[test]
    fn test_angle_to_and_heading() {
        let a = angle_to(Vec2::ZERO, Vec2::new(0.0, 10.0));
        assert!((a - PI / 2.0).abs() < 1e-5);
        let h = heading(a);
        assert!(h.x.abs() < 1e-5 && (h.y - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_circles_overlap_boundary() {
        let a = Vec2::new(0.0, 0.0);
        assert!(circles_overlap(a, 10.0, Vec2::new(24.99, 0.0), 15.0));
        assert!(!circles_overlap(a, 10.0, Vec2::new(25.01, 0.0), 15.0));
        // Touching exactly is not a hit
        assert!(!circles_overlap(a, 10.0, Vec2::new(25.0, 0.0), 15.0));
    }
}
