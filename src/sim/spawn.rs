//! Spawn policies for asteroids, enemies and power-ups
//!
//! Positions are rejection-sampled away from the ship. Sampling is bounded:
//! on a field too small to satisfy the safe radius the last sample is used.

use glam::Vec2;
use rand::Rng;

use super::state::{Asteroid, Body, EnemyShip, EnemyTint, GameState, PowerUp, PowerUpKind};
use super::steering::EnemyBehavior;
use super::weapon::Weapon;
use crate::consts::*;
use crate::tuning::{PowerUpWeights, Tuning};

/// Uniform point on the field at least `min_dist` from `avoid`, if one turns up
pub fn safe_position(
    rng: &mut impl Rng,
    width: f32,
    height: f32,
    avoid: Vec2,
    min_dist: f32,
) -> Vec2 {
    let mut pos = Vec2::ZERO;
    for _ in 0..SPAWN_MAX_ATTEMPTS {
        pos = Vec2::new(rng.random::<f32>() * width, rng.random::<f32>() * height);
        if pos.distance(avoid) >= min_dist {
            return pos;
        }
    }
    log::warn!(
        "No spawn point {} from ship on {}x{} field after {} tries; using last sample",
        min_dist,
        width,
        height,
        SPAWN_MAX_ATTEMPTS
    );
    pos
}

/// Uniform sample in `[lo, hi]`, tolerant of an empty range
#[inline]
fn uniform(rng: &mut impl Rng, lo: f32, hi: f32) -> f32 {
    lo + rng.random::<f32>() * (hi - lo)
}

pub fn spawn_asteroid(state: &mut GameState) {
    let t = &state.tuning.asteroids;
    let (safe_radius, min_size, max_size, max_speed, health) =
        (t.safe_radius, t.min_size, t.max_size, t.max_speed, t.health);
    let rng = &mut state.rng;

    let pos = safe_position(rng, state.width, state.height, state.ship.body.pos, safe_radius);
    let vel = Vec2::new(
        uniform(rng, -max_speed, max_speed),
        uniform(rng, -max_speed, max_speed),
    );
    let size = uniform(rng, min_size, max_size);
    let spin = uniform(rng, -1.0, 1.0);
    let mut outline = [1.0; ASTEROID_VERTICES];
    for r in &mut outline {
        *r = uniform(rng, 0.75, 1.25);
    }

    state.asteroids.push(Asteroid {
        body: Body::new(pos, vel, size, 0.0),
        health,
        spin,
        outline,
    });
}

pub fn spawn_asteroids(state: &mut GameState, count: u32) {
    for _ in 0..count {
        spawn_asteroid(state);
    }
    log::debug!("Spawned {} asteroids ({} total)", count, state.asteroids.len());
}

pub fn spawn_enemy(state: &mut GameState) {
    let t = &state.tuning.enemies;
    let template = EnemyShip {
        body: Body::new(Vec2::ZERO, Vec2::ZERO, ENEMY_SIZE, 0.0),
        health: t.health,
        behavior: EnemyBehavior::Chase,
        weapon: Weapon::enemy(),
        detection_radius: t.detection_radius,
        fire_radius: t.fire_radius,
        rotation_speed: t.rotation_speed,
        speed: t.speed,
        target: None,
        direction_timer: 0.0,
        direction_change_interval: 0.0,
        tint: EnemyTint::Red,
    };
    let safe_radius = t.safe_radius;
    let rng = &mut state.rng;

    let pos = safe_position(rng, state.width, state.height, state.ship.body.pos, safe_radius);
    let behavior = EnemyBehavior::ALL[rng.random_range(0..EnemyBehavior::ALL.len())];
    let tint = EnemyTint::ALL[rng.random_range(0..EnemyTint::ALL.len())];
    let rotation = uniform(rng, -std::f32::consts::PI, std::f32::consts::PI);
    let direction_change_interval = uniform(rng, 2.0, 5.0);

    let enemy = EnemyShip {
        body: Body::new(pos, Vec2::ZERO, ENEMY_SIZE, rotation),
        behavior,
        tint,
        direction_change_interval,
        ..template
    };
    log::debug!("Enemy spawned: {:?} at ({:.0}, {:.0})", behavior, pos.x, pos.y);
    state.enemies.push(enemy);
}

/// Weighted draw over the power-up table
pub fn pick_power_up_kind(rng: &mut impl Rng, weights: &PowerUpWeights) -> PowerUpKind {
    let table = [
        (PowerUpKind::Weapon, weights.weapon),
        (PowerUpKind::Shield, weights.shield),
        (PowerUpKind::Life, weights.life),
        (PowerUpKind::Speed, weights.speed),
        (PowerUpKind::MultiShot, weights.multi_shot),
    ];
    let total = weights.total();
    if total == 0 {
        return PowerUpKind::Weapon;
    }
    let mut roll = rng.random_range(0..total);
    for (kind, weight) in table {
        let weight = u64::from(weight);
        if roll < weight {
            return kind;
        }
        roll -= weight;
    }
    PowerUpKind::MultiShot
}

pub fn spawn_power_up(state: &mut GameState) {
    let t = &state.tuning.power_ups;
    let (safe_radius, drift, duration) = (t.safe_radius, t.max_drift_speed, t.duration);
    let kind = pick_power_up_kind(&mut state.rng, &state.tuning.power_ups.weights);
    let rng = &mut state.rng;

    let pos = safe_position(rng, state.width, state.height, state.ship.body.pos, safe_radius);
    let vel = Vec2::new(uniform(rng, -drift, drift), uniform(rng, -drift, drift));

    log::debug!("Power-up spawned: {}", kind.label());
    state.power_ups.push(PowerUp {
        body: Body::new(pos, vel, POWER_UP_SIZE, 0.0),
        kind,
        active: true,
        duration,
    });
}

/// Spawn a power-up with probability `chance`
pub fn roll_drop(state: &mut GameState, chance: f64) {
    if state.rng.random_bool(chance.clamp(0.0, 1.0)) {
        spawn_power_up(state);
    }
}

/// Seconds between timed enemy spawns at `level`
pub fn enemy_spawn_interval(level: u32, tuning: &Tuning) -> f32 {
    let t = &tuning.enemies;
    (t.base_spawn_interval - level as f32 * t.spawn_interval_per_level).max(t.min_spawn_interval)
}

/// Most enemies timed spawns may bring the field up to
pub fn enemy_cap(level: u32, tuning: &Tuning) -> usize {
    (tuning.enemies.base_cap + level) as usize
}

/// Advance spawn countdowns and top up asteroid, enemy and power-up counts
pub fn tick_spawners(state: &mut GameState, dt: f32) {
    let t = &state.tuning;
    if (state.asteroids.len() as u32) < t.asteroids.replenish_below {
        let count = t.asteroids.replenish_count;
        spawn_asteroids(state, count);
    }

    state.enemy_spawn_timer -= dt;
    if state.enemy_spawn_timer <= 0.0 {
        if state.enemies.len() < enemy_cap(state.level, &state.tuning) {
            spawn_enemy(state);
        }
        state.enemy_spawn_timer = enemy_spawn_interval(state.level, &state.tuning);
    }

    state.power_up_spawn_timer -= dt;
    if state.power_up_spawn_timer <= 0.0 {
        if (state.power_ups.len() as u32) < state.tuning.power_ups.max_concurrent {
            spawn_power_up(state);
        }
        state.power_up_spawn_timer = state.tuning.power_ups.spawn_interval;
    }
}
