//! Collision detection and damage resolution
//!
//! Every test is circle-circle. Stages run in a fixed order each frame,
//! which decides kill credit when several overlaps happen at once. A bullet
//! or power-up resolves at most one contact per frame.

use super::effects::apply_power_up;
use super::spawn;
use super::state::{BulletOrigin, GameEvent, GameState, Ship};
use crate::circles_overlap;
use crate::consts::SHIELD_HIT_COST;
use glam::Vec2;

/// Run every collision stage in order
pub fn resolve(state: &mut GameState) {
    ship_vs_hazards(state);
    player_bullets_vs_asteroids(state);
    player_bullets_vs_enemies(state);
    enemy_bullets_vs_ship(state);
    ship_vs_power_ups(state);
}

/// Lose a life, then respawn centered and briefly invulnerable
pub fn hit_ship(ship: &mut Ship, center: Vec2, invulnerability_secs: f32) {
    ship.lives = ship.lives.saturating_sub(1);
    ship.is_invulnerable = true;
    ship.invulnerability_time = invulnerability_secs;
    ship.body.pos = center;
    ship.body.vel = Vec2::ZERO;
    ship.thrust = 0.0;
}

fn ship_hit(state: &mut GameState) {
    let center = state.center();
    hit_ship(&mut state.ship, center, state.tuning.ship.invulnerability_secs);
    let lives_left = state.ship.lives;
    state.events.push(GameEvent::ShipHit { lives_left });
    if lives_left == 0 {
        log::info!("Game over: score {}, level {}", state.score, state.level);
        state.events.push(GameEvent::GameOver);
    } else {
        log::debug!("Ship hit, {} lives left", lives_left);
    }
}

/// Ship against asteroids and enemy hulls; one hit per frame at most
fn ship_vs_hazards(state: &mut GameState) {
    if state.ship.is_protected() {
        return;
    }
    let ship = state.ship.body;
    let hit = state
        .asteroids
        .iter()
        .map(|a| a.body)
        .chain(state.enemies.iter().map(|e| e.body))
        .any(|b| circles_overlap(ship.pos, ship.size, b.pos, b.size));
    if hit {
        ship_hit(state);
    }
}

fn player_bullets_vs_asteroids(state: &mut GameState) {
    for bi in 0..state.bullets.len() {
        let bullet = &state.bullets[bi];
        if !bullet.active || bullet.origin != BulletOrigin::Player {
            continue;
        }
        let (pos, size, damage) = (bullet.body.pos, bullet.body.size, bullet.damage);

        let Some(ai) = state
            .asteroids
            .iter()
            .position(|a| circles_overlap(pos, size, a.body.pos, a.body.size))
        else {
            continue;
        };

        state.bullets[bi].active = false;
        state.asteroids[ai].health -= damage;
        if state.asteroids[ai].is_destroyed() {
            let asteroid = state.asteroids.remove(ai);
            state.score += state.tuning.scoring.asteroid;
            state.events.push(GameEvent::AsteroidDestroyed { pos: asteroid.body.pos });
            let chance = state.tuning.power_ups.asteroid_drop_chance;
            spawn::roll_drop(state, chance);
            if (state.asteroids.len() as u32) < state.tuning.asteroids.replenish_below {
                let count = state.tuning.asteroids.replenish_count;
                spawn::spawn_asteroids(state, count);
            }
        }
    }
}

fn player_bullets_vs_enemies(state: &mut GameState) {
    for bi in 0..state.bullets.len() {
        let bullet = &state.bullets[bi];
        if !bullet.active || bullet.origin != BulletOrigin::Player {
            continue;
        }
        let (pos, size, damage) = (bullet.body.pos, bullet.body.size, bullet.damage);

        let Some(ei) = state
            .enemies
            .iter()
            .position(|e| circles_overlap(pos, size, e.body.pos, e.body.size))
        else {
            continue;
        };

        state.bullets[bi].active = false;
        state.enemies[ei].health -= damage;
        if state.enemies[ei].is_destroyed() {
            let enemy = state.enemies.remove(ei);
            state.score += state.tuning.scoring.enemy;
            state.events.push(GameEvent::EnemyDestroyed { pos: enemy.body.pos });
            let chance = state.tuning.power_ups.enemy_drop_chance;
            spawn::roll_drop(state, chance);
            check_level_up(state);
        }
    }
}

/// Advance a level once score reaches `level * level_step`, with reinforcements
fn check_level_up(state: &mut GameState) {
    if state.score >= state.level as u64 * state.tuning.scoring.level_step {
        state.level += 1;
        log::info!("Level {} reached (score {})", state.level, state.score);
        state.events.push(GameEvent::LevelUp(state.level));
        for _ in 0..state.level {
            spawn::spawn_enemy(state);
        }
    }
}

fn enemy_bullets_vs_ship(state: &mut GameState) {
    for bi in 0..state.bullets.len() {
        if state.ship.is_invulnerable {
            return;
        }
        let bullet = &state.bullets[bi];
        if !bullet.active || bullet.origin != BulletOrigin::Enemy {
            continue;
        }
        let ship = state.ship.body;
        if !circles_overlap(bullet.body.pos, bullet.body.size, ship.pos, ship.size) {
            continue;
        }

        state.bullets[bi].active = false;
        if state.ship.has_shield {
            state.ship.shield_time -= SHIELD_HIT_COST;
            if state.ship.shield_time <= 0.0 {
                state.ship.shield_time = 0.0;
                state.ship.has_shield = false;
            }
            state.events.push(GameEvent::ShieldAbsorbed);
        } else {
            ship_hit(state);
        }
    }
}

fn ship_vs_power_ups(state: &mut GameState) {
    let ship = state.ship.body;
    for pi in 0..state.power_ups.len() {
        let p = &state.power_ups[pi];
        if !p.active || !circles_overlap(ship.pos, ship.size, p.body.pos, p.body.size) {
            continue;
        }
        let (kind, duration) = (p.kind, p.duration);
        state.power_ups[pi].active = false;
        state.score += apply_power_up(&mut state.ship, kind, duration, &state.tuning);
        state.events.push(GameEvent::PowerUpCollected(kind));
    }
}
