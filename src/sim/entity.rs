//! Per-entity update, dispatched on entity kind
//!
//! Each update integrates position, applies the kind's forces, wraps, then
//! runs down its timers, in that order.

use glam::Vec2;
use rand::Rng;

use super::effects::tick_reversions;
use super::state::{Asteroid, Bullet, EnemyShip, PowerUp, Ship};
use super::steering::steer;
use super::wrap::{wrap_bounding, wrap_center};
use crate::heading;

/// Power-up glyph spin (radians/s)
const POWER_UP_SPIN: f32 = 1.0;

/// Mutable view of any simulated body
pub enum EntityMut<'a> {
    Ship(&'a mut Ship),
    Asteroid(&'a mut Asteroid),
    Enemy(&'a mut EnemyShip),
    Bullet(&'a mut Bullet),
    PowerUp(&'a mut PowerUp),
}

/// Shared view of any simulated body
#[derive(Clone, Copy)]
pub enum EntityRef<'a> {
    Ship(&'a Ship),
    Asteroid(&'a Asteroid),
    Enemy(&'a EnemyShip),
    Bullet(&'a Bullet),
    PowerUp(&'a PowerUp),
}

/// World facts an update may read
#[derive(Debug, Clone, Copy)]
pub struct UpdateContext {
    pub dt: f32,
    pub width: f32,
    pub height: f32,
    /// Player position at the start of the update pass
    pub player: Vec2,
}

impl UpdateContext {
    pub fn bounds(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }
}

pub fn update(entity: EntityMut<'_>, ctx: &UpdateContext, rng: &mut impl Rng) {
    match entity {
        EntityMut::Ship(ship) => update_ship(ship, ctx),
        EntityMut::Asteroid(asteroid) => update_asteroid(asteroid, ctx),
        EntityMut::Enemy(enemy) => update_enemy(enemy, ctx, rng),
        EntityMut::Bullet(bullet) => update_bullet(bullet, ctx),
        EntityMut::PowerUp(power_up) => update_power_up(power_up, ctx),
    }
}

fn update_ship(ship: &mut Ship, ctx: &UpdateContext) {
    let dt = ctx.dt;
    ship.body.pos += ship.body.vel * dt;

    if ship.is_thrusting {
        ship.thrust = (ship.thrust + ship.max_thrust * dt).min(ship.max_thrust);
    } else {
        ship.thrust *= ship.friction;
    }
    if ship.thrust > 0.0 {
        ship.body.vel += heading(ship.body.rotation) * ship.thrust * dt;
    }
    ship.body.vel *= ship.friction;

    wrap_center(&mut ship.body.pos, ctx.width, ctx.height);

    if ship.is_invulnerable {
        ship.invulnerability_time -= dt;
        if ship.invulnerability_time <= 0.0 {
            ship.invulnerability_time = 0.0;
            ship.is_invulnerable = false;
        }
    }
    if ship.has_shield {
        ship.shield_time -= dt;
        if ship.shield_time <= 0.0 {
            ship.shield_time = 0.0;
            ship.has_shield = false;
        }
    }
    tick_reversions(ship, dt);
}

fn update_asteroid(asteroid: &mut Asteroid, ctx: &UpdateContext) {
    asteroid.body.pos += asteroid.body.vel * ctx.dt;
    asteroid.body.rotation += asteroid.spin * ctx.dt;
    wrap_bounding(&mut asteroid.body.pos, asteroid.body.size, ctx.width, ctx.height);
}

fn update_enemy(enemy: &mut EnemyShip, ctx: &UpdateContext, rng: &mut impl Rng) {
    steer(enemy, ctx.player, ctx.dt, ctx.bounds(), rng);
    // Velocity already holds this frame's displacement
    enemy.body.pos += enemy.body.vel;
    wrap_center(&mut enemy.body.pos, ctx.width, ctx.height);
}

fn update_bullet(bullet: &mut Bullet, ctx: &UpdateContext) {
    bullet.body.pos += bullet.body.vel * ctx.dt;
    bullet.life_time -= ctx.dt;
    if bullet.life_time <= 0.0 {
        bullet.active = false;
    }
}

fn update_power_up(power_up: &mut PowerUp, ctx: &UpdateContext) {
    power_up.body.pos += power_up.body.vel * ctx.dt;
    power_up.body.rotation += POWER_UP_SPIN * ctx.dt;
    wrap_bounding(&mut power_up.body.pos, power_up.body.size, ctx.width, ctx.height);
}
