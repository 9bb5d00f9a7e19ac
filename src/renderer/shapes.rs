//! Entity silhouettes
//!
//! Every shape is drawn in body-local space: the caller's transform is
//! saved, moved to the body and turned to its heading, then restored.

use std::f32::consts::{PI, TAU};

use super::palette;
use super::surface::Surface;
use crate::consts::ASTEROID_VERTICES;
use crate::sim::{Asteroid, Body, Bullet, BulletOrigin, EnemyShip, PowerUp, PowerUpKind, Ship};

/// Invulnerability blink half-period (ms)
const BLINK_MS: f64 = 100.0;
const LINE_WIDTH: f32 = 2.0;

fn with_body<S: Surface + ?Sized>(surface: &mut S, body: &Body, draw: impl FnOnce(&mut S)) {
    surface.save();
    surface.translate(body.pos.x, body.pos.y);
    surface.rotate(body.rotation);
    draw(surface);
    surface.restore();
}

fn full_circle<S: Surface + ?Sized>(surface: &mut S, radius: f32) {
    surface.begin_path();
    surface.arc(0.0, 0.0, radius, 0.0, TAU);
    surface.close_path();
}

/// Blinks off every other `BLINK_MS` window while invulnerable
pub fn ship_visible(ship: &Ship, clock_ms: f64) -> bool {
    !ship.is_invulnerable || (clock_ms / BLINK_MS) as u64 % 2 == 0
}

pub fn draw_ship<S: Surface + ?Sized>(surface: &mut S, ship: &Ship, clock_ms: f64) {
    if !ship_visible(ship, clock_ms) {
        return;
    }
    let s = ship.body.size;
    with_body(surface, &ship.body, |surface| {
        surface.begin_path();
        surface.move_to(s, 0.0);
        surface.line_to(-s * 0.7, -s * 0.6);
        surface.line_to(-s * 0.4, 0.0);
        surface.line_to(-s * 0.7, s * 0.6);
        surface.close_path();
        surface.stroke(palette::SHIP, LINE_WIDTH);

        if ship.is_thrusting {
            surface.begin_path();
            surface.move_to(-s * 0.5, -s * 0.3);
            surface.line_to(-s * 1.2, 0.0);
            surface.line_to(-s * 0.5, s * 0.3);
            surface.stroke(palette::THRUST_FLAME, LINE_WIDTH);
        }

        if ship.has_shield {
            full_circle(surface, s * 1.5);
            surface.stroke(palette::SHIELD, LINE_WIDTH);
        }
    });
}

pub fn draw_asteroid<S: Surface + ?Sized>(surface: &mut S, asteroid: &Asteroid) {
    let s = asteroid.body.size;
    with_body(surface, &asteroid.body, |surface| {
        surface.begin_path();
        for (i, jitter) in asteroid.outline.iter().enumerate() {
            let theta = i as f32 / ASTEROID_VERTICES as f32 * TAU;
            let r = s * jitter;
            let (x, y) = (r * theta.cos(), r * theta.sin());
            if i == 0 {
                surface.move_to(x, y);
            } else {
                surface.line_to(x, y);
            }
        }
        surface.close_path();
        surface.stroke(palette::ASTEROID, LINE_WIDTH);
    });
}

pub fn draw_bullet<S: Surface + ?Sized>(surface: &mut S, bullet: &Bullet) {
    let color = match bullet.origin {
        BulletOrigin::Enemy => palette::ENEMY_BULLET,
        BulletOrigin::Player if bullet.damage > 1 => palette::ADVANCED_BULLET,
        BulletOrigin::Player => palette::PLAYER_BULLET,
    };
    with_body(surface, &bullet.body, |surface| {
        full_circle(surface, bullet.body.size);
        surface.fill(color);
    });
}

pub fn draw_power_up<S: Surface + ?Sized>(surface: &mut S, power_up: &PowerUp) {
    let s = power_up.body.size;
    let color = palette::power_up(power_up.kind);
    with_body(surface, &power_up.body, |surface| {
        full_circle(surface, s);
        surface.stroke(color, LINE_WIDTH);

        let g = s * 0.5;
        surface.begin_path();
        match power_up.kind {
            PowerUpKind::Weapon => {
                // Lightning bolt
                surface.move_to(g * 0.2, -g);
                surface.line_to(-g * 0.4, g * 0.1);
                surface.line_to(g * 0.1, g * 0.1);
                surface.line_to(-g * 0.2, g);
                surface.stroke(color, LINE_WIDTH);
            }
            PowerUpKind::Shield => {
                surface.arc(0.0, 0.0, g, PI, TAU);
                surface.stroke(color, LINE_WIDTH);
            }
            PowerUpKind::Life => {
                surface.move_to(0.0, g * 0.4);
                surface.bezier_curve_to(-g * 1.2, -g * 0.4, -g * 0.4, -g * 1.2, 0.0, -g * 0.4);
                surface.bezier_curve_to(g * 0.4, -g * 1.2, g * 1.2, -g * 0.4, 0.0, g * 0.4);
                surface.close_path();
                surface.fill(color);
            }
            PowerUpKind::Speed => {
                for dx in [-g * 0.5, g * 0.3] {
                    surface.move_to(dx, -g * 0.6);
                    surface.line_to(dx + g * 0.5, 0.0);
                    surface.line_to(dx, g * 0.6);
                }
                surface.stroke(color, LINE_WIDTH);
            }
            PowerUpKind::MultiShot => {
                for dx in [-g * 0.6, 0.0, g * 0.6] {
                    surface.move_to(dx + g * 0.2, 0.0);
                    surface.arc(dx, 0.0, g * 0.2, 0.0, TAU);
                }
                surface.fill(color);
            }
        }
    });
}

pub fn draw_enemy<S: Surface + ?Sized>(surface: &mut S, enemy: &EnemyShip) {
    let s = enemy.body.size;
    with_body(surface, &enemy.body, |surface| {
        surface.begin_path();
        surface.move_to(s, 0.0);
        surface.line_to(-s * 0.5, -s * 0.6);
        surface.line_to(-s * 0.2, 0.0);
        surface.line_to(-s * 0.5, s * 0.6);
        surface.close_path();
        surface.fill(palette::enemy_hull(enemy.tint));

        full_circle(surface, s * 0.2);
        surface.fill(palette::behavior_marker(enemy.behavior));
    });
}
