//! Rendering module
//!
//! Draws the simulation onto an abstract [`Surface`]. Rendering only reads
//! state; nothing here feeds back into the simulation.

pub mod hud;
pub mod palette;
pub mod recorder;
pub mod shapes;
pub mod surface;

pub use recorder::{CommandRecorder, DrawCommand};
pub use surface::{Color, Surface, TextAlign, TextStyle};

use crate::sim::{EntityRef, GameState};

/// Draw one entity, dispatched on kind
pub fn render_entity<S: Surface + ?Sized>(entity: EntityRef<'_>, surface: &mut S, clock_ms: f64) {
    match entity {
        EntityRef::Ship(ship) => shapes::draw_ship(surface, ship, clock_ms),
        EntityRef::Asteroid(asteroid) => shapes::draw_asteroid(surface, asteroid),
        EntityRef::Enemy(enemy) => shapes::draw_enemy(surface, enemy),
        EntityRef::Bullet(bullet) => shapes::draw_bullet(surface, bullet),
        EntityRef::PowerUp(power_up) => shapes::draw_power_up(surface, power_up),
    }
}

/// Draw a full frame: background, world back to front, then HUD
pub fn render<S: Surface + ?Sized>(state: &GameState, surface: &mut S) {
    let now = state.clock_ms;
    surface.clear(state.width, state.height, palette::BACKGROUND);

    for asteroid in &state.asteroids {
        render_entity(EntityRef::Asteroid(asteroid), surface, now);
    }
    for power_up in &state.power_ups {
        render_entity(EntityRef::PowerUp(power_up), surface, now);
    }
    for bullet in &state.bullets {
        render_entity(EntityRef::Bullet(bullet), surface, now);
    }
    for enemy in &state.enemies {
        render_entity(EntityRef::Enemy(enemy), surface, now);
    }
    render_entity(EntityRef::Ship(&state.ship), surface, now);

    hud::draw_hud(state, surface);
}
