//! Heads-up display text overlay

use super::palette;
use super::surface::{Surface, TextAlign, TextStyle};
use crate::sim::GameState;
use crate::sim::effects::active_summary;

const MARGIN: f32 = 10.0;
const LINE_HEIGHT: f32 = 20.0;
const TEXT_SIZE: f32 = 16.0;
const BANNER_SIZE: f32 = 48.0;

/// Status lines, top to bottom
pub fn hud_lines(state: &GameState) -> Vec<String> {
    let effects = active_summary(&state.ship);
    let mut lines = vec![
        format!("Lives: {}", state.ship.lives),
        format!("Score: {}", state.score),
        format!("Level: {}", state.level),
    ];
    if !effects.is_empty() {
        lines.push(format!("Effects: {}", effects.join(" | ")));
    }
    lines.push(format!("Enemies: {}", state.enemies.len()));
    lines
}

pub fn draw_hud<S: Surface + ?Sized>(state: &GameState, surface: &mut S) {
    let style = TextStyle {
        size: TEXT_SIZE,
        color: palette::HUD_TEXT,
        align: TextAlign::Left,
    };
    for (i, line) in hud_lines(state).iter().enumerate() {
        let y = MARGIN + LINE_HEIGHT * (i + 1) as f32;
        surface.fill_text(line, MARGIN, y, &style);
    }

    if state.is_game_over() {
        let banner = TextStyle {
            size: BANNER_SIZE,
            color: palette::GAME_OVER,
            align: TextAlign::Center,
        };
        let center = state.center();
        surface.fill_text("GAME OVER", center.x, center.y, &banner);
    }
}
