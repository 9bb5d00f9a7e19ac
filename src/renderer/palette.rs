//! Colors for game elements

use super::surface::Color;
use crate::sim::{EnemyBehavior, EnemyTint, PowerUpKind};

pub const BACKGROUND: Color = [0.02, 0.02, 0.05, 1.0];
pub const SHIP: Color = [1.0, 1.0, 1.0, 1.0];
pub const THRUST_FLAME: Color = [1.0, 0.6, 0.1, 1.0];
pub const SHIELD: Color = [0.3, 0.7, 1.0, 0.8];
pub const ASTEROID: Color = [0.7, 0.7, 0.75, 1.0];
pub const PLAYER_BULLET: Color = [1.0, 1.0, 0.6, 1.0];
pub const ADVANCED_BULLET: Color = [0.4, 1.0, 0.4, 1.0];
pub const ENEMY_BULLET: Color = [1.0, 0.3, 0.3, 1.0];
pub const HUD_TEXT: Color = [1.0, 1.0, 1.0, 1.0];
pub const GAME_OVER: Color = [1.0, 0.25, 0.25, 1.0];

pub fn enemy_hull(tint: EnemyTint) -> Color {
    match tint {
        EnemyTint::Red => [1.0, 0.27, 0.27, 1.0],
        EnemyTint::Orange => [1.0, 0.53, 0.0, 1.0],
        EnemyTint::Magenta => [1.0, 0.27, 1.0, 1.0],
        EnemyTint::Violet => [0.6, 0.4, 1.0, 1.0],
    }
}

/// Small marker showing which steering mode an enemy uses
pub fn behavior_marker(behavior: EnemyBehavior) -> Color {
    match behavior {
        EnemyBehavior::Chase => [1.0, 0.0, 0.0, 1.0],
        EnemyBehavior::Patrol => [1.0, 1.0, 0.0, 1.0],
        EnemyBehavior::Ambush => [0.0, 1.0, 1.0, 1.0],
    }
}

pub fn power_up(kind: PowerUpKind) -> Color {
    match kind {
        PowerUpKind::Weapon => [1.0, 0.85, 0.2, 1.0],
        PowerUpKind::Shield => [0.3, 0.7, 1.0, 1.0],
        PowerUpKind::Life => [1.0, 0.3, 0.5, 1.0],
        PowerUpKind::Speed => [0.3, 1.0, 0.4, 1.0],
        PowerUpKind::MultiShot => [0.8, 0.4, 1.0, 1.0],
    }
}
