//! Power-up effects and their timed reversion
//!
//! WEAPON and SPEED revert after their duration. The pending reversion is a
//! countdown stored on the ship it applies to, so a new ship never inherits
//! one and a repeat pickup restarts the countdown instead of stacking.

use serde::{Deserialize, Serialize};

use super::state::{PowerUpKind, Ship};
use super::weapon::{Weapon, WeaponProfile};
use crate::consts::MAX_MULTI_SHOT;
use crate::tuning::Tuning;

/// Seconds until each timed effect reverts; `None` when nothing is pending
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct EffectTimers {
    pub weapon_revert_in: Option<f32>,
    pub speed_revert_in: Option<f32>,
}

impl EffectTimers {
    pub fn is_idle(&self) -> bool {
        self.weapon_revert_in.is_none() && self.speed_revert_in.is_none()
    }

    /// Drop every pending reversion without applying it
    pub fn cancel_all(&mut self) {
        self.weapon_revert_in = None;
        self.speed_revert_in = None;
    }
}

/// Apply a collected power-up to the ship. Returns score awarded.
pub fn apply_power_up(ship: &mut Ship, kind: PowerUpKind, duration: f32, tuning: &Tuning) -> u64 {
    log::debug!("Power-up collected: {}", kind.label());
    match kind {
        PowerUpKind::Weapon => {
            ship.weapon = Some(Weapon::advanced());
            ship.effects.weapon_revert_in = Some(duration);
            0
        }
        PowerUpKind::Shield => {
            ship.has_shield = true;
            ship.shield_time = duration;
            0
        }
        PowerUpKind::Life => {
            ship.lives += 1;
            0
        }
        PowerUpKind::Speed => {
            ship.max_thrust = ship.base_max_thrust * tuning.power_ups.speed_boost;
            ship.effects.speed_revert_in = Some(duration);
            0
        }
        PowerUpKind::MultiShot => {
            ship.multi_shot_level = (ship.multi_shot_level + 1).min(MAX_MULTI_SHOT);
            tuning.scoring.multi_shot_per_level * ship.multi_shot_level as u64
        }
    }
}

/// Count down pending reversions and apply the ones that expire
pub fn tick_reversions(ship: &mut Ship, dt: f32) {
    if let Some(left) = ship.effects.weapon_revert_in {
        let left = left - dt;
        if left <= 0.0 {
            ship.weapon = Some(Weapon::basic());
            ship.effects.weapon_revert_in = None;
            log::debug!("Advanced weapon expired");
        } else {
            ship.effects.weapon_revert_in = Some(left);
        }
    }

    if let Some(left) = ship.effects.speed_revert_in {
        let left = left - dt;
        if left <= 0.0 {
            ship.max_thrust = ship.base_max_thrust;
            ship.thrust = ship.thrust.min(ship.max_thrust);
            ship.effects.speed_revert_in = None;
            log::debug!("Speed boost expired");
        } else {
            ship.effects.speed_revert_in = Some(left);
        }
    }
}

/// Short human-readable list of active effects, for the HUD
pub fn active_summary(ship: &Ship) -> Vec<String> {
    let mut parts = Vec::new();
    if let (Some(WeaponProfile::Advanced), Some(left)) =
        (ship.weapon_profile(), ship.effects.weapon_revert_in)
    {
        parts.push(format!("WEAPON {:.0}s", left.ceil()));
    }
    if ship.has_shield {
        parts.push(format!("SHIELD {:.0}s", ship.shield_time.ceil()));
    }
    if let Some(left) = ship.effects.speed_revert_in {
        parts.push(format!("SPEED {:.0}s", left.ceil()));
    }
    if ship.multi_shot_level > 0 {
        parts.push(format!("MULTI x{}", ship.multi_shot_level));
    }
    parts
}
