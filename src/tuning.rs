//! Game balance tuning
//!
//! Every gameplay number that is not a fixed weapon profile lives here and
//! can be overridden from a JSON file. Defaults reproduce the stock game.

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// Player ship handling and survival
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShipTuning {
    /// Top thrust (pixels/s²); ramped toward at `max_thrust` per second
    pub max_thrust: f32,
    /// Turn rate (radians/s)
    pub rotation_speed: f32,
    /// Per-frame multiplicative velocity/thrust decay
    pub friction: f32,
    pub starting_lives: u32,
    /// Post-hit grace period (seconds)
    pub invulnerability_secs: f32,
}

impl Default for ShipTuning {
    fn default() -> Self {
        Self {
            max_thrust: 200.0,
            rotation_speed: 4.0,
            friction: 0.99,
            starting_lives: 3,
            invulnerability_secs: 3.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AsteroidTuning {
    pub initial_count: u32,
    /// Minimum spawn distance from the ship
    pub safe_radius: f32,
    pub min_size: f32,
    pub max_size: f32,
    /// Each velocity component is drawn from [-max_speed, max_speed]
    pub max_speed: f32,
    pub health: i32,
    /// Replenish when fewer than this many remain
    pub replenish_below: u32,
    pub replenish_count: u32,
}

impl Default for AsteroidTuning {
    fn default() -> Self {
        Self {
            initial_count: 5,
            safe_radius: 100.0,
            min_size: 20.0,
            max_size: 40.0,
            max_speed: 25.0,
            health: 2,
            replenish_below: 3,
            replenish_count: 2,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnemyTuning {
    pub initial_count: u32,
    pub safe_radius: f32,
    pub health: i32,
    /// Forward speed (pixels/s), folded into a per-frame displacement
    pub speed: f32,
    pub rotation_speed: f32,
    pub detection_radius: f32,
    pub fire_radius: f32,
    /// Spawn interval is `max(base - level * per_level, min)` seconds
    pub base_spawn_interval: f32,
    pub spawn_interval_per_level: f32,
    pub min_spawn_interval: f32,
    /// Active enemies never exceed `base_cap + level` through timed spawns
    pub base_cap: u32,
}

impl Default for EnemyTuning {
    fn default() -> Self {
        Self {
            initial_count: 1,
            safe_radius: 200.0,
            health: 2,
            speed: 100.0,
            rotation_speed: 2.0,
            detection_radius: 300.0,
            fire_radius: 250.0,
            base_spawn_interval: 15.0,
            spawn_interval_per_level: 0.5,
            min_spawn_interval: 5.0,
            base_cap: 5,
        }
    }
}

/// Relative draw weights for power-up kinds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PowerUpWeights {
    pub weapon: u32,
    pub shield: u32,
    pub life: u32,
    pub speed: u32,
    pub multi_shot: u32,
}

impl Default for PowerUpWeights {
    fn default() -> Self {
        Self {
            weapon: 30,
            shield: 30,
            life: 15,
            speed: 20,
            multi_shot: 5,
        }
    }
}

impl PowerUpWeights {
    /// Sum of all weights, widened so no combination of `u32` weights overflows
    pub fn total(&self) -> u64 {
        [self.weapon, self.shield, self.life, self.speed, self.multi_shot]
            .iter()
            .map(|&w| u64::from(w))
            .sum()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PowerUpTuning {
    /// Seconds between timed spawns
    pub spawn_interval: f32,
    pub max_concurrent: u32,
    /// Effect duration once collected (seconds)
    pub duration: f32,
    pub asteroid_drop_chance: f64,
    pub enemy_drop_chance: f64,
    pub safe_radius: f32,
    /// Idle drift, per velocity component
    pub max_drift_speed: f32,
    /// Multiplier applied to the ship's max thrust by SPEED
    pub speed_boost: f32,
    pub weights: PowerUpWeights,
}

impl Default for PowerUpTuning {
    fn default() -> Self {
        Self {
            spawn_interval: 10.0,
            max_concurrent: 3,
            duration: 10.0,
            asteroid_drop_chance: 0.2,
            enemy_drop_chance: 0.3,
            safe_radius: 100.0,
            max_drift_speed: 20.0,
            speed_boost: 1.5,
            weights: PowerUpWeights::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringTuning {
    pub asteroid: u64,
    pub enemy: u64,
    /// MULTISHOT awards this times the new tier
    pub multi_shot_per_level: u64,
    /// Level advances once score reaches `level * level_step`
    pub level_step: u64,
}

impl Default for ScoringTuning {
    fn default() -> Self {
        Self {
            asteroid: 100,
            enemy: 250,
            multi_shot_per_level: 50,
            level_step: 1000,
        }
    }
}

/// Complete balance table
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub ship: ShipTuning,
    pub asteroids: AsteroidTuning,
    pub enemies: EnemyTuning,
    pub power_ups: PowerUpTuning,
    pub scoring: ScoringTuning,
}

/// Failure to load a tuning file
#[derive(Debug)]
pub enum TuningError {
    Io(std::io::Error),
    Parse(serde_json::Error),
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
}

impl fmt::Display for TuningError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "failed to read tuning file: {e}"),
            Self::Parse(e) => write!(f, "malformed tuning JSON: {e}"),
            Self::Invalid { field, reason } => write!(f, "invalid tuning `{field}`: {reason}"),
        }
    }
}

impl std::error::Error for TuningError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Parse(e) => Some(e),
            Self::Invalid { .. } => None,
        }
    }
}

impl From<std::io::Error> for TuningError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<serde_json::Error> for TuningError {
    fn from(e: serde_json::Error) -> Self {
        Self::Parse(e)
    }
}

fn non_negative(field: &'static str, value: f32) -> Result<(), TuningError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(TuningError::Invalid {
            field,
            reason: "must be finite and non-negative",
        })
    }
}

fn probability(field: &'static str, value: f64) -> Result<(), TuningError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(TuningError::Invalid {
            field,
            reason: "must lie in [0, 1]",
        })
    }
}

impl Tuning {
    /// Parse and validate a JSON tuning document (missing fields take defaults)
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Load from a JSON file on disk
    pub fn load(path: impl AsRef<Path>) -> Result<Self, TuningError> {
        let json = std::fs::read_to_string(path.as_ref())?;
        let tuning = Self::from_json(&json)?;
        log::info!("Loaded tuning from {}", path.as_ref().display());
        Ok(tuning)
    }

    pub fn validate(&self) -> Result<(), TuningError> {
        non_negative("ship.max_thrust", self.ship.max_thrust)?;
        non_negative("ship.rotation_speed", self.ship.rotation_speed)?;
        non_negative("ship.invulnerability_secs", self.ship.invulnerability_secs)?;
        if !(0.0..=1.0).contains(&self.ship.friction) {
            return Err(TuningError::Invalid {
                field: "ship.friction",
                reason: "must lie in [0, 1]",
            });
        }

        non_negative("asteroids.safe_radius", self.asteroids.safe_radius)?;
        non_negative("asteroids.min_size", self.asteroids.min_size)?;
        non_negative("asteroids.max_speed", self.asteroids.max_speed)?;
        non_negative("asteroids.max_size", self.asteroids.max_size)?;
        if self.asteroids.max_size < self.asteroids.min_size {
            return Err(TuningError::Invalid {
                field: "asteroids.max_size",
                reason: "must not be below min_size",
            });
        }

        non_negative("enemies.safe_radius", self.enemies.safe_radius)?;
        non_negative("enemies.speed", self.enemies.speed)?;
        non_negative("enemies.detection_radius", self.enemies.detection_radius)?;
        non_negative("enemies.fire_radius", self.enemies.fire_radius)?;
        non_negative("enemies.min_spawn_interval", self.enemies.min_spawn_interval)?;

        non_negative("power_ups.spawn_interval", self.power_ups.spawn_interval)?;
        non_negative("power_ups.duration", self.power_ups.duration)?;
        non_negative("power_ups.safe_radius", self.power_ups.safe_radius)?;
        probability("power_ups.asteroid_drop_chance", self.power_ups.asteroid_drop_chance)?;
        probability("power_ups.enemy_drop_chance", self.power_ups.enemy_drop_chance)?;
        let total = self.power_ups.weights.total();
        if total == 0 {
            return Err(TuningError::Invalid {
                field: "power_ups.weights",
                reason: "at least one weight must be positive",
            });
        }
        if total > u64::from(u32::MAX) {
            return Err(TuningError::Invalid {
                field: "power_ups.weights",
                reason: "weights must sum to at most 4294967295",
            });
        }
        Ok(())
    }
}
