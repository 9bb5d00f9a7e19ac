//! Game state and core simulation types
//!
//! Every entity is a plain record owned by exactly one collection on
//! [`GameState`]. Behavior lives in free functions elsewhere in `sim`.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::effects::EffectTimers;
use super::spawn;
use super::steering::EnemyBehavior;
use super::weapon::{Weapon, WeaponProfile};
use crate::consts::*;
use crate::tuning::{ShipTuning, Tuning};

/// Kinematic core shared by every simulated body
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Body {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Collision radius and render scale
    pub size: f32,
    /// Heading (radians, 0 = +x)
    pub rotation: f32,
}

impl Body {
    pub fn new(pos: Vec2, vel: Vec2, size: f32, rotation: f32) -> Self {
        Self {
            pos,
            vel,
            size,
            rotation,
        }
    }
}

/// The player's ship
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ship {
    pub body: Body,
    /// Current thrust magnitude, ramps toward `max_thrust`
    pub thrust: f32,
    pub max_thrust: f32,
    /// Max thrust without any SPEED boost
    pub base_max_thrust: f32,
    pub rotation_speed: f32,
    pub friction: f32,
    pub is_thrusting: bool,
    pub lives: u32,
    pub is_invulnerable: bool,
    pub invulnerability_time: f32,
    pub weapon: Option<Weapon>,
    pub has_shield: bool,
    pub shield_time: f32,
    pub multi_shot_level: u8,
    /// Pending reversions of timed power-ups
    pub effects: EffectTimers,
}

impl Ship {
    pub fn new(pos: Vec2, tuning: &ShipTuning) -> Self {
        Self {
            // Nose up
            body: Body::new(pos, Vec2::ZERO, SHIP_SIZE, -std::f32::consts::FRAC_PI_2),
            thrust: 0.0,
            max_thrust: tuning.max_thrust,
            base_max_thrust: tuning.max_thrust,
            rotation_speed: tuning.rotation_speed,
            friction: tuning.friction,
            is_thrusting: false,
            lives: tuning.starting_lives,
            is_invulnerable: false,
            invulnerability_time: 0.0,
            weapon: Some(Weapon::basic()),
            has_shield: false,
            shield_time: 0.0,
            multi_shot_level: 0,
            effects: EffectTimers::default(),
        }
    }

    /// Point bullets leave from
    pub fn nose(&self) -> Vec2 {
        self.body.pos + crate::heading(self.body.rotation) * self.body.size
    }

    pub fn weapon_profile(&self) -> Option<WeaponProfile> {
        self.weapon.as_ref().map(|w| w.profile)
    }

    /// Either protection flag blocks contact damage
    pub fn is_protected(&self) -> bool {
        self.is_invulnerable || self.has_shield
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Asteroid {
    pub body: Body,
    pub health: i32,
    /// Spin rate (radians/s), purely visual
    pub spin: f32,
    /// Radial multipliers for the irregular outline
    pub outline: [f32; ASTEROID_VERTICES],
}

impl Asteroid {
    pub fn is_destroyed(&self) -> bool {
        self.health <= 0
    }
}

/// Enemy hull color, picked at spawn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EnemyTint {
    Red,
    Orange,
    Magenta,
    Violet,
}

impl EnemyTint {
    pub const ALL: [EnemyTint; 4] = [
        EnemyTint::Red,
        EnemyTint::Orange,
        EnemyTint::Magenta,
        EnemyTint::Violet,
    ];
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnemyShip {
    pub body: Body,
    pub health: i32,
    pub behavior: EnemyBehavior,
    pub weapon: Weapon,
    pub detection_radius: f32,
    pub fire_radius: f32,
    pub rotation_speed: f32,
    /// Forward speed (pixels/s); velocity holds `speed * dt` per frame
    pub speed: f32,
    /// Wander target, used by PATROL only
    pub target: Option<Vec2>,
    /// Seconds since the patrol target last changed
    pub direction_timer: f32,
    pub direction_change_interval: f32,
    pub tint: EnemyTint,
}

impl EnemyShip {
    pub fn is_destroyed(&self) -> bool {
        self.health <= 0
    }
}

/// Who fired a bullet; decides which collision rules apply
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BulletOrigin {
    Player,
    Enemy,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bullet {
    pub body: Body,
    pub active: bool,
    pub damage: i32,
    /// Seconds left before the bullet fizzles
    pub life_time: f32,
    pub origin: BulletOrigin,
}

/// Power-up types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PowerUpKind {
    Weapon,
    Shield,
    Life,
    Speed,
    MultiShot,
}

impl PowerUpKind {
    pub const ALL: [PowerUpKind; 5] = [
        PowerUpKind::Weapon,
        PowerUpKind::Shield,
        PowerUpKind::Life,
        PowerUpKind::Speed,
        PowerUpKind::MultiShot,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            PowerUpKind::Weapon => "WEAPON",
            PowerUpKind::Shield => "SHIELD",
            PowerUpKind::Life => "LIFE",
            PowerUpKind::Speed => "SPEED",
            PowerUpKind::MultiShot => "MULTISHOT",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PowerUp {
    pub body: Body,
    pub kind: PowerUpKind,
    pub active: bool,
    /// Effect length once collected (seconds); unused by LIFE
    pub duration: f32,
}

/// Notable things that happened during the last frame
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    AsteroidDestroyed { pos: Vec2 },
    EnemyDestroyed { pos: Vec2 },
    ShipHit { lives_left: u32 },
    ShieldAbsorbed,
    PowerUpCollected(PowerUpKind),
    LevelUp(u32),
    GameOver,
}

/// Complete simulation state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub rng: Pcg32,
    pub tuning: Tuning,
    /// Play-field extent
    pub width: f32,
    pub height: f32,
    /// Simulation clock (milliseconds), sum of integrated frame deltas
    pub clock_ms: f64,
    pub frame: u64,
    pub score: u64,
    pub level: u32,
    pub ship: Ship,
    pub asteroids: Vec<Asteroid>,
    pub enemies: Vec<EnemyShip>,
    /// Player and enemy bullets, told apart by `origin`
    pub bullets: Vec<Bullet>,
    pub power_ups: Vec<PowerUp>,
    /// Countdown to the next timed enemy spawn (seconds)
    pub enemy_spawn_timer: f32,
    /// Countdown to the next timed power-up spawn (seconds)
    pub power_up_spawn_timer: f32,
    /// Events raised by the most recent tick
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Fresh playthrough: ship centered, initial asteroids and enemies placed
    pub fn new(seed: u64, width: f32, height: f32, tuning: Tuning) -> Self {
        let width = sanitize_extent(width);
        let height = sanitize_extent(height);
        let ship = Ship::new(Vec2::new(width / 2.0, height / 2.0), &tuning.ship);

        let mut state = Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            enemy_spawn_timer: spawn::enemy_spawn_interval(1, &tuning),
            power_up_spawn_timer: tuning.power_ups.spawn_interval,
            tuning,
            width,
            height,
            clock_ms: 0.0,
            frame: 0,
            score: 0,
            level: 1,
            ship,
            asteroids: Vec::new(),
            enemies: Vec::new(),
            bullets: Vec::new(),
            power_ups: Vec::new(),
            events: Vec::new(),
        };

        let asteroids = state.tuning.asteroids.initial_count;
        spawn::spawn_asteroids(&mut state, asteroids);
        for _ in 0..state.tuning.enemies.initial_count {
            spawn::spawn_enemy(&mut state);
        }

        log::info!(
            "New game (seed {}): {}x{}, {} asteroids, {} enemies",
            seed,
            width,
            height,
            state.asteroids.len(),
            state.enemies.len()
        );
        state
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    pub fn is_game_over(&self) -> bool {
        self.ship.lives == 0
    }

    pub fn player_bullets(&self) -> impl Iterator<Item = &Bullet> {
        self.bullets.iter().filter(|b| b.origin == BulletOrigin::Player)
    }

    pub fn enemy_bullets(&self) -> impl Iterator<Item = &Bullet> {
        self.bullets.iter().filter(|b| b.origin == BulletOrigin::Enemy)
    }

    /// Summary for logging and debugging tools
    pub fn snapshot(&self) -> WorldSnapshot {
        WorldSnapshot {
            frame: self.frame,
            clock_ms: self.clock_ms,
            score: self.score,
            level: self.level,
            lives: self.ship.lives,
            is_game_over: self.is_game_over(),
            ship: ShipSnapshot {
                x: self.ship.body.pos.x,
                y: self.ship.body.pos.y,
                vx: self.ship.body.vel.x,
                vy: self.ship.body.vel.y,
                rotation: self.ship.body.rotation,
                invulnerable: self.ship.is_invulnerable,
                shielded: self.ship.has_shield,
                weapon: self.ship.weapon_profile(),
                multi_shot_level: self.ship.multi_shot_level,
            },
            asteroids: self.asteroids.len(),
            enemies: self.enemies.len(),
            player_bullets: self.player_bullets().count(),
            enemy_bullets: self.enemy_bullets().count(),
            power_ups: self.power_ups.len(),
        }
    }
}

/// Clamp a canvas extent to a finite, non-negative value
pub fn sanitize_extent(v: f32) -> f32 {
    if v.is_finite() { v.max(0.0) } else { 0.0 }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShipSnapshot {
    pub x: f32,
    pub y: f32,
    pub vx: f32,
    pub vy: f32,
    pub rotation: f32,
    pub invulnerable: bool,
    pub shielded: bool,
    pub weapon: Option<WeaponProfile>,
    pub multi_shot_level: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorldSnapshot {
    pub frame: u64,
    pub clock_ms: f64,
    pub score: u64,
    pub level: u32,
    pub lives: u32,
    pub is_game_over: bool,
    pub ship: ShipSnapshot,
    pub asteroids: usize,
    pub enemies: usize,
    pub player_bullets: usize,
    pub enemy_bullets: usize,
    pub power_ups: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_game_layout() {
        let state = GameState::new(7, 800.0, 600.0, Tuning::default());
        assert_eq!(state.ship.body.pos, Vec2::new(400.0, 300.0));
        assert_eq!(state.asteroids.len(), 5);
        assert_eq!(state.enemies.len(), 1);
        assert_eq!(state.ship.lives, 3);
        assert_eq!(state.level, 1);
        assert!(!state.is_game_over());
        assert_eq!(state.ship.weapon_profile(), Some(WeaponProfile::Basic));
    }

    #[test]
    fn test_initial_spawns_respect_safe_radius() {
        let state = GameState::new(99, 800.0, 600.0, Tuning::default());
        let center = state.center();
        for a in &state.asteroids {
            assert!(a.body.pos.distance(center) >= 100.0);
            assert_eq!(a.health, 2);
        }
        for e in &state.enemies {
            assert!(e.body.pos.distance(center) >= 200.0);
        }
    }

    #[test]
    fn test_same_seed_same_world() {
        let a = GameState::new(1234, 800.0, 600.0, Tuning::default());
        let b = GameState::new(1234, 800.0, 600.0, Tuning::default());
        for (x, y) in a.asteroids.iter().zip(&b.asteroids) {
            assert_eq!(x.body, y.body);
        }
    }

    #[test]
    fn test_degenerate_canvas_is_clamped() {
        let state = GameState::new(1, -50.0, f32::NAN, Tuning::default());
        assert_eq!(state.width, 0.0);
        assert_eq!(state.height, 0.0);
        assert_eq!(state.asteroids.len(), 5);
    }

    #[test]
    fn test_snapshot_counts() {
        let state = GameState::new(3, 800.0, 600.0, Tuning::default());
        let snap = state.snapshot();
        assert_eq!(snap.asteroids, 5);
        assert_eq!(snap.enemies, 1);
        assert_eq!(snap.lives, 3);
        assert!(!snap.is_game_over);
    }
}
