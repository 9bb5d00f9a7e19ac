//! Weapon profiles, fire-rate gating and volley construction

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::state::{Body, Bullet, BulletOrigin};
use crate::heading;

/// The three fixed weapon variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WeaponProfile {
    Basic,
    /// Power-up weapon, time-limited
    Advanced,
    Enemy,
}

impl WeaponProfile {
    /// Shots per second
    pub fn fire_rate(&self) -> f32 {
        match self {
            WeaponProfile::Basic => 3.0,
            WeaponProfile::Advanced => 5.0,
            WeaponProfile::Enemy => 1.5,
        }
    }

    pub fn bullet_speed(&self) -> f32 {
        match self {
            WeaponProfile::Basic => 400.0,
            WeaponProfile::Advanced => 500.0,
            WeaponProfile::Enemy => 350.0 / 3.0,
        }
    }

    pub fn bullet_size(&self) -> f32 {
        match self {
            WeaponProfile::Basic => 3.0,
            WeaponProfile::Advanced => 4.0,
            WeaponProfile::Enemy => 5.0,
        }
    }

    pub fn bullet_damage(&self) -> i32 {
        match self {
            WeaponProfile::Basic => 1,
            WeaponProfile::Advanced => 2,
            WeaponProfile::Enemy => 1,
        }
    }

    /// Seconds a bullet survives
    pub fn bullet_life(&self) -> f32 {
        match self {
            WeaponProfile::Basic => 2.0,
            WeaponProfile::Advanced | WeaponProfile::Enemy => 3.0,
        }
    }
}

/// A weapon owned by a single ship
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Weapon {
    pub profile: WeaponProfile,
    pub fire_rate: f32,
    pub bullet_speed: f32,
    pub bullet_size: f32,
    pub bullet_damage: i32,
    pub bullet_life: f32,
    /// Clock reading (ms) of the last shot; `None` until the first shot
    pub last_fire_ms: Option<f64>,
}

impl Weapon {
    pub fn from_profile(profile: WeaponProfile) -> Self {
        Self {
            profile,
            fire_rate: profile.fire_rate(),
            bullet_speed: profile.bullet_speed(),
            bullet_size: profile.bullet_size(),
            bullet_damage: profile.bullet_damage(),
            bullet_life: profile.bullet_life(),
            last_fire_ms: None,
        }
    }

    pub fn basic() -> Self {
        Self::from_profile(WeaponProfile::Basic)
    }

    pub fn advanced() -> Self {
        Self::from_profile(WeaponProfile::Advanced)
    }

    pub fn enemy() -> Self {
        Self::from_profile(WeaponProfile::Enemy)
    }

    /// Minimum gap between shots (ms)
    pub fn cooldown_ms(&self) -> f64 {
        if self.fire_rate > 0.0 {
            1000.0 / self.fire_rate as f64
        } else {
            f64::INFINITY
        }
    }

    pub fn can_fire(&self, now_ms: f64) -> bool {
        match self.last_fire_ms {
            None => self.fire_rate > 0.0,
            Some(last) => now_ms - last >= self.cooldown_ms(),
        }
    }

    /// Stamp the fire time and emit one bullet along `rotation`
    pub fn fire(&mut self, now_ms: f64, pos: Vec2, rotation: f32, origin: BulletOrigin) -> Bullet {
        self.last_fire_ms = Some(now_ms);
        self.make_bullet(pos, rotation, origin)
    }

    /// Build a bullet from this profile without touching the fire gate
    pub fn make_bullet(&self, pos: Vec2, rotation: f32, origin: BulletOrigin) -> Bullet {
        Bullet {
            body: Body::new(pos, heading(rotation) * self.bullet_speed, self.bullet_size, rotation),
            active: true,
            damage: self.bullet_damage,
            life_time: self.bullet_life,
            origin,
        }
    }
}

/// Extra-bullet angular offsets (degrees) for a multi-shot tier
pub fn multi_shot_offsets(level: u8) -> &'static [f32] {
    match level {
        0 => &[],
        1 => &[15.0],
        2 => &[-15.0, 15.0],
        3 => &[-15.0, 15.0, 30.0],
        4 => &[-30.0, -15.0, 15.0, 30.0],
        _ => &[-45.0, -30.0, -15.0, 15.0, 30.0, 45.0],
    }
}

/// Fire a gated volley: the primary shot plus any multi-shot spread.
/// Returns an empty vec when the weapon is cooling down.
pub fn fire_volley(
    weapon: &mut Weapon,
    now_ms: f64,
    pos: Vec2,
    rotation: f32,
    multi_shot_level: u8,
    origin: BulletOrigin,
) -> Vec<Bullet> {
    if !weapon.can_fire(now_ms) {
        return Vec::new();
    }
    let offsets = multi_shot_offsets(multi_shot_level);
    let mut volley = Vec::with_capacity(1 + offsets.len());
    volley.push(weapon.fire(now_ms, pos, rotation, origin));
    for deg in offsets {
        volley.push(weapon.make_bullet(pos, rotation + deg.to_radians(), origin));
    }
    volley
}
