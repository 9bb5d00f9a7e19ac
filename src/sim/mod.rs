//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Frame deltas come from the caller, clamped
//! - Seeded RNG only
//! - Stable iteration order (collection order)
//! - No rendering or platform dependencies

pub mod autopilot;
pub mod collision;
pub mod effects;
pub mod entity;
pub mod spawn;
pub mod state;
pub mod steering;
pub mod tick;
pub mod weapon;
pub mod wrap;

pub use effects::EffectTimers;
pub use entity::{EntityMut, EntityRef, UpdateContext, update};
pub use state::{
    Asteroid, Body, Bullet, BulletOrigin, EnemyShip, EnemyTint, GameEvent, GameState, PowerUp,
    PowerUpKind, Ship, WorldSnapshot,
};
pub use steering::EnemyBehavior;
pub use tick::{Action, FrameInput, tick};
pub use weapon::{Weapon, WeaponProfile};
