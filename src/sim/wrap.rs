//! Toroidal screen wrap
//!
//! Two policies: ships teleport when their center leaves the field,
//! asteroids and power-ups only once their whole bounding circle has left.
//! A zero-sized axis pins the coordinate to 0.

use glam::Vec2;

/// Center-crossing wrap: result lies in `[0, extent)`
#[inline]
fn wrap_center_axis(v: f32, extent: f32) -> f32 {
    if extent <= 0.0 || !v.is_finite() {
        return 0.0;
    }
    let r = v.rem_euclid(extent);
    // rem_euclid can round up to `extent` for tiny negatives
    if r >= extent { 0.0 } else { r }
}

/// Bounding-circle wrap: teleport just outside the opposite edge
#[inline]
fn wrap_bounding_axis(v: f32, size: f32, extent: f32) -> f32 {
    if extent <= 0.0 || !v.is_finite() {
        return 0.0;
    }
    if v < -size {
        extent + size
    } else if v > extent + size {
        -size
    } else {
        v
    }
}

/// Ships and enemy ships
pub fn wrap_center(pos: &mut Vec2, width: f32, height: f32) {
    pos.x = wrap_center_axis(pos.x, width);
    pos.y = wrap_center_axis(pos.y, height);
}

/// Asteroids and power-ups
pub fn wrap_bounding(pos: &mut Vec2, size: f32, width: f32, height: f32) {
    pos.x = wrap_bounding_axis(pos.x, size, width);
    pos.y = wrap_bounding_axis(pos.y, size, height);
}
