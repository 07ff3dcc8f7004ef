//! Fundamental geometric and simulation types.

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// 2D vector in screen space (origin top-left, +y points down).
pub type Vector2 = DVec2;

/// Unit vector in the direction of `v`.
///
/// A zero-length or non-finite vector has no direction; the zero vector is
/// returned so callers can scale the result without dividing by zero.
pub fn normalize_or_zero(v: Vector2) -> Vector2 {
    let length = v.length();
    if length > 0.0 && length.is_finite() {
        v / length
    } else {
        Vector2::ZERO
    }
}

/// Playfield size in screen units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Resolution {
    pub width: f64,
    pub height: f64,
}

impl Resolution {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

impl Default for Resolution {
    fn default() -> Self {
        Self::new(
            crate::constants::DEFAULT_WIDTH,
            crate::constants::DEFAULT_HEIGHT,
        )
    }
}

/// 8-bit RGB colour handed to the renderer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// Linear gradient from `self` (t = 0) to `other` (t = 1). `t` is clamped.
    pub fn lerp(self, other: Rgb, t: f64) -> Rgb {
        let t = if t.is_finite() { t.clamp(0.0, 1.0) } else { 0.0 };
        let mix = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * t).round() as u8;
        Rgb(
            mix(self.0, other.0),
            mix(self.1, other.1),
            mix(self.2, other.2),
        )
    }
}

/// Stable handle to a projectile in the store.
///
/// The generation distinguishes a reused slot from the projectile that
/// previously occupied it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProjectileId {
    pub index: u32,
    pub generation: u32,
}

impl ProjectileId {
    pub fn new(index: u32, generation: u32) -> Self {
        Self { index, generation }
    }
}

impl std::fmt::Display for ProjectileId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "P{}g{}", self.index, self.generation)
    }
}
