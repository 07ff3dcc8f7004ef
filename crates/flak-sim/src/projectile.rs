//! Projectile: the kinematic core shared by every moving body.

use flak_core::config::CullMargins;
use flak_core::types::{Resolution, Vector2};

/// Position, velocity and size. Moves by exactly `velocity` each tick.
#[derive(Debug, Clone, PartialEq)]
pub struct Projectile {
    pub position: Vector2,
    pub velocity: Vector2,
    pub radius: f64,
}

impl Projectile {
    pub fn new(position: Vector2, velocity: Vector2, radius: f64) -> Self {
        Self {
            position,
            velocity,
            radius,
        }
    }

    /// Euler step: one tick of motion.
    pub fn advance(&mut self) {
        self.position += self.velocity;
    }

    /// Whether this projectile has left the playfield for good.
    ///
    /// Below the bottom edge by more than `bottom_margin` is always gone.
    /// Past a side or the top edge only counts while still heading further
    /// out, so a missile arcing back into view is kept.
    pub fn is_off_screen(
        &self,
        resolution: Resolution,
        margins: &CullMargins,
        bottom_margin: f64,
    ) -> bool {
        let p = self.position;
        let v = self.velocity;

        p.y > resolution.height + bottom_margin
            || (p.x > resolution.width + margins.side && v.x > 0.0)
            || (p.x < -margins.side && v.x < 0.0)
            || (p.y < -margins.top && v.y < 0.0)
    }
}
