//! Destructible terrain for FLAK.
//!
//! The simulation only ever talks to terrain through the [`Terrain`]
//! trait. [`BitmapTerrain`] is the reference implementation used by the
//! headless engine and the tests.

pub use flak_core as core;

pub mod bitmap;

pub use bitmap::BitmapTerrain;

use flak_core::types::Vector2;

/// Query/mutation contract of the destructible landscape.
pub trait Terrain {
    /// Whether solid ground exists at `point`.
    fn is_supported(&self, point: Vector2) -> bool;

    /// Remove all ground within `radius` of `centre`.
    /// Clearing an already-empty area is a no-op.
    fn destroy_circle(&mut self, centre: Vector2, radius: f64);
}

#[cfg(test)]
mod tests;
