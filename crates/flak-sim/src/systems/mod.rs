//! Per-tick systems run by the simulation driver.
//!
//! Systems are plain functions over the pieces of state they need; they
//! own nothing. New missiles always go into the [`crate::SpawnQueue`].

pub mod cleanup;
pub mod launchers;
pub mod missiles;
pub mod snapshot;
pub mod wave_spawner;
