//! Simulation engine for FLAK.
//!
//! Projectile kinematics, missile explosions, launcher fire control and the
//! tick driver that sequences them. Completely headless: the renderer
//! consumes [`flak_core::state::FrameSnapshot`]s and never touches
//! simulation state directly.

pub mod collision;
pub mod engine;
pub mod launcher;
pub mod missile;
pub mod projectile;
pub mod store;
pub mod systems;
pub mod world_setup;

pub use flak_core as core;
pub use flak_terrain as terrain;

pub use engine::Simulation;
pub use launcher::{DefenceCannon, Launcher, MissileLauncher};
pub use missile::Missile;
pub use projectile::Projectile;
pub use store::{ProjectileStore, SpawnQueue};
