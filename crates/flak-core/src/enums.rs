//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Which side fired a missile, and for what purpose.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MissileKind {
    /// Incoming enemy missile.
    #[default]
    Enemy,
    /// Player-fired counter-missile.
    Counter,
    /// Self-destruct detonation of a launcher that lost its footing.
    Rubble,
}

/// Missile lifecycle. Transitions only move forward.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum MissilePhase {
    #[default]
    Flying,
    Exploding,
    /// Explosion has run its course; removed on the next purge.
    Spent,
}

/// Launcher structural variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LauncherKind {
    /// Fixed launcher that fires straight at the clicked point.
    MissileLauncher,
    /// Aimable cannon that fires along its barrel.
    DefenceCannon,
}
