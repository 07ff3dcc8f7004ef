//! Events emitted by the simulation for audio and UI feedback.

use serde::{Deserialize, Serialize};

use crate::enums::MissileKind;
use crate::types::{ProjectileId, Vector2};

/// Something noteworthy that happened during a tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SimEvent {
    /// A launcher fired a counter-missile.
    Launched { launcher: usize, target: Vector2 },
    /// A missile began exploding.
    Detonated {
        id: ProjectileId,
        kind: MissileKind,
        position: Vector2,
    },
    /// A launcher lost its footing and self-destructed.
    LauncherDestroyed { launcher: usize, position: Vector2 },
    /// An enemy wave entered the playfield.
    WaveSpawned { wave: u32, missiles: u32 },
}
