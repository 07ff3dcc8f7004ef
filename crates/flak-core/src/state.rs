//! Frame snapshot: everything an external renderer needs to draw a tick.

use serde::{Deserialize, Serialize};

use crate::enums::{LauncherKind, MissileKind, MissilePhase};
use crate::events::SimEvent;
use crate::types::{ProjectileId, Resolution, Rgb, Vector2};

/// Complete visible state after a tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FrameSnapshot {
    pub tick: u64,
    pub resolution: Resolution,
    /// Live projectiles in stable insertion order (also the draw order).
    pub projectiles: Vec<ProjectileView>,
    pub launchers: Vec<LauncherView>,
    pub events: Vec<SimEvent>,
}

/// Render state of a single missile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectileView {
    pub id: ProjectileId,
    pub kind: MissileKind,
    pub phase: MissilePhase,
    pub position: Vector2,
    /// Spawn point, for the faint launch line.
    pub start: Vector2,
    pub target: Vector2,
    /// Oldest first.
    pub trail: Vec<Vector2>,
    pub draw_radius: f64,
    pub trail_radius: f64,
    pub colour_front: Rgb,
    pub colour_tail: Rgb,
    /// Explosion progress in [0, 1]; zero while flying.
    pub explosion_proportion: f64,
    /// Current fireball radius; zero while flying.
    pub explosion_radius: f64,
    /// Fireball colour at the current progress.
    pub blast_colour: Rgb,
}

/// Render state of a launcher.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LauncherView {
    pub kind: LauncherKind,
    pub centre: Vector2,
    pub destroyed: bool,
    pub can_fire: bool,
    /// Last aimed or fired-at point.
    pub target: Vector2,
    /// Barrel tip for the cannon; the centre for the fixed launcher.
    pub muzzle: Vector2,
}
