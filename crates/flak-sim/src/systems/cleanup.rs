//! Cleanup system: drops missiles that are off-screen or fully exploded.

use flak_core::config::CullMargins;
use flak_core::types::{ProjectileId, Resolution};

use crate::store::ProjectileStore;

/// Remove garbage missiles. Uses a caller-owned buffer to avoid per-tick
/// allocation; on return it holds the ids removed this tick.
pub fn run(
    store: &mut ProjectileStore,
    resolution: Resolution,
    margins: &CullMargins,
    removed: &mut Vec<ProjectileId>,
) {
    removed.clear();
    store.remove_where(|missile| missile.is_garbage(resolution, margins), removed);

    if !removed.is_empty() {
        log::trace!("purged {} projectiles, {} live", removed.len(), store.len());
    }
}
