//! Builds the renderer-facing frame snapshot.

use flak_core::events::SimEvent;
use flak_core::state::FrameSnapshot;
use flak_core::types::Resolution;

use crate::launcher::Launcher;
use crate::store::ProjectileStore;

pub fn build_snapshot(
    tick: u64,
    resolution: Resolution,
    store: &ProjectileStore,
    launchers: &[Box<dyn Launcher>],
    events: Vec<SimEvent>,
) -> FrameSnapshot {
    FrameSnapshot {
        tick,
        resolution,
        projectiles: store.iter().map(|(id, missile)| missile.view(id)).collect(),
        launchers: launchers.iter().map(|launcher| launcher.view()).collect(),
        events,
    }
}
