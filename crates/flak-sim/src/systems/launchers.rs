//! Launcher upkeep: cooldowns and structural support.

use flak_core::events::SimEvent;
use flak_terrain::Terrain;

use crate::launcher::Launcher;
use crate::store::SpawnQueue;

/// Tick every launcher in setup order. Launchers whose footing has been
/// blown away self-destruct here, queueing a rubble explosion.
pub fn run(
    launchers: &mut [Box<dyn Launcher>],
    terrain: &dyn Terrain,
    spawns: &mut SpawnQueue,
    events: &mut Vec<SimEvent>,
) {
    for (index, launcher) in launchers.iter_mut().enumerate() {
        if launcher.tick(terrain, spawns) {
            let position = launcher.centre();
            log::debug!("launcher {index} lost support at {position}");
            events.push(SimEvent::LauncherDestroyed {
                launcher: index,
                position,
            });
        }
    }
}
