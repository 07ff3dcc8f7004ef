//! Standard playfield: flat ground with two launchers flanking a cannon.

use flak_core::config::SimConfig;
use flak_core::constants::STANDARD_GROUND_DEPTH;
use flak_core::types::Vector2;
use flak_terrain::BitmapTerrain;

use crate::engine::Simulation;
use crate::launcher::{DefenceCannon, Launcher, MissileLauncher};

/// Surface row of the standard ground strip.
pub fn ground_level(config: &SimConfig) -> f64 {
    (config.resolution.height - STANDARD_GROUND_DEPTH).max(0.0).floor()
}

/// Launchers at 15% and 85% of the width, cannon in the middle, all
/// standing on the surface.
pub fn standard_battery(config: &SimConfig) -> Vec<Box<dyn Launcher>> {
    let ground = ground_level(config);
    let width = config.resolution.width;
    vec![
        Box::new(MissileLauncher::new(Vector2::new(width * 0.15, ground), config)),
        Box::new(DefenceCannon::new(Vector2::new(width * 0.5, ground), config)),
        Box::new(MissileLauncher::new(Vector2::new(width * 0.85, ground), config)),
    ]
}

/// Flat bitmap terrain the size of the playfield.
pub fn standard_terrain(config: &SimConfig) -> BitmapTerrain {
    let width = config.resolution.width.max(0.0).ceil() as usize;
    let height = config.resolution.height.max(0.0).ceil() as usize;
    BitmapTerrain::flat(width, height, ground_level(config) as usize)
}

/// Ready-to-run simulation with the standard terrain and battery.
pub fn standard_simulation(config: SimConfig) -> Simulation<BitmapTerrain> {
    let terrain = standard_terrain(&config);
    let battery = standard_battery(&config);
    let mut sim = Simulation::new(config, terrain);
    for launcher in battery {
        sim.add_launcher(launcher);
    }
    sim
}
