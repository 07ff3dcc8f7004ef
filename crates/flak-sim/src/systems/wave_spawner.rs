//! Wave spawning system: sends enemy missiles in from the top edge.

use rand::Rng;
use rand_chacha::ChaCha8Rng;

use flak_core::config::SimConfig;
use flak_core::events::SimEvent;
use flak_core::types::Vector2;

use crate::missile::Missile;
use crate::store::SpawnQueue;

/// Progress through the endless wave schedule.
#[derive(Debug, Clone, Default)]
pub struct WaveSpawner {
    /// Number of waves already launched.
    pub waves_spawned: u32,
}

impl WaveSpawner {
    /// Tick at which the next wave is due.
    pub fn next_wave_tick(&self, config: &SimConfig) -> u64 {
        config.waves.first_tick + config.waves.interval_ticks * self.waves_spawned as u64
    }

    /// Missiles in the next wave.
    pub fn next_wave_size(&self, config: &SimConfig) -> u32 {
        config
            .waves
            .base_missiles
            .saturating_add(config.waves.missiles_per_wave.saturating_mul(self.waves_spawned))
    }
}

/// Spawn the next wave if it is due. Each missile leaves a random point on
/// the top edge for a random point on the bottom edge.
pub fn run(
    spawner: &mut WaveSpawner,
    rng: &mut ChaCha8Rng,
    config: &SimConfig,
    current_tick: u64,
    spawns: &mut SpawnQueue,
    events: &mut Vec<SimEvent>,
) {
    if current_tick < spawner.next_wave_tick(config) {
        return;
    }

    let count = spawner.next_wave_size(config);
    let width = config.resolution.width;
    if count == 0 || !width.is_finite() || width <= 0.0 {
        return;
    }

    for _ in 0..count {
        let origin = Vector2::new(rng.gen_range(0.0..width), 0.0);
        let target = Vector2::new(rng.gen_range(0.0..width), config.resolution.height);
        spawns.push(Missile::launch(
            origin,
            target,
            config.waves.enemy_speed,
            &config.enemy,
        ));
    }

    spawner.waves_spawned += 1;
    log::debug!("wave {} launched: {count} missiles", spawner.waves_spawned);
    events.push(SimEvent::WaveSpawned {
        wave: spawner.waves_spawned,
        missiles: count,
    });
}
