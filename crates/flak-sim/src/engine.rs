//! Simulation engine: the tick driver.
//!
//! `Simulation` owns the terrain, launchers, projectile store and spawn
//! queue, processes player commands, runs all systems in a fixed order and
//! produces `FrameSnapshot`s. Completely headless, enabling deterministic
//! testing.

use std::collections::VecDeque;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use flak_core::commands::PlayerCommand;
use flak_core::config::SimConfig;
use flak_core::events::SimEvent;
use flak_core::state::FrameSnapshot;
use flak_core::types::{ProjectileId, Vector2};
use flak_terrain::Terrain;

use crate::launcher::Launcher;
use crate::missile::Missile;
use crate::store::{ProjectileStore, SpawnQueue};
use crate::systems;
use crate::systems::wave_spawner::WaveSpawner;

/// The simulation. Generic over the terrain collaborator.
pub struct Simulation<T: Terrain> {
    config: SimConfig,
    terrain: T,
    launchers: Vec<Box<dyn Launcher>>,
    projectiles: ProjectileStore,
    spawns: SpawnQueue,
    command_queue: VecDeque<PlayerCommand>,
    spawner: WaveSpawner,
    rng: ChaCha8Rng,
    tick: u64,
    events: Vec<SimEvent>,
    purge_buffer: Vec<ProjectileId>,
}

impl<T: Terrain> Simulation<T> {
    /// Create a simulation with no launchers.
    pub fn new(config: SimConfig, terrain: T) -> Self {
        log::info!("simulation seed {}", config.seed);
        Self {
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            config,
            terrain,
            launchers: Vec::new(),
            projectiles: ProjectileStore::new(),
            spawns: SpawnQueue::new(),
            command_queue: VecDeque::new(),
            spawner: WaveSpawner::default(),
            tick: 0,
            events: Vec::new(),
            purge_buffer: Vec::new(),
        }
    }

    /// Add a launcher. Returns its index for `PlayerCommand::Fire`.
    pub fn add_launcher(&mut self, launcher: Box<dyn Launcher>) -> usize {
        self.launchers.push(launcher);
        self.launchers.len() - 1
    }

    /// Queue a missile to join the store at the end of the current tick.
    pub fn spawn(&mut self, missile: Missile) {
        self.spawns.push(missile);
    }

    /// Queue a player command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the simulation by one tick and return the resulting snapshot.
    pub fn tick(&mut self) -> FrameSnapshot {
        self.process_commands();
        self.run_systems();
        self.tick += 1;

        let events = std::mem::take(&mut self.events);
        systems::snapshot::build_snapshot(
            self.tick,
            self.config.resolution,
            &self.projectiles,
            &self.launchers,
            events,
        )
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// Number of ticks run so far.
    pub fn tick_count(&self) -> u64 {
        self.tick
    }

    pub fn terrain(&self) -> &T {
        &self.terrain
    }

    pub fn terrain_mut(&mut self) -> &mut T {
        &mut self.terrain
    }

    pub fn launchers(&self) -> &[Box<dyn Launcher>] {
        &self.launchers
    }

    pub fn projectiles(&self) -> &ProjectileStore {
        &self.projectiles
    }

    /// Ids purged during the most recent tick.
    pub fn last_purged(&self) -> &[ProjectileId] {
        &self.purge_buffer
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    fn handle_command(&mut self, command: PlayerCommand) {
        match command {
            PlayerCommand::Aim { target } => {
                for launcher in &mut self.launchers {
                    launcher.aim(target);
                }
            }
            PlayerCommand::Fire { launcher, target } => self.fire(launcher, target),
        }
    }

    fn fire(&mut self, index: usize, target: Vector2) {
        let Some(launcher) = self.launchers.get_mut(index) else {
            log::warn!("fire command for unknown launcher {index}");
            return;
        };
        if launcher.fire(target, &mut self.spawns) {
            log::debug!("launcher {index} fired at {target}");
            self.events.push(SimEvent::Launched {
                launcher: index,
                target,
            });
        }
    }

    /// Run all systems in order.
    fn run_systems(&mut self) {
        // 1. Enemy waves
        systems::wave_spawner::run(
            &mut self.spawner,
            &mut self.rng,
            &self.config,
            self.tick,
            &mut self.spawns,
            &mut self.events,
        );
        // 2. Launcher cooldowns + support
        systems::launchers::run(
            &mut self.launchers,
            &self.terrain,
            &mut self.spawns,
            &mut self.events,
        );
        // 3. Flight, explosions, terrain erosion, collisions
        systems::missiles::run(&mut self.projectiles, &mut self.terrain, &mut self.events);
        // 4. Garbage collection
        systems::cleanup::run(
            &mut self.projectiles,
            self.config.resolution,
            &self.config.margins,
            &mut self.purge_buffer,
        );
        // 5. Newly spawned missiles join after the pass
        self.projectiles.merge(&mut self.spawns);
    }
}
