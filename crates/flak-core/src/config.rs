//! Tunable simulation configuration.
//!
//! `SimConfig::default()` reproduces the arcade defaults from
//! [`crate::constants`]. Every field can be overridden from JSON.

use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::enums::MissileKind;
use crate::types::{Resolution, Rgb};

/// Per-type missile parameters: size, trail, explosion, colours.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MissileProfile {
    pub kind: MissileKind,
    /// Radius of the missile head; also the starting explosion radius.
    pub draw_radius: f64,
    /// Maximum number of trail points kept.
    pub trail_length: usize,
    /// Width of the trail at its newest point.
    pub trail_radius: f64,
    /// Final explosion radius.
    pub blast_radius: f64,
    /// Explosion duration in ticks.
    pub blast_ticks: u32,
    /// Ticks after launch during which collisions are skipped.
    pub invulnerable_ticks: u32,
    /// Subtracted from the truncated explosion radius when eroding terrain.
    pub erosion_inset: f64,
    pub colour_front: Rgb,
    pub colour_tail: Rgb,
    pub blast_colour_a: Rgb,
    pub blast_colour_b: Rgb,
}

impl MissileProfile {
    /// Incoming enemy missile.
    pub fn enemy() -> Self {
        Self {
            kind: MissileKind::Enemy,
            draw_radius: ENEMY_DRAW_RADIUS,
            trail_length: ENEMY_TRAIL_LENGTH,
            trail_radius: ENEMY_DRAW_RADIUS,
            blast_radius: ENEMY_BLAST_RADIUS,
            blast_ticks: ENEMY_BLAST_TICKS,
            invulnerable_ticks: 0,
            erosion_inset: EROSION_INSET,
            colour_front: ENEMY_COLOUR_FRONT,
            colour_tail: ENEMY_COLOUR_TAIL,
            blast_colour_a: ENEMY_BLAST_COLOUR_A,
            blast_colour_b: ENEMY_BLAST_COLOUR_B,
        }
    }

    /// Player counter-missile, shared by both launcher variants.
    pub fn counter() -> Self {
        Self {
            kind: MissileKind::Counter,
            draw_radius: COUNTER_DRAW_RADIUS,
            trail_length: COUNTER_TRAIL_LENGTH,
            trail_radius: COUNTER_TRAIL_RADIUS,
            blast_radius: COUNTER_BLAST_RADIUS,
            blast_ticks: COUNTER_BLAST_TICKS,
            invulnerable_ticks: COUNTER_INVULNERABLE_TICKS,
            erosion_inset: EROSION_INSET,
            colour_front: ENEMY_COLOUR_FRONT,
            colour_tail: ENEMY_COLOUR_TAIL,
            blast_colour_a: COUNTER_BLAST_COLOUR_A,
            blast_colour_b: COUNTER_BLAST_COLOUR_B,
        }
    }

    /// Launcher self-destruct. The blast radius is replaced by the
    /// launcher's structure length when spawned.
    pub fn rubble() -> Self {
        Self {
            kind: MissileKind::Rubble,
            draw_radius: ENEMY_DRAW_RADIUS,
            trail_length: 0,
            trail_radius: ENEMY_DRAW_RADIUS,
            blast_radius: MISSILE_LAUNCHER_LENGTH,
            blast_ticks: RUBBLE_BLAST_TICKS,
            invulnerable_ticks: 0,
            erosion_inset: EROSION_INSET,
            colour_front: ENEMY_COLOUR_FRONT,
            colour_tail: ENEMY_COLOUR_TAIL,
            blast_colour_a: RUBBLE_BLAST_COLOUR_A,
            blast_colour_b: RUBBLE_BLAST_COLOUR_B,
        }
    }

    /// Whether missiles of this profile are player fire.
    pub fn is_cannon_fire(&self) -> bool {
        self.kind == MissileKind::Counter
    }

    fn validate(&self, name: &str) -> Result<(), String> {
        if self.draw_radius.is_nan() || self.draw_radius < 0.0 {
            return Err(format!("{name}: draw_radius must be non-negative"));
        }
        if self.blast_radius.is_nan() || self.blast_radius < self.draw_radius {
            return Err(format!(
                "{name}: blast_radius ({}) must not be smaller than draw_radius ({})",
                self.blast_radius, self.draw_radius
            ));
        }
        Ok(())
    }
}

/// Per-variant launcher parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LauncherProfile {
    /// Counter-missile launch speed (units per tick).
    pub speed: f64,
    /// Structure size; barrel length for the cannon and rubble blast radius for both.
    pub length: f64,
    /// Firing is allowed once more than this many ticks have passed.
    pub cooldown_ticks: u32,
}

impl LauncherProfile {
    pub fn missile_launcher() -> Self {
        Self {
            speed: MISSILE_LAUNCHER_SPEED,
            length: MISSILE_LAUNCHER_LENGTH,
            cooldown_ticks: LAUNCHER_COOLDOWN_TICKS,
        }
    }

    pub fn defence_cannon() -> Self {
        Self {
            speed: DEFENCE_CANNON_SPEED,
            length: DEFENCE_CANNON_LENGTH,
            cooldown_ticks: LAUNCHER_COOLDOWN_TICKS,
        }
    }
}

/// How far past the screen edges a missile may travel before it is culled.
/// The bottom margin is per-missile (`blast_radius + draw_radius`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CullMargins {
    pub side: f64,
    pub top: f64,
}

impl Default for CullMargins {
    fn default() -> Self {
        Self {
            side: CULL_SIDE_MARGIN,
            top: CULL_TOP_MARGIN,
        }
    }
}

/// Enemy wave schedule.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WaveConfig {
    pub first_tick: u64,
    pub interval_ticks: u64,
    /// Missiles in the first wave. Zero disables spawning.
    pub base_missiles: u32,
    /// Extra missiles added per subsequent wave.
    pub missiles_per_wave: u32,
    pub enemy_speed: f64,
}

impl Default for WaveConfig {
    fn default() -> Self {
        Self {
            first_tick: WAVE_FIRST_TICK,
            interval_ticks: WAVE_INTERVAL_TICKS,
            base_missiles: WAVE_BASE_MISSILES,
            missiles_per_wave: WAVE_MISSILES_PER_WAVE,
            enemy_speed: ENEMY_SPEED,
        }
    }
}

impl WaveConfig {
    /// No enemy waves; only player fire and launcher rubble.
    pub fn disabled() -> Self {
        Self {
            base_missiles: 0,
            missiles_per_wave: 0,
            ..Self::default()
        }
    }
}

/// Complete simulation configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// RNG seed. Same seed and commands = same simulation.
    pub seed: u64,
    pub resolution: Resolution,
    pub margins: CullMargins,
    pub enemy: MissileProfile,
    pub counter: MissileProfile,
    pub rubble: MissileProfile,
    pub missile_launcher: LauncherProfile,
    pub defence_cannon: LauncherProfile,
    pub waves: WaveConfig,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            resolution: Resolution::default(),
            margins: CullMargins::default(),
            enemy: MissileProfile::enemy(),
            counter: MissileProfile::counter(),
            rubble: MissileProfile::rubble(),
            missile_launcher: LauncherProfile::missile_launcher(),
            defence_cannon: LauncherProfile::defence_cannon(),
            waves: WaveConfig::default(),
        }
    }
}

impl SimConfig {
    /// Parse a configuration from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, String> {
        let config: SimConfig =
            serde_json::from_str(json).map_err(|e| format!("Failed to parse config: {e}"))?;
        config.validate()?;
        Ok(config)
    }

    /// Reject configurations the simulation cannot run sensibly.
    pub fn validate(&self) -> Result<(), String> {
        let Resolution { width, height } = self.resolution;
        if !width.is_finite() || !height.is_finite() || width <= 0.0 || height <= 0.0 {
            return Err(format!("resolution must be positive and finite, got {width}x{height}"));
        }
        if self.margins.side < 0.0 || self.margins.top < 0.0 {
            return Err("cull margins must be non-negative".to_string());
        }
        self.enemy.validate("enemy")?;
        self.counter.validate("counter")?;
        self.rubble.validate("rubble")?;
        Ok(())
    }
}
