//! Simulation constants and tuning defaults.
//!
//! Every value here seeds a field of [`crate::config::SimConfig`]; nothing in
//! the simulation reads these directly.

use crate::types::Rgb;

// --- Playfield ---

pub const DEFAULT_WIDTH: f64 = 800.0;
pub const DEFAULT_HEIGHT: f64 = 600.0;

/// Default RNG seed for the wave spawner.
pub const DEFAULT_SEED: u64 = 42;

// --- Culling ---

/// Distance past the left/right edge before an outbound missile is culled.
pub const CULL_SIDE_MARGIN: f64 = 200.0;

/// Distance above the top edge before a climbing missile is culled.
pub const CULL_TOP_MARGIN: f64 = 200.0;

// --- Explosions ---

/// Subtracted from the truncated explosion radius before eroding terrain,
/// so the crater stays inside the drawn fireball.
pub const EROSION_INSET: f64 = 1.0;

// --- Enemy missiles ---

pub const ENEMY_SPEED: f64 = 0.8;
pub const ENEMY_DRAW_RADIUS: f64 = 4.0;
pub const ENEMY_TRAIL_LENGTH: usize = 20;
pub const ENEMY_BLAST_RADIUS: f64 = 20.0;
pub const ENEMY_BLAST_TICKS: u32 = 100;
pub const ENEMY_COLOUR_FRONT: Rgb = Rgb(250, 250, 250);
pub const ENEMY_COLOUR_TAIL: Rgb = Rgb(200, 20, 100);
pub const ENEMY_BLAST_COLOUR_A: Rgb = Rgb(255, 255, 0);
pub const ENEMY_BLAST_COLOUR_B: Rgb = Rgb(255, 0, 0);

// --- Counter-missiles (player fire) ---

pub const COUNTER_DRAW_RADIUS: f64 = 2.0;
pub const COUNTER_TRAIL_LENGTH: usize = 8;
pub const COUNTER_TRAIL_RADIUS: f64 = 4.0;
pub const COUNTER_BLAST_RADIUS: f64 = 20.0;
pub const COUNTER_BLAST_TICKS: u32 = 100;
/// Ticks after launch before a counter-missile can collide.
/// Keeps it from detonating on the launcher's own footing.
pub const COUNTER_INVULNERABLE_TICKS: u32 = 6;
pub const COUNTER_BLAST_COLOUR_A: Rgb = Rgb(150, 180, 255);
pub const COUNTER_BLAST_COLOUR_B: Rgb = Rgb(255, 0, 0);

// --- Rubble (launcher self-destruct) ---

pub const RUBBLE_BLAST_TICKS: u32 = 30;
pub const RUBBLE_BLAST_COLOUR_A: Rgb = Rgb(100, 200, 150);
pub const RUBBLE_BLAST_COLOUR_B: Rgb = Rgb(20, 50, 20);

// --- Launchers ---

/// A launcher may fire once more than this many ticks have passed.
pub const LAUNCHER_COOLDOWN_TICKS: u32 = 8;

/// Missile launcher (fixed): counter-missile speed and structure size.
pub const MISSILE_LAUNCHER_SPEED: f64 = 3.6;
pub const MISSILE_LAUNCHER_LENGTH: f64 = 30.0;

/// Defence cannon (aimable): muzzle speed and barrel length.
pub const DEFENCE_CANNON_SPEED: f64 = 5.0;
pub const DEFENCE_CANNON_LENGTH: f64 = 12.0;

// --- Wave spawning ---

/// Tick of the first enemy wave (~1 second at 60 fps).
pub const WAVE_FIRST_TICK: u64 = 60;

/// Ticks between waves (~5 seconds at 60 fps).
pub const WAVE_INTERVAL_TICKS: u64 = 300;

pub const WAVE_BASE_MISSILES: u32 = 3;
pub const WAVE_MISSILES_PER_WAVE: u32 = 1;

// --- Standard layout ---

/// Depth of the flat ground strip in the standard layout.
pub const STANDARD_GROUND_DEPTH: f64 = 60.0;
