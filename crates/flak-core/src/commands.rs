//! Player commands sent from the input layer to the simulation.
//!
//! Commands are queued and processed at the next tick boundary.

use serde::{Deserialize, Serialize};

use crate::types::Vector2;

/// All possible player actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    /// Cursor moved: every launcher tracks this point.
    Aim { target: Vector2 },
    /// Fire the launcher at `launcher` (index in setup order) toward `target`.
    Fire { launcher: usize, target: Vector2 },
}
