//! Collision rules for flying missiles.

use flak_core::types::Vector2;
use flak_terrain::Terrain;

use crate::missile::Missile;
use crate::store::ProjectileStore;

/// Decides whether a flying, vulnerable missile has hit something this tick.
pub trait CollisionSystem {
    fn hits(&self, missile: &Missile, terrain: &dyn Terrain) -> bool;
}

/// An explosion as seen by other missiles.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Blast {
    pub position: Vector2,
    pub radius: f64,
}

/// Explosions active at the start of the projectile pass.
///
/// Rules, in order:
/// 1. touching solid ground detonates anything;
/// 2. cannon fire detonates on reaching its target, or once it starts
///    moving away from it;
/// 3. enemy missiles inside any active blast detonate (chain reaction).
///    Cannon fire is not set off by other explosions.
#[derive(Debug, Clone, Default)]
pub struct BlastField {
    blasts: Vec<Blast>,
}

impl BlastField {
    pub fn new(blasts: Vec<Blast>) -> Self {
        Self { blasts }
    }

    /// Snapshot of every exploding missile in the store.
    pub fn from_store(store: &ProjectileStore) -> Self {
        let blasts = store
            .iter()
            .filter(|(_, missile)| missile.is_exploding())
            .map(|(_, missile)| Blast {
                position: missile.position(),
                radius: missile.explosion_radius(),
            })
            .collect();
        Self { blasts }
    }

    pub fn blasts(&self) -> &[Blast] {
        &self.blasts
    }

    fn inside_blast(&self, point: Vector2) -> bool {
        self.blasts
            .iter()
            .any(|blast| point.distance_squared(blast.position) <= blast.radius * blast.radius)
    }
}

/// Whether cannon fire has arrived: within one tick of travel of its
/// target, or already past the point of closest approach.
fn reached_target(missile: &Missile) -> bool {
    let to_target = missile.target() - missile.position();
    let velocity = missile.velocity();
    to_target.length() <= velocity.length() || to_target.dot(velocity) <= 0.0
}

impl CollisionSystem for BlastField {
    fn hits(&self, missile: &Missile, terrain: &dyn Terrain) -> bool {
        if terrain.is_supported(missile.position()) {
            return true;
        }
        if missile.is_cannon_fire() {
            reached_target(missile)
        } else {
            self.inside_blast(missile.position())
        }
    }
}
