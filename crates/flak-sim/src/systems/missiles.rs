//! Missile flight and explosion system.

use flak_core::events::SimEvent;
use flak_terrain::Terrain;

use crate::collision::BlastField;
use crate::store::ProjectileStore;

/// Advance every missile once, in insertion order.
///
/// Blasts are captured before anything moves, so a missile detonating this
/// tick only threatens its neighbours from the next tick on.
pub fn run(store: &mut ProjectileStore, terrain: &mut dyn Terrain, events: &mut Vec<SimEvent>) {
    let blasts = BlastField::from_store(store);

    for (id, missile) in store.iter_mut() {
        let was_exploding = missile.is_exploding();
        missile.advance(terrain, &blasts);

        if !was_exploding && missile.is_exploding() {
            log::debug!("{id} ({:?}) detonated at {}", missile.kind(), missile.position());
            events.push(SimEvent::Detonated {
                id,
                kind: missile.kind(),
                position: missile.position(),
            });
        }
    }
}
