//! ProjectileStore: ordered arena of live missiles.
//!
//! Missiles are addressed by generational [`ProjectileId`]s and iterated in
//! insertion order, so terrain erosion and draw order are reproducible.
//! Nothing is inserted while the store is being iterated: new missiles go
//! into a [`SpawnQueue`] and are merged after the projectile pass.

use flak_core::types::ProjectileId;

use crate::missile::Missile;

/// Generational index allocator. Freed indices are reused with a bumped
/// generation so stale ids never alias a new projectile.
#[derive(Debug, Default)]
struct IdAllocator {
    generations: Vec<u32>,
    free_indices: Vec<u32>,
    next_index: u32,
}

impl IdAllocator {
    fn allocate(&mut self) -> ProjectileId {
        if let Some(index) = self.free_indices.pop() {
            ProjectileId::new(index, self.generations[index as usize])
        } else {
            let index = self.next_index;
            self.next_index += 1;
            self.generations.push(0);
            ProjectileId::new(index, 0)
        }
    }

    fn deallocate(&mut self, id: ProjectileId) {
        if self.is_alive(id) {
            self.generations[id.index as usize] += 1;
            self.free_indices.push(id.index);
        }
    }

    fn is_alive(&self, id: ProjectileId) -> bool {
        self.generations
            .get(id.index as usize)
            .is_some_and(|&generation| generation == id.generation)
    }
}

#[derive(Debug)]
struct Entry {
    id: ProjectileId,
    missile: Missile,
}

/// All live missiles, in insertion order.
#[derive(Debug, Default)]
pub struct ProjectileStore {
    allocator: IdAllocator,
    entries: Vec<Entry>,
    /// Position in `entries` for each live slot index.
    locations: Vec<Option<usize>>,
}

impl ProjectileStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Insert directly. Only valid between ticks; during a tick use a [`SpawnQueue`].
    pub fn insert(&mut self, missile: Missile) -> ProjectileId {
        let id = self.allocator.allocate();
        let slot = id.index as usize;
        if self.locations.len() <= slot {
            self.locations.resize(slot + 1, None);
        }
        self.locations[slot] = Some(self.entries.len());
        self.entries.push(Entry { id, missile });
        id
    }

    /// Move every pending missile into the store, preserving queue order.
    pub fn merge(&mut self, queue: &mut SpawnQueue) -> Vec<ProjectileId> {
        queue
            .pending
            .drain(..)
            .map(|missile| self.insert(missile))
            .collect::<Vec<_>>()
    }

    pub fn contains(&self, id: ProjectileId) -> bool {
        self.location(id).is_some()
    }

    pub fn get(&self, id: ProjectileId) -> Option<&Missile> {
        self.location(id).map(|pos| &self.entries[pos].missile)
    }

    pub fn get_mut(&mut self, id: ProjectileId) -> Option<&mut Missile> {
        self.location(id).map(|pos| &mut self.entries[pos].missile)
    }

    /// Live ids in insertion order.
    pub fn ids(&self) -> impl Iterator<Item = ProjectileId> + '_ {
        self.entries.iter().map(|entry| entry.id)
    }

    pub fn iter(&self) -> impl Iterator<Item = (ProjectileId, &Missile)> {
        self.entries.iter().map(|entry| (entry.id, &entry.missile))
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (ProjectileId, &mut Missile)> {
        self.entries
            .iter_mut()
            .map(|entry| (entry.id, &mut entry.missile))
    }

    /// Remove every missile matching `predicate`, keeping the survivors'
    /// order. Removed ids are appended to `removed`.
    pub fn remove_where(
        &mut self,
        mut predicate: impl FnMut(&Missile) -> bool,
        removed: &mut Vec<ProjectileId>,
    ) {
        if self.entries.is_empty() {
            return;
        }

        let before = removed.len();
        self.entries.retain(|entry| {
            if predicate(&entry.missile) {
                removed.push(entry.id);
                false
            } else {
                true
            }
        });
        if removed.len() == before {
            return;
        }

        for &id in &removed[before..] {
            self.allocator.deallocate(id);
        }
        self.locations.fill(None);
        for (pos, entry) in self.entries.iter().enumerate() {
            self.locations[entry.id.index as usize] = Some(pos);
        }
    }

    fn location(&self, id: ProjectileId) -> Option<usize> {
        if !self.allocator.is_alive(id) {
            return None;
        }
        self.locations.get(id.index as usize).copied().flatten()
    }
}

/// Missiles created during a tick, waiting to join the store.
#[derive(Debug, Default)]
pub struct SpawnQueue {
    pending: Vec<Missile>,
}

impl SpawnQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, missile: Missile) {
        self.pending.push(missile);
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Missile> {
        self.pending.iter()
    }
}
