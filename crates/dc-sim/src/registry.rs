//! Explicit per-entity checkpoint registry.
//!
//! The registry is a plain value passed through whatever context the host
//! game threads around, never process-wide state; two independent worlds can
//! each carry their own without interfering.

use rustc_hash::FxHashMap;

use dc_core::EntityId;
use dc_move::Checkpoint;

/// The last committed checkpoint of every tracked entity.
#[derive(Clone, Debug, Default)]
pub struct CheckpointRegistry {
    entries: FxHashMap<EntityId, Checkpoint>,
}

impl CheckpointRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Commit `checkpoint` as the entity's current resting state.
    pub fn record(&mut self, entity: EntityId, checkpoint: Checkpoint) {
        self.entries.insert(entity, checkpoint);
    }

    pub fn get(&self, entity: EntityId) -> Option<&Checkpoint> {
        self.entries.get(&entity)
    }

    /// Drop an entity from tracking (despawn).
    pub fn remove(&mut self, entity: EntityId) -> Option<Checkpoint> {
        self.entries.remove(&entity)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
