//! Concurrent registry of live order entries

use super::entry::OrderEntry;
use dashmap::DashMap;
use std::sync::Arc;
use uuid::Uuid;

/// Concurrent map from order id to live entry
///
/// Structural mutation (insert/remove) is internally synchronized; callers
/// still take the per-entry lock for multi-step mutations of an entry's
/// working state.
#[derive(Debug, Default)]
pub struct OrderRegistry {
    entries: DashMap<Uuid, Arc<OrderEntry>>,
}

impl OrderRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an entry, silently overwriting an existing id
    pub fn insert(&self, entry: Arc<OrderEntry>) {
        self.entries.insert(entry.id, entry);
    }

    /// Look up a live entry
    ///
    /// Clones the `Arc` out of the shard so no registry lock is held while
    /// the caller takes the entry lock.
    pub fn get(&self, id: Uuid) -> Option<Arc<OrderEntry>> {
        self.entries.get(&id).map(|e| Arc::clone(&e))
    }

    /// Remove an entry; no-op when absent
    pub fn remove(&self, id: Uuid) {
        self.entries.remove(&id);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
