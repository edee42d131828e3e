//! Prepared/completed status bookkeeping

use parking_lot::Mutex;
use std::collections::HashSet;
use uuid::Uuid;

#[derive(Debug, Default)]
struct StatusSets {
    prepared: HashSet<Uuid>,
    completed: HashSet<Uuid>,
}

/// Both status sets behind a single lock
///
/// One lock covers both sets so transitions touching both (prepare moves an
/// id out of completed and into prepared) are a single atomic step.
/// Membership is tracked independently of the registry: an id can stay
/// completed after its entry is gone, which is how delivery history is
/// recorded.
#[derive(Debug, Default)]
pub struct StatusBoard {
    sets: Mutex<StatusSets>,
}

impl StatusBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert into the completed set; no validation of any kind
    pub fn mark_completed(&self, id: Uuid) {
        self.sets.lock().completed.insert(id);
    }

    /// Atomically drop the id from completed and insert it into prepared
    pub fn mark_prepared(&self, id: Uuid) {
        let mut sets = self.sets.lock();
        sets.completed.remove(&id);
        sets.prepared.insert(id);
    }

    pub fn is_prepared(&self, id: Uuid) -> bool {
        self.sets.lock().prepared.contains(&id)
    }

    /// Drop the id from the prepared set (delivery)
    pub fn clear_prepared(&self, id: Uuid) {
        self.sets.lock().prepared.remove(&id);
    }

    /// Drop the id from both sets (cancellation)
    pub fn forget(&self, id: Uuid) {
        let mut sets = self.sets.lock();
        sets.completed.remove(&id);
        sets.prepared.remove(&id);
    }

    /// Snapshot copy of the prepared set
    pub fn prepared(&self) -> HashSet<Uuid> {
        self.sets.lock().prepared.clone()
    }

    /// Snapshot copy of the completed set
    pub fn completed(&self) -> HashSet<Uuid> {
        self.sets.lock().completed.clone()
    }
}
