//! Per-order entry: immutable identity plus lock-guarded working state

use parking_lot::{Mutex, MutexGuard};
use shared::models::{CustomPancake, Order, Pancake};
use uuid::Uuid;

/// Mutable working state of one order
///
/// Only ever touched while holding the owning entry's lock.
#[derive(Debug, Default)]
pub struct EntryState {
    /// Attached recipes; insertion order is display order, duplicates allowed
    pub pancakes: Vec<Pancake>,
    /// At most one custom build, present between `create_custom` and the
    /// matching `finish_custom`
    pub custom: Option<CustomPancake>,
}

/// One live order: the immutable [`Order`] record plus its working state
/// behind the entry lock
#[derive(Debug)]
pub struct OrderEntry {
    pub id: Uuid,
    pub order: Order,
    state: Mutex<EntryState>,
}

impl OrderEntry {
    pub fn new(order: Order) -> Self {
        Self {
            id: order.id,
            order,
            state: Mutex::new(EntryState::default()),
        }
    }

    /// Acquire the entry lock
    ///
    /// Hold the guard for the full duration of any operation touching the
    /// working state.
    pub fn lock(&self) -> MutexGuard<'_, EntryState> {
        self.state.lock()
    }
}
