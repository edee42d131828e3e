//! OrdersManager - order lifecycle operations
//!
//! This module handles:
//! - Order creation and registry bookkeeping
//! - Recipe assembly (fixed menu entries, incremental custom builds)
//! - Status transitions (prepared, completed)
//! - Delivery and cancellation
//! - Order log notification (via the injected collaborator)
//!
//! # Operation Flow
//!
//! ```text
//! operation(order_id)
//!     ├─ 1. Resolve the entry (OrderNotFound when absent)
//!     ├─ 2. Acquire the entry lock
//!     ├─ 3. Check lifecycle state, apply the transition
//!     ├─ 4. Update the status board (entry lock still held)
//!     ├─ 5. Notify the order log
//!     └─ 6. Return
//! ```
//!
//! Every mutating operation either fully applies or fails before touching
//! state; the entry lock guarantees a consistent before/after for each
//! order.

mod error;
pub use error::*;

use super::entry::{EntryState, OrderEntry};
use super::log::OrderLog;
use super::registry::OrderRegistry;
use super::status::StatusBoard;
use serde::{Deserialize, Serialize};
use shared::models::{CustomPancake, FixedRecipe, Ingredient, Order, OrderDto, Pancake, Recipe};
use std::collections::HashSet;
use std::sync::Arc;
use uuid::Uuid;

/// Result of a successful delivery: the final order handle plus the
/// rendered descriptions that went out
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DeliveredOrder {
    pub order: OrderDto,
    pub pancakes: Vec<String>,
}

/// OrdersManager for the pancake order lifecycle
///
/// Owns the registry of live entries and the status board; all lifecycle
/// operations go through here. Cheap to clone and share across threads.
pub struct OrdersManager {
    registry: Arc<OrderRegistry>,
    status: Arc<StatusBoard>,
    log: Arc<dyn OrderLog>,
}

impl std::fmt::Debug for OrdersManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OrdersManager")
            .field("registry", &self.registry)
            .field("status", &self.status)
            .field("log", &"<OrderLog>")
            .finish()
    }
}

impl OrdersManager {
    /// Create a manager wired to the given order log collaborator
    pub fn new(log: Arc<dyn OrderLog>) -> Self {
        Self {
            registry: Arc::new(OrderRegistry::new()),
            status: Arc::new(StatusBoard::new()),
            log,
        }
    }

    // ========== Creation & assembly ==========

    /// Create a new order for the given address; always succeeds
    pub fn create_order(&self, building: i32, room: i32) -> OrderDto {
        let order = Order::new(building, room);
        let dto = OrderDto::from(&order);
        tracing::info!(order_id = %order.id, building, room, "Order created");
        self.registry.insert(Arc::new(OrderEntry::new(order)));
        dto
    }

    /// Start a custom pancake build on the order
    ///
    /// Fails when one is already in progress; the previous build must be
    /// finished first.
    pub fn create_custom(&self, order_id: Uuid) -> ManagerResult<()> {
        let entry = self.entry(order_id)?;
        let mut state = entry.lock();
        if state.custom.is_some() {
            tracing::warn!(order_id = %order_id, "Rejected custom build: one already in progress");
            return Err(ManagerError::CustomInProgress(order_id));
        }
        state.custom = Some(CustomPancake::new());
        tracing::debug!(order_id = %order_id, "Custom build started");
        Ok(())
    }

    /// Append an ingredient to the in-progress custom build
    pub fn add_ingredient(&self, order_id: Uuid, ingredient: Ingredient) -> ManagerResult<()> {
        let entry = self.entry(order_id)?;
        let mut state = entry.lock();
        let custom = state
            .custom
            .as_mut()
            .ok_or(ManagerError::NoCustomInProgress(order_id))?;
        custom.add_ingredient(ingredient);
        tracing::debug!(order_id = %order_id, ingredient = ?ingredient, "Ingredient added");
        Ok(())
    }

    /// Freeze the in-progress custom build and attach it to the order
    pub fn finish_custom(&self, order_id: Uuid) -> ManagerResult<()> {
        let entry = self.entry(order_id)?;
        let mut state = entry.lock();
        let mut custom = state
            .custom
            .take()
            .ok_or(ManagerError::NoCustomInProgress(order_id))?;
        custom.finish();
        self.attach(&entry, &mut state, custom)?;
        tracing::info!(order_id = %order_id, "Custom pancake finished");
        Ok(())
    }

    /// Attach `count` independent instances of a fixed menu recipe
    ///
    /// `count <= 0` is a no-op; there is no upper bound. Each instance is
    /// logged individually.
    pub fn add_pancakes(
        &self,
        order_id: Uuid,
        recipe: FixedRecipe,
        count: i32,
    ) -> ManagerResult<()> {
        let entry = self.entry(order_id)?;
        let mut state = entry.lock();
        for _ in 0..count {
            self.attach(&entry, &mut state, recipe)?;
        }
        tracing::info!(order_id = %order_id, recipe = ?recipe, count, "Fixed pancakes added");
        Ok(())
    }

    // ========== Viewing & removal ==========

    /// Rendered descriptions of all attached recipes, in insertion order
    ///
    /// Lenient read path: an unknown id yields an empty list rather than an
    /// error.
    pub fn view_order(&self, order_id: Uuid) -> Vec<String> {
        match self.registry.get(order_id) {
            Some(entry) => {
                let state = entry.lock();
                Self::render(&state.pancakes)
            }
            None => Vec::new(),
        }
    }

    /// Remove up to `count` pancakes whose rendered description exactly
    /// matches, scanning in insertion order and preserving the relative
    /// order of the remainder
    ///
    /// Fewer matches than `count` removes what is there; the actual removed
    /// count is logged.
    pub fn remove_pancakes(
        &self,
        description: &str,
        order_id: Uuid,
        count: i32,
    ) -> ManagerResult<()> {
        let entry = self.entry(order_id)?;
        let mut state = entry.lock();
        let mut removed = 0;
        state.pancakes.retain(|p| {
            if removed < count && matches!(p.description(), Ok(d) if d == description) {
                removed += 1;
                false
            } else {
                true
            }
        });
        self.log.pancakes_removed(
            &entry.order,
            description,
            removed as usize,
            &Self::render(&state.pancakes),
        );
        tracing::info!(order_id = %order_id, description, removed, "Pancakes removed");
        Ok(())
    }

    // ========== Lifecycle ==========

    /// Cancel the order: the entry is discarded and both status flags are
    /// dropped, regardless of current status
    pub fn cancel_order(&self, order_id: Uuid) -> ManagerResult<()> {
        let entry = self.entry(order_id)?;
        let state = entry.lock();
        self.registry.remove(order_id);
        self.status.forget(order_id);
        self.log
            .order_cancelled(&entry.order, &Self::render(&state.pancakes));
        tracing::info!(order_id = %order_id, "Order cancelled");
        Ok(())
    }

    /// Unconditionally mark the order completed
    ///
    /// Deliberately permissive: the id is not checked against the registry
    /// or the prepared set, and a delivered (removed) order can still be
    /// marked completed. Kept as the audit contract pending product
    /// clarification.
    pub fn complete_order(&self, order_id: Uuid) {
        self.status.mark_completed(order_id);
        tracing::info!(order_id = %order_id, "Order completed");
    }

    /// Mark the order prepared
    ///
    /// Fails while a custom build is unfinished. Atomically moves the id
    /// out of completed and into prepared.
    pub fn prepare_order(&self, order_id: Uuid) -> ManagerResult<()> {
        let entry = self.entry(order_id)?;
        let state = entry.lock();
        if state.custom.is_some() {
            tracing::warn!(order_id = %order_id, "Rejected prepare: custom build not finished");
            return Err(ManagerError::CustomNotFinished(order_id));
        }
        // entry lock held, status lock nested inside
        self.status.mark_prepared(order_id);
        tracing::info!(order_id = %order_id, "Order prepared");
        Ok(())
    }

    /// Snapshot of the completed set
    pub fn list_completed_orders(&self) -> HashSet<Uuid> {
        self.status.completed()
    }

    /// Snapshot of the prepared set
    pub fn list_prepared_orders(&self) -> HashSet<Uuid> {
        self.status.prepared()
    }

    /// Deliver a prepared order
    ///
    /// `Ok(None)` means the order exists but is not prepared yet; nothing is
    /// mutated in that case. On success the entry is removed, the prepared
    /// flag is dropped, and the returned record carries the handle plus the
    /// rendered descriptions as delivered.
    pub fn deliver_order(&self, order_id: Uuid) -> ManagerResult<Option<DeliveredOrder>> {
        let entry = self.entry(order_id)?;
        let state = entry.lock();
        if !self.status.is_prepared(order_id) {
            tracing::debug!(order_id = %order_id, "Delivery requested but order is not prepared");
            return Ok(None);
        }

        let pancakes = Self::render(&state.pancakes);
        self.log.order_delivered(&entry.order, &pancakes);

        self.registry.remove(order_id);
        self.status.clear_prepared(order_id);

        tracing::info!(order_id = %order_id, pancakes = pancakes.len(), "Order out for delivery");
        Ok(Some(DeliveredOrder {
            order: OrderDto::from(&entry.order),
            pancakes,
        }))
    }

    // ========== Internals ==========

    /// Resolve a live entry or fail with OrderNotFound
    fn entry(&self, order_id: Uuid) -> ManagerResult<Arc<OrderEntry>> {
        self.registry
            .get(order_id)
            .ok_or(ManagerError::OrderNotFound(order_id))
    }

    /// Tag a recipe with the owning order id, attach it, and notify the log
    ///
    /// Caller holds the entry lock.
    fn attach(
        &self,
        entry: &OrderEntry,
        state: &mut EntryState,
        recipe: impl Into<Recipe>,
    ) -> ManagerResult<()> {
        let pancake = Pancake::new(entry.id, recipe);
        let description = pancake.description()?;
        state.pancakes.push(pancake);
        self.log
            .pancake_added(&entry.order, &description, &Self::render(&state.pancakes));
        Ok(())
    }

    /// Render the description list; attached recipes are always finished,
    /// so nothing is dropped here
    fn render(pancakes: &[Pancake]) -> Vec<String> {
        pancakes.iter().filter_map(|p| p.description().ok()).collect()
    }
}

// Make OrdersManager Clone-able via Arc
impl Clone for OrdersManager {
    fn clone(&self) -> Self {
        Self {
            registry: Arc::clone(&self.registry),
            status: Arc::clone(&self.status),
            log: Arc::clone(&self.log),
        }
    }
}

#[cfg(test)]
mod tests;
