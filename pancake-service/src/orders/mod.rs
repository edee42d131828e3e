//! Order management module
//!
//! - **manager**: OrdersManager, the single entry point for all lifecycle
//!   operations
//! - **registry**: concurrent id-to-entry map of live orders
//! - **entry**: per-order mutable state behind its own lock
//! - **status**: prepared/completed bookkeeping behind one shared lock
//! - **log**: the external order log collaborator
//!
//! # Locking discipline
//!
//! ```text
//! operation(order_id)
//!     ├─ resolve entry via registry (internally synchronized, no caller lock)
//!     ├─ acquire entry lock          (serializes activity on one order)
//!     ├─ read / mutate working state
//!     ├─ acquire status lock nested  (prepare, deliver, cancel only)
//!     └─ notify order log, release
//! ```
//!
//! The entry lock is always taken before the status lock, and no operation
//! ever holds two entry locks at once, so unrelated orders stay fully
//! concurrent and there is no deadlock cycle.

pub mod entry;
pub mod log;
pub mod manager;
pub mod registry;
pub mod status;

// Re-exports
pub use entry::{EntryState, OrderEntry};
pub use log::{MemoryOrderLog, OrderLog};
pub use manager::{DeliveredOrder, ErrorKind, ManagerError, ManagerResult, OrdersManager};
pub use registry::OrderRegistry;
pub use status::StatusBoard;

// Re-export shared types for convenience
pub use shared::models::{
    CustomPancake, FixedRecipe, Ingredient, Order, OrderDto, Pancake, Recipe,
};
