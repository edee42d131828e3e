//! Pancake Lab order service
//!
//! In-process, concurrent manager for pancake orders: creation, recipe
//! assembly (fixed menu entries or incremental custom builds), status
//! transitions (prepared, completed), and delivery/cancellation. Single
//! process, in memory; there is no persistence or network surface.

pub mod orders;

// Re-exports
pub use orders::{
    DeliveredOrder, ErrorKind, ManagerError, ManagerResult, MemoryOrderLog, OrderLog,
    OrdersManager,
};
