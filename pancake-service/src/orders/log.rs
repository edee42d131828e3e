//! Order log collaborator
//!
//! The manager notifies the log once per mutating event, while holding the
//! entry lock. Implementations must not block and must not call back into
//! the manager.

use parking_lot::Mutex;
use shared::models::Order;

/// External audit log for order activity
///
/// Each notification carries the order record and a snapshot of the rendered
/// description list at the time of the call. Notifications must never fail
/// the calling operation.
pub trait OrderLog: Send + Sync {
    /// A pancake was attached to the order
    fn pancake_added(&self, order: &Order, description: &str, descriptions: &[String]);

    /// Pancakes matching a description were removed
    fn pancakes_removed(
        &self,
        order: &Order,
        description: &str,
        removed: usize,
        descriptions: &[String],
    );

    /// The order was cancelled; `descriptions` is the list as it stood
    fn order_cancelled(&self, order: &Order, descriptions: &[String]);

    /// The order went out for delivery
    fn order_delivered(&self, order: &Order, descriptions: &[String]);
}

/// Append-only in-memory order log
#[derive(Debug, Default)]
pub struct MemoryOrderLog {
    lines: Mutex<Vec<String>>,
}

impl MemoryOrderLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the accumulated log lines
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().clone()
    }

    fn push(&self, line: String) {
        self.lines.lock().push(line);
    }
}

impl OrderLog for MemoryOrderLog {
    fn pancake_added(&self, order: &Order, description: &str, descriptions: &[String]) {
        self.push(format!(
            "Added pancake with description '{}' to order {} containing {} pancakes, for building {}, room {}.",
            description,
            order.id,
            descriptions.len(),
            order.building,
            order.room
        ));
    }

    fn pancakes_removed(
        &self,
        order: &Order,
        description: &str,
        removed: usize,
        descriptions: &[String],
    ) {
        self.push(format!(
            "Removed {} pancake(s) with description '{}' from order {} now containing {} pancakes, for building {}, room {}.",
            removed,
            description,
            order.id,
            descriptions.len(),
            order.building,
            order.room
        ));
    }

    fn order_cancelled(&self, order: &Order, descriptions: &[String]) {
        self.push(format!(
            "Cancelled order {} with {} pancakes for building {}, room {}.",
            order.id,
            descriptions.len(),
            order.building,
            order.room
        ));
    }

    fn order_delivered(&self, order: &Order, descriptions: &[String]) {
        self.push(format!(
            "Order {} with {} pancakes for building {}, room {} out for delivery.",
            order.id,
            descriptions.len(),
            order.building,
            order.room
        ));
    }
}
