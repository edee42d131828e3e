//! Order Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Order entity - fixed identity and delivery address of one order
///
/// Immutable after creation. The mutable working state (attached recipes,
/// in-progress custom build) lives in the service's order entry, not here.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Order {
    /// Globally unique order id
    pub id: Uuid,
    /// Building number (caller-supplied, unconstrained)
    pub building: i32,
    /// Room number (caller-supplied, unconstrained)
    pub room: i32,
    pub created_at: DateTime<Utc>,
}

impl Order {
    /// Create a new order with a freshly generated id
    pub fn new(building: i32, room: i32) -> Self {
        Self {
            id: Uuid::new_v4(),
            building,
            room,
            created_at: Utc::now(),
        }
    }
}

/// Read-only projection of an order returned to callers
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct OrderDto {
    pub id: Uuid,
    pub building: i32,
    pub room: i32,
}

impl From<&Order> for OrderDto {
    fn from(order: &Order) -> Self {
        Self {
            id: order.id,
            building: order.building,
            room: order.room,
        }
    }
}
