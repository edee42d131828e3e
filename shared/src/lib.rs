//! Shared types for Pancake Lab
//!
//! Common types used across crates: the order model, recipe types, and the
//! domain errors they produce.

pub mod error;
pub mod models;

// Re-exports
pub use error::RecipeError;
pub use serde::{Deserialize, Serialize};
