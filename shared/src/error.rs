//! Domain error types shared across crates

use thiserror::Error;

/// Errors produced by recipe rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RecipeError {
    /// A custom pancake was asked to render before `finish` froze it
    #[error("custom pancake is not finished")]
    NotFinished,
}
