use shared::error::RecipeError;
use thiserror::Error;
use uuid::Uuid;

/// Manager errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ManagerError {
    #[error("Order not found: {0}")]
    OrderNotFound(Uuid),

    #[error("Custom pancake already in progress for order {0}")]
    CustomInProgress(Uuid),

    #[error("No custom pancake in progress for order {0}")]
    NoCustomInProgress(Uuid),

    #[error("Custom pancake was not finished for order {0}")]
    CustomNotFinished(Uuid),

    #[error("Recipe error: {0}")]
    Recipe(#[from] RecipeError),
}

/// Coarse classification of manager errors, for callers that only care
/// whether to retry with a different id or fix their call sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The order id does not resolve to a live entry
    NotFound,
    /// The order is in the wrong phase of its lifecycle
    InvalidState,
}

impl ManagerError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ManagerError::OrderNotFound(_) => ErrorKind::NotFound,
            ManagerError::CustomInProgress(_)
            | ManagerError::NoCustomInProgress(_)
            | ManagerError::CustomNotFinished(_)
            | ManagerError::Recipe(_) => ErrorKind::InvalidState,
        }
    }
}

pub type ManagerResult<T> = Result<T, ManagerError>;
