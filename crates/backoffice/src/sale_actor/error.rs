//! Error types for the sale actor.

use crate::model::{MenuItemId, SaleId};
use actor_framework::FrameworkError;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum SaleError {
    #[error("Sale not found: {0}")]
    NotFound(String),

    #[error("Sale has no lines")]
    EmptySale,

    #[error("Invalid quantity for {0}")]
    InvalidQuantity(MenuItemId),

    #[error("Unknown menu item: {0}")]
    UnknownMenuItem(MenuItemId),

    #[error("Menu item not available: {0}")]
    MenuItemUnavailable(MenuItemId),

    #[error("Sale {0} is already voided")]
    AlreadyVoided(SaleId),

    #[error("Sale validation error: {0}")]
    Validation(String),

    /// Sales are financial records and are never deleted; void them instead.
    #[error("Sale {0} must be retained")]
    RecordRetained(SaleId),

    #[error("Menu lookup failed: {0}")]
    MenuLookup(String),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for SaleError {
    fn from(msg: String) -> Self {
        SaleError::ActorCommunicationError(msg)
    }
}

impl From<FrameworkError> for SaleError {
    fn from(e: FrameworkError) -> Self {
        match e.downcast_entity::<SaleError>() {
            Ok(err) => err,
            Err(FrameworkError::NotFound(id)) => SaleError::NotFound(id),
            Err(other) => SaleError::ActorCommunicationError(other.to_string()),
        }
    }
}
