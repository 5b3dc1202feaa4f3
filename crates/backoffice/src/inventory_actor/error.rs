//! Error types for the inventory actor.

use actor_framework::FrameworkError;
use rust_decimal::Decimal;
use thiserror::Error;

/// Errors that can occur during stock operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum InventoryError {
    /// The requested stock item was not found.
    #[error("Stock item not found: {0}")]
    NotFound(String),

    /// The requested quantity exceeds the available stock.
    #[error("Insufficient stock: requested {requested}, available {available}")]
    InsufficientStock {
        requested: Decimal,
        available: Decimal,
    },

    /// Movements must be positive; levels, costs and thresholds must not be negative.
    #[error("Invalid quantity: {0}")]
    InvalidQuantity(Decimal),

    #[error("Restocking {restock} onto {on_hand} exceeds the stock limit")]
    StockLimitExceeded { on_hand: Decimal, restock: Decimal },

    #[error("Stock item validation error: {0}")]
    Validation(String),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for InventoryError {
    fn from(msg: String) -> Self {
        InventoryError::ActorCommunicationError(msg)
    }
}

impl From<FrameworkError> for InventoryError {
    fn from(e: FrameworkError) -> Self {
        match e.downcast_entity::<InventoryError>() {
            Ok(err) => err,
            Err(FrameworkError::NotFound(id)) => InventoryError::NotFound(id),
            Err(other) => InventoryError::ActorCommunicationError(other.to_string()),
        }
    }
}
