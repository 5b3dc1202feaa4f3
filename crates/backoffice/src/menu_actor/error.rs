//! Error types for the menu actor.

use crate::model::ProductId;
use actor_framework::FrameworkError;
use rust_decimal::Decimal;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum MenuError {
    #[error("Menu item not found: {0}")]
    NotFound(String),

    #[error("Invalid price: {0}")]
    InvalidPrice(Decimal),

    #[error("Invalid quantity {quantity} of {product_id}")]
    InvalidIngredientQuantity {
        product_id: ProductId,
        quantity: Decimal,
    },

    /// A recipe refers to a stock item the inventory does not have.
    #[error("Unknown ingredient: {0}")]
    UnknownIngredient(ProductId),

    #[error("Menu item validation error: {0}")]
    Validation(String),

    /// The inventory could not be consulted while costing.
    #[error("Inventory lookup failed: {0}")]
    InventoryLookup(String),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for MenuError {
    fn from(msg: String) -> Self {
        MenuError::ActorCommunicationError(msg)
    }
}

impl From<FrameworkError> for MenuError {
    fn from(e: FrameworkError) -> Self {
        match e.downcast_entity::<MenuError>() {
            Ok(err) => err,
            Err(FrameworkError::NotFound(id)) => MenuError::NotFound(id),
            Err(other) => MenuError::ActorCommunicationError(other.to_string()),
        }
    }
}
