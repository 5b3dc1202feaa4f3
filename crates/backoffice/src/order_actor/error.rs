//! Error types for the Order actor.

use super::transitions::InvalidTransition;
use crate::model::{MenuItemId, OrderId, OrderStatus};
use actor_framework::FrameworkError;
use rust_decimal::Decimal;
use thiserror::Error;

/// Errors that can occur during order operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    /// The requested order was not found.
    #[error("Order not found: {0}")]
    NotFound(String),

    /// An order needs at least one line.
    #[error("Order has no items")]
    EmptyItems,

    /// Quantities below a quarter portion or above [`MAX_AMOUNT`](crate::model::MAX_AMOUNT)
    /// are rejected.
    #[error("Invalid quantity {quantity} for {menu_item_id}")]
    InvalidQuantity {
        menu_item_id: MenuItemId,
        quantity: Decimal,
    },

    #[error("Unknown menu item: {0}")]
    UnknownMenuItem(MenuItemId),

    #[error("Menu item not available: {0}")]
    MenuItemUnavailable(MenuItemId),

    /// The order data provided is invalid.
    #[error("Order validation error: {0}")]
    Validation(String),

    /// Delivered and cancelled orders can no longer be edited.
    #[error("Order {id} is {status} and can no longer be changed")]
    OrderClosed { id: OrderId, status: OrderStatus },

    /// Orders are kept for the books and are never deleted.
    #[error("Order {0} cannot be deleted")]
    DeletionForbidden(OrderId),

    #[error(transparent)]
    InvalidTransition(#[from] InvalidTransition),

    /// The menu could not be consulted while pricing the order.
    #[error("Menu lookup failed: {0}")]
    MenuLookup(String),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl OrderError {
    /// True for a lifecycle action on an order that has already finished, usually because
    /// the caller acted on a stale view. Callers treat it as a no-op and show
    /// [`OrderError::STALE_ACTION_NOTICE`].
    pub fn is_stale_action(&self) -> bool {
        matches!(self, OrderError::InvalidTransition(t) if t.from.is_terminal())
    }

    pub const STALE_ACTION_NOTICE: &'static str = "order already completed/cancelled";
}

impl From<String> for OrderError {
    fn from(msg: String) -> Self {
        OrderError::ActorCommunicationError(msg)
    }
}

impl From<FrameworkError> for OrderError {
    fn from(e: FrameworkError) -> Self {
        match e.downcast_entity::<OrderError>() {
            Ok(err) => err,
            Err(FrameworkError::NotFound(id)) => OrderError::NotFound(id),
            Err(other) => OrderError::ActorCommunicationError(other.to_string()),
        }
    }
}
