//! Lifecycle actions for the Order actor.
//!
//! Each action runs the matching function from [`super::transitions`] inside the order
//! actor, so it is the only path by which an order's status changes.

use crate::model::OrderStatus;

#[derive(Debug, Clone)]
pub enum OrderAction {
    /// Moves the order one step along the fulfilment sequence.
    Advance,
    /// Cancels a non-terminal order. The reason is kept on the order.
    Cancel { reason: Option<String> },
    /// Reads the status the next `Advance` would produce, without changing anything.
    NextStatus,
}

/// Results from OrderActions - variants match 1:1 with OrderAction
#[derive(Debug, Clone, PartialEq)]
pub enum OrderActionResult {
    Advanced(OrderStatus),
    Cancelled,
    NextStatus(Option<OrderStatus>),
}
