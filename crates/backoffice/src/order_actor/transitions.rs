//! # Order Lifecycle
//!
//! The only code that changes an order's status. Orders move forward one step at a time:
//!
//! ```text
//! New -> InPreparation -> ReadyForDelivery -> InDelivery -> Delivered
//!   \__________\_________________\_______________\______-> Cancelled
//! ```
//!
//! Delivered and Cancelled are terminal. There is no skipping, reordering or reverting,
//! and a delivered order cannot be cancelled.
//!
//! These functions are pure and synchronous. Concurrent attempts on the same order are
//! serialised by the order actor's message loop, so each call sees the status the previous
//! one left behind.

use crate::model::{Order, OrderStatus};
use std::fmt::Display;

/// The lifecycle operation that was attempted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Advance,
    Cancel,
}

impl Display for Transition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Transition::Advance => f.write_str("advance"),
            Transition::Cancel => f.write_str("cancel"),
        }
    }
}

/// A transition was attempted on an order whose status does not allow it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("cannot {attempted} an order that is {from}")]
pub struct InvalidTransition {
    pub from: OrderStatus,
    pub attempted: Transition,
}

/// The status that follows `current`, or `None` for terminal orders.
pub fn next_status(current: OrderStatus) -> Option<OrderStatus> {
    match current {
        OrderStatus::New => Some(OrderStatus::InPreparation),
        OrderStatus::InPreparation => Some(OrderStatus::ReadyForDelivery),
        OrderStatus::ReadyForDelivery => Some(OrderStatus::InDelivery),
        OrderStatus::InDelivery => Some(OrderStatus::Delivered),
        OrderStatus::Delivered | OrderStatus::Cancelled => None,
    }
}

/// Moves the order one step forward and returns its new status.
///
/// # Errors
/// `InvalidTransition` if the order is Delivered or Cancelled. The order is left untouched.
pub fn advance(order: &mut Order) -> Result<OrderStatus, InvalidTransition> {
    let next = next_status(order.status).ok_or(InvalidTransition {
        from: order.status,
        attempted: Transition::Advance,
    })?;
    order.status = next;
    Ok(next)
}

/// Cancels the order, however far along it is.
///
/// # Errors
/// `InvalidTransition` if the order is already Delivered or Cancelled. The order is left
/// untouched.
pub fn cancel(order: &mut Order) -> Result<OrderStatus, InvalidTransition> {
    if order.status.is_terminal() {
        return Err(InvalidTransition {
            from: order.status,
            attempted: Transition::Cancel,
        });
    }
    order.status = OrderStatus::Cancelled;
    Ok(OrderStatus::Cancelled)
}
