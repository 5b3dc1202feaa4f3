//! Customer orders and their fulfilment status.
//!
//! # Actor Framework
//! [`Order`] implements [`ActorEntity`](actor_framework::ActorEntity) in
//! [`crate::order_actor`]. Its `status` can only be changed through the lifecycle functions
//! in [`crate::order_actor::transitions`], which the order actor runs as actions.

use super::MenuItemId;
use actor_framework::FieldValue;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

entity_id!(
    /// Type-safe identifier for Orders.
    OrderId,
    "order"
);

/// The fulfilment stage of an order.
///
/// On the wire a status is its integer code (`New = 0` .. `Cancelled = 5`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum OrderStatus {
    New,
    InPreparation,
    ReadyForDelivery,
    InDelivery,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    /// Every status, in fulfilment order with `Cancelled` last.
    pub const ALL: [OrderStatus; 6] = [
        OrderStatus::New,
        OrderStatus::InPreparation,
        OrderStatus::ReadyForDelivery,
        OrderStatus::InDelivery,
        OrderStatus::Delivered,
        OrderStatus::Cancelled,
    ];

    pub fn code(self) -> u8 {
        match self {
            OrderStatus::New => 0,
            OrderStatus::InPreparation => 1,
            OrderStatus::ReadyForDelivery => 2,
            OrderStatus::InDelivery => 3,
            OrderStatus::Delivered => 4,
            OrderStatus::Cancelled => 5,
        }
    }

    /// Delivered and Cancelled orders accept no further transitions.
    pub fn is_terminal(self) -> bool {
        matches!(self, OrderStatus::Delivered | OrderStatus::Cancelled)
    }

    /// Text for the button that moves an order on, or `None` when no button is shown.
    pub fn next_action_label(self) -> Option<&'static str> {
        match self {
            OrderStatus::New => Some("Start preparation"),
            OrderStatus::InPreparation => Some("Mark ready for delivery"),
            OrderStatus::ReadyForDelivery => Some("Send out for delivery"),
            OrderStatus::InDelivery => Some("Mark delivered"),
            OrderStatus::Delivered | OrderStatus::Cancelled => None,
        }
    }
}

impl Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            OrderStatus::New => "new",
            OrderStatus::InPreparation => "in preparation",
            OrderStatus::ReadyForDelivery => "ready for delivery",
            OrderStatus::InDelivery => "in delivery",
            OrderStatus::Delivered => "delivered",
            OrderStatus::Cancelled => "cancelled",
        };
        f.write_str(label)
    }
}

impl From<OrderStatus> for u8 {
    fn from(status: OrderStatus) -> Self {
        status.code()
    }
}

/// A status code outside `0..=5`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("unknown order status code {0}")]
pub struct UnknownStatusCode(pub u8);

impl TryFrom<u8> for OrderStatus {
    type Error = UnknownStatusCode;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        OrderStatus::ALL
            .into_iter()
            .find(|status| status.code() == code)
            .ok_or(UnknownStatusCode(code))
    }
}

impl From<OrderStatus> for FieldValue {
    fn from(status: OrderStatus) -> Self {
        status.code().into()
    }
}

/// One line of an order. `price_at_order` is the menu price when the order was placed and
/// never follows later price changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    pub menu_item_id: MenuItemId,
    pub name: String,
    pub quantity: Decimal,
    pub price_at_order: Decimal,
}

impl OrderItem {
    pub fn line_total(&self) -> Decimal {
        self.quantity.saturating_mul(self.price_at_order)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub customer_name: String,
    pub delivery_address: Option<String>,
    pub items: Vec<OrderItem>,
    pub(crate) status: OrderStatus,
    pub requested_delivery_time: DateTime<Utc>,
    pub estimated_delivery_time: Option<DateTime<Utc>>,
    pub placed_at: DateTime<Utc>,
    pub notes: Option<String>,
    pub cancellation_reason: Option<String>,
}

impl Order {
    pub fn status(&self) -> OrderStatus {
        self.status
    }

    /// Σ quantity × price_at_order, recomputed on every call.
    pub fn total(&self) -> Decimal {
        self.items
            .iter()
            .map(OrderItem::line_total)
            .fold(Decimal::ZERO, Decimal::saturating_add)
    }
}

/// A requested line: which dish and how much of it. The price is looked up by the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderLine {
    pub menu_item_id: MenuItemId,
    pub quantity: Decimal,
}

/// DTO for placing an order. New orders always start as [`OrderStatus::New`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderCreate {
    pub customer_name: String,
    pub delivery_address: Option<String>,
    pub lines: Vec<OrderLine>,
    pub requested_delivery_time: DateTime<Utc>,
    pub placed_at: DateTime<Utc>,
    pub notes: Option<String>,
}

/// DTO for order updates. Neither status nor items can be changed this way.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OrderUpdate {
    pub requested_delivery_time: Option<DateTime<Utc>>,
    pub estimated_delivery_time: Option<DateTime<Utc>>,
    pub delivery_address: Option<String>,
    pub notes: Option<String>,
}

/// Queryable order columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderField {
    CustomerName,
    Status,
    PlacedAt,
    RequestedDeliveryTime,
    EstimatedDeliveryTime,
    Total,
}
