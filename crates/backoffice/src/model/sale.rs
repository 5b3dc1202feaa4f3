//! Point-of-sale transactions.

use super::{MenuItemId, OrderId};
use actor_framework::FieldValue;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

entity_id!(
    /// Type-safe identifier for sales.
    SaleId,
    "sale"
);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PaymentMethod {
    Cash,
    Card,
    Voucher,
}

impl PaymentMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            PaymentMethod::Cash => "cash",
            PaymentMethod::Card => "card",
            PaymentMethod::Voucher => "voucher",
        }
    }
}

impl From<PaymentMethod> for FieldValue {
    fn from(payment: PaymentMethod) -> Self {
        payment.as_str().into()
    }
}

/// A sold line. Price and cost are copied from the menu at the time of sale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaleLine {
    pub menu_item_id: MenuItemId,
    pub name: String,
    pub quantity: u32,
    pub unit_price: Decimal,
    pub unit_cost: Decimal,
}

impl SaleLine {
    pub fn total(&self) -> Decimal {
        self.unit_price.saturating_mul(Decimal::from(self.quantity))
    }

    pub fn cost(&self) -> Decimal {
        self.unit_cost.saturating_mul(Decimal::from(self.quantity))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sale {
    pub id: SaleId,
    pub lines: Vec<SaleLine>,
    pub payment: PaymentMethod,
    pub sold_at: DateTime<Utc>,
    pub order_id: Option<OrderId>,
    /// Reason given when the sale was voided.
    pub voided: Option<String>,
}

impl Sale {
    pub fn total(&self) -> Decimal {
        self.lines
            .iter()
            .map(SaleLine::total)
            .fold(Decimal::ZERO, Decimal::saturating_add)
    }

    pub fn cost_of_goods(&self) -> Decimal {
        self.lines
            .iter()
            .map(SaleLine::cost)
            .fold(Decimal::ZERO, Decimal::saturating_add)
    }

    pub fn is_voided(&self) -> bool {
        self.voided.is_some()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaleLineRequest {
    pub menu_item_id: MenuItemId,
    pub quantity: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaleCreate {
    pub lines: Vec<SaleLineRequest>,
    pub payment: PaymentMethod,
    pub sold_at: DateTime<Utc>,
    pub order_id: Option<OrderId>,
}

/// Corrects how a sale was paid. Everything else about a sale is fixed once recorded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaleUpdate {
    pub payment: PaymentMethod,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaleField {
    SoldAt,
    Payment,
    Voided,
    Total,
    OrderId,
}
