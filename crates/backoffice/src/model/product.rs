//! Stock items held in the kitchen and store room.
//!
//! # Actor Framework
//! This struct implements the [`ActorEntity`](actor_framework::ActorEntity) trait in
//! [`crate::inventory_actor`]. Stock movements go through
//! [`InventoryAction`](crate::inventory_actor::InventoryAction) so that a consume can never
//! take the quantity below zero.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

entity_id!(
    /// Type-safe identifier for stock items.
    ProductId,
    "product"
);

/// Unit a stock item is counted and costed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Unit {
    Kilogram,
    Gram,
    Litre,
    Millilitre,
    Piece,
    Box,
}

impl Unit {
    pub fn symbol(self) -> &'static str {
        match self {
            Unit::Kilogram => "kg",
            Unit::Gram => "g",
            Unit::Litre => "l",
            Unit::Millilitre => "ml",
            Unit::Piece => "pc",
            Unit::Box => "box",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub category: String,
    pub unit: Unit,
    pub quantity: Decimal,
    pub low_stock_threshold: Decimal,
    /// Cost of one `unit`.
    pub unit_cost: Decimal,
    pub supplier: Option<String>,
    /// Set while the threshold was not given on creation and still follows the configured
    /// default.
    #[serde(skip)]
    pub(crate) threshold_from_settings: bool,
}

impl Product {
    /// Quantity strictly below the threshold. Only used for display and reports.
    pub fn is_low_stock(&self) -> bool {
        self.quantity < self.low_stock_threshold
    }

    pub fn stock_value(&self) -> Decimal {
        self.quantity.saturating_mul(self.unit_cost)
    }
}

/// DTO for Product creation. Omitting the threshold uses the configured default.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductCreate {
    pub name: String,
    pub category: String,
    pub unit: Unit,
    pub quantity: Decimal,
    pub low_stock_threshold: Option<Decimal>,
    pub unit_cost: Decimal,
    pub supplier: Option<String>,
}

// DTO for Product updates. `counted_quantity` records a stock-take.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductUpdate {
    pub name: Option<String>,
    pub category: Option<String>,
    pub unit_cost: Option<Decimal>,
    pub low_stock_threshold: Option<Decimal>,
    pub supplier: Option<String>,
    pub counted_quantity: Option<Decimal>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProductField {
    Name,
    Category,
    Quantity,
    UnitCost,
    Supplier,
    /// Computed: quantity below threshold.
    LowStock,
}

