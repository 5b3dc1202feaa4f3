//! Stock movements for the inventory actor.

use rust_decimal::Decimal;

/// Custom actions for stock items.
#[derive(Debug, Clone)]
pub enum InventoryAction {
    /// Adds a delivery to stock. The quantity must be positive.
    Restock(Decimal),
    /// Takes stock out for use or waste.
    ///
    /// # Errors
    /// Fails with `InsufficientStock` rather than going below zero.
    Consume(Decimal),
    /// Reads the current level without modifying it.
    StockLevel,
}

/// Results from InventoryActions - variants match 1:1 with InventoryAction
#[derive(Debug, Clone, PartialEq)]
pub enum InventoryActionResult {
    /// New quantity after the restock.
    Restocked(Decimal),
    /// Quantity left after consuming.
    Consumed(Decimal),
    StockLevel(StockLevel),
}

#[derive(Debug, Clone, PartialEq)]
pub struct StockLevel {
    pub quantity: Decimal,
    pub low_stock_threshold: Decimal,
    pub low_stock: bool,
}
