use super::costing::CostBreakdown;
use rust_decimal::Decimal;

#[derive(Debug, Clone)]
pub enum MenuAction {
    /// Re-reads ingredient unit costs from the inventory and stores the new food cost.
    Recost,
    /// Returns the cost breakdown at the current price without changing anything.
    Costing,
}

/// Results from MenuActions - variants match 1:1 with MenuAction
#[derive(Debug, Clone, PartialEq)]
pub enum MenuActionResult {
    /// The refreshed food cost of one portion.
    Recosted(Decimal),
    Costing(CostBreakdown),
}
