//! Food-cost arithmetic.
//!
//! All figures are rounded to two decimal places for display. Percentages are `None` when
//! the selling price is zero.

use rust_decimal::{Decimal, RoundingStrategy};

fn round2(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

fn percent_of(part: Decimal, whole: Decimal) -> Option<Decimal> {
    if whole.is_zero() {
        return None;
    }
    let ratio = part.checked_div(whole)?;
    Some(round2(ratio.checked_mul(Decimal::ONE_HUNDRED)?))
}

/// The cost picture of one dish at one price.
#[derive(Debug, Clone, PartialEq)]
pub struct CostBreakdown {
    pub price: Decimal,
    pub food_cost: Decimal,
    pub food_cost_pct: Option<Decimal>,
    pub margin: Decimal,
    pub margin_pct: Option<Decimal>,
    /// Price that would bring the food cost to the configured target percentage.
    pub suggested_price: Option<Decimal>,
}

/// Σ quantity × unit cost over `(quantity, unit_cost)` pairs, unrounded.
pub fn food_cost(portions: impl IntoIterator<Item = (Decimal, Decimal)>) -> Decimal {
    portions
        .into_iter()
        .map(|(quantity, unit_cost)| quantity.saturating_mul(unit_cost))
        .fold(Decimal::ZERO, Decimal::saturating_add)
}

/// Price at which `food_cost` is `target_pct` percent of the price.
pub fn suggested_price(food_cost: Decimal, target_pct: Decimal) -> Option<Decimal> {
    if target_pct <= Decimal::ZERO {
        return None;
    }
    food_cost
        .checked_div(target_pct / Decimal::ONE_HUNDRED)
        .map(round2)
}

pub fn breakdown(price: Decimal, food_cost: Decimal, target_pct: Decimal) -> CostBreakdown {
    let margin = price.saturating_sub(food_cost);
    CostBreakdown {
        price: round2(price),
        food_cost: round2(food_cost),
        food_cost_pct: percent_of(food_cost, price),
        margin: round2(margin),
        margin_pct: percent_of(margin, price),
        suggested_price: suggested_price(food_cost, target_pct),
    }
}
