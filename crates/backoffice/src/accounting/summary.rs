//! Period summaries computed from sales and expenses.

use super::{AccountingError, Period};
use crate::model::{Expense, ExpenseCategory, Sale};
use rust_decimal::Decimal;
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq)]
pub struct PeriodSummary {
    pub period: Period,
    /// Takings of sales that were not voided.
    pub revenue: Decimal,
    pub cost_of_goods: Decimal,
    pub gross_profit: Decimal,
    pub expenses: Decimal,
    pub expenses_by_category: BTreeMap<ExpenseCategory, Decimal>,
    pub net_profit: Decimal,
    pub sale_count: usize,
    pub voided_count: usize,
    pub voided_amount: Decimal,
    /// `None` when nothing was sold.
    pub average_sale: Option<Decimal>,
}

/// Summarises the sales and expenses that fall inside `period`; records outside it are
/// ignored, so callers may pass a wider set and summarise several periods from it.
pub fn summarize<'a>(
    period: Period,
    sales: impl IntoIterator<Item = &'a Sale>,
    expenses: impl IntoIterator<Item = &'a Expense>,
) -> Result<PeriodSummary, AccountingError> {
    let (start, end) = period.utc_bounds()?;
    let (first_day, after_last_day) = period.bounds()?;

    let mut revenue = Decimal::ZERO;
    let mut cost_of_goods = Decimal::ZERO;
    let mut sale_count = 0;
    let mut voided_count = 0;
    let mut voided_amount = Decimal::ZERO;
    for sale in sales {
        if sale.sold_at < start || sale.sold_at >= end {
            continue;
        }
        if sale.is_voided() {
            voided_count += 1;
            voided_amount += sale.total();
        } else {
            sale_count += 1;
            revenue += sale.total();
            cost_of_goods += sale.cost_of_goods();
        }
    }

    let mut expenses_by_category = BTreeMap::new();
    let mut expense_total = Decimal::ZERO;
    for expense in expenses {
        if expense.incurred_on < first_day || expense.incurred_on >= after_last_day {
            continue;
        }
        expense_total += expense.amount;
        *expenses_by_category
            .entry(expense.category)
            .or_insert(Decimal::ZERO) += expense.amount;
    }

    let gross_profit = revenue - cost_of_goods;
    let average_sale =
        (sale_count > 0).then(|| (revenue / Decimal::from(sale_count)).round_dp(2));

    Ok(PeriodSummary {
        period,
        revenue,
        cost_of_goods,
        gross_profit,
        expenses: expense_total,
        expenses_by_category,
        net_profit: gross_profit - expense_total,
        sale_count,
        voided_count,
        voided_amount,
        average_sale,
    })
}
