//! # Accounting
//!
//! Daily, weekly, monthly and annual summaries derived from the sale and expense stores.
//! Nothing here is stored: every summary is recomputed from the records on request.
//!
//! ```rust,ignore
//! let march = Period::Month { year: 2024, month: 3 };
//! let summary = system.accounting.summary(march).await?;
//! let by_day = system.accounting.breakdown(march).await?;
//! ```

pub mod period;
pub mod summary;

pub use period::Period;
pub use summary::{summarize, PeriodSummary};

use crate::clients::{ExpenseClient, SaleClient};
use crate::expense_actor::ExpenseError;
use crate::model::{Expense, Sale};
use crate::sale_actor::SaleError;
use thiserror::Error;
use tracing::{info, instrument};

#[derive(Debug, Clone, Error, PartialEq)]
pub enum AccountingError {
    #[error("Invalid period: {0}")]
    InvalidPeriod(String),

    #[error("Sales lookup failed: {0}")]
    Sales(#[from] SaleError),

    #[error("Expense lookup failed: {0}")]
    Expenses(#[from] ExpenseError),
}

/// Read-only view over sales and expenses.
#[derive(Clone)]
pub struct AccountingService {
    sales: SaleClient,
    expenses: ExpenseClient,
}

impl AccountingService {
    pub fn new(sales: SaleClient, expenses: ExpenseClient) -> Self {
        Self { sales, expenses }
    }

    #[instrument(skip(self), fields(period = %period))]
    pub async fn summary(&self, period: Period) -> Result<PeriodSummary, AccountingError> {
        let (sales, expenses) = self.records(period).await?;
        let summary = summarize(period, &sales, &expenses)?;
        info!(
            revenue = %summary.revenue,
            net_profit = %summary.net_profit,
            sales = summary.sale_count,
            "Period summarised"
        );
        Ok(summary)
    }

    /// One summary per subdivision of `period` (months of a year, days of a month or
    /// week). The records are fetched once.
    #[instrument(skip(self), fields(period = %period))]
    pub async fn breakdown(&self, period: Period) -> Result<Vec<PeriodSummary>, AccountingError> {
        let (sales, expenses) = self.records(period).await?;
        period
            .subdivide()?
            .into_iter()
            .map(|part| summarize(part, &sales, &expenses))
            .collect()
    }

    async fn records(
        &self,
        period: Period,
    ) -> Result<(Vec<Sale>, Vec<Expense>), AccountingError> {
        let (from, to) = period.utc_bounds()?;
        let (first_day, after_last_day) = period.bounds()?;
        let sales = self.sales.sales_between(from, to).await?;
        let expenses = self.expenses.expenses_between(first_day, after_last_day).await?;
        Ok((sales, expenses))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ExpenseCategory, ExpenseId, MenuItemId, PaymentMethod, SaleId, SaleLine};
    use actor_framework::mock::{page_of, MockClient};
    use actor_framework::FrameworkError;
    use chrono::{NaiveDate, TimeZone, Utc};
    use rust_decimal::Decimal;

    fn sale(id: u32, day: u32) -> Sale {
        Sale {
            id: SaleId(id),
            lines: vec![SaleLine {
                menu_item_id: MenuItemId(1),
                name: "Tiramisu".into(),
                quantity: 1,
                unit_price: Decimal::new(650, 2),
                unit_cost: Decimal::new(150, 2),
            }],
            payment: PaymentMethod::Cash,
            sold_at: Utc.with_ymd_and_hms(2024, 3, day, 19, 0, 0).unwrap(),
            order_id: None,
            voided: None,
        }
    }

    #[tokio::test]
    async fn breakdown_buckets_a_week_by_day() {
        let mut sales = MockClient::<Sale>::new();
        sales
            .expect_list()
            .return_ok(page_of(vec![sale(1, 4), sale(2, 4), sale(3, 6)]));
        let mut expenses = MockClient::<Expense>::new();
        expenses.expect_list().return_ok(page_of(vec![Expense {
            id: ExpenseId(1),
            category: ExpenseCategory::Maintenance,
            amount: Decimal::new(8000, 2),
            description: "Oven service".into(),
            incurred_on: NaiveDate::from_ymd_opt(2024, 3, 6).unwrap(),
        }]));

        let accounting =
            AccountingService::new(SaleClient::new(sales.client()), ExpenseClient::new(expenses.client()));
        let days = accounting
            .breakdown(Period::Week { year: 2024, week: 10 })
            .await
            .unwrap();

        assert_eq!(days.len(), 7);
        assert_eq!(days[0].sale_count, 2);
        assert_eq!(days[0].revenue, Decimal::new(1300, 2));
        assert_eq!(days[1].sale_count, 0);
        assert_eq!(days[2].net_profit, Decimal::new(-7500, 2));
        sales.verify();
        expenses.verify();
    }

    #[tokio::test]
    async fn store_failure_surfaces_as_sales_error() {
        let mut sales = MockClient::<Sale>::new();
        sales.expect_list().return_err(FrameworkError::ActorClosed);
        let expenses = MockClient::<Expense>::new();

        let accounting =
            AccountingService::new(SaleClient::new(sales.client()), ExpenseClient::new(expenses.client()));
        let result = accounting.summary(Period::Year(2024)).await;
        assert!(matches!(
            result,
            Err(AccountingError::Sales(SaleError::ActorCommunicationError(_)))
        ));
    }
}
