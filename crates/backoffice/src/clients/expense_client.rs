//! # Expense Client
use crate::expense_actor::ExpenseError;
use crate::model::{Expense, ExpenseCreate, ExpenseField, ExpenseId, ExpenseUpdate};
use actor_framework::{ActorClient, Direction, FrameworkError, Predicate, Query, ResourceClient};
use async_trait::async_trait;
use chrono::NaiveDate;
use tracing::{debug, instrument};

#[derive(Clone)]
pub struct ExpenseClient {
    inner: ResourceClient<Expense>,
}

impl ExpenseClient {
    pub fn new(inner: ResourceClient<Expense>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self, params), fields(category = params.category.as_str()))]
    pub async fn record_expense(&self, params: ExpenseCreate) -> Result<ExpenseId, ExpenseError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(ExpenseError::from)
    }

    #[instrument(skip(self))]
    pub async fn update_expense(
        &self,
        id: ExpenseId,
        update: ExpenseUpdate,
    ) -> Result<Expense, ExpenseError> {
        debug!("Sending request");
        self.inner.update(id, update).await.map_err(ExpenseError::from)
    }

    /// Expenses incurred on days in `[from, to)`, oldest first.
    #[instrument(skip(self))]
    pub async fn expenses_between(
        &self,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Vec<Expense>, ExpenseError> {
        let query = Query::new()
            .filter(Predicate::gte(ExpenseField::IncurredOn, from))
            .filter(Predicate::lt(ExpenseField::IncurredOn, to))
            .order_by(ExpenseField::IncurredOn, Direction::Asc);
        Ok(self.list(query).await?.items)
    }
}

#[async_trait]
impl ActorClient<Expense> for ExpenseClient {
    type Error = ExpenseError;

    fn inner(&self) -> &ResourceClient<Expense> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        ExpenseError::from(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actor_framework::mock::MockClient;

    #[tokio::test]
    async fn delete_needs_a_request_first() {
        let mut mock = MockClient::<Expense>::new();
        mock.expect_confirm_delete(ExpenseId(4))
            .return_err(FrameworkError::DeleteNotRequested("expense_4".into()));

        let expenses = ExpenseClient::new(mock.client());
        assert!(matches!(
            expenses.confirm_delete(ExpenseId(4)).await,
            Err(ExpenseError::ActorCommunicationError(_))
        ));
        mock.verify();
    }

    #[tokio::test]
    async fn missing_expense_is_not_found() {
        let mut mock = MockClient::<Expense>::new();
        mock.expect_update(ExpenseId(2))
            .return_err(FrameworkError::NotFound("expense_2".into()));

        let expenses = ExpenseClient::new(mock.client());
        assert_eq!(
            expenses
                .update_expense(ExpenseId(2), ExpenseUpdate::default())
                .await,
            Err(ExpenseError::NotFound("expense_2".into()))
        );
        mock.verify();
    }
}
