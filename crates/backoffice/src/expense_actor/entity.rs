use super::error::ExpenseError;
use crate::model::{within_limit, Expense, ExpenseCreate, ExpenseField, ExpenseId, ExpenseUpdate};
use actor_framework::{ActorEntity, FieldValue};
use async_trait::async_trait;
use rust_decimal::Decimal;

/// Expenses have no actions beyond the standard store operations.
#[derive(Debug, Clone)]
pub enum ExpenseAction {}

fn check_amount(amount: Decimal) -> Result<(), ExpenseError> {
    if amount <= Decimal::ZERO || !within_limit(amount) {
        return Err(ExpenseError::InvalidAmount(amount));
    }
    Ok(())
}

#[async_trait]
impl ActorEntity for Expense {
    type Id = ExpenseId;
    type Create = ExpenseCreate;
    type Update = ExpenseUpdate;
    type Action = ExpenseAction;
    type ActionResult = ();
    type Context = ();
    type Field = ExpenseField;
    type Error = ExpenseError;

    fn from_create_params(id: ExpenseId, params: ExpenseCreate) -> Result<Self, Self::Error> {
        check_amount(params.amount)?;
        if params.description.trim().is_empty() {
            return Err(ExpenseError::Validation("description is required".into()));
        }
        Ok(Self {
            id,
            category: params.category,
            amount: params.amount,
            description: params.description,
            incurred_on: params.incurred_on,
        })
    }

    fn field(&self, field: ExpenseField) -> FieldValue {
        match field {
            ExpenseField::Category => self.category.into(),
            ExpenseField::Amount => self.amount.into(),
            ExpenseField::Description => self.description.clone().into(),
            ExpenseField::IncurredOn => self.incurred_on.into(),
        }
    }

    async fn on_update(&mut self, update: ExpenseUpdate, _ctx: &()) -> Result<(), Self::Error> {
        if let Some(amount) = update.amount {
            check_amount(amount)?;
        }
        if let Some(description) = &update.description {
            if description.trim().is_empty() {
                return Err(ExpenseError::Validation("description is required".into()));
            }
        }

        if let Some(category) = update.category {
            self.category = category;
        }
        if let Some(amount) = update.amount {
            self.amount = amount;
        }
        if let Some(description) = update.description {
            self.description = description;
        }
        if let Some(incurred_on) = update.incurred_on {
            self.incurred_on = incurred_on;
        }
        Ok(())
    }

    async fn handle_action(&mut self, action: ExpenseAction, _ctx: &()) -> Result<(), Self::Error> {
        match action {}
    }
}
