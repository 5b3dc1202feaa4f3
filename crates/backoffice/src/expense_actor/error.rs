//! Error types for the expense actor.

use actor_framework::FrameworkError;
use rust_decimal::Decimal;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ExpenseError {
    #[error("Expense not found: {0}")]
    NotFound(String),

    /// Expenses are positive amounts no larger than [`MAX_AMOUNT`](crate::model::MAX_AMOUNT).
    #[error("Invalid amount: {0}")]
    InvalidAmount(Decimal),

    #[error("Expense validation error: {0}")]
    Validation(String),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for ExpenseError {
    fn from(msg: String) -> Self {
        ExpenseError::ActorCommunicationError(msg)
    }
}

impl From<FrameworkError> for ExpenseError {
    fn from(e: FrameworkError) -> Self {
        match e.downcast_entity::<ExpenseError>() {
            Ok(err) => err,
            Err(FrameworkError::NotFound(id)) => ExpenseError::NotFound(id),
            Err(other) => ExpenseError::ActorCommunicationError(other.to_string()),
        }
    }
}
