//! Error types for the staff actor.

use actor_framework::FrameworkError;
use rust_decimal::Decimal;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum StaffError {
    #[error("Staff member not found: {0}")]
    NotFound(String),

    #[error("Invalid hourly rate: {0}")]
    InvalidRate(Decimal),

    #[error("Staff validation error: {0}")]
    Validation(String),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for StaffError {
    fn from(msg: String) -> Self {
        StaffError::ActorCommunicationError(msg)
    }
}

impl From<FrameworkError> for StaffError {
    fn from(e: FrameworkError) -> Self {
        match e.downcast_entity::<StaffError>() {
            Ok(err) => err,
            Err(FrameworkError::NotFound(id)) => StaffError::NotFound(id),
            Err(other) => StaffError::ActorCommunicationError(other.to_string()),
        }
    }
}
