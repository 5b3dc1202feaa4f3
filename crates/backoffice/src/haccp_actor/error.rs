//! Error types for the HACCP actor.

use crate::model::TemperatureLogId;
use actor_framework::FrameworkError;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum HaccpError {
    #[error("Temperature log not found: {0}")]
    NotFound(String),

    #[error("Temperature log validation error: {0}")]
    Validation(String),

    /// Recorded readings cannot be edited.
    #[error("Temperature log {0} is immutable")]
    Immutable(TemperatureLogId),

    /// Food safety records are kept and never deleted.
    #[error("Temperature log {0} must be retained")]
    RecordRetained(TemperatureLogId),

    #[error("Temperature log {0} is within limits; no corrective action needed")]
    NoDeviation(TemperatureLogId),

    #[error("Temperature log {0} already has a corrective action")]
    CorrectiveActionExists(TemperatureLogId),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for HaccpError {
    fn from(msg: String) -> Self {
        HaccpError::ActorCommunicationError(msg)
    }
}

impl From<FrameworkError> for HaccpError {
    fn from(e: FrameworkError) -> Self {
        match e.downcast_entity::<HaccpError>() {
            Ok(err) => err,
            Err(FrameworkError::NotFound(id)) => HaccpError::NotFound(id),
            Err(other) => HaccpError::ActorCommunicationError(other.to_string()),
        }
    }
}
