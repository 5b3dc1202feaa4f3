//! Error types for the shift actor.

use crate::model::{ShiftId, StaffId};
use actor_framework::FrameworkError;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ShiftError {
    #[error("Shift not found: {0}")]
    NotFound(String),

    /// `ends_at` must be after `starts_at`.
    #[error("Shift must end after it starts")]
    InvalidTimes,

    #[error("Shift of {minutes} minutes exceeds the {max_hours} hour maximum")]
    TooLong { minutes: i64, max_hours: i64 },

    #[error("Unknown staff member: {0}")]
    UnknownStaff(StaffId),

    #[error("Staff member {0} is not active")]
    InactiveStaff(StaffId),

    /// The staff member is already scheduled during part of this time.
    #[error("Overlaps {existing} for the same staff member")]
    Overlap { existing: ShiftId },

    #[error("Staff lookup failed: {0}")]
    StaffLookup(String),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for ShiftError {
    fn from(msg: String) -> Self {
        ShiftError::ActorCommunicationError(msg)
    }
}

impl From<FrameworkError> for ShiftError {
    fn from(e: FrameworkError) -> Self {
        match e.downcast_entity::<ShiftError>() {
            Ok(err) => err,
            Err(FrameworkError::NotFound(id)) => ShiftError::NotFound(id),
            Err(other) => ShiftError::ActorCommunicationError(other.to_string()),
        }
    }
}
