//! # Shift Actor
//!
//! The staff roster. Runs with a [`StaffClient`](crate::clients::StaffClient) as context so
//! shifts can only be created for existing, active staff.

pub mod entity;
pub mod error;
pub mod labour;

pub use entity::{ShiftAction, MAX_SHIFT_HOURS};
pub use error::*;
pub use labour::labour_cost;

use crate::model::Shift;
use actor_framework::{ResourceActor, ResourceClient};

pub fn new(buffer_size: usize) -> (ResourceActor<Shift>, ResourceClient<Shift>) {
    ResourceActor::new(buffer_size)
}
