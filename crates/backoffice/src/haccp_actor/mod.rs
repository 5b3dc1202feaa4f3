//! # HACCP Actor
//!
//! Food-safety temperature records. Each reading is checked against its zone's critical
//! limit when it is logged; readings outside the limit stay open deviations until a
//! corrective action is recorded. Logs are never edited or deleted.
//!
//! ## Structure
//!
//! - [`compliance`] - [`HaccpLimits`], the actor's context
//! - [`entity`] - [`ActorEntity`](actor_framework::ActorEntity) implementation for
//!   [`TemperatureLog`](crate::model::TemperatureLog)
//! - [`actions`] - [`HaccpAction`]
//! - [`error`] - [`HaccpError`]

pub mod actions;
pub mod compliance;
pub mod entity;
pub mod error;

pub use actions::*;
pub use compliance::{HaccpLimits, Limit};
pub use error::*;

use crate::model::TemperatureLog;
use actor_framework::{ResourceActor, ResourceClient};

pub fn new(buffer_size: usize) -> (ResourceActor<TemperatureLog>, ResourceClient<TemperatureLog>) {
    ResourceActor::new(buffer_size)
}
