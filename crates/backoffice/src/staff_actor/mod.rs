//! # Staff Actor
//!
//! Employees, their roles and pay rates. Leavers are deactivated so their past shifts
//! still cost out.

pub mod entity;
pub mod error;

pub use entity::StaffAction;
pub use error::*;

use crate::model::StaffMember;
use actor_framework::{ResourceActor, ResourceClient};

pub fn new(buffer_size: usize) -> (ResourceActor<StaffMember>, ResourceClient<StaffMember>) {
    ResourceActor::new(buffer_size)
}
