//! # Sale Actor
//!
//! Point-of-sale records. A sale copies price and food cost from the menu when it is rung
//! up, so later menu changes never rewrite past takings. Sales are voided, not deleted.

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::model::Sale;
use actor_framework::{ResourceActor, ResourceClient};

pub fn new(buffer_size: usize) -> (ResourceActor<Sale>, ResourceClient<Sale>) {
    ResourceActor::new(buffer_size)
}
