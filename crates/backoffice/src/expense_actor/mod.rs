//! # Expense Actor
//!
//! Plain record store for money paid out. Expenses can be corrected and, after
//! confirmation, deleted.

pub mod entity;
pub mod error;

pub use entity::ExpenseAction;
pub use error::*;

use crate::model::Expense;
use actor_framework::{ResourceActor, ResourceClient};

pub fn new(buffer_size: usize) -> (ResourceActor<Expense>, ResourceClient<Expense>) {
    ResourceActor::new(buffer_size)
}
