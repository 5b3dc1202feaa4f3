//! # Menu Actor
//!
//! The menu and its food-cost calculator. Every dish carries a recipe of stock items; its
//! food cost is the recipe priced at the inventory's current unit costs.
//!
//! ## Structure
//!
//! - [`costing`] - food cost, margin and suggested-price arithmetic
//! - [`entity`] - [`ActorEntity`](actor_framework::ActorEntity) implementation for
//!   [`MenuItem`](crate::model::MenuItem)
//! - [`actions`] - [`MenuAction`] / [`MenuActionResult`]
//! - [`error`] - [`MenuError`]
//!
//! ## Dependencies
//!
//! Runs with a [`MenuContext`]: the inventory client for unit costs, and the menu settings
//! for the target food-cost percentage.

pub mod actions;
pub mod costing;
pub mod entity;
pub mod error;

pub use actions::*;
pub use costing::CostBreakdown;
pub use error::*;

use crate::clients::InventoryClient;
use crate::config::MenuSettings;
use crate::model::MenuItem;
use actor_framework::{ResourceActor, ResourceClient};

/// Context injected into the menu actor.
#[derive(Clone)]
pub struct MenuContext {
    pub inventory: InventoryClient,
    pub settings: MenuSettings,
}

pub fn new(buffer_size: usize) -> (ResourceActor<MenuItem>, ResourceClient<MenuItem>) {
    ResourceActor::new(buffer_size)
}
