//! # Inventory Actor
//!
//! Tracks stock items: what is on the shelf, what it cost and when to reorder.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](actor_framework::ActorEntity) implementation for
//!   [`Product`](crate::model::Product)
//! - [`error`] - [`InventoryError`]
//! - [`actions`] - [`InventoryAction`] and [`InventoryActionResult`] for stock movements
//! - [`new()`] - Factory function that creates the actor and client
//!
//! ## Custom Actions
//!
//! ```rust,ignore
//! // Delivery arrived
//! inventory.restock(flour_id, dec("25")).await?;
//!
//! // Used in service; fails instead of going negative
//! inventory.consume(flour_id, dec("1.5")).await?;
//!
//! // Everything below its reorder threshold
//! let report = inventory.low_stock_report().await?;
//! ```

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::model::Product;
use actor_framework::{ResourceActor, ResourceClient};

/// Creates a new inventory actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<Product>, ResourceClient<Product>) {
    ResourceActor::new(buffer_size)
}
