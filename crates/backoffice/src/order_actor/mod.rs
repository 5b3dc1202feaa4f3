//! # Order Actor
//!
//! Owns every customer order and is the single writer of order status.
//!
//! ## Structure
//!
//! - [`transitions`] - the order lifecycle: [`next_status`], [`advance`], [`cancel`]
//! - [`entity`] - [`ActorEntity`](actor_framework::ActorEntity) implementation for
//!   [`Order`](crate::model::Order)
//! - [`actions`] - [`OrderAction`] / [`OrderActionResult`]
//! - [`error`] - [`OrderError`]
//! - [`new()`] - Factory function that creates the actor and client
//!
//! ## Dependencies
//!
//! The actor runs with a [`MenuClient`](crate::clients::MenuClient) as context; each new
//! order is priced from the live menu:
//!
//! ```rust,ignore
//! let (actor, generic_client) = order_actor::new(32);
//! tokio::spawn(actor.run(menu_client.clone()));
//! let orders = OrderClient::new(generic_client);
//!
//! let id = orders.place_order(params).await?;
//! orders.advance(id).await?; // New -> InPreparation
//! ```
//!
//! ## Concurrency
//!
//! Two clients advancing the same order are handled one after the other by the actor
//! loop; the second sees the first one's result and fails with `InvalidTransition` if the
//! order has become terminal in between.

pub mod actions;
pub mod entity;
pub mod error;
pub mod transitions;

pub use actions::*;
pub use error::*;
pub use transitions::{advance, cancel, next_status, InvalidTransition, Transition};

use crate::model::Order;
use actor_framework::{ResourceActor, ResourceClient};

/// Creates a new Order actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<Order>, ResourceClient<Order>) {
    ResourceActor::new(buffer_size)
}
