//! # Restaurant Back Office
//!
//! In-memory back office for a delivery restaurant, built as one actor per record type on
//! top of [`actor_framework`].
//!
//! - **[model]**: the records ([`Order`](model::Order), [`Product`](model::Product),
//!   [`MenuItem`](model::MenuItem), [`Sale`](model::Sale), ...) and their payloads.
//! - **`*_actor`**: the [`ActorEntity`](actor_framework::ActorEntity) implementation,
//!   actions and error type of each record. [`order_actor`] also holds the order
//!   lifecycle state machine.
//! - **[clients]**: typed clients, one per actor.
//! - **[accounting]**: period summaries over sales and expenses.
//! - **[lifecycle]**: starting, seeding and stopping the whole system.
//! - **[config]**: YAML settings.

pub mod accounting;
pub mod clients;
pub mod config;
pub mod expense_actor;
pub mod haccp_actor;
pub mod inventory_actor;
pub mod lifecycle;
pub mod menu_actor;
pub mod model;
pub mod order_actor;
pub mod sale_actor;
pub mod shift_actor;
pub mod staff_actor;
