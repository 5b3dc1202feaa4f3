//! # Actor Framework
//!
//! Building blocks for typed, in-memory record stores, each owned by one Tokio task. The
//! back-office application runs one store per record type (orders, stock items, menu items,
//! sales, expenses, HACCP logs, staff, shifts) on top of this crate.
//!
//! ## Why Resources + Actors?
//!
//! ### Resource-Oriented Architecture (ROA)
//!
//! - Every record type gets the same operations: create, get, list, update, delete
//! - Predictable lifecycle hooks
//! - One uniform client API across record types
//!
//! ### Actor Model
//!
//! - Isolated state (no shared memory, no locks)
//! - Message-passing concurrency
//! - Sequential processing within each store, so writes to one record never race
//!
//! **Further Reading**:
//! - [Actor Model (Wikipedia)](https://en.wikipedia.org/wiki/Actor_model)
//! - [Actors with Tokio](https://ryhl.io/blog/actors-with-tokio/)
//!
//! ## Architecture Overview
//!
//! 1. **Entity Layer** ([`ActorEntity`]) - the record type, its payloads, hooks and columns
//! 2. **Runtime Layer** ([`ResourceActor`]) - message processing and the record store
//! 3. **Interface Layer** ([`ResourceClient`], [`ActorClient`]) - typed requests
//! 4. **Query Layer** ([`query`]) - typed filters, ordering and pagination for listings
//!
//! ## Deletion Gate
//!
//! Records are never deleted in one step. [`ResourceClient::request_delete`] returns the
//! record for a confirmation prompt and marks it pending (the record may veto);
//! [`ResourceClient::confirm_delete`] removes it. A confirm without a pending request fails
//! with [`FrameworkError::DeleteNotRequested`].
//!
//! ## Context Injection Pattern
//!
//! Dependencies are injected at **runtime** via `run(context)`, not at construction time, so
//! every actor can be created first and wired afterwards:
//!
//! ```rust,ignore
//! let (menu_actor, menu_client) = ResourceActor::<MenuItem>::new(32);
//! let (order_actor, order_client) = ResourceActor::<Order>::new(32);
//!
//! tokio::spawn(menu_actor.run(inventory_client.clone()));
//! // Orders look up live menu prices when they are placed
//! tokio::spawn(order_actor.run(menu_client.clone()));
//! ```
//!
//! ## Concurrency Model
//!
//! - Each actor runs in its own Tokio task
//! - Messages are processed **sequentially** within an actor
//! - Multiple actors run in **parallel**
//!
//! ## Testing
//!
//! [`mock::MockClient`] answers a real `ResourceClient` from scripted expectations, so
//! domain clients and actors with dependencies can be tested without their collaborators.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;
pub mod query;
pub mod tracing;

// Re-export core types for convenience
pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use client_trait::ActorClient;
pub use entity::ActorEntity;
pub use error::FrameworkError;
pub use message::{ResourceRequest, Response};
pub use query::{Direction, FieldValue, Page, Predicate, Query, QueryError};
