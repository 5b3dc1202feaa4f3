//! # ActorEntity Trait
//!
//! The `ActorEntity` trait is the contract every back-office record (orders, stock items,
//! menu items, sales, HACCP logs, ...) implements to be stored by the generic `ResourceActor`.
//! It names the ID, DTO, action, context, query-field and error types, and provides the
//! lifecycle hooks (`on_create`, `on_update`, `check_delete`, `on_delete`, `handle_action`).
//!
//! # Architecture Note
//! The store logic in [`ResourceActor`](crate::ResourceActor) is written *once*. Each record
//! type plugs in its own payloads through associated types, so an `OrderCreate` payload can
//! never reach the stock actor: the compiler rejects it.
//!
//! # Provided Methods (Hooks)
//! - [`ActorEntity::on_create`]
//! - [`ActorEntity::check_delete`]
//! - [`ActorEntity::on_delete`]
//!
//! The defaults accept the operation (`Ok(())`).

use crate::query::FieldValue;
use async_trait::async_trait;
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Trait that any record type must implement to be managed by ResourceActor.
///
/// # Async & Context
/// Hooks are `async` so they can call other actors (a new order looks up menu prices).
/// The `Context` type is injected into every hook when the actor is started, which lets
/// dependencies be wired after all actors exist ("late binding").
#[async_trait]
pub trait ActorEntity: Clone + Send + Sync + 'static {
    /// The unique identifier for this entity.
    /// Must be convertible from u32 for automatic ID generation, and ordered so that
    /// listings come back in a stable order.
    type Id: Eq + Ord + Hash + Clone + Send + Sync + Display + Debug + From<u32>;

    /// The data required to create a new instance.
    type Create: Send + Sync + Debug;

    /// The data required to update an existing instance.
    type Update: Send + Sync + Debug;

    /// Record-specific operations (e.g. `Advance` for orders, `Restock` for stock items).
    type Action: Send + Sync + Debug;

    /// The result type returned by custom actions.
    type ActionResult: Send + Sync + Debug;

    /// The runtime context (dependencies) injected into the actor.
    /// Use `()` if no dependencies are needed.
    type Context: Send + Sync;

    /// The queryable columns of this record.
    ///
    /// Queries are built from this enum, so a filter on a column the record does not
    /// have fails to compile instead of failing at the store.
    type Field: Copy + Debug + Send + Sync + 'static;

    /// The error type for this entity.
    ///
    /// # Design Note: Error Granularity
    /// One error enum per record type rather than one per message. A client matches on
    /// `OrderError` regardless of which operation failed.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Construct the full Entity from the ID and Payload.
    /// This is called synchronously before `on_create`.
    fn from_create_params(id: Self::Id, params: Self::Create) -> Result<Self, Self::Error>;

    /// Reads one column for query evaluation.
    fn field(&self, field: Self::Field) -> FieldValue;

    // --- Lifecycle Hooks (Async) ---

    /// Called after construction and before the entity is stored.
    /// An error here aborts the create and nothing is stored.
    async fn on_create(&mut self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Called when an update request is received.
    async fn on_update(
        &mut self,
        update: Self::Update,
        _ctx: &Self::Context,
    ) -> Result<(), Self::Error>;

    /// Called when a deletion is *requested*, before the confirmation prompt is shown.
    /// Records that must be retained (orders, sales, HACCP logs) veto here.
    fn check_delete(&self) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Called immediately before a confirmed deletion removes the entity.
    async fn on_delete(&self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    // --- Action Handler (Async) ---

    /// Handle a custom record-specific action.
    async fn handle_action(
        &mut self,
        action: Self::Action,
        _ctx: &Self::Context,
    ) -> Result<Self::ActionResult, Self::Error>;
}
