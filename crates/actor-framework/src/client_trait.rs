//! # ActorClient Trait
//!
//! Common surface for record-specific clients: `get`, `list` and the two-step delete come
//! for free on top of the wrapped `ResourceClient`, with framework errors mapped to the
//! record's own error type.
use crate::query::{Page, Query};
use crate::{ActorEntity, FrameworkError, ResourceClient};
use async_trait::async_trait;

/// Trait for record-specific clients to inherit the standard store operations.
///
/// # Example
///
/// ```rust
/// use actor_framework::{ActorClient, ActorEntity, FieldValue, FrameworkError, ResourceClient};
/// use async_trait::async_trait;
///
/// #[derive(Clone, Debug)]
/// struct Supplier { id: u32, name: String }
/// #[derive(Debug)] struct SupplierCreate;
/// #[derive(Debug)] struct SupplierUpdate;
/// #[derive(Debug)] enum SupplierAction {}
/// #[derive(Clone, Copy, Debug)] enum SupplierField { Name }
///
/// #[derive(Debug, thiserror::Error)]
/// #[error("{0}")]
/// struct SupplierError(String);
///
/// impl From<String> for SupplierError {
///     fn from(s: String) -> Self { SupplierError(s) }
/// }
///
/// #[async_trait]
/// impl ActorEntity for Supplier {
///     type Id = u32;
///     type Create = SupplierCreate;
///     type Update = SupplierUpdate;
///     type Action = SupplierAction;
///     type ActionResult = ();
///     type Context = ();
///     type Field = SupplierField;
///     type Error = SupplierError;
///
///     fn from_create_params(id: u32, _: SupplierCreate) -> Result<Self, Self::Error> {
///         Ok(Self { id, name: String::new() })
///     }
///     fn field(&self, _: SupplierField) -> FieldValue { self.name.clone().into() }
///     async fn on_update(&mut self, _: SupplierUpdate, _: &()) -> Result<(), Self::Error> { Ok(()) }
///     async fn handle_action(&mut self, _: SupplierAction, _: &()) -> Result<(), Self::Error> { Ok(()) }
/// }
///
/// struct SupplierClient {
///     inner: ResourceClient<Supplier>,
/// }
///
/// #[async_trait]
/// impl ActorClient<Supplier> for SupplierClient {
///     type Error = SupplierError;
///
///     fn inner(&self) -> &ResourceClient<Supplier> {
///         &self.inner
///     }
///
///     fn map_error(e: FrameworkError) -> Self::Error {
///         SupplierError(e.to_string())
///     }
/// }
///
/// async fn usage(client: SupplierClient) {
///     // get(), list() and the delete gate are provided automatically
///     let _ = client.get(1).await;
///     let _ = client.request_delete(1).await;
///     let _ = client.confirm_delete(1).await;
/// }
/// ```
#[async_trait]
pub trait ActorClient<T: ActorEntity>: Send + Sync {
    /// The record-specific error type.
    type Error: From<String> + Send + Sync;

    /// Access the inner generic ResourceClient.
    fn inner(&self) -> &ResourceClient<T>;

    /// Map framework errors to the record-specific error type.
    fn map_error(e: FrameworkError) -> Self::Error;

    /// Fetch an entity by ID.
    #[tracing::instrument(skip(self))]
    async fn get(&self, id: T::Id) -> Result<Option<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().get(id).await.map_err(Self::map_error)
    }

    /// Fetch one page of records matching `query`.
    #[tracing::instrument(skip(self))]
    async fn list(&self, query: Query<T::Field>) -> Result<Page<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().list(query).await.map_err(Self::map_error)
    }

    /// First half of the delete gate: returns the record to show in the confirmation prompt.
    #[tracing::instrument(skip(self))]
    async fn request_delete(&self, id: T::Id) -> Result<T, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().request_delete(id).await.map_err(Self::map_error)
    }

    /// Second half of the delete gate. Fails unless `request_delete` succeeded first.
    #[tracing::instrument(skip(self))]
    async fn confirm_delete(&self, id: T::Id) -> Result<(), Self::Error> {
        tracing::debug!("Sending request");
        self.inner().confirm_delete(id).await.map_err(Self::map_error)
    }

    /// Dismisses the confirmation prompt.
    #[tracing::instrument(skip(self))]
    async fn cancel_delete(&self, id: T::Id) -> Result<bool, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().cancel_delete(id).await.map_err(Self::map_error)
    }
}
