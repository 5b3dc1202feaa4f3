//! # Mock Clients & Testing Guide
//!
//! `MockClient<T>` hands out a real `ResourceClient<T>` whose requests are answered from a
//! queue of expectations instead of a store. Use it to test the logic *around* a client
//! (a domain client wrapper, or an actor whose context holds the client) without spawning
//! the dependency.
//!
//! | | MockClient | Real Actor |
//! |---------|------------|------------|
//! | **State** | Scripted replies | Real records |
//! | **Determinism** | Full | Subject to scheduler |
//! | **Error Injection** | `return_err` | Needs the right state |
//!
//! ## Patterns
//!
//! 1. **Client logic**: wrap `mock.client()` in the domain client and assert on results.
//! 2. **Actor with mocked dependencies**: start a real actor with a context built from mock
//!    clients (the order store resolving menu prices against a mocked menu).
//! 3. **Full system**: start every actor and drive it end to end.
//!
//! ```rust
//! use actor_framework::mock::MockClient;
//! use actor_framework::{ActorEntity, FieldValue, FrameworkError};
//! use async_trait::async_trait;
//!
//! #[derive(Clone, Debug)] struct Supplier { id: u32 }
//! #[derive(Debug)] struct SupplierCreate;
//! #[derive(Debug)] struct SupplierUpdate;
//! #[derive(Debug)] enum SupplierAction {}
//! #[derive(Clone, Copy, Debug)] enum SupplierField { Id }
//! #[derive(Debug, thiserror::Error)] #[error("Err")] struct SupplierError;
//!
//! #[async_trait]
//! impl ActorEntity for Supplier {
//!     type Id = u32; type Create = SupplierCreate; type Update = SupplierUpdate;
//!     type Action = SupplierAction; type ActionResult = (); type Context = ();
//!     type Field = SupplierField; type Error = SupplierError;
//!     fn from_create_params(id: u32, _: SupplierCreate) -> Result<Self, Self::Error> { Ok(Self { id }) }
//!     fn field(&self, _: SupplierField) -> FieldValue { self.id.into() }
//!     async fn on_update(&mut self, _: SupplierUpdate, _: &()) -> Result<(), Self::Error> { Ok(()) }
//!     async fn handle_action(&mut self, _: SupplierAction, _: &()) -> Result<(), Self::Error> { Ok(()) }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut mock = MockClient::<Supplier>::new();
//!     let client = mock.client();
//!
//!     // Simulate a downstream failure
//!     mock.expect_get(1).return_err(FrameworkError::ActorClosed);
//!
//!     let result = client.get(1).await;
//!     assert!(matches!(result, Err(FrameworkError::ActorClosed)));
//!     mock.verify();
//! }
//! ```
//!
//! For step-by-step control, [`create_mock_client`] returns the client together with the
//! raw request receiver; [`expect_create`], [`expect_get`], [`expect_list`] and
//! [`expect_action`] pull the next request off it.

use crate::client::ResourceClient;
use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use crate::message::ResourceRequest;
use crate::query::{Page, Query};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::mpsc;

// =============================================================================
// EXPECTATION BUILDER API
// =============================================================================

/// A scripted reply, consumed in FIFO order.
enum Expectation<T: ActorEntity> {
    Get {
        id: T::Id,
        response: Result<Option<T>, FrameworkError>,
    },
    Create {
        response: Result<T::Id, FrameworkError>,
    },
    List {
        response: Result<Page<T>, FrameworkError>,
    },
    Update {
        id: T::Id,
        response: Result<T, FrameworkError>,
    },
    RequestDelete {
        id: T::Id,
        response: Result<T, FrameworkError>,
    },
    ConfirmDelete {
        id: T::Id,
        response: Result<(), FrameworkError>,
    },
    Action {
        id: T::Id,
        response: Result<T::ActionResult, FrameworkError>,
    },
}

type Expectations<T> = Arc<Mutex<VecDeque<Expectation<T>>>>;

/// A mock client with expectation tracking for fluent testing.
///
/// Requests whose kind or ID differs from the next expectation panic the responder task,
/// which surfaces in the test as `ActorDropped`.
pub struct MockClient<T: ActorEntity> {
    client: ResourceClient<T>,
    expectations: Expectations<T>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<T: ActorEntity> Default for MockClient<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ActorEntity> MockClient<T> {
    /// Creates a new mock client with no expectations. Must be called inside a Tokio runtime.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<ResourceRequest<T>>(100);
        let expectations: Expectations<T> = Arc::new(Mutex::new(VecDeque::new()));
        let queue = expectations.clone();

        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let expectation = queue
                    .lock()
                    .unwrap_or_else(|poisoned| poisoned.into_inner())
                    .pop_front();

                match (request, expectation) {
                    (
                        ResourceRequest::Get { id, respond_to },
                        Some(Expectation::Get { id: want, response }),
                    ) => {
                        assert_eq!(id, want, "get called with unexpected id");
                        let _ = respond_to.send(response);
                    }
                    (
                        ResourceRequest::Create { respond_to, .. },
                        Some(Expectation::Create { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        ResourceRequest::List { respond_to, .. },
                        Some(Expectation::List { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        ResourceRequest::Update { id, respond_to, .. },
                        Some(Expectation::Update { id: want, response }),
                    ) => {
                        assert_eq!(id, want, "update called with unexpected id");
                        let _ = respond_to.send(response);
                    }
                    (
                        ResourceRequest::RequestDelete { id, respond_to },
                        Some(Expectation::RequestDelete { id: want, response }),
                    ) => {
                        assert_eq!(id, want, "request_delete called with unexpected id");
                        let _ = respond_to.send(response);
                    }
                    (
                        ResourceRequest::ConfirmDelete { id, respond_to },
                        Some(Expectation::ConfirmDelete { id: want, response }),
                    ) => {
                        assert_eq!(id, want, "confirm_delete called with unexpected id");
                        let _ = respond_to.send(response);
                    }
                    (
                        ResourceRequest::Action { id, respond_to, .. },
                        Some(Expectation::Action { id: want, response }),
                    ) => {
                        assert_eq!(id, want, "action called with unexpected id");
                        let _ = respond_to.send(response);
                    }
                    _ => {
                        panic!("Unexpected request or expectation mismatch");
                    }
                }
            }
        });

        Self {
            client: ResourceClient::new(sender),
            expectations,
            _handle: handle,
        }
    }

    /// Returns the client for use in tests.
    pub fn client(&self) -> ResourceClient<T> {
        self.client.clone()
    }

    fn push(&self, expectation: Expectation<T>) {
        self.expectations
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push_back(expectation);
    }

    /// Expects a `get` operation.
    pub fn expect_get(&mut self, id: T::Id) -> ExpectationBuilder<'_, T, Option<T>> {
        ExpectationBuilder::new(self, move |response| Expectation::Get { id, response })
    }

    /// Expects a `create` operation.
    pub fn expect_create(&mut self) -> ExpectationBuilder<'_, T, T::Id> {
        ExpectationBuilder::new(self, |response| Expectation::Create { response })
    }

    /// Expects a `list` operation, whatever the query.
    pub fn expect_list(&mut self) -> ExpectationBuilder<'_, T, Page<T>> {
        ExpectationBuilder::new(self, |response| Expectation::List { response })
    }

    /// Expects an `update` operation.
    pub fn expect_update(&mut self, id: T::Id) -> ExpectationBuilder<'_, T, T> {
        ExpectationBuilder::new(self, move |response| Expectation::Update { id, response })
    }

    /// Expects a `request_delete` operation.
    pub fn expect_request_delete(&mut self, id: T::Id) -> ExpectationBuilder<'_, T, T> {
        ExpectationBuilder::new(self, move |response| Expectation::RequestDelete {
            id,
            response,
        })
    }

    /// Expects a `confirm_delete` operation.
    pub fn expect_confirm_delete(&mut self, id: T::Id) -> ExpectationBuilder<'_, T, ()> {
        ExpectationBuilder::new(self, move |response| Expectation::ConfirmDelete {
            id,
            response,
        })
    }

    /// Expects an `action` operation.
    pub fn expect_action(&mut self, id: T::Id) -> ExpectationBuilder<'_, T, T::ActionResult> {
        ExpectationBuilder::new(self, move |response| Expectation::Action { id, response })
    }

    /// Verifies that all expectations were met.
    pub fn verify(&self) {
        let remaining = self
            .expectations
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .len();
        if remaining != 0 {
            panic!("Not all expectations were met. {} remaining", remaining);
        }
    }
}

/// Finishes an expectation with either a success value or an error.
pub struct ExpectationBuilder<'a, T: ActorEntity, R> {
    mock: &'a MockClient<T>,
    build: Box<dyn FnOnce(Result<R, FrameworkError>) -> Expectation<T> + 'a>,
}

impl<'a, T: ActorEntity, R> ExpectationBuilder<'a, T, R> {
    fn new(
        mock: &'a MockClient<T>,
        build: impl FnOnce(Result<R, FrameworkError>) -> Expectation<T> + 'a,
    ) -> Self {
        Self {
            mock,
            build: Box::new(build),
        }
    }

    /// Sets the expectation to return a successful result.
    pub fn return_ok(self, value: R) {
        self.mock.push((self.build)(Ok(value)));
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: FrameworkError) {
        self.mock.push((self.build)(Err(error)));
    }
}

/// Builds a single-page result, handy for `expect_list().return_ok(..)`.
pub fn page_of<T>(items: Vec<T>) -> Page<T> {
    Page {
        total: items.len(),
        items,
        offset: 0,
        limit: None,
    }
}

// =============================================================================
// RAW CHANNEL HELPERS
// =============================================================================

/// Creates a client and the receiver its requests arrive on.
///
/// The test plays the actor: pull a request with one of the `expect_*` helpers, assert on
/// its payload, then answer through the returned responder.
pub fn create_mock_client<T: ActorEntity>(
    buffer_size: usize,
) -> (ResourceClient<T>, mpsc::Receiver<ResourceRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (ResourceClient::new(sender), receiver)
}

/// Helper to verify that the next message is a Create request
pub async fn expect_create<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(
    T::Create,
    tokio::sync::oneshot::Sender<Result<T::Id, FrameworkError>>,
)> {
    match receiver.recv().await {
        Some(ResourceRequest::Create { params, respond_to }) => Some((params, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a Get request
pub async fn expect_get<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(
    T::Id,
    tokio::sync::oneshot::Sender<Result<Option<T>, FrameworkError>>,
)> {
    match receiver.recv().await {
        Some(ResourceRequest::Get { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a List request
pub async fn expect_list<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(
    Query<T::Field>,
    tokio::sync::oneshot::Sender<Result<Page<T>, FrameworkError>>,
)> {
    match receiver.recv().await {
        Some(ResourceRequest::List { query, respond_to }) => Some((query, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is an Action request
pub async fn expect_action<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(
    T::Id,
    T::Action,
    tokio::sync::oneshot::Sender<Result<T::ActionResult, FrameworkError>>,
)> {
    match receiver.recv().await {
        Some(ResourceRequest::Action {
            id,
            action,
            respond_to,
        }) => Some((id, action, respond_to)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::FieldValue;
    use async_trait::async_trait;

    #[derive(Clone, Debug, PartialEq)]
    struct Supplier {
        id: u32,
        name: String,
        phone: String,
    }

    #[derive(Debug)]
    struct SupplierCreate {
        name: String,
        phone: String,
    }

    #[derive(Debug)]
    struct SupplierUpdate;

    #[derive(Debug)]
    enum SupplierAction {}

    #[derive(Clone, Copy, Debug)]
    enum SupplierField {
        Name,
    }

    #[derive(Debug, thiserror::Error)]
    #[error("Supplier error")]
    struct SupplierError;

    #[async_trait]
    impl ActorEntity for Supplier {
        type Id = u32;
        type Create = SupplierCreate;
        type Update = SupplierUpdate;
        type Action = SupplierAction;
        type ActionResult = ();
        type Context = ();
        type Field = SupplierField;
        type Error = SupplierError;

        fn from_create_params(id: u32, params: SupplierCreate) -> Result<Self, Self::Error> {
            Ok(Self {
                id,
                name: params.name,
                phone: params.phone,
            })
        }

        fn field(&self, field: SupplierField) -> FieldValue {
            match field {
                SupplierField::Name => self.name.clone().into(),
            }
        }

        async fn on_update(
            &mut self,
            _update: SupplierUpdate,
            _ctx: &Self::Context,
        ) -> Result<(), Self::Error> {
            Ok(())
        }

        async fn handle_action(
            &mut self,
            _action: SupplierAction,
            _ctx: &Self::Context,
        ) -> Result<(), Self::Error> {
            Ok(())
        }
    }

    fn supplier(id: u32, name: &str) -> Supplier {
        Supplier {
            id,
            name: name.to_string(),
            phone: "555-0100".to_string(),
        }
    }

    #[tokio::test]
    async fn test_raw_channel_create() {
        let (client, mut receiver) = create_mock_client::<Supplier>(10);

        let create_task = tokio::spawn(async move {
            client
                .create(SupplierCreate {
                    name: "Green Farm".to_string(),
                    phone: "555-0101".to_string(),
                })
                .await
        });

        let (payload, responder) = expect_create(&mut receiver)
            .await
            .expect("Expected Create request");
        assert_eq!(payload.name, "Green Farm");
        assert_eq!(payload.phone, "555-0101");
        responder.send(Ok(1)).unwrap();

        let result = create_task.await.unwrap();
        assert!(matches!(result, Ok(1)));
    }

    #[tokio::test]
    async fn test_raw_channel_list_carries_query() {
        let (client, mut receiver) = create_mock_client::<Supplier>(10);

        let list_task = tokio::spawn(async move {
            client
                .list(Query::new().filter(crate::query::Predicate::like(SupplierField::Name, "%farm%")))
                .await
        });

        let (query, responder) = expect_list(&mut receiver).await.expect("Expected List");
        assert_eq!(query.filters().len(), 1);
        responder.send(Ok(page_of(vec![supplier(3, "Green Farm")]))).unwrap();

        let page = list_task.await.unwrap().unwrap();
        assert_eq!(page.total, 1);
        assert_eq!(page.items[0].id, 3);
    }

    #[tokio::test]
    async fn test_mock_client_with_expectations() {
        let mut mock = MockClient::<Supplier>::new();

        mock.expect_create().return_ok(1);
        mock.expect_get(1).return_ok(Some(supplier(1, "Green Farm")));
        mock.expect_request_delete(1)
            .return_ok(supplier(1, "Green Farm"));
        mock.expect_confirm_delete(1).return_ok(());

        let client = mock.client();

        let id = client
            .create(SupplierCreate {
                name: "Green Farm".to_string(),
                phone: "555-0100".to_string(),
            })
            .await
            .unwrap();
        assert_eq!(id, 1);

        let fetched = client.get(1).await.unwrap();
        assert_eq!(fetched.unwrap().name, "Green Farm");

        let prompt = client.request_delete(1).await.unwrap();
        assert_eq!(prompt.name, "Green Farm");
        client.confirm_delete(1).await.unwrap();

        mock.verify();
    }

    #[tokio::test]
    async fn test_mock_client_error_injection() {
        let mut mock = MockClient::<Supplier>::new();
        mock.expect_get(9)
            .return_err(FrameworkError::NotFound("9".to_string()));

        let result = mock.client().get(9).await;
        assert!(matches!(result, Err(FrameworkError::NotFound(id)) if id == "9"));
        mock.verify();
    }
}
