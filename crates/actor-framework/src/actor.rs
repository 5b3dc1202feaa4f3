//! # Generic Actor Server
//!
//! This module defines the `ResourceActor`, the store that owns every record of one type and
//! processes requests for them sequentially.

use crate::client::ResourceClient;
use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use crate::message::ResourceRequest;
use std::collections::{BTreeMap, BTreeSet};
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The generic actor that manages a collection of entities.
///
/// # Architecture Note
/// This struct is the "Server" half of the actor. It owns the records (`store`), the set of
/// deletions awaiting confirmation, and the receiver end of the channel.
///
/// **Concurrency Model**:
/// Each store processes its own messages *sequentially* in one Tokio task, so the state
/// needs no `Mutex`. This is also the single-writer guarantee for records: two clients
/// advancing the same order are serialised by the loop, and the second one sees the
/// status the first one left behind.
///
/// # Usage Pattern
///
/// 1.  **Create**: `ResourceActor::new(capacity)` returns the actor and its client.
/// 2.  **Wire**: pass dependencies into `actor.run(context)`.
/// 3.  **Run**: spawn the run loop.
///
/// ```rust
/// use actor_framework::{ActorEntity, FieldValue, ResourceActor};
/// use async_trait::async_trait;
///
/// #[derive(Clone, Debug)] struct Table { id: u32, seats: u32 }
/// #[derive(Debug)] struct TableCreate { seats: u32 }
/// #[derive(Debug)] struct TableUpdate;
/// #[derive(Debug)] enum TableAction {}
/// #[derive(Clone, Copy, Debug)] enum TableField { Seats }
/// #[derive(Debug, thiserror::Error)] #[error("table error")] struct TableError;
///
/// #[async_trait]
/// impl ActorEntity for Table {
///     type Id = u32;
///     type Create = TableCreate;
///     type Update = TableUpdate;
///     type Action = TableAction;
///     type ActionResult = ();
///     type Context = ();
///     type Field = TableField;
///     type Error = TableError;
///
///     fn from_create_params(id: u32, p: TableCreate) -> Result<Self, Self::Error> {
///         Ok(Self { id, seats: p.seats })
///     }
///     fn field(&self, field: TableField) -> FieldValue {
///         match field { TableField::Seats => self.seats.into() }
///     }
///     async fn on_update(&mut self, _: TableUpdate, _: &()) -> Result<(), Self::Error> { Ok(()) }
///     async fn handle_action(&mut self, _: TableAction, _: &()) -> Result<(), Self::Error> { Ok(()) }
/// }
///
/// #[tokio::main]
/// async fn main() {
///     let (actor, client) = ResourceActor::<Table>::new(10);
///     tokio::spawn(actor.run(()));
///     let id = client.create(TableCreate { seats: 4 }).await.unwrap();
///     assert_eq!(client.get(id).await.unwrap().unwrap().seats, 4);
/// }
/// ```
///
/// # Operations
///
/// * **Create**: next sequential ID, `from_create_params`, `on_create`, insert.
/// * **Get**: clone of the record, or `None`.
/// * **List**: records in ID order through the query (filter, sort, paginate).
/// * **Update**: `on_update` on the stored record, returns the new state.
/// * **RequestDelete**: `check_delete`, then remember the ID as pending.
/// * **ConfirmDelete**: only for a pending ID; `on_delete`, then remove.
/// * **CancelDelete**: forget a pending ID.
/// * **Action**: `handle_action` on the stored record.
pub struct ResourceActor<T: ActorEntity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: BTreeMap<T::Id, T>,
    pending_deletes: BTreeSet<T::Id>,
    next_id: u32,
}

impl<T: ActorEntity> ResourceActor<T> {
    /// Creates a new `ResourceActor` and its associated `ResourceClient`.
    ///
    /// `buffer_size` is the capacity of the request channel; callers wait when it is full.
    pub fn new(buffer_size: usize) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: BTreeMap::new(),
            pending_deletes: BTreeSet::new(),
            next_id: 1,
        };
        let client = ResourceClient::new(sender);
        (actor, client)
    }

    /// Runs the actor's event loop, processing messages until every client is dropped.
    ///
    /// # Context Injection
    /// `context` is handed to every entity hook.
    pub async fn run(mut self, context: T::Context) {
        // "Order" rather than "backoffice::model::order::Order"
        let entity_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(entity_type, "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::Create { params, respond_to } => {
                    debug!(entity_type, ?params, "Create");
                    let id = T::Id::from(self.next_id);

                    match T::from_create_params(id.clone(), params) {
                        Ok(mut item) => {
                            if let Err(e) = item.on_create(&context).await {
                                warn!(entity_type, error = %e, "on_create failed");
                                let _ =
                                    respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                                continue;
                            }
                            // IDs are only consumed by successful creates.
                            self.next_id += 1;
                            self.store.insert(id.clone(), item);
                            info!(entity_type, %id, size = self.store.len(), "Created");
                            let _ = respond_to.send(Ok(id));
                        }
                        Err(e) => {
                            warn!(entity_type, error = %e, "Create failed");
                            let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                        }
                    }
                }
                ResourceRequest::Get { id, respond_to } => {
                    let item = self.store.get(&id).cloned();
                    let found = item.is_some();
                    debug!(entity_type, %id, found, "Get");
                    let _ = respond_to.send(Ok(item));
                }
                ResourceRequest::List { query, respond_to } => {
                    debug!(entity_type, ?query, "List");
                    let result = query
                        .apply(self.store.values().cloned())
                        .map_err(FrameworkError::from);
                    match &result {
                        Ok(page) => debug!(entity_type, total = page.total, "Listed"),
                        Err(e) => warn!(entity_type, error = %e, "List failed"),
                    }
                    let _ = respond_to.send(result);
                }
                ResourceRequest::Update {
                    id,
                    update,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?update, "Update");
                    if let Some(item) = self.store.get_mut(&id) {
                        // Hooks validate before mutating; a failed update leaves the record as it was.
                        if let Err(e) = item.on_update(update, &context).await {
                            warn!(entity_type, %id, error = %e, "Update failed");
                            let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                            continue;
                        }
                        info!(entity_type, %id, "Updated");
                        let _ = respond_to.send(Ok(item.clone()));
                    } else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                    }
                }
                ResourceRequest::RequestDelete { id, respond_to } => {
                    debug!(entity_type, %id, "RequestDelete");
                    match self.store.get(&id) {
                        Some(item) => {
                            if let Err(e) = item.check_delete() {
                                warn!(entity_type, %id, error = %e, "Delete refused");
                                let _ =
                                    respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                                continue;
                            }
                            let item = item.clone();
                            self.pending_deletes.insert(id.clone());
                            info!(entity_type, %id, "Delete requested");
                            let _ = respond_to.send(Ok(item));
                        }
                        None => {
                            warn!(entity_type, %id, "Not found");
                            let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                        }
                    }
                }
                ResourceRequest::ConfirmDelete { id, respond_to } => {
                    debug!(entity_type, %id, "ConfirmDelete");
                    if !self.pending_deletes.remove(&id) {
                        warn!(entity_type, %id, "Delete not requested");
                        let _ = respond_to
                            .send(Err(FrameworkError::DeleteNotRequested(id.to_string())));
                        continue;
                    }
                    if let Some(item) = self.store.get(&id) {
                        if let Err(e) = item.on_delete(&context).await {
                            warn!(entity_type, %id, error = %e, "on_delete failed");
                            let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                            continue;
                        }
                        self.store.remove(&id);
                        info!(entity_type, %id, size = self.store.len(), "Deleted");
                        let _ = respond_to.send(Ok(()));
                    } else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                    }
                }
                ResourceRequest::CancelDelete { id, respond_to } => {
                    let was_pending = self.pending_deletes.remove(&id);
                    debug!(entity_type, %id, was_pending, "CancelDelete");
                    let _ = respond_to.send(Ok(was_pending));
                }
                ResourceRequest::Action {
                    id,
                    action,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?action, "Action");
                    if let Some(item) = self.store.get_mut(&id) {
                        let result = item
                            .handle_action(action, &context)
                            .await
                            .map_err(|e| FrameworkError::EntityError(Box::new(e)));
                        match &result {
                            Ok(_) => info!(entity_type, %id, "Action ok"),
                            Err(e) => warn!(entity_type, %id, error = %e, "Action failed"),
                        }
                        let _ = respond_to.send(result);
                    } else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                    }
                }
            }
        }

        info!(entity_type, size = self.store.len(), "Shutdown");
    }
}
