//! # Generic Messages
//!
//! The request envelope exchanged between a `ResourceClient` and its `ResourceActor`.

use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use crate::query::{Page, Query};
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Internal message type sent to the actor to request operations.
///
/// # Resource-Oriented Architecture
/// Every back-office screen is the same shape: list records, open one, create, edit,
/// delete. Instead of ad-hoc messages per screen, the variants below cover that shape once
/// for every record type, plus `Action` for what does not fit CRUD (advancing an order,
/// restocking an ingredient).
///
/// Deletion is split into `RequestDelete` and `ConfirmDelete` so the confirmation gate is an
/// explicit state of the store rather than a blocking dialog in the caller.
#[derive(Debug)]
pub enum ResourceRequest<T: ActorEntity> {
    Create {
        params: T::Create,
        respond_to: Response<T::Id>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    List {
        query: Query<T::Field>,
        respond_to: Response<Page<T>>,
    },
    Update {
        id: T::Id,
        update: T::Update,
        respond_to: Response<T>,
    },
    /// Marks the record as pending deletion and returns it for the confirmation prompt.
    RequestDelete {
        id: T::Id,
        respond_to: Response<T>,
    },
    ConfirmDelete {
        id: T::Id,
        respond_to: Response<()>,
    },
    /// Drops a pending deletion. Responds `true` if one was pending.
    CancelDelete {
        id: T::Id,
        respond_to: Response<bool>,
    },
    Action {
        id: T::Id,
        action: T::Action,
        respond_to: Response<T::ActionResult>,
    },
}
