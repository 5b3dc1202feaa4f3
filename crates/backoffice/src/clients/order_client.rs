//! # Order Client
//!
//! Provides a high-level API for the order actor: placing orders, editing delivery
//! details, and driving the lifecycle.
use super::unexpected_reply;
use crate::model::{Order, OrderCreate, OrderField, OrderId, OrderStatus, OrderUpdate};
use crate::order_actor::{OrderAction, OrderActionResult, OrderError};
use actor_framework::{ActorClient, Direction, FrameworkError, Predicate, Query, ResourceClient};
use async_trait::async_trait;
use tracing::{debug, info, instrument};

/// Client for interacting with the Order actor.
///
/// Pricing and validation happen in the Order actor's `on_create` hook; status changes
/// happen only through [`advance`](Self::advance) and [`cancel`](Self::cancel).
#[derive(Clone)]
pub struct OrderClient {
    inner: ResourceClient<Order>,
}

impl OrderClient {
    pub fn new(inner: ResourceClient<Order>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self, params), fields(customer = %params.customer_name))]
    pub async fn place_order(&self, params: OrderCreate) -> Result<OrderId, OrderError> {
        debug!("Sending request");
        let id = self.inner.create(params).await.map_err(OrderError::from)?;
        info!(order_id = %id, "Order placed");
        Ok(id)
    }

    /// Updates delivery details of an open order and returns it.
    #[instrument(skip(self))]
    pub async fn update_order(&self, id: OrderId, update: OrderUpdate) -> Result<Order, OrderError> {
        debug!("Sending request");
        self.inner.update(id, update).await.map_err(OrderError::from)
    }

    /// Moves the order to its next status and returns that status.
    #[instrument(skip(self))]
    pub async fn advance(&self, id: OrderId) -> Result<OrderStatus, OrderError> {
        debug!("Sending request");
        match self.inner.perform_action(id, OrderAction::Advance).await {
            Ok(OrderActionResult::Advanced(status)) => {
                info!(%status, "Order advanced");
                Ok(status)
            }
            Ok(other) => Err(OrderError::ActorCommunicationError(unexpected_reply(
                "Advance", other,
            ))),
            Err(e) => Err(OrderError::from(e)),
        }
    }

    #[instrument(skip(self))]
    pub async fn cancel(&self, id: OrderId, reason: Option<String>) -> Result<(), OrderError> {
        debug!("Sending request");
        match self
            .inner
            .perform_action(id, OrderAction::Cancel { reason })
            .await
        {
            Ok(OrderActionResult::Cancelled) => {
                info!("Order cancelled");
                Ok(())
            }
            Ok(other) => Err(OrderError::ActorCommunicationError(unexpected_reply(
                "Cancel", other,
            ))),
            Err(e) => Err(OrderError::from(e)),
        }
    }

    /// The status the next `advance` would produce; `None` for finished orders.
    #[instrument(skip(self))]
    pub async fn next_status(&self, id: OrderId) -> Result<Option<OrderStatus>, OrderError> {
        debug!("Sending request");
        match self.inner.perform_action(id, OrderAction::NextStatus).await {
            Ok(OrderActionResult::NextStatus(next)) => Ok(next),
            Ok(other) => Err(OrderError::ActorCommunicationError(unexpected_reply(
                "NextStatus", other,
            ))),
            Err(e) => Err(OrderError::from(e)),
        }
    }

    /// Orders in `status`, oldest first.
    #[instrument(skip(self))]
    pub async fn with_status(&self, status: OrderStatus) -> Result<Vec<Order>, OrderError> {
        let query = Query::new()
            .filter(Predicate::eq(OrderField::Status, status))
            .order_by(OrderField::PlacedAt, Direction::Asc);
        Ok(self.list(query).await?.items)
    }

    /// Orders not yet delivered or cancelled, by requested delivery time.
    #[instrument(skip(self))]
    pub async fn open_orders(&self) -> Result<Vec<Order>, OrderError> {
        let query = Query::new()
            .filter(Predicate::lt(OrderField::Status, OrderStatus::Delivered))
            .order_by(OrderField::RequestedDeliveryTime, Direction::Asc);
        Ok(self.list(query).await?.items)
    }
}

#[async_trait]
impl ActorClient<Order> for OrderClient {
    type Error = OrderError;

    fn inner(&self) -> &ResourceClient<Order> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        OrderError::from(e)
    }
}
