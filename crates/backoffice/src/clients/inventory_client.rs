//! # Inventory Client
//!
//! Provides a high-level API for the inventory actor.
use super::unexpected_reply;
use crate::inventory_actor::{InventoryAction, InventoryActionResult, InventoryError, StockLevel};
use crate::model::{Product, ProductCreate, ProductField, ProductId, ProductUpdate};
use actor_framework::{ActorClient, Direction, FrameworkError, Predicate, Query, ResourceClient};
use async_trait::async_trait;
use rust_decimal::Decimal;
use tracing::{debug, instrument, warn};

/// Client for interacting with the inventory actor.
#[derive(Clone)]
pub struct InventoryClient {
    inner: ResourceClient<Product>,
}

impl InventoryClient {
    pub fn new(inner: ResourceClient<Product>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self, params), fields(name = %params.name))]
    pub async fn create_product(&self, params: ProductCreate) -> Result<ProductId, InventoryError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(InventoryError::from)
    }

    #[instrument(skip(self))]
    pub async fn update_product(
        &self,
        id: ProductId,
        update: ProductUpdate,
    ) -> Result<Product, InventoryError> {
        debug!("Sending request");
        self.inner.update(id, update).await.map_err(InventoryError::from)
    }

    /// Adds a delivery to stock and returns the new quantity.
    #[instrument(skip(self))]
    pub async fn restock(&self, id: ProductId, quantity: Decimal) -> Result<Decimal, InventoryError> {
        debug!("Restocking {} of {}", quantity, id);
        match self
            .inner
            .perform_action(id, InventoryAction::Restock(quantity))
            .await
        {
            Ok(InventoryActionResult::Restocked(level)) => Ok(level),
            Ok(other) => Err(InventoryError::ActorCommunicationError(unexpected_reply(
                "Restock", other,
            ))),
            Err(e) => Err(InventoryError::from(e)),
        }
    }

    /// Takes stock out and returns what is left.
    ///
    /// Returns `InsufficientStock` and leaves the level unchanged if there is not enough.
    #[instrument(skip(self))]
    pub async fn consume(&self, id: ProductId, quantity: Decimal) -> Result<Decimal, InventoryError> {
        debug!("Consuming {} of {}", quantity, id);
        match self
            .inner
            .perform_action(id, InventoryAction::Consume(quantity))
            .await
        {
            Ok(InventoryActionResult::Consumed(level)) => Ok(level),
            Ok(other) => Err(InventoryError::ActorCommunicationError(unexpected_reply(
                "Consume", other,
            ))),
            Err(e) => {
                let err = InventoryError::from(e);
                if matches!(err, InventoryError::InsufficientStock { .. }) {
                    warn!(error = %err, "Consume refused");
                }
                Err(err)
            }
        }
    }

    #[instrument(skip(self))]
    pub async fn stock_level(&self, id: ProductId) -> Result<StockLevel, InventoryError> {
        debug!("Checking stock for {}", id);
        match self.inner.perform_action(id, InventoryAction::StockLevel).await {
            Ok(InventoryActionResult::StockLevel(level)) => Ok(level),
            Ok(other) => Err(InventoryError::ActorCommunicationError(unexpected_reply(
                "StockLevel", other,
            ))),
            Err(e) => Err(InventoryError::from(e)),
        }
    }

    /// Stock items below their reorder threshold, by name.
    #[instrument(skip(self))]
    pub async fn low_stock_report(&self) -> Result<Vec<Product>, InventoryError> {
        let query = Query::new()
            .filter(Predicate::eq(ProductField::LowStock, true))
            .order_by(ProductField::Name, Direction::Asc);
        Ok(self.list(query).await?.items)
    }

    /// Stock items whose name matches `pattern` (`%` and `_` wildcards, any case).
    #[instrument(skip(self))]
    pub async fn search(&self, pattern: &str) -> Result<Vec<Product>, InventoryError> {
        let query = Query::new()
            .filter(Predicate::like(ProductField::Name, pattern))
            .order_by(ProductField::Name, Direction::Asc);
        Ok(self.list(query).await?.items)
    }

    /// Σ quantity × unit cost over all stock.
    #[instrument(skip(self))]
    pub async fn stock_value(&self) -> Result<Decimal, InventoryError> {
        let page = self.list(Query::new()).await?;
        Ok(page
            .items
            .iter()
            .map(Product::stock_value)
            .fold(Decimal::ZERO, Decimal::saturating_add))
    }
}

#[async_trait]
impl ActorClient<Product> for InventoryClient {
    type Error = InventoryError;

    fn inner(&self) -> &ResourceClient<Product> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        InventoryError::from(e)
    }
}
