//! # Sale Client
use crate::model::{PaymentMethod, Sale, SaleCreate, SaleField, SaleId, SaleUpdate};
use crate::sale_actor::{SaleAction, SaleActionResult, SaleError};
use actor_framework::{ActorClient, Direction, FrameworkError, Predicate, Query, ResourceClient};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tracing::{debug, info, instrument};

#[derive(Clone)]
pub struct SaleClient {
    inner: ResourceClient<Sale>,
}

impl SaleClient {
    pub fn new(inner: ResourceClient<Sale>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self, params), fields(lines = params.lines.len()))]
    pub async fn record_sale(&self, params: SaleCreate) -> Result<SaleId, SaleError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(SaleError::from)
    }

    /// Fixes the payment method of a sale that is not voided.
    #[instrument(skip(self))]
    pub async fn correct_payment(
        &self,
        id: SaleId,
        payment: PaymentMethod,
    ) -> Result<Sale, SaleError> {
        debug!("Sending request");
        self.inner
            .update(id, SaleUpdate { payment })
            .await
            .map_err(SaleError::from)
    }

    #[instrument(skip(self))]
    pub async fn void(&self, id: SaleId, reason: String) -> Result<(), SaleError> {
        debug!("Sending request");
        match self.inner.perform_action(id, SaleAction::Void { reason }).await {
            Ok(SaleActionResult::Voided) => {
                info!("Sale voided");
                Ok(())
            }
            Err(e) => Err(SaleError::from(e)),
        }
    }

    /// Sales rung up in `[from, to)`, voided ones included, oldest first.
    #[instrument(skip(self))]
    pub async fn sales_between(
        &self,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> Result<Vec<Sale>, SaleError> {
        let query = Query::new()
            .filter(Predicate::gte(SaleField::SoldAt, from))
            .filter(Predicate::lt(SaleField::SoldAt, to))
            .order_by(SaleField::SoldAt, Direction::Asc);
        Ok(self.list(query).await?.items)
    }
}

#[async_trait]
impl ActorClient<Sale> for SaleClient {
    type Error = SaleError;

    fn inner(&self) -> &ResourceClient<Sale> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        SaleError::from(e)
    }
}
