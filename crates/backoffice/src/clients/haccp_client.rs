//! # HACCP Client
//!
//! Temperature monitoring records. Logs are write-once; the only later change allowed is
//! a single corrective action on a reading that broke its limit.
use crate::haccp_actor::{HaccpAction, HaccpActionResult, HaccpError};
use crate::model::{
    TemperatureLog, TemperatureLogCreate, TemperatureLogField, TemperatureLogId, Zone,
};
use actor_framework::{ActorClient, Direction, FrameworkError, Predicate, Query, ResourceClient};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tracing::{debug, info, instrument, warn};

#[derive(Clone)]
pub struct HaccpClient {
    inner: ResourceClient<TemperatureLog>,
}

impl HaccpClient {
    pub fn new(inner: ResourceClient<TemperatureLog>) -> Self {
        Self { inner }
    }

    /// Logs a reading; compliance against the configured limit is decided by the actor.
    #[instrument(skip(self, params), fields(equipment = %params.equipment, zone = params.zone.as_str()))]
    pub async fn record_reading(
        &self,
        params: TemperatureLogCreate,
    ) -> Result<TemperatureLogId, HaccpError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(HaccpError::from)
    }

    #[instrument(skip(self, text))]
    pub async fn record_corrective_action(
        &self,
        id: TemperatureLogId,
        text: String,
    ) -> Result<(), HaccpError> {
        debug!("Sending request");
        match self
            .inner
            .perform_action(id, HaccpAction::RecordCorrectiveAction(text))
            .await
        {
            Ok(HaccpActionResult::CorrectiveActionRecorded) => {
                info!("Corrective action recorded");
                Ok(())
            }
            Err(e) => Err(HaccpError::from(e)),
        }
    }

    /// Out-of-limit readings still waiting for a corrective action, oldest first.
    #[instrument(skip(self))]
    pub async fn open_deviations(&self) -> Result<Vec<TemperatureLog>, HaccpError> {
        let query = Query::new()
            .filter(Predicate::eq(TemperatureLogField::OpenDeviation, true))
            .order_by(TemperatureLogField::RecordedAt, Direction::Asc);
        let open = self.list(query).await?.items;
        if !open.is_empty() {
            warn!(count = open.len(), "Open temperature deviations");
        }
        Ok(open)
    }

    /// Readings for one zone in `[from, to)`, oldest first.
    #[instrument(skip(self))]
    pub async fn readings_for(
        &self,
        zone: Zone,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> Result<Vec<TemperatureLog>, HaccpError> {
        let query = Query::new()
            .filter(Predicate::eq(TemperatureLogField::Zone, zone))
            .filter(Predicate::gte(TemperatureLogField::RecordedAt, from))
            .filter(Predicate::lt(TemperatureLogField::RecordedAt, to))
            .order_by(TemperatureLogField::RecordedAt, Direction::Asc);
        Ok(self.list(query).await?.items)
    }
}

#[async_trait]
impl ActorClient<TemperatureLog> for HaccpClient {
    type Error = HaccpError;

    fn inner(&self) -> &ResourceClient<TemperatureLog> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        HaccpError::from(e)
    }
}
