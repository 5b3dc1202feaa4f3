use super::actions::{HaccpAction, HaccpActionResult};
use super::error::HaccpError;
use super::compliance::HaccpLimits;
use crate::model::{
    TemperatureLog, TemperatureLogCreate, TemperatureLogField, TemperatureLogId,
    TemperatureLogUpdate,
};
use actor_framework::{ActorEntity, FieldValue};
use async_trait::async_trait;
use tracing::warn;

#[async_trait]
impl ActorEntity for TemperatureLog {
    type Id = TemperatureLogId;
    type Create = TemperatureLogCreate;
    type Update = TemperatureLogUpdate;
    type Action = HaccpAction;
    type ActionResult = HaccpActionResult;
    type Context = HaccpLimits;
    type Field = TemperatureLogField;
    type Error = HaccpError;

    fn from_create_params(
        id: TemperatureLogId,
        params: TemperatureLogCreate,
    ) -> Result<Self, Self::Error> {
        if params.equipment.trim().is_empty() {
            return Err(HaccpError::Validation("equipment is required".into()));
        }
        if params.recorded_by.trim().is_empty() {
            return Err(HaccpError::Validation("recorded_by is required".into()));
        }
        Ok(Self {
            id,
            equipment: params.equipment,
            zone: params.zone,
            reading_c: params.reading_c,
            recorded_at: params.recorded_at,
            recorded_by: params.recorded_by,
            compliant: false,
            corrective_action: None,
        })
    }

    fn field(&self, field: TemperatureLogField) -> FieldValue {
        match field {
            TemperatureLogField::Equipment => self.equipment.clone().into(),
            TemperatureLogField::Zone => self.zone.into(),
            TemperatureLogField::ReadingC => self.reading_c.into(),
            TemperatureLogField::RecordedAt => self.recorded_at.into(),
            TemperatureLogField::Compliant => self.compliant.into(),
            TemperatureLogField::OpenDeviation => self.is_open_deviation().into(),
        }
    }

    /// Judges the reading against the configured limit for its zone.
    async fn on_create(&mut self, limits: &HaccpLimits) -> Result<(), Self::Error> {
        self.compliant = limits.is_compliant(self.zone, self.reading_c);
        if !self.compliant {
            warn!(
                log_id = %self.id,
                equipment = %self.equipment,
                reading_c = %self.reading_c,
                limit = %limits.limit_for(self.zone),
                "Temperature outside critical limit"
            );
        }
        Ok(())
    }

    async fn on_update(
        &mut self,
        _update: TemperatureLogUpdate,
        _limits: &HaccpLimits,
    ) -> Result<(), Self::Error> {
        Err(HaccpError::Immutable(self.id))
    }

    fn check_delete(&self) -> Result<(), Self::Error> {
        Err(HaccpError::RecordRetained(self.id))
    }

    async fn handle_action(
        &mut self,
        action: HaccpAction,
        _limits: &HaccpLimits,
    ) -> Result<HaccpActionResult, Self::Error> {
        match action {
            HaccpAction::RecordCorrectiveAction(text) => {
                if self.compliant {
                    return Err(HaccpError::NoDeviation(self.id));
                }
                if self.corrective_action.is_some() {
                    return Err(HaccpError::CorrectiveActionExists(self.id));
                }
                if text.trim().is_empty() {
                    return Err(HaccpError::Validation(
                        "corrective action must not be empty".into(),
                    ));
                }
                self.corrective_action = Some(text);
                Ok(HaccpActionResult::CorrectiveActionRecorded)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Zone;
    use chrono::{TimeZone, Utc};
    use rust_decimal::Decimal;
    use std::str::FromStr;

    async fn recorded(zone: Zone, reading: &str) -> TemperatureLog {
        let params = TemperatureLogCreate {
            equipment: "Walk-in fridge".into(),
            zone,
            reading_c: Decimal::from_str(reading).unwrap(),
            recorded_at: Utc.with_ymd_and_hms(2024, 3, 4, 7, 30, 0).unwrap(),
            recorded_by: "Sam".into(),
        };
        let mut log = TemperatureLog::from_create_params(TemperatureLogId(1), params).unwrap();
        log.on_create(&HaccpLimits::default()).await.unwrap();
        log
    }

    #[tokio::test]
    async fn compliance_is_decided_on_create() {
        assert!(recorded(Zone::Refrigerator, "4.5").await.is_compliant());
        let warm = recorded(Zone::Refrigerator, "7").await;
        assert!(!warm.is_compliant());
        assert!(warm.is_open_deviation());
    }

    #[tokio::test]
    async fn corrective_action_only_once_and_only_for_deviations() {
        let limits = HaccpLimits::default();

        let mut ok = recorded(Zone::Freezer, "-20").await;
        assert_eq!(
            ok.handle_action(HaccpAction::RecordCorrectiveAction("n/a".into()), &limits)
                .await,
            Err(HaccpError::NoDeviation(TemperatureLogId(1)))
        );

        let mut warm = recorded(Zone::Freezer, "-12").await;
        warm.handle_action(
            HaccpAction::RecordCorrectiveAction("Moved stock to spare freezer".into()),
            &limits,
        )
        .await
        .unwrap();
        assert_eq!(warm.corrective_action(), Some("Moved stock to spare freezer"));
        assert!(!warm.is_open_deviation());

        assert_eq!(
            warm.handle_action(HaccpAction::RecordCorrectiveAction("again".into()), &limits)
                .await,
            Err(HaccpError::CorrectiveActionExists(TemperatureLogId(1)))
        );
    }

    #[tokio::test]
    async fn logs_are_immutable_and_retained() {
        let mut log = recorded(Zone::Cooking, "80").await;
        let update = TemperatureLogUpdate {
            reading_c: Some(Decimal::from(90)),
            ..Default::default()
        };
        assert_eq!(
            log.on_update(update, &HaccpLimits::default()).await,
            Err(HaccpError::Immutable(TemperatureLogId(1)))
        );
        assert_eq!(log.reading_c, Decimal::from(80));
        assert_eq!(
            log.check_delete(),
            Err(HaccpError::RecordRetained(TemperatureLogId(1)))
        );
    }
}
