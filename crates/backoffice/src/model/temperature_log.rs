//! HACCP temperature records.
//!
//! A log is checked against the configured limits once, when it is recorded, and is never
//! edited afterwards. The only later addition is the corrective action taken for a reading
//! outside its limit.

use actor_framework::FieldValue;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

entity_id!(
    /// Type-safe identifier for temperature logs.
    TemperatureLogId,
    "temp_log"
);

/// Where a reading was taken. Each zone has its own critical limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Zone {
    Refrigerator,
    Freezer,
    HotHolding,
    Cooking,
    /// Chilled goods on arrival.
    Delivery,
}

impl Zone {
    pub fn as_str(self) -> &'static str {
        match self {
            Zone::Refrigerator => "refrigerator",
            Zone::Freezer => "freezer",
            Zone::HotHolding => "hot_holding",
            Zone::Cooking => "cooking",
            Zone::Delivery => "delivery",
        }
    }
}

impl From<Zone> for FieldValue {
    fn from(zone: Zone) -> Self {
        zone.as_str().into()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemperatureLog {
    pub id: TemperatureLogId,
    pub equipment: String,
    pub zone: Zone,
    pub reading_c: Decimal,
    pub recorded_at: DateTime<Utc>,
    pub recorded_by: String,
    pub(crate) compliant: bool,
    pub(crate) corrective_action: Option<String>,
}

impl TemperatureLog {
    pub fn is_compliant(&self) -> bool {
        self.compliant
    }

    pub fn corrective_action(&self) -> Option<&str> {
        self.corrective_action.as_deref()
    }

    /// Out of limits with nothing recorded about it yet.
    pub fn is_open_deviation(&self) -> bool {
        !self.compliant && self.corrective_action.is_none()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TemperatureLogCreate {
    pub equipment: String,
    pub zone: Zone,
    pub reading_c: Decimal,
    pub recorded_at: DateTime<Utc>,
    pub recorded_by: String,
}

/// Corrections to a recorded reading. The store rejects every one of them; a wrong reading
/// is fixed by recording a new log.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TemperatureLogUpdate {
    pub equipment: Option<String>,
    pub reading_c: Option<Decimal>,
    pub recorded_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemperatureLogField {
    Equipment,
    Zone,
    ReadingC,
    RecordedAt,
    Compliant,
    OpenDeviation,
}
