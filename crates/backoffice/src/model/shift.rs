use super::{StaffId, StaffRole};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

entity_id!(
    /// Type-safe identifier for shifts.
    ShiftId,
    "shift"
);

/// A scheduled block of work for one staff member. `ends_at` is exclusive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shift {
    pub id: ShiftId,
    pub staff_id: StaffId,
    pub role: StaffRole,
    pub starts_at: DateTime<Utc>,
    pub ends_at: DateTime<Utc>,
    pub note: Option<String>,
}

impl Shift {
    /// Length of the shift in hours, to the minute.
    pub fn hours(&self) -> Decimal {
        Decimal::from((self.ends_at - self.starts_at).num_minutes()) / Decimal::from(60)
    }

    /// Whether the two half-open intervals share any time.
    pub fn overlaps(&self, starts_at: DateTime<Utc>, ends_at: DateTime<Utc>) -> bool {
        self.starts_at < ends_at && starts_at < self.ends_at
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShiftCreate {
    pub staff_id: StaffId,
    pub role: StaffRole,
    pub starts_at: DateTime<Utc>,
    pub ends_at: DateTime<Utc>,
    pub note: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ShiftUpdate {
    pub starts_at: Option<DateTime<Utc>>,
    pub ends_at: Option<DateTime<Utc>>,
    pub note: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShiftField {
    StaffId,
    Role,
    StartsAt,
    EndsAt,
}
