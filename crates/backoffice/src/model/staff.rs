use actor_framework::FieldValue;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

entity_id!(
    /// Type-safe identifier for staff members.
    StaffId,
    "staff"
);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StaffRole {
    Manager,
    Chef,
    Cook,
    Server,
    Dishwasher,
    Driver,
}

impl StaffRole {
    pub fn as_str(self) -> &'static str {
        match self {
            StaffRole::Manager => "manager",
            StaffRole::Chef => "chef",
            StaffRole::Cook => "cook",
            StaffRole::Server => "server",
            StaffRole::Dishwasher => "dishwasher",
            StaffRole::Driver => "driver",
        }
    }
}

impl From<StaffRole> for FieldValue {
    fn from(role: StaffRole) -> Self {
        role.as_str().into()
    }
}

/// Represents an employee.
///
/// Former employees are deactivated rather than deleted so their past shifts still cost out.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StaffMember {
    pub id: StaffId,
    pub name: String,
    pub role: StaffRole,
    pub hourly_rate: Decimal,
    pub email: String,
    pub active: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StaffCreate {
    pub name: String,
    pub role: StaffRole,
    pub hourly_rate: Decimal,
    pub email: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StaffUpdate {
    pub name: Option<String>,
    pub role: Option<StaffRole>,
    pub hourly_rate: Option<Decimal>,
    pub email: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StaffField {
    Name,
    Role,
    HourlyRate,
    Email,
    Active,
}
