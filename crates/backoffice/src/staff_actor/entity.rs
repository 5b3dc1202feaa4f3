use super::error::StaffError;
use crate::model::{within_limit, StaffCreate, StaffField, StaffId, StaffMember, StaffUpdate};
use actor_framework::{ActorEntity, FieldValue};
use async_trait::async_trait;
use rust_decimal::Decimal;

#[derive(Debug, Clone)]
pub enum StaffAction {
    /// Takes the member off the schedule. New shifts are refused for inactive staff.
    Deactivate,
    Reactivate,
}

fn check_rate(rate: Decimal) -> Result<(), StaffError> {
    if !within_limit(rate) {
        return Err(StaffError::InvalidRate(rate));
    }
    Ok(())
}

fn check_email(email: &str) -> Result<(), StaffError> {
    if !email.contains('@') {
        return Err(StaffError::Validation(format!("invalid email: {}", email)));
    }
    Ok(())
}

#[async_trait]
impl ActorEntity for StaffMember {
    type Id = StaffId;
    type Create = StaffCreate;
    type Update = StaffUpdate;
    type Action = StaffAction;
    /// Whether the action changed anything.
    type ActionResult = bool;
    type Context = ();
    type Field = StaffField;
    type Error = StaffError;

    fn from_create_params(id: StaffId, params: StaffCreate) -> Result<Self, Self::Error> {
        if params.name.trim().is_empty() {
            return Err(StaffError::Validation("name is required".into()));
        }
        check_rate(params.hourly_rate)?;
        check_email(&params.email)?;
        Ok(Self {
            id,
            name: params.name,
            role: params.role,
            hourly_rate: params.hourly_rate,
            email: params.email,
            active: true,
        })
    }

    fn field(&self, field: StaffField) -> FieldValue {
        match field {
            StaffField::Name => self.name.clone().into(),
            StaffField::Role => self.role.into(),
            StaffField::HourlyRate => self.hourly_rate.into(),
            StaffField::Email => self.email.clone().into(),
            StaffField::Active => self.active.into(),
        }
    }

    async fn on_update(&mut self, update: StaffUpdate, _ctx: &()) -> Result<(), Self::Error> {
        if let Some(name) = &update.name {
            if name.trim().is_empty() {
                return Err(StaffError::Validation("name is required".into()));
            }
        }
        if let Some(rate) = update.hourly_rate {
            check_rate(rate)?;
        }
        if let Some(email) = &update.email {
            check_email(email)?;
        }

        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(role) = update.role {
            self.role = role;
        }
        if let Some(rate) = update.hourly_rate {
            self.hourly_rate = rate;
        }
        if let Some(email) = update.email {
            self.email = email;
        }
        Ok(())
    }

    async fn handle_action(&mut self, action: StaffAction, _ctx: &()) -> Result<bool, Self::Error> {
        let active = matches!(action, StaffAction::Reactivate);
        let changed = self.active != active;
        self.active = active;
        Ok(changed)
    }
}
