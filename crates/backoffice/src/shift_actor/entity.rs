//! Entity trait implementation for shifts.
//!
//! A shift must end after it starts, last at most [`MAX_SHIFT_HOURS`], and belong to an
//! existing, active staff member. Overlap with the member's other shifts is checked by
//! [`ShiftClient::schedule`](crate::clients::ShiftClient::schedule), which can see the
//! whole roster.

use super::error::ShiftError;
use crate::clients::StaffClient;
use crate::model::{Shift, ShiftCreate, ShiftField, ShiftId, ShiftUpdate};
use actor_framework::{ActorClient, ActorEntity, FieldValue};
use async_trait::async_trait;
use chrono::{DateTime, Utc};

pub const MAX_SHIFT_HOURS: i64 = 16;

#[derive(Debug, Clone)]
pub enum ShiftAction {}

fn check_times(starts_at: DateTime<Utc>, ends_at: DateTime<Utc>) -> Result<(), ShiftError> {
    if ends_at <= starts_at {
        return Err(ShiftError::InvalidTimes);
    }
    let minutes = (ends_at - starts_at).num_minutes();
    if minutes > MAX_SHIFT_HOURS * 60 {
        return Err(ShiftError::TooLong {
            minutes,
            max_hours: MAX_SHIFT_HOURS,
        });
    }
    Ok(())
}

#[async_trait]
impl ActorEntity for Shift {
    type Id = ShiftId;
    type Create = ShiftCreate;
    type Update = ShiftUpdate;
    type Action = ShiftAction;
    type ActionResult = ();
    type Context = StaffClient;
    type Field = ShiftField;
    type Error = ShiftError;

    fn from_create_params(id: ShiftId, params: ShiftCreate) -> Result<Self, Self::Error> {
        check_times(params.starts_at, params.ends_at)?;
        Ok(Self {
            id,
            staff_id: params.staff_id,
            role: params.role,
            starts_at: params.starts_at,
            ends_at: params.ends_at,
            note: params.note,
        })
    }

    fn field(&self, field: ShiftField) -> FieldValue {
        match field {
            ShiftField::StaffId => self.staff_id.into(),
            ShiftField::Role => self.role.into(),
            ShiftField::StartsAt => self.starts_at.into(),
            ShiftField::EndsAt => self.ends_at.into(),
        }
    }

    async fn on_create(&mut self, staff: &StaffClient) -> Result<(), Self::Error> {
        let member = staff
            .get(self.staff_id)
            .await
            .map_err(|e| ShiftError::StaffLookup(e.to_string()))?
            .ok_or(ShiftError::UnknownStaff(self.staff_id))?;
        if !member.active {
            return Err(ShiftError::InactiveStaff(self.staff_id));
        }
        Ok(())
    }

    async fn on_update(&mut self, update: ShiftUpdate, _staff: &StaffClient) -> Result<(), Self::Error> {
        let starts_at = update.starts_at.unwrap_or(self.starts_at);
        let ends_at = update.ends_at.unwrap_or(self.ends_at);
        check_times(starts_at, ends_at)?;

        self.starts_at = starts_at;
        self.ends_at = ends_at;
        if let Some(note) = update.note {
            self.note = Some(note);
        }
        Ok(())
    }

    async fn handle_action(&mut self, action: ShiftAction, _staff: &StaffClient) -> Result<(), Self::Error> {
        match action {}
    }
}
