//! # Shift Client
//!
//! The roster API. Scheduling checks the staff member's existing shifts for overlap
//! before creating; the check and the create are two messages, so callers that schedule
//! the same staff member concurrently must serialise those calls themselves.
use super::StaffClient;
use crate::model::{Shift, ShiftCreate, ShiftField, ShiftId, ShiftUpdate, StaffId};
use crate::shift_actor::{labour_cost, ShiftError};
use actor_framework::{ActorClient, Direction, FrameworkError, Predicate, Query, ResourceClient};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use tracing::{debug, instrument, warn};

/// Labour cost of a stretch of the roster.
#[derive(Debug, Clone, PartialEq)]
pub struct LabourCost {
    pub total: Decimal,
    /// Shifts whose staff member could not be found, left out of `total`.
    pub uncosted: Vec<ShiftId>,
}

#[derive(Clone)]
pub struct ShiftClient {
    inner: ResourceClient<Shift>,
}

impl ShiftClient {
    pub fn new(inner: ResourceClient<Shift>) -> Self {
        Self { inner }
    }

    /// Shifts of `staff_id` sharing any time with `[starts_at, ends_at)`.
    async fn overlapping(
        &self,
        staff_id: StaffId,
        starts_at: DateTime<Utc>,
        ends_at: DateTime<Utc>,
    ) -> Result<Vec<Shift>, ShiftError> {
        let query = Query::new()
            .filter(Predicate::eq(ShiftField::StaffId, staff_id))
            .filter(Predicate::lt(ShiftField::StartsAt, ends_at))
            .filter(Predicate::gt(ShiftField::EndsAt, starts_at))
            .order_by(ShiftField::StartsAt, Direction::Asc);
        Ok(self.list(query).await?.items)
    }

    #[instrument(skip(self, params), fields(staff_id = %params.staff_id))]
    pub async fn schedule(&self, params: ShiftCreate) -> Result<ShiftId, ShiftError> {
        // Inverted ranges are rejected by the actor with `InvalidTimes`.
        if params.starts_at < params.ends_at {
            let clashes = self
                .overlapping(params.staff_id, params.starts_at, params.ends_at)
                .await?;
            if let Some(existing) = clashes.first() {
                warn!(existing = %existing.id, "Shift overlaps");
                return Err(ShiftError::Overlap {
                    existing: existing.id,
                });
            }
        }
        debug!("Sending request");
        self.inner.create(params).await.map_err(ShiftError::from)
    }

    /// Moves or re-notes a shift, checking the new times against the member's other shifts.
    #[instrument(skip(self))]
    pub async fn reschedule(&self, id: ShiftId, update: ShiftUpdate) -> Result<Shift, ShiftError> {
        let current = self
            .get(id)
            .await?
            .ok_or_else(|| ShiftError::NotFound(id.to_string()))?;
        let starts_at = update.starts_at.unwrap_or(current.starts_at);
        let ends_at = update.ends_at.unwrap_or(current.ends_at);
        if starts_at < ends_at {
            let clashes = self
                .overlapping(current.staff_id, starts_at, ends_at)
                .await?;
            if let Some(existing) = clashes.iter().find(|shift| shift.id != id) {
                return Err(ShiftError::Overlap {
                    existing: existing.id,
                });
            }
        }
        debug!("Sending request");
        self.inner.update(id, update).await.map_err(ShiftError::from)
    }

    /// Shifts starting in `[from, to)`, in start order.
    #[instrument(skip(self))]
    pub async fn roster(
        &self,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> Result<Vec<Shift>, ShiftError> {
        let query = Query::new()
            .filter(Predicate::gte(ShiftField::StartsAt, from))
            .filter(Predicate::lt(ShiftField::StartsAt, to))
            .order_by(ShiftField::StartsAt, Direction::Asc);
        Ok(self.list(query).await?.items)
    }

    /// Every shift of one staff member, in start order.
    #[instrument(skip(self))]
    pub async fn shifts_for(&self, staff_id: StaffId) -> Result<Vec<Shift>, ShiftError> {
        let query = Query::new()
            .filter(Predicate::eq(ShiftField::StaffId, staff_id))
            .order_by(ShiftField::StartsAt, Direction::Asc);
        Ok(self.list(query).await?.items)
    }

    /// Cost of the shifts starting in `[from, to)` at each member's current hourly rate.
    #[instrument(skip(self, staff))]
    pub async fn labour_cost(
        &self,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
        staff: &StaffClient,
    ) -> Result<LabourCost, ShiftError> {
        let shifts = self.roster(from, to).await?;
        let rates = staff
            .hourly_rates()
            .await
            .map_err(|e| ShiftError::StaffLookup(e.to_string()))?;
        let (total, uncosted) = labour_cost(&shifts, &rates);
        if !uncosted.is_empty() {
            warn!(count = uncosted.len(), "Shifts without a known hourly rate");
        }
        Ok(LabourCost {
            total,
            uncosted: uncosted.into_iter().map(|shift| shift.id).collect(),
        })
    }
}

#[async_trait]
impl ActorClient<Shift> for ShiftClient {
    type Error = ShiftError;

    fn inner(&self) -> &ResourceClient<Shift> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        ShiftError::from(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{StaffCreate, StaffMember, StaffRole};
    use actor_framework::mock::{page_of, MockClient};
    use actor_framework::ActorEntity;
    use chrono::TimeZone;

    fn at(hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 4, hour, 0, 0).unwrap()
    }

    fn shift(id: u32, staff: u32, from: u32, to: u32) -> Shift {
        Shift::from_create_params(
            ShiftId(id),
            ShiftCreate {
                staff_id: StaffId(staff),
                role: StaffRole::Cook,
                starts_at: at(from),
                ends_at: at(to),
                note: None,
            },
        )
        .unwrap()
    }

    #[tokio::test]
    async fn schedule_refuses_overlap_without_creating() {
        let mut mock = MockClient::<Shift>::new();
        mock.expect_list().return_ok(page_of(vec![shift(1, 7, 9, 17)]));

        let shifts = ShiftClient::new(mock.client());
        let result = shifts
            .schedule(ShiftCreate {
                staff_id: StaffId(7),
                role: StaffRole::Cook,
                starts_at: at(16),
                ends_at: at(22),
                note: None,
            })
            .await;
        assert_eq!(result, Err(ShiftError::Overlap { existing: ShiftId(1) }));
        mock.verify();
    }

    #[tokio::test]
    async fn reschedule_ignores_the_shift_itself() {
        let mut mock = MockClient::<Shift>::new();
        let moved = shift(1, 7, 10, 18);
        mock.expect_get(ShiftId(1)).return_ok(Some(shift(1, 7, 9, 17)));
        mock.expect_list().return_ok(page_of(vec![shift(1, 7, 9, 17)]));
        mock.expect_update(ShiftId(1)).return_ok(moved.clone());

        let shifts = ShiftClient::new(mock.client());
        let update = ShiftUpdate {
            starts_at: Some(at(10)),
            ends_at: Some(at(18)),
            note: None,
        };
        assert_eq!(shifts.reschedule(ShiftId(1), update).await, Ok(moved));
        mock.verify();
    }

    #[tokio::test]
    async fn labour_cost_reports_uncosted_shifts() {
        let mut roster = MockClient::<Shift>::new();
        roster
            .expect_list()
            .return_ok(page_of(vec![shift(1, 1, 9, 17), shift(2, 9, 17, 23)]));
        let mut people = MockClient::<StaffMember>::new();
        let cook = StaffMember::from_create_params(
            StaffId(1),
            StaffCreate {
                name: "Ana".into(),
                role: StaffRole::Cook,
                hourly_rate: Decimal::new(1450, 2),
                email: "ana@example.com".into(),
            },
        )
        .unwrap();
        people.expect_list().return_ok(page_of(vec![cook]));

        let shifts = ShiftClient::new(roster.client());
        let staff = StaffClient::new(people.client());
        let cost = shifts.labour_cost(at(0), at(23), &staff).await.unwrap();
        assert_eq!(
            cost,
            LabourCost {
                total: Decimal::new(11600, 2),
                uncosted: vec![ShiftId(2)],
            }
        );
        roster.verify();
        people.verify();
    }
}
