//! # Staff Client
use crate::model::{StaffCreate, StaffField, StaffId, StaffMember, StaffRole, StaffUpdate};
use crate::staff_actor::{StaffAction, StaffError};
use actor_framework::{ActorClient, Direction, FrameworkError, Predicate, Query, ResourceClient};
use async_trait::async_trait;
use rust_decimal::Decimal;
use std::collections::HashMap;
use tracing::{debug, info, instrument};

#[derive(Clone)]
pub struct StaffClient {
    inner: ResourceClient<StaffMember>,
}

impl StaffClient {
    pub fn new(inner: ResourceClient<StaffMember>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self, params), fields(name = %params.name, role = params.role.as_str()))]
    pub async fn hire(&self, params: StaffCreate) -> Result<StaffId, StaffError> {
        debug!("Sending request");
        let id = self.inner.create(params).await.map_err(StaffError::from)?;
        info!(staff_id = %id, "Staff member added");
        Ok(id)
    }

    #[instrument(skip(self))]
    pub async fn update_staff(
        &self,
        id: StaffId,
        update: StaffUpdate,
    ) -> Result<StaffMember, StaffError> {
        debug!("Sending request");
        self.inner.update(id, update).await.map_err(StaffError::from)
    }

    /// Returns whether the member was active before.
    #[instrument(skip(self))]
    pub async fn deactivate(&self, id: StaffId) -> Result<bool, StaffError> {
        debug!("Sending request");
        self.inner
            .perform_action(id, StaffAction::Deactivate)
            .await
            .map_err(StaffError::from)
    }

    /// Returns whether the member was inactive before.
    #[instrument(skip(self))]
    pub async fn reactivate(&self, id: StaffId) -> Result<bool, StaffError> {
        debug!("Sending request");
        self.inner
            .perform_action(id, StaffAction::Reactivate)
            .await
            .map_err(StaffError::from)
    }

    /// Active staff, optionally in one role, by name.
    #[instrument(skip(self))]
    pub async fn active_staff(&self, role: Option<StaffRole>) -> Result<Vec<StaffMember>, StaffError> {
        let mut query = Query::new().filter(Predicate::eq(StaffField::Active, true));
        if let Some(role) = role {
            query = query.filter(Predicate::eq(StaffField::Role, role));
        }
        let query = query.order_by(StaffField::Name, Direction::Asc);
        Ok(self.list(query).await?.items)
    }

    /// Hourly rate of every member, active or not.
    pub async fn hourly_rates(&self) -> Result<HashMap<StaffId, Decimal>, StaffError> {
        let page = self.list(Query::new()).await?;
        Ok(page
            .items
            .into_iter()
            .map(|member| (member.id, member.hourly_rate))
            .collect())
    }
}

#[async_trait]
impl ActorClient<StaffMember> for StaffClient {
    type Error = StaffError;

    fn inner(&self) -> &ResourceClient<StaffMember> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        StaffError::from(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actor_framework::mock::{page_of, MockClient};
    use actor_framework::ActorEntity;

    fn member(id: u32, name: &str, rate: i64) -> StaffMember {
        StaffMember::from_create_params(
            StaffId(id),
            StaffCreate {
                name: name.into(),
                role: StaffRole::Cook,
                hourly_rate: Decimal::new(rate, 2),
                email: format!("{}@example.com", name.to_lowercase()),
            },
        )
        .unwrap()
    }

    #[tokio::test]
    async fn deactivate_reports_change() {
        let mut mock = MockClient::<StaffMember>::new();
        mock.expect_action(StaffId(1)).return_ok(true);
        mock.expect_action(StaffId(1)).return_ok(false);

        let staff = StaffClient::new(mock.client());
        assert!(staff.deactivate(StaffId(1)).await.unwrap());
        assert!(!staff.deactivate(StaffId(1)).await.unwrap());
        mock.verify();
    }

    #[tokio::test]
    async fn hourly_rates_keyed_by_id() {
        let mut mock = MockClient::<StaffMember>::new();
        mock.expect_list()
            .return_ok(page_of(vec![member(1, "Ana", 1450), member(2, "Ben", 1200)]));

        let staff = StaffClient::new(mock.client());
        let rates = staff.hourly_rates().await.unwrap();
        assert_eq!(rates[&StaffId(2)], Decimal::new(1200, 2));
        assert_eq!(rates.len(), 2);
        mock.verify();
    }
}
