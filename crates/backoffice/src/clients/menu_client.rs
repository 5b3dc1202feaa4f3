//! # Menu Client
//!
//! Provides a high-level API for the menu actor and its food-cost calculator.
use super::unexpected_reply;
use crate::menu_actor::{CostBreakdown, MenuAction, MenuActionResult, MenuError};
use crate::model::{MenuCategory, MenuField, MenuItem, MenuItemCreate, MenuItemId, MenuItemUpdate};
use actor_framework::{ActorClient, Direction, FrameworkError, Predicate, Query, ResourceClient};
use async_trait::async_trait;
use rust_decimal::Decimal;
use tracing::{debug, instrument};

/// Client for interacting with the menu actor.
#[derive(Clone)]
pub struct MenuClient {
    inner: ResourceClient<MenuItem>,
}

impl MenuClient {
    pub fn new(inner: ResourceClient<MenuItem>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self, params), fields(name = %params.name))]
    pub async fn create_item(&self, params: MenuItemCreate) -> Result<MenuItemId, MenuError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(MenuError::from)
    }

    #[instrument(skip(self))]
    pub async fn update_item(
        &self,
        id: MenuItemId,
        update: MenuItemUpdate,
    ) -> Result<MenuItem, MenuError> {
        debug!("Sending request");
        self.inner.update(id, update).await.map_err(MenuError::from)
    }

    pub async fn set_available(&self, id: MenuItemId, available: bool) -> Result<MenuItem, MenuError> {
        self.update_item(
            id,
            MenuItemUpdate {
                available: Some(available),
                ..Default::default()
            },
        )
        .await
    }

    /// Refreshes the food cost from current stock prices.
    #[instrument(skip(self))]
    pub async fn recost(&self, id: MenuItemId) -> Result<Decimal, MenuError> {
        debug!("Sending request");
        match self.inner.perform_action(id, MenuAction::Recost).await {
            Ok(MenuActionResult::Recosted(cost)) => Ok(cost),
            Ok(other) => Err(MenuError::ActorCommunicationError(unexpected_reply(
                "Recost", other,
            ))),
            Err(e) => Err(MenuError::from(e)),
        }
    }

    #[instrument(skip(self))]
    pub async fn costing(&self, id: MenuItemId) -> Result<CostBreakdown, MenuError> {
        debug!("Sending request");
        match self.inner.perform_action(id, MenuAction::Costing).await {
            Ok(MenuActionResult::Costing(breakdown)) => Ok(breakdown),
            Ok(other) => Err(MenuError::ActorCommunicationError(unexpected_reply(
                "Costing", other,
            ))),
            Err(e) => Err(MenuError::from(e)),
        }
    }

    /// Recosts every dish, e.g. after a supplier price change. Returns how many were updated.
    #[instrument(skip(self))]
    pub async fn recost_all(&self) -> Result<usize, MenuError> {
        let items = self.list(Query::new()).await?.items;
        for item in &items {
            self.recost(item.id).await?;
        }
        Ok(items.len())
    }

    /// Dishes on sale, optionally in one category, by name.
    #[instrument(skip(self))]
    pub async fn available_items(
        &self,
        category: Option<MenuCategory>,
    ) -> Result<Vec<MenuItem>, MenuError> {
        let mut query = Query::new().filter(Predicate::eq(MenuField::Available, true));
        if let Some(category) = category {
            query = query.filter(Predicate::eq(MenuField::Category, category));
        }
        let query = query.order_by(MenuField::Name, Direction::Asc);
        Ok(self.list(query).await?.items)
    }
}

#[async_trait]
impl ActorClient<MenuItem> for MenuClient {
    type Error = MenuError;

    fn inner(&self) -> &ResourceClient<MenuItem> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        MenuError::from(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actor_framework::mock::{create_mock_client, expect_list, page_of, MockClient};
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[tokio::test]
    async fn costing_returns_breakdown() {
        let mut mock = MockClient::<MenuItem>::new();
        let breakdown = crate::menu_actor::costing::breakdown(dec("11.50"), dec("1.70"), dec("30"));
        mock.expect_action(MenuItemId(1))
            .return_ok(MenuActionResult::Costing(breakdown.clone()));

        let menu = MenuClient::new(mock.client());
        assert_eq!(menu.costing(MenuItemId(1)).await.unwrap(), breakdown);
        mock.verify();
    }

    #[tokio::test]
    async fn recost_rejects_costing_reply() {
        let mut mock = MockClient::<MenuItem>::new();
        let breakdown = crate::menu_actor::costing::breakdown(dec("9"), dec("2"), dec("30"));
        mock.expect_action(MenuItemId(2))
            .return_ok(MenuActionResult::Costing(breakdown));

        let menu = MenuClient::new(mock.client());
        assert!(matches!(
            menu.recost(MenuItemId(2)).await,
            Err(MenuError::ActorCommunicationError(msg)) if msg.contains("Recost")
        ));
        mock.verify();
    }

    #[tokio::test]
    async fn available_items_filters_by_category() {
        let (client, mut receiver) = create_mock_client::<MenuItem>(10);
        let menu = MenuClient::new(client);

        let task =
            tokio::spawn(async move { menu.available_items(Some(MenuCategory::Dessert)).await });

        let (query, responder) = expect_list(&mut receiver)
            .await
            .expect("Expected List request");
        assert_eq!(query.filters().len(), 2);
        assert!(matches!(
            query.filters()[1],
            Predicate::Eq(MenuField::Category, _)
        ));
        assert!(matches!(
            query.ordering(),
            Some((MenuField::Name, Direction::Asc))
        ));
        responder.send(Ok(page_of(Vec::new()))).unwrap();

        assert!(task.await.unwrap().unwrap().is_empty());
    }
}
