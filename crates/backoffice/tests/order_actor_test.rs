use actor_framework::mock::MockClient;
use actor_framework::{ActorClient, Predicate, Query};
use backoffice::clients::{MenuClient, OrderClient};
use backoffice::model::{
    MenuCategory, MenuItem, MenuItemId, OrderCreate, OrderField, OrderId, OrderLine, OrderStatus,
    OrderUpdate, MAX_AMOUNT,
};
use backoffice::order_actor::{InvalidTransition, OrderError, Transition};
use chrono::{DateTime, TimeZone, Utc};
use rust_decimal::Decimal;
use std::str::FromStr;

fn dec(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

fn at(hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 4, hour, minute, 0).unwrap()
}

fn dish(id: u32, name: &str, price: &str, available: bool) -> MenuItem {
    MenuItem {
        id: MenuItemId(id),
        name: name.into(),
        category: MenuCategory::Main,
        price: dec(price),
        ingredients: Vec::new(),
        food_cost: Decimal::ZERO,
        available,
    }
}

fn order_for(lines: &[(u32, &str)]) -> OrderCreate {
    OrderCreate {
        customer_name: "Anna Conti".into(),
        delivery_address: Some("Via Roma 12".into()),
        lines: lines
            .iter()
            .map(|(id, quantity)| OrderLine {
                menu_item_id: MenuItemId(*id),
                quantity: dec(quantity),
            })
            .collect(),
        requested_delivery_time: at(19, 0),
        placed_at: at(18, 5),
        notes: None,
    }
}

/// Spawns a real Order actor whose menu is the given mock.
fn spawn_orders(menu: &MockClient<MenuItem>) -> (OrderClient, tokio::task::JoinHandle<()>) {
    let (actor, client) = backoffice::order_actor::new(16);
    let handle = tokio::spawn(actor.run(MenuClient::new(menu.client())));
    (OrderClient::new(client), handle)
}

/// Real Order actor with a mocked menu: prices are captured at order time and the order
/// walks the whole lifecycle.
#[tokio::test]
async fn order_is_priced_from_menu_and_walks_the_lifecycle() {
    let mut menu = MockClient::<MenuItem>::new();
    menu.expect_get(MenuItemId(1))
        .return_ok(Some(dish(1, "Margherita", "11.50", true)));
    menu.expect_get(MenuItemId(3))
        .return_ok(Some(dish(3, "Tiramisu", "6.50", true)));

    let (orders, handle) = spawn_orders(&menu);
    let id = orders
        .place_order(order_for(&[(1, "2"), (3, "1")]))
        .await
        .expect("order placed");
    assert_eq!(id, OrderId(1));

    let order = orders.get(id).await.unwrap().expect("order stored");
    assert_eq!(order.status(), OrderStatus::New);
    assert_eq!(order.items[0].name, "Margherita");
    assert_eq!(order.items[0].price_at_order, dec("11.50"));
    assert_eq!(order.total(), dec("29.50"));
    menu.verify();

    let mut seen = Vec::new();
    while let Some(next) = orders.next_status(id).await.unwrap() {
        let status = orders.advance(id).await.unwrap();
        assert_eq!(status, next);
        seen.push(status);
    }
    assert_eq!(
        seen,
        vec![
            OrderStatus::InPreparation,
            OrderStatus::ReadyForDelivery,
            OrderStatus::InDelivery,
            OrderStatus::Delivered,
        ]
    );

    let err = orders.advance(id).await.unwrap_err();
    assert_eq!(
        err,
        OrderError::InvalidTransition(InvalidTransition {
            from: OrderStatus::Delivered,
            attempted: Transition::Advance,
        })
    );
    assert!(err.is_stale_action());

    let err = orders.cancel(id, None).await.unwrap_err();
    assert!(err.is_stale_action());
    let order = orders.get(id).await.unwrap().unwrap();
    assert_eq!(order.status(), OrderStatus::Delivered);
    assert_eq!(order.cancellation_reason, None);

    drop(orders);
    handle.await.unwrap();
}

#[tokio::test]
async fn cancel_keeps_reason_and_is_final() {
    let mut menu = MockClient::<MenuItem>::new();
    menu.expect_get(MenuItemId(1))
        .return_ok(Some(dish(1, "Margherita", "11.50", true)));
    let (orders, handle) = spawn_orders(&menu);

    let id = orders.place_order(order_for(&[(1, "1")])).await.unwrap();
    orders.advance(id).await.unwrap();
    orders
        .cancel(id, Some("Customer not home".into()))
        .await
        .unwrap();

    let order = orders.get(id).await.unwrap().unwrap();
    assert_eq!(order.status(), OrderStatus::Cancelled);
    assert_eq!(order.cancellation_reason.as_deref(), Some("Customer not home"));
    assert_eq!(orders.next_status(id).await.unwrap(), None);

    assert_eq!(
        orders.cancel(id, None).await,
        Err(OrderError::InvalidTransition(InvalidTransition {
            from: OrderStatus::Cancelled,
            attempted: Transition::Cancel,
        }))
    );
    let order = orders.get(id).await.unwrap().unwrap();
    assert_eq!(order.cancellation_reason.as_deref(), Some("Customer not home"));

    assert!(matches!(
        orders
            .update_order(id, OrderUpdate { notes: Some("late".into()), ..Default::default() })
            .await,
        Err(OrderError::OrderClosed { status: OrderStatus::Cancelled, .. })
    ));

    drop(orders);
    handle.await.unwrap();
}

#[tokio::test]
async fn rejected_orders_do_not_consume_ids() {
    let mut menu = MockClient::<MenuItem>::new();
    menu.expect_get(MenuItemId(5))
        .return_ok(Some(dish(5, "Minestrone", "5.50", false)));
    menu.expect_get(MenuItemId(9)).return_ok(None);
    menu.expect_get(MenuItemId(1))
        .return_ok(Some(dish(1, "Margherita", "11.50", true)));
    let (orders, handle) = spawn_orders(&menu);

    assert_eq!(
        orders.place_order(order_for(&[])).await,
        Err(OrderError::EmptyItems)
    );
    assert!(matches!(
        orders.place_order(order_for(&[(1, "0.1")])).await,
        Err(OrderError::InvalidQuantity { .. })
    ));
    assert_eq!(
        orders.place_order(order_for(&[(5, "1")])).await,
        Err(OrderError::MenuItemUnavailable(MenuItemId(5)))
    );
    assert_eq!(
        orders.place_order(order_for(&[(9, "1")])).await,
        Err(OrderError::UnknownMenuItem(MenuItemId(9)))
    );
    assert_eq!(
        orders.place_order(order_for(&[(1, "0.5")])).await,
        Ok(OrderId(1))
    );
    menu.verify();

    drop(orders);
    handle.await.unwrap();
}

/// Concurrent advances are applied one at a time: exactly four succeed.
#[tokio::test]
async fn concurrent_advances_are_serialised() {
    let mut menu = MockClient::<MenuItem>::new();
    menu.expect_get(MenuItemId(1))
        .return_ok(Some(dish(1, "Margherita", "11.50", true)));
    let (orders, handle) = spawn_orders(&menu);
    let id = orders.place_order(order_for(&[(1, "1")])).await.unwrap();

    let tasks: Vec<_> = (0..10)
        .map(|_| {
            let orders = orders.clone();
            tokio::spawn(async move { orders.advance(id).await })
        })
        .collect();
    let mut succeeded = 0;
    for task in tasks {
        match task.await.unwrap() {
            Ok(_) => succeeded += 1,
            Err(e) => assert!(e.is_stale_action(), "unexpected error: {e}"),
        }
    }
    assert_eq!(succeeded, 4);
    assert_eq!(
        orders.get(id).await.unwrap().unwrap().status(),
        OrderStatus::Delivered
    );

    drop(orders);
    handle.await.unwrap();
}

#[tokio::test]
async fn orders_are_never_deleted() {
    let mut menu = MockClient::<MenuItem>::new();
    menu.expect_get(MenuItemId(1))
        .return_ok(Some(dish(1, "Margherita", "11.50", true)));
    let (orders, handle) = spawn_orders(&menu);
    let id = orders.place_order(order_for(&[(1, "1")])).await.unwrap();

    assert!(matches!(
        orders.request_delete(id).await,
        Err(OrderError::DeletionForbidden(forbidden)) if forbidden == id
    ));
    assert!(orders.get(id).await.unwrap().is_some());

    drop(orders);
    handle.await.unwrap();
}

/// An absurd quantity is refused up front, so computing totals inside the store never
/// brings the actor down.
#[tokio::test]
async fn oversized_quantity_is_rejected_and_store_keeps_serving() {
    let mut menu = MockClient::<MenuItem>::new();
    menu.expect_get(MenuItemId(1))
        .return_ok(Some(dish(1, "Margherita", "11.50", true)));

    let (orders, handle) = spawn_orders(&menu);

    let mut huge = order_for(&[(1, "1")]);
    huge.lines[0].quantity = Decimal::MAX;
    assert_eq!(
        orders.place_order(huge).await,
        Err(OrderError::InvalidQuantity {
            menu_item_id: MenuItemId(1),
            quantity: Decimal::MAX,
        })
    );

    let mut largest = order_for(&[(1, "1")]);
    largest.lines[0].quantity = MAX_AMOUNT;
    let id = orders.place_order(largest).await.expect("order placed");
    assert_eq!(id, OrderId(1));

    let page = orders
        .list(Query::new().filter(Predicate::gt(OrderField::Total, Decimal::ZERO)))
        .await
        .unwrap();
    assert_eq!(page.items.len(), 1);
    assert_eq!(page.items[0].total(), MAX_AMOUNT * dec("11.50"));

    assert_eq!(orders.advance(id).await, Ok(OrderStatus::InPreparation));
    menu.verify();

    drop(orders);
    handle.await.unwrap();
}
