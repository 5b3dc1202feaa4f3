use actor_framework::ActorClient;
use backoffice::accounting::Period;
use backoffice::config::BackOfficeConfig;
use backoffice::expense_actor::ExpenseError;
use backoffice::haccp_actor::HaccpError;
use backoffice::inventory_actor::InventoryError;
use backoffice::lifecycle::fixtures::{DemoFixture, Fixture, SeedReport};
use backoffice::lifecycle::{BackOffice, LifecycleError};
use backoffice::model::{
    ExpenseCategory, MenuItemUpdate, OrderCreate, OrderLine, OrderStatus, ProductUpdate,
    ShiftCreate, StaffRole,
};
use backoffice::sale_actor::SaleError;
use backoffice::shift_actor::ShiftError;
use rust_decimal::Decimal;
use std::str::FromStr;

fn dec(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

async fn seeded() -> (BackOffice, SeedReport) {
    let system = BackOffice::start(&BackOfficeConfig::default()).expect("system starts");
    let report = DemoFixture.seed(&system).await.expect("fixture seeds");
    (system, report)
}

#[tokio::test]
async fn fixture_is_deterministic() {
    let (system, report) = seeded().await;
    assert_eq!(report.products.len(), 6);
    assert_eq!(report.menu_items.len(), 5);
    assert_eq!(report.staff.len(), 4);
    assert_eq!(report.shifts.len(), 4);
    assert_eq!(report.orders.len(), 2);
    assert_eq!(report.sales.len(), 3);
    assert_eq!(report.expenses.len(), 3);
    assert_eq!(report.temperature_logs.len(), 4);
    assert_eq!(report.orders[0].0, 1);
    assert_eq!(report.menu_items[4].0, 5);

    let (other, second) = seeded().await;
    assert_eq!(report, second);
    other.shutdown().await.unwrap();
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn order_lifecycle_end_to_end() {
    let (system, report) = seeded().await;
    let id = report.orders[0];

    let order = system.orders.get(id).await.unwrap().unwrap();
    assert_eq!(order.status(), OrderStatus::New);
    assert_eq!(order.total(), dec("29.50"));
    assert_eq!(system.orders.open_orders().await.unwrap().len(), 2);

    for expected in [
        OrderStatus::InPreparation,
        OrderStatus::ReadyForDelivery,
        OrderStatus::InDelivery,
        OrderStatus::Delivered,
    ] {
        assert_eq!(system.orders.advance(id).await.unwrap(), expected);
    }
    assert!(system.orders.cancel(id, None).await.unwrap_err().is_stale_action());
    assert!(system.orders.advance(id).await.unwrap_err().is_stale_action());

    let delivered = system.orders.with_status(OrderStatus::Delivered).await.unwrap();
    assert_eq!(delivered.len(), 1);
    assert_eq!(delivered[0].id, id);
    assert_eq!(system.orders.open_orders().await.unwrap().len(), 1);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn menu_price_change_does_not_touch_placed_orders() {
    let (system, report) = seeded().await;
    let margherita = report.menu_items[0];

    let updated = system
        .menu
        .update_item(
            margherita,
            MenuItemUpdate {
                price: Some(dec("12.50")),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.price, dec("12.50"));

    let old = system.orders.get(report.orders[0]).await.unwrap().unwrap();
    assert_eq!(old.total(), dec("29.50"));

    let new = system
        .orders
        .place_order(OrderCreate {
            customer_name: "Elena Ricci".into(),
            delivery_address: Some("Piazza Dante 1".into()),
            lines: vec![OrderLine {
                menu_item_id: margherita,
                quantity: dec("1"),
            }],
            requested_delivery_time: DemoFixture::at(20, 0).unwrap(),
            placed_at: DemoFixture::at(19, 20).unwrap(),
            notes: None,
        })
        .await
        .unwrap();
    let new = system.orders.get(new).await.unwrap().unwrap();
    assert_eq!(new.items[0].price_at_order, dec("12.50"));

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn stock_movements_and_low_stock_report() {
    let (system, report) = seeded().await;
    let basil = report.products[3];

    let low: Vec<_> = system
        .inventory
        .low_stock_report()
        .await
        .unwrap()
        .into_iter()
        .map(|p| p.name)
        .collect();
    assert_eq!(low, vec!["Fresh basil", "Mascarpone"]);

    assert_eq!(
        system.inventory.consume(basil, dec("10")).await,
        Err(InventoryError::InsufficientStock {
            requested: dec("10"),
            available: dec("2"),
        })
    );
    assert_eq!(system.inventory.stock_level(basil).await.unwrap().quantity, dec("2"));

    assert_eq!(system.inventory.restock(basil, dec("10")).await.unwrap(), dec("12"));
    let low = system.inventory.low_stock_report().await.unwrap();
    assert_eq!(low.len(), 1);
    assert_eq!(low[0].name, "Mascarpone");

    let flour = system.inventory.get(report.products[0]).await.unwrap().unwrap();
    assert_eq!(flour.low_stock_threshold, dec("5"));

    let dairy = system.inventory.search("mozz%").await.unwrap();
    assert_eq!(dairy.len(), 1);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn food_cost_follows_supplier_prices() {
    let (system, report) = seeded().await;
    let margherita = report.menu_items[0];

    let costing = system.menu.costing(margherita).await.unwrap();
    assert_eq!(costing.food_cost, dec("1.91"));
    assert_eq!(costing.food_cost_pct, Some(dec("16.61")));
    assert_eq!(costing.margin, dec("9.59"));

    system
        .inventory
        .update_product(
            report.products[1],
            ProductUpdate {
                unit_cost: Some(dec("10.50")),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    // Stored cost only moves on recost.
    assert_eq!(system.menu.costing(margherita).await.unwrap().food_cost, dec("1.91"));
    assert_eq!(system.menu.recost(margherita).await.unwrap(), dec("2.01"));

    let available = system.menu.available_items(None).await.unwrap();
    assert_eq!(available.len(), 4);
    assert!(available.iter().all(|item| item.name != "Minestrone"));

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn daily_and_monthly_accounting() {
    let (system, _) = seeded().await;
    let day = Period::day(DemoFixture::date().unwrap());

    let summary = system.accounting.summary(day).await.unwrap();
    assert_eq!(summary.revenue, dec("40.40"));
    assert_eq!(summary.cost_of_goods, dec("5.668"));
    assert_eq!(summary.sale_count, 2);
    assert_eq!(summary.voided_count, 1);
    assert_eq!(summary.voided_amount, dec("11.50"));
    assert_eq!(summary.expenses, dec("278.40"));
    assert_eq!(summary.net_profit, dec("-243.668"));
    assert_eq!(summary.average_sale, Some(dec("20.20")));

    let march = Period::month_containing(DemoFixture::date().unwrap());
    let month = system.accounting.summary(march).await.unwrap();
    assert_eq!(month.expenses, dec("2678.40"));
    assert_eq!(month.expenses_by_category[&ExpenseCategory::Rent], dec("2400.00"));

    let days = system.accounting.breakdown(march).await.unwrap();
    assert_eq!(days.len(), 31);
    assert_eq!(days[0].expenses, dec("2400.00"));
    assert_eq!(days[3].revenue, dec("40.40"));

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn financial_and_safety_records_are_retained() {
    let (system, report) = seeded().await;

    let sale = report.sales[0];
    assert_eq!(
        system.sales.request_delete(sale).await.unwrap_err(),
        SaleError::RecordRetained(sale)
    );
    assert_eq!(
        system.sales.void(report.sales[2], "again".into()).await,
        Err(SaleError::AlreadyVoided(report.sales[2]))
    );

    let log = report.temperature_logs[0];
    assert_eq!(
        system.haccp.request_delete(log).await.unwrap_err(),
        HaccpError::RecordRetained(log)
    );

    let open = system.haccp.open_deviations().await.unwrap();
    assert_eq!(open.len(), 1);
    assert_eq!(open[0].equipment, "Bain-marie");
    system
        .haccp
        .record_corrective_action(open[0].id, "Reheated to 75 C, thermostat reset".into())
        .await
        .unwrap();
    assert!(system.haccp.open_deviations().await.unwrap().is_empty());

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn expenses_delete_through_confirmation() {
    let (system, report) = seeded().await;
    let id = report.expenses[2];

    assert!(matches!(
        system.expenses.confirm_delete(id).await,
        Err(ExpenseError::ActorCommunicationError(_))
    ));

    let pending = system.expenses.request_delete(id).await.unwrap();
    assert_eq!(pending.description, "Electricity, February");
    assert!(system.expenses.cancel_delete(id).await.unwrap());
    assert!(system.expenses.confirm_delete(id).await.is_err());

    system.expenses.request_delete(id).await.unwrap();
    system.expenses.confirm_delete(id).await.unwrap();
    assert!(system.expenses.get(id).await.unwrap().is_none());

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn roster_overlap_and_labour_cost() {
    let (system, report) = seeded().await;
    let marco = report.staff[1];

    let clash = system
        .shifts
        .schedule(ShiftCreate {
            staff_id: marco,
            role: StaffRole::Cook,
            starts_at: DemoFixture::at(20, 0).unwrap(),
            ends_at: DemoFixture::at(23, 30).unwrap(),
            note: None,
        })
        .await;
    assert_eq!(clash, Err(ShiftError::Overlap { existing: report.shifts[1] }));

    // Back-to-back is not an overlap.
    system
        .shifts
        .schedule(ShiftCreate {
            staff_id: marco,
            role: StaffRole::Cook,
            starts_at: DemoFixture::at(8, 0).unwrap(),
            ends_at: DemoFixture::at(16, 0).unwrap(),
            note: Some("Prep".into()),
        })
        .await
        .unwrap();

    let (from, to) = Period::day(DemoFixture::date().unwrap()).utc_bounds().unwrap();
    let roster = system.shifts.roster(from, to).await.unwrap();
    assert_eq!(roster.len(), 5);
    assert!(roster.windows(2).all(|w| w[0].starts_at <= w[1].starts_at));

    // 369.00 seeded + 8 h × 14.00
    let labour = system.shifts.labour_cost(from, to, &system.staff).await.unwrap();
    assert_eq!(labour.total, dec("481.00"));
    assert!(labour.uncosted.is_empty());

    system.staff.deactivate(report.staff[3]).await.unwrap();
    assert_eq!(
        system
            .shifts
            .schedule(ShiftCreate {
                staff_id: report.staff[3],
                role: StaffRole::Driver,
                starts_at: DemoFixture::at(11, 0).unwrap(),
                ends_at: DemoFixture::at(14, 0).unwrap(),
                note: None,
            })
            .await,
        Err(ShiftError::InactiveStaff(report.staff[3]))
    );
    assert_eq!(system.staff.active_staff(None).await.unwrap().len(), 3);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn invalid_config_is_refused_at_start() {
    let config = BackOfficeConfig {
        channel_capacity: 0,
        ..Default::default()
    };
    assert!(matches!(
        BackOffice::start(&config),
        Err(LifecycleError::Config(_))
    ));
}
