//! Demo run of the back office: seeds the demo pizzeria, takes one delivery order from
//! the oven to the door, and logs the day's reports.

use actor_framework::tracing::setup_tracing;
use actor_framework::ActorClient;
use backoffice::accounting::Period;
use backoffice::config::BackOfficeConfig;
use backoffice::lifecycle::fixtures::{DemoFixture, Fixture};
use backoffice::lifecycle::BackOffice;
use backoffice::order_actor::OrderError;
use tracing::{error, info, warn, Instrument};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = BackOfficeConfig::from_env()?;
    setup_tracing(&config.log_filter);

    let system = BackOffice::start(&config)?;
    let seeded = DemoFixture.seed(&system).await?;
    info!(orders = ?seeded.orders, "Demo data ready");

    let order_id = seeded.orders[0];
    let span = tracing::info_span!("order_lifecycle", %order_id);
    async {
        while let Some(order) = system.orders.get(order_id).await? {
            let Some(label) = order.status().next_action_label() else {
                break;
            };
            info!(customer = %order.customer_name, total = %order.total(), action = label, "Next step");
            let status = system.orders.advance(order_id).await?;
            info!(%status, "Order moved on");
        }

        // A second click from a stale screen.
        match system.orders.cancel(order_id, None).await {
            Err(e) if e.is_stale_action() => warn!("{}", OrderError::STALE_ACTION_NOTICE),
            Err(e) => return Err(e),
            Ok(()) => error!("Cancelled an order that was already delivered"),
        }
        Ok::<(), OrderError>(())
    }
    .instrument(span)
    .await?;

    let cancelled = seeded.orders[1];
    system
        .orders
        .cancel(cancelled, Some("Customer called to cancel".into()))
        .await?;

    let day = Period::day(DemoFixture::date()?);
    let summary = system.accounting.summary(day).await?;
    info!(
        period = %summary.period,
        revenue = %summary.revenue,
        cost_of_goods = %summary.cost_of_goods,
        expenses = %summary.expenses,
        net_profit = %summary.net_profit,
        voided = summary.voided_count,
        "Daily summary"
    );

    for product in system.inventory.low_stock_report().await? {
        warn!(
            product = %product.name,
            quantity = %product.quantity,
            threshold = %product.low_stock_threshold,
            "Low stock"
        );
    }

    for item in system.menu.available_items(None).await? {
        let costing = system.menu.costing(item.id).await?;
        info!(
            dish = %item.name,
            price = %costing.price,
            food_cost_pct = ?costing.food_cost_pct,
            margin = %costing.margin,
            "Menu costing"
        );
    }

    for log in system.haccp.open_deviations().await? {
        warn!(equipment = %log.equipment, reading_c = %log.reading_c, "Needs corrective action");
    }

    let (from, to) = day.utc_bounds()?;
    let labour = system.shifts.labour_cost(from, to, &system.staff).await?;
    info!(total = %labour.total, uncosted = labour.uncosted.len(), "Labour cost");

    system.shutdown().await?;
    info!("Demo complete");
    Ok(())
}
