//! Deterministic seed data.
//!
//! [`DemoFixture`] stocks a small pizzeria on Monday 2024-03-04: six stock items, five
//! dishes, four staff with a shift each, two open delivery orders, three sales (one
//! voided), three expenses and four temperature readings, one of them out of limit.
//! Every value and timestamp is fixed, and a fresh system hands out IDs from 1, so the
//! demo binary and the integration tests see the same records.

use super::BackOffice;
use crate::expense_actor::ExpenseError;
use crate::haccp_actor::HaccpError;
use crate::inventory_actor::InventoryError;
use crate::menu_actor::MenuError;
use crate::model::{
    ExpenseCategory, ExpenseCreate, ExpenseId, Ingredient, MenuCategory, MenuItemCreate,
    MenuItemId, OrderCreate, OrderId, OrderLine, PaymentMethod, ProductCreate, ProductId,
    SaleCreate, SaleId, SaleLineRequest, ShiftCreate, ShiftId, StaffCreate, StaffId, StaffRole,
    TemperatureLogCreate, TemperatureLogId, Unit, Zone,
};
use crate::order_actor::OrderError;
use crate::sale_actor::SaleError;
use crate::shift_actor::ShiftError;
use crate::staff_actor::StaffError;
use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use rust_decimal::Decimal;
use thiserror::Error;
use tracing::info;

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("invalid fixture timestamp: {0}")]
    InvalidTimestamp(String),
    #[error(transparent)]
    Inventory(#[from] InventoryError),
    #[error(transparent)]
    Menu(#[from] MenuError),
    #[error(transparent)]
    Order(#[from] OrderError),
    #[error(transparent)]
    Sale(#[from] SaleError),
    #[error(transparent)]
    Expense(#[from] ExpenseError),
    #[error(transparent)]
    Haccp(#[from] HaccpError),
    #[error(transparent)]
    Staff(#[from] StaffError),
    #[error(transparent)]
    Shift(#[from] ShiftError),
}

/// IDs of everything a fixture created, in creation order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SeedReport {
    pub products: Vec<ProductId>,
    pub menu_items: Vec<MenuItemId>,
    pub staff: Vec<StaffId>,
    pub shifts: Vec<ShiftId>,
    pub orders: Vec<OrderId>,
    pub sales: Vec<SaleId>,
    pub expenses: Vec<ExpenseId>,
    pub temperature_logs: Vec<TemperatureLogId>,
}

/// Populates a running system.
#[async_trait]
pub trait Fixture: Send + Sync {
    async fn seed(&self, system: &BackOffice) -> Result<SeedReport, SeedError>;
}

/// The demo pizzeria. See the module docs.
#[derive(Debug, Clone, Copy, Default)]
pub struct DemoFixture;

impl DemoFixture {
    pub const DAY: (i32, u32, u32) = (2024, 3, 4);

    pub fn date() -> Result<NaiveDate, SeedError> {
        let (year, month, day) = Self::DAY;
        date(year, month, day)
    }

    /// `hour:minute` UTC on the fixture day.
    pub fn at(hour: u32, minute: u32) -> Result<DateTime<Utc>, SeedError> {
        let (year, month, day) = Self::DAY;
        Utc.with_ymd_and_hms(year, month, day, hour, minute, 0)
            .single()
            .ok_or_else(|| SeedError::InvalidTimestamp(format!("{:02}:{:02}", hour, minute)))
    }
}

fn date(year: i32, month: u32, day: u32) -> Result<NaiveDate, SeedError> {
    NaiveDate::from_ymd_opt(year, month, day)
        .ok_or_else(|| SeedError::InvalidTimestamp(format!("{}-{:02}-{:02}", year, month, day)))
}

/// Decimal from integer mantissa and scale: `d(1150, 2)` is 11.50.
fn d(mantissa: i64, scale: u32) -> Decimal {
    Decimal::new(mantissa, scale)
}

fn ingredient(product_id: ProductId, quantity: Decimal) -> Ingredient {
    Ingredient {
        product_id,
        quantity,
    }
}

fn line(menu_item_id: MenuItemId, quantity: u32) -> SaleLineRequest {
    SaleLineRequest {
        menu_item_id,
        quantity,
    }
}

#[async_trait]
impl Fixture for DemoFixture {
    async fn seed(&self, system: &BackOffice) -> Result<SeedReport, SeedError> {
        let mut report = SeedReport::default();

        let stock = [
            ("Pizza flour", "Dry goods", Unit::Kilogram, d(25, 0), None, d(120, 2), Some("Molino Verde")),
            ("Mozzarella", "Dairy", Unit::Kilogram, d(8, 0), Some(d(3, 0)), d(950, 2), Some("Caseificio Sud")),
            ("Tomato passata", "Dry goods", Unit::Litre, d(12, 0), Some(d(4, 0)), d(210, 2), None),
            ("Fresh basil", "Herbs", Unit::Piece, d(2, 0), Some(d(5, 0)), d(90, 2), None),
            ("Espresso beans", "Beverages", Unit::Kilogram, d(3, 0), Some(d(1, 0)), d(1800, 2), Some("Torrefazione Nord")),
            ("Mascarpone", "Dairy", Unit::Kilogram, d(15, 1), Some(d(2, 0)), d(780, 2), Some("Caseificio Sud")),
        ];
        for (name, category, unit, quantity, low_stock_threshold, unit_cost, supplier) in stock {
            let id = system
                .inventory
                .create_product(ProductCreate {
                    name: name.into(),
                    category: category.into(),
                    unit,
                    quantity,
                    low_stock_threshold,
                    unit_cost,
                    supplier: supplier.map(String::from),
                })
                .await?;
            report.products.push(id);
        }
        let [flour, mozzarella, passata, basil, beans, mascarpone] = [
            report.products[0],
            report.products[1],
            report.products[2],
            report.products[3],
            report.products[4],
            report.products[5],
        ];

        let dishes = [
            (
                "Margherita",
                MenuCategory::Main,
                d(1150, 2),
                vec![
                    ingredient(flour, d(25, 2)),
                    ingredient(mozzarella, d(10, 2)),
                    ingredient(passata, d(10, 2)),
                    ingredient(basil, d(5, 1)),
                ],
                true,
            ),
            ("Espresso", MenuCategory::Drink, d(220, 2), vec![ingredient(beans, d(8, 3))], true),
            ("Tiramisu", MenuCategory::Dessert, d(650, 2), vec![ingredient(mascarpone, d(10, 2))], true),
            ("Garlic bread", MenuCategory::Side, d(400, 2), vec![ingredient(flour, d(10, 2))], true),
            ("Minestrone", MenuCategory::Starter, d(550, 2), Vec::new(), false),
        ];
        for (name, category, price, ingredients, available) in dishes {
            let id = system
                .menu
                .create_item(MenuItemCreate {
                    name: name.into(),
                    category,
                    price,
                    ingredients,
                    available,
                })
                .await?;
            report.menu_items.push(id);
        }
        let (margherita, espresso, tiramisu) = (
            report.menu_items[0],
            report.menu_items[1],
            report.menu_items[2],
        );

        let people = [
            ("Giulia Rossi", StaffRole::Chef, d(1850, 2), "giulia@trattoria.example", (10, 18)),
            ("Marco Bianchi", StaffRole::Cook, d(1400, 2), "marco@trattoria.example", (16, 23)),
            ("Sofia Esposito", StaffRole::Server, d(1250, 2), "sofia@trattoria.example", (17, 23)),
            ("Luca Romano", StaffRole::Driver, d(1200, 2), "luca@trattoria.example", (18, 22)),
        ];
        for (name, role, hourly_rate, email, (from, to)) in people {
            let staff_id = system
                .staff
                .hire(StaffCreate {
                    name: name.into(),
                    role,
                    hourly_rate,
                    email: email.into(),
                })
                .await?;
            report.staff.push(staff_id);
            let shift_id = system
                .shifts
                .schedule(ShiftCreate {
                    staff_id,
                    role,
                    starts_at: DemoFixture::at(from, 0)?,
                    ends_at: DemoFixture::at(to, 0)?,
                    note: None,
                })
                .await?;
            report.shifts.push(shift_id);
        }

        let orders = [
            (
                "Anna Conti",
                "Via Roma 12",
                vec![(margherita, d(2, 0)), (tiramisu, d(1, 0))],
                (18, 5),
                (19, 0),
                Some("Ring twice"),
            ),
            (
                "Paolo Greco",
                "Corso Italia 4",
                vec![(espresso, d(2, 0)), (margherita, d(1, 0))],
                (18, 20),
                (19, 15),
                None,
            ),
        ];
        for (customer, address, lines, placed, requested, notes) in orders {
            let id = system
                .orders
                .place_order(OrderCreate {
                    customer_name: customer.into(),
                    delivery_address: Some(address.into()),
                    lines: lines
                        .into_iter()
                        .map(|(menu_item_id, quantity)| OrderLine {
                            menu_item_id,
                            quantity,
                        })
                        .collect(),
                    requested_delivery_time: DemoFixture::at(requested.0, requested.1)?,
                    placed_at: DemoFixture::at(placed.0, placed.1)?,
                    notes: notes.map(String::from),
                })
                .await?;
            report.orders.push(id);
        }

        let sales = [
            (vec![line(margherita, 2), line(espresso, 2)], PaymentMethod::Cash, (12, 30)),
            (vec![line(tiramisu, 2)], PaymentMethod::Card, (13, 10)),
            (vec![line(margherita, 1)], PaymentMethod::Card, (20, 45)),
        ];
        for (lines, payment, (hour, minute)) in sales {
            let id = system
                .sales
                .record_sale(SaleCreate {
                    lines,
                    payment,
                    sold_at: DemoFixture::at(hour, minute)?,
                    order_id: None,
                })
                .await?;
            report.sales.push(id);
        }
        system
            .sales
            .void(report.sales[2], "Rung up twice".into())
            .await?;

        let (year, month, _) = DemoFixture::DAY;
        let expenses = [
            (ExpenseCategory::Rent, d(240000, 2), "March rent", date(year, month, 1)?),
            (ExpenseCategory::Ingredients, d(18240, 2), "Weekly dairy delivery", DemoFixture::date()?),
            (ExpenseCategory::Utilities, d(9600, 2), "Electricity, February", DemoFixture::date()?),
        ];
        for (category, amount, description, incurred_on) in expenses {
            let id = system
                .expenses
                .record_expense(ExpenseCreate {
                    category,
                    amount,
                    description: description.into(),
                    incurred_on,
                })
                .await?;
            report.expenses.push(id);
        }

        let readings = [
            ("Walk-in fridge", Zone::Refrigerator, d(35, 1), (7, 30)),
            ("Chest freezer", Zone::Freezer, d(-20, 0), (7, 32)),
            ("Bain-marie", Zone::HotHolding, d(58, 0), (12, 0)),
            ("Delivery box 1", Zone::Delivery, d(6, 0), (18, 40)),
        ];
        for (equipment, zone, reading_c, (hour, minute)) in readings {
            let id = system
                .haccp
                .record_reading(TemperatureLogCreate {
                    equipment: equipment.into(),
                    zone,
                    reading_c,
                    recorded_at: DemoFixture::at(hour, minute)?,
                    recorded_by: "Giulia Rossi".into(),
                })
                .await?;
            report.temperature_logs.push(id);
        }

        info!(
            products = report.products.len(),
            menu_items = report.menu_items.len(),
            orders = report.orders.len(),
            sales = report.sales.len(),
            "Demo data seeded"
        );
        Ok(report)
    }
}
