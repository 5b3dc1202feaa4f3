//! # System Lifecycle
//!
//! Starts, wires and shuts down the back-office actors.
//!
//! Actors are created first, without dependencies, and their contexts are injected when
//! they are spawned with `run(context)`:
//!
//! | Actor          | Context                                  |
//! |----------------|------------------------------------------|
//! | Product        | `InventorySettings`                      |
//! | MenuItem       | `MenuContext` (inventory client, target) |
//! | Order, Sale    | `MenuClient`                             |
//! | TemperatureLog | `HaccpLimits`                            |
//! | Shift          | `StaffClient`                            |
//! | Staff, Expense | `()`                                     |
//!
//! The graph is acyclic, so shutdown needs no explicit message: dropping every client
//! closes the channels, each actor drains and exits, and the clients it held in its
//! context are dropped with it.

pub mod fixtures;

use crate::accounting::AccountingService;
use crate::clients::{
    ExpenseClient, HaccpClient, InventoryClient, MenuClient, OrderClient, SaleClient,
    ShiftClient, StaffClient,
};
use crate::config::{BackOfficeConfig, ConfigError};
use crate::menu_actor::MenuContext;
use crate::{
    expense_actor, haccp_actor, inventory_actor, menu_actor, order_actor, sale_actor,
    shift_actor, staff_actor,
};
use thiserror::Error;
use tokio::task::JoinHandle;
use tracing::{error, info};

#[derive(Debug, Error)]
pub enum LifecycleError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("Actor task failed: {0}")]
    ActorTask(String),
}

/// A running back office: one client per store plus the accounting view.
pub struct BackOffice {
    pub orders: OrderClient,
    pub inventory: InventoryClient,
    pub menu: MenuClient,
    pub sales: SaleClient,
    pub expenses: ExpenseClient,
    pub haccp: HaccpClient,
    pub staff: StaffClient,
    pub shifts: ShiftClient,
    pub accounting: AccountingService,
    handles: Vec<JoinHandle<()>>,
}

impl BackOffice {
    /// Validates `config` and spawns every actor. Must be called inside a Tokio runtime.
    pub fn start(config: &BackOfficeConfig) -> Result<Self, LifecycleError> {
        config.validate()?;
        let capacity = config.channel_capacity;

        let (inventory_actor, inventory) = inventory_actor::new(capacity);
        let (menu_actor, menu) = menu_actor::new(capacity);
        let (order_actor, orders) = order_actor::new(capacity);
        let (sale_actor, sales) = sale_actor::new(capacity);
        let (expense_actor, expenses) = expense_actor::new(capacity);
        let (haccp_actor, haccp) = haccp_actor::new(capacity);
        let (staff_actor, staff) = staff_actor::new(capacity);
        let (shift_actor, shifts) = shift_actor::new(capacity);

        let inventory = InventoryClient::new(inventory);
        let menu = MenuClient::new(menu);
        let staff = StaffClient::new(staff);
        let sales = SaleClient::new(sales);
        let expenses = ExpenseClient::new(expenses);

        let handles = vec![
            tokio::spawn(inventory_actor.run(config.inventory.clone())),
            tokio::spawn(menu_actor.run(MenuContext {
                inventory: inventory.clone(),
                settings: config.menu.clone(),
            })),
            tokio::spawn(order_actor.run(menu.clone())),
            tokio::spawn(sale_actor.run(menu.clone())),
            tokio::spawn(expense_actor.run(())),
            tokio::spawn(haccp_actor.run(config.haccp.clone())),
            tokio::spawn(staff_actor.run(())),
            tokio::spawn(shift_actor.run(staff.clone())),
        ];
        info!(actors = handles.len(), capacity, "Back office started");

        Ok(Self {
            orders: OrderClient::new(orders),
            inventory,
            menu,
            accounting: AccountingService::new(sales.clone(), expenses.clone()),
            sales,
            expenses,
            haccp: HaccpClient::new(haccp),
            staff,
            shifts: ShiftClient::new(shifts),
            handles,
        })
    }

    /// Drops every client and waits for all actors to exit.
    pub async fn shutdown(self) -> Result<(), LifecycleError> {
        info!("Shutting down back office");
        let Self {
            orders,
            inventory,
            menu,
            sales,
            expenses,
            haccp,
            staff,
            shifts,
            accounting,
            handles,
        } = self;
        drop((orders, inventory, menu, sales, expenses, haccp, staff, shifts, accounting));

        for handle in handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(LifecycleError::ActorTask(e.to_string()));
            }
        }
        info!("Back office shutdown complete");
        Ok(())
    }
}
