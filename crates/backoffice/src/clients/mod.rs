//! # Domain Clients
//!
//! One client per actor. Each wraps a `ResourceClient<T>`, implements
//! [`ActorClient`](actor_framework::ActorClient) for `get`, `list` and the delete gate, and
//! adds the record's own operations. Framework errors are mapped back to the record's
//! error enum, so a failed `consume` comes back as `InventoryError::InsufficientStock`
//! rather than a boxed error.

pub mod expense_client;
pub mod haccp_client;
pub mod inventory_client;
pub mod menu_client;
pub mod order_client;
pub mod sale_client;
pub mod shift_client;
pub mod staff_client;

pub use expense_client::ExpenseClient;
pub use haccp_client::HaccpClient;
pub use inventory_client::InventoryClient;
pub use menu_client::MenuClient;
pub use order_client::OrderClient;
pub use sale_client::SaleClient;
pub use shift_client::{LabourCost, ShiftClient};
pub use staff_client::StaffClient;

/// Text for an action reply of the wrong variant.
pub(crate) fn unexpected_reply(action: &str, reply: impl std::fmt::Debug) -> String {
    format!("unexpected reply to {}: {:?}", action, reply)
}
