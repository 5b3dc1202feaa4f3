//! Entity trait implementation for the Order domain type.
//!
//! Placing an order prices every line against the live menu (`on_create`); after that the
//! prices are frozen. Status changes only happen through [`OrderAction`]s, which delegate
//! to [`super::transitions`].

use super::actions::{OrderAction, OrderActionResult};
use super::error::OrderError;
use super::transitions::{advance, cancel, next_status};
use crate::clients::MenuClient;
use crate::model::{
    within_limit, Order, OrderCreate, OrderField, OrderId, OrderItem, OrderStatus, OrderUpdate,
};
use actor_framework::{ActorClient, ActorEntity, FieldValue};
use async_trait::async_trait;
use rust_decimal::Decimal;
use tracing::debug;

/// Smallest orderable portion.
pub const MIN_QUANTITY: Decimal = Decimal::from_parts(25, 0, 0, false, 2);

#[async_trait]
impl ActorEntity for Order {
    type Id = OrderId;
    type Create = OrderCreate;
    type Update = OrderUpdate;
    type Action = OrderAction;
    type ActionResult = OrderActionResult;
    type Context = MenuClient;
    type Field = OrderField;
    type Error = OrderError;

    /// Validates the request and builds an unpriced order in status `New`.
    fn from_create_params(id: OrderId, params: OrderCreate) -> Result<Self, Self::Error> {
        if params.customer_name.trim().is_empty() {
            return Err(OrderError::Validation("customer name is required".into()));
        }
        if params.lines.is_empty() {
            return Err(OrderError::EmptyItems);
        }
        if params.requested_delivery_time < params.placed_at {
            return Err(OrderError::Validation(
                "requested delivery time is before the order was placed".into(),
            ));
        }

        let mut items = Vec::with_capacity(params.lines.len());
        for line in params.lines {
            if line.quantity < MIN_QUANTITY || !within_limit(line.quantity) {
                return Err(OrderError::InvalidQuantity {
                    menu_item_id: line.menu_item_id,
                    quantity: line.quantity,
                });
            }
            // Name and price are filled in from the menu by on_create.
            items.push(OrderItem {
                menu_item_id: line.menu_item_id,
                name: String::new(),
                quantity: line.quantity,
                price_at_order: Decimal::ZERO,
            });
        }

        Ok(Self {
            id,
            customer_name: params.customer_name,
            delivery_address: params.delivery_address,
            items,
            status: OrderStatus::New,
            requested_delivery_time: params.requested_delivery_time,
            estimated_delivery_time: None,
            placed_at: params.placed_at,
            notes: params.notes,
            cancellation_reason: None,
        })
    }

    fn field(&self, field: OrderField) -> FieldValue {
        match field {
            OrderField::CustomerName => self.customer_name.clone().into(),
            OrderField::Status => self.status.into(),
            OrderField::PlacedAt => self.placed_at.into(),
            OrderField::RequestedDeliveryTime => self.requested_delivery_time.into(),
            OrderField::EstimatedDeliveryTime => self.estimated_delivery_time.into(),
            OrderField::Total => self.total().into(),
        }
    }

    /// Captures each dish's name and current price from the menu.
    async fn on_create(&mut self, menu: &MenuClient) -> Result<(), Self::Error> {
        for item in &mut self.items {
            let dish = menu
                .get(item.menu_item_id)
                .await
                .map_err(|e| OrderError::MenuLookup(e.to_string()))?
                .ok_or(OrderError::UnknownMenuItem(item.menu_item_id))?;
            if !dish.available {
                return Err(OrderError::MenuItemUnavailable(item.menu_item_id));
            }
            item.name = dish.name;
            item.price_at_order = dish.price;
        }
        debug!(order_id = %self.id, total = %self.total(), "Order priced");
        Ok(())
    }

    async fn on_update(&mut self, update: OrderUpdate, _menu: &MenuClient) -> Result<(), Self::Error> {
        if self.status.is_terminal() {
            return Err(OrderError::OrderClosed {
                id: self.id,
                status: self.status,
            });
        }
        if let Some(requested) = update.requested_delivery_time {
            if requested < self.placed_at {
                return Err(OrderError::Validation(
                    "requested delivery time is before the order was placed".into(),
                ));
            }
        }

        if let Some(requested) = update.requested_delivery_time {
            self.requested_delivery_time = requested;
        }
        if let Some(estimated) = update.estimated_delivery_time {
            self.estimated_delivery_time = Some(estimated);
        }
        if let Some(address) = update.delivery_address {
            self.delivery_address = Some(address);
        }
        if let Some(notes) = update.notes {
            self.notes = Some(notes);
        }
        Ok(())
    }

    fn check_delete(&self) -> Result<(), Self::Error> {
        Err(OrderError::DeletionForbidden(self.id))
    }

    async fn handle_action(
        &mut self,
        action: OrderAction,
        _menu: &MenuClient,
    ) -> Result<OrderActionResult, Self::Error> {
        match action {
            OrderAction::Advance => {
                let status = advance(self)?;
                Ok(OrderActionResult::Advanced(status))
            }
            OrderAction::Cancel { reason } => {
                cancel(self)?;
                self.cancellation_reason = reason;
                Ok(OrderActionResult::Cancelled)
            }
            OrderAction::NextStatus => Ok(OrderActionResult::NextStatus(next_status(self.status))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::model::{MenuItemId, OrderLine, MAX_AMOUNT};
    use chrono::{TimeZone, Utc};

    fn one_line(quantity: Decimal) -> OrderCreate {
        let placed_at = Utc.with_ymd_and_hms(2024, 3, 4, 18, 0, 0).unwrap();
        OrderCreate {
            customer_name: "Anna Conti".into(),
            delivery_address: None,
            lines: vec![OrderLine {
                menu_item_id: MenuItemId(1),
                quantity,
            }],
            requested_delivery_time: placed_at,
            placed_at,
            notes: None,
        }
    }

    #[test]
    fn min_quantity_is_a_quarter() {
        assert_eq!(MIN_QUANTITY.to_string(), "0.25");
    }

    #[test]
    fn quantity_above_limit_is_rejected() {
        for quantity in [Decimal::MAX, MAX_AMOUNT + Decimal::ONE] {
            assert_eq!(
                Order::from_create_params(OrderId(1), one_line(quantity)).unwrap_err(),
                OrderError::InvalidQuantity {
                    menu_item_id: MenuItemId(1),
                    quantity,
                }
            );
        }
        assert!(Order::from_create_params(OrderId(1), one_line(MAX_AMOUNT)).is_ok());
    }

    #[test]
    fn total_saturates_instead_of_overflowing() {
        let mut order = Order::from_create_params(OrderId(1), one_line(MAX_AMOUNT)).unwrap();
        // Out-of-range values can only get here by building the record by hand.
        order.items[0].quantity = Decimal::MAX;
        order.items[0].price_at_order = Decimal::TWO;
        order.items.push(order.items[0].clone());
        assert_eq!(order.total(), Decimal::MAX);
        assert_eq!(order.field(OrderField::Total), FieldValue::from(Decimal::MAX));
    }
}
