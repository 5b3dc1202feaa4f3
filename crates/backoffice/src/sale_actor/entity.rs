use super::actions::{SaleAction, SaleActionResult};
use super::error::SaleError;
use crate::clients::MenuClient;
use crate::model::{Sale, SaleCreate, SaleField, SaleId, SaleLine, SaleUpdate};
use actor_framework::{ActorClient, ActorEntity, FieldValue};
use async_trait::async_trait;
use rust_decimal::Decimal;

#[async_trait]
impl ActorEntity for Sale {
    type Id = SaleId;
    type Create = SaleCreate;
    type Update = SaleUpdate;
    type Action = SaleAction;
    type ActionResult = SaleActionResult;
    type Context = MenuClient;
    type Field = SaleField;
    type Error = SaleError;

    fn from_create_params(id: SaleId, params: SaleCreate) -> Result<Self, Self::Error> {
        if params.lines.is_empty() {
            return Err(SaleError::EmptySale);
        }
        let mut lines = Vec::with_capacity(params.lines.len());
        for line in params.lines {
            if line.quantity == 0 {
                return Err(SaleError::InvalidQuantity(line.menu_item_id));
            }
            // Priced from the menu in on_create.
            lines.push(SaleLine {
                menu_item_id: line.menu_item_id,
                name: String::new(),
                quantity: line.quantity,
                unit_price: Decimal::ZERO,
                unit_cost: Decimal::ZERO,
            });
        }
        Ok(Self {
            id,
            lines,
            payment: params.payment,
            sold_at: params.sold_at,
            order_id: params.order_id,
            voided: None,
        })
    }

    fn field(&self, field: SaleField) -> FieldValue {
        match field {
            SaleField::SoldAt => self.sold_at.into(),
            SaleField::Payment => self.payment.into(),
            SaleField::Voided => self.is_voided().into(),
            SaleField::Total => self.total().into(),
            SaleField::OrderId => self.order_id.into(),
        }
    }

    /// Copies name, price and food cost of each dish as they are right now.
    async fn on_create(&mut self, menu: &MenuClient) -> Result<(), Self::Error> {
        for line in &mut self.lines {
            let dish = menu
                .get(line.menu_item_id)
                .await
                .map_err(|e| SaleError::MenuLookup(e.to_string()))?
                .ok_or(SaleError::UnknownMenuItem(line.menu_item_id))?;
            if !dish.available {
                return Err(SaleError::MenuItemUnavailable(line.menu_item_id));
            }
            line.name = dish.name;
            line.unit_price = dish.price;
            line.unit_cost = dish.food_cost;
        }
        Ok(())
    }

    async fn on_update(&mut self, update: SaleUpdate, _menu: &MenuClient) -> Result<(), Self::Error> {
        if self.is_voided() {
            return Err(SaleError::AlreadyVoided(self.id));
        }
        self.payment = update.payment;
        Ok(())
    }

    fn check_delete(&self) -> Result<(), Self::Error> {
        Err(SaleError::RecordRetained(self.id))
    }

    async fn handle_action(
        &mut self,
        action: SaleAction,
        _menu: &MenuClient,
    ) -> Result<SaleActionResult, Self::Error> {
        match action {
            SaleAction::Void { reason } => {
                if self.is_voided() {
                    return Err(SaleError::AlreadyVoided(self.id));
                }
                if reason.trim().is_empty() {
                    return Err(SaleError::Validation("void reason is required".into()));
                }
                self.voided = Some(reason);
                Ok(SaleActionResult::Voided)
            }
        }
    }
}
