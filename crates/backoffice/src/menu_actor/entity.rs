//! Entity trait implementation for menu items.
//!
//! Food cost is looked up from the inventory when a dish is created, when its price or
//! recipe changes, and on [`MenuAction::Recost`]. A lookup failure aborts the operation
//! and leaves the dish as it was.

use super::actions::{MenuAction, MenuActionResult};
use super::costing;
use super::error::MenuError;
use super::MenuContext;
use crate::clients::InventoryClient;
use crate::model::{
    within_limit, Ingredient, MenuField, MenuItem, MenuItemCreate, MenuItemId, MenuItemUpdate,
};
use actor_framework::{ActorClient, ActorEntity, FieldValue};
use async_trait::async_trait;
use rust_decimal::Decimal;
use tracing::debug;

fn check_price(price: Decimal) -> Result<(), MenuError> {
    if price <= Decimal::ZERO || !within_limit(price) {
        return Err(MenuError::InvalidPrice(price));
    }
    Ok(())
}

fn check_recipe(ingredients: &[Ingredient]) -> Result<(), MenuError> {
    for ingredient in ingredients {
        if ingredient.quantity <= Decimal::ZERO || !within_limit(ingredient.quantity) {
            return Err(MenuError::InvalidIngredientQuantity {
                product_id: ingredient.product_id,
                quantity: ingredient.quantity,
            });
        }
    }
    Ok(())
}

/// Current cost of one portion of `ingredients`.
async fn cost_of(
    ingredients: &[Ingredient],
    inventory: &InventoryClient,
) -> Result<Decimal, MenuError> {
    let mut portions = Vec::with_capacity(ingredients.len());
    for ingredient in ingredients {
        let product = inventory
            .get(ingredient.product_id)
            .await
            .map_err(|e| MenuError::InventoryLookup(e.to_string()))?
            .ok_or(MenuError::UnknownIngredient(ingredient.product_id))?;
        portions.push((ingredient.quantity, product.unit_cost));
    }
    Ok(costing::food_cost(portions))
}

#[async_trait]
impl ActorEntity for MenuItem {
    type Id = MenuItemId;
    type Create = MenuItemCreate;
    type Update = MenuItemUpdate;
    type Action = MenuAction;
    type ActionResult = MenuActionResult;
    type Context = MenuContext;
    type Field = MenuField;
    type Error = MenuError;

    fn from_create_params(id: MenuItemId, params: MenuItemCreate) -> Result<Self, Self::Error> {
        if params.name.trim().is_empty() {
            return Err(MenuError::Validation("name is required".into()));
        }
        check_price(params.price)?;
        check_recipe(&params.ingredients)?;

        Ok(Self {
            id,
            name: params.name,
            category: params.category,
            price: params.price,
            ingredients: params.ingredients,
            food_cost: Decimal::ZERO,
            available: params.available,
        })
    }

    fn field(&self, field: MenuField) -> FieldValue {
        match field {
            MenuField::Name => self.name.clone().into(),
            MenuField::Category => self.category.into(),
            MenuField::Price => self.price.into(),
            MenuField::FoodCost => self.food_cost.into(),
            MenuField::Available => self.available.into(),
        }
    }

    async fn on_create(&mut self, ctx: &MenuContext) -> Result<(), Self::Error> {
        self.food_cost = cost_of(&self.ingredients, &ctx.inventory).await?;
        debug!(menu_item_id = %self.id, food_cost = %self.food_cost, "Costed");
        Ok(())
    }

    async fn on_update(&mut self, update: MenuItemUpdate, ctx: &MenuContext) -> Result<(), Self::Error> {
        if let Some(name) = &update.name {
            if name.trim().is_empty() {
                return Err(MenuError::Validation("name is required".into()));
            }
        }
        if let Some(price) = update.price {
            check_price(price)?;
        }
        if let Some(ingredients) = &update.ingredients {
            check_recipe(ingredients)?;
        }

        let food_cost = if update.price.is_some() || update.ingredients.is_some() {
            let recipe = update.ingredients.as_deref().unwrap_or(&self.ingredients);
            Some(cost_of(recipe, &ctx.inventory).await?)
        } else {
            None
        };

        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(category) = update.category {
            self.category = category;
        }
        if let Some(price) = update.price {
            self.price = price;
        }
        if let Some(ingredients) = update.ingredients {
            self.ingredients = ingredients;
        }
        if let Some(available) = update.available {
            self.available = available;
        }
        if let Some(food_cost) = food_cost {
            self.food_cost = food_cost;
        }
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: MenuAction,
        ctx: &MenuContext,
    ) -> Result<MenuActionResult, Self::Error> {
        match action {
            MenuAction::Recost => {
                self.food_cost = cost_of(&self.ingredients, &ctx.inventory).await?;
                Ok(MenuActionResult::Recosted(self.food_cost))
            }
            MenuAction::Costing => Ok(MenuActionResult::Costing(costing::breakdown(
                self.price,
                self.food_cost,
                ctx.settings.target_food_cost_pct,
            ))),
        }
    }
}
