//! Menu items and their recipes.
//!
//! A dish's `food_cost` is derived from its ingredients' current unit costs in the inventory.
//! It is refreshed when the dish is created, when its price or recipe changes, and on demand
//! through [`MenuAction::Recost`](crate::menu_actor::MenuAction::Recost).

use super::ProductId;
use actor_framework::FieldValue;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

entity_id!(
    /// Type-safe identifier for menu items.
    MenuItemId,
    "menu_item"
);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum MenuCategory {
    Starter,
    Main,
    Side,
    Dessert,
    Drink,
}

impl MenuCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            MenuCategory::Starter => "starter",
            MenuCategory::Main => "main",
            MenuCategory::Side => "side",
            MenuCategory::Dessert => "dessert",
            MenuCategory::Drink => "drink",
        }
    }
}

impl From<MenuCategory> for FieldValue {
    fn from(category: MenuCategory) -> Self {
        category.as_str().into()
    }
}

/// How much of one stock item goes into a single portion, in the stock item's unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    pub product_id: ProductId,
    pub quantity: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: MenuItemId,
    pub name: String,
    pub category: MenuCategory,
    pub price: Decimal,
    pub ingredients: Vec<Ingredient>,
    /// Cost of one portion at the last recost.
    pub food_cost: Decimal,
    pub available: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuItemCreate {
    pub name: String,
    pub category: MenuCategory,
    pub price: Decimal,
    pub ingredients: Vec<Ingredient>,
    pub available: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MenuItemUpdate {
    pub name: Option<String>,
    pub category: Option<MenuCategory>,
    pub price: Option<Decimal>,
    pub ingredients: Option<Vec<Ingredient>>,
    pub available: Option<bool>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuField {
    Name,
    Category,
    Price,
    FoodCost,
    Available,
}
