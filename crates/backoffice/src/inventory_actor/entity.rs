//! Entity trait implementation for stock items.
//!
//! Quantities, costs and thresholds are never negative and never above
//! [`MAX_AMOUNT`](crate::model::MAX_AMOUNT). The low-stock threshold falls back
//! to [`InventorySettings::default_low_stock_threshold`] when a product is created without
//! one.

use super::actions::{InventoryAction, InventoryActionResult, StockLevel};
use super::error::InventoryError;
use crate::config::InventorySettings;
use crate::model::{within_limit, Product, ProductCreate, ProductField, ProductId, ProductUpdate};
use actor_framework::{ActorEntity, FieldValue};
use async_trait::async_trait;
use rust_decimal::Decimal;

fn non_negative(value: Decimal) -> Result<Decimal, InventoryError> {
    if !within_limit(value) {
        return Err(InventoryError::InvalidQuantity(value));
    }
    Ok(value)
}

fn positive(value: Decimal) -> Result<Decimal, InventoryError> {
    if value <= Decimal::ZERO || !within_limit(value) {
        return Err(InventoryError::InvalidQuantity(value));
    }
    Ok(value)
}

#[async_trait]
impl ActorEntity for Product {
    type Id = ProductId;
    type Create = ProductCreate;
    type Update = ProductUpdate;
    type Action = InventoryAction;
    type ActionResult = InventoryActionResult;
    type Context = InventorySettings;
    type Field = ProductField;
    type Error = InventoryError;

    fn from_create_params(id: ProductId, params: ProductCreate) -> Result<Self, Self::Error> {
        if params.name.trim().is_empty() {
            return Err(InventoryError::Validation("name is required".into()));
        }
        let threshold = params.low_stock_threshold.map(non_negative).transpose()?;

        Ok(Self {
            id,
            name: params.name,
            category: params.category,
            unit: params.unit,
            quantity: non_negative(params.quantity)?,
            low_stock_threshold: threshold.unwrap_or(Decimal::ZERO),
            unit_cost: non_negative(params.unit_cost)?,
            supplier: params.supplier,
            threshold_from_settings: threshold.is_none(),
        })
    }

    fn field(&self, field: ProductField) -> FieldValue {
        match field {
            ProductField::Name => self.name.clone().into(),
            ProductField::Category => self.category.clone().into(),
            ProductField::Quantity => self.quantity.into(),
            ProductField::UnitCost => self.unit_cost.into(),
            ProductField::Supplier => self.supplier.clone().into(),
            ProductField::LowStock => self.is_low_stock().into(),
        }
    }

    async fn on_create(&mut self, settings: &InventorySettings) -> Result<(), Self::Error> {
        if self.threshold_from_settings {
            self.low_stock_threshold = settings.default_low_stock_threshold;
        }
        Ok(())
    }

    /// Handles updates to a stock item. All values are checked before any is applied.
    async fn on_update(
        &mut self,
        update: ProductUpdate,
        _settings: &InventorySettings,
    ) -> Result<(), Self::Error> {
        if let Some(name) = &update.name {
            if name.trim().is_empty() {
                return Err(InventoryError::Validation("name is required".into()));
            }
        }
        let unit_cost = update.unit_cost.map(non_negative).transpose()?;
        let threshold = update.low_stock_threshold.map(non_negative).transpose()?;
        let counted = update.counted_quantity.map(non_negative).transpose()?;

        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(category) = update.category {
            self.category = category;
        }
        if let Some(unit_cost) = unit_cost {
            self.unit_cost = unit_cost;
        }
        if let Some(threshold) = threshold {
            self.low_stock_threshold = threshold;
            self.threshold_from_settings = false;
        }
        if let Some(supplier) = update.supplier {
            self.supplier = Some(supplier);
        }
        if let Some(counted) = counted {
            self.quantity = counted;
        }
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: InventoryAction,
        _settings: &InventorySettings,
    ) -> Result<InventoryActionResult, Self::Error> {
        match action {
            InventoryAction::Restock(quantity) => {
                let restock = positive(quantity)?;
                let level = self
                    .quantity
                    .checked_add(restock)
                    .filter(|level| within_limit(*level))
                    .ok_or(InventoryError::StockLimitExceeded {
                        on_hand: self.quantity,
                        restock,
                    })?;
                self.quantity = level;
                Ok(InventoryActionResult::Restocked(self.quantity))
            }
            InventoryAction::Consume(quantity) => {
                let quantity = positive(quantity)?;
                if quantity > self.quantity {
                    return Err(InventoryError::InsufficientStock {
                        requested: quantity,
                        available: self.quantity,
                    });
                }
                self.quantity -= quantity;
                Ok(InventoryActionResult::Consumed(self.quantity))
            }
            InventoryAction::StockLevel => Ok(InventoryActionResult::StockLevel(StockLevel {
                quantity: self.quantity,
                low_stock_threshold: self.low_stock_threshold,
                low_stock: self.is_low_stock(),
            })),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Unit, MAX_AMOUNT};
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn flour(threshold: Option<&str>) -> ProductCreate {
        ProductCreate {
            name: "Tipo 00 flour".into(),
            category: "Dry goods".into(),
            unit: Unit::Kilogram,
            quantity: dec("12"),
            low_stock_threshold: threshold.map(dec),
            unit_cost: dec("1.20"),
            supplier: Some("Molino Rossi".into()),
        }
    }

    fn settings() -> InventorySettings {
        InventorySettings {
            default_low_stock_threshold: dec("5"),
        }
    }

    #[tokio::test]
    async fn missing_threshold_uses_configured_default() {
        let mut product = Product::from_create_params(ProductId(1), flour(None)).unwrap();
        product.on_create(&settings()).await.unwrap();
        assert_eq!(product.low_stock_threshold, dec("5"));

        let mut explicit = Product::from_create_params(ProductId(2), flour(Some("2"))).unwrap();
        explicit.on_create(&settings()).await.unwrap();
        assert_eq!(explicit.low_stock_threshold, dec("2"));
    }

    #[test]
    fn negative_values_are_rejected_on_create() {
        let mut params = flour(None);
        params.quantity = dec("-1");
        assert_eq!(
            Product::from_create_params(ProductId(1), params).unwrap_err(),
            InventoryError::InvalidQuantity(dec("-1"))
        );

        let mut params = flour(None);
        params.name = "  ".into();
        assert!(matches!(
            Product::from_create_params(ProductId(1), params),
            Err(InventoryError::Validation(_))
        ));
    }

    #[tokio::test]
    async fn low_stock_flag_flips_below_threshold() {
        let mut product = Product::from_create_params(ProductId(1), flour(Some("5"))).unwrap();
        assert!(!product.is_low_stock());

        product
            .handle_action(InventoryAction::Consume(dec("7")), &settings())
            .await
            .unwrap();
        // Exactly at the threshold is not low.
        assert_eq!(product.quantity, dec("5"));
        assert!(!product.is_low_stock());

        product
            .handle_action(InventoryAction::Consume(dec("0.5")), &settings())
            .await
            .unwrap();
        assert!(product.is_low_stock());
        assert_eq!(product.field(ProductField::LowStock), FieldValue::Bool(true));
    }

    #[tokio::test]
    async fn over_consumption_fails_without_mutation() {
        let mut product = Product::from_create_params(ProductId(1), flour(None)).unwrap();
        let err = product
            .handle_action(InventoryAction::Consume(dec("12.5")), &settings())
            .await
            .unwrap_err();
        assert_eq!(
            err,
            InventoryError::InsufficientStock {
                requested: dec("12.5"),
                available: dec("12"),
            }
        );
        assert_eq!(product.quantity, dec("12"));
    }

    #[tokio::test]
    async fn movements_must_be_positive() {
        let mut product = Product::from_create_params(ProductId(1), flour(None)).unwrap();
        for action in [
            InventoryAction::Restock(Decimal::ZERO),
            InventoryAction::Consume(dec("-2")),
        ] {
            assert!(matches!(
                product.handle_action(action, &settings()).await,
                Err(InventoryError::InvalidQuantity(_))
            ));
        }
        assert_eq!(
            product
                .handle_action(InventoryAction::Restock(dec("3")), &settings())
                .await
                .unwrap(),
            InventoryActionResult::Restocked(dec("15"))
        );
    }

    #[tokio::test]
    async fn restock_past_the_limit_is_refused() {
        let mut product = Product::from_create_params(ProductId(1), flour(None)).unwrap();
        assert_eq!(
            product
                .handle_action(InventoryAction::Restock(Decimal::MAX), &settings())
                .await,
            Err(InventoryError::InvalidQuantity(Decimal::MAX))
        );
        assert_eq!(
            product
                .handle_action(InventoryAction::Restock(MAX_AMOUNT), &settings())
                .await,
            Err(InventoryError::StockLimitExceeded {
                on_hand: dec("12"),
                restock: MAX_AMOUNT,
            })
        );
        assert_eq!(product.quantity, dec("12"));
        assert_eq!(product.stock_value(), dec("12") * product.unit_cost);
    }

    #[tokio::test]
    async fn invalid_update_leaves_product_unchanged() {
        let mut product = Product::from_create_params(ProductId(1), flour(Some("5"))).unwrap();
        let before = product.clone();
        let update = ProductUpdate {
            unit_cost: Some(dec("1.50")),
            counted_quantity: Some(dec("-3")),
            ..Default::default()
        };
        assert!(product.on_update(update, &settings()).await.is_err());
        assert_eq!(product, before);
    }

    #[tokio::test]
    async fn stock_take_replaces_quantity() {
        let mut product = Product::from_create_params(ProductId(1), flour(Some("5"))).unwrap();
        let update = ProductUpdate {
            counted_quantity: Some(dec("3.5")),
            ..Default::default()
        };
        product.on_update(update, &settings()).await.unwrap();
        assert_eq!(product.quantity, dec("3.5"));
        assert!(product.is_low_stock());
    }
}
