//! Ingredient update builder.

use rust_decimal::Decimal;
use serde::Serialize;

#[derive(Debug, Clone, Default, Serialize)]
pub struct IngredientUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stock_quantity: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_stock_level: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub purchase_price: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supplier_id: Option<i64>,
}

#[derive(Default)]
pub struct IngredientUpdateBuilder(IngredientUpdate);

impl IngredientUpdateBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn name(mut self, val: impl Into<String>) -> Self {
        self.0.name = Some(val.into());
        self
    }

    #[must_use]
    pub fn unit(mut self, val: impl Into<String>) -> Self {
        self.0.unit = Some(val.into());
        self
    }

    #[must_use]
    pub fn stock_quantity(mut self, val: f64) -> Self {
        self.0.stock_quantity = Some(val);
        self
    }

    #[must_use]
    pub fn min_stock_level(mut self, val: f64) -> Self {
        self.0.min_stock_level = Some(val);
        self
    }

    #[must_use]
    pub fn purchase_price(mut self, val: Decimal) -> Self {
        self.0.purchase_price = Some(val);
        self
    }

    #[must_use]
    pub fn supplier_id(mut self, val: i64) -> Self {
        self.0.supplier_id = Some(val);
        self
    }

    #[must_use]
    pub fn build(self) -> IngredientUpdate {
        self.0
    }
}
