use rust_decimal::Decimal;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::audit_rules::Auditable;
use crate::enums::EntityKind;

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct Ingredient {
    pub id: i64,
    pub name: String,
    /// l, kg, pcs, ...
    pub unit: String,
    pub stock_quantity: f64,
    pub min_stock_level: f64,
    #[schemars(with = "String")]
    pub purchase_price: Decimal,
    pub supplier_id: i64,
}

impl Ingredient {
    /// Whether stock has dropped below the reorder threshold.
    #[must_use]
    pub fn needs_restock(&self) -> bool {
        self.stock_quantity < self.min_stock_level
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewIngredient {
    pub name: String,
    pub unit: String,
    pub stock_quantity: f64,
    pub min_stock_level: f64,
    pub purchase_price: Decimal,
    pub supplier_id: i64,
}

impl Auditable for Ingredient {
    const KIND: EntityKind = EntityKind::Ingredients;

    fn audit_id(&self) -> i64 {
        self.id
    }

    fn audit_name(&self) -> String {
        self.name.clone()
    }
}
