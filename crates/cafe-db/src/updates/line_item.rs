//! Line item update builder.
//!
//! Only quantity and the sale price snapshot are mutable on a line item.

use rust_decimal::Decimal;
use serde::Serialize;

#[derive(Debug, Clone, Default, Serialize)]
pub struct LineItemUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_at_sale: Option<Decimal>,
}

#[derive(Default)]
pub struct LineItemUpdateBuilder(LineItemUpdate);

impl LineItemUpdateBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn quantity(mut self, val: i64) -> Self {
        self.0.quantity = Some(val);
        self
    }

    #[must_use]
    pub fn price_at_sale(mut self, val: Decimal) -> Self {
        self.0.price_at_sale = Some(val);
        self
    }

    #[must_use]
    pub fn build(self) -> LineItemUpdate {
        self.0
    }
}
