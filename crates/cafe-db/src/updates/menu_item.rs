//! Menu item update builder.

use rust_decimal::Decimal;
use serde::Serialize;

#[derive(Debug, Clone, Default, Serialize)]
pub struct MenuItemUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    /// New price for future sales; existing line items keep their snapshot.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selling_price: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volume_or_weight: Option<String>,
}

#[derive(Default)]
pub struct MenuItemUpdateBuilder(MenuItemUpdate);

impl MenuItemUpdateBuilder {
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
    pub fn kind(mut self, val: impl Into<String>) -> Self {
        self.0.kind = Some(val.into());
        self
    }

    #[must_use]
    pub fn selling_price(mut self, val: Decimal) -> Self {
        self.0.selling_price = Some(val);
        self
    }

    #[must_use]
    pub fn volume_or_weight(mut self, val: impl Into<String>) -> Self {
        self.0.volume_or_weight = Some(val.into());
        self
    }

    #[must_use]
    pub fn build(self) -> MenuItemUpdate {
        self.0
    }
}
