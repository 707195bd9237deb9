use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::audit_rules::Auditable;
use crate::enums::{EntityKind, OrderStatus, OrderType, PaymentMethod};
use crate::money;

/// A customer order.
///
/// `total_amount` is derived: it always equals the rounded sum of
/// `quantity × price_at_sale` over the order's line items. Only the store's
/// total maintainer writes it.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Order {
    pub id: i64,
    pub order_date: DateTime<Utc>,
    pub order_type: OrderType,
    pub payment_method: PaymentMethod,
    pub status: OrderStatus,
    #[schemars(with = "String")]
    pub total_amount: Decimal,
    /// `None` for walk-in guests.
    pub customer_id: Option<i64>,
    pub employee_id: i64,
}

/// One menu item sold at a snapshot price within an order.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct LineItem {
    pub id: i64,
    pub order_id: i64,
    pub menu_item_id: i64,
    pub quantity: i64,
    /// Price captured when the line was added; independent of later menu edits.
    #[schemars(with = "String")]
    pub price_at_sale: Decimal,
}

impl LineItem {
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        money::line_total(self.quantity, self.price_at_sale)
    }
}

/// A cart entry used when creating an order or replacing its lines.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CartLine {
    pub menu_item_id: i64,
    pub quantity: i64,
    /// Overrides the menu item's current selling price when set.
    pub price: Option<Decimal>,
}

impl CartLine {
    #[must_use]
    pub const fn new(menu_item_id: i64, quantity: i64) -> Self {
        Self {
            menu_item_id,
            quantity,
            price: None,
        }
    }

    #[must_use]
    pub fn with_price(mut self, price: Decimal) -> Self {
        self.price = Some(price);
        self
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewOrder {
    pub customer_id: Option<i64>,
    pub employee_id: i64,
    pub order_type: OrderType,
    pub payment_method: PaymentMethod,
    /// Defaults to now.
    pub order_date: Option<DateTime<Utc>>,
    pub lines: Vec<CartLine>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewLineItem {
    pub order_id: i64,
    pub menu_item_id: i64,
    pub quantity: i64,
    /// Snapshot of the menu item's selling price when `None`.
    pub price_at_sale: Option<Decimal>,
}

impl Auditable for Order {
    const KIND: EntityKind = EntityKind::Orders;

    fn audit_id(&self) -> i64 {
        self.id
    }

    fn audit_name(&self) -> String {
        format!("order #{}", self.id)
    }
}

impl Auditable for LineItem {
    const KIND: EntityKind = EntityKind::OrderLineItems;

    fn audit_id(&self) -> i64 {
        self.id
    }

    fn audit_name(&self) -> String {
        format!("order #{} line #{}", self.order_id, self.id)
    }
}
