//! Order update builder.
//!
//! Status and total are absent: status moves only through the
//! transition check, and the total is derived from line items.

use cafe_core::enums::{OrderType, PaymentMethod};
use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Clone, Default, Serialize)]
pub struct OrderUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub employee_id: Option<i64>,
    /// `Some(None)` detaches the order from its customer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<Option<i64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_type: Option<OrderType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_method: Option<PaymentMethod>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_date: Option<DateTime<Utc>>,
}

#[derive(Default)]
pub struct OrderUpdateBuilder(OrderUpdate);

impl OrderUpdateBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn employee_id(mut self, val: i64) -> Self {
        self.0.employee_id = Some(val);
        self
    }

    #[must_use]
    pub fn customer_id(mut self, val: Option<i64>) -> Self {
        self.0.customer_id = Some(val);
        self
    }

    #[must_use]
    pub fn order_type(mut self, val: OrderType) -> Self {
        self.0.order_type = Some(val);
        self
    }

    #[must_use]
    pub fn payment_method(mut self, val: PaymentMethod) -> Self {
        self.0.payment_method = Some(val);
        self
    }

    #[must_use]
    pub fn order_date(mut self, val: DateTime<Utc>) -> Self {
        self.0.order_date = Some(val);
        self
    }

    #[must_use]
    pub fn build(self) -> OrderUpdate {
        self.0
    }
}
