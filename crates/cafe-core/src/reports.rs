//! Report row types.
//!
//! Read-only aggregates over orders, line items, recipes, and payroll.

use rust_decimal::Decimal;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct DailySales {
    /// `YYYY-MM-DD` in UTC.
    pub day: String,
    pub orders: i64,
    pub items: i64,
    #[schemars(with = "String")]
    pub revenue: Decimal,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct TopMenuItem {
    pub name: String,
    pub kind: String,
    pub quantity_sold: i64,
    #[schemars(with = "String")]
    pub revenue: Decimal,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct CustomerValue {
    pub name: String,
    pub email: String,
    pub orders: i64,
    #[schemars(with = "String")]
    pub total_spent: Decimal,
    #[schemars(with = "String")]
    pub average_check: Decimal,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct EmployeePerformance {
    pub full_name: String,
    pub orders: i64,
    #[schemars(with = "String")]
    pub orders_total: Decimal,
}

/// Revenue minus ingredient cost minus payroll.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ProfitAndLoss {
    #[schemars(with = "String")]
    pub revenue: Decimal,
    #[schemars(with = "String")]
    pub cost_of_goods: Decimal,
    #[schemars(with = "String")]
    pub payroll: Decimal,
    #[schemars(with = "String")]
    pub net_profit: Decimal,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct HourlyLoad {
    /// Hour of day, 0–23, UTC.
    pub hour: u32,
    pub orders: i64,
    #[schemars(with = "String")]
    pub revenue: Decimal,
}
