use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::audit_rules::Auditable;
use crate::enums::EntityKind;

/// Loyalty level assigned to new customers.
pub const DEFAULT_LOYALTY_LEVEL: &str = "Bronze";

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct Customer {
    pub id: i64,
    pub name: String,
    pub phone: String,
    pub email: String,
    pub loyalty_level: String,
    pub discount_percent: f64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct NewCustomer {
    pub name: String,
    pub phone: String,
    pub email: String,
}

impl Auditable for Customer {
    const KIND: EntityKind = EntityKind::Customers;

    fn audit_id(&self) -> i64 {
        self.id
    }

    fn audit_name(&self) -> String {
        self.name.clone()
    }
}
