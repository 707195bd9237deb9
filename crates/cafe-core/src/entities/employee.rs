use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::audit_rules::Auditable;
use crate::enums::EntityKind;

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Employee {
    pub id: i64,
    pub full_name: String,
    /// Free text: barista, waiter, administrator, ...
    pub role: String,
    pub phone: String,
    pub hire_date: DateTime<Utc>,
    #[schemars(with = "String")]
    pub salary: Decimal,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewEmployee {
    pub full_name: String,
    pub role: String,
    pub phone: String,
    pub salary: Decimal,
    /// Defaults to now.
    pub hire_date: Option<DateTime<Utc>>,
}

impl Auditable for Employee {
    const KIND: EntityKind = EntityKind::Employees;

    fn audit_id(&self) -> i64 {
        self.id
    }

    fn audit_name(&self) -> String {
        self.full_name.clone()
    }
}
