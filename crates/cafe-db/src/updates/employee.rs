//! Employee update builder.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;

#[derive(Debug, Clone, Default, Serialize)]
pub struct EmployeeUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hire_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub salary: Option<Decimal>,
}

#[derive(Default)]
pub struct EmployeeUpdateBuilder(EmployeeUpdate);

impl EmployeeUpdateBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn full_name(mut self, val: impl Into<String>) -> Self {
        self.0.full_name = Some(val.into());
        self
    }

    #[must_use]
    pub fn role(mut self, val: impl Into<String>) -> Self {
        self.0.role = Some(val.into());
        self
    }

    #[must_use]
    pub fn phone(mut self, val: impl Into<String>) -> Self {
        self.0.phone = Some(val.into());
        self
    }

    #[must_use]
    pub fn hire_date(mut self, val: DateTime<Utc>) -> Self {
        self.0.hire_date = Some(val);
        self
    }

    #[must_use]
    pub fn salary(mut self, val: Decimal) -> Self {
        self.0.salary = Some(val);
        self
    }

    #[must_use]
    pub fn build(self) -> EmployeeUpdate {
        self.0
    }
}
