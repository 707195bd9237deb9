//! Customer update builder.

use serde::Serialize;

#[derive(Debug, Clone, Default, Serialize)]
pub struct CustomerUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loyalty_level: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount_percent: Option<f64>,
}

#[derive(Default)]
pub struct CustomerUpdateBuilder(CustomerUpdate);

impl CustomerUpdateBuilder {
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
    pub fn phone(mut self, val: impl Into<String>) -> Self {
        self.0.phone = Some(val.into());
        self
    }

    #[must_use]
    pub fn email(mut self, val: impl Into<String>) -> Self {
        self.0.email = Some(val.into());
        self
    }

    #[must_use]
    pub fn loyalty_level(mut self, val: impl Into<String>) -> Self {
        self.0.loyalty_level = Some(val.into());
        self
    }

    #[must_use]
    pub fn discount_percent(mut self, val: f64) -> Self {
        self.0.discount_percent = Some(val);
        self
    }

    #[must_use]
    pub fn build(self) -> CustomerUpdate {
        self.0
    }
}
