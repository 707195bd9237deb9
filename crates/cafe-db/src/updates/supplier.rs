//! Supplier update builder.

use serde::Serialize;

#[derive(Debug, Clone, Default, Serialize)]
pub struct SupplierUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

#[derive(Default)]
pub struct SupplierUpdateBuilder(SupplierUpdate);

impl SupplierUpdateBuilder {
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
    pub fn address(mut self, val: impl Into<String>) -> Self {
        self.0.address = Some(val.into());
        self
    }

    #[must_use]
    pub fn build(self) -> SupplierUpdate {
        self.0
    }
}
