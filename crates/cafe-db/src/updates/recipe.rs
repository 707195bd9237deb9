//! Recipe update builder.

use serde::Serialize;

#[derive(Debug, Clone, Default, Serialize)]
pub struct RecipeUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ingredient_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity_required: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
}

#[derive(Default)]
pub struct RecipeUpdateBuilder(RecipeUpdate);

impl RecipeUpdateBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn ingredient_id(mut self, val: i64) -> Self {
        self.0.ingredient_id = Some(val);
        self
    }

    #[must_use]
    pub fn quantity_required(mut self, val: f64) -> Self {
        self.0.quantity_required = Some(val);
        self
    }

    #[must_use]
    pub fn unit(mut self, val: impl Into<String>) -> Self {
        self.0.unit = Some(val.into());
        self
    }

    #[must_use]
    pub fn build(self) -> RecipeUpdate {
        self.0
    }
}
