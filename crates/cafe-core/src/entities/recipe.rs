use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::audit_rules::Auditable;
use crate::enums::EntityKind;

/// How much of one ingredient goes into one unit of a menu item.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct Recipe {
    pub id: i64,
    pub menu_item_id: i64,
    pub ingredient_id: i64,
    pub quantity_required: f64,
    pub unit: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewRecipe {
    pub menu_item_id: i64,
    pub ingredient_id: i64,
    pub quantity_required: f64,
    pub unit: String,
}

impl Auditable for Recipe {
    const KIND: EntityKind = EntityKind::Recipes;

    fn audit_id(&self) -> i64 {
        self.id
    }

    fn audit_name(&self) -> String {
        format!("recipe #{} (menu item #{})", self.id, self.menu_item_id)
    }
}
