use rust_decimal::Decimal;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::audit_rules::Auditable;
use crate::enums::EntityKind;

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct MenuItem {
    pub id: i64,
    pub name: String,
    /// Free text: food, drink, alcohol, ...
    pub kind: String,
    #[schemars(with = "String")]
    pub selling_price: Decimal,
    pub volume_or_weight: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewMenuItem {
    pub name: String,
    pub kind: String,
    pub selling_price: Decimal,
    pub volume_or_weight: String,
}

impl Auditable for MenuItem {
    const KIND: EntityKind = EntityKind::MenuItems;

    fn audit_id(&self) -> i64 {
        self.id
    }

    fn audit_name(&self) -> String {
        self.name.clone()
    }
}
