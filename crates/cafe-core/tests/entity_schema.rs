//! Serde roundtrip and JsonSchema validation for the persisted and reported types.

use chrono::Utc;
use pretty_assertions::assert_eq;
use rust_decimal::Decimal;
use schemars::schema_for;
use cafe_core::entities::*;
use cafe_core::enums::*;
use cafe_core::reports::ProfitAndLoss;

/// Validate a JSON value against a schemars-generated schema.
fn validate_against_schema(
    schema: &serde_json::Value,
    instance: &serde_json::Value,
) -> Vec<String> {
    let validator = jsonschema::validator_for(schema).expect("schema should be valid");
    validator
        .iter_errors(instance)
        .map(|e| format!("{e}"))
        .collect()
}

macro_rules! roundtrip_and_validate {
    ($name:ident, $ty:ty, $instance:expr) => {
        #[test]
        fn $name() {
            let val: $ty = $instance;

            let json_str = serde_json::to_string_pretty(&val).unwrap();
            let recovered: $ty = serde_json::from_str(&json_str).unwrap();
            assert_eq!(recovered, val, "serde roundtrip failed for {}", stringify!($ty));

            let schema = serde_json::to_value(schema_for!($ty)).unwrap();
            let instance = serde_json::to_value(&val).unwrap();
            let errors = validate_against_schema(&schema, &instance);
            assert!(
                errors.is_empty(),
                "Schema validation failed for {}: {:?}",
                stringify!($ty),
                errors
            );
        }
    };
}

roundtrip_and_validate!(
    order_roundtrip,
    Order,
    Order {
        id: 12,
        order_date: Utc::now(),
        order_type: OrderType::Takeaway,
        payment_method: PaymentMethod::Cash,
        status: OrderStatus::Ready,
        total_amount: Decimal::new(25_000, 2),
        customer_id: None,
        employee_id: 3,
    }
);

roundtrip_and_validate!(
    line_item_roundtrip,
    LineItem,
    LineItem {
        id: 1,
        order_id: 12,
        menu_item_id: 4,
        quantity: 2,
        price_at_sale: Decimal::new(10_000, 2),
    }
);

roundtrip_and_validate!(
    audit_entry_roundtrip,
    AuditEntry,
    AuditEntry {
        id: 99,
        trigger_name: "customer_updated".into(),
        action: AuditAction::Update,
        entity: EntityKind::Customers,
        entity_id: 5,
        message: "Customer updated: B".into(),
        created_at: Utc::now(),
    }
);

roundtrip_and_validate!(
    profit_and_loss_roundtrip,
    ProfitAndLoss,
    ProfitAndLoss {
        revenue: Decimal::new(100_000, 2),
        cost_of_goods: Decimal::new(23_450, 2),
        payroll: Decimal::new(90_000, 2),
        net_profit: Decimal::new(-13_450, 2),
    }
);

#[test]
fn money_serializes_as_string() {
    let item = LineItem {
        id: 1,
        order_id: 1,
        menu_item_id: 1,
        quantity: 1,
        price_at_sale: Decimal::new(5_000, 2),
    };
    let value = serde_json::to_value(&item).unwrap();
    assert_eq!(value["price_at_sale"], serde_json::json!("50.00"));
}

#[test]
fn audit_entry_uses_table_name_and_upper_case_action() {
    let entry = AuditEntry {
        id: 1,
        trigger_name: "menu_item_deleted".into(),
        action: AuditAction::Delete,
        entity: EntityKind::MenuItems,
        entity_id: 8,
        message: "Menu item deleted: Latte".into(),
        created_at: Utc::now(),
    };
    let value = serde_json::to_value(&entry).unwrap();
    assert_eq!(value["action"], "DELETE");
    assert_eq!(value["entity"], "menu_items");
}
