use std::str::FromStr;

use cafe_core::entities::CartLine;
use cafe_core::enums::AuditAction;
use rust_decimal::Decimal;
use serde::de::DeserializeOwned;

/// Parse a snake_case enum value using serde-deserialization.
pub fn parse_enum<T>(raw: &str, field: &str) -> anyhow::Result<T>
where
    T: DeserializeOwned,
{
    let normalized = raw.replace('-', "_");
    let json = format!("\"{normalized}\"");
    serde_json::from_str(&json).map_err(|error| anyhow::anyhow!("invalid {field} '{raw}': {error}"))
}

/// Audit actions are stored upper case; accept any case on the command line.
pub fn parse_action(raw: &str) -> anyhow::Result<AuditAction> {
    parse_enum(&raw.to_ascii_uppercase(), "action")
}

/// Parse one cart entry: `MENU_ITEM:QTY` or `MENU_ITEM:QTY@PRICE`.
pub fn parse_cart_line(raw: &str) -> anyhow::Result<CartLine> {
    let (item, rest) = raw
        .split_once(':')
        .ok_or_else(|| anyhow::anyhow!("invalid item '{raw}': expected MENU_ITEM:QTY[@PRICE]"))?;
    let (quantity, price) = match rest.split_once('@') {
        Some((quantity, price)) => (quantity, Some(price)),
        None => (rest, None),
    };

    let menu_item_id = item
        .trim()
        .parse::<i64>()
        .map_err(|error| anyhow::anyhow!("invalid menu item id in '{raw}': {error}"))?;
    let quantity = quantity
        .trim()
        .parse::<i64>()
        .map_err(|error| anyhow::anyhow!("invalid quantity in '{raw}': {error}"))?;

    let line = CartLine::new(menu_item_id, quantity);
    match price {
        Some(price) => {
            let price = Decimal::from_str(price.trim())
                .map_err(|error| anyhow::anyhow!("invalid price in '{raw}': {error}"))?;
            Ok(line.with_price(price))
        }
        None => Ok(line),
    }
}

pub fn parse_cart(raw: &[String]) -> anyhow::Result<Vec<CartLine>> {
    raw.iter().map(|item| parse_cart_line(item)).collect()
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use cafe_core::entities::CartLine;
    use cafe_core::enums::{AuditAction, EntityKind, OrderStatus, OrderType};
    use pretty_assertions::assert_eq;
    use rust_decimal::Decimal;

    use super::{parse_action, parse_cart, parse_cart_line, parse_enum};

    #[test]
    fn parses_snake_case_enum() {
        let status: OrderStatus = parse_enum("cancelled", "status").expect("status should parse");
        assert_eq!(status, OrderStatus::Cancelled);
    }

    #[test]
    fn parses_hyphenated_alias() {
        let order_type: OrderType = parse_enum("dine-in", "type").expect("type should parse");
        assert_eq!(order_type, OrderType::DineIn);
        let entity: EntityKind = parse_enum("menu-items", "entity").expect("entity should parse");
        assert_eq!(entity, EntityKind::MenuItems);
    }

    #[test]
    fn errors_on_invalid_enum() {
        let err = parse_enum::<OrderStatus>("done", "status").expect_err("should fail");
        assert!(err.to_string().contains("invalid status 'done'"));
    }

    #[test]
    fn action_is_case_insensitive() {
        assert_eq!(parse_action("delete").expect("parse"), AuditAction::Delete);
        assert_eq!(parse_action("UPDATE").expect("parse"), AuditAction::Update);
        assert!(parse_action("upsert").is_err());
    }

    #[test]
    fn cart_line_without_price() {
        assert_eq!(parse_cart_line("3:2").expect("parse"), CartLine::new(3, 2));
    }

    #[test]
    fn cart_line_with_price_override() {
        let line = parse_cart_line("4:1@2.50").expect("parse");
        assert_eq!(
            line,
            CartLine::new(4, 1).with_price(Decimal::from_str("2.50").expect("decimal"))
        );
    }

    #[test]
    fn cart_line_errors_name_the_input() {
        for raw in ["3", "x:2", "3:y", "3:2@free"] {
            let err = parse_cart_line(raw).expect_err("should fail");
            assert!(err.to_string().contains(raw), "{err} should mention {raw}");
        }
    }

    #[test]
    fn cart_stops_at_first_bad_entry() {
        let raw = vec!["1:1".to_string(), "oops".to_string()];
        assert!(parse_cart(&raw).is_err());
    }
}
