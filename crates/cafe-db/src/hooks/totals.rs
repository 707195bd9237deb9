//! Derived total maintainer.
//!
//! `orders.total_amount_cents` always equals the rounded sum of
//! `quantity × price_at_sale` over the order's remaining line items.

use cafe_core::money::{self, RoundingPolicy};
use rust_decimal::Decimal;
use tracing::debug;

use crate::error::DatabaseError;
use crate::helpers::{get_money, to_cents};

/// Fold the order's line items and write the total to the order row.
///
/// Exactly one `UPDATE orders` is issued per call.
///
/// # Errors
///
/// Returns `DatabaseError::Integrity` if the order row does not exist, or
/// `DatabaseError` if a query fails.
pub async fn recompute_order_total(
    conn: &libsql::Connection,
    order_id: i64,
    policy: RoundingPolicy,
) -> Result<Decimal, DatabaseError> {
    let mut rows = conn
        .query(
            "SELECT quantity, price_at_sale_cents FROM order_line_items WHERE order_id = ?1",
            [order_id],
        )
        .await?;

    let mut lines = Vec::new();
    while let Some(row) = rows.next().await? {
        lines.push((row.get::<i64>(0)?, get_money(&row, 1)?));
    }
    let count = lines.len();
    let total = money::order_total(lines, policy);

    let affected = conn
        .execute(
            "UPDATE orders SET total_amount_cents = ?1 WHERE id = ?2",
            libsql::params![to_cents(total, policy)?, order_id],
        )
        .await?;
    if affected == 0 {
        return Err(DatabaseError::Integrity(format!(
            "cannot recompute total: order {order_id} does not exist"
        )));
    }

    debug!(order_id, lines = count, %total, "recomputed order total");
    Ok(total)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CafeDb;
    use pretty_assertions::assert_eq;
    use std::str::FromStr;

    async fn seeded() -> CafeDb {
        let db = CafeDb::open_local(":memory:").await.unwrap();
        db.conn()
            .execute_batch(
                "INSERT INTO employees (full_name, role, hire_date) VALUES ('E', 'barista', '2026-01-01T00:00:00Z');
                 INSERT INTO menu_items (name, kind, selling_price_cents) VALUES ('Latte', 'drink', 250);
                 INSERT INTO orders (order_date, order_type, payment_method, employee_id, total_amount_cents)
                     VALUES ('2026-01-01T00:00:00Z', 'dine_in', 'card', 1, 777);",
            )
            .await
            .unwrap();
        db
    }

    async fn stored_total(db: &CafeDb, order_id: i64) -> i64 {
        let mut rows = db
            .conn()
            .query("SELECT total_amount_cents FROM orders WHERE id = ?1", [order_id])
            .await
            .unwrap();
        rows.next().await.unwrap().unwrap().get::<i64>(0).unwrap()
    }

    #[tokio::test]
    async fn empty_order_totals_zero() {
        let db = seeded().await;
        let total = recompute_order_total(db.conn(), 1, RoundingPolicy::HalfUp)
            .await
            .unwrap();
        assert_eq!(total, Decimal::ZERO);
        assert_eq!(stored_total(&db, 1).await, 0);
    }

    #[tokio::test]
    async fn sums_quantity_times_price() {
        let db = seeded().await;
        db.conn()
            .execute_batch(
                "INSERT INTO order_line_items (order_id, menu_item_id, quantity, price_at_sale_cents) VALUES (1, 1, 2, 10000);
                 INSERT INTO order_line_items (order_id, menu_item_id, quantity, price_at_sale_cents) VALUES (1, 1, 3, 333);",
            )
            .await
            .unwrap();
        let total = recompute_order_total(db.conn(), 1, RoundingPolicy::HalfUp)
            .await
            .unwrap();
        assert_eq!(total, Decimal::from_str("209.99").unwrap());
        assert_eq!(stored_total(&db, 1).await, 20_999);
    }

    #[tokio::test]
    async fn missing_order_is_an_integrity_violation() {
        let db = seeded().await;
        let err = recompute_order_total(db.conn(), 404, RoundingPolicy::HalfUp)
            .await
            .unwrap_err();
        assert!(err.is_integrity(), "got {err:?}");
    }
}
