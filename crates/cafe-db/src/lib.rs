//! # cafe-db
//!
//! libSQL store for the cafe back office.
//!
//! Holds every relational table (customers, staff, suppliers, stock, menu,
//! recipes, orders, line items) plus the append-only audit log. All writes go
//! through a [`UnitOfWork`](unit_of_work::UnitOfWork), which runs the derived
//! total maintainer and the audit recorder inside the same transaction as the
//! mutation that triggered them.

pub mod error;
pub mod helpers;
mod hooks;
mod migrations;
pub mod repos;
pub mod service;
mod test_support;
pub mod unit_of_work;
pub mod updates;

use error::DatabaseError;
use libsql::Builder;
use tracing::info;

/// Raw database handle: a libSQL database and its single connection.
///
/// The connection is not exposed outside the crate; writes go through
/// [`CafeService`](service::CafeService).
///
/// ```compile_fail
/// # async fn raw(db: &cafe_db::CafeDb) {
/// let _ = db.conn().execute("DELETE FROM audit_log", ()).await;
/// # }
/// ```
pub struct CafeDb {
    #[allow(dead_code)]
    db: libsql::Database,
    conn: libsql::Connection,
}

impl CafeDb {
    /// Open a local database at the given path, or `":memory:"`.
    ///
    /// Runs migrations automatically on every open.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened or
    /// migrations fail.
    pub async fn open_local(path: &str) -> Result<Self, DatabaseError> {
        let db = Builder::new_local(path).build().await?;
        let conn = db.connect()?;

        // Enforced per connection in SQLite.
        conn.execute("PRAGMA foreign_keys = ON", ())
            .await
            .map_err(|e| DatabaseError::Migration(format!("PRAGMA foreign_keys: {e}")))?;

        let cafe_db = Self { db, conn };
        cafe_db.run_migrations().await?;
        info!(path, "opened cafe store");
        Ok(cafe_db)
    }

    /// Connection for store internals; callers write through a unit of work.
    #[must_use]
    pub(crate) const fn conn(&self) -> &libsql::Connection {
        &self.conn
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn test_db() -> CafeDb {
        CafeDb::open_local(":memory:").await.unwrap()
    }

    #[tokio::test]
    async fn open_local_creates_schema() {
        let db = test_db().await;

        let tables = [
            "customers",
            "employees",
            "suppliers",
            "ingredients",
            "menu_items",
            "recipes",
            "orders",
            "order_line_items",
            "audit_log",
        ];
        for table in &tables {
            let mut rows = db
                .conn()
                .query(
                    "SELECT name FROM sqlite_master WHERE type='table' AND name=?1",
                    [*table],
                )
                .await
                .unwrap();
            let row = rows.next().await.unwrap();
            assert!(row.is_some(), "table '{table}' should exist");
        }
    }

    #[tokio::test]
    async fn idempotent_migrations() {
        let db = test_db().await;
        db.run_migrations().await.unwrap();
        db.run_migrations().await.unwrap();
    }

    #[tokio::test]
    async fn foreign_keys_are_enforced() {
        let db = test_db().await;
        let result = db
            .conn()
            .execute(
                "INSERT INTO order_line_items (order_id, menu_item_id, quantity, price_at_sale_cents)
                 VALUES (999, 999, 1, 100)",
                (),
            )
            .await;
        assert!(result.is_err(), "dangling line item should be rejected");
    }

    #[tokio::test]
    async fn quantity_check_constraint() {
        let db = test_db().await;
        db.conn()
            .execute_batch(
                "INSERT INTO employees (full_name, role, hire_date) VALUES ('E', 'barista', '2026-01-01T00:00:00Z');
                 INSERT INTO menu_items (name, kind, selling_price_cents) VALUES ('Latte', 'drink', 250);
                 INSERT INTO orders (order_date, order_type, payment_method, employee_id)
                     VALUES ('2026-01-01T00:00:00Z', 'dine_in', 'card', 1);",
            )
            .await
            .unwrap();
        let result = db
            .conn()
            .execute(
                "INSERT INTO order_line_items (order_id, menu_item_id, quantity, price_at_sale_cents)
                 VALUES (1, 1, 0, 250)",
                (),
            )
            .await;
        assert!(result.is_err(), "zero quantity should be rejected");
    }

    #[tokio::test]
    async fn on_disk_database_persists_across_opens() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cafe.db");
        let path = path.to_str().unwrap();

        {
            let db = CafeDb::open_local(path).await.unwrap();
            db.conn()
                .execute(
                    "INSERT INTO suppliers (name) VALUES ('Beans Ltd')",
                    (),
                )
                .await
                .unwrap();
        }

        let db = CafeDb::open_local(path).await.unwrap();
        let mut rows = db
            .conn()
            .query("SELECT name FROM suppliers", ())
            .await
            .unwrap();
        let row = rows.next().await.unwrap().unwrap();
        assert_eq!(row.get::<String>(0).unwrap(), "Beans Ltd");
    }
}
