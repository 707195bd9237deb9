//! Menu item repository. Deletions are audited.
//!
//! Changing a selling price never touches existing line items: they carry
//! their own `price_at_sale` snapshot.

use cafe_core::entities::{MenuItem, NewMenuItem};
use cafe_core::enums::AuditAction;
use cafe_core::money;

use crate::error::DatabaseError;
use crate::helpers::{execute_write, get_money, insert_returning_id, single_i64, to_cents};
use crate::service::CafeService;
use crate::unit_of_work::UnitOfWork;
use crate::updates::SetClauses;
use crate::updates::menu_item::MenuItemUpdate;

const COLUMNS: &str = "id, name, kind, selling_price_cents, volume_or_weight";

fn row_to_menu_item(row: &libsql::Row) -> Result<MenuItem, DatabaseError> {
    Ok(MenuItem {
        id: row.get::<i64>(0)?,
        name: row.get::<String>(1)?,
        kind: row.get::<String>(2)?,
        selling_price: get_money(row, 3)?,
        volume_or_weight: row.get::<String>(4)?,
    })
}

pub(crate) async fn fetch_menu_item(
    conn: &libsql::Connection,
    id: i64,
) -> Result<MenuItem, DatabaseError> {
    let mut rows = conn
        .query(
            &format!("SELECT {COLUMNS} FROM menu_items WHERE id = ?1"),
            [id],
        )
        .await?;
    let row = rows.next().await?.ok_or(DatabaseError::NotFound {
        entity: "menu_items",
        id,
    })?;
    row_to_menu_item(&row)
}

/// Count line items and recipes that still point at a menu item.
async fn count_references(conn: &libsql::Connection, id: i64) -> Result<(i64, i64), DatabaseError> {
    let lines = single_i64(
        conn.query(
            "SELECT COUNT(*) FROM order_line_items WHERE menu_item_id = ?1",
            [id],
        )
        .await?,
    )
    .await?;
    let recipes = single_i64(
        conn.query("SELECT COUNT(*) FROM recipes WHERE menu_item_id = ?1", [id])
            .await?,
    )
    .await?;
    Ok((lines, recipes))
}

impl UnitOfWork<'_> {
    pub async fn create_menu_item(&self, new: &NewMenuItem) -> Result<MenuItem, DatabaseError> {
        money::validate_amount(new.selling_price, "selling_price")?;

        let id = insert_returning_id(
            self.conn(),
            "INSERT INTO menu_items (name, kind, selling_price_cents, volume_or_weight)
             VALUES (?1, ?2, ?3, ?4) RETURNING id",
            libsql::params![
                new.name.as_str(),
                new.kind.as_str(),
                to_cents(new.selling_price, self.rounding())?,
                new.volume_or_weight.as_str()
            ],
        )
        .await?;

        let item = fetch_menu_item(self.conn(), id).await?;
        self.audit(AuditAction::Insert, &item).await?;
        Ok(item)
    }

    pub async fn update_menu_item(
        &self,
        id: i64,
        update: MenuItemUpdate,
    ) -> Result<MenuItem, DatabaseError> {
        let mut sets = SetClauses::default();

        if let Some(name) = update.name {
            sets.push("name", name);
        }
        if let Some(kind) = update.kind {
            sets.push("kind", kind);
        }
        if let Some(price) = update.selling_price {
            money::validate_amount(price, "selling_price")?;
            sets.push("selling_price_cents", to_cents(price, self.rounding())?);
        }
        if let Some(volume) = update.volume_or_weight {
            sets.push("volume_or_weight", volume);
        }

        if sets.is_empty() {
            return fetch_menu_item(self.conn(), id).await;
        }

        let (sql, params) = sets.into_statement("menu_items", id);
        let affected = execute_write(self.conn(), &sql, libsql::params_from_iter(params)).await?;
        if affected == 0 {
            return Err(DatabaseError::NotFound {
                entity: "menu_items",
                id,
            });
        }

        let item = fetch_menu_item(self.conn(), id).await?;
        self.audit(AuditAction::Update, &item).await?;
        Ok(item)
    }

    /// Delete a menu item and record its before-image.
    ///
    /// Rejected with an integrity violation while line items or recipes
    /// still reference it.
    pub async fn delete_menu_item(&self, id: i64) -> Result<MenuItem, DatabaseError> {
        let item = fetch_menu_item(self.conn(), id).await?;

        let (lines, recipes) = count_references(self.conn(), id).await?;
        if lines > 0 || recipes > 0 {
            return Err(DatabaseError::Integrity(format!(
                "menu item '{}' is referenced by {lines} line item(s) and {recipes} recipe(s)",
                item.name
            )));
        }

        execute_write(self.conn(), "DELETE FROM menu_items WHERE id = ?1", [id]).await?;
        self.audit(AuditAction::Delete, &item).await?;
        Ok(item)
    }
}

impl CafeService {
    pub async fn get_menu_item(&self, id: i64) -> Result<MenuItem, DatabaseError> {
        fetch_menu_item(self.db().conn(), id).await
    }

    pub async fn list_menu_items(&self, limit: u32) -> Result<Vec<MenuItem>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {COLUMNS} FROM menu_items ORDER BY kind, name LIMIT ?1"),
                [i64::from(limit)],
            )
            .await?;

        let mut items = Vec::new();
        while let Some(row) = rows.next().await? {
            items.push(row_to_menu_item(&row)?);
        }
        Ok(items)
    }

    pub async fn create_menu_item(&mut self, new: NewMenuItem) -> Result<MenuItem, DatabaseError> {
        let uow = self.begin().await?;
        let result = uow.create_menu_item(&new).await;
        uow.finish(result).await
    }

    pub async fn update_menu_item(
        &mut self,
        id: i64,
        update: MenuItemUpdate,
    ) -> Result<MenuItem, DatabaseError> {
        let uow = self.begin().await?;
        let result = uow.update_menu_item(id, update).await;
        uow.finish(result).await
    }

    pub async fn delete_menu_item(&mut self, id: i64) -> Result<MenuItem, DatabaseError> {
        let uow = self.begin().await?;
        let result = uow.delete_menu_item(id).await;
        uow.finish(result).await
    }
}
