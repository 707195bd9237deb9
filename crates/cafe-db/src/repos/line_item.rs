//! Line item repository.
//!
//! Every insert, update and delete here recomputes the owning order's total
//! exactly once, inside the same unit of work.

use cafe_core::entities::{CartLine, LineItem, NewLineItem};
use cafe_core::enums::AuditAction;
use cafe_core::money;

use crate::error::DatabaseError;
use crate::helpers::{execute_write, get_money, insert_returning_id, single_i64, to_cents};
use crate::repos::menu_item::fetch_menu_item;
use crate::service::CafeService;
use crate::unit_of_work::UnitOfWork;
use crate::updates::SetClauses;
use crate::updates::line_item::LineItemUpdate;

const COLUMNS: &str = "id, order_id, menu_item_id, quantity, price_at_sale_cents";

fn row_to_line_item(row: &libsql::Row) -> Result<LineItem, DatabaseError> {
    Ok(LineItem {
        id: row.get::<i64>(0)?,
        order_id: row.get::<i64>(1)?,
        menu_item_id: row.get::<i64>(2)?,
        quantity: row.get::<i64>(3)?,
        price_at_sale: get_money(row, 4)?,
    })
}

pub(crate) async fn fetch_line_item(
    conn: &libsql::Connection,
    id: i64,
) -> Result<LineItem, DatabaseError> {
    let mut rows = conn
        .query(
            &format!("SELECT {COLUMNS} FROM order_line_items WHERE id = ?1"),
            [id],
        )
        .await?;
    let row = rows.next().await?.ok_or(DatabaseError::NotFound {
        entity: "order_line_items",
        id,
    })?;
    row_to_line_item(&row)
}

pub(crate) async fn fetch_order_lines(
    conn: &libsql::Connection,
    order_id: i64,
) -> Result<Vec<LineItem>, DatabaseError> {
    let mut rows = conn
        .query(
            &format!("SELECT {COLUMNS} FROM order_line_items WHERE order_id = ?1 ORDER BY id"),
            [order_id],
        )
        .await?;

    let mut items = Vec::new();
    while let Some(row) = rows.next().await? {
        items.push(row_to_line_item(&row)?);
    }
    Ok(items)
}

/// Line items may only be attached to an existing order.
async fn ensure_order_exists(conn: &libsql::Connection, order_id: i64) -> Result<(), DatabaseError> {
    let count = single_i64(
        conn.query("SELECT COUNT(*) FROM orders WHERE id = ?1", [order_id])
            .await?,
    )
    .await?;
    if count == 0 {
        return Err(DatabaseError::Integrity(format!(
            "order {order_id} does not exist"
        )));
    }
    Ok(())
}

impl UnitOfWork<'_> {
    /// Insert a line item, snapshotting the menu item's current price unless
    /// one is given.
    pub async fn add_line_item(&self, new: &NewLineItem) -> Result<LineItem, DatabaseError> {
        money::validate_quantity(new.quantity)?;
        ensure_order_exists(self.conn(), new.order_id).await?;

        let price = match new.price_at_sale {
            Some(price) => {
                money::validate_amount(price, "price_at_sale")?;
                price
            }
            None => fetch_menu_item(self.conn(), new.menu_item_id).await?.selling_price,
        };
        let price_cents = to_cents(price, self.rounding())?;

        let id = insert_returning_id(
            self.conn(),
            "INSERT INTO order_line_items (order_id, menu_item_id, quantity, price_at_sale_cents)
             VALUES (?1, ?2, ?3, ?4) RETURNING id",
            libsql::params![new.order_id, new.menu_item_id, new.quantity, price_cents],
        )
        .await?;

        let item = LineItem {
            id,
            order_id: new.order_id,
            menu_item_id: new.menu_item_id,
            quantity: new.quantity,
            price_at_sale: money::from_minor_units(price_cents),
        };

        self.recompute_total(item.order_id).await?;
        self.audit(AuditAction::Insert, &item).await?;
        Ok(item)
    }

    /// Change quantity and/or price of a line item.
    ///
    /// A non-empty update recomputes the total even when the values are
    /// unchanged. An empty update touches nothing.
    pub async fn update_line_item(
        &self,
        id: i64,
        update: LineItemUpdate,
    ) -> Result<LineItem, DatabaseError> {
        let mut sets = SetClauses::default();

        if let Some(quantity) = update.quantity {
            money::validate_quantity(quantity)?;
            sets.push("quantity", quantity);
        }
        if let Some(price) = update.price_at_sale {
            money::validate_amount(price, "price_at_sale")?;
            sets.push("price_at_sale_cents", to_cents(price, self.rounding())?);
        }

        if sets.is_empty() {
            return fetch_line_item(self.conn(), id).await;
        }

        let (sql, params) = sets.into_statement("order_line_items", id);
        let affected = execute_write(self.conn(), &sql, libsql::params_from_iter(params)).await?;
        if affected == 0 {
            return Err(DatabaseError::NotFound {
                entity: "order_line_items",
                id,
            });
        }

        let item = fetch_line_item(self.conn(), id).await?;
        self.recompute_total(item.order_id).await?;
        self.audit(AuditAction::Update, &item).await?;
        Ok(item)
    }

    /// Remove a line item; the owning order comes from the removed row.
    pub async fn delete_line_item(&self, id: i64) -> Result<LineItem, DatabaseError> {
        let item = fetch_line_item(self.conn(), id).await?;
        execute_write(self.conn(), "DELETE FROM order_line_items WHERE id = ?1", [id]).await?;

        self.recompute_total(item.order_id).await?;
        self.audit(AuditAction::Delete, &item).await?;
        Ok(item)
    }

    /// Swap an order's lines for a new cart.
    ///
    /// Each removal and each insertion goes through the regular write path,
    /// so the total is recomputed once per line touched.
    pub async fn replace_line_items(
        &self,
        order_id: i64,
        cart: &[CartLine],
    ) -> Result<Vec<LineItem>, DatabaseError> {
        if cart.is_empty() {
            return Err(DatabaseError::Validation(
                "an order needs at least one line item".into(),
            ));
        }
        for line in cart {
            money::validate_quantity(line.quantity)?;
        }
        ensure_order_exists(self.conn(), order_id).await?;

        for existing in fetch_order_lines(self.conn(), order_id).await? {
            self.delete_line_item(existing.id).await?;
        }

        let mut items = Vec::with_capacity(cart.len());
        for line in cart {
            let item = self
                .add_line_item(&NewLineItem {
                    order_id,
                    menu_item_id: line.menu_item_id,
                    quantity: line.quantity,
                    price_at_sale: line.price,
                })
                .await?;
            items.push(item);
        }
        Ok(items)
    }
}

impl CafeService {
    pub async fn get_line_item(&self, id: i64) -> Result<LineItem, DatabaseError> {
        fetch_line_item(self.db().conn(), id).await
    }

    pub async fn list_line_items(&self, order_id: i64) -> Result<Vec<LineItem>, DatabaseError> {
        fetch_order_lines(self.db().conn(), order_id).await
    }

    pub async fn add_line_item(&mut self, new: NewLineItem) -> Result<LineItem, DatabaseError> {
        let uow = self.begin().await?;
        let result = uow.add_line_item(&new).await;
        uow.finish(result).await
    }

    pub async fn update_line_item(
        &mut self,
        id: i64,
        update: LineItemUpdate,
    ) -> Result<LineItem, DatabaseError> {
        let uow = self.begin().await?;
        let result = uow.update_line_item(id, update).await;
        uow.finish(result).await
    }

    pub async fn delete_line_item(&mut self, id: i64) -> Result<LineItem, DatabaseError> {
        let uow = self.begin().await?;
        let result = uow.delete_line_item(id).await;
        uow.finish(result).await
    }

    pub async fn replace_line_items(
        &mut self,
        order_id: i64,
        cart: Vec<CartLine>,
    ) -> Result<Vec<LineItem>, DatabaseError> {
        let uow = self.begin().await?;
        let result = uow.replace_line_items(order_id, &cart).await;
        uow.finish(result).await
    }
}
