//! Order repository with cart creation and status transitions.
//!
//! `total_amount` is never written here directly; it is derived by the
//! total maintainer from the order's line items.

use cafe_core::entities::{LineItem, NewLineItem, NewOrder, Order};
use cafe_core::enums::{AuditAction, OrderStatus};
use cafe_core::errors::CoreError;
use cafe_core::money;
use chrono::Utc;

use crate::error::DatabaseError;
use crate::helpers::{
    execute_write, format_datetime, get_money, insert_returning_id, parse_datetime, parse_enum,
};
use crate::service::CafeService;
use crate::unit_of_work::UnitOfWork;
use crate::updates::SetClauses;
use crate::updates::order::OrderUpdate;

const COLUMNS: &str = "id, order_date, order_type, payment_method, status, total_amount_cents, customer_id, employee_id";

fn row_to_order(row: &libsql::Row) -> Result<Order, DatabaseError> {
    Ok(Order {
        id: row.get::<i64>(0)?,
        order_date: parse_datetime(&row.get::<String>(1)?)?,
        order_type: parse_enum(&row.get::<String>(2)?)?,
        payment_method: parse_enum(&row.get::<String>(3)?)?,
        status: parse_enum(&row.get::<String>(4)?)?,
        total_amount: get_money(row, 5)?,
        customer_id: row.get::<Option<i64>>(6)?,
        employee_id: row.get::<i64>(7)?,
    })
}

pub(crate) async fn fetch_order(conn: &libsql::Connection, id: i64) -> Result<Order, DatabaseError> {
    let mut rows = conn
        .query(&format!("SELECT {COLUMNS} FROM orders WHERE id = ?1"), [id])
        .await?;
    let row = rows.next().await?.ok_or(DatabaseError::NotFound {
        entity: "orders",
        id,
    })?;
    row_to_order(&row)
}

/// Filter criteria for order listings.
#[derive(Debug, Default)]
pub struct OrderFilter {
    pub status: Option<OrderStatus>,
    pub customer_id: Option<i64>,
    pub employee_id: Option<i64>,
    pub limit: Option<u32>,
}

impl UnitOfWork<'_> {
    /// Create an order from a cart.
    ///
    /// The order starts at status `new` with a zero total; each cart line is
    /// then added through the line item write path, which snapshots prices
    /// and recomputes the total.
    pub async fn create_order(
        &self,
        new: &NewOrder,
    ) -> Result<(Order, Vec<LineItem>), DatabaseError> {
        if new.lines.is_empty() {
            return Err(DatabaseError::Validation(
                "an order needs at least one line item".into(),
            ));
        }
        for line in &new.lines {
            money::validate_quantity(line.quantity)?;
        }

        let order_date = new.order_date.unwrap_or_else(Utc::now);
        let id = insert_returning_id(
            self.conn(),
            "INSERT INTO orders (order_date, order_type, payment_method, status, total_amount_cents, customer_id, employee_id)
             VALUES (?1, ?2, ?3, ?4, 0, ?5, ?6) RETURNING id",
            libsql::params![
                format_datetime(&order_date),
                new.order_type.as_str(),
                new.payment_method.as_str(),
                OrderStatus::New.as_str(),
                new.customer_id,
                new.employee_id
            ],
        )
        .await?;

        let created = fetch_order(self.conn(), id).await?;
        self.audit(AuditAction::Insert, &created).await?;

        let mut items = Vec::with_capacity(new.lines.len());
        for line in &new.lines {
            let item = self
                .add_line_item(&NewLineItem {
                    order_id: id,
                    menu_item_id: line.menu_item_id,
                    quantity: line.quantity,
                    price_at_sale: line.price,
                })
                .await?;
            items.push(item);
        }

        let order = fetch_order(self.conn(), id).await?;
        Ok((order, items))
    }

    /// Change who/how fields of an order. Status and total are not editable here.
    pub async fn update_order(&self, id: i64, update: OrderUpdate) -> Result<Order, DatabaseError> {
        let mut sets = SetClauses::default();

        if let Some(employee_id) = update.employee_id {
            sets.push("employee_id", employee_id);
        }
        if let Some(customer_id) = update.customer_id {
            sets.push(
                "customer_id",
                customer_id.map_or(libsql::Value::Null, libsql::Value::Integer),
            );
        }
        if let Some(order_type) = update.order_type {
            sets.push("order_type", order_type.as_str());
        }
        if let Some(payment_method) = update.payment_method {
            sets.push("payment_method", payment_method.as_str());
        }
        if let Some(order_date) = update.order_date {
            sets.push("order_date", format_datetime(&order_date));
        }

        if sets.is_empty() {
            return fetch_order(self.conn(), id).await;
        }

        let (sql, params) = sets.into_statement("orders", id);
        let affected = execute_write(self.conn(), &sql, libsql::params_from_iter(params)).await?;
        if affected == 0 {
            return Err(DatabaseError::NotFound {
                entity: "orders",
                id,
            });
        }

        let order = fetch_order(self.conn(), id).await?;
        self.audit(AuditAction::Update, &order).await?;
        Ok(order)
    }

    /// Move an order along `new → ready → paid`, or cancel it before payment.
    pub async fn change_order_status(
        &self,
        id: i64,
        next: OrderStatus,
    ) -> Result<Order, DatabaseError> {
        let current = fetch_order(self.conn(), id).await?;

        if !current.status.can_transition_to(next) {
            return Err(CoreError::InvalidTransition {
                entity_type: "order".into(),
                id: id.to_string(),
                from: current.status.to_string(),
                to: next.to_string(),
            }
            .into());
        }

        execute_write(
            self.conn(),
            "UPDATE orders SET status = ?1 WHERE id = ?2",
            libsql::params![next.as_str(), id],
        )
        .await?;

        let order = Order {
            status: next,
            ..current
        };
        self.audit(AuditAction::Update, &order).await?;
        Ok(order)
    }

    /// Delete an order. Its line items cascade.
    pub async fn delete_order(&self, id: i64) -> Result<Order, DatabaseError> {
        let order = fetch_order(self.conn(), id).await?;
        execute_write(self.conn(), "DELETE FROM orders WHERE id = ?1", [id]).await?;
        self.audit(AuditAction::Delete, &order).await?;
        Ok(order)
    }
}

impl CafeService {
    pub async fn get_order(&self, id: i64) -> Result<Order, DatabaseError> {
        fetch_order(self.db().conn(), id).await
    }

    /// Orders, newest first.
    pub async fn list_orders(&self, filter: &OrderFilter) -> Result<Vec<Order>, DatabaseError> {
        let mut conditions = Vec::new();
        let mut params: Vec<libsql::Value> = Vec::new();

        if let Some(status) = filter.status {
            params.push(libsql::Value::Text(status.as_str().to_string()));
            conditions.push(format!("status = ?{}", params.len()));
        }
        if let Some(customer_id) = filter.customer_id {
            params.push(libsql::Value::Integer(customer_id));
            conditions.push(format!("customer_id = ?{}", params.len()));
        }
        if let Some(employee_id) = filter.employee_id {
            params.push(libsql::Value::Integer(employee_id));
            conditions.push(format!("employee_id = ?{}", params.len()));
        }

        let where_clause = if conditions.is_empty() {
            String::new()
        } else {
            format!("WHERE {}", conditions.join(" AND "))
        };

        let limit = filter.limit.unwrap_or(100);
        let sql = format!(
            "SELECT {COLUMNS} FROM orders {where_clause}
             ORDER BY order_date DESC, id DESC LIMIT {limit}"
        );

        let mut rows = self
            .db()
            .conn()
            .query(&sql, libsql::params_from_iter(params))
            .await?;
        let mut orders = Vec::new();
        while let Some(row) = rows.next().await? {
            orders.push(row_to_order(&row)?);
        }
        Ok(orders)
    }

    pub async fn create_order(
        &mut self,
        new: NewOrder,
    ) -> Result<(Order, Vec<LineItem>), DatabaseError> {
        let uow = self.begin().await?;
        let result = uow.create_order(&new).await;
        uow.finish(result).await
    }

    pub async fn update_order(
        &mut self,
        id: i64,
        update: OrderUpdate,
    ) -> Result<Order, DatabaseError> {
        let uow = self.begin().await?;
        let result = uow.update_order(id, update).await;
        uow.finish(result).await
    }

    pub async fn change_order_status(
        &mut self,
        id: i64,
        next: OrderStatus,
    ) -> Result<Order, DatabaseError> {
        let uow = self.begin().await?;
        let result = uow.change_order_status(id, next).await;
        uow.finish(result).await
    }

    pub async fn delete_order(&mut self, id: i64) -> Result<Order, DatabaseError> {
        let uow = self.begin().await?;
        let result = uow.delete_order(id).await;
        uow.finish(result).await
    }
}
