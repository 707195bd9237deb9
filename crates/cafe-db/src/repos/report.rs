//! Read-only business reports.
//!
//! Money aggregates are summed as integer cents in SQL and converted once;
//! cost of goods multiplies by REAL recipe quantities, so it is folded in
//! `Decimal` here and rounded with the store's policy.

use cafe_core::money;
use cafe_core::reports::{
    CustomerValue, DailySales, EmployeePerformance, HourlyLoad, ProfitAndLoss, TopMenuItem,
};
use rust_decimal::Decimal;

use crate::error::DatabaseError;
use crate::helpers::{decimal_from_f64, get_money, single_i64};
use crate::service::CafeService;

impl CafeService {
    /// Orders, items sold and revenue per calendar day (UTC), oldest first.
    pub async fn sales_by_day(&self) -> Result<Vec<DailySales>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                "SELECT DATE(o.order_date) AS day,
                        COUNT(DISTINCT o.id),
                        SUM(li.quantity),
                        SUM(li.quantity * li.price_at_sale_cents)
                 FROM orders o
                 JOIN order_line_items li ON li.order_id = o.id
                 GROUP BY day
                 ORDER BY day",
                (),
            )
            .await?;

        let mut days = Vec::new();
        while let Some(row) = rows.next().await? {
            days.push(DailySales {
                day: row.get::<String>(0)?,
                orders: row.get::<i64>(1)?,
                items: row.get::<i64>(2)?,
                revenue: get_money(&row, 3)?,
            });
        }
        Ok(days)
    }

    /// Best-selling menu items by revenue.
    pub async fn top_menu_items(&self, limit: u32) -> Result<Vec<TopMenuItem>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                "SELECT mi.name, mi.kind,
                        SUM(li.quantity),
                        SUM(li.quantity * li.price_at_sale_cents) AS revenue
                 FROM order_line_items li
                 JOIN menu_items mi ON mi.id = li.menu_item_id
                 GROUP BY mi.id, mi.name, mi.kind
                 ORDER BY revenue DESC, mi.name
                 LIMIT ?1",
                [i64::from(limit)],
            )
            .await?;

        let mut items = Vec::new();
        while let Some(row) = rows.next().await? {
            items.push(TopMenuItem {
                name: row.get::<String>(0)?,
                kind: row.get::<String>(1)?,
                quantity_sold: row.get::<i64>(2)?,
                revenue: get_money(&row, 3)?,
            });
        }
        Ok(items)
    }

    /// Orders, spend and average check per customer, biggest spenders first.
    ///
    /// Spend is the sum of order totals, so each order counts once however
    /// many lines it has. Customers without orders are listed with zeros.
    pub async fn customer_lifetime_value(&self) -> Result<Vec<CustomerValue>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                "SELECT c.name, c.email,
                        COUNT(o.id),
                        COALESCE(SUM(o.total_amount_cents), 0) AS spent
                 FROM customers c
                 LEFT JOIN orders o ON o.customer_id = c.id
                 GROUP BY c.id, c.name, c.email
                 ORDER BY spent DESC, c.name",
                (),
            )
            .await?;

        let rounding = self.rounding();
        let mut customers = Vec::new();
        while let Some(row) = rows.next().await? {
            let orders = row.get::<i64>(2)?;
            let total_spent = get_money(&row, 3)?;
            let average_check = if orders == 0 {
                Decimal::ZERO
            } else {
                rounding.round(total_spent / Decimal::from(orders))
            };
            customers.push(CustomerValue {
                name: row.get::<String>(0)?,
                email: row.get::<String>(1)?,
                orders,
                total_spent,
                average_check,
            });
        }
        Ok(customers)
    }

    /// Order count and order total per employee who has taken orders.
    pub async fn employee_performance(&self) -> Result<Vec<EmployeePerformance>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                "SELECT e.full_name,
                        COUNT(o.id),
                        SUM(o.total_amount_cents) AS orders_total
                 FROM orders o
                 JOIN employees e ON e.id = o.employee_id
                 GROUP BY e.id, e.full_name
                 ORDER BY orders_total DESC, e.full_name",
                (),
            )
            .await?;

        let mut employees = Vec::new();
        while let Some(row) = rows.next().await? {
            employees.push(EmployeePerformance {
                full_name: row.get::<String>(0)?,
                orders: row.get::<i64>(1)?,
                orders_total: get_money(&row, 2)?,
            });
        }
        Ok(employees)
    }

    /// Revenue, ingredient cost of sold items, payroll, and what is left.
    pub async fn profit_and_loss(&self) -> Result<ProfitAndLoss, DatabaseError> {
        let conn = self.db().conn();

        let revenue = money::from_minor_units(
            single_i64(
                conn.query("SELECT COALESCE(SUM(total_amount_cents), 0) FROM orders", ())
                    .await?,
            )
            .await?,
        );

        let mut rows = conn
            .query(
                "SELECT li.quantity, r.quantity_required, i.purchase_price_cents
                 FROM order_line_items li
                 JOIN recipes r ON r.menu_item_id = li.menu_item_id
                 JOIN ingredients i ON i.id = r.ingredient_id",
                (),
            )
            .await?;
        let mut cost = Decimal::ZERO;
        while let Some(row) = rows.next().await? {
            let quantity = Decimal::from(row.get::<i64>(0)?);
            let required = decimal_from_f64(row.get::<f64>(1)?)?;
            let price = get_money(&row, 2)?;
            cost += quantity * required * price;
        }
        let cost_of_goods = self.rounding().round(cost);

        let payroll = money::from_minor_units(
            single_i64(
                conn.query("SELECT COALESCE(SUM(salary_cents), 0) FROM employees", ())
                    .await?,
            )
            .await?,
        );

        Ok(ProfitAndLoss {
            revenue,
            cost_of_goods,
            payroll,
            net_profit: revenue - cost_of_goods - payroll,
        })
    }

    /// Order count and revenue per hour of day (UTC), for hours with orders.
    pub async fn hourly_load(&self) -> Result<Vec<HourlyLoad>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                "SELECT CAST(strftime('%H', order_date) AS INTEGER) AS hour,
                        COUNT(*),
                        SUM(total_amount_cents)
                 FROM orders
                 GROUP BY hour
                 ORDER BY hour",
                (),
            )
            .await?;

        let mut hours = Vec::new();
        while let Some(row) = rows.next().await? {
            let raw = row.get::<i64>(0)?;
            let hour = u32::try_from(raw)
                .map_err(|_| DatabaseError::Query(format!("invalid hour of day: {raw}")))?;
            hours.push(HourlyLoad {
                hour,
                orders: row.get::<i64>(1)?,
                revenue: get_money(&row, 2)?,
            });
        }
        Ok(hours)
    }
}
