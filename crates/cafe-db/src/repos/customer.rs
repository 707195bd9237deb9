//! Customer repository: CRUD with phone validation. Updates are audited.

use cafe_core::entities::{Customer, NewCustomer};
use cafe_core::enums::AuditAction;
use cafe_core::phone;

use crate::error::DatabaseError;
use crate::helpers::{execute_write, insert_returning_id};
use crate::service::CafeService;
use crate::unit_of_work::UnitOfWork;
use crate::updates::SetClauses;
use crate::updates::customer::CustomerUpdate;

const COLUMNS: &str = "id, name, phone, email, loyalty_level, discount_percent";

fn row_to_customer(row: &libsql::Row) -> Result<Customer, DatabaseError> {
    Ok(Customer {
        id: row.get::<i64>(0)?,
        name: row.get::<String>(1)?,
        phone: row.get::<String>(2)?,
        email: row.get::<String>(3)?,
        loyalty_level: row.get::<String>(4)?,
        discount_percent: row.get::<f64>(5)?,
    })
}

pub(crate) async fn fetch_customer(
    conn: &libsql::Connection,
    id: i64,
) -> Result<Customer, DatabaseError> {
    let mut rows = conn
        .query(
            &format!("SELECT {COLUMNS} FROM customers WHERE id = ?1"),
            [id],
        )
        .await?;
    let row = rows.next().await?.ok_or(DatabaseError::NotFound {
        entity: "customers",
        id,
    })?;
    row_to_customer(&row)
}

fn validate_discount(discount: f64) -> Result<(), DatabaseError> {
    if (0.0..=100.0).contains(&discount) {
        Ok(())
    } else {
        Err(DatabaseError::Validation(format!(
            "discount_percent must be between 0 and 100, got {discount}"
        )))
    }
}

fn validate_email(email: &str) -> Result<(), DatabaseError> {
    if email.trim().is_empty() {
        return Err(DatabaseError::Validation("email must not be empty".into()));
    }
    Ok(())
}

impl UnitOfWork<'_> {
    pub async fn create_customer(&self, new: &NewCustomer) -> Result<Customer, DatabaseError> {
        phone::validate(&new.phone)?;
        validate_email(&new.email)?;

        let id = insert_returning_id(
            self.conn(),
            "INSERT INTO customers (name, phone, email) VALUES (?1, ?2, ?3) RETURNING id",
            libsql::params![new.name.as_str(), new.phone.as_str(), new.email.as_str()],
        )
        .await?;

        let customer = fetch_customer(self.conn(), id).await?;
        self.audit(AuditAction::Insert, &customer).await?;
        Ok(customer)
    }

    /// Apply `update` and record the after-image.
    ///
    /// An empty update touches nothing and logs nothing.
    pub async fn update_customer(
        &self,
        id: i64,
        update: CustomerUpdate,
    ) -> Result<Customer, DatabaseError> {
        let mut sets = SetClauses::default();

        if let Some(name) = update.name {
            sets.push("name", name);
        }
        if let Some(phone) = update.phone {
            phone::validate(&phone)?;
            sets.push("phone", phone);
        }
        if let Some(email) = update.email {
            validate_email(&email)?;
            sets.push("email", email);
        }
        if let Some(level) = update.loyalty_level {
            sets.push("loyalty_level", level);
        }
        if let Some(discount) = update.discount_percent {
            validate_discount(discount)?;
            sets.push("discount_percent", discount);
        }

        if sets.is_empty() {
            return fetch_customer(self.conn(), id).await;
        }

        let (sql, params) = sets.into_statement("customers", id);
        let affected = execute_write(self.conn(), &sql, libsql::params_from_iter(params)).await?;
        if affected == 0 {
            return Err(DatabaseError::NotFound {
                entity: "customers",
                id,
            });
        }

        let customer = fetch_customer(self.conn(), id).await?;
        self.audit(AuditAction::Update, &customer).await?;
        Ok(customer)
    }

    /// Delete a customer. Their orders and line items cascade.
    pub async fn delete_customer(&self, id: i64) -> Result<Customer, DatabaseError> {
        let customer = fetch_customer(self.conn(), id).await?;
        execute_write(self.conn(), "DELETE FROM customers WHERE id = ?1", [id]).await?;
        self.audit(AuditAction::Delete, &customer).await?;
        Ok(customer)
    }
}

impl CafeService {
    pub async fn get_customer(&self, id: i64) -> Result<Customer, DatabaseError> {
        fetch_customer(self.db().conn(), id).await
    }

    pub async fn list_customers(&self, limit: u32) -> Result<Vec<Customer>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {COLUMNS} FROM customers ORDER BY name, id LIMIT ?1"),
                [i64::from(limit)],
            )
            .await?;

        let mut customers = Vec::new();
        while let Some(row) = rows.next().await? {
            customers.push(row_to_customer(&row)?);
        }
        Ok(customers)
    }

    pub async fn create_customer(&mut self, new: NewCustomer) -> Result<Customer, DatabaseError> {
        let uow = self.begin().await?;
        let result = uow.create_customer(&new).await;
        uow.finish(result).await
    }

    pub async fn update_customer(
        &mut self,
        id: i64,
        update: CustomerUpdate,
    ) -> Result<Customer, DatabaseError> {
        let uow = self.begin().await?;
        let result = uow.update_customer(id, update).await;
        uow.finish(result).await
    }

    pub async fn delete_customer(&mut self, id: i64) -> Result<Customer, DatabaseError> {
        let uow = self.begin().await?;
        let result = uow.delete_customer(id).await;
        uow.finish(result).await
    }
}

#[cfg(test)]
mod tests {
    use crate::repos::audit::AuditFilter;
    use crate::test_support::helpers::*;
    use crate::updates::CustomerUpdateBuilder;
    use crate::error::DatabaseError;
    use cafe_core::entities::NewCustomer;
    use cafe_core::enums::{AuditAction, EntityKind};
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn create_and_get_customer() {
        let mut svc = test_service().await;
        let created = seed_customer(&mut svc, "Anna", "anna@example.com").await;

        let fetched = svc.get_customer(created.id).await.unwrap();
        assert_eq!(fetched, created);
        assert_eq!(fetched.loyalty_level, "Bronze");
        assert!(fetched.discount_percent.abs() < f64::EPSILON);
    }

    #[tokio::test]
    async fn invalid_phone_is_rejected() {
        let mut svc = test_service().await;
        let result = svc
            .create_customer(NewCustomer {
                name: "Bad".into(),
                phone: "12345".into(),
                email: "bad@example.com".into(),
            })
            .await;
        assert!(matches!(result, Err(DatabaseError::Validation(_))));
        assert!(svc.list_customers(10).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn whitespace_phone_is_not_stored() {
        let mut svc = test_service().await;
        let customer = seed_customer(&mut svc, "A", "a@example.com").await;

        let result = svc
            .update_customer(customer.id, CustomerUpdateBuilder::new().phone("   ").build())
            .await;
        assert!(matches!(result, Err(DatabaseError::Validation(_))));
        assert_eq!(svc.get_customer(customer.id).await.unwrap().phone, "");
        assert!(svc.list_audit_log(&AuditFilter::default()).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn duplicate_email_is_an_integrity_violation() {
        let mut svc = test_service().await;
        seed_customer(&mut svc, "Anna", "anna@example.com").await;
        let result = svc
            .create_customer(NewCustomer {
                name: "Other Anna".into(),
                phone: String::new(),
                email: "anna@example.com".into(),
            })
            .await;
        assert!(matches!(result, Err(DatabaseError::Integrity(_))));
    }

    #[tokio::test]
    async fn update_logs_post_update_name() {
        let mut svc = test_service().await;
        let customer = seed_customer(&mut svc, "A", "a@example.com").await;

        let updated = svc
            .update_customer(customer.id, CustomerUpdateBuilder::new().name("B").build())
            .await
            .unwrap();
        assert_eq!(updated.name, "B");

        let log = svc.list_audit_log(&AuditFilter::default()).await.unwrap();
        assert_eq!(log.len(), 1);
        assert_eq!(log[0].action, AuditAction::Update);
        assert_eq!(log[0].entity, EntityKind::Customers);
        assert_eq!(log[0].entity_id, customer.id);
        assert_eq!(log[0].trigger_name, "customer_updated");
        assert_eq!(log[0].message, "Customer updated: B");
    }

    #[tokio::test]
    async fn empty_update_logs_nothing() {
        let mut svc = test_service().await;
        let customer = seed_customer(&mut svc, "A", "a@example.com").await;

        let same = svc
            .update_customer(customer.id, CustomerUpdateBuilder::new().build())
            .await
            .unwrap();
        assert_eq!(same, customer);
        assert!(svc.list_audit_log(&AuditFilter::default()).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn discount_out_of_range_is_rejected() {
        let mut svc = test_service().await;
        let customer = seed_customer(&mut svc, "A", "a@example.com").await;

        let result = svc
            .update_customer(
                customer.id,
                CustomerUpdateBuilder::new().discount_percent(120.0).build(),
            )
            .await;
        assert!(matches!(result, Err(DatabaseError::Validation(_))));
        assert!(svc.list_audit_log(&AuditFilter::default()).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn update_missing_customer_is_not_found() {
        let mut svc = test_service().await;
        let result = svc
            .update_customer(99, CustomerUpdateBuilder::new().name("Ghost").build())
            .await;
        assert!(matches!(
            result,
            Err(DatabaseError::NotFound { entity: "customers", id: 99 })
        ));
    }

    #[tokio::test]
    async fn delete_cascades_to_orders() {
        let mut svc = test_service().await;
        let employee = seed_employee(&mut svc).await;
        let customer = seed_customer(&mut svc, "A", "a@example.com").await;
        let latte = seed_menu_item(&mut svc, "Latte", "3.50").await;
        let order = seed_order(&mut svc, employee.id, Some(customer.id), &[(latte.id, 1)]).await;

        svc.delete_customer(customer.id).await.unwrap();

        assert!(matches!(
            svc.get_order(order.id).await,
            Err(DatabaseError::NotFound { .. })
        ));
        assert!(svc.list_line_items(order.id).await.unwrap().is_empty());
    }
}
