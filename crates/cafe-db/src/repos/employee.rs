//! Employee repository.

use cafe_core::entities::{Employee, NewEmployee};
use cafe_core::enums::AuditAction;
use cafe_core::{money, phone};
use chrono::Utc;

use crate::error::DatabaseError;
use crate::helpers::{execute_write, format_datetime, get_money, insert_returning_id, parse_datetime, to_cents};
use crate::service::CafeService;
use crate::unit_of_work::UnitOfWork;
use crate::updates::SetClauses;
use crate::updates::employee::EmployeeUpdate;

const COLUMNS: &str = "id, full_name, role, phone, hire_date, salary_cents";

fn row_to_employee(row: &libsql::Row) -> Result<Employee, DatabaseError> {
    Ok(Employee {
        id: row.get::<i64>(0)?,
        full_name: row.get::<String>(1)?,
        role: row.get::<String>(2)?,
        phone: row.get::<String>(3)?,
        hire_date: parse_datetime(&row.get::<String>(4)?)?,
        salary: get_money(row, 5)?,
    })
}

pub(crate) async fn fetch_employee(
    conn: &libsql::Connection,
    id: i64,
) -> Result<Employee, DatabaseError> {
    let mut rows = conn
        .query(
            &format!("SELECT {COLUMNS} FROM employees WHERE id = ?1"),
            [id],
        )
        .await?;
    let row = rows.next().await?.ok_or(DatabaseError::NotFound {
        entity: "employees",
        id,
    })?;
    row_to_employee(&row)
}

impl UnitOfWork<'_> {
    pub async fn create_employee(&self, new: &NewEmployee) -> Result<Employee, DatabaseError> {
        phone::validate(&new.phone)?;
        money::validate_amount(new.salary, "salary")?;
        let hire_date = new.hire_date.unwrap_or_else(Utc::now);

        let id = insert_returning_id(
            self.conn(),
            "INSERT INTO employees (full_name, role, phone, hire_date, salary_cents)
             VALUES (?1, ?2, ?3, ?4, ?5) RETURNING id",
            libsql::params![
                new.full_name.as_str(),
                new.role.as_str(),
                new.phone.as_str(),
                format_datetime(&hire_date),
                to_cents(new.salary, self.rounding())?
            ],
        )
        .await?;

        let employee = fetch_employee(self.conn(), id).await?;
        self.audit(AuditAction::Insert, &employee).await?;
        Ok(employee)
    }

    pub async fn update_employee(
        &self,
        id: i64,
        update: EmployeeUpdate,
    ) -> Result<Employee, DatabaseError> {
        let mut sets = SetClauses::default();

        if let Some(full_name) = update.full_name {
            sets.push("full_name", full_name);
        }
        if let Some(role) = update.role {
            sets.push("role", role);
        }
        if let Some(phone) = update.phone {
            phone::validate(&phone)?;
            sets.push("phone", phone);
        }
        if let Some(hire_date) = update.hire_date {
            sets.push("hire_date", format_datetime(&hire_date));
        }
        if let Some(salary) = update.salary {
            money::validate_amount(salary, "salary")?;
            sets.push("salary_cents", to_cents(salary, self.rounding())?);
        }

        if sets.is_empty() {
            return fetch_employee(self.conn(), id).await;
        }

        let (sql, params) = sets.into_statement("employees", id);
        let affected = execute_write(self.conn(), &sql, libsql::params_from_iter(params)).await?;
        if affected == 0 {
            return Err(DatabaseError::NotFound {
                entity: "employees",
                id,
            });
        }

        let employee = fetch_employee(self.conn(), id).await?;
        self.audit(AuditAction::Update, &employee).await?;
        Ok(employee)
    }

    /// Delete an employee. Rejected while orders still reference them.
    pub async fn delete_employee(&self, id: i64) -> Result<Employee, DatabaseError> {
        let employee = fetch_employee(self.conn(), id).await?;
        execute_write(self.conn(), "DELETE FROM employees WHERE id = ?1", [id]).await?;
        self.audit(AuditAction::Delete, &employee).await?;
        Ok(employee)
    }
}

impl CafeService {
    pub async fn get_employee(&self, id: i64) -> Result<Employee, DatabaseError> {
        fetch_employee(self.db().conn(), id).await
    }

    pub async fn list_employees(&self, limit: u32) -> Result<Vec<Employee>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {COLUMNS} FROM employees ORDER BY full_name, id LIMIT ?1"),
                [i64::from(limit)],
            )
            .await?;

        let mut employees = Vec::new();
        while let Some(row) = rows.next().await? {
            employees.push(row_to_employee(&row)?);
        }
        Ok(employees)
    }

    pub async fn create_employee(&mut self, new: NewEmployee) -> Result<Employee, DatabaseError> {
        let uow = self.begin().await?;
        let result = uow.create_employee(&new).await;
        uow.finish(result).await
    }

    pub async fn update_employee(
        &mut self,
        id: i64,
        update: EmployeeUpdate,
    ) -> Result<Employee, DatabaseError> {
        let uow = self.begin().await?;
        let result = uow.update_employee(id, update).await;
        uow.finish(result).await
    }

    pub async fn delete_employee(&mut self, id: i64) -> Result<Employee, DatabaseError> {
        let uow = self.begin().await?;
        let result = uow.delete_employee(id).await;
        uow.finish(result).await
    }
}

#[cfg(test)]
mod tests {
    use crate::error::DatabaseError;
    use crate::repos::audit::AuditFilter;
    use crate::test_support::helpers::*;
    use crate::updates::EmployeeUpdateBuilder;
    use cafe_core::entities::NewEmployee;
    use chrono::{TimeZone, Utc};
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn create_keeps_salary_exact() {
        let mut svc = test_service().await;
        let employee = seed_employee(&mut svc).await;
        assert_eq!(employee.salary, dec("45000.00"));
        assert_eq!(svc.get_employee(employee.id).await.unwrap(), employee);
    }

    #[tokio::test]
    async fn explicit_hire_date_is_kept() {
        let mut svc = test_service().await;
        let hired = Utc.with_ymd_and_hms(2024, 5, 1, 8, 0, 0).unwrap();
        let employee = svc
            .create_employee(NewEmployee {
                full_name: "Olga".into(),
                role: "administrator".into(),
                phone: String::new(),
                salary: dec("60000"),
                hire_date: Some(hired),
            })
            .await
            .unwrap();
        assert_eq!(employee.hire_date, hired);
    }

    #[tokio::test]
    async fn employee_writes_are_not_monitored() {
        let mut svc = test_service().await;
        let employee = seed_employee(&mut svc).await;
        svc.update_employee(employee.id, EmployeeUpdateBuilder::new().role("waiter").build())
            .await
            .unwrap();
        assert!(svc.list_audit_log(&AuditFilter::default()).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn negative_salary_is_rejected() {
        let mut svc = test_service().await;
        let employee = seed_employee(&mut svc).await;
        let result = svc
            .update_employee(employee.id, EmployeeUpdateBuilder::new().salary(dec("-1")).build())
            .await;
        assert!(matches!(result, Err(DatabaseError::Validation(_))));
    }

    #[tokio::test]
    async fn employee_with_orders_cannot_be_deleted() {
        let mut svc = test_service().await;
        let employee = seed_employee(&mut svc).await;
        let latte = seed_menu_item(&mut svc, "Latte", "3.50").await;
        seed_order(&mut svc, employee.id, None, &[(latte.id, 1)]).await;

        let result = svc.delete_employee(employee.id).await;
        assert!(matches!(result, Err(DatabaseError::Integrity(_))));
        assert!(svc.get_employee(employee.id).await.is_ok());
    }
}
