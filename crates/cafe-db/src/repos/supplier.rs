//! Supplier repository.

use cafe_core::entities::{NewSupplier, Supplier};
use cafe_core::enums::AuditAction;
use cafe_core::phone;

use crate::error::DatabaseError;
use crate::helpers::{execute_write, insert_returning_id};
use crate::service::CafeService;
use crate::unit_of_work::UnitOfWork;
use crate::updates::SetClauses;
use crate::updates::supplier::SupplierUpdate;

const COLUMNS: &str = "id, name, phone, email, address";

fn row_to_supplier(row: &libsql::Row) -> Result<Supplier, DatabaseError> {
    Ok(Supplier {
        id: row.get::<i64>(0)?,
        name: row.get::<String>(1)?,
        phone: row.get::<String>(2)?,
        email: row.get::<String>(3)?,
        address: row.get::<String>(4)?,
    })
}

pub(crate) async fn fetch_supplier(
    conn: &libsql::Connection,
    id: i64,
) -> Result<Supplier, DatabaseError> {
    let mut rows = conn
        .query(
            &format!("SELECT {COLUMNS} FROM suppliers WHERE id = ?1"),
            [id],
        )
        .await?;
    let row = rows.next().await?.ok_or(DatabaseError::NotFound {
        entity: "suppliers",
        id,
    })?;
    row_to_supplier(&row)
}

impl UnitOfWork<'_> {
    pub async fn create_supplier(&self, new: &NewSupplier) -> Result<Supplier, DatabaseError> {
        phone::validate(&new.phone)?;

        let id = insert_returning_id(
            self.conn(),
            "INSERT INTO suppliers (name, phone, email, address) VALUES (?1, ?2, ?3, ?4) RETURNING id",
            libsql::params![
                new.name.as_str(),
                new.phone.as_str(),
                new.email.as_str(),
                new.address.as_str()
            ],
        )
        .await?;

        let supplier = fetch_supplier(self.conn(), id).await?;
        self.audit(AuditAction::Insert, &supplier).await?;
        Ok(supplier)
    }

    pub async fn update_supplier(
        &self,
        id: i64,
        update: SupplierUpdate,
    ) -> Result<Supplier, DatabaseError> {
        let mut sets = SetClauses::default();

        if let Some(name) = update.name {
            sets.push("name", name);
        }
        if let Some(phone) = update.phone {
            phone::validate(&phone)?;
            sets.push("phone", phone);
        }
        if let Some(email) = update.email {
            sets.push("email", email);
        }
        if let Some(address) = update.address {
            sets.push("address", address);
        }

        if sets.is_empty() {
            return fetch_supplier(self.conn(), id).await;
        }

        let (sql, params) = sets.into_statement("suppliers", id);
        let affected = execute_write(self.conn(), &sql, libsql::params_from_iter(params)).await?;
        if affected == 0 {
            return Err(DatabaseError::NotFound {
                entity: "suppliers",
                id,
            });
        }

        let supplier = fetch_supplier(self.conn(), id).await?;
        self.audit(AuditAction::Update, &supplier).await?;
        Ok(supplier)
    }

    /// Delete a supplier. Rejected while ingredients still reference it.
    pub async fn delete_supplier(&self, id: i64) -> Result<Supplier, DatabaseError> {
        let supplier = fetch_supplier(self.conn(), id).await?;
        execute_write(self.conn(), "DELETE FROM suppliers WHERE id = ?1", [id]).await?;
        self.audit(AuditAction::Delete, &supplier).await?;
        Ok(supplier)
    }
}

impl CafeService {
    pub async fn get_supplier(&self, id: i64) -> Result<Supplier, DatabaseError> {
        fetch_supplier(self.db().conn(), id).await
    }

    pub async fn list_suppliers(&self, limit: u32) -> Result<Vec<Supplier>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {COLUMNS} FROM suppliers ORDER BY name, id LIMIT ?1"),
                [i64::from(limit)],
            )
            .await?;

        let mut suppliers = Vec::new();
        while let Some(row) = rows.next().await? {
            suppliers.push(row_to_supplier(&row)?);
        }
        Ok(suppliers)
    }

    pub async fn create_supplier(&mut self, new: NewSupplier) -> Result<Supplier, DatabaseError> {
        let uow = self.begin().await?;
        let result = uow.create_supplier(&new).await;
        uow.finish(result).await
    }

    pub async fn update_supplier(
        &mut self,
        id: i64,
        update: SupplierUpdate,
    ) -> Result<Supplier, DatabaseError> {
        let uow = self.begin().await?;
        let result = uow.update_supplier(id, update).await;
        uow.finish(result).await
    }

    pub async fn delete_supplier(&mut self, id: i64) -> Result<Supplier, DatabaseError> {
        let uow = self.begin().await?;
        let result = uow.delete_supplier(id).await;
        uow.finish(result).await
    }
}
