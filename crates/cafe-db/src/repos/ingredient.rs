//! Ingredient repository: stock items bought from suppliers.

use cafe_core::entities::{Ingredient, NewIngredient};
use cafe_core::enums::AuditAction;
use cafe_core::money;

use crate::error::DatabaseError;
use crate::helpers::{execute_write, get_money, insert_returning_id, to_cents};
use crate::service::CafeService;
use crate::unit_of_work::UnitOfWork;
use crate::updates::SetClauses;
use crate::updates::ingredient::IngredientUpdate;

const COLUMNS: &str =
    "id, name, unit, stock_quantity, min_stock_level, purchase_price_cents, supplier_id";

fn row_to_ingredient(row: &libsql::Row) -> Result<Ingredient, DatabaseError> {
    Ok(Ingredient {
        id: row.get::<i64>(0)?,
        name: row.get::<String>(1)?,
        unit: row.get::<String>(2)?,
        stock_quantity: row.get::<f64>(3)?,
        min_stock_level: row.get::<f64>(4)?,
        purchase_price: get_money(row, 5)?,
        supplier_id: row.get::<i64>(6)?,
    })
}

pub(crate) async fn fetch_ingredient(
    conn: &libsql::Connection,
    id: i64,
) -> Result<Ingredient, DatabaseError> {
    let mut rows = conn
        .query(
            &format!("SELECT {COLUMNS} FROM ingredients WHERE id = ?1"),
            [id],
        )
        .await?;
    let row = rows.next().await?.ok_or(DatabaseError::NotFound {
        entity: "ingredients",
        id,
    })?;
    row_to_ingredient(&row)
}

fn validate_stock(value: f64, field: &str) -> Result<(), DatabaseError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(DatabaseError::Validation(format!(
            "{field} must be a non-negative number, got {value}"
        )))
    }
}

impl UnitOfWork<'_> {
    pub async fn create_ingredient(
        &self,
        new: &NewIngredient,
    ) -> Result<Ingredient, DatabaseError> {
        validate_stock(new.stock_quantity, "stock_quantity")?;
        validate_stock(new.min_stock_level, "min_stock_level")?;
        money::validate_amount(new.purchase_price, "purchase_price")?;

        let id = insert_returning_id(
            self.conn(),
            "INSERT INTO ingredients (name, unit, stock_quantity, min_stock_level, purchase_price_cents, supplier_id)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6) RETURNING id",
            libsql::params![
                new.name.as_str(),
                new.unit.as_str(),
                new.stock_quantity,
                new.min_stock_level,
                to_cents(new.purchase_price, self.rounding())?,
                new.supplier_id
            ],
        )
        .await?;

        let ingredient = fetch_ingredient(self.conn(), id).await?;
        self.audit(AuditAction::Insert, &ingredient).await?;
        Ok(ingredient)
    }

    pub async fn update_ingredient(
        &self,
        id: i64,
        update: IngredientUpdate,
    ) -> Result<Ingredient, DatabaseError> {
        let mut sets = SetClauses::default();

        if let Some(name) = update.name {
            sets.push("name", name);
        }
        if let Some(unit) = update.unit {
            sets.push("unit", unit);
        }
        if let Some(stock) = update.stock_quantity {
            validate_stock(stock, "stock_quantity")?;
            sets.push("stock_quantity", stock);
        }
        if let Some(min) = update.min_stock_level {
            validate_stock(min, "min_stock_level")?;
            sets.push("min_stock_level", min);
        }
        if let Some(price) = update.purchase_price {
            money::validate_amount(price, "purchase_price")?;
            sets.push("purchase_price_cents", to_cents(price, self.rounding())?);
        }
        if let Some(supplier_id) = update.supplier_id {
            sets.push("supplier_id", supplier_id);
        }

        if sets.is_empty() {
            return fetch_ingredient(self.conn(), id).await;
        }

        let (sql, params) = sets.into_statement("ingredients", id);
        let affected = execute_write(self.conn(), &sql, libsql::params_from_iter(params)).await?;
        if affected == 0 {
            return Err(DatabaseError::NotFound {
                entity: "ingredients",
                id,
            });
        }

        let ingredient = fetch_ingredient(self.conn(), id).await?;
        self.audit(AuditAction::Update, &ingredient).await?;
        Ok(ingredient)
    }

    /// Delete an ingredient. Rejected while recipes still use it.
    pub async fn delete_ingredient(&self, id: i64) -> Result<Ingredient, DatabaseError> {
        let ingredient = fetch_ingredient(self.conn(), id).await?;
        execute_write(self.conn(), "DELETE FROM ingredients WHERE id = ?1", [id]).await?;
        self.audit(AuditAction::Delete, &ingredient).await?;
        Ok(ingredient)
    }
}

impl CafeService {
    pub async fn get_ingredient(&self, id: i64) -> Result<Ingredient, DatabaseError> {
        fetch_ingredient(self.db().conn(), id).await
    }

    pub async fn list_ingredients(&self, limit: u32) -> Result<Vec<Ingredient>, DatabaseError> {
        self.query_ingredients(
            &format!("SELECT {COLUMNS} FROM ingredients ORDER BY name, id LIMIT ?1"),
            limit,
        )
        .await
    }

    /// Ingredients whose stock is below their reorder threshold.
    pub async fn list_low_stock(&self, limit: u32) -> Result<Vec<Ingredient>, DatabaseError> {
        self.query_ingredients(
            &format!(
                "SELECT {COLUMNS} FROM ingredients
                 WHERE stock_quantity < min_stock_level
                 ORDER BY name, id LIMIT ?1"
            ),
            limit,
        )
        .await
    }

    async fn query_ingredients(
        &self,
        sql: &str,
        limit: u32,
    ) -> Result<Vec<Ingredient>, DatabaseError> {
        let mut rows = self.db().conn().query(sql, [i64::from(limit)]).await?;
        let mut ingredients = Vec::new();
        while let Some(row) = rows.next().await? {
            ingredients.push(row_to_ingredient(&row)?);
        }
        Ok(ingredients)
    }

    pub async fn create_ingredient(
        &mut self,
        new: NewIngredient,
    ) -> Result<Ingredient, DatabaseError> {
        let uow = self.begin().await?;
        let result = uow.create_ingredient(&new).await;
        uow.finish(result).await
    }

    pub async fn update_ingredient(
        &mut self,
        id: i64,
        update: IngredientUpdate,
    ) -> Result<Ingredient, DatabaseError> {
        let uow = self.begin().await?;
        let result = uow.update_ingredient(id, update).await;
        uow.finish(result).await
    }

    pub async fn delete_ingredient(&mut self, id: i64) -> Result<Ingredient, DatabaseError> {
        let uow = self.begin().await?;
        let result = uow.delete_ingredient(id).await;
        uow.finish(result).await
    }
}
