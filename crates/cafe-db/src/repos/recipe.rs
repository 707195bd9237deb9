//! Recipe repository: ingredient quantities per menu item.

use cafe_core::entities::{NewRecipe, Recipe};
use cafe_core::enums::AuditAction;

use crate::error::DatabaseError;
use crate::helpers::{execute_write, insert_returning_id};
use crate::service::CafeService;
use crate::unit_of_work::UnitOfWork;
use crate::updates::SetClauses;
use crate::updates::recipe::RecipeUpdate;

const COLUMNS: &str = "id, menu_item_id, ingredient_id, quantity_required, unit";

fn row_to_recipe(row: &libsql::Row) -> Result<Recipe, DatabaseError> {
    Ok(Recipe {
        id: row.get::<i64>(0)?,
        menu_item_id: row.get::<i64>(1)?,
        ingredient_id: row.get::<i64>(2)?,
        quantity_required: row.get::<f64>(3)?,
        unit: row.get::<String>(4)?,
    })
}

pub(crate) async fn fetch_recipe(
    conn: &libsql::Connection,
    id: i64,
) -> Result<Recipe, DatabaseError> {
    let mut rows = conn
        .query(&format!("SELECT {COLUMNS} FROM recipes WHERE id = ?1"), [id])
        .await?;
    let row = rows.next().await?.ok_or(DatabaseError::NotFound {
        entity: "recipes",
        id,
    })?;
    row_to_recipe(&row)
}

fn validate_quantity_required(quantity: f64) -> Result<(), DatabaseError> {
    if quantity.is_finite() && quantity > 0.0 {
        Ok(())
    } else {
        Err(DatabaseError::Validation(format!(
            "quantity_required must be positive, got {quantity}"
        )))
    }
}

impl UnitOfWork<'_> {
    pub async fn create_recipe(&self, new: &NewRecipe) -> Result<Recipe, DatabaseError> {
        validate_quantity_required(new.quantity_required)?;

        let id = insert_returning_id(
            self.conn(),
            "INSERT INTO recipes (menu_item_id, ingredient_id, quantity_required, unit)
             VALUES (?1, ?2, ?3, ?4) RETURNING id",
            libsql::params![
                new.menu_item_id,
                new.ingredient_id,
                new.quantity_required,
                new.unit.as_str()
            ],
        )
        .await?;

        let recipe = fetch_recipe(self.conn(), id).await?;
        self.audit(AuditAction::Insert, &recipe).await?;
        Ok(recipe)
    }

    pub async fn update_recipe(
        &self,
        id: i64,
        update: RecipeUpdate,
    ) -> Result<Recipe, DatabaseError> {
        let mut sets = SetClauses::default();

        if let Some(ingredient_id) = update.ingredient_id {
            sets.push("ingredient_id", ingredient_id);
        }
        if let Some(quantity) = update.quantity_required {
            validate_quantity_required(quantity)?;
            sets.push("quantity_required", quantity);
        }
        if let Some(unit) = update.unit {
            sets.push("unit", unit);
        }

        if sets.is_empty() {
            return fetch_recipe(self.conn(), id).await;
        }

        let (sql, params) = sets.into_statement("recipes", id);
        let affected = execute_write(self.conn(), &sql, libsql::params_from_iter(params)).await?;
        if affected == 0 {
            return Err(DatabaseError::NotFound {
                entity: "recipes",
                id,
            });
        }

        let recipe = fetch_recipe(self.conn(), id).await?;
        self.audit(AuditAction::Update, &recipe).await?;
        Ok(recipe)
    }

    pub async fn delete_recipe(&self, id: i64) -> Result<Recipe, DatabaseError> {
        let recipe = fetch_recipe(self.conn(), id).await?;
        execute_write(self.conn(), "DELETE FROM recipes WHERE id = ?1", [id]).await?;
        self.audit(AuditAction::Delete, &recipe).await?;
        Ok(recipe)
    }
}

impl CafeService {
    pub async fn get_recipe(&self, id: i64) -> Result<Recipe, DatabaseError> {
        fetch_recipe(self.db().conn(), id).await
    }

    /// Recipes, optionally restricted to one menu item.
    pub async fn list_recipes(
        &self,
        menu_item_id: Option<i64>,
        limit: u32,
    ) -> Result<Vec<Recipe>, DatabaseError> {
        let mut rows = match menu_item_id {
            Some(menu_item_id) => {
                self.db()
                    .conn()
                    .query(
                        &format!(
                            "SELECT {COLUMNS} FROM recipes WHERE menu_item_id = ?1 ORDER BY id LIMIT ?2"
                        ),
                        libsql::params![menu_item_id, i64::from(limit)],
                    )
                    .await?
            }
            None => {
                self.db()
                    .conn()
                    .query(
                        &format!("SELECT {COLUMNS} FROM recipes ORDER BY menu_item_id, id LIMIT ?1"),
                        [i64::from(limit)],
                    )
                    .await?
            }
        };

        let mut recipes = Vec::new();
        while let Some(row) = rows.next().await? {
            recipes.push(row_to_recipe(&row)?);
        }
        Ok(recipes)
    }

    pub async fn create_recipe(&mut self, new: NewRecipe) -> Result<Recipe, DatabaseError> {
        let uow = self.begin().await?;
        let result = uow.create_recipe(&new).await;
        uow.finish(result).await
    }

    pub async fn update_recipe(
        &mut self,
        id: i64,
        update: RecipeUpdate,
    ) -> Result<Recipe, DatabaseError> {
        let uow = self.begin().await?;
        let result = uow.update_recipe(id, update).await;
        uow.finish(result).await
    }

    pub async fn delete_recipe(&mut self, id: i64) -> Result<Recipe, DatabaseError> {
        let uow = self.begin().await?;
        let result = uow.delete_recipe(id).await;
        uow.finish(result).await
    }
}
