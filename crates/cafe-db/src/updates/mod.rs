//! Update builder types for entity mutations.
//!
//! Each builder produces an update struct with `Option` fields. Only `Some`
//! fields generate SET clauses in the dynamic UPDATE SQL.

pub mod customer;
pub mod employee;
pub mod ingredient;
pub mod line_item;
pub mod menu_item;
pub mod order;
pub mod recipe;
pub mod supplier;

pub use customer::{CustomerUpdate, CustomerUpdateBuilder};
pub use employee::{EmployeeUpdate, EmployeeUpdateBuilder};
pub use ingredient::{IngredientUpdate, IngredientUpdateBuilder};
pub use line_item::{LineItemUpdate, LineItemUpdateBuilder};
pub use menu_item::{MenuItemUpdate, MenuItemUpdateBuilder};
pub use order::{OrderUpdate, OrderUpdateBuilder};
pub use recipe::{RecipeUpdate, RecipeUpdateBuilder};
pub use supplier::{SupplierUpdate, SupplierUpdateBuilder};

/// Accumulates `column = ?N` fragments and their positional params.
#[derive(Debug, Default)]
pub(crate) struct SetClauses {
    sets: Vec<String>,
    params: Vec<libsql::Value>,
}

impl SetClauses {
    pub(crate) fn push(&mut self, column: &str, value: impl Into<libsql::Value>) {
        self.params.push(value.into());
        self.sets.push(format!("{column} = ?{}", self.params.len()));
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }

    /// `UPDATE {table} SET ... WHERE id = ?N` plus its params.
    pub(crate) fn into_statement(mut self, table: &str, id: i64) -> (String, Vec<libsql::Value>) {
        self.params.push(id.into());
        let sql = format!(
            "UPDATE {table} SET {} WHERE id = ?{}",
            self.sets.join(", "),
            self.params.len()
        );
        (sql, self.params)
    }
}
