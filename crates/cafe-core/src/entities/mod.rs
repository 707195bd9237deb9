//! Entity structs for every stored record.
//!
//! Each entity maps to one table in the libSQL store. Monetary fields are
//! `Decimal` in memory (serialized as strings) and minor units on disk.
//! `New*` structs carry the caller-supplied fields for inserts.

mod audit;
mod customer;
mod employee;
mod ingredient;
mod menu_item;
mod order;
mod recipe;
mod supplier;

pub use audit::AuditEntry;
pub use customer::{Customer, NewCustomer};
pub use employee::{Employee, NewEmployee};
pub use ingredient::{Ingredient, NewIngredient};
pub use menu_item::{MenuItem, NewMenuItem};
pub use order::{CartLine, LineItem, NewLineItem, NewOrder, Order};
pub use recipe::{NewRecipe, Recipe};
pub use supplier::{NewSupplier, Supplier};
