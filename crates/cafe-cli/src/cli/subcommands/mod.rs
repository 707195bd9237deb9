mod customer;
mod employee;
mod ingredient;
mod line;
mod menu;
mod order;
mod recipe;
mod report;
mod supplier;

pub use customer::CustomerCommands;
pub use employee::EmployeeCommands;
pub use ingredient::IngredientCommands;
pub use line::LineCommands;
pub use menu::MenuCommands;
pub use order::OrderCommands;
pub use recipe::RecipeCommands;
pub use report::ReportCommands;
pub use supplier::SupplierCommands;
