use clap::{Args, Subcommand};

use crate::cli::subcommands::{
    CustomerCommands, EmployeeCommands, IngredientCommands, LineCommands, MenuCommands,
    OrderCommands, RecipeCommands, ReportCommands, SupplierCommands,
};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Customers.
    Customer {
        #[command(subcommand)]
        action: CustomerCommands,
    },
    /// Employees.
    Employee {
        #[command(subcommand)]
        action: EmployeeCommands,
    },
    /// Ingredient suppliers.
    Supplier {
        #[command(subcommand)]
        action: SupplierCommands,
    },
    /// Stock ingredients.
    Ingredient {
        #[command(subcommand)]
        action: IngredientCommands,
    },
    /// Menu items.
    Menu {
        #[command(subcommand)]
        action: MenuCommands,
    },
    /// Recipe rows linking menu items to ingredients.
    Recipe {
        #[command(subcommand)]
        action: RecipeCommands,
    },
    /// Orders.
    Order {
        #[command(subcommand)]
        action: OrderCommands,
    },
    /// Order line items.
    Line {
        #[command(subcommand)]
        action: LineCommands,
    },
    /// Show the audit log, newest first.
    Log(LogArgs),
    /// Read-only reports.
    Report {
        #[command(subcommand)]
        action: ReportCommands,
    },
}

/// Arguments for `cafe log`.
#[derive(Clone, Debug, Args)]
pub struct LogArgs {
    /// Entity table name, e.g. customers or menu_items.
    #[arg(long)]
    pub entity: Option<String>,
    #[arg(long)]
    pub entity_id: Option<i64>,
    /// INSERT, UPDATE or DELETE (case-insensitive).
    #[arg(long)]
    pub action: Option<String>,
}
