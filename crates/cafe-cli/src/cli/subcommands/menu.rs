use clap::Subcommand;
use rust_decimal::Decimal;

/// Menu item commands.
#[derive(Clone, Debug, Subcommand)]
pub enum MenuCommands {
    /// Add a menu item.
    Create {
        #[arg(long)]
        name: String,
        /// Free-form category, e.g. drink or dessert.
        #[arg(long)]
        kind: String,
        #[arg(long)]
        price: Decimal,
        #[arg(long, default_value = "")]
        volume: String,
    },
    /// Update a menu item.
    Update {
        id: i64,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        kind: Option<String>,
        #[arg(long)]
        price: Option<Decimal>,
        #[arg(long)]
        volume: Option<String>,
    },
    /// List menu items.
    List,
    /// Get a menu item by ID.
    Get { id: i64 },
    /// Delete an unreferenced menu item. Deletions are written to the audit log.
    Delete { id: i64 },
}
