use clap::Subcommand;
use rust_decimal::Decimal;

/// Line item commands. Each one recomputes the order total.
#[derive(Clone, Debug, Subcommand)]
pub enum LineCommands {
    /// Add a line to an order.
    Add {
        #[arg(long)]
        order: i64,
        #[arg(long)]
        menu_item: i64,
        #[arg(long, default_value_t = 1)]
        quantity: i64,
        /// Price override; defaults to the menu item's selling price.
        #[arg(long)]
        price: Option<Decimal>,
    },
    /// Update a line's quantity or price.
    Update {
        id: i64,
        #[arg(long)]
        quantity: Option<i64>,
        #[arg(long)]
        price: Option<Decimal>,
    },
    /// Remove a line.
    Delete { id: i64 },
    /// List the lines of an order.
    List {
        #[arg(long)]
        order: i64,
    },
}
