use chrono::{DateTime, Utc};
use clap::Subcommand;

/// Order commands.
#[derive(Clone, Debug, Subcommand)]
pub enum OrderCommands {
    /// Create an order from a cart.
    Create {
        #[arg(long)]
        employee: i64,
        #[arg(long)]
        customer: Option<i64>,
        /// dine-in or takeaway
        #[arg(long = "type", default_value = "dine-in")]
        order_type: String,
        /// card or cash
        #[arg(long, default_value = "card")]
        payment: String,
        #[arg(long)]
        date: Option<DateTime<Utc>>,
        /// Cart line as MENU_ITEM:QTY or MENU_ITEM:QTY@PRICE (repeatable).
        #[arg(long = "item", required = true)]
        items: Vec<String>,
    },
    /// Update order header fields.
    Update {
        id: i64,
        #[arg(long)]
        employee: Option<i64>,
        #[arg(long, conflicts_with = "no_customer")]
        customer: Option<i64>,
        /// Detach the order from its customer.
        #[arg(long)]
        no_customer: bool,
        #[arg(long = "type")]
        order_type: Option<String>,
        #[arg(long)]
        payment: Option<String>,
        #[arg(long)]
        date: Option<DateTime<Utc>>,
    },
    /// Move an order to the next status (new, ready, paid, cancelled).
    Status { id: i64, status: String },
    /// Replace every line of an order with a new cart.
    Edit {
        id: i64,
        #[arg(long = "item", required = true)]
        items: Vec<String>,
    },
    /// List orders, newest first.
    List {
        #[arg(long)]
        status: Option<String>,
        #[arg(long)]
        customer: Option<i64>,
        #[arg(long)]
        employee: Option<i64>,
    },
    /// Get an order with its lines.
    Get { id: i64 },
    /// Delete an order and its lines.
    Delete { id: i64 },
}
