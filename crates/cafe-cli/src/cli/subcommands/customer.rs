use clap::Subcommand;

/// Customer commands.
#[derive(Clone, Debug, Subcommand)]
pub enum CustomerCommands {
    /// Register a customer.
    Create {
        #[arg(long)]
        name: String,
        #[arg(long, default_value = "")]
        phone: String,
        #[arg(long)]
        email: String,
    },
    /// Update a customer. Every update is written to the audit log.
    Update {
        id: i64,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        phone: Option<String>,
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        loyalty: Option<String>,
        #[arg(long)]
        discount: Option<f64>,
    },
    /// List customers.
    List,
    /// Get a customer by ID.
    Get { id: i64 },
    /// Delete a customer and their orders.
    Delete { id: i64 },
}
