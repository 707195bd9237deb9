use clap::Subcommand;

/// Supplier commands.
#[derive(Clone, Debug, Subcommand)]
pub enum SupplierCommands {
    /// Add a supplier.
    Create {
        #[arg(long)]
        name: String,
        #[arg(long, default_value = "")]
        phone: String,
        #[arg(long, default_value = "")]
        email: String,
        #[arg(long, default_value = "")]
        address: String,
    },
    /// Update a supplier.
    Update {
        id: i64,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        phone: Option<String>,
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        address: Option<String>,
    },
    /// List suppliers.
    List,
    /// Get a supplier by ID.
    Get { id: i64 },
    /// Delete a supplier with no ingredients.
    Delete { id: i64 },
}
