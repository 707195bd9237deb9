use clap::Subcommand;

/// Recipe commands.
#[derive(Clone, Debug, Subcommand)]
pub enum RecipeCommands {
    /// Add an ingredient to a menu item's recipe.
    Create {
        #[arg(long)]
        menu_item: i64,
        #[arg(long)]
        ingredient: i64,
        #[arg(long)]
        quantity: f64,
        #[arg(long)]
        unit: String,
    },
    /// Update a recipe row.
    Update {
        id: i64,
        #[arg(long)]
        ingredient: Option<i64>,
        #[arg(long)]
        quantity: Option<f64>,
        #[arg(long)]
        unit: Option<String>,
    },
    /// List recipe rows.
    List {
        #[arg(long)]
        menu_item: Option<i64>,
    },
    /// Get a recipe row by ID.
    Get { id: i64 },
    /// Delete a recipe row.
    Delete { id: i64 },
}
