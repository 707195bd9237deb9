use clap::Subcommand;
use rust_decimal::Decimal;

/// Ingredient commands.
#[derive(Clone, Debug, Subcommand)]
pub enum IngredientCommands {
    /// Add an ingredient.
    Create {
        #[arg(long)]
        name: String,
        #[arg(long)]
        unit: String,
        #[arg(long, default_value_t = 0.0)]
        stock: f64,
        #[arg(long, default_value_t = 0.0)]
        min_stock: f64,
        #[arg(long)]
        price: Decimal,
        #[arg(long)]
        supplier: i64,
    },
    /// Update an ingredient.
    Update {
        id: i64,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        unit: Option<String>,
        #[arg(long)]
        stock: Option<f64>,
        #[arg(long)]
        min_stock: Option<f64>,
        #[arg(long)]
        price: Option<Decimal>,
        #[arg(long)]
        supplier: Option<i64>,
    },
    /// List ingredients.
    List {
        /// Only ingredients at or below their minimum stock level.
        #[arg(long)]
        low_stock: bool,
    },
    /// Get an ingredient by ID.
    Get { id: i64 },
    /// Delete an ingredient not used by any recipe.
    Delete { id: i64 },
}
