use chrono::{DateTime, Utc};
use clap::Subcommand;
use rust_decimal::Decimal;

/// Employee commands.
#[derive(Clone, Debug, Subcommand)]
pub enum EmployeeCommands {
    /// Hire an employee.
    Create {
        #[arg(long)]
        name: String,
        #[arg(long)]
        role: String,
        #[arg(long, default_value = "")]
        phone: String,
        #[arg(long)]
        salary: Decimal,
        /// RFC 3339 timestamp; defaults to now.
        #[arg(long)]
        hire_date: Option<DateTime<Utc>>,
    },
    /// Update an employee.
    Update {
        id: i64,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        role: Option<String>,
        #[arg(long)]
        phone: Option<String>,
        #[arg(long)]
        salary: Option<Decimal>,
        #[arg(long)]
        hire_date: Option<DateTime<Utc>>,
    },
    /// List employees.
    List,
    /// Get an employee by ID.
    Get { id: i64 },
    /// Delete an employee without orders.
    Delete { id: i64 },
}
