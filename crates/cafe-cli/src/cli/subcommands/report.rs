use clap::Subcommand;

/// Report commands.
#[derive(Clone, Debug, Subcommand)]
pub enum ReportCommands {
    /// Orders, items and revenue per day.
    SalesByDay,
    /// Best-selling menu items by revenue.
    TopItems,
    /// Orders, spend and average check per customer.
    CustomerValue,
    /// Orders and revenue per employee.
    EmployeePerformance,
    /// Revenue, cost of goods, payroll and net profit.
    ProfitAndLoss,
    /// Orders and revenue per hour of day.
    HourlyLoad,
}
