use crate::cli::GlobalFlags;
use crate::cli::subcommands::ReportCommands;
use crate::context::AppContext;
use crate::output::output;

/// Handle `cafe report`.
pub async fn handle(
    action: &ReportCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let service = &ctx.service;
    match action {
        ReportCommands::SalesByDay => output(&service.sales_by_day().await?, flags.format),
        ReportCommands::TopItems => {
            let limit = ctx.limit(flags.limit);
            output(&service.top_menu_items(limit).await?, flags.format)
        }
        ReportCommands::CustomerValue => {
            output(&service.customer_lifetime_value().await?, flags.format)
        }
        ReportCommands::EmployeePerformance => {
            output(&service.employee_performance().await?, flags.format)
        }
        ReportCommands::ProfitAndLoss => output(&service.profit_and_loss().await?, flags.format),
        ReportCommands::HourlyLoad => output(&service.hourly_load().await?, flags.format),
    }
}
