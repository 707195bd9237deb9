use cafe_core::enums::OrderStatus;
use cafe_db::repos::order::OrderFilter;

use crate::cli::GlobalFlags;
use crate::commands::shared::parse::parse_enum;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(
    status: Option<&str>,
    customer: Option<i64>,
    employee: Option<i64>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let filter = OrderFilter {
        status: status
            .map(|value| parse_enum::<OrderStatus>(value, "status"))
            .transpose()?,
        customer_id: customer,
        employee_id: employee,
        limit: Some(ctx.limit(flags.limit)),
    };
    let orders = ctx.service.list_orders(&filter).await?;
    output(&orders, flags.format)
}
