use cafe_core::enums::{OrderType, PaymentMethod};
use cafe_db::updates::{OrderUpdate, OrderUpdateBuilder};
use chrono::{DateTime, Utc};

use crate::cli::GlobalFlags;
use crate::commands::shared::parse::parse_enum;
use crate::commands::shared::update::require_any_field;
use crate::context::AppContext;
use crate::output::output;

pub struct Params<'a> {
    pub id: i64,
    pub employee: Option<i64>,
    pub customer: Option<i64>,
    pub no_customer: bool,
    pub order_type: Option<&'a str>,
    pub payment: Option<&'a str>,
    pub date: Option<DateTime<Utc>>,
}

pub async fn run(params: Params<'_>, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let update = build_update(&params)?;
    let order = ctx.service.update_order(params.id, update).await?;
    output(&order, flags.format)
}

fn build_update(params: &Params<'_>) -> anyhow::Result<OrderUpdate> {
    require_any_field(
        &[
            params.employee.is_some(),
            params.customer.is_some(),
            params.no_customer,
            params.order_type.is_some(),
            params.payment.is_some(),
            params.date.is_some(),
        ],
        "--employee, --customer, --no-customer, --type, --payment, or --date",
    )?;

    let mut builder = OrderUpdateBuilder::new();
    if let Some(employee) = params.employee {
        builder = builder.employee_id(employee);
    }
    if params.no_customer {
        builder = builder.customer_id(None);
    } else if let Some(customer) = params.customer {
        builder = builder.customer_id(Some(customer));
    }
    if let Some(order_type) = params.order_type {
        builder = builder.order_type(parse_enum::<OrderType>(order_type, "order type")?);
    }
    if let Some(payment) = params.payment {
        builder = builder.payment_method(parse_enum::<PaymentMethod>(payment, "payment method")?);
    }
    if let Some(date) = params.date {
        builder = builder.order_date(date);
    }
    Ok(builder.build())
}
