mod create;
mod list;
mod update;

use cafe_core::entities::{LineItem, Order};
use cafe_core::enums::OrderStatus;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::OrderCommands;
use crate::commands::shared::parse::{parse_cart, parse_enum};
use crate::context::AppContext;
use crate::output::output;

/// An order together with its current lines.
#[derive(Debug, Serialize)]
struct OrderDetailResponse {
    order: Order,
    lines: Vec<LineItem>,
}

/// Handle `cafe order`.
pub async fn handle(
    action: &OrderCommands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        OrderCommands::Create {
            employee,
            customer,
            order_type,
            payment,
            date,
            items,
        } => {
            create::run(
                create::Params {
                    employee: *employee,
                    customer: *customer,
                    order_type: order_type.as_str(),
                    payment: payment.as_str(),
                    date: *date,
                    items: items.as_slice(),
                },
                ctx,
                flags,
            )
            .await
        }
        OrderCommands::Update {
            id,
            employee,
            customer,
            no_customer,
            order_type,
            payment,
            date,
        } => {
            update::run(
                update::Params {
                    id: *id,
                    employee: *employee,
                    customer: *customer,
                    no_customer: *no_customer,
                    order_type: order_type.as_deref(),
                    payment: payment.as_deref(),
                    date: *date,
                },
                ctx,
                flags,
            )
            .await
        }
        OrderCommands::Status { id, status } => {
            let next = parse_enum::<OrderStatus>(status, "status")?;
            let order = ctx.service.change_order_status(*id, next).await?;
            output(&order, flags.format)
        }
        OrderCommands::Edit { id, items } => {
            let cart = parse_cart(items)?;
            let lines = ctx.service.replace_line_items(*id, cart).await?;
            let order = ctx.service.get_order(*id).await?;
            output(&OrderDetailResponse { order, lines }, flags.format)
        }
        OrderCommands::List {
            status,
            customer,
            employee,
        } => list::run(status.as_deref(), *customer, *employee, ctx, flags).await,
        OrderCommands::Get { id } => {
            let order = ctx.service.get_order(*id).await?;
            let lines = ctx.service.list_line_items(*id).await?;
            output(&OrderDetailResponse { order, lines }, flags.format)
        }
        OrderCommands::Delete { id } => output(&ctx.service.delete_order(*id).await?, flags.format),
    }
}
