use cafe_core::entities::{LineItem, NewLineItem, Order};
use cafe_db::updates::LineItemUpdateBuilder;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::LineCommands;
use crate::commands::shared::update::require_any_field;
use crate::context::AppContext;
use crate::output::output;

/// A changed line and the order total it produced.
#[derive(Debug, Serialize)]
struct LineChangeResponse {
    line: LineItem,
    order: Order,
}

/// Handle `cafe line`.
pub async fn handle(
    action: &LineCommands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let line = match action {
        LineCommands::Add {
            order,
            menu_item,
            quantity,
            price,
        } => {
            ctx.service
                .add_line_item(NewLineItem {
                    order_id: *order,
                    menu_item_id: *menu_item,
                    quantity: *quantity,
                    price_at_sale: *price,
                })
                .await?
        }
        LineCommands::Update {
            id,
            quantity,
            price,
        } => {
            require_any_field(
                &[quantity.is_some(), price.is_some()],
                "--quantity or --price",
            )?;

            let mut builder = LineItemUpdateBuilder::new();
            if let Some(quantity) = quantity {
                builder = builder.quantity(*quantity);
            }
            if let Some(price) = price {
                builder = builder.price_at_sale(*price);
            }
            ctx.service.update_line_item(*id, builder.build()).await?
        }
        LineCommands::Delete { id } => ctx.service.delete_line_item(*id).await?,
        LineCommands::List { order } => {
            let lines = ctx.service.list_line_items(*order).await?;
            return output(&lines, flags.format);
        }
    };

    let order = ctx.service.get_order(line.order_id).await?;
    output(&LineChangeResponse { line, order }, flags.format)
}
