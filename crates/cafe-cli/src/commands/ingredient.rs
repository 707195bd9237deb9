use cafe_core::entities::NewIngredient;
use cafe_db::updates::IngredientUpdateBuilder;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::IngredientCommands;
use crate::commands::shared::update::require_any_field;
use crate::context::AppContext;
use crate::output::output;

/// Handle `cafe ingredient`.
pub async fn handle(
    action: &IngredientCommands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        IngredientCommands::Create {
            name,
            unit,
            stock,
            min_stock,
            price,
            supplier,
        } => {
            let ingredient = ctx
                .service
                .create_ingredient(NewIngredient {
                    name: name.clone(),
                    unit: unit.clone(),
                    stock_quantity: *stock,
                    min_stock_level: *min_stock,
                    purchase_price: *price,
                    supplier_id: *supplier,
                })
                .await?;
            output(&ingredient, flags.format)
        }
        IngredientCommands::Update {
            id,
            name,
            unit,
            stock,
            min_stock,
            price,
            supplier,
        } => {
            require_any_field(
                &[
                    name.is_some(),
                    unit.is_some(),
                    stock.is_some(),
                    min_stock.is_some(),
                    price.is_some(),
                    supplier.is_some(),
                ],
                "--name, --unit, --stock, --min-stock, --price, or --supplier",
            )?;

            let mut builder = IngredientUpdateBuilder::new();
            if let Some(name) = name {
                builder = builder.name(name);
            }
            if let Some(unit) = unit {
                builder = builder.unit(unit);
            }
            if let Some(stock) = stock {
                builder = builder.stock_quantity(*stock);
            }
            if let Some(min_stock) = min_stock {
                builder = builder.min_stock_level(*min_stock);
            }
            if let Some(price) = price {
                builder = builder.purchase_price(*price);
            }
            if let Some(supplier) = supplier {
                builder = builder.supplier_id(*supplier);
            }

            let ingredient = ctx.service.update_ingredient(*id, builder.build()).await?;
            output(&ingredient, flags.format)
        }
        IngredientCommands::List { low_stock } => {
            let limit = ctx.limit(flags.limit);
            let ingredients = if *low_stock {
                ctx.service.list_low_stock(limit).await?
            } else {
                ctx.service.list_ingredients(limit).await?
            };
            output(&ingredients, flags.format)
        }
        IngredientCommands::Get { id } => {
            output(&ctx.service.get_ingredient(*id).await?, flags.format)
        }
        IngredientCommands::Delete { id } => {
            output(&ctx.service.delete_ingredient(*id).await?, flags.format)
        }
    }
}
