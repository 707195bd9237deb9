use cafe_core::entities::NewMenuItem;
use cafe_db::updates::MenuItemUpdateBuilder;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::MenuCommands;
use crate::commands::shared::update::require_any_field;
use crate::context::AppContext;
use crate::output::output;

/// Handle `cafe menu`.
pub async fn handle(
    action: &MenuCommands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        MenuCommands::Create {
            name,
            kind,
            price,
            volume,
        } => {
            let item = ctx
                .service
                .create_menu_item(NewMenuItem {
                    name: name.clone(),
                    kind: kind.clone(),
                    selling_price: *price,
                    volume_or_weight: volume.clone(),
                })
                .await?;
            output(&item, flags.format)
        }
        MenuCommands::Update {
            id,
            name,
            kind,
            price,
            volume,
        } => {
            require_any_field(
                &[
                    name.is_some(),
                    kind.is_some(),
                    price.is_some(),
                    volume.is_some(),
                ],
                "--name, --kind, --price, or --volume",
            )?;

            let mut builder = MenuItemUpdateBuilder::new();
            if let Some(name) = name {
                builder = builder.name(name);
            }
            if let Some(kind) = kind {
                builder = builder.kind(kind);
            }
            if let Some(price) = price {
                builder = builder.selling_price(*price);
            }
            if let Some(volume) = volume {
                builder = builder.volume_or_weight(volume);
            }

            let item = ctx.service.update_menu_item(*id, builder.build()).await?;
            output(&item, flags.format)
        }
        MenuCommands::List => {
            let items = ctx.service.list_menu_items(ctx.limit(flags.limit)).await?;
            output(&items, flags.format)
        }
        MenuCommands::Get { id } => output(&ctx.service.get_menu_item(*id).await?, flags.format),
        MenuCommands::Delete { id } => {
            output(&ctx.service.delete_menu_item(*id).await?, flags.format)
        }
    }
}
