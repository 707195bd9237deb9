use cafe_core::entities::NewRecipe;
use cafe_db::updates::RecipeUpdateBuilder;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::RecipeCommands;
use crate::commands::shared::update::require_any_field;
use crate::context::AppContext;
use crate::output::output;

/// Handle `cafe recipe`.
pub async fn handle(
    action: &RecipeCommands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        RecipeCommands::Create {
            menu_item,
            ingredient,
            quantity,
            unit,
        } => {
            let recipe = ctx
                .service
                .create_recipe(NewRecipe {
                    menu_item_id: *menu_item,
                    ingredient_id: *ingredient,
                    quantity_required: *quantity,
                    unit: unit.clone(),
                })
                .await?;
            output(&recipe, flags.format)
        }
        RecipeCommands::Update {
            id,
            ingredient,
            quantity,
            unit,
        } => {
            require_any_field(
                &[ingredient.is_some(), quantity.is_some(), unit.is_some()],
                "--ingredient, --quantity, or --unit",
            )?;

            let mut builder = RecipeUpdateBuilder::new();
            if let Some(ingredient) = ingredient {
                builder = builder.ingredient_id(*ingredient);
            }
            if let Some(quantity) = quantity {
                builder = builder.quantity_required(*quantity);
            }
            if let Some(unit) = unit {
                builder = builder.unit(unit);
            }

            let recipe = ctx.service.update_recipe(*id, builder.build()).await?;
            output(&recipe, flags.format)
        }
        RecipeCommands::List { menu_item } => {
            let recipes = ctx
                .service
                .list_recipes(*menu_item, ctx.limit(flags.limit))
                .await?;
            output(&recipes, flags.format)
        }
        RecipeCommands::Get { id } => output(&ctx.service.get_recipe(*id).await?, flags.format),
        RecipeCommands::Delete { id } => output(&ctx.service.delete_recipe(*id).await?, flags.format),
    }
}
