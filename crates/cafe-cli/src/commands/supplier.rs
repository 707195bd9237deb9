use cafe_core::entities::NewSupplier;
use cafe_db::updates::SupplierUpdateBuilder;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::SupplierCommands;
use crate::commands::shared::update::require_any_field;
use crate::context::AppContext;
use crate::output::output;

/// Handle `cafe supplier`.
pub async fn handle(
    action: &SupplierCommands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        SupplierCommands::Create {
            name,
            phone,
            email,
            address,
        } => {
            let supplier = ctx
                .service
                .create_supplier(NewSupplier {
                    name: name.clone(),
                    phone: phone.clone(),
                    email: email.clone(),
                    address: address.clone(),
                })
                .await?;
            output(&supplier, flags.format)
        }
        SupplierCommands::Update {
            id,
            name,
            phone,
            email,
            address,
        } => {
            require_any_field(
                &[
                    name.is_some(),
                    phone.is_some(),
                    email.is_some(),
                    address.is_some(),
                ],
                "--name, --phone, --email, or --address",
            )?;

            let mut builder = SupplierUpdateBuilder::new();
            if let Some(name) = name {
                builder = builder.name(name);
            }
            if let Some(phone) = phone {
                builder = builder.phone(phone);
            }
            if let Some(email) = email {
                builder = builder.email(email);
            }
            if let Some(address) = address {
                builder = builder.address(address);
            }

            let supplier = ctx.service.update_supplier(*id, builder.build()).await?;
            output(&supplier, flags.format)
        }
        SupplierCommands::List => {
            let suppliers = ctx.service.list_suppliers(ctx.limit(flags.limit)).await?;
            output(&suppliers, flags.format)
        }
        SupplierCommands::Get { id } => output(&ctx.service.get_supplier(*id).await?, flags.format),
        SupplierCommands::Delete { id } => {
            output(&ctx.service.delete_supplier(*id).await?, flags.format)
        }
    }
}
