use cafe_core::entities::NewCustomer;
use cafe_db::updates::CustomerUpdateBuilder;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::CustomerCommands;
use crate::commands::shared::update::require_any_field;
use crate::context::AppContext;
use crate::output::output;

/// Handle `cafe customer`.
pub async fn handle(
    action: &CustomerCommands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        CustomerCommands::Create { name, phone, email } => {
            let customer = ctx
                .service
                .create_customer(NewCustomer {
                    name: name.clone(),
                    phone: phone.clone(),
                    email: email.clone(),
                })
                .await?;
            output(&customer, flags.format)
        }
        CustomerCommands::Update {
            id,
            name,
            phone,
            email,
            loyalty,
            discount,
        } => {
            require_any_field(
                &[
                    name.is_some(),
                    phone.is_some(),
                    email.is_some(),
                    loyalty.is_some(),
                    discount.is_some(),
                ],
                "--name, --phone, --email, --loyalty, or --discount",
            )?;

            let mut builder = CustomerUpdateBuilder::new();
            if let Some(name) = name {
                builder = builder.name(name);
            }
            if let Some(phone) = phone {
                builder = builder.phone(phone);
            }
            if let Some(email) = email {
                builder = builder.email(email);
            }
            if let Some(loyalty) = loyalty {
                builder = builder.loyalty_level(loyalty);
            }
            if let Some(discount) = discount {
                builder = builder.discount_percent(*discount);
            }

            let customer = ctx.service.update_customer(*id, builder.build()).await?;
            output(&customer, flags.format)
        }
        CustomerCommands::List => {
            let customers = ctx.service.list_customers(ctx.limit(flags.limit)).await?;
            output(&customers, flags.format)
        }
        CustomerCommands::Get { id } => output(&ctx.service.get_customer(*id).await?, flags.format),
        CustomerCommands::Delete { id } => {
            output(&ctx.service.delete_customer(*id).await?, flags.format)
        }
    }
}
