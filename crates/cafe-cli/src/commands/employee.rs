use cafe_core::entities::NewEmployee;
use cafe_db::updates::EmployeeUpdateBuilder;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::EmployeeCommands;
use crate::commands::shared::update::require_any_field;
use crate::context::AppContext;
use crate::output::output;

/// Handle `cafe employee`.
pub async fn handle(
    action: &EmployeeCommands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        EmployeeCommands::Create {
            name,
            role,
            phone,
            salary,
            hire_date,
        } => {
            let employee = ctx
                .service
                .create_employee(NewEmployee {
                    full_name: name.clone(),
                    role: role.clone(),
                    phone: phone.clone(),
                    salary: *salary,
                    hire_date: *hire_date,
                })
                .await?;
            output(&employee, flags.format)
        }
        EmployeeCommands::Update {
            id,
            name,
            role,
            phone,
            salary,
            hire_date,
        } => {
            require_any_field(
                &[
                    name.is_some(),
                    role.is_some(),
                    phone.is_some(),
                    salary.is_some(),
                    hire_date.is_some(),
                ],
                "--name, --role, --phone, --salary, or --hire-date",
            )?;

            let mut builder = EmployeeUpdateBuilder::new();
            if let Some(name) = name {
                builder = builder.full_name(name);
            }
            if let Some(role) = role {
                builder = builder.role(role);
            }
            if let Some(phone) = phone {
                builder = builder.phone(phone);
            }
            if let Some(salary) = salary {
                builder = builder.salary(*salary);
            }
            if let Some(hire_date) = hire_date {
                builder = builder.hire_date(*hire_date);
            }

            let employee = ctx.service.update_employee(*id, builder.build()).await?;
            output(&employee, flags.format)
        }
        EmployeeCommands::List => {
            let employees = ctx.service.list_employees(ctx.limit(flags.limit)).await?;
            output(&employees, flags.format)
        }
        EmployeeCommands::Get { id } => output(&ctx.service.get_employee(*id).await?, flags.format),
        EmployeeCommands::Delete { id } => {
            output(&ctx.service.delete_employee(*id).await?, flags.format)
        }
    }
}
