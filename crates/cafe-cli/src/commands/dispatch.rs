use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(
    command: Commands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match command {
        Commands::Customer { action } => commands::customer::handle(&action, ctx, flags).await,
        Commands::Employee { action } => commands::employee::handle(&action, ctx, flags).await,
        Commands::Supplier { action } => commands::supplier::handle(&action, ctx, flags).await,
        Commands::Ingredient { action } => commands::ingredient::handle(&action, ctx, flags).await,
        Commands::Menu { action } => commands::menu::handle(&action, ctx, flags).await,
        Commands::Recipe { action } => commands::recipe::handle(&action, ctx, flags).await,
        Commands::Order { action } => commands::order::handle(&action, ctx, flags).await,
        Commands::Line { action } => commands::line::handle(&action, ctx, flags).await,
        Commands::Log(args) => commands::log::handle(&args, ctx, flags).await,
        Commands::Report { action } => commands::report::handle(&action, ctx, flags).await,
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use cafe_config::CafeConfig;
    use cafe_core::enums::{AuditAction, OrderStatus};
    use cafe_db::repos::audit::AuditFilter;
    use clap::Parser;
    use pretty_assertions::assert_eq;
    use rust_decimal::Decimal;

    use super::dispatch;
    use crate::cli::Cli;
    use crate::context::AppContext;

    async fn run(ctx: &mut AppContext, args: &[&str]) -> anyhow::Result<()> {
        let cli = Cli::try_parse_from(std::iter::once("cafe").chain(args.iter().copied()))?;
        let flags = cli.global_flags();
        dispatch(cli.command, ctx, &flags).await
    }

    #[tokio::test]
    async fn order_lifecycle_through_the_command_tree() {
        let mut ctx = AppContext::init(CafeConfig::default(), Some(":memory:"))
            .await
            .expect("context should open");

        run(&mut ctx, &["employee", "create", "--name", "Ivan", "--role", "barista", "--salary", "30000"])
            .await
            .expect("employee");
        run(&mut ctx, &["customer", "create", "--name", "Anna", "--email", "anna@example.com"])
            .await
            .expect("customer");
        run(&mut ctx, &["menu", "create", "--name", "Latte", "--kind", "drink", "--price", "3.50"])
            .await
            .expect("latte");
        run(&mut ctx, &["menu", "create", "--name", "Cake", "--kind", "dessert", "--price", "4.25"])
            .await
            .expect("cake");

        run(
            &mut ctx,
            &["order", "create", "--employee", "1", "--customer", "1", "--item", "1:2", "--item", "2:1"],
        )
        .await
        .expect("order");
        let order = ctx.service.get_order(1).await.expect("order exists");
        assert_eq!(order.total_amount, Decimal::from_str("11.25").expect("decimal"));

        run(&mut ctx, &["line", "add", "--order", "1", "--menu-item", "2", "--price", "1.00"])
            .await
            .expect("line add");
        run(&mut ctx, &["order", "status", "1", "ready"]).await.expect("ready");
        run(&mut ctx, &["customer", "update", "1", "--name", "Anna K"])
            .await
            .expect("customer update");

        let order = ctx.service.get_order(1).await.expect("order exists");
        assert_eq!(order.total_amount, Decimal::from_str("12.25").expect("decimal"));
        assert_eq!(order.status, OrderStatus::Ready);

        let log = ctx
            .service
            .list_audit_log(&AuditFilter::default())
            .await
            .expect("log");
        assert_eq!(log.len(), 1);
        assert_eq!(log[0].action, AuditAction::Update);

        run(&mut ctx, &["--format", "table", "report", "profit-and-loss"])
            .await
            .expect("report");
        run(&mut ctx, &["log", "--action", "update"]).await.expect("log");
    }

    #[tokio::test]
    async fn referenced_menu_item_cannot_be_deleted() {
        let mut ctx = AppContext::init(CafeConfig::default(), Some(":memory:"))
            .await
            .expect("context should open");

        run(&mut ctx, &["employee", "create", "--name", "Ivan", "--role", "barista", "--salary", "30000"])
            .await
            .expect("employee");
        run(&mut ctx, &["menu", "create", "--name", "Latte", "--kind", "drink", "--price", "3.50"])
            .await
            .expect("latte");
        run(&mut ctx, &["order", "create", "--employee", "1", "--item", "1:1"])
            .await
            .expect("order");

        assert!(run(&mut ctx, &["menu", "delete", "1"]).await.is_err());
        assert!(
            ctx.service
                .list_audit_log(&AuditFilter::default())
                .await
                .expect("log")
                .is_empty()
        );
    }

    #[tokio::test]
    async fn noop_update_is_rejected_before_touching_the_store() {
        let mut ctx = AppContext::init(CafeConfig::default(), Some(":memory:"))
            .await
            .expect("context should open");
        let err = run(&mut ctx, &["menu", "update", "1"]).await.expect_err("noop");
        assert!(err.to_string().contains("At least one of"));
    }
}
