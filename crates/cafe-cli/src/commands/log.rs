use cafe_core::enums::EntityKind;
use cafe_db::repos::audit::AuditFilter;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::LogArgs;
use crate::commands::shared::parse::{parse_action, parse_enum};
use crate::context::AppContext;
use crate::output::output;

/// Handle `cafe log`.
pub async fn handle(args: &LogArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let filter = build_filter(args, flags.limit)?;
    let entries = ctx.service.list_audit_log(&filter).await?;
    output(&entries, flags.format)
}

/// The store applies its own default limit when none is given.
fn build_filter(args: &LogArgs, limit: Option<u32>) -> anyhow::Result<AuditFilter> {
    Ok(AuditFilter {
        entity: args
            .entity
            .as_deref()
            .map(|value| parse_enum::<EntityKind>(value, "entity"))
            .transpose()?,
        entity_id: args.entity_id,
        action: args.action.as_deref().map(parse_action).transpose()?,
        limit,
    })
}

#[cfg(test)]
mod tests {
    use cafe_core::enums::{AuditAction, EntityKind};

    use super::build_filter;
    use crate::cli::root_commands::LogArgs;

    #[test]
    fn parses_entity_and_action() {
        let args = LogArgs {
            entity: Some("menu_items".to_string()),
            entity_id: Some(3),
            action: Some("delete".to_string()),
        };
        let filter = build_filter(&args, Some(5)).expect("filter should build");

        assert_eq!(filter.entity, Some(EntityKind::MenuItems));
        assert_eq!(filter.entity_id, Some(3));
        assert_eq!(filter.action, Some(AuditAction::Delete));
        assert_eq!(filter.limit, Some(5));
    }

    #[test]
    fn unknown_entity_is_rejected() {
        let args = LogArgs {
            entity: Some("tables".to_string()),
            entity_id: None,
            action: None,
        };
        assert!(build_filter(&args, None).is_err());
    }
}
