//! Audit rule table.
//!
//! Which mutations leave an audit log entry is data, not code: a table of
//! `(entity kind, action) → (trigger name, message template)` rules. Every
//! write path in the store reports its mutation to the recorder, and the
//! recorder consults this table. Adding a monitored event means adding a rule.
//!
//! Templates support two placeholders: `{name}` (the entity's
//! human-identifying field) and `{id}`.

use serde::Serialize;

use crate::enums::{AuditAction, EntityKind};
use crate::errors::CoreError;

/// Something the recorder can describe in a log message.
pub trait Auditable {
    const KIND: EntityKind;

    fn audit_id(&self) -> i64;

    /// Human-identifying label, usually the entity's name.
    fn audit_name(&self) -> String;
}

/// One monitored `(entity, action)` pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MonitorRule {
    pub entity: EntityKind,
    pub action: AuditAction,
    pub trigger_name: &'static str,
    pub template: &'static str,
}

impl MonitorRule {
    #[must_use]
    pub const fn new(
        entity: EntityKind,
        action: AuditAction,
        trigger_name: &'static str,
        template: &'static str,
    ) -> Self {
        Self {
            entity,
            action,
            trigger_name,
            template,
        }
    }

    /// Render the message for a concrete row.
    #[must_use]
    pub fn render(&self, id: i64, name: &str) -> String {
        self.template
            .replace("{id}", &id.to_string())
            .replace("{name}", name)
    }
}

/// Customer edits and menu item removals are monitored out of the box.
pub const DEFAULT_RULES: &[MonitorRule] = &[
    MonitorRule::new(
        EntityKind::Customers,
        AuditAction::Update,
        "customer_updated",
        "Customer updated: {name}",
    ),
    MonitorRule::new(
        EntityKind::MenuItems,
        AuditAction::Delete,
        "menu_item_deleted",
        "Menu item deleted: {name}",
    ),
];

/// Validated set of monitor rules, at most one per `(entity, action)` pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuditRules {
    rules: Vec<MonitorRule>,
}

impl AuditRules {
    /// Build a rule set.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Validation` if two rules cover the same pair, which
    /// would make a single mutation log twice.
    pub fn new(rules: impl IntoIterator<Item = MonitorRule>) -> Result<Self, CoreError> {
        let mut collected: Vec<MonitorRule> = Vec::new();
        for rule in rules {
            if collected
                .iter()
                .any(|r| r.entity == rule.entity && r.action == rule.action)
            {
                return Err(CoreError::Validation(format!(
                    "duplicate audit rule for {} {}",
                    rule.action, rule.entity
                )));
            }
            collected.push(rule);
        }
        Ok(Self { rules: collected })
    }

    /// A rule set that monitors nothing.
    #[must_use]
    pub const fn empty() -> Self {
        Self { rules: Vec::new() }
    }

    #[must_use]
    pub fn lookup(&self, entity: EntityKind, action: AuditAction) -> Option<&MonitorRule> {
        self.rules
            .iter()
            .find(|r| r.entity == entity && r.action == action)
    }

    #[must_use]
    pub fn rules(&self) -> &[MonitorRule] {
        &self.rules
    }
}

impl Default for AuditRules {
    fn default() -> Self {
        Self {
            rules: DEFAULT_RULES.to_vec(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_monitor_customer_update_and_menu_delete() {
        let rules = AuditRules::default();
        assert!(rules.lookup(EntityKind::Customers, AuditAction::Update).is_some());
        assert!(rules.lookup(EntityKind::MenuItems, AuditAction::Delete).is_some());
        assert!(rules.lookup(EntityKind::Customers, AuditAction::Delete).is_none());
        assert!(rules.lookup(EntityKind::MenuItems, AuditAction::Update).is_none());
        assert!(rules.lookup(EntityKind::OrderLineItems, AuditAction::Insert).is_none());
    }

    #[test]
    fn default_rules_pass_validation() {
        let rules = AuditRules::new(DEFAULT_RULES.iter().copied()).unwrap();
        assert_eq!(rules, AuditRules::default());
    }

    #[test]
    fn render_fills_placeholders() {
        let rule = MonitorRule::new(
            EntityKind::Suppliers,
            AuditAction::Insert,
            "supplier_added",
            "Supplier #{id} added: {name}",
        );
        assert_eq!(rule.render(7, "Beans Ltd"), "Supplier #7 added: Beans Ltd");
    }

    #[test]
    fn duplicate_pair_is_rejected() {
        let rule = DEFAULT_RULES[0];
        let err = AuditRules::new([rule, rule]).unwrap_err();
        assert!(err.to_string().contains("duplicate audit rule"));
    }

    #[test]
    fn empty_rules_monitor_nothing() {
        let rules = AuditRules::empty();
        for entity in EntityKind::ALL {
            assert!(rules.lookup(entity, AuditAction::Update).is_none());
        }
    }
}
