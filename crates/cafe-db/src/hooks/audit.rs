//! Audit log recorder.
//!
//! Every write path reports its mutation here; the rule table decides whether
//! it leaves an entry. Entries are append-only.

use cafe_core::audit_rules::{AuditRules, Auditable};
use cafe_core::entities::AuditEntry;
use cafe_core::enums::AuditAction;
use chrono::{SubsecRound, Utc};
use tracing::debug;

use crate::error::DatabaseError;
use crate::helpers::{format_datetime, insert_returning_id};

/// Append an entry for `subject` if a rule monitors `(T::KIND, action)`.
///
/// `subject` is the after-image for inserts and updates and the before-image
/// for deletes.
///
/// # Errors
///
/// Returns `DatabaseError` if the insert fails. The caller's unit must then
/// be rolled back.
pub async fn record<T: Auditable>(
    conn: &libsql::Connection,
    rules: &AuditRules,
    action: AuditAction,
    subject: &T,
) -> Result<Option<AuditEntry>, DatabaseError> {
    let Some(rule) = rules.lookup(T::KIND, action) else {
        return Ok(None);
    };

    let entity_id = subject.audit_id();
    let message = rule.render(entity_id, &subject.audit_name());
    let created_at = Utc::now().trunc_subsecs(0);

    let id = insert_returning_id(
        conn,
        "INSERT INTO audit_log (trigger_name, action, entity, entity_id, message, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6) RETURNING id",
        libsql::params![
            rule.trigger_name,
            action.as_str(),
            T::KIND.as_str(),
            entity_id,
            message.as_str(),
            format_datetime(&created_at)
        ],
    )
    .await?;

    debug!(trigger = rule.trigger_name, entity_id, "audit entry appended");

    Ok(Some(AuditEntry {
        id,
        trigger_name: rule.trigger_name.to_string(),
        action,
        entity: T::KIND,
        entity_id,
        message,
        created_at,
    }))
}
