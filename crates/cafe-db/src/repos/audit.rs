//! Audit log repository.
//!
//! Entries are appended only by the recorder hook; this module reads them
//! back, newest first.

use cafe_core::entities::AuditEntry;
use cafe_core::enums::{AuditAction, EntityKind};

use crate::error::DatabaseError;
use crate::helpers::{parse_datetime, parse_enum};
use crate::service::CafeService;

/// Filter criteria for audit queries.
#[derive(Debug, Default)]
pub struct AuditFilter {
    pub entity: Option<EntityKind>,
    pub entity_id: Option<i64>,
    pub action: Option<AuditAction>,
    pub limit: Option<u32>,
}

fn row_to_entry(row: &libsql::Row) -> Result<AuditEntry, DatabaseError> {
    Ok(AuditEntry {
        id: row.get::<i64>(0)?,
        trigger_name: row.get::<String>(1)?,
        action: parse_enum(&row.get::<String>(2)?)?,
        entity: parse_enum(&row.get::<String>(3)?)?,
        entity_id: row.get::<i64>(4)?,
        message: row.get::<String>(5)?,
        created_at: parse_datetime(&row.get::<String>(6)?)?,
    })
}

impl CafeService {
    /// Query audit entries, newest first (timestamp, then id, descending).
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails.
    pub async fn list_audit_log(
        &self,
        filter: &AuditFilter,
    ) -> Result<Vec<AuditEntry>, DatabaseError> {
        let mut conditions = Vec::new();
        let mut params: Vec<libsql::Value> = Vec::new();

        if let Some(entity) = filter.entity {
            params.push(libsql::Value::Text(entity.as_str().to_string()));
            conditions.push(format!("entity = ?{}", params.len()));
        }
        if let Some(entity_id) = filter.entity_id {
            params.push(libsql::Value::Integer(entity_id));
            conditions.push(format!("entity_id = ?{}", params.len()));
        }
        if let Some(action) = filter.action {
            params.push(libsql::Value::Text(action.as_str().to_string()));
            conditions.push(format!("action = ?{}", params.len()));
        }

        let where_clause = if conditions.is_empty() {
            String::new()
        } else {
            format!("WHERE {}", conditions.join(" AND "))
        };

        let limit = filter.limit.unwrap_or(100);
        let sql = format!(
            "SELECT id, trigger_name, action, entity, entity_id, message, created_at
             FROM audit_log {where_clause}
             ORDER BY created_at DESC, id DESC LIMIT {limit}"
        );

        let mut rows = self
            .db()
            .conn()
            .query(&sql, libsql::params_from_iter(params))
            .await?;
        let mut entries = Vec::new();
        while let Some(row) = rows.next().await? {
            entries.push(row_to_entry(&row)?);
        }
        Ok(entries)
    }
}
