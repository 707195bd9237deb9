use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{AuditAction, EntityKind};

/// An append-only audit log entry recording a monitored mutation.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct AuditEntry {
    pub id: i64,
    pub trigger_name: String,
    pub action: AuditAction,
    pub entity: EntityKind,
    pub entity_id: i64,
    pub message: String,
    pub created_at: DateTime<Utc>,
}
