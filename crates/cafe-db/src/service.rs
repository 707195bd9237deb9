//! Service layer owning the store and its write policies.
//!
//! `CafeService` wraps `CafeDb` (raw database access) together with the money
//! rounding policy and the audit rule table. Reads are `impl CafeService`
//! methods in `repos/`; writes run inside a [`UnitOfWork`], either opened
//! explicitly with [`CafeService::begin`] or through the one-shot wrappers
//! that commit on success and roll back on error.

use cafe_core::audit_rules::AuditRules;
use cafe_core::money::RoundingPolicy;

use crate::CafeDb;
use crate::error::DatabaseError;
use crate::unit_of_work::UnitOfWork;

/// Orchestrates store mutations with derived totals and the audit log.
///
/// Every mutation follows this protocol:
/// 1. Begin transaction
/// 2. Execute SQL
/// 3. Recompute the owning order total (line item writes)
/// 4. Append an audit entry if a rule matches
/// 5. Commit, or roll back everything on the first error
pub struct CafeService {
    db: CafeDb,
    rounding: RoundingPolicy,
    rules: AuditRules,
}

impl CafeService {
    /// Open a local store with the default rounding policy and audit rules.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened.
    pub async fn new_local(db_path: &str, rounding: RoundingPolicy) -> Result<Self, DatabaseError> {
        let db = CafeDb::open_local(db_path).await?;
        Ok(Self::from_db(db, rounding))
    }

    /// Create from an existing `CafeDb`.
    #[must_use]
    pub fn from_db(db: CafeDb, rounding: RoundingPolicy) -> Self {
        Self {
            db,
            rounding,
            rules: AuditRules::default(),
        }
    }

    /// Replace the audit rule table.
    #[must_use]
    pub fn with_audit_rules(mut self, rules: AuditRules) -> Self {
        self.rules = rules;
        self
    }

    #[must_use]
    pub(crate) const fn db(&self) -> &CafeDb {
        &self.db
    }

    #[must_use]
    pub const fn rounding(&self) -> RoundingPolicy {
        self.rounding
    }

    #[must_use]
    pub const fn audit_rules(&self) -> &AuditRules {
        &self.rules
    }

    /// Open a unit of work. Nothing it writes is visible to other
    /// connections until [`UnitOfWork::commit`].
    ///
    /// The unit shares the service's connection, so it holds the service
    /// exclusively: reads through the service cannot observe its uncommitted
    /// writes, and a second unit cannot start until this one ends.
    ///
    /// ```compile_fail
    /// # use cafe_db::repos::audit::AuditFilter;
    /// # use cafe_db::service::CafeService;
    /// # async fn overlap(svc: &mut CafeService) -> Result<(), cafe_db::error::DatabaseError> {
    /// let uow = svc.begin().await?;
    /// let log = svc.list_audit_log(&AuditFilter::default()).await?;
    /// uow.commit().await?;
    /// # drop(log);
    /// # Ok(())
    /// # }
    /// ```
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the transaction cannot be started.
    pub async fn begin(&mut self) -> Result<UnitOfWork<'_>, DatabaseError> {
        let tx = self.db.conn().transaction().await?;
        Ok(UnitOfWork::new(tx, self.rounding, &self.rules))
    }
}
