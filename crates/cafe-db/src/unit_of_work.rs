//! Explicit transaction scope for store writes.
//!
//! A `UnitOfWork` owns one libSQL transaction. Every write method (in
//! `repos/`) is defined on it, and each one calls the hooks before returning:
//! line item writes recompute the owning order's total, and every mutation is
//! offered to the audit recorder. The mutation and its side effects therefore
//! commit or roll back together.

use cafe_core::audit_rules::{AuditRules, Auditable};
use cafe_core::entities::AuditEntry;
use cafe_core::enums::AuditAction;
use cafe_core::money::RoundingPolicy;
use rust_decimal::Decimal;
use tracing::warn;

use crate::error::DatabaseError;
use crate::hooks;

/// The transaction's connection stays inside the crate, so line items can
/// only change through methods that run the total maintainer:
///
/// ```compile_fail
/// # async fn raw_write(uow: &cafe_db::unit_of_work::UnitOfWork<'_>) {
/// let _ = uow
///     .conn()
///     .execute("DELETE FROM order_line_items", ())
///     .await;
/// # }
/// ```
pub struct UnitOfWork<'a> {
    tx: libsql::Transaction,
    rounding: RoundingPolicy,
    rules: &'a AuditRules,
}

impl<'a> UnitOfWork<'a> {
    pub(crate) const fn new(
        tx: libsql::Transaction,
        rounding: RoundingPolicy,
        rules: &'a AuditRules,
    ) -> Self {
        Self {
            tx,
            rounding,
            rules,
        }
    }

    /// Connection bound to this transaction.
    #[must_use]
    pub(crate) fn conn(&self) -> &libsql::Connection {
        &self.tx
    }

    #[must_use]
    pub const fn rounding(&self) -> RoundingPolicy {
        self.rounding
    }

    /// Make every mutation in this unit durable together with its side effects.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the commit fails.
    pub async fn commit(self) -> Result<(), DatabaseError> {
        self.tx.commit().await?;
        Ok(())
    }

    /// Discard every mutation in this unit.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the rollback fails.
    pub async fn rollback(self) -> Result<(), DatabaseError> {
        self.tx.rollback().await?;
        Ok(())
    }

    /// Commit if `result` is `Ok`, roll back otherwise, and hand `result` back.
    ///
    /// A rollback failure is logged; the original error is what the caller sees.
    ///
    /// # Errors
    ///
    /// Returns the error in `result`, or the commit error.
    pub async fn finish<T>(self, result: Result<T, DatabaseError>) -> Result<T, DatabaseError> {
        match result {
            Ok(value) => {
                self.commit().await?;
                Ok(value)
            }
            Err(err) => {
                warn!(error = %err, "rolling back unit of work");
                if let Err(rollback_err) = self.rollback().await {
                    warn!(error = %rollback_err, "rollback failed");
                }
                Err(err)
            }
        }
    }

    /// Recompute and store the total of `order_id`.
    pub(crate) async fn recompute_total(&self, order_id: i64) -> Result<Decimal, DatabaseError> {
        hooks::totals::recompute_order_total(self.conn(), order_id, self.rounding).await
    }

    /// Offer a mutation to the audit recorder.
    pub(crate) async fn audit<T: Auditable>(
        &self,
        action: AuditAction,
        subject: &T,
    ) -> Result<Option<AuditEntry>, DatabaseError> {
        hooks::audit::record(self.conn(), self.rules, action, subject).await
    }
}
