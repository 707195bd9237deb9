//! Side effects that run inside the triggering transaction.
//!
//! Called only from `UnitOfWork`; there is no other write path.

pub mod audit;
pub mod totals;
