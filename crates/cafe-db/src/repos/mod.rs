//! Repository implementations.
//!
//! Reads are `impl CafeService` methods. Writes are `impl UnitOfWork`
//! methods, each mirrored by a one-shot `CafeService` wrapper that runs a
//! single unit and rolls it back on error.

pub mod audit;
pub mod customer;
pub mod employee;
pub mod ingredient;
pub mod line_item;
pub mod menu_item;
pub mod order;
pub mod recipe;
pub mod report;
pub mod supplier;
