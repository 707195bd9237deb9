//! # cafe-core
//!
//! Core types shared across the cafe back-office crates.
//!
//! - Entity structs for every stored record (customers, menu items, orders, ...)
//! - Status and kind enums, including the order status state machine
//! - Money arithmetic on `rust_decimal` with a configurable rounding policy
//! - The audit rule table deciding which mutations leave a log entry
//! - Phone number validation shared by the people-facing entities
//! - Report row types

pub mod audit_rules;
pub mod entities;
pub mod enums;
pub mod errors;
pub mod money;
pub mod phone;
pub mod reports;
