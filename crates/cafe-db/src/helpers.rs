//! Row-to-entity parsing helpers.
//!
//! Every repo converts `libsql::Row` (column-indexed) into typed entity
//! structs. These helpers isolate the parsing of timestamps, enums and money.

use cafe_core::money::{self, RoundingPolicy};
use chrono::{DateTime, SecondsFormat, Utc};
use rust_decimal::Decimal;

use crate::error::DatabaseError;

/// Format a timestamp the way every TEXT datetime column stores it.
///
/// Whole seconds with a `Z` suffix, which `SQLite`'s date functions parse.
#[must_use]
pub fn format_datetime(dt: &DateTime<Utc>) -> String {
    dt.to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// Parse a required TEXT column as `DateTime<Utc>`.
///
/// Handles both RFC 3339 (`"2026-02-09T14:30:00Z"`) and `SQLite`'s default
/// format (`"2026-02-09 14:30:00"`).
///
/// # Errors
///
/// Returns `DatabaseError::Query` if the string cannot be parsed as either format.
pub fn parse_datetime(s: &str) -> Result<DateTime<Utc>, DatabaseError> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }
    chrono::NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S")
        .map(|naive| naive.and_utc())
        .map_err(|e| DatabaseError::Query(format!("Failed to parse datetime '{s}': {e}")))
}

/// Parse a TEXT column into a serde-deserializable enum.
///
/// # Errors
///
/// Returns `DatabaseError::Query` if the string does not match any enum variant.
pub fn parse_enum<T: serde::de::DeserializeOwned>(s: &str) -> Result<T, DatabaseError> {
    serde_json::from_value(serde_json::Value::String(s.to_string()))
        .map_err(|e| DatabaseError::Query(format!("Failed to parse enum from '{s}': {e}")))
}

/// Read an INTEGER minor-units column as an amount.
///
/// # Errors
///
/// Returns `DatabaseError` if the column read fails.
pub fn get_money(row: &libsql::Row, idx: i32) -> Result<Decimal, DatabaseError> {
    Ok(money::from_minor_units(row.get::<i64>(idx)?))
}

/// Convert an amount to the minor units stored on disk.
///
/// # Errors
///
/// Returns `DatabaseError::Validation` if the amount is out of range.
pub fn to_cents(value: Decimal, policy: RoundingPolicy) -> Result<i64, DatabaseError> {
    Ok(money::to_minor_units(value, policy)?)
}

/// Convert a REAL aggregate to `Decimal`.
///
/// # Errors
///
/// Returns `DatabaseError::Query` for NaN or infinite values.
pub fn decimal_from_f64(value: f64) -> Result<Decimal, DatabaseError> {
    Decimal::try_from(value)
        .map_err(|e| DatabaseError::Query(format!("Non-finite numeric value {value}: {e}")))
}

/// Read the single `i64` produced by a `RETURNING id` or `COUNT(*)` query.
///
/// # Errors
///
/// Returns `DatabaseError::NoResult` if the query produced no row.
pub async fn single_i64(mut rows: libsql::Rows) -> Result<i64, DatabaseError> {
    let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
    Ok(row.get::<i64>(0)?)
}

/// Run an `INSERT ... RETURNING id` and read the new id.
///
/// Constraint failures surface while stepping the statement, so both the
/// prepare and the step are classified with [`DatabaseError::from_write`].
///
/// # Errors
///
/// Returns `DatabaseError::Integrity` on a constraint failure, or
/// `DatabaseError` if the query fails otherwise.
pub async fn insert_returning_id(
    conn: &libsql::Connection,
    sql: &str,
    params: impl libsql::params::IntoParams,
) -> Result<i64, DatabaseError> {
    let mut rows = conn
        .query(sql, params)
        .await
        .map_err(DatabaseError::from_write)?;
    let row = rows
        .next()
        .await
        .map_err(DatabaseError::from_write)?
        .ok_or(DatabaseError::NoResult)?;
    Ok(row.get::<i64>(0)?)
}

/// Run an UPDATE or DELETE, classifying constraint failures as integrity errors.
///
/// # Errors
///
/// Returns `DatabaseError::Integrity` on a constraint failure, or
/// `DatabaseError` if the statement fails otherwise.
pub async fn execute_write(
    conn: &libsql::Connection,
    sql: &str,
    params: impl libsql::params::IntoParams,
) -> Result<u64, DatabaseError> {
    conn.execute(sql, params)
        .await
        .map_err(DatabaseError::from_write)
}
