//! Money arithmetic on `rust_decimal`.
//!
//! Amounts are carried as `Decimal` in memory and stored as integer minor
//! units (cents) so that SQL aggregates stay exact. Conversion to minor units
//! is the single place where rounding to 2 decimal places happens; the policy
//! is configurable and defaults to half-up (midpoint away from zero).

use rust_decimal::prelude::*;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

/// Monetary scale: all stored amounts have 2 decimal places.
pub const DECIMAL_PLACES: u32 = 2;

/// Maximum allowed quantity on a single line item.
pub const MAX_QUANTITY: i64 = 9999;

/// Maximum allowed unit price (1,000,000.00).
const MAX_PRICE: Decimal = Decimal::from_parts(100_000_000, 0, 0, false, 2);

/// How a value with more than 2 decimal places is brought to the monetary scale.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum RoundingPolicy {
    /// 0.125 → 0.13, -0.125 → -0.13.
    #[default]
    HalfUp,
    /// Banker's rounding: 0.125 → 0.12, 0.135 → 0.14.
    HalfEven,
}

impl RoundingPolicy {
    #[must_use]
    pub const fn strategy(self) -> RoundingStrategy {
        match self {
            Self::HalfUp => RoundingStrategy::MidpointAwayFromZero,
            Self::HalfEven => RoundingStrategy::MidpointNearestEven,
        }
    }

    /// Round `value` to the monetary scale.
    #[must_use]
    pub fn round(self, value: Decimal) -> Decimal {
        value.round_dp_with_strategy(DECIMAL_PLACES, self.strategy())
    }
}

/// Convert an amount to integer minor units, rounding with `policy`.
///
/// # Errors
///
/// Returns `CoreError::Validation` if the amount does not fit in an `i64`.
pub fn to_minor_units(value: Decimal, policy: RoundingPolicy) -> Result<i64, CoreError> {
    (policy.round(value) * Decimal::ONE_HUNDRED)
        .to_i64()
        .ok_or_else(|| CoreError::Validation(format!("amount out of range: {value}")))
}

/// Convert integer minor units back to an amount with 2 decimal places.
#[must_use]
pub fn from_minor_units(cents: i64) -> Decimal {
    Decimal::new(cents, DECIMAL_PLACES)
}

/// `quantity × price` for one line, unrounded.
#[must_use]
pub fn line_total(quantity: i64, price: Decimal) -> Decimal {
    Decimal::from(quantity) * price
}

/// Sum of `quantity × price` over `lines`, rounded to the monetary scale.
///
/// An empty iterator yields exactly zero.
pub fn order_total<I>(lines: I, policy: RoundingPolicy) -> Decimal
where
    I: IntoIterator<Item = (i64, Decimal)>,
{
    let sum = lines
        .into_iter()
        .fold(Decimal::ZERO, |acc, (quantity, price)| {
            acc + line_total(quantity, price)
        });
    policy.round(sum)
}

/// Validate a line item quantity.
///
/// # Errors
///
/// Returns `CoreError::Validation` unless `1 <= quantity <= MAX_QUANTITY`.
pub fn validate_quantity(quantity: i64) -> Result<(), CoreError> {
    if quantity < 1 {
        return Err(CoreError::Validation(format!(
            "quantity must be at least 1, got {quantity}"
        )));
    }
    if quantity > MAX_QUANTITY {
        return Err(CoreError::Validation(format!(
            "quantity exceeds maximum allowed ({MAX_QUANTITY}), got {quantity}"
        )));
    }
    Ok(())
}

/// Validate a price or other non-negative amount.
///
/// # Errors
///
/// Returns `CoreError::Validation` for negative amounts or amounts above the cap.
pub fn validate_amount(value: Decimal, field_name: &str) -> Result<(), CoreError> {
    if value.is_sign_negative() && !value.is_zero() {
        return Err(CoreError::Validation(format!(
            "{field_name} must be non-negative, got {value}"
        )));
    }
    if value > MAX_PRICE {
        return Err(CoreError::Validation(format!(
            "{field_name} exceeds maximum allowed ({MAX_PRICE}), got {value}"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[rstest]
    #[case("0.125", RoundingPolicy::HalfUp, 13)]
    #[case("0.125", RoundingPolicy::HalfEven, 12)]
    #[case("0.135", RoundingPolicy::HalfEven, 14)]
    #[case("100", RoundingPolicy::HalfUp, 10_000)]
    #[case("-0.125", RoundingPolicy::HalfUp, -13)]
    #[case("19.999", RoundingPolicy::HalfEven, 2000)]
    fn minor_units_follow_policy(
        #[case] input: &str,
        #[case] policy: RoundingPolicy,
        #[case] expected: i64,
    ) {
        assert_eq!(to_minor_units(dec(input), policy).unwrap(), expected);
    }

    #[rstest]
    #[case(0, "0.00")]
    #[case(5, "0.05")]
    #[case(25_000, "250.00")]
    #[case(-199, "-1.99")]
    #[case(i64::from(u32::MAX) + 7, "42949673.02")]
    fn minor_units_back_to_decimal(#[case] cents: i64, #[case] expected: &str) {
        let value = from_minor_units(cents);
        assert_eq!(value, dec(expected));
        assert_eq!(value.scale(), DECIMAL_PLACES);
    }

    #[test]
    fn order_total_of_nothing_is_zero() {
        let total = order_total(std::iter::empty(), RoundingPolicy::HalfUp);
        assert!(total.is_zero());
    }

    #[test]
    fn order_total_sums_lines() {
        let lines = vec![(2, dec("100.00")), (1, dec("50.00"))];
        assert_eq!(order_total(lines, RoundingPolicy::HalfUp), dec("250.00"));
    }

    #[test]
    fn order_total_rounds_once_at_the_end() {
        // 3 × 0.335 = 1.005 → 1.01 half-up, 1.00 half-even
        let lines = vec![(3, dec("0.335"))];
        assert_eq!(order_total(lines.clone(), RoundingPolicy::HalfUp), dec("1.01"));
        assert_eq!(order_total(lines, RoundingPolicy::HalfEven), dec("1.00"));
    }

    #[rstest]
    #[case(0, false)]
    #[case(1, true)]
    #[case(MAX_QUANTITY, true)]
    #[case(MAX_QUANTITY + 1, false)]
    #[case(-3, false)]
    fn quantity_bounds(#[case] quantity: i64, #[case] ok: bool) {
        assert_eq!(validate_quantity(quantity).is_ok(), ok);
    }

    #[test]
    fn amount_validation() {
        assert!(validate_amount(dec("0"), "price").is_ok());
        assert!(validate_amount(dec("12.50"), "price").is_ok());
        assert!(validate_amount(dec("-0.01"), "price").is_err());
        assert!(validate_amount(dec("1000000.01"), "price").is_err());
    }
}
