//! Phone number validation for customers, employees, and suppliers.
//!
//! Accepted shapes, after stripping everything except digits and `+`:
//! `+79991234567`, `79991234567`, `89991234567`, `9991234567`.
//! Brackets, dashes, and spaces in the input are ignored.

use crate::errors::CoreError;

/// Whether `phone` is a valid local number.
///
/// Ten digits must start with 4, 8 or 9; eleven digits must start with 7 or 8.
#[must_use]
pub fn is_valid(phone: &str) -> bool {
    let digits: String = phone.chars().filter(char::is_ascii_digit).collect();

    match digits.len() {
        10 => digits.starts_with(['4', '8', '9']),
        11 => digits.starts_with(['7', '8']),
        _ => false,
    }
}

/// Validate an optional-by-emptiness phone field.
///
/// The empty string passes: the phone is not a required field. Whitespace
/// alone is not empty and fails like any other malformed number.
///
/// # Errors
///
/// Returns `CoreError::Validation` if a non-empty phone is malformed.
pub fn validate(phone: &str) -> Result<(), CoreError> {
    if phone.is_empty() || is_valid(phone) {
        return Ok(());
    }
    Err(CoreError::Validation(format!("invalid phone number: '{phone}'")))
}
