//! Boolean validity checks.
//!
//! Unlike check-digit computation and conversion, validation never reports
//! why an identifier is bad: wrong length, bad characters, and a failing
//! checksum all collapse to `false`.

use crate::checksum::{check_digit10_of, check_digit13_of};
use crate::normalize::normalize;

/// Check whether the input is a valid ISBN of either form.
///
/// Dispatches on the normalized length: 10 characters are held to the
/// modulus-11 rule, 13 to the modulus-10 rule, anything else is invalid.
///
/// # Examples
///
/// ```
/// use isbn_core::validate;
///
/// assert!(validate("0-8362-2088-9"));
/// assert!(validate("9780836220889"));
/// assert!(!validate("08362208891"));
/// ```
pub fn validate(input: &str) -> bool {
    let Ok(normalized) = normalize(input) else {
        return false;
    };
    match normalized.len() {
        10 => is_valid10(&normalized),
        13 => is_valid13(&normalized),
        other => {
            tracing::trace!(length = other, "normalized length is neither 10 nor 13");
            false
        }
    }
}

/// Check whether the input is a valid ISBN-10.
pub fn validate10(input: &str) -> bool {
    match normalize(input) {
        Ok(normalized) => normalized.len() == 10 && is_valid10(&normalized),
        Err(_) => false,
    }
}

/// Check whether the input is a valid ISBN-13.
pub fn validate13(input: &str) -> bool {
    match normalize(input) {
        Ok(normalized) => normalized.len() == 13 && is_valid13(&normalized),
        Err(_) => false,
    }
}

/// Checksum comparison for a normalized 10-character sequence.
pub(crate) fn is_valid10(normalized: &str) -> bool {
    let bytes = normalized.as_bytes();
    check_digit10_of(&bytes[..9]) == char::from(bytes[9])
}

/// Checksum comparison for a normalized 13-character sequence.
pub(crate) fn is_valid13(normalized: &str) -> bool {
    let bytes = normalized.as_bytes();
    check_digit13_of(&bytes[..12]) == char::from(bytes[12])
}
