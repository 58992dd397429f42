//! Promotion of an ISBN-10 into the ISBN-13 namespace.

use tracing::debug;

use crate::checksum::{check_digit10_of, check_digit13_of};
use crate::error::{IsbnError, Result};
use crate::normalize::normalize;

/// EAN "Bookland" prefix under which every ISBN-10 has a 13-digit equivalent.
const BOOKLAND_PREFIX: &str = "978";

/// Convert a valid ISBN-10 into its ISBN-13 equivalent.
///
/// The source identifier must itself pass the modulus-11 check; an invalid
/// ISBN-10 is an error, never a silent conversion. The old check digit is
/// discarded, `978` is prepended to the 9 payload digits, and the modulus-10
/// check digit is computed fresh.
///
/// # Examples
///
/// ```
/// use isbn_core::to_isbn13;
///
/// assert_eq!(to_isbn13("0-8362-2088-9").unwrap(), "9780836220889");
/// assert!(to_isbn13("0836220888").is_err());
/// ```
pub fn to_isbn13(input: &str) -> Result<String> {
    let normalized = normalize(input)?;
    if normalized.len() != 10 {
        return Err(IsbnError::InvalidLength {
            expected: 10,
            found: normalized.len(),
        });
    }

    let bytes = normalized.as_bytes();
    let computed = check_digit10_of(&bytes[..9]);
    let supplied = char::from(bytes[9]);
    if computed != supplied {
        return Err(IsbnError::CheckDigitMismatch { computed, found: supplied });
    }

    let result = promote(&normalized[..9]);
    debug!(from = %normalized, to = %result, "converted ISBN-10 to ISBN-13");
    Ok(result)
}

/// Build the 13-character form from 9 validated payload digits.
pub(crate) fn promote(payload: &str) -> String {
    let mut result = String::with_capacity(13);
    result.push_str(BOOKLAND_PREFIX);
    result.push_str(payload);
    result.push(check_digit13_of(result.as_bytes()));
    result
}
