//! Separator stripping and character-set validation.
//!
//! Normalization is the front door for every public operation: hyphens and
//! spaces are dropped, a lowercase `'x'` is canonicalized to `'X'`, and the
//! result is guaranteed to contain only ASCII digits, plus at most one `'X'`
//! in the check position of a 10-character sequence. Length requirements
//! beyond that are imposed by each caller.

use crate::error::{IsbnError, Result};

/// Strip separators and validate character composition.
///
/// Returns the canonical separator-free, uppercase form. The sequence may be
/// any length; callers that need exactly 10 or 13 characters check that
/// themselves.
pub(crate) fn normalize(input: &str) -> Result<String> {
    let mut normalized = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '-' | ' ' => continue,
            '0'..='9' => normalized.push(ch),
            'X' | 'x' => normalized.push('X'),
            other => {
                return Err(IsbnError::InvalidCharacter {
                    character: other,
                    position: normalized.len(),
                });
            }
        }
    }

    // 'X' stands for ten, which only the modulus-11 scheme can produce, and
    // only in the check position.
    if let Some(position) = normalized.find('X') {
        if normalized.len() != 10 || position != 9 {
            return Err(IsbnError::MisplacedX { position });
        }
    }

    Ok(normalized)
}
