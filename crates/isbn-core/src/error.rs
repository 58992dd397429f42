use thiserror::Error;

/// Errors reported by check-digit computation and conversion.
///
/// Positions are 0-based indices into the normalized (separator-free)
/// sequence, not the raw input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IsbnError {
    /// The input did not normalize to the length the operation requires.
    #[error("expected {expected} characters after removing separators, found {found}")]
    InvalidLength { expected: usize, found: usize },
    /// A character other than a digit, a separator, or a check 'X'.
    #[error("invalid character {character:?} at position {position}")]
    InvalidCharacter { character: char, position: usize },
    /// 'X' appeared somewhere other than the check position of an ISBN-10.
    #[error("'X' at position {position} is only valid as the final character of an ISBN-10")]
    MisplacedX { position: usize },
    /// The identifier's own check digit disagrees with the recomputed one.
    #[error("check digit mismatch: computed {computed}, found {found}")]
    CheckDigitMismatch { computed: char, found: char },
}

pub type Result<T> = std::result::Result<T, IsbnError>;
