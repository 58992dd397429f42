//! Validated identifier newtypes.
//!
//! [`Isbn10`] and [`Isbn13`] can only be constructed from input whose
//! checksum holds, so holding one is proof of validity. Both store the
//! canonical separator-free, uppercase form and (de)serialize as plain
//! strings, re-running validation on the way in.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::checksum::{check_digit10_of, check_digit13_of};
use crate::convert::promote;
use crate::error::IsbnError;
use crate::normalize::normalize;

/// A validated 10-character ISBN in canonical form.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Isbn10(String);

impl Isbn10 {
    /// Parse and validate an ISBN-10, accepting separator punctuation.
    pub fn new(value: impl AsRef<str>) -> Result<Self, IsbnError> {
        let normalized = normalize(value.as_ref())?;
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
        Ok(Self(normalized))
    }

    /// The canonical separator-free form.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The check character, a digit or 'X'.
    pub fn check_digit(&self) -> char {
        char::from(self.0.as_bytes()[9])
    }

    /// The 13-digit equivalent in the 978 namespace.
    ///
    /// Cannot fail: a constructed `Isbn10` has already passed its checksum.
    pub fn to_isbn13(&self) -> Isbn13 {
        Isbn13(promote(&self.0[..9]))
    }
}

impl fmt::Display for Isbn10 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Isbn10 {
    type Err = IsbnError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl Serialize for Isbn10 {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for Isbn10 {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::new(s).map_err(serde::de::Error::custom)
    }
}

/// A validated 13-digit ISBN in canonical form.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Isbn13(String);

impl Isbn13 {
    /// Parse and validate an ISBN-13, accepting separator punctuation.
    pub fn new(value: impl AsRef<str>) -> Result<Self, IsbnError> {
        let normalized = normalize(value.as_ref())?;
        if normalized.len() != 13 {
            return Err(IsbnError::InvalidLength {
                expected: 13,
                found: normalized.len(),
            });
        }
        let bytes = normalized.as_bytes();
        let computed = check_digit13_of(&bytes[..12]);
        let supplied = char::from(bytes[12]);
        if computed != supplied {
            return Err(IsbnError::CheckDigitMismatch { computed, found: supplied });
        }
        Ok(Self(normalized))
    }

    /// The canonical separator-free form.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The check digit, always 0-9.
    pub fn check_digit(&self) -> char {
        char::from(self.0.as_bytes()[12])
    }
}

impl fmt::Display for Isbn13 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Isbn13 {
    type Err = IsbnError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl Serialize for Isbn13 {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for Isbn13 {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::new(s).map_err(serde::de::Error::custom)
    }
}
