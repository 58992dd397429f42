//! ISBN validation and conversion per ISO 2108.
//!
//! This crate implements the check-digit arithmetic and format normalization
//! for International Standard Book Numbers in both forms:
//!
//! - **ISBN-10**: modulus-11 checksum; the check character may be a digit or
//!   `'X'` (the ISBN Users' Manual's roman-numeral ten).
//! - **ISBN-13**: EAN-13-style modulus-10 checksum; always ends in a digit.
//!
//! Input may carry hyphen or space separators anywhere; every operation
//! strips them before doing arithmetic, so `"0-8362-2088-9"` and
//! `"0836220889"` are the same identifier.
//!
//! Two API layers are provided:
//!
//! - Free functions mirroring the classic surface: [`check_digit10`],
//!   [`check_digit13`], [`validate`], [`validate10`], [`validate13`], and
//!   [`to_isbn13`]. Check-digit computation and conversion report what went
//!   wrong via [`IsbnError`]; the `validate*` family collapses every failure
//!   to `false`.
//! - Validated newtypes [`Isbn10`] and [`Isbn13`] that can only be
//!   constructed from an identifier whose checksum holds.
//!
//! Registrant metadata, hyphenation, and bibliographic lookup are out of
//! scope; identifiers are treated as opaque checksummed strings.

pub mod checksum;
pub mod convert;
pub mod error;
pub mod ids;
mod normalize;
pub mod validate;

pub use checksum::{check_digit10, check_digit13};
pub use convert::to_isbn13;
pub use error::{IsbnError, Result};
pub use ids::{Isbn10, Isbn13};
pub use validate::{validate, validate10, validate13};
