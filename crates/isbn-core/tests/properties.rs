//! Property tests for checksum arithmetic and format tolerance.

use proptest::prelude::*;

use isbn_core::{check_digit10, check_digit13, to_isbn13, validate, validate10, validate13};

/// A string of `count` random decimal digits.
fn digits(count: usize) -> impl Strategy<Value = String> {
    proptest::collection::vec(0u8..10, count)
        .prop_map(|values| values.into_iter().map(|d| char::from(b'0' + d)).collect())
}

/// Replace the digit at `position` with a different one.
fn mutate_digit(identifier: &str, position: usize, bump: u8) -> String {
    let mut bytes = identifier.as_bytes().to_vec();
    bytes[position] = b'0' + (bytes[position] - b'0' + bump) % 10;
    String::from_utf8(bytes).expect("digit mutation keeps ASCII")
}

proptest! {
    #[test]
    fn computed_check_digit_always_validates(payload in digits(9)) {
        let check = check_digit10(&format!("{payload}0")).unwrap();
        let isbn10 = format!("{payload}{check}");
        prop_assert!(validate10(&isbn10));
        prop_assert!(validate(&isbn10));

        let isbn13 = to_isbn13(&isbn10).unwrap();
        prop_assert!(validate13(&isbn13));
        prop_assert!(isbn13.starts_with("978"));
        prop_assert_eq!(check_digit13(&isbn13).unwrap(), isbn13.chars().last().unwrap());
    }

    #[test]
    fn single_digit_error_is_detected_in_isbn10(
        payload in digits(9),
        position in 0usize..9,
        bump in 1u8..10,
    ) {
        let check = check_digit10(&format!("{payload}0")).unwrap();
        let isbn10 = format!("{payload}{check}");
        let mutated = mutate_digit(&isbn10, position, bump);
        prop_assert!(!validate10(&mutated));
        prop_assert!(!validate(&mutated));
    }

    #[test]
    fn single_digit_error_is_detected_in_isbn13(
        payload in digits(12),
        position in 0usize..12,
        bump in 1u8..10,
    ) {
        let check = check_digit13(&format!("{payload}0")).unwrap();
        let isbn13 = format!("{payload}{check}");
        let mutated = mutate_digit(&isbn13, position, bump);
        prop_assert!(!validate13(&mutated));
        prop_assert!(!validate(&mutated));
    }

    #[test]
    fn separators_do_not_affect_validity(payload in digits(9), split in 1usize..10) {
        let check = check_digit10(&format!("{payload}0")).unwrap();
        let isbn10 = format!("{payload}{check}");
        let hyphenated = format!("{}-{}", &isbn10[..split], &isbn10[split..]);
        let spaced = format!("{} {}", &isbn10[..split], &isbn10[split..]);
        prop_assert!(validate10(&hyphenated));
        prop_assert!(validate10(&spaced));
        prop_assert_eq!(to_isbn13(&hyphenated).unwrap(), to_isbn13(&isbn10).unwrap());
    }

    #[test]
    fn other_lengths_never_validate(values in proptest::collection::vec(0u8..10, 0..30usize)) {
        prop_assume!(values.len() != 10 && values.len() != 13);
        let input: String = values.into_iter().map(|d| char::from(b'0' + d)).collect();
        prop_assert!(!validate(&input));
        prop_assert!(!validate10(&input));
        prop_assert!(!validate13(&input));
    }
}
