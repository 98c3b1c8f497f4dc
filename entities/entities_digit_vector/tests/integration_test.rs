//! Integration tests for entities_digit_vector crate
//!
//! These tests exercise the value types together the way the codecs use them.

use entities_digit_vector::*;

#[test]
fn test_sequence_validation_against_various_radixes() {
    let digits = [0u64, 1, 255];

    assert!(DigitSequence::new(digits.to_vec(), Radix::new(256).unwrap()).is_ok());
    assert!(DigitSequence::new(digits.to_vec(), Radix::REFERENCE).is_ok());

    let err = DigitSequence::new(digits.to_vec(), Radix::new(255).unwrap()).unwrap_err();
    assert_eq!(
        err,
        DigitError::InvalidDigit {
            index: 2,
            digit: 255,
            base: 255
        }
    );
}

#[test]
fn test_invalid_base_is_rejected_before_digits() {
    assert_eq!(Radix::new(1), Err(DigitError::InvalidBase(1)));
    assert_eq!(Radix::new(0), Err(DigitError::InvalidBase(0)));
}

#[test]
fn test_signed_digit_slices() {
    let radix = Radix::REFERENCE;
    let seq = DigitSequence::from_digits(&[1i64, 0, 7], radix).unwrap();
    assert_eq!(seq.digits(), &[1, 0, 7]);

    let err = DigitSequence::from_digits(&[1i64, -7], radix).unwrap_err();
    assert!(matches!(err, DigitError::InvalidDigit { index: 1, digit: -7, .. }));
}

#[test]
fn test_big_number_sign_agrees_with_sign_type() {
    assert_eq!(BigNumber::from_i64(-1).sign(), Sign::Negative);
    assert_eq!(BigNumber::from_i64(0).sign(), Sign::NonNegative);
    assert_eq!(BigNumber::from_i64(1).sign(), Sign::NonNegative);
}

#[test]
fn test_big_number_beyond_machine_words() {
    let text = "1".repeat(300);
    let big: BigNumber = text.parse().unwrap();
    assert_eq!(big.to_string(), text);
    assert_eq!(big.to_i128(), None);
    assert!(big.bit_length() > 128);
}

#[test]
fn test_error_display_is_readable() {
    let err = DigitSequence::new(vec![1 << 30], Radix::REFERENCE).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Invalid digit 1073741824 at index 0 for base 1073741824"
    );
}
