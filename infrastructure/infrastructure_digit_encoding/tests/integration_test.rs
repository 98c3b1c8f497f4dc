//! Integration tests for infrastructure_digit_encoding crate
//!
//! These tests verify that digit vector encoding/decoding reproduces exact
//! integer values end-to-end, including values far beyond a machine word.

use infrastructure_digit_encoding::*;

const REFERENCE_BASE: u64 = 1 << 30;

/// A 300-digit decimal integer
fn three_hundred_digit_number() -> BigNumber {
    let text: String = "1234567890".repeat(30);
    assert_eq!(text.len(), 300);
    text.parse().unwrap()
}

fn sample_values() -> Vec<BigNumber> {
    let mut values = vec![
        BigNumber::from_i64(0),
        BigNumber::from_i64(1),
        BigNumber::from_i64(-1),
        BigNumber::from_i64(12345),
        BigNumber::from_u64(REFERENCE_BASE - 1),
        BigNumber::from_u64(REFERENCE_BASE),
        BigNumber::from_u64(REFERENCE_BASE + 1),
        BigNumber::from_i64(i64::MAX),
        BigNumber::from_i64(i64::MIN),
        BigNumber::from_u64(u64::MAX),
        BigNumber::from_i128(i128::MIN),
        BigNumber::from_u128(u128::MAX),
    ];
    let big = three_hundred_digit_number();
    values.push(big.negate());
    values.push(big);
    values
}

#[test]
fn test_round_trip_all_values_all_bases() {
    let bases = [2u64, 3, 10, 16, 255, 256, 1000, REFERENCE_BASE, u64::MAX];
    for base in bases {
        for value in sample_values() {
            let (digits, sign) = encode(&value, base).unwrap();
            assert!(digits.is_normalized(), "base {} value {}", base, value);
            let decoded = decode(digits.digits(), sign, base).unwrap();
            assert_eq!(decoded, value, "base {}", base);
        }
    }
}

#[test]
fn test_three_hundred_digit_value_at_reference_base() {
    let value = three_hundred_digit_number();
    let (digits, sign) = DigitCodec::encode(&value, REFERENCE_BASE).unwrap();

    // 300 decimal digits need ceil(300 * log2(10) / 30) = 34 digits of 30 bits
    assert_eq!(digits.len(), 34);
    assert_eq!(sign, Sign::NonNegative);
    assert!(digits.iter().all(|&d| d < REFERENCE_BASE));

    let decoded = DigitCodec::decode(digits.digits(), sign, REFERENCE_BASE).unwrap();
    assert_eq!(decoded, value);
    assert_eq!(decoded.to_string(), "1234567890".repeat(30));
}

#[test]
fn test_three_hundred_digit_value_through_chunks() {
    let value = three_hundred_digit_number().negate();
    let (bytes, count, sign) = ChunkCodec::encode_chunks(&value, ChunkLayout::REFERENCE).unwrap();
    assert_eq!(bytes.len(), count * 4);
    assert_eq!(sign, Sign::Negative);

    let decoded = ChunkCodec::decode_chunks(&bytes, count, sign, ChunkLayout::REFERENCE).unwrap();
    assert_eq!(decoded, value);
}

#[test]
fn test_full_reconstruction_differs_from_truncated_word() {
    let value = three_hundred_digit_number();
    let (bytes, count, sign) = ChunkCodec::encode_chunks(&value, ChunkLayout::REFERENCE).unwrap();

    let full = ChunkCodec::decode_chunks(&bytes, count, sign, ChunkLayout::REFERENCE).unwrap();
    let truncated = ChunkCodec::truncated_word(&bytes).unwrap();

    assert_eq!(full, value);
    assert_ne!(full, BigNumber::from_u64(truncated));
}

#[test]
fn test_single_digit_magnitudes_at_reference_base() {
    for d in [0u64, 1, 12345, 1 << 20, REFERENCE_BASE - 1] {
        assert_eq!(
            decode(&[d], Sign::NonNegative, REFERENCE_BASE).unwrap(),
            BigNumber::from_u64(d)
        );
    }
}

#[test]
fn test_zero_encodes_to_empty_in_every_base() {
    for base in [2u64, 10, REFERENCE_BASE] {
        let (digits, sign) = encode(&BigNumber::from_i64(0), base).unwrap();
        assert!(digits.is_empty());
        assert_eq!(sign, Sign::NonNegative);
    }
}

#[test]
fn test_error_cases() {
    assert!(matches!(
        decode(&[REFERENCE_BASE], Sign::NonNegative, REFERENCE_BASE),
        Err(DigitError::InvalidDigit { .. })
    ));
    assert_eq!(
        decode(&[1], Sign::NonNegative, 1),
        Err(DigitError::InvalidBase(1))
    );
    assert_eq!(
        encode(&BigNumber::from_i64(1), 0),
        Err(DigitError::InvalidBase(0))
    );
}

#[test]
fn test_errors_are_deterministic() {
    let first = decode(&[3, 11], Sign::NonNegative, 10);
    let second = decode(&[3, 11], Sign::NonNegative, 10);
    assert_eq!(first, second);
    assert_eq!(
        first,
        Err(DigitError::InvalidDigit {
            index: 1,
            digit: 11,
            base: 10
        })
    );
}

#[test]
fn test_concurrent_decoding() {
    let value = three_hundred_digit_number();
    let (digits, sign) = encode(&value, REFERENCE_BASE).unwrap();
    let digits = std::sync::Arc::new(digits);

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let digits = std::sync::Arc::clone(&digits);
            std::thread::spawn(move || DigitCodec::decode_sequence(&digits, sign))
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), value);
    }
}
