//! Common Encoding/Decoding Utilities
//!
//! Positional arithmetic shared by the digit and chunk codecs.
//!
//! ## Overview
//!
//! - `accumulate` folds digits into a magnitude, most significant first
//!   (Horner evaluation), so no intermediate value is ever truncated.
//! - `extract` peels digits off a magnitude, least significant first.
//!
//! Both switch to shift/mask arithmetic when the radix is a power of two.
//! The results are identical to the multiply/divide path.

use entities_digit_vector::Radix;
use malachite::Integer;

/// Compute `Σ digits[i] * base^i` exactly
///
/// Digits must already be validated against `radix`.
pub(crate) fn accumulate(digits: &[u64], radix: Radix) -> Integer {
    let mut value = Integer::from(0);
    match radix.bits() {
        Some(bits) => {
            let shift = u64::from(bits);
            for &digit in digits.iter().rev() {
                value <<= shift;
                value += Integer::from(digit);
            }
        }
        None => {
            let base = radix.to_integer();
            for &digit in digits.iter().rev() {
                value *= &base;
                value += Integer::from(digit);
            }
        }
    }
    value
}

/// Split a non-negative magnitude into normalized little-endian digits
///
/// Zero yields no digits.
pub(crate) fn extract(magnitude: &Integer, radix: Radix) -> Vec<u64> {
    let mut digits = Vec::new();
    let mut v = magnitude.clone();
    match radix.bits() {
        Some(bits) => {
            let shift = u64::from(bits);
            let mask = Integer::from(radix.base() - 1);
            while v > 0 {
                let remainder = &v & &mask;
                // Masked to fewer than 64 bits, so it fits in u64
                digits.push(u64::try_from(&remainder).unwrap_or(0));
                v >>= shift;
            }
        }
        None => {
            let base = radix.to_integer();
            while v > 0 {
                let remainder = &v % &base;
                // Remainder is always < base, so it fits in u64
                digits.push(u64::try_from(&remainder).unwrap_or(0));
                v /= &base;
            }
        }
    }
    digits
}
