//! Digit Sequence Module
//!
//! Ordered positional digits of an integer magnitude, least significant first.
//!
//! A `DigitSequence` is bound to the `Radix` its digits were validated
//! against: every digit `d` satisfies `0 <= d < base`, and the digit at index
//! `i` carries weight `base^i`.
//!
//! ## Zero
//!
//! The canonical representation of zero is the empty sequence. Sequences with
//! trailing (most significant) zero digits, such as `[0]` or `[5, 0]`, are still
//! valid input and denote the same value as their normalized form.

use num_traits::{PrimInt, ToPrimitive};

use crate::error::{DigitError, DigitResult};
use crate::radix::Radix;

/// Validated little-endian digit vector
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DigitSequence {
    digits: Vec<u64>,
    radix: Radix,
}

impl DigitSequence {
    /// Create a sequence, checking every digit against the radix
    ///
    /// # Examples
    ///
    /// ```rust
    /// use entities_digit_vector::{DigitSequence, Radix};
    ///
    /// let digits = DigitSequence::new(vec![3, 2, 1], Radix::new(10).unwrap()).unwrap();
    /// assert_eq!(digits.len(), 3);
    /// assert!(DigitSequence::new(vec![10], Radix::new(10).unwrap()).is_err());
    /// ```
    pub fn new(digits: Vec<u64>, radix: Radix) -> DigitResult<Self> {
        if let Some(index) = digits.iter().position(|&d| !radix.admits(d)) {
            let digit = digits[index];
            log::debug!(
                "rejecting digit {} at index {} for base {}",
                digit,
                index,
                radix.base()
            );
            return Err(DigitError::InvalidDigit {
                index,
                digit: i128::from(digit),
                base: radix.base(),
            });
        }
        Ok(Self { digits, radix })
    }

    /// Create a sequence from any primitive integer digits
    ///
    /// Negative digits and digits not smaller than the base are rejected with
    /// `InvalidDigit`.
    pub fn from_digits<D: PrimInt>(digits: &[D], radix: Radix) -> DigitResult<Self> {
        let mut out = Vec::with_capacity(digits.len());
        for (index, digit) in digits.iter().enumerate() {
            match digit.to_u64() {
                Some(d) if radix.admits(d) => out.push(d),
                _ => {
                    let digit = digit.to_i128().unwrap_or(i128::MAX);
                    log::debug!(
                        "rejecting digit {} at index {} for base {}",
                        digit,
                        index,
                        radix.base()
                    );
                    return Err(DigitError::InvalidDigit {
                        index,
                        digit,
                        base: radix.base(),
                    });
                }
            }
        }
        Ok(Self { digits: out, radix })
    }

    /// The canonical zero: no digits
    pub fn zero(radix: Radix) -> Self {
        Self {
            digits: Vec::new(),
            radix,
        }
    }

    pub fn radix(&self) -> Radix {
        self.radix
    }

    pub fn digits(&self) -> &[u64] {
        &self.digits
    }

    pub fn len(&self) -> usize {
        self.digits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.digits.is_empty()
    }

    /// Check whether all digits are zero (including the empty sequence)
    pub fn is_zero(&self) -> bool {
        self.digits.iter().all(|&d| d == 0)
    }

    /// Highest-index digit, if any
    pub fn most_significant(&self) -> Option<u64> {
        self.digits.last().copied()
    }

    /// Check for the canonical form: empty, or a non-zero most significant digit
    pub fn is_normalized(&self) -> bool {
        self.most_significant().map_or(true, |d| d != 0)
    }

    /// Strip trailing (most significant) zero digits
    pub fn normalize(mut self) -> Self {
        while self.digits.last() == Some(&0) {
            self.digits.pop();
        }
        self
    }

    pub fn iter(&self) -> std::slice::Iter<'_, u64> {
        self.digits.iter()
    }

    pub fn into_digits(self) -> Vec<u64> {
        self.digits
    }
}

impl<'a> IntoIterator for &'a DigitSequence {
    type Item = &'a u64;
    type IntoIter = std::slice::Iter<'a, u64>;

    fn into_iter(self) -> Self::IntoIter {
        self.digits.iter()
    }
}
