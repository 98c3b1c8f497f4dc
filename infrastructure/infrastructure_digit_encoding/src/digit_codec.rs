//! Digit Codec Module
//!
//! Converts between digit vectors (little-endian positional digits plus a
//! sign) and arbitrary precision integers.
//!
//! ## Decoding
//!
//! `value = Σ digits[i] * base^i`, negated when the sign is negative and the
//! magnitude is non-zero. The sum is accumulated with malachite integers, so
//! values spanning any number of machine words come back exactly.
//!
//! ## Encoding
//!
//! The magnitude is divided by the base until it reaches zero, collecting the
//! remainders as digits. The result is normalized and zero encodes as the
//! empty sequence with a non-negative sign.
//!
//! ## Round-trip
//!
//! `decode(encode(v, b), b) == v` for every integer `v` and base `b >= 2`.

/*
 * %CopyrightBegin%
 *
 * SPDX-License-Identifier: Apache-2.0
 *
 * Copyright Lee Barney 2025. All Rights Reserved.
 *
 * Licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License.
 * You may obtain a copy of the License at
 *
 *     http://www.apache.org/licenses/LICENSE-2.0
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under the License is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 * See the License for the specific language governing permissions and
 * limitations under the License.
 *
 * %CopyrightEnd%
 */

use entities_digit_vector::{BigNumber, DigitResult, DigitSequence, Radix, Sign};
use malachite::base::num::arithmetic::traits::Abs;
use num_traits::PrimInt;

use crate::common::{accumulate, extract};

/// Digit vector codec
pub struct DigitCodec;

impl DigitCodec {
    /// Decode raw digits in the given base
    ///
    /// # Arguments
    ///
    /// * `digits` - Digits, least significant first
    /// * `sign` - Sign of the value
    /// * `base` - Positional base, at least 2
    ///
    /// # Returns
    ///
    /// * `Ok(BigNumber)` - The exact value
    /// * `Err(DigitError::InvalidBase)` - `base < 2`
    /// * `Err(DigitError::InvalidDigit)` - a digit is `>= base`
    ///
    /// # Examples
    ///
    /// ```rust
    /// use entities_digit_vector::{BigNumber, Sign};
    /// use infrastructure_digit_encoding::DigitCodec;
    ///
    /// let value = DigitCodec::decode(&[7], Sign::Negative, 10).unwrap();
    /// assert_eq!(value, BigNumber::from_i64(-7));
    /// ```
    pub fn decode(digits: &[u64], sign: Sign, base: u64) -> DigitResult<BigNumber> {
        let radix = Radix::new(base)?;
        let sequence = DigitSequence::new(digits.to_vec(), radix)?;
        Ok(Self::decode_sequence(&sequence, sign))
    }

    /// Decode digits of any primitive integer type
    ///
    /// Negative digits are rejected with `InvalidDigit`.
    pub fn decode_digits<D: PrimInt>(digits: &[D], sign: Sign, base: u64) -> DigitResult<BigNumber> {
        let radix = Radix::new(base)?;
        let sequence = DigitSequence::from_digits(digits, radix)?;
        Ok(Self::decode_sequence(&sequence, sign))
    }

    /// Decode an already validated sequence
    ///
    /// Trailing zero digits are accepted; a negative sign on a zero magnitude
    /// decodes to zero.
    pub fn decode_sequence(sequence: &DigitSequence, sign: Sign) -> BigNumber {
        log::trace!(
            "decoding {} digits in base {}",
            sequence.len(),
            sequence.radix().base()
        );
        let magnitude = accumulate(sequence.digits(), sequence.radix());
        BigNumber::with_sign(magnitude, sign)
    }

    /// Encode a value in the given base
    ///
    /// # Returns
    ///
    /// * `Ok((digits, sign))` - Normalized digits, least significant first
    /// * `Err(DigitError::InvalidBase)` - `base < 2`
    pub fn encode(value: &BigNumber, base: u64) -> DigitResult<(DigitSequence, Sign)> {
        let radix = Radix::new(base)?;
        Self::encode_with_radix(value, radix)
    }

    /// Encode a value in an already validated radix
    pub fn encode_with_radix(value: &BigNumber, radix: Radix) -> DigitResult<(DigitSequence, Sign)> {
        let magnitude = value.as_integer().abs();
        let digits = extract(&magnitude, radix);
        log::trace!("encoded {} digits in base {}", digits.len(), radix.base());
        let sequence = DigitSequence::new(digits, radix)?;
        Ok((sequence, value.sign()))
    }
}

/// Decode `digits` with `sign` in `base`; see [`DigitCodec::decode`]
pub fn decode(digits: &[u64], sign: Sign, base: u64) -> DigitResult<BigNumber> {
    DigitCodec::decode(digits, sign, base)
}

/// Encode `value` in `base`; see [`DigitCodec::encode`]
pub fn encode(value: &BigNumber, base: u64) -> DigitResult<(DigitSequence, Sign)> {
    DigitCodec::encode(value, base)
}
