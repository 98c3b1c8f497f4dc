//! Big Number Module
//!
//! Arbitrary precision signed integers produced by decoding a digit vector.
//!
//! This module uses the `malachite` crate for arbitrary-precision arithmetic,
//! so decoded values are never constrained to a machine word.

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

use std::fmt;
use std::str::FromStr;

use malachite::base::num::arithmetic::traits::Abs;
use malachite::Integer;

use crate::sign::Sign;

/// Big number representation using malachite's Integer
///
/// This is the decoded form of a digit vector: an exact, unbounded signed
/// integer. Zero is never negative.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BigNumber {
    value: Integer,
}

impl BigNumber {
    /// Create a new big number from i64
    pub fn from_i64(value: i64) -> Self {
        Self {
            value: Integer::from(value),
        }
    }

    /// Create a new big number from u64
    pub fn from_u64(value: u64) -> Self {
        Self {
            value: Integer::from(value),
        }
    }

    /// Create a new big number from i128
    pub fn from_i128(value: i128) -> Self {
        Self {
            value: Integer::from(value),
        }
    }

    /// Create a new big number from u128
    pub fn from_u128(value: u128) -> Self {
        Self {
            value: Integer::from(value),
        }
    }

    /// Convert to i64
    ///
    /// Returns None if the value is out of range
    pub fn to_i64(&self) -> Option<i64> {
        i64::try_from(&self.value).ok()
    }

    /// Convert to u64
    ///
    /// Returns None if the value is negative or too large
    pub fn to_u64(&self) -> Option<u64> {
        u64::try_from(&self.value).ok()
    }

    /// Convert to i128
    ///
    /// Returns None if the value is out of range
    pub fn to_i128(&self) -> Option<i128> {
        i128::try_from(&self.value).ok()
    }

    pub fn is_zero(&self) -> bool {
        self.value == 0
    }

    pub fn is_negative(&self) -> bool {
        self.value < 0
    }

    /// Sign of the number; zero is `NonNegative`
    pub fn sign(&self) -> Sign {
        Sign::from_negative(self.is_negative())
    }

    /// Absolute value
    pub fn abs(&self) -> Self {
        Self {
            value: (&self.value).abs(),
        }
    }

    /// Negation: -x
    pub fn negate(&self) -> Self {
        Self {
            value: -&self.value,
        }
    }

    /// Apply a sign to a magnitude
    ///
    /// A negative sign on a zero magnitude yields zero.
    pub fn with_sign(magnitude: Integer, sign: Sign) -> Self {
        if sign.is_negative() {
            Self { value: -magnitude }
        } else {
            Self { value: magnitude }
        }
    }

    /// Number of significant bits in the magnitude (0 for zero)
    pub fn bit_length(&self) -> u64 {
        let mut magnitude = (&self.value).abs();
        let mut bits = 0u64;
        while magnitude > 0 {
            magnitude >>= 1u64;
            bits += 1;
        }
        bits
    }

    /// Get the internal Integer value
    pub fn as_integer(&self) -> &Integer {
        &self.value
    }

    /// Create from Integer
    pub fn from_integer(value: Integer) -> Self {
        Self { value }
    }

    /// Consume and return the internal Integer
    pub fn into_integer(self) -> Integer {
        self.value
    }
}

impl fmt::Display for BigNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// Error parsing a decimal big number
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseBigNumberError(pub String);

impl fmt::Display for ParseBigNumberError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid decimal integer: {:?}", self.0)
    }
}

impl std::error::Error for ParseBigNumberError {}

impl FromStr for BigNumber {
    type Err = ParseBigNumberError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Integer::from_str(s)
            .map(Self::from_integer)
            .map_err(|_| ParseBigNumberError(s.to_string()))
    }
}

impl From<i64> for BigNumber {
    fn from(value: i64) -> Self {
        Self::from_i64(value)
    }
}

impl From<u64> for BigNumber {
    fn from(value: u64) -> Self {
        Self::from_u64(value)
    }
}

impl From<i32> for BigNumber {
    fn from(value: i32) -> Self {
        Self::from_i64(i64::from(value))
    }
}

impl From<u32> for BigNumber {
    fn from(value: u32) -> Self {
        Self::from_u64(u64::from(value))
    }
}

impl From<Integer> for BigNumber {
    fn from(value: Integer) -> Self {
        Self::from_integer(value)
    }
}
