//! Radix Module
//!
//! Validated positional base for digit sequences.
//!
//! The reference radix is 2^30: each digit carries 30 bits and is stored in a
//! 32-bit chunk. Any base of at least 2 is accepted. Power-of-two bases are
//! flagged so codecs can use shifts and masks instead of division.

use malachite::Integer;

use crate::error::{DigitError, DigitResult};

/// Positional base, always at least 2
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Radix {
    base: u64,
}

impl Radix {
    /// Bits per digit in the reference layout
    pub const REFERENCE_BITS: u32 = 30;

    /// The reference radix, 2^30
    pub const REFERENCE: Radix = Radix {
        base: 1 << Self::REFERENCE_BITS,
    };

    /// Create a radix, rejecting bases below 2
    ///
    /// # Examples
    ///
    /// ```rust
    /// use entities_digit_vector::{DigitError, Radix};
    ///
    /// assert_eq!(Radix::new(10).unwrap().base(), 10);
    /// assert_eq!(Radix::new(1), Err(DigitError::InvalidBase(1)));
    /// ```
    pub fn new(base: u64) -> DigitResult<Self> {
        if base < 2 {
            log::debug!("rejecting base {}", base);
            return Err(DigitError::InvalidBase(base));
        }
        Ok(Self { base })
    }

    /// Create a radix from a signed base; negative bases are reported as `InvalidBase(0)`
    pub fn from_signed(base: i64) -> DigitResult<Self> {
        match u64::try_from(base) {
            Ok(base) => Self::new(base),
            Err(_) => {
                log::debug!("rejecting negative base {}", base);
                Err(DigitError::InvalidBase(0))
            }
        }
    }

    /// Create the radix 2^bits
    ///
    /// `bits` must be in `1..=63`. Zero bits is reported as `InvalidBase(1)`,
    /// a radix too wide for `u64` as `InvalidBase(0)`.
    pub fn power_of_two(bits: u32) -> DigitResult<Self> {
        if bits == 0 || bits >= u64::BITS {
            log::debug!("rejecting power-of-two radix with {} bits", bits);
            return Err(DigitError::InvalidBase(if bits == 0 { 1 } else { 0 }));
        }
        Ok(Self { base: 1u64 << bits })
    }

    pub fn base(&self) -> u64 {
        self.base
    }

    /// Number of bits per digit if the base is a power of two
    pub fn bits(&self) -> Option<u32> {
        if self.base.is_power_of_two() {
            Some(self.base.trailing_zeros())
        } else {
            None
        }
    }

    /// Check whether `digit` is a valid digit in this radix
    pub fn admits(&self, digit: u64) -> bool {
        digit < self.base
    }

    /// The base as an arbitrary-precision integer
    pub fn to_integer(&self) -> Integer {
        Integer::from(self.base)
    }
}

impl Default for Radix {
    fn default() -> Self {
        Self::REFERENCE
    }
}

impl TryFrom<u64> for Radix {
    type Error = DigitError;

    fn try_from(base: u64) -> DigitResult<Self> {
        Self::new(base)
    }
}
