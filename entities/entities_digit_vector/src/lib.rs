//! Entities Layer: Digit Vectors
//!
//! Provides the value types for digit-vector integers:
//! - Big numbers (the decoded, arbitrary precision value)
//! - Signs
//! - Radixes (positional bases, reference 2^30)
//! - Validated digit sequences
//!
//! The codecs that convert between these types live in
//! `infrastructure_digit_encoding`.

pub mod big;
pub mod digits;
pub mod error;
pub mod radix;
pub mod sign;

pub use big::{BigNumber, ParseBigNumberError};
pub use digits::DigitSequence;
pub use error::{DigitError, DigitResult};
pub use radix::Radix;
pub use sign::Sign;
