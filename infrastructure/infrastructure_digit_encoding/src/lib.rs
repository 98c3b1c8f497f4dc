//! Infrastructure Layer: Digit Vector Encoding
//!
//! Converts between digit vectors and arbitrary precision integers.
//!
//! ## Overview
//!
//! A digit vector is an ordered sequence of fixed-width unsigned digits, least
//! significant first, plus a sign. The `infrastructure_digit_encoding` crate
//! reconstructs the exact integer such a vector denotes and produces the
//! normalized vector for a given integer.
//!
//! ## Codecs
//!
//! - **[`digit_codec`](digit_codec/index.html)**: `decode`/`encode` between digits in any
//!   base `>= 2` and `BigNumber`.
//!
//! - **[`chunk_codec`](chunk_codec/index.html)**: Reads and writes digits stored as
//!   little-endian chunks in a byte buffer (reference layout: 30-bit digits in
//!   4-byte chunks).
//!
//! ## See Also
//!
//! - [`entities_digit_vector`](../entities_digit_vector/index.html): BigNumber, DigitSequence, Radix and Sign types

mod common;

pub mod chunk_codec;
pub mod digit_codec;

pub use chunk_codec::{ChunkCodec, ChunkLayout};
pub use digit_codec::{decode, encode, DigitCodec};

// Re-export entity types for convenience
pub use entities_digit_vector::{BigNumber, DigitError, DigitResult, DigitSequence, Radix, Sign};
