//! Chunk Codec Module
//!
//! Reads and writes digit sequences stored as fixed-width little-endian
//! unsigned chunks in a byte buffer.
//!
//! Each chunk carries one digit in its low `digit_bits` bits; the bits above
//! must be zero. The reference layout stores 30-bit digits in 4-byte chunks.
//! The digit count and the sign are separate inputs, never derived from the
//! buffer itself.

use entities_digit_vector::{BigNumber, DigitError, DigitResult, DigitSequence, Radix, Sign};

use crate::digit_codec::DigitCodec;

/// Byte layout of a digit chunk
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChunkLayout {
    chunk_bytes: usize,
    digit_bits: u32,
    radix: Radix,
}

impl ChunkLayout {
    /// 30-bit digits in 4-byte chunks
    pub const REFERENCE: ChunkLayout = ChunkLayout {
        chunk_bytes: 4,
        digit_bits: Radix::REFERENCE_BITS,
        radix: Radix::REFERENCE,
    };

    /// Create a layout
    ///
    /// `chunk_bytes` must be 1, 2, 4 or 8 and `digit_bits` must fit in the
    /// chunk (at most 63 bits, so the radix fits in `u64`).
    pub fn new(chunk_bytes: usize, digit_bits: u32) -> DigitResult<Self> {
        let fits = matches!(chunk_bytes, 1 | 2 | 4 | 8)
            && digit_bits >= 1
            && digit_bits < u64::BITS
            && u64::from(digit_bits) <= (chunk_bytes as u64) * 8;
        if !fits {
            log::debug!(
                "rejecting chunk layout: {} bits in {} bytes",
                digit_bits,
                chunk_bytes
            );
            return Err(DigitError::InvalidLayout {
                chunk_bytes,
                digit_bits,
            });
        }
        Ok(Self {
            chunk_bytes,
            digit_bits,
            radix: Radix::power_of_two(digit_bits)?,
        })
    }

    pub fn chunk_bytes(&self) -> usize {
        self.chunk_bytes
    }

    pub fn digit_bits(&self) -> u32 {
        self.digit_bits
    }

    /// Radix of the digits, 2^digit_bits
    pub fn radix(&self) -> Radix {
        self.radix
    }

    /// Bytes needed for `digit_count` chunks
    pub fn byte_len(&self, digit_count: usize) -> Option<usize> {
        digit_count.checked_mul(self.chunk_bytes)
    }
}

impl Default for ChunkLayout {
    fn default() -> Self {
        Self::REFERENCE
    }
}

/// Chunk codec
pub struct ChunkCodec;

impl ChunkCodec {
    /// Read `digit_count` chunks from the start of `bytes`
    ///
    /// # Returns
    ///
    /// * `Ok(DigitSequence)` - The digits, least significant first
    /// * `Err(DigitError::BufferTooShort)` - Fewer than `digit_count` chunks available
    /// * `Err(DigitError::InvalidDigit)` - A chunk has bits set above `digit_bits`
    pub fn read_digits(
        bytes: &[u8],
        digit_count: usize,
        layout: ChunkLayout,
    ) -> DigitResult<DigitSequence> {
        let needed = layout.byte_len(digit_count).unwrap_or(usize::MAX);
        if needed > bytes.len() {
            log::debug!(
                "buffer too short for {} digits: needed {} bytes, got {}",
                digit_count,
                needed,
                bytes.len()
            );
            return Err(DigitError::BufferTooShort {
                needed,
                available: bytes.len(),
            });
        }

        let digits = bytes[..needed]
            .chunks_exact(layout.chunk_bytes)
            .map(read_chunk)
            .collect();
        DigitSequence::new(digits, layout.radix)
    }

    /// Read chunks and decode them with `sign`
    ///
    /// # Examples
    ///
    /// ```rust
    /// use entities_digit_vector::{BigNumber, Sign};
    /// use infrastructure_digit_encoding::{ChunkCodec, ChunkLayout};
    ///
    /// // 2^30 + 5 as two 30-bit digits in 4-byte chunks
    /// let bytes = [5, 0, 0, 0, 1, 0, 0, 0];
    /// let value = ChunkCodec::decode_chunks(&bytes, 2, Sign::NonNegative, ChunkLayout::REFERENCE).unwrap();
    /// assert_eq!(value, BigNumber::from_u64((1 << 30) + 5));
    /// ```
    pub fn decode_chunks(
        bytes: &[u8],
        digit_count: usize,
        sign: Sign,
        layout: ChunkLayout,
    ) -> DigitResult<BigNumber> {
        let digits = Self::read_digits(bytes, digit_count, layout)?;
        Ok(DigitCodec::decode_sequence(&digits, sign))
    }

    /// Write a sequence as little-endian chunks
    ///
    /// The sequence must use the layout's radix.
    pub fn write_digits(digits: &DigitSequence, layout: ChunkLayout) -> DigitResult<Vec<u8>> {
        if digits.radix() != layout.radix {
            log::debug!(
                "cannot write base {} digits into a {}-bit layout",
                digits.radix().base(),
                layout.digit_bits
            );
            return Err(DigitError::InvalidLayout {
                chunk_bytes: layout.chunk_bytes,
                digit_bits: layout.digit_bits,
            });
        }

        let mut buf = Vec::with_capacity(digits.len() * layout.chunk_bytes);
        for &digit in digits {
            buf.extend_from_slice(&digit.to_le_bytes()[..layout.chunk_bytes]);
        }
        Ok(buf)
    }

    /// Encode a value into chunks
    ///
    /// # Returns
    ///
    /// * `(bytes, digit_count, sign)` - Chunk bytes, number of chunks, and sign
    pub fn encode_chunks(
        value: &BigNumber,
        layout: ChunkLayout,
    ) -> DigitResult<(Vec<u8>, usize, Sign)> {
        let (digits, sign) = DigitCodec::encode_with_radix(value, layout.radix)?;
        let bytes = Self::write_digits(&digits, layout)?;
        Ok((bytes, digits.len(), sign))
    }

    /// Read the first 8 bytes as a single `u64`
    ///
    /// This ignores chunk boundaries and every byte past the first word, so it
    /// only matches the full decode for values that fit in one chunk.
    pub fn truncated_word(bytes: &[u8]) -> DigitResult<u64> {
        let word: [u8; 8] = bytes
            .get(..8)
            .and_then(|b| b.try_into().ok())
            .ok_or(DigitError::BufferTooShort {
                needed: 8,
                available: bytes.len(),
            })?;
        Ok(u64::from_le_bytes(word))
    }
}

fn read_chunk(chunk: &[u8]) -> u64 {
    let mut word = [0u8; 8];
    word[..chunk.len()].copy_from_slice(chunk);
    u64::from_le_bytes(word)
}
