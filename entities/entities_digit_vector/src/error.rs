//! Digit Error Module
//!
//! Validation errors shared by the digit vector types and the codecs built on them.

/// Digit vector errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DigitError {
    /// Digit is negative or not smaller than the base
    InvalidDigit {
        /// Position of the offending digit (0 = least significant)
        index: usize,
        /// The digit as supplied
        digit: i128,
        /// Base the digit was checked against
        base: u64,
    },
    /// Base is smaller than 2
    InvalidBase(u64),
    /// Chunk layout cannot carry digits
    InvalidLayout {
        /// Chunk width in bytes
        chunk_bytes: usize,
        /// Payload bits per chunk
        digit_bits: u32,
    },
    /// Byte buffer too short for the requested digit count
    BufferTooShort {
        /// Bytes required
        needed: usize,
        /// Bytes supplied
        available: usize,
    },
}

impl std::fmt::Display for DigitError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DigitError::InvalidDigit { index, digit, base } => {
                write!(f, "Invalid digit {} at index {} for base {}", digit, index, base)
            }
            DigitError::InvalidBase(base) => write!(f, "Invalid base {} (must be at least 2)", base),
            DigitError::InvalidLayout {
                chunk_bytes,
                digit_bits,
            } => write!(
                f,
                "Invalid chunk layout: {} bits in a {}-byte chunk",
                digit_bits, chunk_bytes
            ),
            DigitError::BufferTooShort { needed, available } => write!(
                f,
                "Buffer too short: needed {} bytes, got {}",
                needed, available
            ),
        }
    }
}

impl std::error::Error for DigitError {}

/// Result type for digit vector operations
pub type DigitResult<T> = Result<T, DigitError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_digit_display() {
        let error = DigitError::InvalidDigit {
            index: 2,
            digit: -1,
            base: 10,
        };
        assert_eq!(error.to_string(), "Invalid digit -1 at index 2 for base 10");
    }

    #[test]
    fn test_invalid_base_display() {
        assert_eq!(
            DigitError::InvalidBase(1).to_string(),
            "Invalid base 1 (must be at least 2)"
        );
    }

    #[test]
    fn test_buffer_too_short_display() {
        let error = DigitError::BufferTooShort {
            needed: 8,
            available: 3,
        };
        assert!(error.to_string().contains("needed 8 bytes, got 3"));
    }

    #[test]
    fn test_error_is_std_error() {
        let error: Box<dyn std::error::Error> = Box::new(DigitError::InvalidBase(0));
        assert!(error.to_string().starts_with("Invalid base"));
    }
}
