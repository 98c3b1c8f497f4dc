//! Sign Module
//!
//! Sign flag carried alongside a digit sequence.

/// Sign of a digit-vector integer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Sign {
    /// Zero or positive
    #[default]
    NonNegative,
    /// Strictly negative (only meaningful with a non-zero magnitude)
    Negative,
}

impl Sign {
    /// Build a sign from a "negative" flag
    pub fn from_negative(is_negative: bool) -> Self {
        if is_negative {
            Sign::Negative
        } else {
            Sign::NonNegative
        }
    }

    pub fn is_negative(self) -> bool {
        self == Sign::Negative
    }
}
