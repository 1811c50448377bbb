//! Near-black threshold

use std::fmt;
use std::str::FromStr;

/// Default threshold: channels below 30 count as near-black.
pub const DEFAULT_TOLERANCE: u8 = 30;

/// Threshold for the near-black predicate.
///
/// A pixel is near-black when its red, green and blue channels are all
/// strictly below this value. A tolerance of 0 therefore admits no pixel at
/// all, and 255 admits everything except pixels with a saturated channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Tolerance(u8);

impl Tolerance {
    /// Wrap a raw threshold.
    #[inline]
    pub const fn new(value: u8) -> Self {
        Self(value)
    }

    /// The raw threshold.
    #[inline]
    pub const fn value(self) -> u8 {
        self.0
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self(DEFAULT_TOLERANCE)
    }
}

impl fmt::Display for Tolerance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u8> for Tolerance {
    fn from(value: u8) -> Self {
        Self(value)
    }
}

/// Error returned when a threshold does not fit in `0..=255`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToleranceError {
    /// Value above 255
    OutOfRange(u32),
    /// Input was not an unsigned integer
    NotANumber(String),
}

impl fmt::Display for ToleranceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ToleranceError::OutOfRange(v) => {
                write!(f, "tolerance {} out of range (expected 0-255)", v)
            }
            ToleranceError::NotANumber(s) => {
                write!(f, "tolerance '{}' is not a non-negative integer", s)
            }
        }
    }
}

impl std::error::Error for ToleranceError {}

impl TryFrom<u32> for Tolerance {
    type Error = ToleranceError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        u8::try_from(value)
            .map(Self)
            .map_err(|_| ToleranceError::OutOfRange(value))
    }
}

impl FromStr for Tolerance {
    type Err = ToleranceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let value: u32 = trimmed
            .parse()
            .map_err(|_| ToleranceError::NotANumber(trimmed.to_string()))?;
        Self::try_from(value)
    }
}
