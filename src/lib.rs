pub mod period;
pub mod scanner;
pub mod units;

use std::fmt;

pub use period::TimePeriod;
pub use scanner::{parse_seconds, parse_seconds_with, ParseMode, ParseOptions};

/// Errors returned when a duration string cannot be turned into seconds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseDurationError {
    /// Strict mode only: the string contained no quantity at all.
    Empty,
    /// A run of digits did not fit in 64 bits, or (strict mode only) the
    /// quantity carried a sign or a fraction.
    InvalidNumber(String),
    /// Strict mode only: the unit was not recognized (e.g., `5xyz`).
    UnsupportedUnit(String),
    /// The total number of seconds did not fit in 64 bits.
    Overflow,
}

impl fmt::Display for ParseDurationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseDurationError::Empty => write!(f, "Duration string contains no quantity"),
            ParseDurationError::InvalidNumber(digits) => {
                write!(f, "Invalid number in duration: {digits}")
            }
            ParseDurationError::UnsupportedUnit(unit) => {
                write!(f, "Unsupported duration unit: {unit}")
            }
            ParseDurationError::Overflow => write!(f, "Duration is too large"),
        }
    }
}

impl std::error::Error for ParseDurationError {}
