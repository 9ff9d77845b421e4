//! Error types for calendar and time conversions.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from civil calendar validation or parsing.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum TimeError {
    /// The (year, month, day) triple does not name a real calendar date.
    InvalidDate { year: i32, month: u32, day: u32 },
    /// Hour, minute, or second is outside its range.
    InvalidTime { hour: u32, minute: u32, second: f64 },
    /// A textual date/time could not be parsed.
    Parse(String),
}

impl Display for TimeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidDate { year, month, day } => {
                write!(f, "invalid calendar date: {year:04}-{month:02}-{day:02}")
            }
            Self::InvalidTime {
                hour,
                minute,
                second,
            } => write!(f, "invalid time of day: {hour:02}:{minute:02}:{second}"),
            Self::Parse(msg) => write!(f, "parse error: {msg}"),
        }
    }
}

impl Error for TimeError {}
