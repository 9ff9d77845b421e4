//! Error types for sexagenary indexing.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from building or locating a Stem-Branch pair.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CycleError {
    /// Stem and branch indices differ in parity; no cycle position has them.
    ParityMismatch { stem: u8, branch: u8 },
    /// Cycle position is not in 0..60.
    PositionOutOfRange(u8),
    /// Stem index not in 0..10 or branch index not in 0..12.
    IndexOutOfRange { stem: u8, branch: u8 },
}

impl Display for CycleError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ParityMismatch { stem, branch } => {
                write!(f, "stem {stem} and branch {branch} differ in parity")
            }
            Self::PositionOutOfRange(p) => write!(f, "cycle position {p} is not in 0..60"),
            Self::IndexOutOfRange { stem, branch } => {
                write!(f, "stem {stem} / branch {branch} out of range")
            }
        }
    }
}

impl Error for CycleError {}
