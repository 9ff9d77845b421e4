//! Error types for ephemeris queries.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from solar ephemeris queries.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum EphemerisError {
    /// Observer location is out of range or non-finite.
    InvalidLocation(&'static str),
    /// A query produced a non-finite value.
    NonFinite { quantity: &'static str, jd_tt: f64 },
    /// Equinox/solstice refinement did not settle.
    NoConvergence { event: &'static str, year: i32 },
}

impl Display for EphemerisError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidLocation(msg) => write!(f, "invalid location: {msg}"),
            Self::NonFinite { quantity, jd_tt } => {
                write!(f, "non-finite {quantity} at JD(TT) {jd_tt}")
            }
            Self::NoConvergence { event, year } => {
                write!(f, "{event} {year} did not converge")
            }
        }
    }
}

impl Error for EphemerisError {}

/// Reject NaN and infinities coming out of a numeric pipeline.
pub(crate) fn finite(value: f64, quantity: &'static str, jd_tt: f64) -> Result<f64, EphemerisError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(EphemerisError::NonFinite { quantity, jd_tt })
    }
}
