//! Error types for solar term search.

use std::error::Error;
use std::fmt::{Display, Formatter};

use bazi_ephem::EphemerisError;

/// Errors from longitude-crossing search and term scheduling.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum SearchError {
    /// The ephemeris query failed.
    Ephemeris(EphemerisError),
    /// No crossing of `target_deg` was bracketed and refined within the
    /// search window starting at `jd_from` (TT).
    NoConvergence { target_deg: f64, jd_from: f64 },
    /// Computing term `index` of `year`'s schedule failed.
    Term {
        year: i32,
        index: u8,
        source: Box<SearchError>,
    },
    /// Term `index` of `year` does not come after its predecessor.
    OutOfOrder { year: i32, index: u8 },
    /// Invalid search configuration.
    InvalidConfig(&'static str),
}

impl Display for SearchError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Ephemeris(e) => write!(f, "ephemeris error: {e}"),
            Self::NoConvergence { target_deg, jd_from } => write!(
                f,
                "no crossing of {target_deg}° found from JD(TT) {jd_from}"
            ),
            Self::Term {
                year,
                index,
                source,
            } => write!(f, "solar term {index} of {year}: {source}"),
            Self::OutOfOrder { year, index } => {
                write!(f, "solar term {index} of {year} does not follow term {}", index.saturating_sub(1))
            }
            Self::InvalidConfig(msg) => write!(f, "invalid config: {msg}"),
        }
    }
}

impl Error for SearchError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Ephemeris(e) => Some(e),
            Self::Term { source, .. } => Some(source.as_ref()),
            _ => None,
        }
    }
}

impl From<EphemerisError> for SearchError {
    fn from(e: EphemerisError) -> Self {
        Self::Ephemeris(e)
    }
}
