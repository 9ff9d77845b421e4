//! Error types for chart computation.

use std::error::Error;
use std::fmt::{Display, Formatter};

use bazi_cycle::CycleError;
use bazi_ephem::EphemerisError;
use bazi_search::SearchError;
use bazi_time::TimeError;

/// Errors from pillar derivation.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum ChartError {
    /// Out-of-range coordinates or a non-existent calendar date.
    InvalidInput(String),
    /// Invalid chart configuration.
    InvalidConfig(&'static str),
    /// Civil date/time conversion or parsing failed.
    Time(TimeError),
    /// An ephemeris query failed.
    Ephemeris(EphemerisError),
    /// Solar term search or scheduling failed.
    Search(SearchError),
    /// A derived Stem-Branch pair broke the cycle's parity rule.
    Cycle(CycleError),
    /// The birth instant lies outside the schedules computed for its year.
    Unscheduled { year: i32, jd_tt: f64 },
}

impl Display for ChartError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidInput(msg) => write!(f, "invalid input: {msg}"),
            Self::InvalidConfig(msg) => write!(f, "invalid config: {msg}"),
            Self::Time(e) => write!(f, "time error: {e}"),
            Self::Ephemeris(e) => write!(f, "ephemeris error: {e}"),
            Self::Search(e) => write!(f, "search error: {e}"),
            Self::Cycle(e) => write!(f, "cycle error: {e}"),
            Self::Unscheduled { year, jd_tt } => {
                write!(f, "JD(TT) {jd_tt} is not covered by the {year} term schedules")
            }
        }
    }
}

impl Error for ChartError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Time(e) => Some(e),
            Self::Ephemeris(e) => Some(e),
            Self::Search(e) => Some(e),
            Self::Cycle(e) => Some(e),
            _ => None,
        }
    }
}

impl From<TimeError> for ChartError {
    fn from(e: TimeError) -> Self {
        Self::Time(e)
    }
}

impl From<EphemerisError> for ChartError {
    fn from(e: EphemerisError) -> Self {
        Self::Ephemeris(e)
    }
}

impl From<SearchError> for ChartError {
    fn from(e: SearchError) -> Self {
        Self::Search(e)
    }
}

impl From<CycleError> for ChartError {
    fn from(e: CycleError) -> Self {
        Self::Cycle(e)
    }
}
