//! Chart configuration.

use std::fmt::{Display, Formatter};

use bazi_search::TermSearchConfig;
use bazi_time::CivilClock;

use crate::error::ChartError;

/// Largest accepted fixed clock offset, minutes either side of UT.
const MAX_OFFSET_MINUTES: i32 = 18 * 60;

/// Which civil clock a birth time was read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ClockPolicy {
    /// Standard zone time implied by the longitude (nearest 15° meridian).
    #[default]
    ZoneFromLongitude,
    /// Local mean time of the birth longitude.
    LocalMeanTime,
    /// An explicit offset from UT in minutes, east positive.
    FixedOffsetMinutes(i32),
}

impl ClockPolicy {
    /// The clock this policy selects at `longitude_deg`.
    pub fn clock_for(&self, longitude_deg: f64) -> CivilClock {
        match *self {
            Self::ZoneFromLongitude => CivilClock::zone_for_longitude(longitude_deg),
            Self::LocalMeanTime => CivilClock::local_mean_time(longitude_deg),
            Self::FixedOffsetMinutes(m) => CivilClock::fixed_offset(f64::from(m)),
        }
    }
}

impl Display for ClockPolicy {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ZoneFromLongitude => f.write_str("zone"),
            Self::LocalMeanTime => f.write_str("lmt"),
            Self::FixedOffsetMinutes(m) => write!(f, "{m}"),
        }
    }
}

/// Configuration for [`PillarComputer`](crate::PillarComputer).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartConfig {
    pub clock: ClockPolicy,
    pub search: TermSearchConfig,
    /// Term schedules kept in memory (default 64).
    pub cache_capacity: usize,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            clock: ClockPolicy::default(),
            search: TermSearchConfig::default(),
            cache_capacity: 64,
        }
    }
}

impl ChartConfig {
    pub fn validate(&self) -> Result<(), ChartError> {
        self.search.validate().map_err(ChartError::InvalidConfig)?;
        if self.cache_capacity == 0 {
            return Err(ChartError::InvalidConfig(
                "cache_capacity must be greater than zero",
            ));
        }
        if matches!(self.clock, ClockPolicy::FixedOffsetMinutes(m) if m.abs() > MAX_OFFSET_MINUTES) {
            return Err(ChartError::InvalidConfig(
                "clock offset must be within ±18 hours",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        let config = ChartConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.clock, ClockPolicy::ZoneFromLongitude);
    }

    #[test]
    fn rejects_zero_cache() {
        let config = ChartConfig {
            cache_capacity: 0,
            ..ChartConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_wild_offset() {
        let config = ChartConfig {
            clock: ClockPolicy::FixedOffsetMinutes(20 * 60),
            ..ChartConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn clocks_per_policy() {
        assert_eq!(ClockPolicy::ZoneFromLongitude.clock_for(121.5).offset_minutes(), 480.0);
        assert_eq!(ClockPolicy::LocalMeanTime.clock_for(121.5).offset_minutes(), 486.0);
        assert_eq!(ClockPolicy::FixedOffsetMinutes(-300).clock_for(121.5).offset_minutes(), -300.0);
    }
}
