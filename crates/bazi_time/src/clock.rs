//! Civil clocks: how a location's wall time relates to Universal Time.
//!
//! A clock is a fixed offset from UT. No daylight-saving or historical
//! zone rules are applied; the offset is whatever the location's
//! longitude implies, or an explicit value supplied by the caller.

use std::fmt::{Display, Formatter};

use crate::civil::CivilDateTime;

/// Minutes of time per degree of longitude.
const MINUTES_PER_DEG: f64 = 4.0;

/// A civil clock defined by its offset from UT.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CivilClock {
    offset_minutes: f64,
}

impl CivilClock {
    /// Universal Time itself.
    pub const UT: Self = Self {
        offset_minutes: 0.0,
    };

    /// Standard zone clock implied by a longitude: the nearest whole hour
    /// (east positive), i.e. a zone meridian at a multiple of 15°.
    pub fn zone_for_longitude(longitude_deg: f64) -> Self {
        Self {
            offset_minutes: (longitude_deg / 15.0).round() * 60.0,
        }
    }

    /// Local mean time: the clock whose meridian is the location itself.
    pub fn local_mean_time(longitude_deg: f64) -> Self {
        Self {
            offset_minutes: longitude_deg * MINUTES_PER_DEG,
        }
    }

    /// A clock at an explicit offset from UT, east positive.
    pub fn fixed_offset(minutes: f64) -> Self {
        Self {
            offset_minutes: minutes,
        }
    }

    /// Offset from UT in minutes, east positive.
    pub fn offset_minutes(&self) -> f64 {
        self.offset_minutes
    }

    /// Longitude of the meridian whose mean solar time this clock keeps.
    pub fn meridian_deg(&self) -> f64 {
        self.offset_minutes / MINUTES_PER_DEG
    }

    /// UT Julian Date for a wall-clock reading on this clock.
    pub fn civil_to_jd_ut(&self, civil: &CivilDateTime) -> f64 {
        civil.to_jd() - self.offset_minutes / 1440.0
    }

    /// Wall-clock reading on this clock at a UT Julian Date.
    pub fn jd_ut_to_civil(&self, jd_ut: f64) -> CivilDateTime {
        CivilDateTime::from_jd(jd_ut + self.offset_minutes / 1440.0)
    }
}

impl Default for CivilClock {
    fn default() -> Self {
        Self::UT
    }
}

impl Display for CivilClock {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let total = self.offset_minutes.round() as i64;
        let sign = if total < 0 { '-' } else { '+' };
        let abs = total.abs();
        write!(f, "UTC{sign}{:02}:{:02}", abs / 60, abs % 60)
    }
}
