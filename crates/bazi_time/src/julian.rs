//! Julian Date ↔ proleptic Gregorian calendar conversions.
//!
//! The Gregorian rules are applied to every year, including those before
//! 1582, so that day counts stay reproducible across implementations.

use crate::civil::{civil_from_days, days_from_civil};

/// Julian Date of the J2000.0 epoch (2000-Jan-01 12:00 TT).
pub const J2000_JD: f64 = 2_451_545.0;

/// Julian Date of 1970-Jan-01 00:00, day 0 of [`days_from_civil`].
pub const UNIX_EPOCH_JD: f64 = 2_440_587.5;

/// Seconds in one day.
pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Days in one Julian century.
const DAYS_PER_CENTURY: f64 = 36_525.0;

/// Julian Date from a calendar date with fractional day.
///
/// `day` may carry a fraction: `15.5` is noon on the 15th.
pub fn calendar_to_jd(year: i32, month: u32, day: f64) -> f64 {
    let whole = day.floor();
    let days = days_from_civil(year, month, whole as u32);
    UNIX_EPOCH_JD + days as f64 + (day - whole)
}

/// Calendar date with fractional day from a Julian Date.
///
/// Inverse of [`calendar_to_jd`].
pub fn jd_to_calendar(jd: f64) -> (i32, u32, f64) {
    let offset = jd - UNIX_EPOCH_JD;
    let whole = offset.floor();
    let (year, month, day) = civil_from_days(whole as i64);
    (year, month, day as f64 + (offset - whole))
}

/// Julian centuries since J2000.0.
pub fn jd_to_centuries(jd: f64) -> f64 {
    (jd - J2000_JD) / DAYS_PER_CENTURY
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn j2000_noon() {
        assert_eq!(calendar_to_jd(2000, 1, 1.5), J2000_JD);
    }

    #[test]
    fn meeus_sputnik() {
        // Meeus, Astronomical Algorithms, Example 7.a
        assert!((calendar_to_jd(1957, 10, 4.81) - 2_436_116.31).abs() < 1e-9);
    }

    #[test]
    fn roundtrip_fractional_day() {
        let jd = calendar_to_jd(1987, 6, 19.5);
        assert_eq!(jd, 2_446_966.0);
        let (y, m, d) = jd_to_calendar(jd);
        assert_eq!((y, m), (1987, 6));
        assert!((d - 19.5).abs() < 1e-9);
    }

    #[test]
    fn centuries_at_j2000_is_zero() {
        assert_eq!(jd_to_centuries(J2000_JD), 0.0);
    }
}
