//! Civil (wall-clock) dates and date-times on the proleptic Gregorian calendar.
//!
//! A [`CivilDateTime`] carries no time zone. Which clock it was read from is
//! described separately by a [`crate::CivilClock`].

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::error::TimeError;
use crate::julian::{SECONDS_PER_DAY, UNIX_EPOCH_JD};

const MILLIS_PER_DAY: i64 = 86_400_000;

/// Whether `year` is a Gregorian leap year.
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in a month, or 0 for a month outside 1..=12.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 0,
    }
}

/// Days since 1970-01-01 for a proleptic Gregorian date.
///
/// Negative for earlier dates. The input is not validated; pass a date that
/// has been checked with [`CivilDate::new`] when that matters.
pub fn days_from_civil(year: i32, month: u32, day: u32) -> i64 {
    let y = i64::from(year) - i64::from(month <= 2);
    let era = y.div_euclid(400);
    let yoe = y - era * 400;
    let mp = i64::from((month + 9) % 12);
    let doy = (153 * mp + 2) / 5 + i64::from(day) - 1;
    let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy;
    era * 146_097 + doe - 719_468
}

/// Proleptic Gregorian date for a day count since 1970-01-01.
pub fn civil_from_days(days: i64) -> (i32, u32, u32) {
    let z = days + 719_468;
    let era = z.div_euclid(146_097);
    let doe = z - era * 146_097;
    let yoe = (doe - doe / 1460 + doe / 36_524 - doe / 146_096) / 365;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let day = (doy - (153 * mp + 2) / 5 + 1) as u32;
    let month = (if mp < 10 { mp + 3 } else { mp - 9 }) as u32;
    let year = yoe + era * 400 + i64::from(month <= 2);
    (year as i32, month, day)
}

/// Whole days from `from` to `to`; negative when `to` is earlier.
pub fn days_between(from: CivilDate, to: CivilDate) -> i64 {
    to.day_number() - from.day_number()
}

/// A calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CivilDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl CivilDate {
    /// Create a date, rejecting days that do not exist.
    pub fn new(year: i32, month: u32, day: u32) -> Result<Self, TimeError> {
        let date = Self { year, month, day };
        date.validate()?;
        Ok(date)
    }

    /// Check that the fields name a real Gregorian date.
    pub fn validate(&self) -> Result<(), TimeError> {
        if self.day == 0 || self.day > days_in_month(self.year, self.month) {
            return Err(TimeError::InvalidDate {
                year: self.year,
                month: self.month,
                day: self.day,
            });
        }
        Ok(())
    }

    /// Days since 1970-01-01.
    pub fn day_number(&self) -> i64 {
        days_from_civil(self.year, self.month, self.day)
    }

    /// Date for a day count since 1970-01-01.
    pub fn from_day_number(days: i64) -> Self {
        let (year, month, day) = civil_from_days(days);
        Self { year, month, day }
    }

    /// 1-based ordinal day within the year.
    pub fn day_of_year(&self) -> u32 {
        (self.day_number() - days_from_civil(self.year, 1, 1) + 1) as u32
    }
}

impl Display for CivilDate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

/// A wall-clock date and time with sub-second precision.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct CivilDateTime {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: f64,
}

impl CivilDateTime {
    /// Create a date-time, rejecting impossible dates and times of day.
    pub fn new(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: f64,
    ) -> Result<Self, TimeError> {
        let dt = Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        };
        dt.validate()?;
        Ok(dt)
    }

    /// Midnight at the start of `date`.
    pub fn midnight(date: CivilDate) -> Self {
        Self {
            year: date.year,
            month: date.month,
            day: date.day,
            hour: 0,
            minute: 0,
            second: 0.0,
        }
    }

    /// Check the calendar date and the time-of-day ranges.
    pub fn validate(&self) -> Result<(), TimeError> {
        self.date().validate()?;
        if self.hour >= 24
            || self.minute >= 60
            || !self.second.is_finite()
            || !(0.0..60.0).contains(&self.second)
        {
            return Err(TimeError::InvalidTime {
                hour: self.hour,
                minute: self.minute,
                second: self.second,
            });
        }
        Ok(())
    }

    /// The calendar date component.
    pub fn date(&self) -> CivilDate {
        CivilDate {
            year: self.year,
            month: self.month,
            day: self.day,
        }
    }

    /// 1-based ordinal day within the year.
    pub fn day_of_year(&self) -> u32 {
        self.date().day_of_year()
    }

    /// Seconds elapsed since midnight.
    pub fn seconds_of_day(&self) -> f64 {
        f64::from(self.hour) * 3600.0 + f64::from(self.minute) * 60.0 + self.second
    }

    /// Julian Date on this clock's own time axis (no offset applied).
    pub fn to_jd(&self) -> f64 {
        UNIX_EPOCH_JD + self.date().day_number() as f64 + self.seconds_of_day() / SECONDS_PER_DAY
    }

    /// Wall-clock value for a Julian Date on the same axis.
    ///
    /// Rounded to the nearest millisecond so values produced from a
    /// [`Self::to_jd`] round trip come back with whole seconds intact.
    pub fn from_jd(jd: f64) -> Self {
        let offset = jd - UNIX_EPOCH_JD;
        let mut days = offset.floor() as i64;
        let mut millis = ((offset - days as f64) * MILLIS_PER_DAY as f64).round() as i64;
        if millis >= MILLIS_PER_DAY {
            days += 1;
            millis -= MILLIS_PER_DAY;
        }
        Self::from_parts(days, millis)
    }

    /// This value shifted by a (possibly negative, fractional) number of minutes.
    pub fn add_minutes(&self, minutes: f64) -> Self {
        let millis_of_day = (self.seconds_of_day() * 1000.0).round() as i64;
        let shift = (minutes * 60_000.0).round() as i64;
        let total = self.date().day_number() * MILLIS_PER_DAY + millis_of_day + shift;
        Self::from_parts(total.div_euclid(MILLIS_PER_DAY), total.rem_euclid(MILLIS_PER_DAY))
    }

    fn from_parts(days: i64, millis_of_day: i64) -> Self {
        let date = CivilDate::from_day_number(days);
        let hour = (millis_of_day / 3_600_000) as u32;
        let minute = ((millis_of_day % 3_600_000) / 60_000) as u32;
        let second = (millis_of_day % 60_000) as f64 / 1000.0;
        Self {
            year: date.year,
            month: date.month,
            day: date.day,
            hour,
            minute,
            second,
        }
    }
}

impl Display for CivilDateTime {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let whole = self.second.floor();
        if (self.second - whole).abs() < 1e-9 {
            write!(
                f,
                "{} {:02}:{:02}:{:02}",
                self.date(),
                self.hour,
                self.minute,
                whole as u32
            )
        } else {
            write!(
                f,
                "{} {:02}:{:02}:{:06.3}",
                self.date(),
                self.hour,
                self.minute,
                self.second
            )
        }
    }
}

impl FromStr for CivilDateTime {
    type Err = TimeError;

    /// Parse `YYYY-MM-DD`, `YYYY-MM-DDTHH:MM` or `YYYY-MM-DDTHH:MM:SS[.fff]`.
    /// A space may replace the `T`. A leading `-` marks a negative year.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let bad = || TimeError::Parse(format!("expected YYYY-MM-DD[THH:MM[:SS]], got {s:?}"));

        let (date_part, time_part) = match s.find(['T', ' ']) {
            Some(pos) => (&s[..pos], Some(&s[pos + 1..])),
            None => (s, None),
        };

        let (negative, date_part) = match date_part.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, date_part),
        };
        let mut fields = date_part.split('-');
        let year: i32 = fields.next().and_then(|v| v.parse().ok()).ok_or_else(bad)?;
        let month: u32 = fields.next().and_then(|v| v.parse().ok()).ok_or_else(bad)?;
        let day: u32 = fields.next().and_then(|v| v.parse().ok()).ok_or_else(bad)?;
        if fields.next().is_some() {
            return Err(bad());
        }
        let year = if negative { -year } else { year };

        let (hour, minute, second) = match time_part {
            None => (0, 0, 0.0),
            Some(t) => {
                let mut parts = t.split(':');
                let hour: u32 = parts.next().and_then(|v| v.parse().ok()).ok_or_else(bad)?;
                let minute: u32 = parts.next().and_then(|v| v.parse().ok()).ok_or_else(bad)?;
                let second: f64 = match parts.next() {
                    Some(v) => v.parse().map_err(|_| bad())?,
                    None => 0.0,
                };
                if parts.next().is_some() {
                    return Err(bad());
                }
                (hour, minute, second)
            }
        };

        Self::new(year, month, day, hour, minute, second)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unix_epoch_is_day_zero() {
        assert_eq!(days_from_civil(1970, 1, 1), 0);
        assert_eq!(civil_from_days(0), (1970, 1, 1));
    }

    #[test]
    fn known_day_numbers() {
        assert_eq!(days_from_civil(2000, 1, 1), 10_957);
        assert_eq!(days_from_civil(1969, 12, 31), -1);
        assert_eq!(days_from_civil(2000, 3, 1), 11_017);
    }

    #[test]
    fn day_count_inverse_across_eras() {
        for days in (-800_000..800_000).step_by(997) {
            let (y, m, d) = civil_from_days(days);
            assert_eq!(days_from_civil(y, m, d), days, "day {days} -> {y}-{m}-{d}");
        }
    }

    #[test]
    fn consecutive_days_are_consecutive_dates() {
        let mut prev = CivilDate::from_day_number(-1);
        for n in 0..2000 {
            let next = CivilDate::from_day_number(n);
            assert!(next > prev);
            assert!(next.validate().is_ok());
            prev = next;
        }
    }

    #[test]
    fn days_between_signs() {
        let epoch = CivilDate::new(2000, 1, 1).unwrap();
        let later = CivilDate::new(2000, 3, 1).unwrap();
        let earlier = CivilDate::new(1999, 12, 31).unwrap();
        assert_eq!(days_between(epoch, later), 60);
        assert_eq!(days_between(epoch, earlier), -1);
    }

    #[test]
    fn leap_rules() {
        assert!(is_leap_year(2000));
        assert!(!is_leap_year(1900));
        assert!(is_leap_year(2024));
        assert!(!is_leap_year(2023));
    }

    #[test]
    fn rejects_nonexistent_dates() {
        assert!(CivilDate::new(2023, 2, 29).is_err());
        assert!(CivilDate::new(2024, 2, 29).is_ok());
        assert!(CivilDate::new(2024, 13, 1).is_err());
        assert!(CivilDate::new(2024, 4, 31).is_err());
        assert!(CivilDate::new(2024, 4, 0).is_err());
    }

    #[test]
    fn rejects_bad_time_of_day() {
        assert!(CivilDateTime::new(2024, 1, 1, 24, 0, 0.0).is_err());
        assert!(CivilDateTime::new(2024, 1, 1, 23, 60, 0.0).is_err());
        assert!(CivilDateTime::new(2024, 1, 1, 23, 59, 60.0).is_err());
        assert!(CivilDateTime::new(2024, 1, 1, 23, 59, f64::NAN).is_err());
    }

    #[test]
    fn day_of_year_leap() {
        assert_eq!(CivilDate::new(2024, 12, 31).unwrap().day_of_year(), 366);
        assert_eq!(CivilDate::new(2023, 3, 1).unwrap().day_of_year(), 60);
    }

    #[test]
    fn add_minutes_crosses_year() {
        let t = CivilDateTime::new(1999, 12, 31, 23, 50, 0.0).unwrap();
        let u = t.add_minutes(15.0);
        assert_eq!(u, CivilDateTime::new(2000, 1, 1, 0, 5, 0.0).unwrap());
        let back = u.add_minutes(-15.0);
        assert_eq!(back, t);
    }

    #[test]
    fn jd_roundtrip_keeps_whole_seconds() {
        let t = CivilDateTime::new(2024, 2, 4, 16, 27, 7.0).unwrap();
        assert_eq!(CivilDateTime::from_jd(t.to_jd()), t);
    }

    #[test]
    fn parse_forms() {
        let a: CivilDateTime = "2000-01-01".parse().unwrap();
        assert_eq!(a, CivilDateTime::new(2000, 1, 1, 0, 0, 0.0).unwrap());
        let b: CivilDateTime = "2024-02-04T16:27".parse().unwrap();
        assert_eq!(b, CivilDateTime::new(2024, 2, 4, 16, 27, 0.0).unwrap());
        let c: CivilDateTime = "2024-02-04 16:27:30.5".parse().unwrap();
        assert!((c.second - 30.5).abs() < 1e-12);
        assert!("2024-02-30".parse::<CivilDateTime>().is_err());
        assert!("yesterday".parse::<CivilDateTime>().is_err());
    }

    #[test]
    fn display_format() {
        let t = CivilDateTime::new(2024, 1, 15, 8, 5, 3.0).unwrap();
        assert_eq!(t.to_string(), "2024-01-15 08:05:03");
    }
}
