//! Civil calendar and time-scale helpers.
//!
//! This crate provides:
//! - Proleptic Gregorian day counts and day differences
//! - Civil date/time values with calendar validation
//! - Julian Date ↔ calendar conversions
//! - ΔT (TT − UT) estimation
//! - Fixed-offset civil clocks tied to a location's longitude
//! - Earth rotation angle and mean sidereal time

pub mod civil;
pub mod clock;
pub mod delta_t;
pub mod error;
pub mod julian;
pub mod sidereal;

pub use civil::{
    CivilDate, CivilDateTime, civil_from_days, days_between, days_from_civil, days_in_month,
    is_leap_year,
};
pub use clock::CivilClock;
pub use delta_t::{decimal_year_from_jd, delta_t_seconds, tt_to_ut_jd, ut_to_tt_jd};
pub use error::TimeError;
pub use julian::{
    J2000_JD, SECONDS_PER_DAY, UNIX_EPOCH_JD, calendar_to_jd, jd_to_calendar, jd_to_centuries,
};
pub use sidereal::{earth_rotation_angle_rad, gmst_rad, local_sidereal_time_rad};
