//! The solar ephemeris contract.
//!
//! Everything above this crate (term scheduling, pillar derivation) talks
//! to the Sun only through [`SolarEphemeris`]. Times are TT Julian Dates;
//! the observer is passed on every call.

use bazi_time::{CivilDateTime, tt_to_ut_jd, ut_to_tt_jd};

use crate::error::{EphemerisError, finite};
use crate::observer::Observer;

/// Pure solar queries against an observer.
///
/// Implementations must be deterministic: the same `(observer, jd_tt)`
/// always yields the same answer, and no call mutates the ephemeris.
pub trait SolarEphemeris: Send + Sync {
    /// Apparent ecliptic longitude of the Sun, of date, degrees [0, 360).
    fn sun_ecliptic_longitude(&self, observer: &Observer, jd_tt: f64)
    -> Result<f64, EphemerisError>;

    /// Apparent topocentric right ascension of the Sun, hours [0, 24).
    fn sun_right_ascension(&self, observer: &Observer, jd_tt: f64) -> Result<f64, EphemerisError>;

    /// Right ascension of the mean sun, degrees [0, 360).
    fn mean_sun_right_ascension(
        &self,
        observer: &Observer,
        jd_tt: f64,
    ) -> Result<f64, EphemerisError>;

    /// First solstice strictly after `jd_tt`.
    fn next_solstice(&self, observer: &Observer, jd_tt: f64) -> Result<f64, EphemerisError>;

    /// First equinox strictly after `jd_tt`.
    fn next_equinox(&self, observer: &Observer, jd_tt: f64) -> Result<f64, EphemerisError>;

    /// First March equinox strictly after `jd_tt`.
    fn next_vernal_equinox(&self, observer: &Observer, jd_tt: f64) -> Result<f64, EphemerisError>;

    /// Wall-clock time on the observer's civil clock at `jd_tt`.
    fn to_local_civil_time(
        &self,
        observer: &Observer,
        jd_tt: f64,
    ) -> Result<CivilDateTime, EphemerisError> {
        let jd_ut = finite(tt_to_ut_jd(jd_tt), "universal time", jd_tt)?;
        Ok(observer.clock.jd_ut_to_civil(jd_ut))
    }

    /// TT Julian Date of a wall-clock reading on the observer's civil clock.
    fn from_local_civil_time(
        &self,
        observer: &Observer,
        civil: &CivilDateTime,
    ) -> Result<f64, EphemerisError> {
        let jd_ut = observer.clock.civil_to_jd_ut(civil);
        finite(ut_to_tt_jd(jd_ut), "terrestrial time", jd_ut)
    }
}
