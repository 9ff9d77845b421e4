//! Self-contained analytic solar ephemeris.

use bazi_time::{jd_to_calendar, tt_to_ut_jd};
use tracing::instrument;

use crate::adapter::SolarEphemeris;
use crate::error::{EphemerisError, finite};
use crate::observer::Observer;
use crate::quarter::{ALL_QUARTER_POINTS, QuarterPoint, quarter_point_jd};
use crate::sun::{mean_sun_right_ascension_deg, sun_position, topocentric_right_ascension_deg};

/// [`SolarEphemeris`] backed by truncated VSOP87 and IAU 2000B nutation.
///
/// Apparent longitude agrees with DE-class ephemerides to about one
/// arc-second over 1900–2100.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnalyticEphemeris {
    /// Quarter-point refinement stops once a correction is below this (days).
    pub quarter_tolerance_days: f64,
    /// Cap on quarter-point refinement steps.
    pub quarter_max_iterations: u32,
}

impl Default for AnalyticEphemeris {
    fn default() -> Self {
        Self {
            quarter_tolerance_days: 1e-7,
            quarter_max_iterations: 50,
        }
    }
}

impl AnalyticEphemeris {
    pub fn new() -> Self {
        Self::default()
    }

    /// First of `points` strictly after `jd_tt`.
    #[instrument(level = "trace", skip(self))]
    fn next_quarter(&self, points: &[QuarterPoint], jd_tt: f64) -> Result<f64, EphemerisError> {
        let jd_tt = finite(jd_tt, "query instant", jd_tt)?;
        let (year, _, _) = jd_to_calendar(jd_tt);
        for y in year.saturating_sub(1)..=year.saturating_add(1) {
            for &point in ALL_QUARTER_POINTS.iter().filter(|p| points.contains(p)) {
                let jd = quarter_point_jd(
                    point,
                    y,
                    self.quarter_tolerance_days,
                    self.quarter_max_iterations,
                )?;
                if jd > jd_tt {
                    return Ok(jd);
                }
            }
        }
        Err(EphemerisError::NoConvergence {
            event: "quarter point",
            year,
        })
    }
}

impl SolarEphemeris for AnalyticEphemeris {
    fn sun_ecliptic_longitude(
        &self,
        observer: &Observer,
        jd_tt: f64,
    ) -> Result<f64, EphemerisError> {
        observer.validate()?;
        finite(sun_position(jd_tt).longitude_deg, "ecliptic longitude", jd_tt)
    }

    fn sun_right_ascension(&self, observer: &Observer, jd_tt: f64) -> Result<f64, EphemerisError> {
        observer.validate()?;
        let pos = sun_position(jd_tt);
        let ra = topocentric_right_ascension_deg(&pos, &observer.location, tt_to_ut_jd(jd_tt));
        finite(ra / 15.0, "right ascension", jd_tt)
    }

    fn mean_sun_right_ascension(
        &self,
        observer: &Observer,
        jd_tt: f64,
    ) -> Result<f64, EphemerisError> {
        observer.validate()?;
        finite(
            mean_sun_right_ascension_deg(&sun_position(jd_tt)),
            "mean sun right ascension",
            jd_tt,
        )
    }

    fn next_solstice(&self, observer: &Observer, jd_tt: f64) -> Result<f64, EphemerisError> {
        observer.validate()?;
        self.next_quarter(
            &[QuarterPoint::JuneSolstice, QuarterPoint::DecemberSolstice],
            jd_tt,
        )
    }

    fn next_equinox(&self, observer: &Observer, jd_tt: f64) -> Result<f64, EphemerisError> {
        observer.validate()?;
        self.next_quarter(
            &[QuarterPoint::MarchEquinox, QuarterPoint::SeptemberEquinox],
            jd_tt,
        )
    }

    fn next_vernal_equinox(&self, observer: &Observer, jd_tt: f64) -> Result<f64, EphemerisError> {
        observer.validate()?;
        self.next_quarter(&[QuarterPoint::MarchEquinox], jd_tt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn greenwich() -> Observer {
        Observer::with_zone_clock(51.48, 0.0)
    }

    #[test]
    fn next_equinox_is_strictly_later() {
        let eph = AnalyticEphemeris::new();
        let obs = greenwich();
        let march = eph.next_vernal_equinox(&obs, 2_451_545.0).unwrap();
        let again = eph.next_equinox(&obs, march).unwrap();
        assert!(again - march > 180.0 && again - march < 190.0);
        let next_march = eph.next_vernal_equinox(&obs, march).unwrap();
        assert!((next_march - march - 365.242).abs() < 0.1);
    }

    #[test]
    fn solstice_alternates() {
        let eph = AnalyticEphemeris::new();
        let obs = greenwich();
        let june = eph.next_solstice(&obs, 2_451_545.0).unwrap();
        let december = eph.next_solstice(&obs, june).unwrap();
        let lon_june = eph.sun_ecliptic_longitude(&obs, june).unwrap();
        let lon_dec = eph.sun_ecliptic_longitude(&obs, december).unwrap();
        assert!((lon_june - 90.0).abs() < 1e-5, "λ = {lon_june}");
        assert!((lon_dec - 270.0).abs() < 1e-5, "λ = {lon_dec}");
    }

    #[test]
    fn invalid_observer_is_rejected() {
        let eph = AnalyticEphemeris::new();
        let obs = Observer::with_zone_clock(95.0, 0.0);
        assert!(matches!(
            eph.sun_ecliptic_longitude(&obs, 2_451_545.0),
            Err(EphemerisError::InvalidLocation(_))
        ));
    }

    #[test]
    fn non_finite_instant_is_reported() {
        let eph = AnalyticEphemeris::new();
        let err = eph.sun_ecliptic_longitude(&greenwich(), f64::NAN).unwrap_err();
        assert!(matches!(err, EphemerisError::NonFinite { .. }));
    }

    #[test]
    fn right_ascension_in_hours() {
        let eph = AnalyticEphemeris::new();
        let ra = eph.sun_right_ascension(&greenwich(), 2_448_908.5).unwrap();
        // 13h13m30.7s geocentric
        assert!((ra - 13.225_208).abs() < 0.001, "α = {ra}h");
    }
}
