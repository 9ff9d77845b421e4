//! Apparent place of the Sun.
//!
//! Geometric position from the truncated VSOP87 Earth series, reduced to
//! the FK5 system, then nutation and annual aberration (Meeus ch. 25,
//! "higher accuracy"). Topocentric right ascension applies the parallax
//! correction of NREL SPA (Reda & Andreas 2004, §3.8-3.10).

use bazi_time::{J2000_JD, gmst_rad, jd_to_centuries, local_sidereal_time_rad};

use crate::nutation::{mean_obliquity_arcsec, nutation_iau2000b_truncated};
use crate::observer::GeoLocation;
use crate::vsop87::earth_heliocentric;

const ARCSEC_TO_DEG: f64 = 1.0 / 3600.0;
const DAYS_PER_MILLENNIUM: f64 = 365_250.0;
/// Constant of aberration over the Earth–Sun distance, arcsec·AU.
const ABERRATION_ARCSEC_AU: f64 = 20.4898;
/// Equatorial horizontal parallax of the Sun at 1 AU, arcsec.
const SOLAR_PARALLAX_ARCSEC: f64 = 8.794;
/// Polar/equatorial axis ratio of the reference ellipsoid.
const EARTH_AXIS_RATIO: f64 = 0.996_647_19;
const EARTH_EQUATORIAL_RADIUS_M: f64 = 6_378_140.0;

/// Apparent geocentric coordinates of the Sun, of date.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SunPosition {
    pub jd_tt: f64,
    /// Apparent ecliptic longitude, degrees [0, 360).
    pub longitude_deg: f64,
    /// Apparent ecliptic latitude, degrees.
    pub latitude_deg: f64,
    /// Earth–Sun distance, AU.
    pub distance_au: f64,
    /// Nutation in longitude, arcseconds.
    pub nutation_longitude_arcsec: f64,
    /// True obliquity of the ecliptic, degrees.
    pub obliquity_deg: f64,
    /// Apparent geocentric right ascension, degrees [0, 360).
    pub right_ascension_deg: f64,
    /// Apparent geocentric declination, degrees.
    pub declination_deg: f64,
}

/// Apparent geocentric place of the Sun at a TT Julian Date.
pub fn sun_position(jd_tt: f64) -> SunPosition {
    let tau = (jd_tt - J2000_JD) / DAYS_PER_MILLENNIUM;
    let t = tau * 10.0;
    let (l, b, r) = earth_heliocentric(tau);

    // Geocentric = heliocentric Earth reversed.
    let theta = (l.to_degrees() + 180.0).rem_euclid(360.0);
    let beta = -b.to_degrees();

    // FK5 reduction (Meeus eq. 32.3).
    let lambda_prime = (theta - 1.397 * t - 0.000_31 * t * t).to_radians();
    let (sin_lp, cos_lp) = lambda_prime.sin_cos();
    let beta_rad = beta.to_radians();
    let d_theta = -0.090_33 + 0.039_16 * (cos_lp + sin_lp) * beta_rad.tan();
    let d_beta = 0.039_16 * (cos_lp - sin_lp);

    let (dpsi, deps) = nutation_iau2000b_truncated(t);
    let aberration = -ABERRATION_ARCSEC_AU / r;

    let longitude_deg =
        (theta + (d_theta + dpsi + aberration) * ARCSEC_TO_DEG).rem_euclid(360.0);
    let latitude_deg = beta + d_beta * ARCSEC_TO_DEG;
    let obliquity_deg = (mean_obliquity_arcsec(t) + deps) * ARCSEC_TO_DEG;

    let (ra, dec) = ecliptic_to_equatorial(longitude_deg, latitude_deg, obliquity_deg);

    SunPosition {
        jd_tt,
        longitude_deg,
        latitude_deg,
        distance_au: r,
        nutation_longitude_arcsec: dpsi,
        obliquity_deg,
        right_ascension_deg: ra,
        declination_deg: dec,
    }
}

/// Rotate ecliptic (λ, β) into equatorial (α, δ) for obliquity ε.
fn ecliptic_to_equatorial(lon_deg: f64, lat_deg: f64, eps_deg: f64) -> (f64, f64) {
    let (sin_l, cos_l) = lon_deg.to_radians().sin_cos();
    let (sin_b, cos_b) = lat_deg.to_radians().sin_cos();
    let (sin_e, cos_e) = eps_deg.to_radians().sin_cos();
    let tan_b = sin_b / cos_b;
    let ra = (sin_l * cos_e - tan_b * sin_e).atan2(cos_l).to_degrees();
    let dec = (sin_b * cos_e + cos_b * sin_e * sin_l).asin().to_degrees();
    (ra.rem_euclid(360.0), dec)
}

/// Geometric mean longitude of the Sun referred to the mean equinox of
/// date, degrees [0, 360) (Meeus eq. 28.2).
pub fn mean_sun_longitude_deg(jd_tt: f64) -> f64 {
    let tau = (jd_tt - J2000_JD) / DAYS_PER_MILLENNIUM;
    let l0 = 280.466_456_7
        + tau
            * (360_007.698_277_9
                + tau * (0.030_320_28 + tau * (1.0 / 49_931.0 + tau * (-1.0 / 15_300.0 - tau / 2_000_000.0))));
    l0.rem_euclid(360.0)
}

/// Right ascension of the mean sun, degrees [0, 360).
///
/// The fictitious sun moving uniformly along the equator, expressed
/// against the true equinox so that `mean - apparent` is the equation of
/// time (Meeus eq. 28.1).
pub(crate) fn mean_sun_right_ascension_deg(pos: &SunPosition) -> f64 {
    let eps = pos.obliquity_deg.to_radians();
    let l0 = mean_sun_longitude_deg(pos.jd_tt);
    (l0 - 0.005_718_3 + pos.nutation_longitude_arcsec * ARCSEC_TO_DEG * eps.cos()).rem_euclid(360.0)
}

/// Topocentric apparent right ascension, degrees [0, 360).
///
/// `jd_ut` is the same instant as `pos.jd_tt` on the UT axis; it drives
/// the apparent sidereal time and hence the Sun's local hour angle.
pub(crate) fn topocentric_right_ascension_deg(
    pos: &SunPosition,
    location: &GeoLocation,
    jd_ut: f64,
) -> f64 {
    let phi = location.latitude_rad();
    let xi = (SOLAR_PARALLAX_ARCSEC / pos.distance_au * ARCSEC_TO_DEG).to_radians();
    let u = (EARTH_AXIS_RATIO * phi.tan()).atan();
    let x = u.cos() + location.altitude_m / EARTH_EQUATORIAL_RADIUS_M * phi.cos();

    let eps = pos.obliquity_deg.to_radians();
    let equation_of_equinoxes = (pos.nutation_longitude_arcsec * ARCSEC_TO_DEG).to_radians() * eps.cos();
    let gast = gmst_rad(jd_ut) + equation_of_equinoxes;
    let lst = local_sidereal_time_rad(gast, location.longitude_rad());

    let alpha = pos.right_ascension_deg.to_radians();
    let delta = pos.declination_deg.to_radians();
    let h = lst - alpha;
    let d_alpha = (-x * xi.sin() * h.sin()).atan2(delta.cos() - x * xi.sin() * h.cos());
    (alpha + d_alpha).to_degrees().rem_euclid(360.0)
}
