//! Longitude-crossing search.
//!
//! Solves `normalize(λ(t) − target) = 0` for the Sun's apparent longitude
//! λ. A coarse scan brackets the first sign change that is a genuine root
//! (not the ±180° wrap), then bisection narrows the bracket.

use bazi_ephem::{Observer, SolarEphemeris};
use tracing::trace;

use crate::error::SearchError;
use crate::term_types::{SearchDirection, TermSearchConfig};

/// Normalize an angle to [-180, +180).
pub fn normalize_to_pm180(deg: f64) -> f64 {
    let d = deg.rem_euclid(360.0);
    if d >= 180.0 { d - 360.0 } else { d }
}

/// A sign change counts only if both sides are far from the wrap seam.
pub(crate) fn is_genuine_crossing(f_a: f64, f_b: f64) -> bool {
    f_a * f_b < 0.0 && (f_a - f_b).abs() < 270.0
}

fn residual<E: SolarEphemeris + ?Sized>(
    eph: &E,
    observer: &Observer,
    target_deg: f64,
    jd_tt: f64,
) -> Result<f64, SearchError> {
    Ok(normalize_to_pm180(
        eph.sun_ecliptic_longitude(observer, jd_tt)? - target_deg,
    ))
}

/// First instant after `jd_from` (TT) when the Sun's apparent longitude
/// reaches `target_deg`.
pub fn find_longitude_crossing<E: SolarEphemeris + ?Sized>(
    eph: &E,
    observer: &Observer,
    target_deg: f64,
    jd_from: f64,
    config: &TermSearchConfig,
) -> Result<f64, SearchError> {
    find_crossing(
        eph,
        observer,
        target_deg,
        jd_from,
        SearchDirection::Forward,
        config,
    )
}

/// Nearest crossing of `target_deg` from `jd_from` in `direction`.
pub(crate) fn find_crossing<E: SolarEphemeris + ?Sized>(
    eph: &E,
    observer: &Observer,
    target_deg: f64,
    jd_from: f64,
    direction: SearchDirection,
    config: &TermSearchConfig,
) -> Result<f64, SearchError> {
    config.validate().map_err(SearchError::InvalidConfig)?;
    let no_convergence = SearchError::NoConvergence {
        target_deg,
        jd_from,
    };

    let step = match direction {
        SearchDirection::Forward => config.scan_step_days,
        SearchDirection::Backward => -config.scan_step_days,
    };
    let max_steps = (config.max_window_days / config.scan_step_days).ceil() as usize;

    let mut t_prev = jd_from;
    let mut f_prev = residual(eph, observer, target_deg, t_prev)?;

    for _ in 0..max_steps {
        let t_curr = t_prev + step;
        let f_curr = residual(eph, observer, target_deg, t_curr)?;

        if f_curr == 0.0 {
            return Ok(t_curr);
        }
        if is_genuine_crossing(f_prev, f_curr) {
            let (t_a, f_a, t_b) = if t_prev < t_curr {
                (t_prev, f_prev, t_curr)
            } else {
                (t_curr, f_curr, t_prev)
            };
            let t = bisect(eph, observer, target_deg, t_a, f_a, t_b, config)?;
            let f = residual(eph, observer, target_deg, t)?;
            if f.abs() > config.tolerance_deg {
                return Err(no_convergence);
            }
            trace!(target_deg, jd_from, jd_tt = t, residual_deg = f, "longitude crossing");
            return Ok(t);
        }

        t_prev = t_curr;
        f_prev = f_curr;
    }

    Err(no_convergence)
}

fn bisect<E: SolarEphemeris + ?Sized>(
    eph: &E,
    observer: &Observer,
    target_deg: f64,
    mut t_a: f64,
    mut f_a: f64,
    mut t_b: f64,
    config: &TermSearchConfig,
) -> Result<f64, SearchError> {
    for _ in 0..config.max_iterations {
        let t_mid = 0.5 * (t_a + t_b);
        let f_mid = residual(eph, observer, target_deg, t_mid)?;

        if f_a * f_mid <= 0.0 {
            t_b = t_mid;
        } else {
            t_a = t_mid;
            f_a = f_mid;
        }

        if (t_b - t_a).abs() < config.convergence_days {
            break;
        }
    }
    Ok(0.5 * (t_a + t_b))
}
