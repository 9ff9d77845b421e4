//! ΔT = TT − UT estimation.
//!
//! Piecewise polynomials from Espenak & Meeus, "Five Millennium Canon of
//! Solar Eclipses" (NASA TP-2006-214141). Outside the tabulated span the
//! long-term parabola −20 + 32·u² is used.

use crate::julian::{J2000_JD, SECONDS_PER_DAY};

/// Mean Julian year in days, for the decimal-year argument.
const DAYS_PER_YEAR: f64 = 365.25;

/// Decimal year for a Julian Date (2000.0 at J2000).
pub fn decimal_year_from_jd(jd: f64) -> f64 {
    2000.0 + (jd - J2000_JD) / DAYS_PER_YEAR
}

/// ΔT in seconds for a decimal year.
pub fn delta_t_seconds(year: f64) -> f64 {
    let y = year;
    if y < -500.0 {
        let u = (y - 1820.0) / 100.0;
        -20.0 + 32.0 * u * u
    } else if y < 500.0 {
        let u = y / 100.0;
        poly(
            u,
            &[
                10583.6,
                -1014.41,
                33.78311,
                -5.952053,
                -0.1798452,
                0.022174192,
                0.0090316521,
            ],
        )
    } else if y < 1600.0 {
        let u = (y - 1000.0) / 100.0;
        poly(
            u,
            &[
                1574.2,
                -556.01,
                71.23472,
                0.319781,
                -0.8503463,
                -0.005050998,
                0.0083572073,
            ],
        )
    } else if y < 1700.0 {
        let t = y - 1600.0;
        poly(t, &[120.0, -0.9808, -0.01532, 1.0 / 7129.0])
    } else if y < 1800.0 {
        let t = y - 1700.0;
        poly(t, &[8.83, 0.1603, -0.0059285, 0.00013336, -1.0 / 1_174_000.0])
    } else if y < 1860.0 {
        let t = y - 1800.0;
        poly(
            t,
            &[
                13.72,
                -0.332447,
                0.0068612,
                0.0041116,
                -0.00037436,
                0.0000121272,
                -0.0000001699,
                0.000000000875,
            ],
        )
    } else if y < 1900.0 {
        let t = y - 1860.0;
        poly(
            t,
            &[
                7.62,
                0.5737,
                -0.251754,
                0.01680668,
                -0.0004473624,
                1.0 / 233_174.0,
            ],
        )
    } else if y < 1920.0 {
        let t = y - 1900.0;
        poly(t, &[-2.79, 1.494119, -0.0598939, 0.0061966, -0.000197])
    } else if y < 1941.0 {
        let t = y - 1920.0;
        poly(t, &[21.20, 0.84493, -0.076100, 0.0020936])
    } else if y < 1961.0 {
        let t = y - 1950.0;
        poly(t, &[29.07, 0.407, -1.0 / 233.0, 1.0 / 2547.0])
    } else if y < 1986.0 {
        let t = y - 1975.0;
        poly(t, &[45.45, 1.067, -1.0 / 260.0, -1.0 / 718.0])
    } else if y < 2005.0 {
        let t = y - 2000.0;
        poly(
            t,
            &[
                63.86,
                0.3345,
                -0.060374,
                0.0017275,
                0.000651814,
                0.00002373599,
            ],
        )
    } else if y < 2050.0 {
        let t = y - 2000.0;
        poly(t, &[62.92, 0.32217, 0.005589])
    } else if y < 2150.0 {
        let u = (y - 1820.0) / 100.0;
        -20.0 + 32.0 * u * u - 0.5628 * (2150.0 - y)
    } else {
        let u = (y - 1820.0) / 100.0;
        -20.0 + 32.0 * u * u
    }
}

/// Convert a UT Julian Date to TT.
pub fn ut_to_tt_jd(jd_ut: f64) -> f64 {
    jd_ut + delta_t_seconds(decimal_year_from_jd(jd_ut)) / SECONDS_PER_DAY
}

/// Convert a TT Julian Date to UT.
///
/// ΔT changes by well under a second per day, so evaluating it at the TT
/// epoch instead of the UT epoch is exact to microseconds.
pub fn tt_to_ut_jd(jd_tt: f64) -> f64 {
    jd_tt - delta_t_seconds(decimal_year_from_jd(jd_tt)) / SECONDS_PER_DAY
}

/// Horner evaluation, coefficients in ascending power order.
fn poly(x: f64, coeffs: &[f64]) -> f64 {
    coeffs.iter().rev().fold(0.0, |acc, &c| acc * x + c)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn year_2000() {
        assert!((delta_t_seconds(2000.0) - 63.86).abs() < 1e-9);
    }

    #[test]
    fn observed_values() {
        // Observed: 1900 ≈ −2.7 s, 1950 ≈ 29.1 s, 1990 ≈ 56.9 s, 2020 ≈ 69.4 s
        assert!((delta_t_seconds(1900.0) + 2.79).abs() < 0.5);
        assert!((delta_t_seconds(1950.0) - 29.07).abs() < 0.5);
        assert!((delta_t_seconds(1990.0) - 56.9).abs() < 1.0);
        assert!((delta_t_seconds(2020.0) - 71.6).abs() < 3.0);
    }

    #[test]
    fn continuous_at_segment_joins() {
        for &y in &[1860.0, 1900.0, 1920.0, 1941.0, 1961.0, 1986.0, 2005.0, 2050.0] {
            let below = delta_t_seconds(y - 1e-6);
            let above = delta_t_seconds(y);
            assert!(
                (below - above).abs() < 1.5,
                "jump at {y}: {below} vs {above}"
            );
        }
    }

    #[test]
    fn tt_ut_inverse() {
        let jd_ut = 2_460_000.25;
        let back = tt_to_ut_jd(ut_to_tt_jd(jd_ut));
        assert!((back - jd_ut).abs() * SECONDS_PER_DAY < 1e-3);
    }
}
