//! Nutation and obliquity of the ecliptic.
//!
//! Nutation uses the leading 20 lunisolar terms of IAU 2000B
//! (IERS Conventions 2010, Table 5.3b); the dropped terms are each below
//! 4 mas. Delaunay arguments from IERS Conventions 2010, Table 5.2e.
//! Mean obliquity is the IAU 2006 polynomial (Capitaine et al. 2003).

use std::f64::consts::TAU;

const AS2RAD: f64 = TAU / 1_296_000.0;

/// Delaunay arguments `[l, l', F, D, Ω]` in radians.
///
/// `t` = Julian centuries of TT since J2000.0.
fn fundamental_arguments(t: f64) -> [f64; 5] {
    let poly = |c: [f64; 5]| (c[0] + t * (c[1] + t * (c[2] + t * (c[3] + t * c[4])))) * AS2RAD;
    [
        poly([485_868.249_036, 1_717_915_923.217_8, 31.879_2, 0.051_635, -0.000_244_70]),
        poly([1_287_104.793_05, 129_596_581.048_1, -0.553_2, 0.000_136, -0.000_011_49]),
        poly([335_779.526_232, 1_739_527_262.847_8, -12.751_2, -0.001_037, 0.000_004_17]),
        poly([1_072_260.703_69, 1_602_961_601.209_0, -6.370_6, 0.006_593, -0.000_031_69]),
        poly([450_160.398_036, -6_962_890.543_1, 7.472_2, 0.007_702, -0.000_059_39]),
    ]
}

/// Leading IAU 2000B terms: `[nl, nl', nF, nD, nΩ, S, S', C, C']`,
/// amplitudes in 0.1 μas.
#[rustfmt::skip]
static NUTATION_TERMS: [[i64; 9]; 20] = [
    [ 0,  0,  0,  0,  1, -172_064_161, -174_666, 92_052_331,  9_086],
    [ 0,  0,  2, -2,  2,  -13_170_906,   -1_675,  5_730_336, -3_015],
    [ 0,  0,  2,  0,  2,   -2_276_413,     -234,    978_459,   -485],
    [ 0,  0,  0,  0,  2,    2_074_554,      207,   -897_492,    470],
    [ 0,  1,  0,  0,  0,    1_475_877,   -3_633,     73_871,   -184],
    [ 0,  1,  2, -2,  2,     -516_821,    1_226,    224_386,   -677],
    [ 1,  0,  0,  0,  0,      711_159,       73,     -6_750,      0],
    [ 0,  0,  2,  0,  1,     -387_298,     -367,    200_728,     18],
    [ 1,  0,  2,  0,  2,     -301_461,      -36,    129_025,    -63],
    [ 0, -1,  2, -2,  2,      215_829,     -494,    -95_929,    299],
    [ 0,  0,  2, -2,  1,      128_227,      137,    -68_982,     -9],
    [-1,  0,  2,  0,  2,      123_457,       11,    -53_311,     32],
    [-1,  0,  0,  2,  0,      156_994,       10,     -1_235,      0],
    [ 1,  0,  0,  0,  1,       63_110,       63,    -33_228,      0],
    [-1,  0,  0,  0,  1,      -57_976,      -63,     31_429,      0],
    [-1,  0,  2,  2,  2,      -59_641,      -11,     25_543,    -11],
    [ 1,  0,  2,  0,  1,      -51_613,      -42,     26_366,      0],
    [-2,  0,  2,  0,  1,       45_893,       50,    -24_236,    -10],
    [ 0,  0,  0,  2,  0,       63_384,       11,     -1_220,      0],
    [ 0,  0,  2,  2,  2,      -38_571,       -1,     16_452,    -11],
];

/// Nutation in longitude and obliquity, `(Δψ, Δε)` in arcseconds.
///
/// `t` = Julian centuries of TT since J2000.0.
pub fn nutation_iau2000b_truncated(t: f64) -> (f64, f64) {
    let args = fundamental_arguments(t);
    let (dpsi, deps) = NUTATION_TERMS.iter().fold((0.0, 0.0), |(dpsi, deps), row| {
        let arg: f64 = row[..5]
            .iter()
            .zip(args.iter())
            .map(|(&n, &a)| n as f64 * a)
            .sum();
        (
            dpsi + (row[5] as f64 + row[6] as f64 * t) * arg.sin(),
            deps + (row[7] as f64 + row[8] as f64 * t) * arg.cos(),
        )
    });
    (dpsi * 1e-7, deps * 1e-7)
}

/// IAU 2006 mean obliquity of the ecliptic in arcseconds.
pub fn mean_obliquity_arcsec(t: f64) -> f64 {
    84_381.406
        + t * (-46.836_769
            + t * (-0.000_183_1 + t * (0.002_003_40 + t * (-0.000_000_576 - t * 0.000_000_043_4))))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn meeus_example_22a() {
        // 1987-Apr-10 0h TD: Δψ = −3.788″, Δε = +9.443″, ε0 = 23°26′27.407″
        let t = (2_446_895.5 - 2_451_545.0) / 36_525.0;
        let (dpsi, deps) = nutation_iau2000b_truncated(t);
        assert!((dpsi + 3.788).abs() < 0.05, "Δψ = {dpsi}");
        assert!((deps - 9.443).abs() < 0.05, "Δε = {deps}");
        let eps0 = mean_obliquity_arcsec(t);
        assert!((eps0 - 84_387.407).abs() < 0.1, "ε0 = {eps0}");
    }

    #[test]
    fn amplitude_bounds() {
        for i in 0..40 {
            let t = -1.0 + f64::from(i) * 0.05;
            let (dpsi, deps) = nutation_iau2000b_truncated(t);
            assert!(dpsi.abs() < 19.5, "Δψ = {dpsi} at T = {t}");
            assert!(deps.abs() < 10.5, "Δε = {deps} at T = {t}");
        }
    }
}
