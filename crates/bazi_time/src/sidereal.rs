//! Earth Rotation Angle and Greenwich Mean Sidereal Time.
//!
//! Used to form the local hour angle of the Sun for topocentric
//! corrections. Arguments are UT Julian Dates; ΔUT1 (UT1 − UTC) is below
//! a second and is not modelled.
//!
//! Sources:
//! - ERA: IERS Conventions 2010, Eq. 5.15. Public domain.
//! - GMST polynomial: Capitaine et al. 2003, Table 2. Public domain.

use std::f64::consts::{PI, TAU};

use crate::julian::{J2000_JD, jd_to_centuries};

const ARCSEC_TO_RAD: f64 = PI / (180.0 * 3600.0);

/// Earth Rotation Angle in radians [0, 2π).
pub fn earth_rotation_angle_rad(jd_ut: f64) -> f64 {
    let du = jd_ut - J2000_JD;
    // Split the 1.0027... factor so the whole turns drop out before scaling.
    let turns = 0.779_057_273_264_0 + 0.002_737_811_911_354_48 * du + du.fract();
    (TAU * turns.rem_euclid(1.0)).rem_euclid(TAU)
}

/// Greenwich Mean Sidereal Time in radians [0, 2π).
pub fn gmst_rad(jd_ut: f64) -> f64 {
    let t = jd_to_centuries(jd_ut);
    let poly_arcsec = 0.014506
        + t * (4612.156534 + t * (1.3915817 + t * (-0.00000044 + t * (-0.000029956 - t * 0.0000000368))));
    (earth_rotation_angle_rad(jd_ut) + poly_arcsec * ARCSEC_TO_RAD).rem_euclid(TAU)
}

/// Local sidereal time from a Greenwich sidereal time and east longitude.
pub fn local_sidereal_time_rad(greenwich_rad: f64, longitude_east_rad: f64) -> f64 {
    (greenwich_rad + longitude_east_rad).rem_euclid(TAU)
}
