//! Solar ephemeris adapter.
//!
//! This crate provides:
//! - [`SolarEphemeris`], the query contract the solar-term scheduler and
//!   pillar computer are written against
//! - [`AnalyticEphemeris`], a self-contained implementation built on a
//!   truncated VSOP87 Earth theory, IAU 2000B nutation, and Meeus'
//!   equinox/solstice polynomials
//! - Observer and geographic location types
//!
//! All queries are pure functions of `(observer, jd_tt)`. Nothing is
//! cached or mutated between calls, so one ephemeris value can be shared
//! by any number of threads.

pub mod adapter;
pub mod analytic;
pub mod error;
pub mod nutation;
pub mod observer;
pub mod quarter;
pub mod sun;
mod vsop87;

pub use adapter::SolarEphemeris;
pub use analytic::AnalyticEphemeris;
pub use error::EphemerisError;
pub use nutation::{mean_obliquity_arcsec, nutation_iau2000b_truncated};
pub use observer::{GeoLocation, Observer};
pub use quarter::{ALL_QUARTER_POINTS, QuarterPoint, quarter_point_jd};
pub use sun::{SunPosition, mean_sun_longitude_deg, sun_position};
