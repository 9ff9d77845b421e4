//! Equinoxes and solstices.
//!
//! Mean instants from Meeus Tables 27.A/27.B, then refined against the
//! apparent longitude with the correction `58·sin(k·90° − λ)` days
//! (Meeus ch. 27) until successive estimates agree.

use std::fmt::{Display, Formatter};

use tracing::{debug, trace};

use crate::error::EphemerisError;
use crate::sun::sun_position;

/// The four quarter points of the tropical year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QuarterPoint {
    MarchEquinox,
    JuneSolstice,
    SeptemberEquinox,
    DecemberSolstice,
}

/// Quarter points in the order they occur within a calendar year.
pub const ALL_QUARTER_POINTS: [QuarterPoint; 4] = [
    QuarterPoint::MarchEquinox,
    QuarterPoint::JuneSolstice,
    QuarterPoint::SeptemberEquinox,
    QuarterPoint::DecemberSolstice,
];

impl QuarterPoint {
    /// 0-based position in the year (March = 0 … December = 3).
    pub const fn index(self) -> u8 {
        match self {
            Self::MarchEquinox => 0,
            Self::JuneSolstice => 1,
            Self::SeptemberEquinox => 2,
            Self::DecemberSolstice => 3,
        }
    }

    /// Apparent solar longitude at the event, degrees.
    pub const fn longitude_deg(self) -> f64 {
        self.index() as f64 * 90.0
    }

    pub const fn is_equinox(self) -> bool {
        matches!(self, Self::MarchEquinox | Self::SeptemberEquinox)
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::MarchEquinox => "March equinox",
            Self::JuneSolstice => "June solstice",
            Self::SeptemberEquinox => "September equinox",
            Self::DecemberSolstice => "December solstice",
        }
    }

    /// Mean instant (JDE) from the Meeus polynomials.
    fn mean_jde(self, year: i32) -> f64 {
        let (y, c) = if year < 1000 {
            let y = f64::from(year) / 1000.0;
            let c = match self {
                Self::MarchEquinox => [1_721_139.291_89, 365_242.137_40, 0.061_34, 0.001_11, -0.000_71],
                Self::JuneSolstice => [1_721_233.254_01, 365_241.725_62, -0.053_23, 0.009_07, 0.000_25],
                Self::SeptemberEquinox => [1_721_325.704_55, 365_242.495_58, -0.116_77, -0.002_97, 0.000_74],
                Self::DecemberSolstice => [1_721_414.399_87, 365_242.882_57, -0.007_69, -0.009_33, -0.000_06],
            };
            (y, c)
        } else {
            let y = (f64::from(year) - 2000.0) / 1000.0;
            let c = match self {
                Self::MarchEquinox => [2_451_623.809_84, 365_242.374_04, 0.051_69, -0.004_11, -0.000_57],
                Self::JuneSolstice => [2_451_716.567_67, 365_241.626_03, 0.003_25, 0.008_88, -0.000_30],
                Self::SeptemberEquinox => [2_451_810.217_15, 365_242.017_67, -0.115_75, 0.003_37, 0.000_78],
                Self::DecemberSolstice => [2_451_900.059_52, 365_242.740_49, -0.062_23, -0.008_23, 0.000_32],
            };
            (y, c)
        };
        c.iter().rev().fold(0.0, |acc, &k| acc * y + k)
    }
}

impl Display for QuarterPoint {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// TT Julian Date of a quarter point in a given calendar year.
///
/// Iterates until the correction drops below `tolerance_days`; more than
/// `max_iterations` corrections is [`EphemerisError::NoConvergence`].
pub fn quarter_point_jd(
    point: QuarterPoint,
    year: i32,
    tolerance_days: f64,
    max_iterations: u32,
) -> Result<f64, EphemerisError> {
    let target = point.longitude_deg().to_radians();
    let mut jde = point.mean_jde(year);

    for iteration in 0..max_iterations {
        let lambda = sun_position(jde).longitude_deg.to_radians();
        let correction = 58.0 * (target - lambda).sin();
        if !correction.is_finite() {
            return Err(EphemerisError::NonFinite {
                quantity: "quarter-point correction",
                jd_tt: jde,
            });
        }
        jde += correction;
        trace!(event = point.name(), year, iteration, jde, correction, "quarter-point step");
        if correction.abs() < tolerance_days {
            debug!(event = point.name(), year, jde, iterations = iteration + 1, "quarter point");
            return Ok(jde);
        }
    }

    Err(EphemerisError::NoConvergence {
        event: point.name(),
        year,
    })
}
