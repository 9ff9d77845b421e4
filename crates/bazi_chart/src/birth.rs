//! Birth input.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use bazi_ephem::GeoLocation;
use bazi_time::CivilDateTime;

use crate::error::ChartError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Sex {
    #[default]
    Male,
    Female,
}

impl Display for Sex {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Male => "male",
            Self::Female => "female",
        })
    }
}

impl FromStr for Sex {
    type Err = ChartError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "m" | "male" | "男" => Ok(Self::Male),
            "f" | "female" | "女" => Ok(Self::Female),
            other => Err(ChartError::InvalidInput(format!("unknown sex {other:?}"))),
        }
    }
}

/// A birth instant as read on the location's civil clock.
///
/// `civil` carries no zone: it is taken to already be wall time on the
/// clock selected by [`ClockPolicy`](crate::ClockPolicy).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BirthContext {
    pub civil: CivilDateTime,
    pub location: GeoLocation,
    /// Passed through to auxiliary tables only.
    pub sex: Sex,
}

impl BirthContext {
    pub fn new(civil: CivilDateTime, location: GeoLocation, sex: Sex) -> Result<Self, ChartError> {
        let birth = Self {
            civil,
            location,
            sex,
        };
        birth.validate()?;
        Ok(birth)
    }

    /// Parse `date_time` (`YYYY-MM-DD[ HH:MM[:SS]]`) at a sea-level location.
    pub fn parse(
        date_time: &str,
        latitude_deg: f64,
        longitude_deg: f64,
        sex: Sex,
    ) -> Result<Self, ChartError> {
        let civil: CivilDateTime = date_time.parse()?;
        Self::new(
            civil,
            GeoLocation::at_sea_level(latitude_deg, longitude_deg),
            sex,
        )
    }

    pub fn validate(&self) -> Result<(), ChartError> {
        self.civil
            .validate()
            .map_err(|e| ChartError::InvalidInput(e.to_string()))?;
        self.location
            .validate()
            .map_err(|e| ChartError::InvalidInput(e.to_string()))
    }
}
