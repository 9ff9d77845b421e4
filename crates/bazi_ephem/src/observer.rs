//! Observer position and civil clock.

use bazi_time::CivilClock;

use crate::error::EphemerisError;

/// Geographic location on Earth's surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoLocation {
    /// Geodetic latitude in degrees, north positive. Range: [-90, 90].
    pub latitude_deg: f64,
    /// Geodetic longitude in degrees, east positive. Range: [-180, 180].
    pub longitude_deg: f64,
    /// Altitude above mean sea level in meters.
    pub altitude_m: f64,
}

impl GeoLocation {
    pub fn new(latitude_deg: f64, longitude_deg: f64, altitude_m: f64) -> Self {
        Self {
            latitude_deg,
            longitude_deg,
            altitude_m,
        }
    }

    /// Sea-level location.
    pub fn at_sea_level(latitude_deg: f64, longitude_deg: f64) -> Self {
        Self::new(latitude_deg, longitude_deg, 0.0)
    }

    pub fn validate(&self) -> Result<(), EphemerisError> {
        if !self.latitude_deg.is_finite() || self.latitude_deg.abs() > 90.0 {
            return Err(EphemerisError::InvalidLocation(
                "latitude must be within [-90, 90] degrees",
            ));
        }
        if !self.longitude_deg.is_finite() || self.longitude_deg.abs() > 180.0 {
            return Err(EphemerisError::InvalidLocation(
                "longitude must be within [-180, 180] degrees",
            ));
        }
        if !self.altitude_m.is_finite() {
            return Err(EphemerisError::InvalidLocation("altitude must be finite"));
        }
        Ok(())
    }

    pub fn latitude_rad(&self) -> f64 {
        self.latitude_deg.to_radians()
    }

    pub fn longitude_rad(&self) -> f64 {
        self.longitude_deg.to_radians()
    }
}

/// Where the sky is observed from, and which wall clock is read there.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Observer {
    pub location: GeoLocation,
    pub clock: CivilClock,
}

impl Observer {
    pub fn new(location: GeoLocation, clock: CivilClock) -> Self {
        Self { location, clock }
    }

    /// Sea-level observer keeping the standard zone time its longitude implies.
    pub fn with_zone_clock(latitude_deg: f64, longitude_deg: f64) -> Self {
        Self {
            location: GeoLocation::at_sea_level(latitude_deg, longitude_deg),
            clock: CivilClock::zone_for_longitude(longitude_deg),
        }
    }

    pub fn validate(&self) -> Result<(), EphemerisError> {
        self.location.validate()?;
        if !self.clock.offset_minutes().is_finite() {
            return Err(EphemerisError::InvalidLocation("clock offset must be finite"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_boundaries() {
        assert!(GeoLocation::new(90.0, 180.0, 0.0).validate().is_ok());
        assert!(GeoLocation::new(-90.0, -180.0, 8848.0).validate().is_ok());
    }

    #[test]
    fn rejects_out_of_range() {
        assert!(GeoLocation::new(90.5, 0.0, 0.0).validate().is_err());
        assert!(GeoLocation::new(0.0, -181.0, 0.0).validate().is_err());
        assert!(GeoLocation::new(f64::NAN, 0.0, 0.0).validate().is_err());
        assert!(GeoLocation::new(0.0, 0.0, f64::INFINITY).validate().is_err());
    }

    #[test]
    fn zone_clock_follows_longitude() {
        let obs = Observer::with_zone_clock(39.9, 116.4);
        assert_eq!(obs.clock.offset_minutes(), 480.0);
        assert_eq!(obs.location.altitude_m, 0.0);
    }
}
