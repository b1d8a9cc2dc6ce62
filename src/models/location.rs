use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Geographic position of the observer.
///
/// Required for sunrise/sunset queries and topocentric longitude queries.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPosition {
    /// Latitude in degrees, [-90, 90].
    pub latitude: f64,
    /// Longitude in degrees, [-180, 180], east positive.
    pub longitude: f64,
    /// Altitude above sea level in meters, if known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub altitude_m: Option<f64>,
}

impl GeoPosition {
    /// Create a validated geographic position.
    ///
    /// # Returns
    /// * `Ok(GeoPosition)` if latitude and longitude are finite and in range
    /// * `Err(EngineError::InvalidInstant)` is never returned here; range
    ///   violations surface as `EngineError::Config`
    pub fn new(latitude: f64, longitude: f64, altitude_m: Option<f64>) -> EngineResult<Self> {
        if !latitude.is_finite() || !(-90.0..=90.0).contains(&latitude) {
            return Err(EngineError::config(format!(
                "latitude {latitude} out of range [-90, 90]"
            )));
        }
        if !longitude.is_finite() || !(-180.0..=180.0).contains(&longitude) {
            return Err(EngineError::config(format!(
                "longitude {longitude} out of range [-180, 180]"
            )));
        }
        Ok(Self {
            latitude,
            longitude,
            altitude_m,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_valid_position() {
        let geo = GeoPosition::new(28.6139, 77.2090, Some(216.0)).unwrap();
        assert_eq!(geo.latitude, 28.6139);
        assert_eq!(geo.longitude, 77.2090);
    }

    #[test]
    fn test_rejects_out_of_range() {
        assert!(GeoPosition::new(91.0, 0.0, None).is_err());
        assert!(GeoPosition::new(-90.5, 0.0, None).is_err());
        assert!(GeoPosition::new(0.0, 180.5, None).is_err());
        assert!(GeoPosition::new(f64::NAN, 0.0, None).is_err());
    }

    #[test]
    fn test_poles_and_antimeridian_are_valid() {
        assert!(GeoPosition::new(90.0, -180.0, None).is_ok());
        assert!(GeoPosition::new(-90.0, 180.0, None).is_ok());
    }
}
