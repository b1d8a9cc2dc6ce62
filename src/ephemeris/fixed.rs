//! Deterministic in-memory ephemeris for unit testing and local
//! development.
//!
//! Longitudes advance linearly at each body's mean daily motion from a
//! reference epoch, so consecutive days produce realistically different
//! tithis and nakshatras while every value stays exactly reproducible.
//! Not an ephemeris: positions are mean elements, good enough to exercise
//! the engine, never for real almanac output.

use std::collections::HashSet;

use async_trait::async_trait;
use chrono::{NaiveDate, NaiveTime};

use super::{Body, EphemerisProvider};
use crate::error::{EngineError, EngineResult};
use crate::models::{GeoPosition, Instant, JulianDay};

/// Reference epoch J2000.0 (2000-01-01 12:00).
const EPOCH_JD: f64 = 2_451_545.0;

/// Mean ecliptic longitude at the epoch, degrees, in roster order.
const EPOCH_LONGITUDES: [f64; 8] = [
    280.460, // Sun
    218.316, // Moon
    252.251, // Mercury
    181.980, // Venus
    355.453, // Mars
    34.404,  // Jupiter
    49.944,  // Saturn
    125.080, // Rahu (mean ascending node)
];

/// Mean daily motion, degrees per day, in roster order. Rahu regresses.
const DAILY_MOTION: [f64; 8] = [
    0.985_65,
    13.176_40,
    4.092_34,
    1.602_13,
    0.524_03,
    0.083_09,
    0.033_46,
    -0.052_95,
];

/// In-memory deterministic provider (the test/dev double).
#[derive(Debug, Clone)]
pub struct FixedEphemeris {
    epoch_longitudes: [f64; 8],
    daily_motion: [f64; 8],
    sunrise: NaiveTime,
    sunset: NaiveTime,
    failing: HashSet<Body>,
}

impl FixedEphemeris {
    /// Provider with J2000 mean elements and a 06:00/18:00 day window.
    pub fn new() -> Self {
        Self {
            epoch_longitudes: EPOCH_LONGITUDES,
            daily_motion: DAILY_MOTION,
            sunrise: NaiveTime::from_hms_opt(6, 0, 0).expect("valid literal time"),
            sunset: NaiveTime::from_hms_opt(18, 0, 0).expect("valid literal time"),
            failing: HashSet::new(),
        }
    }

    /// Override the reported sunrise and sunset times of day. Setting an
    /// inverted pair is allowed so callers can exercise the partitioner's
    /// rejection path.
    pub fn with_rise_set(mut self, sunrise: NaiveTime, sunset: NaiveTime) -> Self {
        self.sunrise = sunrise;
        self.sunset = sunset;
        self
    }

    /// Override one body's epoch longitude and daily motion.
    pub fn with_body_state(mut self, body: Body, epoch_longitude: f64, daily_motion: f64) -> Self {
        self.epoch_longitudes[body.roster_index()] = epoch_longitude;
        self.daily_motion[body.roster_index()] = daily_motion;
        self
    }

    /// Make queries for `body` fail, to exercise all-or-nothing snapshot
    /// behaviour.
    pub fn failing_for(mut self, body: Body) -> Self {
        self.failing.insert(body);
        self
    }

    fn longitude_at(&self, jd: JulianDay, body: Body) -> f64 {
        let i = body.roster_index();
        let days = jd.value() - EPOCH_JD;
        (self.epoch_longitudes[i] + self.daily_motion[i] * days).rem_euclid(360.0)
    }
}

impl Default for FixedEphemeris {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl EphemerisProvider for FixedEphemeris {
    async fn body_longitude(
        &self,
        instant: &Instant,
        body: Body,
        _geo: Option<&GeoPosition>,
    ) -> EngineResult<qtty::Degrees> {
        if self.failing.contains(&body) {
            return Err(EngineError::unavailable(format!(
                "fixed ephemeris configured to fail for {body}"
            )));
        }
        Ok(qtty::Degrees::new(
            self.longitude_at(instant.to_julian_day(), body),
        ))
    }

    async fn sun_rise_set(
        &self,
        date: NaiveDate,
        _geo: &GeoPosition,
    ) -> EngineResult<(Instant, Instant)> {
        Ok((
            Instant::new(date, self.sunrise),
            Instant::new(date, self.sunset),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ephemeris::ROSTER;

    fn noon_j2000() -> Instant {
        Instant::from_ymd_hms(2000, 1, 1, 12, 0, 0).unwrap()
    }

    #[tokio::test]
    async fn test_epoch_longitudes() {
        let eph = FixedEphemeris::new();
        for body in ROSTER {
            let lon = eph
                .body_longitude(&noon_j2000(), body, None)
                .await
                .unwrap()
                .value();
            assert!(
                (lon - EPOCH_LONGITUDES[body.roster_index()]).abs() < 1e-9,
                "{body}: {lon}"
            );
        }
    }

    #[tokio::test]
    async fn test_longitudes_advance_and_wrap() {
        let eph = FixedEphemeris::new();
        let later = Instant::from_ymd_hms(2000, 1, 31, 12, 0, 0).unwrap();
        let moon = eph
            .body_longitude(&later, Body::Moon, None)
            .await
            .unwrap()
            .value();
        // 30 days * 13.1764 deg/day wraps past 360.
        let expected = (218.316_f64 + 30.0 * 13.176_40).rem_euclid(360.0);
        assert!((moon - expected).abs() < 1e-6);
        assert!((0.0..360.0).contains(&moon));
    }

    #[tokio::test]
    async fn test_rahu_regresses() {
        let eph = FixedEphemeris::new();
        let later = Instant::from_ymd_hms(2000, 1, 11, 12, 0, 0).unwrap();
        let rahu = eph
            .body_longitude(&later, Body::Rahu, None)
            .await
            .unwrap()
            .value();
        assert!(rahu < 125.080);
    }

    #[tokio::test]
    async fn test_configured_failure() {
        let eph = FixedEphemeris::new().failing_for(Body::Saturn);
        let result = eph.body_longitude(&noon_j2000(), Body::Saturn, None).await;
        assert!(matches!(
            result,
            Err(EngineError::EphemerisUnavailable { .. })
        ));
        // Other bodies still answer.
        assert!(eph
            .body_longitude(&noon_j2000(), Body::Sun, None)
            .await
            .is_ok());
    }

    #[tokio::test]
    async fn test_rise_set_uses_configured_times() {
        let geo = GeoPosition::new(0.0, 0.0, None).unwrap();
        let date = NaiveDate::from_ymd_opt(2026, 8, 5).unwrap();
        let eph = FixedEphemeris::new().with_rise_set(
            NaiveTime::from_hms_opt(5, 30, 0).unwrap(),
            NaiveTime::from_hms_opt(19, 15, 0).unwrap(),
        );
        let (sunrise, sunset) = eph.sun_rise_set(date, &geo).await.unwrap();
        assert_eq!(sunrise, Instant::from_ymd_hms(2026, 8, 5, 5, 30, 0).unwrap());
        assert_eq!(sunset, Instant::from_ymd_hms(2026, 8, 5, 19, 15, 0).unwrap());
    }
}
