//! Position snapshot builder.
//!
//! Queries the ephemeris provider once per roster body at a single instant
//! and attaches the derived zodiacal attributes. A snapshot is
//! all-bodies-or-failure: downstream tithi/yoga computation needs Sun and
//! Moon longitudes from the same consistent query set, so partial data is
//! discarded rather than patched.

use serde::Serialize;

use crate::ephemeris::{Body, EphemerisProvider, ROSTER};
use crate::error::{EngineError, EngineResult};
use crate::models::{GeoPosition, Instant};
use crate::panchanga::{Nakshatra, Rashi, Tithi, Yoga, RASHI_SPAN_DEG};

/// A body's ecliptic longitude with derived zodiacal attributes.
#[derive(Debug, Clone, Serialize)]
pub struct BodyPosition {
    pub body: Body,
    /// Ecliptic longitude, normalized into [0, 360) degrees.
    pub longitude: qtty::Degrees,
    /// Zodiac sign containing the longitude.
    pub rashi: Rashi,
    /// Degrees within the sign, [0, 30).
    pub degrees_in_sign: f64,
    /// Nakshatra containing the longitude.
    pub nakshatra: Nakshatra,
}

impl BodyPosition {
    /// Derive the zodiacal attributes from a raw longitude.
    pub fn from_longitude(body: Body, longitude: qtty::Degrees) -> EngineResult<Self> {
        let rashi = Rashi::from_longitude(longitude.value())?;
        let nakshatra = Nakshatra::from_longitude(longitude.value())?;
        let normalized = longitude.value().rem_euclid(360.0);
        Ok(Self {
            body,
            longitude: qtty::Degrees::new(normalized),
            rashi,
            degrees_in_sign: normalized % RASHI_SPAN_DEG,
            nakshatra,
        })
    }
}

/// Positions of the full roster at one instant.
///
/// Construction guarantees every roster body is present, so the accessors
/// are total.
#[derive(Debug, Clone, Serialize)]
pub struct PositionSnapshot {
    pub instant: Instant,
    positions: Vec<BodyPosition>,
}

impl PositionSnapshot {
    /// Position of one roster body.
    pub fn position(&self, body: Body) -> &BodyPosition {
        &self.positions[body.roster_index()]
    }

    /// All positions, in roster order.
    pub fn positions(&self) -> &[BodyPosition] {
        &self.positions
    }

    /// Tithi at this snapshot's instant.
    pub fn tithi(&self) -> EngineResult<Tithi> {
        Tithi::from_longitudes(
            self.position(Body::Sun).longitude.value(),
            self.position(Body::Moon).longitude.value(),
        )
    }

    /// Yoga at this snapshot's instant.
    pub fn yoga(&self) -> EngineResult<Yoga> {
        Yoga::from_longitudes(
            self.position(Body::Sun).longitude.value(),
            self.position(Body::Moon).longitude.value(),
        )
    }

    /// Nakshatra of the Moon at this snapshot's instant.
    pub fn moon_nakshatra(&self) -> Nakshatra {
        self.position(Body::Moon).nakshatra
    }
}

/// Build a snapshot of the full roster at `instant`.
///
/// # Errors
/// * The first body failing before any succeeded propagates as
///   `EphemerisUnavailable` (the provider is simply down).
/// * A body failing after others succeeded surfaces as `PartialSnapshot`
///   naming the body; the partial data is discarded.
pub async fn build_snapshot(
    provider: &dyn EphemerisProvider,
    instant: &Instant,
    geo: Option<&GeoPosition>,
) -> EngineResult<PositionSnapshot> {
    let mut positions = Vec::with_capacity(ROSTER.len());
    for body in ROSTER {
        let longitude = match provider.body_longitude(instant, body, geo).await {
            Ok(longitude) => longitude,
            Err(e) if positions.is_empty() => return Err(e),
            Err(e) => {
                return Err(EngineError::PartialSnapshot {
                    body: body.wire_name(),
                    detail: e.to_string(),
                });
            }
        };
        positions.push(BodyPosition::from_longitude(body, longitude)?);
    }
    Ok(PositionSnapshot {
        instant: *instant,
        positions,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ephemeris::FixedEphemeris;

    fn instant() -> Instant {
        Instant::from_ymd_hms(2026, 8, 5, 10, 15, 0).unwrap()
    }

    #[test]
    fn test_body_position_derivations() {
        // 95.5 deg: Karka, 5.5 deg into the sign, Pushya (95.5 * 27/360
        // lands in bucket 7).
        let pos = BodyPosition::from_longitude(Body::Moon, qtty::Degrees::new(95.5)).unwrap();
        assert_eq!(pos.rashi, Rashi::Karka);
        assert!((pos.degrees_in_sign - 5.5).abs() < 1e-9);
        assert_eq!(pos.nakshatra, Nakshatra::Pushya);
    }

    #[test]
    fn test_body_position_normalizes() {
        let pos = BodyPosition::from_longitude(Body::Sun, qtty::Degrees::new(-30.0)).unwrap();
        assert!((pos.longitude.value() - 330.0).abs() < 1e-9);
        assert_eq!(pos.rashi, Rashi::Kumbha);
    }

    #[tokio::test]
    async fn test_snapshot_covers_roster() {
        let eph = FixedEphemeris::new();
        let snapshot = build_snapshot(&eph, &instant(), None).await.unwrap();
        assert_eq!(snapshot.positions().len(), ROSTER.len());
        for body in ROSTER {
            assert_eq!(snapshot.position(body).body, body);
        }
        assert!(snapshot.tithi().is_ok());
        assert!(snapshot.yoga().is_ok());
    }

    #[tokio::test]
    async fn test_snapshot_all_or_nothing() {
        // Saturn (mid-roster) failing discards the whole snapshot.
        let eph = FixedEphemeris::new().failing_for(Body::Saturn);
        let err = build_snapshot(&eph, &instant(), None).await.unwrap_err();
        assert!(matches!(
            err,
            EngineError::PartialSnapshot { body: "saturn", .. }
        ));
    }

    #[tokio::test]
    async fn test_snapshot_provider_down() {
        // The first roster body failing reads as plain unavailability.
        let eph = FixedEphemeris::new().failing_for(Body::Sun);
        let err = build_snapshot(&eph, &instant(), None).await.unwrap_err();
        assert!(matches!(err, EngineError::EphemerisUnavailable { .. }));
    }
}
