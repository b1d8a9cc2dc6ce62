//! Ephemeris provider boundary.
//!
//! The engine never computes planetary positions itself: it asks an
//! [`EphemerisProvider`] for ecliptic longitudes and sunrise/sunset
//! instants. Implementations can be swapped via dependency injection:
//! an out-of-process worker ([`WorkerProvider`]), a deterministic
//! in-memory double ([`FixedEphemeris`]), or anything else that honours
//! the trait contract.

pub mod factory;
pub mod fixed;
pub mod worker;

pub use factory::{ProviderFactory, ProviderType};
pub use fixed::FixedEphemeris;
pub use worker::WorkerProvider;

use async_trait::async_trait;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::EngineResult;
use crate::models::{GeoPosition, Instant};

/// Celestial bodies the engine queries. The roster is fixed; "Rahu" is the
/// mean lunar ascending node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Body {
    Sun,
    Moon,
    Mercury,
    Venus,
    Mars,
    Jupiter,
    Saturn,
    Rahu,
}

/// The full query roster, in snapshot order.
pub const ROSTER: [Body; 8] = [
    Body::Sun,
    Body::Moon,
    Body::Mercury,
    Body::Venus,
    Body::Mars,
    Body::Jupiter,
    Body::Saturn,
    Body::Rahu,
];

impl Body {
    /// Stable identifier used on the worker wire.
    pub const fn wire_name(self) -> &'static str {
        match self {
            Self::Sun => "sun",
            Self::Moon => "moon",
            Self::Mercury => "mercury",
            Self::Venus => "venus",
            Self::Mars => "mars",
            Self::Jupiter => "jupiter",
            Self::Saturn => "saturn",
            Self::Rahu => "rahu",
        }
    }

    /// Position of this body within [`ROSTER`].
    pub const fn roster_index(self) -> usize {
        self as usize
    }
}

impl std::fmt::Display for Body {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.wire_name())
    }
}

/// Source of celestial longitudes and solar rise/set instants.
///
/// # Thread safety
/// Implementations must be `Send + Sync` so a single provider can be
/// shared behind an `Arc` across concurrent ranking requests.
///
/// # Error handling
/// Any failure to produce a value maps to
/// [`EngineError::EphemerisUnavailable`](crate::error::EngineError);
/// providers never return placeholder values.
#[async_trait]
pub trait EphemerisProvider: Send + Sync {
    /// Ecliptic longitude of `body` at `instant`, in degrees [0, 360).
    /// When `geo` is given the query is topocentric.
    async fn body_longitude(
        &self,
        instant: &Instant,
        body: Body,
        geo: Option<&GeoPosition>,
    ) -> EngineResult<qtty::Degrees>;

    /// Sunrise and sunset instants for `date` at `geo`.
    ///
    /// The pair is returned as observed; the daylight partitioner is
    /// responsible for rejecting inverted windows.
    async fn sun_rise_set(
        &self,
        date: NaiveDate,
        geo: &GeoPosition,
    ) -> EngineResult<(Instant, Instant)>;
}

impl std::fmt::Debug for dyn EphemerisProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "<dyn EphemerisProvider>")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roster_order_matches_indices() {
        for (i, body) in ROSTER.iter().enumerate() {
            assert_eq!(body.roster_index(), i);
        }
    }

    #[test]
    fn test_wire_names_are_lowercase_and_unique() {
        let mut seen = std::collections::HashSet::new();
        for body in ROSTER {
            let name = body.wire_name();
            assert_eq!(name, name.to_lowercase());
            assert!(seen.insert(name));
        }
    }

    #[test]
    fn test_body_serde_matches_wire_name() {
        for body in ROSTER {
            let json = serde_json::to_string(&body).unwrap();
            assert_eq!(json, format!("\"{}\"", body.wire_name()));
        }
    }
}
