//! Rashi (zodiac sign) lookup from ecliptic longitude.

use serde::{Deserialize, Serialize};

use super::{checked_angle, normalize_degrees};
use crate::error::EngineResult;

/// Span of one rashi: 360/12 = 30 degrees.
pub const RASHI_SPAN_DEG: f64 = 30.0;

/// The 12 rashis from Mesha to Meena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rashi {
    Mesha,
    Vrishabha,
    Mithuna,
    Karka,
    Simha,
    Kanya,
    Tula,
    Vrishchika,
    Dhanu,
    Makara,
    Kumbha,
    Meena,
}

/// All 12 rashis in order (0 = Mesha, 11 = Meena).
pub const ALL_RASHIS: [Rashi; 12] = [
    Rashi::Mesha,
    Rashi::Vrishabha,
    Rashi::Mithuna,
    Rashi::Karka,
    Rashi::Simha,
    Rashi::Kanya,
    Rashi::Tula,
    Rashi::Vrishchika,
    Rashi::Dhanu,
    Rashi::Makara,
    Rashi::Kumbha,
    Rashi::Meena,
];

impl Rashi {
    /// Sanskrit name of the rashi.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Mesha => "Mesha",
            Self::Vrishabha => "Vrishabha",
            Self::Mithuna => "Mithuna",
            Self::Karka => "Karka",
            Self::Simha => "Simha",
            Self::Kanya => "Kanya",
            Self::Tula => "Tula",
            Self::Vrishchika => "Vrishchika",
            Self::Dhanu => "Dhanu",
            Self::Makara => "Makara",
            Self::Kumbha => "Kumbha",
            Self::Meena => "Meena",
        }
    }

    /// Zero-based index (0 = Mesha, 11 = Meena).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Determine the rashi from an ecliptic longitude in degrees.
    pub fn from_longitude(longitude_deg: f64) -> EngineResult<Self> {
        let lon = normalize_degrees(checked_angle(longitude_deg)?);
        let index = ((lon / RASHI_SPAN_DEG) as usize).min(11);
        Ok(ALL_RASHIS[index])
    }
}

impl std::fmt::Display for Rashi {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
