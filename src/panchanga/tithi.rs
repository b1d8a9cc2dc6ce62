//! Tithi (lunar day) computation.
//!
//! Tithi = which of 30 segments of Moon-Sun elongation (12 deg each) the
//! given longitudes fall in. The first fifteen form the waxing (Shukla)
//! paksha, the second fifteen the waning (Krishna) paksha.

use serde::{Deserialize, Serialize};

use super::{checked_angle, normalize_degrees};
use crate::error::EngineResult;

/// Span of one tithi: 360/30 = 12 degrees of elongation.
pub const TITHI_SEGMENT_DEG: f64 = 12.0;

/// Waxing or waning half of the lunar month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Paksha {
    /// Waxing half (tithis 1-15, new moon to full moon).
    Shukla,
    /// Waning half (tithis 16-30, full moon to new moon).
    Krishna,
}

impl Paksha {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Shukla => "Shukla",
            Self::Krishna => "Krishna",
        }
    }
}

/// Names of the tithis within one paksha. The fifteenth differs by paksha:
/// Purnima (full moon) closes Shukla, Amavasya (new moon) closes Krishna.
const TITHI_NAMES: [&str; 14] = [
    "Pratipada",
    "Dvitiya",
    "Tritiya",
    "Chaturthi",
    "Panchami",
    "Shashthi",
    "Saptami",
    "Ashtami",
    "Navami",
    "Dashami",
    "Ekadashi",
    "Dvadashi",
    "Trayodashi",
    "Chaturdashi",
];

/// A lunar day, numbered 1-30 across the whole lunar month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tithi {
    number: u8,
}

impl Tithi {
    /// Derive the tithi from the Sun's and Moon's ecliptic longitudes in
    /// degrees. Both angles are normalized, so wrap-equivalent inputs give
    /// the same tithi. Defined whenever both longitudes are finite.
    pub fn from_longitudes(sun_deg: f64, moon_deg: f64) -> EngineResult<Self> {
        let sun = checked_angle(sun_deg)?;
        let moon = checked_angle(moon_deg)?;
        let elongation = normalize_degrees(moon - sun);
        let bucket = ((elongation / TITHI_SEGMENT_DEG) as u8).min(29);
        Ok(Self { number: bucket + 1 })
    }

    /// Construct from a known tithi number in 1..=30. Out-of-range input
    /// is clamped into the valid range.
    pub fn from_number(number: u8) -> Self {
        Self {
            number: number.clamp(1, 30),
        }
    }

    /// Tithi number across the whole lunar month, 1-30.
    pub const fn number(self) -> u8 {
        self.number
    }

    /// Which half of the lunar month this tithi falls in.
    pub const fn paksha(self) -> Paksha {
        if self.number <= 15 {
            Paksha::Shukla
        } else {
            Paksha::Krishna
        }
    }

    /// Position within the paksha, 1-15.
    pub const fn number_in_paksha(self) -> u8 {
        if self.number <= 15 {
            self.number
        } else {
            self.number - 15
        }
    }

    /// Whether this is a rikta ("empty") tithi: the 4th, 9th, or 14th of
    /// either paksha, traditionally avoided for auspicious undertakings.
    pub const fn is_rikta(self) -> bool {
        matches!(self.number_in_paksha(), 4 | 9 | 14)
    }

    /// Sanskrit name, e.g. "Ashtami", "Purnima", "Amavasya".
    pub fn name(self) -> &'static str {
        match (self.number_in_paksha(), self.paksha()) {
            (15, Paksha::Shukla) => "Purnima",
            (15, Paksha::Krishna) => "Amavasya",
            (n, _) => TITHI_NAMES[(n - 1) as usize],
        }
    }
}

impl std::fmt::Display for Tithi {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.paksha().name(), self.name())
    }
}
