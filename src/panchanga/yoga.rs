//! Yoga (luni-solar yoga) computation.
//!
//! Yoga = which of 27 segments of (Sun + Moon) mod 360 (13 deg 20' each)
//! the given longitudes fall in.

use serde::{Deserialize, Serialize};

use super::{checked_angle, normalize_degrees};
use crate::error::EngineResult;

/// Span of one yoga: 360/27 = 13.3333... degrees.
pub const YOGA_SEGMENT_DEG: f64 = 360.0 / 27.0;

/// Names of the 27 yogas, Vishkambha through Vaidhriti.
const YOGA_NAMES: [&str; 27] = [
    "Vishkambha",
    "Priti",
    "Ayushman",
    "Saubhagya",
    "Shobhana",
    "Atiganda",
    "Sukarman",
    "Dhriti",
    "Shula",
    "Ganda",
    "Vriddhi",
    "Dhruva",
    "Vyaghata",
    "Harshana",
    "Vajra",
    "Siddhi",
    "Vyatipata",
    "Variyan",
    "Parigha",
    "Shiva",
    "Siddha",
    "Sadhya",
    "Shubha",
    "Shukla",
    "Brahma",
    "Indra",
    "Vaidhriti",
];

/// One of the 27 luni-solar yogas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Yoga {
    number: u8,
}

impl Yoga {
    /// Derive the yoga from the Sun's and Moon's ecliptic longitudes in
    /// degrees. Unlike tithi this uses the sum, not the difference.
    pub fn from_longitudes(sun_deg: f64, moon_deg: f64) -> EngineResult<Self> {
        let sun = checked_angle(sun_deg)?;
        let moon = checked_angle(moon_deg)?;
        let sum = normalize_degrees(sun + moon);
        let bucket = ((sum / YOGA_SEGMENT_DEG) as u8).min(26);
        Ok(Self { number: bucket + 1 })
    }

    /// Yoga number, 1-27.
    pub const fn number(self) -> u8 {
        self.number
    }

    /// Sanskrit name of the yoga.
    pub fn name(self) -> &'static str {
        YOGA_NAMES[(self.number - 1) as usize]
    }
}

impl std::fmt::Display for Yoga {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
