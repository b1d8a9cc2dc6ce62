//! Nakshatra (lunar mansion) computation.
//!
//! The ecliptic circle is divided into 27 equal nakshatras of 13 deg 20'
//! (13.3333... deg) each, indexed from the Moon's ecliptic longitude alone.

use serde::{Deserialize, Serialize};

use super::{checked_angle, normalize_degrees};
use crate::error::EngineResult;

/// Span of one nakshatra: 360/27 = 13.3333... degrees.
pub const NAKSHATRA_SPAN_DEG: f64 = 360.0 / 27.0;

/// The 27 nakshatras from Ashwini to Revati.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Nakshatra {
    Ashwini,
    Bharani,
    Krittika,
    Rohini,
    Mrigashira,
    Ardra,
    Punarvasu,
    Pushya,
    Ashlesha,
    Magha,
    PurvaPhalguni,
    UttaraPhalguni,
    Hasta,
    Chitra,
    Swati,
    Vishakha,
    Anuradha,
    Jyeshtha,
    Mula,
    PurvaAshadha,
    UttaraAshadha,
    Shravana,
    Dhanishtha,
    Shatabhisha,
    PurvaBhadrapada,
    UttaraBhadrapada,
    Revati,
}

/// All 27 nakshatras in order (0 = Ashwini, 26 = Revati).
pub const ALL_NAKSHATRAS: [Nakshatra; 27] = [
    Nakshatra::Ashwini,
    Nakshatra::Bharani,
    Nakshatra::Krittika,
    Nakshatra::Rohini,
    Nakshatra::Mrigashira,
    Nakshatra::Ardra,
    Nakshatra::Punarvasu,
    Nakshatra::Pushya,
    Nakshatra::Ashlesha,
    Nakshatra::Magha,
    Nakshatra::PurvaPhalguni,
    Nakshatra::UttaraPhalguni,
    Nakshatra::Hasta,
    Nakshatra::Chitra,
    Nakshatra::Swati,
    Nakshatra::Vishakha,
    Nakshatra::Anuradha,
    Nakshatra::Jyeshtha,
    Nakshatra::Mula,
    Nakshatra::PurvaAshadha,
    Nakshatra::UttaraAshadha,
    Nakshatra::Shravana,
    Nakshatra::Dhanishtha,
    Nakshatra::Shatabhisha,
    Nakshatra::PurvaBhadrapada,
    Nakshatra::UttaraBhadrapada,
    Nakshatra::Revati,
];

impl Nakshatra {
    /// Sanskrit name of the nakshatra.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ashwini => "Ashwini",
            Self::Bharani => "Bharani",
            Self::Krittika => "Krittika",
            Self::Rohini => "Rohini",
            Self::Mrigashira => "Mrigashira",
            Self::Ardra => "Ardra",
            Self::Punarvasu => "Punarvasu",
            Self::Pushya => "Pushya",
            Self::Ashlesha => "Ashlesha",
            Self::Magha => "Magha",
            Self::PurvaPhalguni => "Purva Phalguni",
            Self::UttaraPhalguni => "Uttara Phalguni",
            Self::Hasta => "Hasta",
            Self::Chitra => "Chitra",
            Self::Swati => "Swati",
            Self::Vishakha => "Vishakha",
            Self::Anuradha => "Anuradha",
            Self::Jyeshtha => "Jyeshtha",
            Self::Mula => "Mula",
            Self::PurvaAshadha => "Purva Ashadha",
            Self::UttaraAshadha => "Uttara Ashadha",
            Self::Shravana => "Shravana",
            Self::Dhanishtha => "Dhanishtha",
            Self::Shatabhisha => "Shatabhisha",
            Self::PurvaBhadrapada => "Purva Bhadrapada",
            Self::UttaraBhadrapada => "Uttara Bhadrapada",
            Self::Revati => "Revati",
        }
    }

    /// Zero-based index (0 = Ashwini, 26 = Revati).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// One-based number (1 = Ashwini, 27 = Revati).
    pub const fn number(self) -> u8 {
        self as u8 + 1
    }

    /// Determine the nakshatra from an ecliptic longitude in degrees.
    ///
    /// The longitude is normalized into [0, 360); the bucket index is
    /// clamped to 26 to absorb floating-point edge cases at exactly 360.
    pub fn from_longitude(longitude_deg: f64) -> EngineResult<Self> {
        let lon = normalize_degrees(checked_angle(longitude_deg)?);
        let index = ((lon / NAKSHATRA_SPAN_DEG) as usize).min(26);
        Ok(ALL_NAKSHATRAS[index])
    }
}

impl std::fmt::Display for Nakshatra {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_and_last() {
        assert_eq!(Nakshatra::from_longitude(0.0).unwrap(), Nakshatra::Ashwini);
        assert_eq!(
            Nakshatra::from_longitude(359.999).unwrap(),
            Nakshatra::Revati
        );
        // Exactly 360 wraps to Ashwini after normalization.
        assert_eq!(
            Nakshatra::from_longitude(360.0).unwrap(),
            Nakshatra::Ashwini
        );
    }

    #[test]
    fn test_rohini_band() {
        // Rohini occupies [40, 53.333) degrees.
        assert_eq!(Nakshatra::from_longitude(40.0).unwrap(), Nakshatra::Rohini);
        assert_eq!(Nakshatra::from_longitude(53.2).unwrap(), Nakshatra::Rohini);
        assert_eq!(
            Nakshatra::from_longitude(53.34).unwrap(),
            Nakshatra::Mrigashira
        );
    }

    #[test]
    fn test_monotone_and_covering() {
        // Sweeping one rotation in 0.25 deg steps must visit every index in
        // non-decreasing order with no gaps.
        let mut last_index = 0u8;
        let mut seen = [false; 27];
        let mut lon = 0.0;
        while lon < 360.0 {
            let n = Nakshatra::from_longitude(lon).unwrap();
            assert!(n.index() >= last_index);
            assert!(n.index() - last_index <= 1, "gap at {lon}");
            seen[n.index() as usize] = true;
            last_index = n.index();
            lon += 0.25;
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn test_rejects_non_finite() {
        assert!(Nakshatra::from_longitude(f64::NAN).is_err());
    }

    #[test]
    fn test_names_and_numbers() {
        assert_eq!(Nakshatra::Ashwini.number(), 1);
        assert_eq!(Nakshatra::Revati.number(), 27);
        assert_eq!(Nakshatra::PurvaPhalguni.name(), "Purva Phalguni");
    }
}
