//! Fifteen-fold partition of the daylight period into named muhurtas.
//!
//! The day from sunrise to sunset divides into 15 contiguous intervals of
//! equal duration. Names and base qualities come from the traditional
//! day-muhurta sequence; the quality of a concrete interval additionally
//! depends on the weekday and the tithi (see [`quality_for`]).

use chrono::Weekday;
use serde::{Deserialize, Serialize};

use super::{Nakshatra, Tithi, Yoga};
use crate::error::{EngineError, EngineResult};
use crate::models::time::Instant;

/// Number of muhurtas in the daylight period.
pub const MUHURTA_COUNT: usize = 15;

/// Traditional names of the 15 day muhurtas, in order from sunrise.
/// The eighth, Vidhi, is the Abhijit muhurta. The table is cyclic: the
/// same names recur every day.
pub const MUHURTA_NAMES: [&str; MUHURTA_COUNT] = [
    "Rudra",
    "Ahi",
    "Mitra",
    "Pitru",
    "Vasu",
    "Vara",
    "Vishvedeva",
    "Vidhi",
    "Satamukhi",
    "Puruhuta",
    "Vahini",
    "Naktanakara",
    "Varuna",
    "Aryaman",
    "Bhaga",
];

/// Auspiciousness label of a muhurta interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MuhurtaQuality {
    Auspicious,
    Neutral,
    Inauspicious,
}

/// Base quality per ordinal, before weekday and tithi adjustments.
const BASE_QUALITY: [MuhurtaQuality; MUHURTA_COUNT] = [
    MuhurtaQuality::Inauspicious, // Rudra
    MuhurtaQuality::Inauspicious, // Ahi
    MuhurtaQuality::Auspicious,   // Mitra
    MuhurtaQuality::Inauspicious, // Pitru
    MuhurtaQuality::Auspicious,   // Vasu
    MuhurtaQuality::Neutral,      // Vara
    MuhurtaQuality::Auspicious,   // Vishvedeva
    MuhurtaQuality::Auspicious,   // Vidhi (Abhijit)
    MuhurtaQuality::Neutral,      // Satamukhi
    MuhurtaQuality::Inauspicious, // Puruhuta
    MuhurtaQuality::Neutral,      // Vahini
    MuhurtaQuality::Inauspicious, // Naktanakara
    MuhurtaQuality::Auspicious,   // Varuna
    MuhurtaQuality::Auspicious,   // Aryaman
    MuhurtaQuality::Inauspicious, // Bhaga
];

/// The ordinal struck inauspicious on each weekday, projected from the
/// traditional eight-fold rahu-kala sequence onto the 15-fold partition.
const fn weekday_struck_ordinal(weekday: Weekday) -> u8 {
    match weekday {
        Weekday::Sun => 15,
        Weekday::Mon => 3,
        Weekday::Tue => 13,
        Weekday::Wed => 9,
        Weekday::Thu => 11,
        Weekday::Fri => 7,
        Weekday::Sat => 5,
    }
}

/// Deterministic quality of a muhurta interval.
///
/// Rule order: the weekday-struck ordinal is always inauspicious; otherwise
/// the ordinal's base quality applies, demoted from auspicious to neutral
/// on rikta tithis (4th, 9th, 14th of either paksha).
pub fn quality_for(ordinal: u8, weekday: Weekday, tithi: Tithi) -> MuhurtaQuality {
    debug_assert!((1..=MUHURTA_COUNT as u8).contains(&ordinal));
    if ordinal == weekday_struck_ordinal(weekday) {
        return MuhurtaQuality::Inauspicious;
    }
    let base = BASE_QUALITY[(ordinal - 1) as usize];
    if base == MuhurtaQuality::Auspicious && tithi.is_rikta() {
        return MuhurtaQuality::Neutral;
    }
    base
}

/// One of the 15 equal subdivisions of a day's daylight, before any
/// calendrical quantities are attached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DayMuhurta {
    /// Position within the day, 1-15.
    pub ordinal: u8,
    /// Traditional name from [`MUHURTA_NAMES`].
    pub name: &'static str,
    /// Inclusive start of the interval.
    pub start: Instant,
    /// Exclusive end of the interval.
    pub end: Instant,
}

impl DayMuhurta {
    /// Midpoint of the interval, at one-second resolution.
    pub fn midpoint(&self) -> Instant {
        self.start.add_seconds(self.start.seconds_until(&self.end) / 2)
    }
}

/// A muhurta interval with its quality label and the calendrical
/// quantities computed at its midpoint.
#[derive(Debug, Clone, Serialize)]
pub struct MuhurtaInterval {
    pub ordinal: u8,
    pub name: &'static str,
    pub quality: MuhurtaQuality,
    pub start: Instant,
    pub end: Instant,
    pub tithi: Tithi,
    pub yoga: Yoga,
    pub nakshatra: Nakshatra,
}

/// Partition the daylight period into 15 contiguous, non-overlapping,
/// equal-duration muhurtas spanning exactly `[sunrise, sunset)`.
///
/// # Errors
/// `InvertedDayWindow` if sunset is not strictly after sunrise (polar
/// regions, degenerate provider output). The caller must reject the
/// location or date; no default window is substituted.
pub fn partition_daylight(
    sunrise: Instant,
    sunset: Instant,
) -> EngineResult<[DayMuhurta; MUHURTA_COUNT]> {
    let total_secs = sunrise.seconds_until(&sunset);
    if total_secs <= 0 {
        return Err(EngineError::InvertedDayWindow {
            date: sunrise.date(),
            sunrise: sunrise.to_string(),
            sunset: sunset.to_string(),
        });
    }

    // Boundary offsets are computed once and shared between neighbouring
    // intervals, so contiguity holds exactly even after rounding.
    let mut boundaries = [sunrise; MUHURTA_COUNT + 1];
    for (i, boundary) in boundaries.iter_mut().enumerate() {
        let offset = ((i as f64 * total_secs as f64) / MUHURTA_COUNT as f64).round() as i64;
        *boundary = sunrise.add_seconds(offset);
    }

    let mut intervals = [DayMuhurta {
        ordinal: 0,
        name: MUHURTA_NAMES[0],
        start: sunrise,
        end: sunset,
    }; MUHURTA_COUNT];
    for (i, interval) in intervals.iter_mut().enumerate() {
        *interval = DayMuhurta {
            ordinal: (i + 1) as u8,
            name: MUHURTA_NAMES[i],
            start: boundaries[i],
            end: boundaries[i + 1],
        };
    }
    Ok(intervals)
}
