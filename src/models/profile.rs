use chrono::{Datelike, NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::models::time::Instant;
use crate::panchanga::{Nakshatra, Tithi};

/// Reference birth data for the person requesting recommendations.
///
/// Immutable once constructed; the engine only reads the birth month for
/// phase-alignment scoring. `location` is an opaque display string owned
/// by the caller - geocoding happens outside the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BirthProfile {
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub location: String,
}

impl BirthProfile {
    pub fn new(date: NaiveDate, time: NaiveTime, location: impl Into<String>) -> Self {
        Self {
            date,
            time,
            location: location.into(),
        }
    }

    /// Calendar month of the birth date, 1-12.
    pub fn birth_month(&self) -> u32 {
        self.date.month()
    }
}

/// Parameters for one horizon-ranking request.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RankParams {
    /// First candidate day of the scan (inclusive).
    pub start_date: NaiveDate,
    /// Number of days scanned from `start_date`.
    pub horizon_days: u32,
    /// Candidates scoring below this are dropped.
    pub min_score: u8,
    /// Maximum number of candidates returned.
    pub top_n: usize,
}

impl RankParams {
    /// Default parameters (90-day horizon, min score 60, top 20) starting
    /// at the given date. The start date is always explicit so that a
    /// ranking request is fully determined by its inputs.
    pub fn starting(start_date: NaiveDate) -> Self {
        Self {
            start_date,
            horizon_days: 90,
            min_score: 60,
            top_n: 20,
        }
    }
}

/// A scored, ranked candidate produced by the horizon ranker.
///
/// Created by the scoring function and consumed read-only; never mutated
/// after creation.
#[derive(Debug, Clone, Serialize)]
pub struct ScoredCandidate {
    /// Candidate calendar day.
    pub date: NaiveDate,
    /// Chosen display time slot on that day.
    pub slot: Instant,
    /// Key of the event category this candidate was scored for.
    pub category: String,
    /// Desirability score, clamped to [10, 100].
    pub score: u8,
    /// Qualitative band label for the score.
    pub description: &'static str,
    /// Tithi at the scored instant.
    pub tithi: Tithi,
    /// Nakshatra at the scored instant.
    pub nakshatra: Nakshatra,
    /// Human-readable breakdown of the score contributions.
    pub rationale: String,
}
