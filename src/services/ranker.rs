//! Horizon ranker.
//!
//! Scans a rolling multi-day window, scores each candidate day, filters by
//! a minimum score, and returns the top candidates sorted by descending
//! score (ties broken by ascending date). The scan is recomputed from
//! scratch on every call; there is no cached or persisted state.

use std::sync::atomic::{AtomicBool, Ordering};

use chrono::{Days, NaiveDate, NaiveTime};
use tracing::{debug, info};

use super::scoring::score_candidate;
use super::snapshot::build_snapshot;
use crate::ephemeris::EphemerisProvider;
use crate::error::{EngineError, EngineResult};
use crate::models::{
    julian_day_number, BirthProfile, EventCategory, GeoPosition, Instant, RankParams,
    ScoredCandidate,
};

/// Canonical display time slots, as (hour, minute).
pub const CANONICAL_SLOTS: [(u32, u32); 4] = [(6, 0), (7, 30), (10, 15), (11, 45)];

/// Deterministic display slot for a candidate day: the Julian Day Number
/// indexes the canonical slot table, so the choice varies across
/// consecutive days but is a pure function of the date.
pub fn display_slot(date: NaiveDate) -> NaiveTime {
    let (hour, minute) = CANONICAL_SLOTS[julian_day_number(date).rem_euclid(4) as usize];
    NaiveTime::from_hms_opt(hour, minute, 0).expect("slot table holds valid times")
}

/// Rank candidate days over the horizon described by `params`.
///
/// Each candidate day is scored at its display slot instant. Any provider
/// failure fails the whole ranking; no placeholder values are substituted.
/// `cancel` is checked between candidate days (coarse-grained
/// cancellation); a set flag aborts the scan with `Cancelled`.
pub async fn rank(
    provider: &dyn EphemerisProvider,
    geo: Option<&GeoPosition>,
    profile: &BirthProfile,
    category: &EventCategory,
    params: &RankParams,
    cancel: Option<&AtomicBool>,
) -> EngineResult<Vec<ScoredCandidate>> {
    let mut candidates = Vec::new();

    for offset in 0..params.horizon_days {
        if let Some(flag) = cancel {
            if flag.load(Ordering::Relaxed) {
                return Err(EngineError::Cancelled);
            }
        }

        let date = params
            .start_date
            .checked_add_days(Days::new(offset as u64))
            .ok_or_else(|| EngineError::InvalidInstant {
                detail: format!("horizon overflows the calendar at {} + {offset}d", params.start_date),
            })?;
        let slot = Instant::new(date, display_slot(date));

        let snapshot = build_snapshot(provider, &slot, geo).await?;
        let candidate = score_candidate(&snapshot, category, profile)?;
        debug!(
            date = %date,
            score = candidate.score,
            tithi = %candidate.tithi,
            "scored candidate day"
        );

        if candidate.score >= params.min_score {
            candidates.push(candidate);
        }
    }

    candidates.sort_by(|a, b| b.score.cmp(&a.score).then(a.date.cmp(&b.date)));
    candidates.truncate(params.top_n);

    info!(
        category = %category.key,
        start = %params.start_date,
        horizon_days = params.horizon_days,
        kept = candidates.len(),
        "horizon ranking complete"
    );
    Ok(candidates)
}
