//! Daily muhurta assembly.
//!
//! Combines the provider's sunrise/sunset with the pure daylight
//! partitioner and attaches the calendrical quantities computed at each
//! interval midpoint.

use chrono::{Datelike, NaiveDate};
use tracing::debug;

use super::snapshot::build_snapshot;
use crate::ephemeris::EphemerisProvider;
use crate::error::EngineResult;
use crate::models::GeoPosition;
use crate::panchanga::{partition_daylight, quality_for, MuhurtaInterval};

/// Compute the fifteen muhurta intervals of one day at one location.
///
/// # Errors
/// * `InvertedDayWindow` when the provider reports sunrise at or after
///   sunset for this date/location.
/// * `EphemerisUnavailable` / `PartialSnapshot` when any midpoint snapshot
///   fails; no interval is emitted with fabricated quantities.
pub async fn day_muhurtas(
    provider: &dyn EphemerisProvider,
    date: NaiveDate,
    geo: &GeoPosition,
) -> EngineResult<Vec<MuhurtaInterval>> {
    let (sunrise, sunset) = provider.sun_rise_set(date, geo).await?;
    debug!(date = %date, sunrise = %sunrise, sunset = %sunset, "day window");

    let windows = partition_daylight(sunrise, sunset)?;
    let weekday = date.weekday();

    let mut intervals = Vec::with_capacity(windows.len());
    for window in windows {
        let snapshot = build_snapshot(provider, &window.midpoint(), Some(geo)).await?;
        let tithi = snapshot.tithi()?;
        intervals.push(MuhurtaInterval {
            ordinal: window.ordinal,
            name: window.name,
            quality: quality_for(window.ordinal, weekday, tithi),
            start: window.start,
            end: window.end,
            tithi,
            yoga: snapshot.yoga()?,
            nakshatra: snapshot.moon_nakshatra(),
        });
    }
    Ok(intervals)
}
