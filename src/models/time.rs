use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime, Timelike, Weekday};
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Julian Day representation.
/// JD 2440587.5 = 1970-01-01 00:00:00 (Unix epoch).
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct JulianDay(qtty::Days);

/// Offset between the Julian Day axis and the Unix epoch, in days.
const JD_UNIX_EPOCH: f64 = 2_440_587.5;

impl JulianDay {
    /// Create a new Julian Day value.
    pub fn new<V: Into<qtty::Days>>(v: V) -> Self {
        Self(v.into())
    }

    /// Raw Julian Day value as f64.
    pub fn value(&self) -> f64 {
        self.0.value()
    }

    /// Convert to Unix timestamp (seconds since 1970-01-01 00:00:00).
    pub fn to_unix_timestamp(&self) -> f64 {
        (self.value() - JD_UNIX_EPOCH) * 86_400.0
    }

    /// Create from Unix timestamp (seconds since 1970-01-01 00:00:00).
    pub fn from_unix_timestamp(timestamp: f64) -> Self {
        Self::new(timestamp / 86_400.0 + JD_UNIX_EPOCH)
    }

    /// Offset this Julian Day by a (possibly fractional) number of days.
    pub fn add_days(&self, days: f64) -> Self {
        Self::new(self.value() + days)
    }
}

impl From<f64> for JulianDay {
    fn from(v: f64) -> Self {
        JulianDay::new(v)
    }
}

/// A calendar instant in the proleptic Gregorian calendar, held at
/// one-second resolution. The engine's public types carry `Instant`s;
/// internal time arithmetic runs on the continuous [`JulianDay`] axis.
///
/// Invariant: `instant -> julian day -> instant` round-trips to the same
/// calendar fields (the conversion back rounds to the nearest second).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Instant(NaiveDateTime);

impl Instant {
    /// Create an instant from a date and time-of-day. Sub-second precision
    /// is truncated.
    pub fn new(date: NaiveDate, time: NaiveTime) -> Self {
        let time = time.with_nanosecond(0).unwrap_or(time);
        Self(NaiveDateTime::new(date, time))
    }

    /// Create an instant from calendar fields.
    pub fn from_ymd_hms(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: u32,
    ) -> EngineResult<Self> {
        let date = NaiveDate::from_ymd_opt(year, month, day).ok_or(EngineError::InvalidInstant {
            detail: format!("invalid calendar date {year:04}-{month:02}-{day:02}"),
        })?;
        let time =
            NaiveTime::from_hms_opt(hour, minute, second).ok_or(EngineError::InvalidInstant {
                detail: format!("invalid time of day {hour:02}:{minute:02}:{second:02}"),
            })?;
        Ok(Self(NaiveDateTime::new(date, time)))
    }

    /// The calendar date of this instant.
    pub fn date(&self) -> NaiveDate {
        self.0.date()
    }

    /// The time-of-day of this instant.
    pub fn time(&self) -> NaiveTime {
        self.0.time()
    }

    /// The underlying chrono datetime.
    pub fn datetime(&self) -> NaiveDateTime {
        self.0
    }

    /// Civil weekday of this instant's date.
    pub fn weekday(&self) -> Weekday {
        self.0.weekday()
    }

    /// Convert to the continuous Julian Day axis.
    pub fn to_julian_day(&self) -> JulianDay {
        JulianDay::from_unix_timestamp(self.0.and_utc().timestamp() as f64)
    }

    /// Convert from the Julian Day axis, rounding to the nearest second.
    pub fn from_julian_day(jd: JulianDay) -> EngineResult<Self> {
        let secs = jd.to_unix_timestamp().round();
        if !secs.is_finite() {
            return Err(EngineError::InvalidInstant {
                detail: format!("julian day {} is not representable", jd.value()),
            });
        }
        let dt = chrono::DateTime::from_timestamp(secs as i64, 0).ok_or_else(|| {
            EngineError::InvalidInstant {
                detail: format!("julian day {} is out of calendar range", jd.value()),
            }
        })?;
        Ok(Self(dt.naive_utc()))
    }

    /// Parse the wire format used by the worker protocol
    /// (`YYYY-MM-DDTHH:MM:SS`).
    pub fn parse_wire(s: &str) -> EngineResult<Self> {
        NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S")
            .map(Self)
            .map_err(|e| EngineError::InvalidInstant {
                detail: format!("cannot parse '{s}': {e}"),
            })
    }

    /// Format for the worker protocol (`YYYY-MM-DDTHH:MM:SS`).
    pub fn to_wire(&self) -> String {
        self.0.format("%Y-%m-%dT%H:%M:%S").to_string()
    }

    /// Seconds elapsed from `self` to `other` (negative if `other` is
    /// earlier).
    pub fn seconds_until(&self, other: &Instant) -> i64 {
        (other.0 - self.0).num_seconds()
    }

    /// Offset this instant by a whole number of seconds.
    pub fn add_seconds(&self, seconds: i64) -> Self {
        Self(self.0 + chrono::Duration::seconds(seconds))
    }
}

impl std::fmt::Display for Instant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d %H:%M:%S"))
    }
}

/// Integer Julian Day Number of a civil date (the JDN whose noon falls on
/// that date). Used for deterministic, location-independent day keys.
pub fn julian_day_number(date: NaiveDate) -> i64 {
    // num_days_from_ce() is 1 for 0001-01-01, whose JDN is 1721426.
    date.num_days_from_ce() as i64 + 1_721_425
}
