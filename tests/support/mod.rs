//! Shared builders for integration tests.

use chrono::{NaiveDate, NaiveTime};

use muhurta_engine::models::{BirthProfile, GeoPosition};

pub fn test_site() -> GeoPosition {
    // New Delhi.
    GeoPosition::new(28.6139, 77.2090, Some(216.0)).unwrap()
}

pub fn test_profile() -> BirthProfile {
    BirthProfile::new(
        NaiveDate::from_ymd_opt(1990, 3, 15).unwrap(),
        NaiveTime::from_hms_opt(8, 30, 0).unwrap(),
        "Jaipur, India",
    )
}

pub fn test_start_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 8, 5).unwrap()
}
