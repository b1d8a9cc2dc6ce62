//! Property-style sweeps over the pure calendrical layer.

use chrono::NaiveDate;

use muhurta_engine::models::Instant;
use muhurta_engine::panchanga::{
    partition_daylight, Nakshatra, Tithi, Yoga, MUHURTA_COUNT,
};

#[test]
fn test_tithi_total_over_grid() {
    // Every (sun, moon) pair on a coarse grid yields a tithi in 1..=30,
    // and shifting either longitude by a full turn changes nothing.
    let mut sun = 0.0;
    while sun < 360.0 {
        let mut moon = 0.0;
        while moon < 360.0 {
            let tithi = Tithi::from_longitudes(sun, moon).unwrap();
            assert!((1..=30).contains(&tithi.number()));
            assert_eq!(Tithi::from_longitudes(sun + 360.0, moon).unwrap(), tithi);
            assert_eq!(Tithi::from_longitudes(sun, moon - 720.0).unwrap(), tithi);
            moon += 7.3;
        }
        sun += 11.1;
    }
}

#[test]
fn test_yoga_total_over_grid() {
    let mut sun = 0.0;
    while sun < 360.0 {
        let mut moon = 0.0;
        while moon < 360.0 {
            let yoga = Yoga::from_longitudes(sun, moon).unwrap();
            assert!((1..=27).contains(&yoga.number()));
            moon += 13.7;
        }
        sun += 17.9;
    }
}

#[test]
fn test_nakshatra_covers_without_gaps() {
    let mut last = Nakshatra::from_longitude(0.0).unwrap().index();
    assert_eq!(last, 0);
    let mut seen = vec![false; 27];
    seen[0] = true;
    let mut lon = 0.0;
    while lon < 360.0 {
        let index = Nakshatra::from_longitude(lon).unwrap().index();
        assert!(index >= last, "regression at {lon}");
        assert!(index - last <= 1, "gap at {lon}");
        seen[index as usize] = true;
        last = index;
        lon += 0.1;
    }
    assert!(seen.iter().all(|&s| s), "not all nakshatras visited");
}

#[test]
fn test_partition_invariants_across_day_lengths() {
    // From short winter days to long summer days, the partition is always
    // contiguous, non-overlapping, and spans [sunrise, sunset) exactly.
    let date = NaiveDate::from_ymd_opt(2026, 8, 5).unwrap();
    let day_lengths_min: [i64; 5] = [8 * 60, 10 * 60 + 17, 12 * 60, 13 * 60 + 43, 16 * 60];

    for minutes in day_lengths_min {
        let sunrise = Instant::new(date, chrono::NaiveTime::from_hms_opt(5, 37, 23).unwrap());
        let sunset = sunrise.add_seconds(minutes * 60);
        let intervals = partition_daylight(sunrise, sunset).unwrap();

        assert_eq!(intervals.len(), MUHURTA_COUNT);
        assert_eq!(intervals[0].start, sunrise);
        assert_eq!(intervals[MUHURTA_COUNT - 1].end, sunset);
        for pair in intervals.windows(2) {
            assert_eq!(pair[0].end, pair[1].start);
        }

        let expected = (minutes * 60) as f64 / MUHURTA_COUNT as f64;
        for interval in &intervals {
            let d = interval.start.seconds_until(&interval.end) as f64;
            assert!(
                (d - expected).abs() <= 1.0,
                "{minutes}min day, interval {}: {d} vs {expected}",
                interval.ordinal
            );
        }
    }
}

#[test]
fn test_documented_scenarios() {
    // sun 280, moon 10 -> Shukla Ashtami.
    let tithi = Tithi::from_longitudes(280.0, 10.0).unwrap();
    assert_eq!(tithi.number(), 8);
    assert_eq!(format!("{tithi}"), "Shukla Ashtami");

    // 06:00-18:00 day: interval 1 is 06:00-06:48, interval 15 is
    // 17:12-18:00.
    let date = NaiveDate::from_ymd_opt(2026, 8, 5).unwrap();
    let sunrise = Instant::new(date, chrono::NaiveTime::from_hms_opt(6, 0, 0).unwrap());
    let sunset = Instant::new(date, chrono::NaiveTime::from_hms_opt(18, 0, 0).unwrap());
    let intervals = partition_daylight(sunrise, sunset).unwrap();
    assert_eq!(intervals[0].end.time(), chrono::NaiveTime::from_hms_opt(6, 48, 0).unwrap());
    assert_eq!(
        intervals[14].start.time(),
        chrono::NaiveTime::from_hms_opt(17, 12, 0).unwrap()
    );
}
