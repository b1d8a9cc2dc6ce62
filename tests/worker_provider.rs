//! Worker provider protocol tests using `/bin/sh` stand-in workers.
//!
//! Each stand-in drains stdin (the request document) and then emits a
//! canned response, exercising the full spawn/write/capture/parse cycle
//! and every failure branch of the provider contract.

#![cfg(unix)]

mod support;

use std::time::Duration;

use chrono::NaiveDate;

use muhurta_engine::api::rank_muhurats;
use muhurta_engine::ephemeris::{Body, EphemerisProvider, WorkerProvider};
use muhurta_engine::error::EngineError;
use muhurta_engine::models::Instant;

use support::{test_profile, test_site, test_start_date};

fn sh_worker(script: &str) -> WorkerProvider {
    WorkerProvider::new("/bin/sh").with_args(vec!["-c".to_string(), script.to_string()])
}

fn noon() -> Instant {
    Instant::from_ymd_hms(2026, 8, 5, 12, 0, 0).unwrap()
}

#[tokio::test]
async fn test_successful_longitude_round_trip() {
    let provider = sh_worker(r#"cat >/dev/null; printf '{"longitude": 123.4}'"#);
    let lon = provider
        .body_longitude(&noon(), Body::Moon, None)
        .await
        .unwrap();
    assert!((lon.value() - 123.4).abs() < 1e-9);
}

#[tokio::test]
async fn test_successful_rise_set_round_trip() {
    let provider = sh_worker(
        r#"cat >/dev/null; printf '{"sunrise": "2026-08-05T05:46:12", "sunset": "2026-08-05T19:10:03"}'"#,
    );
    let date = NaiveDate::from_ymd_opt(2026, 8, 5).unwrap();
    let (sunrise, sunset) = provider.sun_rise_set(date, &test_site()).await.unwrap();
    assert_eq!(sunrise, Instant::from_ymd_hms(2026, 8, 5, 5, 46, 12).unwrap());
    assert_eq!(sunset, Instant::from_ymd_hms(2026, 8, 5, 19, 10, 3).unwrap());
}

#[tokio::test]
async fn test_error_response_is_unavailable() {
    let provider = sh_worker(r#"cat >/dev/null; printf '{"error": "kernel not loaded"}'"#);
    let err = provider
        .body_longitude(&noon(), Body::Sun, None)
        .await
        .unwrap_err();
    match err {
        EngineError::EphemerisUnavailable { detail } => {
            assert!(detail.contains("kernel not loaded"))
        }
        other => panic!("expected EphemerisUnavailable, got {other:?}"),
    }
}

#[tokio::test]
async fn test_nonzero_exit_overrides_stdout() {
    // Valid JSON on stdout must be ignored when the worker exits non-zero.
    let provider = sh_worker(r#"cat >/dev/null; printf '{"longitude": 1.0}'; exit 1"#);
    let err = provider
        .body_longitude(&noon(), Body::Sun, None)
        .await
        .unwrap_err();
    assert!(matches!(err, EngineError::EphemerisUnavailable { .. }));
}

#[tokio::test]
async fn test_malformed_stdout_is_unavailable() {
    let provider = sh_worker(r#"cat >/dev/null; echo "this is not json""#);
    let err = provider
        .body_longitude(&noon(), Body::Sun, None)
        .await
        .unwrap_err();
    assert!(matches!(err, EngineError::EphemerisUnavailable { .. }));
}

#[tokio::test]
async fn test_stderr_is_never_parsed_as_data() {
    let provider = sh_worker(
        r#"cat >/dev/null; echo 'diag: loading kernel' >&2; printf '{"longitude": 42.0}'"#,
    );
    let lon = provider
        .body_longitude(&noon(), Body::Mars, None)
        .await
        .unwrap();
    assert!((lon.value() - 42.0).abs() < 1e-9);
}

#[tokio::test]
async fn test_spawn_failure_is_unavailable() {
    let provider = WorkerProvider::new("/nonexistent/eph-worker");
    let err = provider
        .body_longitude(&noon(), Body::Sun, None)
        .await
        .unwrap_err();
    assert!(matches!(err, EngineError::EphemerisUnavailable { .. }));
}

#[tokio::test]
async fn test_hung_worker_times_out() {
    let provider = sh_worker("sleep 30").with_timeout(Duration::from_millis(250));
    let start = std::time::Instant::now();
    let err = provider
        .body_longitude(&noon(), Body::Sun, None)
        .await
        .unwrap_err();
    assert!(matches!(err, EngineError::EphemerisUnavailable { .. }));
    assert!(start.elapsed() < Duration::from_secs(5), "child not killed");
}

#[tokio::test]
async fn test_rank_surfaces_worker_failure() {
    // A ranking request against a crashing worker fails outright; it never
    // returns a partial or fabricated list.
    let provider = sh_worker(r#"cat >/dev/null; exit 1"#);
    let err = rank_muhurats(
        &provider,
        Some(&test_site()),
        &test_profile(),
        "wedding",
        test_start_date(),
    )
    .await
    .unwrap_err();
    assert!(matches!(err, EngineError::EphemerisUnavailable { .. }));
}
