//! Out-of-process ephemeris provider.
//!
//! Each query spawns the configured worker command, writes one
//! self-contained JSON request document to its stdin, and parses exactly
//! one JSON response document from its captured stdout. stderr carries
//! diagnostics only and is never parsed as data.
//!
//! Failure contract: a non-zero exit code, unparseable stdout, a spawn
//! failure, or a wall-clock timeout (the child is killed) all surface as
//! `EphemerisUnavailable`. The protocol has no pipelining; one process
//! serves one query.

use std::process::Stdio;
use std::time::Duration;

use async_trait::async_trait;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tokio::io::AsyncWriteExt;
use tokio::process::Command;
use tracing::{debug, warn};

use super::{Body, EphemerisProvider};
use crate::error::{EngineError, EngineResult};
use crate::models::{GeoPosition, Instant};

/// Default per-query wall-clock timeout. Native ephemeris calls can hang
/// on misconfigured data paths, so the timeout is mandatory.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Ephemeris provider that shells out to a worker process per query.
#[derive(Debug, Clone)]
pub struct WorkerProvider {
    command: String,
    args: Vec<String>,
    timeout: Duration,
}

#[derive(Serialize)]
#[serde(tag = "op", rename_all = "snake_case")]
enum WorkerRequest<'a> {
    BodyLongitude {
        jd: f64,
        body: &'static str,
        #[serde(skip_serializing_if = "Option::is_none")]
        geo: Option<&'a GeoPosition>,
    },
    SunRiseSet {
        date: String,
        geo: &'a GeoPosition,
    },
}

#[derive(Deserialize)]
struct LongitudeResponse {
    longitude: Option<f64>,
    error: Option<String>,
}

#[derive(Deserialize)]
struct RiseSetResponse {
    sunrise: Option<String>,
    sunset: Option<String>,
    error: Option<String>,
}

impl WorkerProvider {
    /// Create a provider spawning `command` for each query, with the
    /// default timeout.
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            args: Vec::new(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Fixed arguments passed to the worker before the request is written
    /// to its stdin.
    pub fn with_args(mut self, args: Vec<String>) -> Self {
        self.args = args;
        self
    }

    /// Per-query wall-clock timeout. On expiry the child is killed and the
    /// query fails.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Run one request/response round trip against a fresh worker process.
    async fn round_trip(&self, request: &WorkerRequest<'_>) -> EngineResult<Vec<u8>> {
        let payload = serde_json::to_vec(request)?;

        let mut child = Command::new(&self.command)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| {
                EngineError::unavailable(format!("failed to spawn '{}': {e}", self.command))
            })?;

        let mut stdin = child
            .stdin
            .take()
            .ok_or_else(|| EngineError::unavailable("worker stdin unavailable"))?;
        stdin
            .write_all(&payload)
            .await
            .map_err(|e| EngineError::unavailable(format!("failed to write request: {e}")))?;
        stdin
            .write_all(b"\n")
            .await
            .map_err(|e| EngineError::unavailable(format!("failed to write request: {e}")))?;
        drop(stdin);

        // kill_on_drop tears the child down if the timeout wins the race.
        let output = match tokio::time::timeout(self.timeout, child.wait_with_output()).await {
            Ok(Ok(output)) => output,
            Ok(Err(e)) => {
                return Err(EngineError::unavailable(format!(
                    "failed to collect worker output: {e}"
                )));
            }
            Err(_) => {
                warn!(
                    command = %self.command,
                    timeout_secs = self.timeout.as_secs_f64(),
                    "ephemeris worker timed out; killed"
                );
                return Err(EngineError::unavailable(format!(
                    "worker '{}' timed out after {:?}",
                    self.command, self.timeout
                )));
            }
        };

        if !output.stderr.is_empty() {
            debug!(
                command = %self.command,
                stderr = %String::from_utf8_lossy(&output.stderr),
                "ephemeris worker diagnostics"
            );
        }

        // Exit code 0 is the only case in which stdout may be trusted.
        if !output.status.success() {
            return Err(EngineError::unavailable(format!(
                "worker '{}' exited with {}",
                self.command, output.status
            )));
        }

        Ok(output.stdout)
    }
}

#[async_trait]
impl EphemerisProvider for WorkerProvider {
    async fn body_longitude(
        &self,
        instant: &Instant,
        body: Body,
        geo: Option<&GeoPosition>,
    ) -> EngineResult<qtty::Degrees> {
        let request = WorkerRequest::BodyLongitude {
            jd: instant.to_julian_day().value(),
            body: body.wire_name(),
            geo,
        };
        let stdout = self.round_trip(&request).await?;
        let response: LongitudeResponse = serde_json::from_slice(&stdout).map_err(|e| {
            EngineError::unavailable(format!("worker returned malformed JSON: {e}"))
        })?;

        if let Some(message) = response.error {
            return Err(EngineError::unavailable(format!(
                "worker error for {body}: {message}"
            )));
        }
        let longitude = response
            .longitude
            .ok_or_else(|| EngineError::unavailable("worker response missing 'longitude'"))?;
        if !longitude.is_finite() {
            return Err(EngineError::unavailable(format!(
                "worker returned non-finite longitude for {body}"
            )));
        }
        Ok(qtty::Degrees::new(longitude))
    }

    async fn sun_rise_set(
        &self,
        date: NaiveDate,
        geo: &GeoPosition,
    ) -> EngineResult<(Instant, Instant)> {
        let request = WorkerRequest::SunRiseSet {
            date: date.format("%Y-%m-%d").to_string(),
            geo,
        };
        let stdout = self.round_trip(&request).await?;
        let response: RiseSetResponse = serde_json::from_slice(&stdout).map_err(|e| {
            EngineError::unavailable(format!("worker returned malformed JSON: {e}"))
        })?;

        if let Some(message) = response.error {
            return Err(EngineError::unavailable(format!(
                "worker rise/set error: {message}"
            )));
        }
        let sunrise = response
            .sunrise
            .ok_or_else(|| EngineError::unavailable("worker response missing 'sunrise'"))?;
        let sunset = response
            .sunset
            .ok_or_else(|| EngineError::unavailable("worker response missing 'sunset'"))?;

        let sunrise = Instant::parse_wire(&sunrise)
            .map_err(|e| EngineError::unavailable(format!("bad sunrise instant: {e}")))?;
        let sunset = Instant::parse_wire(&sunset)
            .map_err(|e| EngineError::unavailable(format!("bad sunset instant: {e}")))?;
        Ok((sunrise, sunset))
    }
}
