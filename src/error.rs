//! Error types for the muhurta engine.

use thiserror::Error;

/// Result type for engine operations.
pub type EngineResult<T> = std::result::Result<T, EngineError>;

/// Errors that can occur while computing or ranking muhurats.
///
/// The taxonomy separates programmer-error guards on the pure functions
/// (`InvalidAngle`, `InvalidInstant`) from environmental failures at the
/// ephemeris boundary (`EphemerisUnavailable`, `PartialSnapshot`) and from
/// caller-facing conditions (`InvertedDayWindow`, `UnknownCategory`).
#[derive(Error, Debug)]
pub enum EngineError {
    /// A longitude fed to a pure calendrical function was non-finite or
    /// outside any sane numeric range. Fail fast, do not retry.
    #[error("invalid angle: {value}")]
    InvalidAngle { value: f64 },

    /// A calendar instant could not be represented or converted.
    #[error("invalid instant: {detail}")]
    InvalidInstant { detail: String },

    /// Sunset was not strictly after sunrise for the requested date and
    /// location. Muhurtas cannot be computed; the caller must reject the
    /// location or use a different day model.
    #[error("inverted day window on {date}: sunrise {sunrise} >= sunset {sunset}")]
    InvertedDayWindow {
        date: chrono::NaiveDate,
        sunrise: String,
        sunset: String,
    },

    /// The ephemeris provider could not be reached, crashed, timed out, or
    /// returned output that was not a single valid JSON document.
    #[error("ephemeris unavailable: {detail}")]
    EphemerisUnavailable { detail: String },

    /// One body's longitude query failed while others succeeded. The whole
    /// snapshot is discarded; partial data never escapes.
    #[error("snapshot incomplete: query for {body} failed: {detail}")]
    PartialSnapshot { body: &'static str, detail: String },

    /// The caller asked for an event category key not present in the catalog.
    #[error("unknown event category '{key}' (known: {known})")]
    UnknownCategory { key: String, known: String },

    /// A ranking scan was cancelled between candidate days.
    #[error("ranking cancelled")]
    Cancelled,

    /// Engine configuration could not be read or parsed.
    #[error("configuration error: {detail}")]
    Config { detail: String },

    /// JSON (de)serialization failure on the worker wire.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl EngineError {
    /// Shorthand for an `EphemerisUnavailable` with a formatted detail.
    pub fn unavailable(detail: impl Into<String>) -> Self {
        EngineError::EphemerisUnavailable {
            detail: detail.into(),
        }
    }

    /// Shorthand for a `Config` error with a formatted detail.
    pub fn config(detail: impl Into<String>) -> Self {
        EngineError::Config {
            detail: detail.into(),
        }
    }
}
