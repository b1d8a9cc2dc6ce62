//! # Muhurta Engine
//!
//! Temporal auspiciousness engine: finds astrologically favorable time
//! windows ("muhurats") for a person and an event category by combining
//! deterministic calendrical computation with a heuristic scoring
//! function.
//!
//! The pipeline:
//!
//! 1. An injected [`ephemeris::EphemerisProvider`] supplies ecliptic
//!    longitudes and sunrise/sunset instants.
//! 2. [`panchanga`] derives the lunar-calendar quantities (tithi, yoga,
//!    nakshatra) from those longitudes and partitions daylight into the
//!    fifteen traditional muhurta intervals.
//! 3. [`services`] builds per-instant position snapshots, scores candidate
//!    days for an event category and birth profile, and ranks candidates
//!    across a rolling horizon.
//! 4. [`api::MuhurtaEngine`] is the handle UI collaborators call.
//!
//! The engine is a stateless library: every ranking request is recomputed
//! from its inputs, and callers receive either a populated ranked list or
//! an explicit typed failure - never silently substituted values.
//!
//! ## Example
//!
//! ```no_run
//! use chrono::NaiveDate;
//! use muhurta_engine::api::MuhurtaEngine;
//! use muhurta_engine::ephemeris::ProviderFactory;
//! use muhurta_engine::models::{BirthProfile, GeoPosition};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let site = GeoPosition::new(28.6139, 77.2090, None)?;
//! let engine = MuhurtaEngine::new(ProviderFactory::create_fixed(), site);
//!
//! let profile = BirthProfile::new(
//!     NaiveDate::from_ymd_opt(1990, 3, 15).unwrap(),
//!     chrono::NaiveTime::from_hms_opt(8, 30, 0).unwrap(),
//!     "Jaipur, India",
//! );
//! let start = NaiveDate::from_ymd_opt(2026, 8, 5).unwrap();
//! let candidates = engine.rank(&profile, "wedding", start).await?;
//! for c in &candidates {
//!     println!("{} {} score {} ({})", c.date, c.slot.time(), c.score, c.description);
//! }
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod config;
pub mod ephemeris;
pub mod error;
pub mod models;
pub mod panchanga;
pub mod services;

pub use api::{rank_muhurats, MuhurtaEngine};
pub use error::{EngineError, EngineResult};
