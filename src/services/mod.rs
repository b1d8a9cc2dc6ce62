//! Business logic over the ephemeris boundary: snapshot building,
//! scoring, daily muhurta assembly, and horizon ranking.
//!
//! The functions here are the recommended surface for callers that hold a
//! provider directly; [`crate::api::MuhurtaEngine`] wraps them behind a
//! shared handle.

pub mod muhurtas;
pub mod ranker;
pub mod scoring;
pub mod snapshot;

pub use muhurtas::day_muhurtas;
pub use ranker::{display_slot, rank, CANONICAL_SLOTS};
pub use scoring::{
    phase_aligned, score_band, score_candidate, weekday_bonus, AUSPICIOUS_NAKSHATRAS, SCORE_MAX,
    SCORE_MIN,
};
pub use snapshot::{build_snapshot, BodyPosition, PositionSnapshot};
