//! Domain value types: time axis, geography, birth profile, event
//! categories, and scored candidates.

pub mod catalog;
pub mod location;
pub mod profile;
pub mod time;

pub use catalog::{CategoryCatalog, EventCategory};
pub use location::GeoPosition;
pub use profile::{BirthProfile, RankParams, ScoredCandidate};
pub use time::{julian_day_number, Instant, JulianDay};
