//! Candidate scoring.
//!
//! Deterministic, side-effect-free desirability score for one instant,
//! event category, and birth profile. Same inputs always produce the same
//! score; no randomness may enter this path.

use chrono::{Datelike, NaiveDate, Weekday};

use super::snapshot::PositionSnapshot;
use crate::error::EngineResult;
use crate::models::{BirthProfile, EventCategory, ScoredCandidate};
use crate::panchanga::Nakshatra;

/// Score floor and ceiling after clamping.
pub const SCORE_MIN: u8 = 10;
pub const SCORE_MAX: u8 = 100;

/// The five nakshatras carrying a flat scoring bonus.
pub const AUSPICIOUS_NAKSHATRAS: [Nakshatra; 5] = [
    Nakshatra::Rohini,
    Nakshatra::Mrigashira,
    Nakshatra::Pushya,
    Nakshatra::Hasta,
    Nakshatra::Revati,
];

/// Weekday bonus table. Purely calendrical, independent of location.
pub const fn weekday_bonus(weekday: Weekday) -> u8 {
    match weekday {
        Weekday::Mon => 15,
        Weekday::Wed => 20,
        Weekday::Thu => 10,
        Weekday::Fri => 15,
        _ => 0,
    }
}

/// Whether the candidate month is phase-aligned with the birth month
/// (same month modulo six).
pub fn phase_aligned(candidate: NaiveDate, birth_month: u32) -> bool {
    (candidate.month() as i64 - birth_month as i64).rem_euclid(6) == 0
}

/// Qualitative band label for a clamped score.
pub const fn score_band(score: u8) -> &'static str {
    if score >= 90 {
        "Exceptionally auspicious"
    } else if score >= 75 {
        "Highly auspicious"
    } else if score >= 60 {
        "Favorable"
    } else if score >= 40 {
        "Mixed"
    } else {
        "Inauspicious"
    }
}

/// Score a candidate instant for an event category and birth profile.
///
/// Base 50; +25 for a favorable tithi; the weekday bonus; +15 for an
/// auspicious nakshatra; +10 for birth-month phase alignment; clamped to
/// [10, 100]. The rationale string records each applied contribution.
pub fn score_candidate(
    snapshot: &PositionSnapshot,
    category: &EventCategory,
    profile: &BirthProfile,
) -> EngineResult<ScoredCandidate> {
    let tithi = snapshot.tithi()?;
    let nakshatra = snapshot.moon_nakshatra();
    let date = snapshot.instant.date();
    let weekday = snapshot.instant.weekday();

    let mut total: u32 = 50;
    let mut rationale = vec!["base 50".to_string()];

    if category.favors_tithi(tithi.number()) {
        total += 25;
        rationale.push(format!("favorable tithi {tithi} (+25)"));
    }

    let day_bonus = weekday_bonus(weekday);
    if day_bonus > 0 {
        total += day_bonus as u32;
        rationale.push(format!("weekday {weekday} (+{day_bonus})"));
    }

    if AUSPICIOUS_NAKSHATRAS.contains(&nakshatra) {
        total += 15;
        rationale.push(format!("auspicious nakshatra {nakshatra} (+15)"));
    }

    if phase_aligned(date, profile.birth_month()) {
        total += 10;
        rationale.push("birth month phase alignment (+10)".to_string());
    }

    let score = total.clamp(SCORE_MIN as u32, SCORE_MAX as u32) as u8;

    Ok(ScoredCandidate {
        date,
        slot: snapshot.instant,
        category: category.key.clone(),
        score,
        description: score_band(score),
        tithi,
        nakshatra,
        rationale: rationale.join("; "),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ephemeris::{Body, FixedEphemeris};
    use crate::models::Instant;
    use crate::services::snapshot::build_snapshot;
    use chrono::NaiveTime;

    fn profile(birth_month: u32) -> BirthProfile {
        BirthProfile::new(
            NaiveDate::from_ymd_opt(1990, birth_month, 15).unwrap(),
            NaiveTime::from_hms_opt(8, 30, 0).unwrap(),
            "Jaipur",
        )
    }

    /// Provider pinned so the snapshot lands on tithi 8 and Rohini.
    fn pinned_provider() -> FixedEphemeris {
        // Zero rates: longitudes are constant whatever the instant.
        // Sun 280, Moon 10 -> elongation 90 -> tithi 8 (Shukla Ashtami).
        // But Moon at 10 deg is Ashwini; move the pair so the elongation
        // stays 90 while the Moon sits in Rohini (40-53.33):
        // Moon 45, Sun 315.
        FixedEphemeris::new()
            .with_body_state(Body::Sun, 315.0, 0.0)
            .with_body_state(Body::Moon, 45.0, 0.0)
    }

    async fn snapshot_at(eph: &FixedEphemeris, instant: Instant) -> PositionSnapshot {
        build_snapshot(eph, &instant, None).await.unwrap()
    }

    #[tokio::test]
    async fn test_full_bonus_clamps_to_100() {
        // 2026-08-05 is a Wednesday (+20); tithi 8 favorable for wedding
        // (+25); Rohini (+15); birth month unaligned (+0) -> 110 -> 100.
        let eph = pinned_provider();
        let instant = Instant::from_ymd_hms(2026, 8, 5, 10, 15, 0).unwrap();
        let snapshot = snapshot_at(&eph, instant).await;

        let category = EventCategory::new("wedding", "Wedding", vec![8]);
        let candidate = score_candidate(&snapshot, &category, &profile(3)).unwrap();

        assert_eq!(candidate.score, 100);
        assert_eq!(candidate.description, "Exceptionally auspicious");
        assert_eq!(candidate.tithi.number(), 8);
        assert_eq!(candidate.nakshatra, Nakshatra::Rohini);
        assert!(candidate.rationale.contains("base 50"));
        assert!(candidate.rationale.contains("(+25)"));
        assert!(candidate.rationale.contains("(+20)"));
        assert!(candidate.rationale.contains("(+15)"));
    }

    #[tokio::test]
    async fn test_phase_alignment_bonus() {
        let eph = pinned_provider();
        // Saturday (no weekday bonus): 2026-08-08.
        let instant = Instant::from_ymd_hms(2026, 8, 8, 10, 15, 0).unwrap();
        let snapshot = snapshot_at(&eph, instant).await;
        let category = EventCategory::new("travel", "Travel", vec![]);

        // August (8) aligned with February (2): (8 - 2) mod 6 == 0.
        let aligned = score_candidate(&snapshot, &category, &profile(2)).unwrap();
        // March birth month is unaligned with August.
        let unaligned = score_candidate(&snapshot, &category, &profile(3)).unwrap();

        assert_eq!(aligned.score, unaligned.score + 10);
        assert!(aligned.rationale.contains("phase alignment"));
        assert!(!unaligned.rationale.contains("phase alignment"));
    }

    #[tokio::test]
    async fn test_floor_clamp() {
        // Park the Moon in Ashlesha (110 deg, not auspicious) with no
        // favorable tithi on a bonus-free weekday: base 50 stays 50.
        let eph = FixedEphemeris::new()
            .with_body_state(Body::Sun, 0.0, 0.0)
            .with_body_state(Body::Moon, 110.0, 0.0);
        let instant = Instant::from_ymd_hms(2026, 8, 8, 6, 0, 0).unwrap();
        let snapshot = snapshot_at(&eph, instant).await;
        let category = EventCategory::new("travel", "Travel", vec![]);
        let candidate = score_candidate(&snapshot, &category, &profile(3)).unwrap();

        assert_eq!(candidate.score, 50);
        assert_eq!(candidate.description, "Mixed");
    }

    #[tokio::test]
    async fn test_deterministic() {
        let eph = pinned_provider();
        let instant = Instant::from_ymd_hms(2026, 8, 5, 10, 15, 0).unwrap();
        let category = EventCategory::new("wedding", "Wedding", vec![8]);

        let a = score_candidate(&snapshot_at(&eph, instant).await, &category, &profile(3)).unwrap();
        let b = score_candidate(&snapshot_at(&eph, instant).await, &category, &profile(3)).unwrap();
        assert_eq!(a.score, b.score);
        assert_eq!(a.rationale, b.rationale);
    }

    #[test]
    fn test_weekday_table() {
        assert_eq!(weekday_bonus(Weekday::Mon), 15);
        assert_eq!(weekday_bonus(Weekday::Tue), 0);
        assert_eq!(weekday_bonus(Weekday::Wed), 20);
        assert_eq!(weekday_bonus(Weekday::Thu), 10);
        assert_eq!(weekday_bonus(Weekday::Fri), 15);
        assert_eq!(weekday_bonus(Weekday::Sat), 0);
        assert_eq!(weekday_bonus(Weekday::Sun), 0);
    }

    #[test]
    fn test_phase_alignment_wraps() {
        let date = NaiveDate::from_ymd_opt(2026, 1, 10).unwrap();
        assert!(phase_aligned(date, 7)); // (1 - 7) mod 6 == 0
        assert!(phase_aligned(date, 1));
        assert!(!phase_aligned(date, 2));
    }

    #[test]
    fn test_score_bands() {
        assert_eq!(score_band(100), "Exceptionally auspicious");
        assert_eq!(score_band(80), "Highly auspicious");
        assert_eq!(score_band(60), "Favorable");
        assert_eq!(score_band(45), "Mixed");
        assert_eq!(score_band(10), "Inauspicious");
    }
}
