//! Public engine surface.
//!
//! [`MuhurtaEngine`] bundles a shared ephemeris provider, the event
//! category catalog, the observer site, and default ranking parameters
//! behind one handle. The free function [`rank_muhurats`] mirrors the
//! engine entry point for callers that hold a provider directly.

use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use chrono::NaiveDate;

use crate::config::{EngineConfig, RankingSettings};
use crate::ephemeris::{EphemerisProvider, ProviderFactory};
use crate::error::EngineResult;
use crate::models::{
    BirthProfile, CategoryCatalog, GeoPosition, Instant, RankParams, ScoredCandidate,
};
use crate::panchanga::MuhurtaInterval;
use crate::services::{self, PositionSnapshot};

/// Engine handle: provider + catalog + site + ranking defaults.
///
/// Cheap to clone (the provider is shared behind an `Arc`); safe to use
/// from concurrent tasks.
#[derive(Clone)]
pub struct MuhurtaEngine {
    provider: Arc<dyn EphemerisProvider>,
    site: GeoPosition,
    catalog: CategoryCatalog,
    ranking: RankingSettings,
}

impl MuhurtaEngine {
    /// Engine with the built-in catalog and default ranking parameters.
    pub fn new(provider: Arc<dyn EphemerisProvider>, site: GeoPosition) -> Self {
        Self {
            provider,
            site,
            catalog: CategoryCatalog::builtin(),
            ranking: RankingSettings::default(),
        }
    }

    /// Build an engine from a parsed configuration: provider binding,
    /// site, ranking defaults, and catalog overrides all come from the
    /// config.
    pub fn from_config(config: &EngineConfig) -> EngineResult<Self> {
        let provider = ProviderFactory::create(config.provider_type()?, Some(&config.provider))?;
        Ok(Self {
            provider,
            site: config.geo()?,
            catalog: config.catalog(),
            ranking: config.ranking,
        })
    }

    /// Replace the category catalog.
    pub fn with_catalog(mut self, catalog: CategoryCatalog) -> Self {
        self.catalog = catalog;
        self
    }

    /// The engine's category catalog.
    pub fn catalog(&self) -> &CategoryCatalog {
        &self.catalog
    }

    /// The engine's default ranking parameters starting at `start_date`.
    pub fn default_params(&self, start_date: NaiveDate) -> RankParams {
        RankParams {
            start_date,
            horizon_days: self.ranking.horizon_days,
            min_score: self.ranking.min_score,
            top_n: self.ranking.top_n,
        }
    }

    /// Rank muhurat candidates for a profile and category key over the
    /// default horizon starting at `start_date`.
    ///
    /// The start date is always supplied by the caller so that identical
    /// requests yield identical rankings.
    pub async fn rank(
        &self,
        profile: &BirthProfile,
        category_key: &str,
        start_date: NaiveDate,
    ) -> EngineResult<Vec<ScoredCandidate>> {
        self.rank_with(profile, category_key, &self.default_params(start_date), None)
            .await
    }

    /// Rank with explicit parameters and an optional cancellation flag
    /// (checked between candidate days).
    pub async fn rank_with(
        &self,
        profile: &BirthProfile,
        category_key: &str,
        params: &RankParams,
        cancel: Option<&AtomicBool>,
    ) -> EngineResult<Vec<ScoredCandidate>> {
        let category = self.catalog.get(category_key)?;
        services::rank(
            self.provider.as_ref(),
            Some(&self.site),
            profile,
            category,
            params,
            cancel,
        )
        .await
    }

    /// The fifteen muhurta intervals of one day at the engine's site.
    pub async fn day_muhurtas(&self, date: NaiveDate) -> EngineResult<Vec<MuhurtaInterval>> {
        services::day_muhurtas(self.provider.as_ref(), date, &self.site).await
    }

    /// Full-roster position snapshot at one instant.
    pub async fn snapshot(&self, instant: &Instant) -> EngineResult<PositionSnapshot> {
        services::build_snapshot(self.provider.as_ref(), instant, Some(&self.site)).await
    }
}

/// Rank muhurat candidates against a provider held by the caller, using
/// the built-in catalog and default parameters.
pub async fn rank_muhurats(
    provider: &dyn EphemerisProvider,
    site: Option<&GeoPosition>,
    profile: &BirthProfile,
    category_key: &str,
    start_date: NaiveDate,
) -> EngineResult<Vec<ScoredCandidate>> {
    let catalog = CategoryCatalog::builtin();
    let category = catalog.get(category_key)?;
    services::rank(
        provider,
        site,
        profile,
        category,
        &RankParams::starting(start_date),
        None,
    )
    .await
}
