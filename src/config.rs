//! Engine configuration file support.
//!
//! Reads `EngineConfig` from TOML: provider binding, observer site,
//! ranking defaults, and optional event-category overrides.
//!
//! ```toml
//! [provider]
//! type = "worker"
//! command = "eph-worker"
//! args = ["--kernel", "de440"]
//! timeout_secs = 10
//!
//! [site]
//! latitude = 28.6139
//! longitude = 77.2090
//!
//! [ranking]
//! horizon_days = 90
//! min_score = 60
//! top_n = 20
//!
//! [[category]]
//! key = "housewarming"
//! name = "Housewarming"
//! favorable_tithi = [2, 3, 5, 10, 11]
//! ```

use std::fs;
use std::path::Path;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::ephemeris::ProviderType;
use crate::error::{EngineError, EngineResult};
use crate::models::{CategoryCatalog, EventCategory, GeoPosition, RankParams};

/// Engine configuration from file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EngineConfig {
    #[serde(default)]
    pub provider: ProviderSettings,
    #[serde(default)]
    pub site: SiteSettings,
    #[serde(default)]
    pub ranking: RankingSettings,
    /// Category overrides; entries replace built-in entries with the same
    /// key and otherwise extend the catalog.
    #[serde(default, rename = "category")]
    pub categories: Vec<EventCategory>,
}

/// Ephemeris provider binding settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderSettings {
    #[serde(rename = "type", default = "default_provider_type")]
    pub provider_type: String,
    /// Worker command; required when type = "worker".
    #[serde(default)]
    pub command: Option<String>,
    #[serde(default)]
    pub args: Vec<String>,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

/// Observer site settings. Defaults to New Delhi.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteSettings {
    #[serde(default = "default_latitude")]
    pub latitude: f64,
    #[serde(default = "default_longitude")]
    pub longitude: f64,
    #[serde(default)]
    pub altitude_m: Option<f64>,
}

/// Default ranking parameters.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RankingSettings {
    #[serde(default = "default_horizon_days")]
    pub horizon_days: u32,
    #[serde(default = "default_min_score")]
    pub min_score: u8,
    #[serde(default = "default_top_n")]
    pub top_n: usize,
}

fn default_provider_type() -> String {
    "fixed".to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

fn default_latitude() -> f64 {
    28.6139
}

fn default_longitude() -> f64 {
    77.2090
}

fn default_horizon_days() -> u32 {
    90
}

fn default_min_score() -> u8 {
    60
}

fn default_top_n() -> usize {
    20
}

impl Default for ProviderSettings {
    fn default() -> Self {
        Self {
            provider_type: default_provider_type(),
            command: None,
            args: Vec::new(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl Default for SiteSettings {
    fn default() -> Self {
        Self {
            latitude: default_latitude(),
            longitude: default_longitude(),
            altitude_m: None,
        }
    }
}

impl Default for RankingSettings {
    fn default() -> Self {
        Self {
            horizon_days: default_horizon_days(),
            min_score: default_min_score(),
            top_n: default_top_n(),
        }
    }
}

impl EngineConfig {
    /// Load configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> EngineResult<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            EngineError::config(format!("cannot read {}: {e}", path.display()))
        })?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn from_toml_str(content: &str) -> EngineResult<Self> {
        toml::from_str(content).map_err(|e| EngineError::config(format!("invalid TOML: {e}")))
    }

    /// The configured provider binding.
    pub fn provider_type(&self) -> EngineResult<ProviderType> {
        self.provider
            .provider_type
            .parse()
            .map_err(EngineError::config)
    }

    /// The observer site as a validated position.
    pub fn geo(&self) -> EngineResult<GeoPosition> {
        GeoPosition::new(self.site.latitude, self.site.longitude, self.site.altitude_m)
    }

    /// The built-in catalog with this configuration's overrides applied.
    pub fn catalog(&self) -> CategoryCatalog {
        let mut catalog = CategoryCatalog::builtin();
        for category in &self.categories {
            catalog.upsert(category.clone());
        }
        catalog
    }

    /// Ranking parameters starting at the given date.
    pub fn rank_params(&self, start_date: NaiveDate) -> RankParams {
        RankParams {
            start_date,
            horizon_days: self.ranking.horizon_days,
            min_score: self.ranking.min_score,
            top_n: self.ranking.top_n,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = EngineConfig::from_toml_str("").unwrap();
        assert_eq!(config.provider.provider_type, "fixed");
        assert_eq!(config.provider.timeout_secs, 10);
        assert_eq!(config.ranking.horizon_days, 90);
        assert_eq!(config.ranking.min_score, 60);
        assert_eq!(config.ranking.top_n, 20);
        assert!(config.geo().is_ok());
        assert_eq!(config.provider_type().unwrap(), ProviderType::Fixed);
    }

    #[test]
    fn test_full_config() {
        let config = EngineConfig::from_toml_str(
            r#"
            [provider]
            type = "worker"
            command = "eph-worker"
            args = ["--kernel", "de440"]
            timeout_secs = 5

            [site]
            latitude = 12.9716
            longitude = 77.5946
            altitude_m = 920.0

            [ranking]
            horizon_days = 30
            min_score = 70
            top_n = 5

            [[category]]
            key = "housewarming"
            name = "Housewarming"
            favorable_tithi = [2, 3, 5, 10, 11]
            "#,
        )
        .unwrap();

        assert_eq!(config.provider_type().unwrap(), ProviderType::Worker);
        assert_eq!(config.provider.command.as_deref(), Some("eph-worker"));
        assert_eq!(config.provider.timeout_secs, 5);
        assert_eq!(config.ranking.horizon_days, 30);

        let catalog = config.catalog();
        assert!(catalog.get("housewarming").is_ok());
        assert!(catalog.get("wedding").is_ok());
    }

    #[test]
    fn test_category_override_replaces_builtin() {
        let config = EngineConfig::from_toml_str(
            r#"
            [[category]]
            key = "wedding"
            name = "Wedding"
            favorable_tithi = [3]
            "#,
        )
        .unwrap();
        let catalog = config.catalog();
        let wedding = catalog.get("wedding").unwrap();
        assert_eq!(wedding.favorable_tithi, vec![3]);
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let err = EngineConfig::from_toml_str("provider = (").unwrap_err();
        assert!(matches!(err, EngineError::Config { .. }));
    }

    #[test]
    fn test_bad_site_rejected() {
        let config = EngineConfig::from_toml_str(
            r#"
            [site]
            latitude = 99.0
            longitude = 0.0
            "#,
        )
        .unwrap();
        assert!(config.geo().is_err());
    }

    #[test]
    fn test_missing_file_is_config_error() {
        let err = EngineConfig::from_file("/nonexistent/muhurta.toml").unwrap_err();
        assert!(matches!(err, EngineError::Config { .. }));
    }
}
