//! Provider factory for dependency injection.
//!
//! Builds `Arc<dyn EphemerisProvider>` instances from configuration so the
//! engine depends only on the trait, never on a concrete binding.

use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

use super::{EphemerisProvider, FixedEphemeris, WorkerProvider};
use crate::config::ProviderSettings;
use crate::error::{EngineError, EngineResult};

/// Provider binding selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderType {
    /// Out-of-process worker, one process per query.
    Worker,
    /// Deterministic in-memory double for tests and local development.
    Fixed,
}

impl FromStr for ProviderType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "worker" | "subprocess" => Ok(Self::Worker),
            "fixed" | "local" => Ok(Self::Fixed),
            _ => Err(format!("unknown provider type: {s}")),
        }
    }
}

impl ProviderType {
    /// Get the provider type from the environment.
    ///
    /// Reads `MUHURTA_PROVIDER`; defaults to `Worker` when a worker command
    /// is configured via `MUHURTA_WORKER_CMD`, otherwise `Fixed`.
    pub fn from_env() -> Self {
        if let Ok(val) = std::env::var("MUHURTA_PROVIDER") {
            return val.parse().unwrap_or(Self::Fixed);
        }
        if std::env::var("MUHURTA_WORKER_CMD").is_ok() {
            Self::Worker
        } else {
            Self::Fixed
        }
    }
}

/// Factory for creating ephemeris provider instances.
pub struct ProviderFactory;

impl ProviderFactory {
    /// Create a provider based on type.
    ///
    /// # Arguments
    /// * `provider_type` - Binding to instantiate
    /// * `settings` - Worker settings (required for `Worker`)
    ///
    /// # Returns
    /// * `Ok(Arc<dyn EphemerisProvider>)` on success
    /// * `Err(EngineError::Config)` if the worker binding lacks a command
    pub fn create(
        provider_type: ProviderType,
        settings: Option<&ProviderSettings>,
    ) -> EngineResult<Arc<dyn EphemerisProvider>> {
        match provider_type {
            ProviderType::Worker => {
                let settings = settings.ok_or_else(|| {
                    EngineError::config("worker provider requires [provider] settings")
                })?;
                let command = settings.command.as_deref().ok_or_else(|| {
                    EngineError::config("worker provider requires a command")
                })?;
                let provider = WorkerProvider::new(command)
                    .with_args(settings.args.clone())
                    .with_timeout(Duration::from_secs(settings.timeout_secs));
                Ok(Arc::new(provider))
            }
            ProviderType::Fixed => Ok(Self::create_fixed()),
        }
    }

    /// Create the in-memory deterministic provider.
    pub fn create_fixed() -> Arc<dyn EphemerisProvider> {
        Arc::new(FixedEphemeris::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_provider_type() {
        assert_eq!("worker".parse::<ProviderType>(), Ok(ProviderType::Worker));
        assert_eq!(
            "SUBPROCESS".parse::<ProviderType>(),
            Ok(ProviderType::Worker)
        );
        assert_eq!("fixed".parse::<ProviderType>(), Ok(ProviderType::Fixed));
        assert_eq!("local".parse::<ProviderType>(), Ok(ProviderType::Fixed));
        assert!("oracle".parse::<ProviderType>().is_err());
    }

    #[test]
    fn test_worker_requires_command() {
        let err = ProviderFactory::create(ProviderType::Worker, None).unwrap_err();
        assert!(matches!(err, EngineError::Config { .. }));

        let settings = ProviderSettings::default();
        let err = ProviderFactory::create(ProviderType::Worker, Some(&settings)).unwrap_err();
        assert!(matches!(err, EngineError::Config { .. }));
    }

    #[test]
    fn test_create_worker() {
        let settings = ProviderSettings {
            command: Some("eph-worker".to_string()),
            ..Default::default()
        };
        assert!(ProviderFactory::create(ProviderType::Worker, Some(&settings)).is_ok());
    }

    #[test]
    fn test_create_fixed() {
        let _provider = ProviderFactory::create_fixed();
    }
}
