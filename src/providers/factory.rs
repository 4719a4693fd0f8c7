use crate::config::{AppConfig, FetchConfig, ProviderConfig};
use crate::error::ImportError;
use crate::providers::{LSportsProvider, RacingApiProvider, RacingDataProvider};

pub struct ProviderFactory;

impl ProviderFactory {
    /// Create a provider instance from configuration
    pub fn create(
        provider_name: &str,
        config: &ProviderConfig,
        fetch: &FetchConfig,
    ) -> Result<Box<dyn RacingDataProvider>, ImportError> {
        // Validate that provider is enabled
        if !config.enabled {
            return Err(ImportError::ProviderError(format!(
                "Provider '{}' is not enabled in configuration",
                provider_name
            )));
        }

        match provider_name {
            "racing_api" => Ok(Box::new(RacingApiProvider::new(config, fetch)?)),
            "lsports" => Ok(Box::new(LSportsProvider::new(config, fetch)?)),
            _ => Err(ImportError::ProviderError(format!(
                "Unknown provider: {}",
                provider_name
            ))),
        }
    }

    /// Create the named provider from the application configuration.
    /// A provider without its own section is created with default settings.
    pub fn from_app_config(
        provider_name: &str,
        config: &AppConfig,
    ) -> Result<Box<dyn RacingDataProvider>, ImportError> {
        Self::create(provider_name, &config.provider(provider_name), &config.fetch)
    }

    /// List all available provider names
    pub fn available_providers() -> Vec<&'static str> {
        vec!["racing_api", "lsports"]
    }
}
